use std::time::{Duration, Instant};

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Info,
    Error,
}

struct Toast {
    message: String,
    kind: ToastKind,
    created: Instant,
}

/// Short-lived notifications stacked above the status bar. Expired entries
/// are dropped at render time.
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self { toasts: Vec::new() }
    }

    pub fn push_info(&mut self, message: String) {
        self.push(message, ToastKind::Info);
    }

    pub fn push_error(&mut self, message: String) {
        self.push(message, ToastKind::Error);
    }

    fn push(&mut self, message: String, kind: ToastKind) {
        self.toasts.push(Toast {
            message,
            kind,
            created: Instant::now(),
        });
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        self.toasts
            .retain(|toast| toast.created.elapsed() < TOAST_LIFETIME);

        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_area"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -48.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    let color = match toast.kind {
                        ToastKind::Info => egui::Color32::from_gray(45),
                        ToastKind::Error => egui::Color32::from_rgb(120, 40, 40),
                    };
                    egui::Frame::default()
                        .fill(color)
                        .rounding(6.0)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&toast.message).color(egui::Color32::WHITE),
                            );
                        });
                    ui.add_space(6.0);
                }
            });
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}
