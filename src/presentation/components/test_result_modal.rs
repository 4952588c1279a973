use crate::presentation::i18n::Translator;

pub enum TestResultAction {
    Keep,
    Revert,
}

/// Keep-or-revert decision after a test apply succeeded. There is no cancel:
/// the desktop has already changed, so the user must pick one.
pub struct TestResultModal {
    show: bool,
}

impl TestResultModal {
    pub fn new() -> Self {
        Self { show: false }
    }

    pub fn open(&mut self) {
        self.show = true;
    }

    pub fn close(&mut self) {
        self.show = false;
    }

    pub fn render(&mut self, ctx: &egui::Context, i18n: &Translator) -> Option<TestResultAction> {
        if !self.show {
            return None;
        }

        let mut action = None;

        egui::Window::new(i18n.tr("test_layout_title"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(i18n.tr("test_layout_message"));
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button(i18n.tr("test_layout_keep")).clicked() {
                        action = Some(TestResultAction::Keep);
                    }
                    if ui.button(i18n.tr("test_layout_revert")).clicked() {
                        action = Some(TestResultAction::Revert);
                    }
                });
            });

        action
    }
}

impl Default for TestResultModal {
    fn default() -> Self {
        Self::new()
    }
}
