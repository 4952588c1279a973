use crate::presentation::i18n::Translator;

pub enum ConfirmAction {
    Confirm,
    Cancel,
}

/// Shared yes/no dialog. The open caller picks the translation keys, so the
/// same widget backs the restore-backup and quit confirmations.
pub struct ConfirmModal {
    show: bool,
    title_key: &'static str,
    message_key: &'static str,
    confirm_key: &'static str,
}

impl ConfirmModal {
    pub fn new() -> Self {
        Self {
            show: false,
            title_key: "",
            message_key: "",
            confirm_key: "",
        }
    }

    pub fn open(
        &mut self,
        title_key: &'static str,
        message_key: &'static str,
        confirm_key: &'static str,
    ) {
        self.title_key = title_key;
        self.message_key = message_key;
        self.confirm_key = confirm_key;
        self.show = true;
    }

    pub fn close(&mut self) {
        self.show = false;
    }

    pub fn render(&mut self, ctx: &egui::Context, i18n: &Translator) -> Option<ConfirmAction> {
        if !self.show {
            return None;
        }

        let mut action = None;

        egui::Window::new(i18n.tr(self.title_key))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(i18n.tr(self.message_key));
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button(i18n.tr(self.confirm_key)).clicked() {
                        action = Some(ConfirmAction::Confirm);
                    }
                    if ui.button(i18n.tr("cancel")).clicked() {
                        action = Some(ConfirmAction::Cancel);
                    }
                });
            });

        action
    }
}

impl Default for ConfirmModal {
    fn default() -> Self {
        Self::new()
    }
}
