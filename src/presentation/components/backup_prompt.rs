use crate::presentation::i18n::Translator;

pub enum BackupPromptAction {
    Backup,
    Skip,
    Cancel,
}

/// Asked before the first permanent apply of a session. Skipping continues
/// without a backup; cancelling abandons the apply entirely.
pub struct BackupPrompt {
    show: bool,
}

impl BackupPrompt {
    pub fn new() -> Self {
        Self { show: false }
    }

    pub fn open(&mut self) {
        self.show = true;
    }

    pub fn close(&mut self) {
        self.show = false;
    }

    pub fn render(&mut self, ctx: &egui::Context, i18n: &Translator) -> Option<BackupPromptAction> {
        if !self.show {
            return None;
        }

        let mut action = None;

        egui::Window::new(i18n.tr("backup"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(i18n.tr("backup_before_apply"));
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button(i18n.tr("backup")).clicked() {
                        action = Some(BackupPromptAction::Backup);
                    }
                    if ui.button(i18n.tr("skip")).clicked() {
                        action = Some(BackupPromptAction::Skip);
                    }
                    if ui.button(i18n.tr("cancel")).clicked() {
                        action = Some(BackupPromptAction::Cancel);
                    }
                });
            });

        action
    }
}

impl Default for BackupPrompt {
    fn default() -> Self {
        Self::new()
    }
}
