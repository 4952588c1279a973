use crate::presentation::i18n::Translator;

pub enum EnableExtensionsAction {
    Enable,
    Cancel,
}

/// Shown when the global extension switch is off. Layouts depend on shell
/// extensions, so applying without flipping the switch would silently do
/// nothing visible.
pub struct EnableExtensionsModal {
    show: bool,
}

impl EnableExtensionsModal {
    pub fn new() -> Self {
        Self { show: false }
    }

    pub fn open(&mut self) {
        self.show = true;
    }

    pub fn close(&mut self) {
        self.show = false;
    }

    pub fn render(
        &mut self,
        ctx: &egui::Context,
        i18n: &Translator,
    ) -> Option<EnableExtensionsAction> {
        if !self.show {
            return None;
        }

        let mut action = None;

        egui::Window::new(i18n.tr("extensions_disabled"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(i18n.tr("extensions_enable_prompt"));
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button(i18n.tr("enable")).clicked() {
                        action = Some(EnableExtensionsAction::Enable);
                    }
                    if ui.button(i18n.tr("cancel")).clicked() {
                        action = Some(EnableExtensionsAction::Cancel);
                    }
                });
            });

        action
    }
}

impl Default for EnableExtensionsModal {
    fn default() -> Self {
        Self::new()
    }
}
