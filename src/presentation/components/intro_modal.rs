use crate::presentation::i18n::Translator;

pub struct IntroDismissed {
    pub dont_show_again: bool,
}

/// First-run welcome dialog. The checkbox state persists through the settings
/// file once dismissed.
pub struct IntroModal {
    show: bool,
    dont_show_again: bool,
}

impl IntroModal {
    pub fn new() -> Self {
        Self {
            show: false,
            dont_show_again: false,
        }
    }

    pub fn open(&mut self) {
        self.show = true;
    }

    pub fn render(&mut self, ctx: &egui::Context, i18n: &Translator) -> Option<IntroDismissed> {
        if !self.show {
            return None;
        }

        let mut dismissed = None;

        egui::Window::new(i18n.tr("intro_title"))
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(i18n.tr("intro_message"));
                ui.add_space(8.0);
                ui.checkbox(&mut self.dont_show_again, i18n.tr("intro_dont_show"));
                ui.add_space(8.0);

                if ui.button(i18n.tr("close")).clicked() {
                    dismissed = Some(IntroDismissed {
                        dont_show_again: self.dont_show_again,
                    });
                    self.show = false;
                }
            });

        dismissed
    }
}

impl Default for IntroModal {
    fn default() -> Self {
        Self::new()
    }
}
