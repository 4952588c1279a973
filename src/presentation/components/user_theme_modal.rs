use crate::presentation::i18n::Translator;

pub const USER_THEME_INSTALL_URL: &str = "https://extensions.gnome.org/extension/19/user-themes/";

pub enum UserThemeAction {
    OpenInstallPage,
    Close,
}

/// Shell themes go through the User Themes extension. When it is missing the
/// apply is refused and this modal points at the install page instead.
pub struct UserThemeModal {
    show: bool,
}

impl UserThemeModal {
    pub fn new() -> Self {
        Self { show: false }
    }

    pub fn open(&mut self) {
        self.show = true;
    }

    pub fn close(&mut self) {
        self.show = false;
    }

    pub fn render(&mut self, ctx: &egui::Context, i18n: &Translator) -> Option<UserThemeAction> {
        if !self.show {
            return None;
        }

        let mut action = None;

        egui::Window::new(i18n.tr("shell_theme"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(i18n.tr("user_theme_required"));
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button(i18n.tr("install_user_theme")).clicked() {
                        action = Some(UserThemeAction::OpenInstallPage);
                    }
                    if ui.button(i18n.tr("close")).clicked() {
                        action = Some(UserThemeAction::Close);
                    }
                });
            });

        action
    }
}

impl Default for UserThemeModal {
    fn default() -> Self {
        Self::new()
    }
}
