use crate::domain::entities::{Theme, ThemeKind};
use crate::domain::services::theme_color::accent_color;
use crate::presentation::i18n::Translator;
use eframe::egui;

pub enum ThemeAction {
    Apply { name: String, kind: ThemeKind },
}

pub struct ThemesTab;

impl ThemesTab {
    pub fn show(
        ui: &mut egui::Ui,
        i18n: &Translator,
        sub_tab: &mut ThemeKind,
        themes: &[Theme],
        applying: bool,
    ) -> Vec<ThemeAction> {
        let mut actions = Vec::new();

        ui.heading(i18n.tr("themes_tab"));
        ui.label(i18n.tr("themes_description"));
        ui.separator();

        ui.horizontal(|ui| {
            for (kind, key) in [
                (ThemeKind::Gtk, "gtk_theme"),
                (ThemeKind::Icon, "icon_theme"),
                (ThemeKind::Shell, "shell_theme"),
            ] {
                if ui.selectable_label(*sub_tab == kind, i18n.tr(key)).clicked() {
                    *sub_tab = kind;
                }
            }
        });

        ui.separator();

        let visible: Vec<&Theme> = themes.iter().filter(|t| t.kind == *sub_tab).collect();

        if visible.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(32.0);
                ui.label(i18n.tr("no_themes_found"));
            });
            return actions;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for theme in visible {
                    let (r, g, b) = accent_color(&theme.name);

                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            let (rect, _) = ui
                                .allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::hover());
                            ui.painter().rect_filled(
                                rect,
                                4.0,
                                egui::Color32::from_rgb(r, g, b),
                            );

                            ui.label(egui::RichText::new(&theme.name).strong());

                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if applying {
                                        ui.spinner();
                                    } else if ui.button(i18n.tr("apply_theme")).clicked() {
                                        actions.push(ThemeAction::Apply {
                                            name: theme.name.clone(),
                                            kind: theme.kind,
                                        });
                                    }
                                },
                            );
                        });
                    });
                    ui.add_space(4.0);
                }
            });

        actions
    }
}
