use crate::domain::entities::{Layout, LAYOUTS};
use crate::presentation::i18n::Translator;
use eframe::egui;
use std::path::Path;

pub enum LayoutAction {
    Test(&'static Layout),
    Apply(&'static Layout),
}

pub struct LayoutsTab;

impl LayoutsTab {
    pub fn show(
        ui: &mut egui::Ui,
        i18n: &Translator,
        selected: &mut Option<&'static Layout>,
        icon: Option<&Path>,
        applying: bool,
    ) -> Vec<LayoutAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.heading(i18n.tr("select_layout"));
        });
        ui.separator();

        egui::SidePanel::left("layout_list")
            .resizable(false)
            .default_width(180.0)
            .show_inside(ui, |ui| {
                for layout in LAYOUTS {
                    let is_selected = selected.map(|l| l.name == layout.name).unwrap_or(false);
                    if ui.selectable_label(is_selected, layout.name).clicked() {
                        *selected = Some(layout);
                    }
                }
            });

        egui::CentralPanel::default().show_inside(ui, |ui| match *selected {
            Some(layout) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(16.0);
                    ui.heading(layout.name);
                    ui.add_space(8.0);
                    match icon {
                        Some(path) => {
                            ui.add(
                                egui::Image::from_uri(format!("file://{}", path.display()))
                                    .max_height(96.0),
                            );
                        }
                        None => {
                            ui.label(egui::RichText::new(layout.fallback_icon).weak());
                        }
                    }
                    ui.add_space(8.0);
                    ui.label(
                        i18n.tr("description_layout")
                            .replace("{layout}", layout.name),
                    );
                    ui.add_space(16.0);

                    if applying {
                        ui.spinner();
                    } else {
                        ui.horizontal(|ui| {
                            if ui.button(i18n.tr("test_layout")).clicked() {
                                actions.push(LayoutAction::Test(layout));
                            }
                            if ui.button(i18n.tr("apply")).clicked() {
                                actions.push(LayoutAction::Apply(layout));
                            }
                        });
                    }
                });
            }
            None => {
                ui.vertical_centered(|ui| {
                    ui.add_space(32.0);
                    ui.label(i18n.tr("select_layout"));
                });
            }
        });

        actions
    }
}
