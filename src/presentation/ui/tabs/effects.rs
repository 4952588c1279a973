use crate::domain::entities::{ExtensionState, EXTENSIONS};
use crate::presentation::i18n::Translator;
use eframe::egui;
use std::collections::{HashMap, HashSet};

pub enum EffectAction {
    Toggle { uuid: String, enable: bool },
    Install(&'static str),
    OpenSettings(String),
}

pub struct EffectsTab;

impl EffectsTab {
    pub fn show(
        ui: &mut egui::Ui,
        i18n: &Translator,
        states: &HashMap<String, ExtensionState>,
        in_operation: &HashSet<String>,
    ) -> Vec<EffectAction> {
        let mut actions = Vec::new();

        ui.heading(i18n.tr("effects_tab"));
        ui.label(i18n.tr("effects_description"));
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for extension in EXTENSIONS {
                    let state = states.get(extension.uuid);
                    let installed = state.map(|s| s.installed).unwrap_or(false);
                    let enabled = state.map(|s| s.enabled).unwrap_or(false);
                    let busy = in_operation.contains(extension.uuid);

                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(extension.name).strong());
                                ui.label(extension.description);
                            });

                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if busy {
                                        ui.spinner();
                                    } else if !installed {
                                        ui.label(i18n.tr("not_installed"));
                                        if ui.button(i18n.tr("install_extension")).clicked() {
                                            actions.push(EffectAction::Install(extension.url));
                                        }
                                    } else {
                                        let label = if enabled {
                                            i18n.tr("disable")
                                        } else {
                                            i18n.tr("enable")
                                        };
                                        if ui.button(label).clicked() {
                                            actions.push(EffectAction::Toggle {
                                                uuid: extension.uuid.to_string(),
                                                enable: !enabled,
                                            });
                                        }
                                        if extension.has_settings && enabled {
                                            if ui.button(i18n.tr("open_settings")).clicked() {
                                                actions.push(EffectAction::OpenSettings(
                                                    extension.uuid.to_string(),
                                                ));
                                            }
                                        }
                                    }
                                },
                            );
                        });
                    });
                    ui.add_space(6.0);
                }
            });

        actions
    }
}
