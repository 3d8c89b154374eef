//! Output panel - exportable JSON config and CSS stylesheet.
//!
//! The texts come from the debounced [`ExportCache`], not from the live
//! state, so rapid slider edits do not retemplate on every tick.

use egui::{CollapsingHeader, FontId, TextStyle, Ui};

use crate::export::ExportCache;

pub struct OutputPanel;

impl OutputPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut Ui, exports: &ExportCache) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            CollapsingHeader::new("Config settings")
                .default_open(true)
                .show(ui, |ui| {
                    if ui.button("Copy Config").clicked() {
                        ui.ctx().copy_text(exports.json().to_owned());
                    }
                    readonly_text(ui, "config_json", exports.json());
                });

            CollapsingHeader::new("CSS styles")
                .default_open(true)
                .show(ui, |ui| {
                    if ui.button("Copy CSS").clicked() {
                        ui.ctx().copy_text(exports.css().to_owned());
                    }
                    readonly_text(ui, "config_css", exports.css());
                });
        });
    }
}

fn readonly_text(ui: &mut Ui, id: &str, text: &str) {
    let mut shown = text;
    ui.push_id(id, |ui| {
        ui.style_mut()
            .text_styles
            .insert(TextStyle::Monospace, FontId::monospace(10.0));
        ui.add(
            egui::TextEdit::multiline(&mut shown)
                .code_editor()
                .desired_rows(12)
                .desired_width(f32::INFINITY),
        );
    });
}
