//! Inspector module - layer list and transform editing
//!
//! Submodules:
//! - common: shared widgets (slider_edit, css_color_edit, headers)
//! - layers: per-layer rows (visibility, label, colors, flip, select, delete)
//! - transform: position/translate/rotate/origin sliders for the selection

mod common;
mod layers;
mod transform;

use egui::Ui;

use crate::state::MenuLayout;

pub struct LayerInspector;

impl LayerInspector {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut Ui, layout: &mut MenuLayout) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            common::section_header(ui, "Visibility And Color");
            layers::show_layer_rows(ui, layout);
            ui.separator();
            transform::show_transform_controls(ui, layout);
        });
    }
}
