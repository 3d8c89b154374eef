//! Inspector submodule - per-layer visibility, colors, selection.

use egui::{Button, Ui};

use super::common::css_color_edit;
use crate::models::layer::{FieldValue, LayerField};
use crate::state::MenuLayout;

/// One row per layer: visibility, label, colors, flip, select, delete.
///
/// Widgets edit copies taken from a snapshot; anything that changed is pushed
/// back through the state container, so every write goes through the same
/// update path the rest of the editor uses.
pub fn show_layer_rows(ui: &mut Ui, layout: &mut MenuLayout) {
    let snapshot = layout.snapshot();
    let mut deleted = None;

    for (index, layer) in snapshot.iter().enumerate() {
        ui.horizontal(|ui| {
            let mut visible = layer.visible;
            if ui.checkbox(&mut visible, "").changed() {
                layout.update_property(index, LayerField::Visible, FieldValue::Flag(visible));
            }

            let mut label = layer.label.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut label).desired_width(110.0))
                .changed()
            {
                layout.update_property(index, LayerField::Label, FieldValue::Text(label));
            }

            let mut color = layer.color.clone();
            if css_color_edit(ui, "Color", &mut color) {
                layout.update_property(index, LayerField::Color, FieldValue::Text(color));
            }

            let mut bg = layer.bg.clone();
            if css_color_edit(ui, "BG", &mut bg) {
                layout.update_property(index, LayerField::Bg, FieldValue::Text(bg));
            }

            if ui
                .add(Button::new("Flip").selected(layer.is_text_flipped))
                .clicked()
            {
                layout.update_property(
                    index,
                    LayerField::TextFlipped,
                    FieldValue::Flag(!layer.is_text_flipped),
                );
            }

            let select_label = if layer.selected { "Selected" } else { "Select" };
            if ui
                .add_enabled(!layer.selected, Button::new(select_label))
                .clicked()
            {
                layout.select_only(index);
            }

            if ui
                .add_enabled(!layer.selected, Button::new("🗑"))
                .clicked()
            {
                deleted = Some(index);
            }
        });
    }

    if let Some(index) = deleted {
        layout.delete_layer_by_index(index);
    }
}
