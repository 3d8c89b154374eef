//! Inspector submodule - transform controls for the selected layer.

use egui::Ui;

use super::common::{hint, section_header, slider_edit};
use crate::models::layer::{FieldValue, LayerField, SettingField};
use crate::state::MenuLayout;

struct SliderSpec {
    label: &'static str,
    field: SettingField,
    min: f32,
    max: f32,
    suffix: &'static str,
}

const POSITION: &[SliderSpec] = &[
    SliderSpec {
        label: "Left",
        field: SettingField::Left,
        min: 0.0,
        max: 100.0,
        suffix: "%",
    },
    SliderSpec {
        label: "Top",
        field: SettingField::Top,
        min: 0.0,
        max: 100.0,
        suffix: "%",
    },
];

const TRANSLATE: &[SliderSpec] = &[
    SliderSpec {
        label: "X",
        field: SettingField::TranslateX,
        min: -100.0,
        max: 100.0,
        suffix: "%",
    },
    SliderSpec {
        label: "Y",
        field: SettingField::TranslateY,
        min: -100.0,
        max: 100.0,
        suffix: "%",
    },
    SliderSpec {
        label: "Z",
        field: SettingField::TranslateZ,
        min: -100.0,
        max: 100.0,
        suffix: "px",
    },
];

const ROTATE: &[SliderSpec] = &[
    SliderSpec {
        label: "X",
        field: SettingField::RotateX,
        min: -360.0,
        max: 360.0,
        suffix: "°",
    },
    SliderSpec {
        label: "Y",
        field: SettingField::RotateY,
        min: -360.0,
        max: 360.0,
        suffix: "°",
    },
    SliderSpec {
        label: "Z",
        field: SettingField::RotateZ,
        min: -360.0,
        max: 360.0,
        suffix: "°",
    },
];

const ORIGIN: &[SliderSpec] = &[
    SliderSpec {
        label: "X",
        field: SettingField::TransformOriginX,
        min: -100.0,
        max: 100.0,
        suffix: "%",
    },
    SliderSpec {
        label: "Y",
        field: SettingField::TransformOriginY,
        min: -100.0,
        max: 100.0,
        suffix: "%",
    },
    SliderSpec {
        label: "Z",
        field: SettingField::TransformOriginZ,
        min: -100.0,
        max: 100.0,
        suffix: "%",
    },
];

fn slider_group(ui: &mut Ui, layout: &mut MenuLayout, title: &str, specs: &[SliderSpec]) {
    section_header(ui, title);
    let Some(settings) = layout.selected_layer().map(|layer| layer.layer_settings) else {
        return;
    };
    for spec in specs {
        let mut value = spec.field.get(&settings);
        if slider_edit(ui, spec.label, &mut value, spec.min..=spec.max, spec.suffix) {
            layout.update_selected_property(
                LayerField::Settings(spec.field),
                FieldValue::Scalar(value),
            );
        }
    }
}

/// Transform controls for the currently selected layer.
pub fn show_transform_controls(ui: &mut Ui, layout: &mut MenuLayout) {
    if layout.selected_layer().is_none() {
        ui.add_space(12.0);
        hint(ui, "Select a layer to edit its transform.");
        return;
    }

    slider_group(ui, layout, "📍 Position", POSITION);
    slider_group(ui, layout, "↔ Translate", TRANSLATE);
    slider_group(ui, layout, "🔄 Rotate", ROTATE);
    slider_group(ui, layout, "⚓ Transform Origin", ORIGIN);

    if ui.button("Reset origin").clicked()
        && let Some(index) = layout.selected_index()
    {
        // One atomic update; the preview must never show a half-reset origin.
        layout.update_properties(
            index,
            [
                SettingField::TransformOriginX,
                SettingField::TransformOriginY,
                SettingField::TransformOriginZ,
            ]
            .map(|field| (LayerField::Settings(field), FieldValue::Scalar(0.0))),
        );
    }
    hint(
        ui,
        "Origin anchors rotation and translation; the red dot in the preview.",
    );
}
