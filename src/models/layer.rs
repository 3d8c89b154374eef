//! Layer configuration types.
//!
//! A composition is an ordered list of [`LayerConfig`] values; the index of a
//! layer in that list is its identity (generated CSS selectors are
//! `.layer-title-<index>`). Field names are renamed to camelCase on the wire
//! so exported JSON matches the published config format.

use serde::{Deserialize, Serialize};

/// Per-layer transform state.
///
/// `transform_origin_z` is emitted as a percentage by the CSS generator but
/// consumed as pixels by the live preview; both sides keep that historical
/// unit split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerSettings {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub rotate_z: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub translate_z: f32,
    pub left: f32,
    pub top: f32,
    pub transform_origin_x: f32,
    pub transform_origin_y: f32,
    pub transform_origin_z: f32,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            rotate_z: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
            translate_z: 0.0,
            left: 50.0,
            top: 50.0,
            transform_origin_x: 0.0,
            transform_origin_y: 0.0,
            transform_origin_z: 0.0,
        }
    }
}

/// One positionable, transformable text element in the composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerConfig {
    pub label: String,
    /// Text color, CSS color string ("black", "#ff0044", ...).
    pub color: String,
    /// Background color, CSS color string.
    pub bg: String,
    pub visible: bool,
    pub selected: bool,
    #[serde(default)]
    pub is_text_flipped: bool,
    pub layer_settings: LayerSettings,
}

impl LayerConfig {
    /// A fresh layer with the given label and default everything else.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: "black".to_string(),
            bg: "white".to_string(),
            visible: true,
            selected: false,
            is_text_flipped: false,
            layer_settings: LayerSettings::default(),
        }
    }
}

/// Addressable field of a [`LayerSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    RotateX,
    RotateY,
    RotateZ,
    TranslateX,
    TranslateY,
    TranslateZ,
    Left,
    Top,
    TransformOriginX,
    TransformOriginY,
    TransformOriginZ,
}

impl SettingField {
    pub fn get(&self, settings: &LayerSettings) -> f32 {
        match self {
            SettingField::RotateX => settings.rotate_x,
            SettingField::RotateY => settings.rotate_y,
            SettingField::RotateZ => settings.rotate_z,
            SettingField::TranslateX => settings.translate_x,
            SettingField::TranslateY => settings.translate_y,
            SettingField::TranslateZ => settings.translate_z,
            SettingField::Left => settings.left,
            SettingField::Top => settings.top,
            SettingField::TransformOriginX => settings.transform_origin_x,
            SettingField::TransformOriginY => settings.transform_origin_y,
            SettingField::TransformOriginZ => settings.transform_origin_z,
        }
    }

    pub fn set(&self, settings: &mut LayerSettings, value: f32) {
        match self {
            SettingField::RotateX => settings.rotate_x = value,
            SettingField::RotateY => settings.rotate_y = value,
            SettingField::RotateZ => settings.rotate_z = value,
            SettingField::TranslateX => settings.translate_x = value,
            SettingField::TranslateY => settings.translate_y = value,
            SettingField::TranslateZ => settings.translate_z = value,
            SettingField::Left => settings.left = value,
            SettingField::Top => settings.top = value,
            SettingField::TransformOriginX => settings.transform_origin_x = value,
            SettingField::TransformOriginY => settings.transform_origin_y = value,
            SettingField::TransformOriginZ => settings.transform_origin_z = value,
        }
    }
}

/// Addressable field of a [`LayerConfig`].
///
/// Replaces the dynamic path strings of the config format
/// (`"layerSettings.translateX"` becomes
/// `LayerField::Settings(SettingField::TranslateX)`) so field addressing is
/// checked at compile time instead of parsed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerField {
    Label,
    Color,
    Bg,
    Visible,
    Selected,
    TextFlipped,
    Settings(SettingField),
}

/// A value assignable to a [`LayerField`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Scalar(f32),
}

impl LayerField {
    /// Reads the current value of this field on `layer`.
    pub fn get(&self, layer: &LayerConfig) -> FieldValue {
        match self {
            LayerField::Label => FieldValue::Text(layer.label.clone()),
            LayerField::Color => FieldValue::Text(layer.color.clone()),
            LayerField::Bg => FieldValue::Text(layer.bg.clone()),
            LayerField::Visible => FieldValue::Flag(layer.visible),
            LayerField::Selected => FieldValue::Flag(layer.selected),
            LayerField::TextFlipped => FieldValue::Flag(layer.is_text_flipped),
            LayerField::Settings(field) => FieldValue::Scalar(field.get(&layer.layer_settings)),
        }
    }

    /// Writes `value` to this field on `layer`. Returns `false` (leaving the
    /// layer untouched) when the value kind does not match the field.
    pub fn set(&self, layer: &mut LayerConfig, value: FieldValue) -> bool {
        match (self, value) {
            (LayerField::Label, FieldValue::Text(text)) => layer.label = text,
            (LayerField::Color, FieldValue::Text(text)) => layer.color = text,
            (LayerField::Bg, FieldValue::Text(text)) => layer.bg = text,
            (LayerField::Visible, FieldValue::Flag(flag)) => layer.visible = flag,
            (LayerField::Selected, FieldValue::Flag(flag)) => layer.selected = flag,
            (LayerField::TextFlipped, FieldValue::Flag(flag)) => layer.is_text_flipped = flag,
            (LayerField::Settings(field), FieldValue::Scalar(scalar)) => {
                field.set(&mut layer.layer_settings, scalar);
            }
            (field, value) => {
                log::warn!("Ignoring type-mismatched write of {value:?} to {field:?}");
                return false;
            }
        }
        true
    }
}
