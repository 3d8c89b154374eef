//! Data model: layer configuration, color handling, built-in presets.

pub mod color;
pub mod layer;
pub mod presets;

pub use layer::{FieldValue, LayerConfig, LayerField, LayerSettings, SettingField};
