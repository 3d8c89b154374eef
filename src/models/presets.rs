//! Built-in default composition and named presets.
//!
//! Every accessor constructs fresh values so live state never aliases the
//! built-in templates.

use super::layer::{LayerConfig, LayerSettings};

/// Default viewing distance applied to the whole composition, in pixels.
pub const DEFAULT_PERSPECTIVE: f32 = 500.0;

/// Debounce window for recomputing export text after an edit.
pub const EXPORT_DEBOUNCE_MS: u64 = 200;

fn layer(
    label: &str,
    color: &str,
    bg: &str,
    settings: LayerSettings,
) -> LayerConfig {
    LayerConfig {
        label: label.to_string(),
        color: color.to_string(),
        bg: bg.to_string(),
        visible: true,
        selected: false,
        is_text_flipped: false,
        layer_settings: settings,
    }
}

/// The stylized game-menu composition shown at session start.
pub fn default_layers() -> Vec<LayerConfig> {
    vec![
        layer(
            "NEW GAME",
            "white",
            "crimson",
            LayerSettings {
                rotate_x: 10.0,
                rotate_y: -25.0,
                rotate_z: -8.0,
                translate_x: -30.0,
                translate_y: -60.0,
                translate_z: 40.0,
                left: 48.0,
                top: 30.0,
                transform_origin_x: 0.0,
                transform_origin_y: 50.0,
                transform_origin_z: 0.0,
            },
        ),
        layer(
            "CONTINUE",
            "black",
            "white",
            LayerSettings {
                rotate_x: 10.0,
                rotate_y: -25.0,
                rotate_z: -8.0,
                translate_x: -20.0,
                translate_y: -20.0,
                translate_z: 20.0,
                left: 50.0,
                top: 42.0,
                transform_origin_x: 0.0,
                transform_origin_y: 50.0,
                transform_origin_z: 0.0,
            },
        ),
        layer(
            "CONFIG",
            "black",
            "white",
            LayerSettings {
                rotate_x: 10.0,
                rotate_y: -25.0,
                rotate_z: -8.0,
                translate_x: -10.0,
                translate_y: 20.0,
                translate_z: 0.0,
                left: 52.0,
                top: 54.0,
                transform_origin_x: 0.0,
                transform_origin_y: 50.0,
                transform_origin_z: 0.0,
            },
        ),
        layer(
            "QUIT",
            "white",
            "black",
            LayerSettings {
                rotate_x: 10.0,
                rotate_y: -25.0,
                rotate_z: -8.0,
                translate_x: 0.0,
                translate_y: 60.0,
                translate_z: -20.0,
                left: 54.0,
                top: 66.0,
                transform_origin_x: 0.0,
                transform_origin_y: 50.0,
                transform_origin_z: 0.0,
            },
        ),
    ]
}

/// Alternate composition: layers fanned around the vertical axis.
fn carousel_layers() -> Vec<LayerConfig> {
    let labels = ["NEW GAME", "CONTINUE", "CONFIG", "QUIT"];
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            layer(
                label,
                "white",
                "#1d4ed8",
                LayerSettings {
                    rotate_x: 0.0,
                    rotate_y: -90.0 + 45.0 * i as f32,
                    rotate_z: 0.0,
                    translate_x: 0.0,
                    translate_y: 0.0,
                    translate_z: 80.0,
                    left: 50.0,
                    top: 50.0,
                    transform_origin_x: 50.0,
                    transform_origin_y: 50.0,
                    transform_origin_z: -80.0,
                },
            )
        })
        .collect()
}

/// Alternate composition: flat, untransformed stack (a plain menu).
fn flat_layers() -> Vec<LayerConfig> {
    let labels = ["NEW GAME", "CONTINUE", "CONFIG", "QUIT"];
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            layer(
                label,
                "black",
                "white",
                LayerSettings {
                    top: 32.0 + 12.0 * i as f32,
                    ..LayerSettings::default()
                },
            )
        })
        .collect()
}

/// Number of built-in presets; preset 0 is the default composition.
pub fn preset_count() -> usize {
    3
}

/// A deep copy of the built-in preset at `index`.
pub fn preset(index: usize) -> Option<Vec<LayerConfig>> {
    match index {
        0 => Some(default_layers()),
        1 => Some(carousel_layers()),
        2 => Some(flat_layers()),
        _ => None,
    }
}
