//! JSON config export.
//!
//! Straight serde_json pretty printing (2-space indent); field order follows
//! struct declaration order, so the output matches the published config
//! format field for field.

use crate::models::layer::LayerConfig;

/// Serializes the full layer collection as pretty-printed JSON.
pub fn export_config(layers: &[LayerConfig]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::presets;

    #[test]
    fn test_round_trip_is_deep_equal() {
        let layers = presets::default_layers();
        let text = export_config(&layers).unwrap();
        let parsed: Vec<LayerConfig> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, layers);
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let layers = vec![LayerConfig::new("Layer 1")];
        let text = export_config(&layers).unwrap();

        assert!(text.contains("\"isTextFlipped\""));
        assert!(text.contains("\"layerSettings\""));
        assert!(text.contains("\"translateX\""));
        assert!(text.contains("\"transformOriginZ\""));
        assert!(!text.contains("translate_x"));
    }

    #[test]
    fn test_two_space_indentation() {
        let layers = vec![LayerConfig::new("Layer 1")];
        let text = export_config(&layers).unwrap();

        assert!(text.starts_with("[\n  {\n    \"label\": \"Layer 1\","));
    }

    #[test]
    fn test_missing_flip_flag_defaults_to_false() {
        // Configs exported before the flip feature existed omit the flag.
        let text = r#"[{
            "label": "OLD",
            "color": "black",
            "bg": "white",
            "visible": true,
            "selected": false,
            "layerSettings": {
                "rotateX": 0, "rotateY": 0, "rotateZ": 0,
                "translateX": 0, "translateY": 0, "translateZ": 0,
                "left": 50, "top": 50,
                "transformOriginX": 0, "transformOriginY": 0, "transformOriginZ": 0
            }
        }]"#;
        let parsed: Vec<LayerConfig> = serde_json::from_str(text).unwrap();
        assert!(!parsed[0].is_text_flipped);
    }
}
