//! CSS color string handling for the preview.
//!
//! The data model stores colors as CSS color strings because that is what the
//! exporters emit verbatim; only the viewport needs an actual color value.

use egui::Color32;

/// Named CSS colors the built-in presets and defaults use.
const NAMED: &[(&str, Color32)] = &[
    ("black", Color32::BLACK),
    ("white", Color32::WHITE),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("cyan", Color32::from_rgb(0, 255, 255)),
    ("magenta", Color32::from_rgb(255, 0, 255)),
    ("gray", Color32::from_rgb(128, 128, 128)),
    ("grey", Color32::from_rgb(128, 128, 128)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("pink", Color32::from_rgb(255, 192, 203)),
    ("crimson", Color32::from_rgb(220, 20, 60)),
    ("transparent", Color32::TRANSPARENT),
];

/// Parses a CSS color string (named color or `#rgb`/`#rrggbb`/`#rrggbbaa`).
pub fn parse_css_color(value: &str) -> Option<Color32> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = value.to_ascii_lowercase();
    NAMED
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, color)| *color)
}

/// Parse with a visible fallback for strings the preview cannot interpret.
pub fn parse_css_color_or_fallback(value: &str) -> Color32 {
    parse_css_color(value).unwrap_or(Color32::from_rgb(128, 128, 128))
}

/// Formats a color back into a `#rrggbb`/`#rrggbbaa` string for the model.
pub fn format_css_color(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == 255 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

fn parse_hex(hex: &str) -> Option<Color32> {
    let nibble = |c: u8| (c as char).to_digit(16).map(|d| d as u8);
    let byte = |hi: u8, lo: u8| Some(nibble(hi)? * 16 + nibble(lo)?);
    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => {
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            Some(Color32::from_rgb(r * 17, g * 17, b * 17))
        }
        6 => Some(Color32::from_rgb(
            byte(bytes[0], bytes[1])?,
            byte(bytes[2], bytes[3])?,
            byte(bytes[4], bytes[5])?,
        )),
        8 => Some(Color32::from_rgba_unmultiplied(
            byte(bytes[0], bytes[1])?,
            byte(bytes[2], bytes[3])?,
            byte(bytes[4], bytes[5])?,
            byte(bytes[6], bytes[7])?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_css_color("black"), Some(Color32::BLACK));
        assert_eq!(parse_css_color("White"), Some(Color32::WHITE));
        assert_eq!(parse_css_color("nonsense"), None);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_css_color("#ff0044"), Some(Color32::from_rgb(255, 0, 68)));
        assert_eq!(parse_css_color("#f04"), Some(Color32::from_rgb(255, 0, 68)));
        assert_eq!(
            parse_css_color("#ff004480"),
            Some(Color32::from_rgba_unmultiplied(255, 0, 68, 128))
        );
        assert_eq!(parse_css_color("#zzz"), None);
    }

    #[test]
    fn test_format_roundtrip() {
        let color = Color32::from_rgb(18, 52, 86);
        assert_eq!(format_css_color(color), "#123456");
        assert_eq!(parse_css_color("#123456"), Some(color));
    }
}
