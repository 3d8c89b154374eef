//! Inspector submodule - common widgets for layer editing

use egui::{Color32, RichText, Slider, Ui};

use crate::models::color::{format_css_color, parse_css_color};

/// Helper to edit a scalar setting with a slider.
pub fn slider_edit(
    ui: &mut Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    suffix: &str,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(Slider::new(value, range).suffix(suffix)).changed()
    })
    .inner
}

/// Helper to edit a CSS color string: free-form text plus a picker swatch.
///
/// The text field accepts anything (named colors included); the swatch only
/// appears when the string parses, and picking a color writes it back as hex.
pub fn css_color_edit(ui: &mut Ui, label: &str, value: &mut String) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed |= ui
            .add(egui::TextEdit::singleline(value).desired_width(80.0))
            .changed();
        if let Some(parsed) = parse_css_color(value) {
            let mut color = parsed;
            if ui.color_edit_button_srgba(&mut color).changed() {
                *value = format_css_color(color);
                changed = true;
            }
        }
    });
    changed
}

/// Section header
pub fn section_header(ui: &mut Ui, title: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(title).strong());
    ui.add_space(4.0);
}

/// Hint text
pub fn hint(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).small().color(Color32::GRAY));
}
