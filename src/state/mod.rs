//! Layout state container.
//!
//! [`MenuLayout`] is the single source of truth for the composition: the
//! global perspective scalar and the ordered layer collection. All mutation
//! funnels through it under a single-writer discipline. The collection is
//! kept behind an `Arc` and every mutation installs a freshly built vector,
//! so a snapshot handed out before a mutation stays valid and unchanged for
//! as long as the caller holds it.

use std::sync::Arc;

use crate::models::layer::{FieldValue, LayerConfig, LayerField};
use crate::models::presets;

pub struct MenuLayout {
    perspective: f32,
    layers: Arc<Vec<LayerConfig>>,
    revision: u64,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuLayout {
    /// Starts a session from the built-in default composition.
    pub fn new() -> Self {
        Self {
            perspective: presets::DEFAULT_PERSPECTIVE,
            layers: Arc::new(presets::default_layers()),
            revision: 0,
        }
    }

    #[cfg(test)]
    fn from_layers(layers: Vec<LayerConfig>) -> Self {
        Self {
            perspective: presets::DEFAULT_PERSPECTIVE,
            layers: Arc::new(layers),
            revision: 0,
        }
    }

    pub fn perspective(&self) -> f32 {
        self.perspective
    }

    pub fn layers(&self) -> &[LayerConfig] {
        &self.layers
    }

    /// A shared handle to the current collection; stays unchanged across
    /// later mutations.
    pub fn snapshot(&self) -> Arc<Vec<LayerConfig>> {
        Arc::clone(&self.layers)
    }

    /// Monotonic counter identifying distinct states. Bumped once per
    /// mutating call that actually wrote something.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The first selected layer, if any.
    pub fn selected_layer(&self) -> Option<&LayerConfig> {
        self.layers.iter().find(|layer| layer.selected)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.layers.iter().position(|layer| layer.selected)
    }

    pub fn update_perspective(&mut self, value: f32) {
        if self.perspective != value {
            self.perspective = value;
            self.revision += 1;
        }
    }

    /// Sets one field on the layer at `index`. Out-of-range index or a
    /// type-mismatched value is a logged no-op; other layers are never
    /// touched.
    pub fn update_property(&mut self, index: usize, field: LayerField, value: FieldValue) {
        self.update_properties(index, std::iter::once((field, value)));
    }

    /// Applies several field writes to the layer at `index` atomically: one
    /// new collection is installed and the revision is bumped once, so no
    /// reader can observe a partially updated layer.
    pub fn update_properties<I>(&mut self, index: usize, updates: I)
    where
        I: IntoIterator<Item = (LayerField, FieldValue)>,
    {
        if index >= self.layers.len() {
            log::warn!("Layer index {index} out of range, update dropped");
            return;
        }
        let mut layers = (*self.layers).clone();
        let mut wrote = false;
        for (field, value) in updates {
            wrote |= field.set(&mut layers[index], value);
        }
        if wrote {
            self.install(layers);
        }
    }

    /// Recomputes `field` on every layer from `getter(layer, index)` and
    /// installs the result as one new collection. The getter sees the
    /// pre-update layer values throughout.
    pub fn batch_update_property<F>(&mut self, field: LayerField, getter: F)
    where
        F: Fn(&LayerConfig, usize) -> FieldValue,
    {
        if self.layers.is_empty() {
            return;
        }
        let mut layers = (*self.layers).clone();
        let mut wrote = false;
        for (index, layer) in layers.iter_mut().enumerate() {
            let value = getter(&self.layers[index], index);
            wrote |= field.set(layer, value);
        }
        if wrote {
            self.install(layers);
        }
    }

    /// Sets one field on the currently selected layer; no selection, no-op.
    pub fn update_selected_property(&mut self, field: LayerField, value: FieldValue) {
        match self.selected_index() {
            Some(index) => self.update_property(index, field, value),
            None => log::warn!("No layer selected, update dropped"),
        }
    }

    /// Appends `Layer <N+1>` with default colors and transform.
    pub fn add_new_layer(&mut self) {
        let label = format!("Layer {}", self.layers.len() + 1);
        let mut layers = (*self.layers).clone();
        layers.push(LayerConfig::new(label));
        self.install(layers);
    }

    /// Removes the layer at `index`, shifting later layers down. Selection
    /// state of the remaining layers is left as-is.
    pub fn delete_layer_by_index(&mut self, index: usize) {
        if index >= self.layers.len() {
            log::warn!("Layer index {index} out of range, delete dropped");
            return;
        }
        let mut layers = (*self.layers).clone();
        layers.remove(index);
        self.install(layers);
    }

    /// Replaces the whole collection with a deep copy of a built-in preset.
    pub fn apply_preset(&mut self, index: usize) {
        match presets::preset(index) {
            Some(layers) => self.install(layers),
            None => log::warn!("Preset index {index} out of range, ignored"),
        }
    }

    /// Restores color, background, visibility, flip and selection state from
    /// the default template matching each layer's label; the layer's current
    /// transform settings are kept. Layers with no matching template are
    /// left unchanged.
    pub fn reset_to_defaults(&mut self) {
        let defaults = presets::default_layers();
        let mut layers = (*self.layers).clone();
        let mut wrote = false;
        for layer in layers.iter_mut() {
            if let Some(template) = defaults.iter().find(|item| item.label == layer.label) {
                let settings = layer.layer_settings;
                *layer = template.clone();
                layer.layer_settings = settings;
                wrote = true;
            }
        }
        if wrote {
            self.install(layers);
        }
    }

    /// Selects the layer at `index` exclusively.
    pub fn select_only(&mut self, index: usize) {
        self.batch_update_property(LayerField::Selected, |_, i| FieldValue::Flag(i == index));
    }

    /// Preview click behavior: clicking a layer selects it exclusively,
    /// clicking the already-selected layer deselects everything.
    pub fn toggle_selected(&mut self, index: usize) {
        let was_selected = self.layers.get(index).is_some_and(|layer| layer.selected);
        self.batch_update_property(LayerField::Selected, |_, i| {
            FieldValue::Flag(i == index && !was_selected)
        });
    }

    pub fn hide_all(&mut self) {
        self.batch_update_property(LayerField::Visible, |_, _| FieldValue::Flag(false));
    }

    pub fn show_all(&mut self) {
        self.batch_update_property(LayerField::Visible, |_, _| FieldValue::Flag(true));
    }

    pub fn show_only_selected(&mut self) {
        self.batch_update_property(LayerField::Visible, |layer, _| {
            FieldValue::Flag(layer.selected)
        });
    }

    pub fn flip_all_text(&mut self) {
        self.batch_update_property(LayerField::TextFlipped, |layer, _| {
            FieldValue::Flag(!layer.is_text_flipped)
        });
    }

    fn install(&mut self, layers: Vec<LayerConfig>) {
        self.layers = Arc::new(layers);
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::layer::SettingField;

    fn scalar(value: f32) -> FieldValue {
        FieldValue::Scalar(value)
    }

    fn translate_x() -> LayerField {
        LayerField::Settings(SettingField::TranslateX)
    }

    #[test]
    fn test_update_property_sets_only_target_field() {
        let mut layout = MenuLayout::from_layers(vec![
            LayerConfig::new("Layer 1"),
            LayerConfig::new("Layer 2"),
        ]);
        let before_other = layout.layers()[1].clone();

        layout.update_property(0, translate_x(), scalar(25.0));

        assert_eq!(layout.layers()[0].layer_settings.translate_x, 25.0);
        assert_eq!(layout.layers()[0].layer_settings.translate_y, 0.0);
        assert_eq!(layout.layers()[1], before_other);
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let mut layout = MenuLayout::from_layers(vec![LayerConfig::new("Layer 1")]);
        let before = layout.layers().to_vec();
        let revision = layout.revision();

        layout.update_property(5, translate_x(), scalar(25.0));
        layout.delete_layer_by_index(5);

        assert_eq!(layout.layers(), &before[..]);
        assert_eq!(layout.revision(), revision);
    }

    #[test]
    fn test_snapshot_survives_mutation() {
        let mut layout = MenuLayout::from_layers(vec![LayerConfig::new("Layer 1")]);
        let snapshot = layout.snapshot();

        layout.update_property(0, translate_x(), scalar(25.0));

        assert_eq!(snapshot[0].layer_settings.translate_x, 0.0);
        assert_eq!(layout.layers()[0].layer_settings.translate_x, 25.0);
    }

    #[test]
    fn test_update_properties_is_atomic() {
        let mut layout = MenuLayout::from_layers(vec![LayerConfig::new("Layer 1")]);
        let revision = layout.revision();

        layout.update_properties(
            0,
            vec![
                (
                    LayerField::Settings(SettingField::TransformOriginX),
                    scalar(10.0),
                ),
                (
                    LayerField::Settings(SettingField::TransformOriginY),
                    scalar(20.0),
                ),
                (
                    LayerField::Settings(SettingField::TransformOriginZ),
                    scalar(30.0),
                ),
            ],
        );

        let settings = layout.layers()[0].layer_settings;
        assert_eq!(settings.transform_origin_x, 10.0);
        assert_eq!(settings.transform_origin_y, 20.0);
        assert_eq!(settings.transform_origin_z, 30.0);
        assert_eq!(layout.revision(), revision + 1);
    }

    #[test]
    fn test_batch_identity_law() {
        let mut layout = MenuLayout::new();
        layout.update_property(1, LayerField::Visible, FieldValue::Flag(false));
        let before = layout.layers().to_vec();

        layout.batch_update_property(LayerField::Visible, |layer, _| {
            FieldValue::Flag(layer.visible)
        });

        assert_eq!(layout.layers(), &before[..]);
    }

    #[test]
    fn test_hide_all_show_all_is_not_roundtrip_with_mixed_visibility() {
        let mut layout = MenuLayout::from_layers(vec![
            LayerConfig::new("Layer 1"),
            LayerConfig::new("Layer 2"),
        ]);
        layout.update_property(1, LayerField::Visible, FieldValue::Flag(false));
        let mixed = layout.layers().to_vec();

        layout.hide_all();
        layout.show_all();

        assert_ne!(layout.layers(), &mixed[..]);
        assert!(layout.layers().iter().all(|layer| layer.visible));
    }

    #[test]
    fn test_batch_getter_sees_pre_update_values() {
        // Shifting selection down by one must read the old selection flags,
        // not the half-written collection.
        let mut layout = MenuLayout::from_layers(vec![
            LayerConfig::new("Layer 1"),
            LayerConfig::new("Layer 2"),
            LayerConfig::new("Layer 3"),
        ]);
        layout.select_only(0);
        let snapshot = layout.snapshot();

        layout.batch_update_property(LayerField::Selected, |_, i| {
            FieldValue::Flag(i > 0 && snapshot[i - 1].selected)
        });

        let selected: Vec<bool> = layout.layers().iter().map(|l| l.selected).collect();
        assert_eq!(selected, vec![false, true, false]);
    }

    #[test]
    fn test_at_most_one_selected() {
        let mut layout = MenuLayout::new();
        layout.select_only(0);
        layout.select_only(2);
        layout.toggle_selected(1);

        let count = layout.layers().iter().filter(|layer| layer.selected).count();
        assert_eq!(count, 1);
        assert!(layout.layers()[1].selected);
    }

    #[test]
    fn test_toggle_selected_deselects_current() {
        let mut layout = MenuLayout::new();
        layout.toggle_selected(1);
        assert_eq!(layout.selected_index(), Some(1));

        layout.toggle_selected(1);
        assert_eq!(layout.selected_index(), None);
    }

    #[test]
    fn test_update_selected_property_without_selection_is_noop() {
        let mut layout = MenuLayout::from_layers(vec![LayerConfig::new("Layer 1")]);
        let revision = layout.revision();

        layout.update_selected_property(translate_x(), scalar(25.0));

        assert_eq!(layout.revision(), revision);
        assert_eq!(layout.layers()[0].layer_settings.translate_x, 0.0);
    }

    #[test]
    fn test_add_layer_on_empty_collection() {
        let mut layout = MenuLayout::from_layers(Vec::new());
        layout.add_new_layer();

        assert_eq!(layout.layers().len(), 1);
        let layer = &layout.layers()[0];
        assert_eq!(layer.label, "Layer 1");
        assert!(layer.visible);
        assert!(!layer.selected);
    }

    #[test]
    fn test_delete_then_add_does_not_resurrect() {
        let mut layout = MenuLayout::from_layers(vec![LayerConfig::new("Layer 1")]);
        layout.update_property(0, translate_x(), scalar(77.0));
        layout.update_property(0, LayerField::Color, FieldValue::Text("crimson".into()));

        layout.delete_layer_by_index(0);
        layout.add_new_layer();

        let layer = &layout.layers()[0];
        assert_eq!(layer.layer_settings.translate_x, 0.0);
        assert_eq!(layer.color, "black");
    }

    #[test]
    fn test_delete_selected_leaves_no_selection() {
        let mut layout = MenuLayout::new();
        layout.select_only(1);
        layout.delete_layer_by_index(1);

        assert!(layout.selected_layer().is_none());
        assert_eq!(layout.layers().len(), presets::default_layers().len() - 1);
    }

    #[test]
    fn test_apply_preset_replaces_wholesale() {
        let mut layout = MenuLayout::new();
        layout.add_new_layer();
        layout.apply_preset(1);

        assert_eq!(layout.layers(), &presets::preset(1).unwrap()[..]);

        let revision = layout.revision();
        layout.apply_preset(99);
        assert_eq!(layout.revision(), revision);
    }

    #[test]
    fn test_reset_to_defaults_keeps_settings() {
        let mut layout = MenuLayout::new();
        layout.update_property(0, translate_x(), scalar(33.0));
        layout.update_property(0, LayerField::Color, FieldValue::Text("cyan".into()));
        layout.add_new_layer(); // no template matches "Layer 5"

        layout.reset_to_defaults();

        let defaults = presets::default_layers();
        assert_eq!(layout.layers()[0].color, defaults[0].color);
        assert_eq!(layout.layers()[0].layer_settings.translate_x, 33.0);
        assert_eq!(layout.layers().last().unwrap().color, "black");
    }

    #[test]
    fn test_show_only_selected() {
        let mut layout = MenuLayout::new();
        layout.select_only(2);
        layout.show_only_selected();

        for (i, layer) in layout.layers().iter().enumerate() {
            assert_eq!(layer.visible, i == 2);
        }
    }

    #[test]
    fn test_flip_all_toggles_per_layer() {
        let mut layout = MenuLayout::new();
        layout.update_property(0, LayerField::TextFlipped, FieldValue::Flag(true));

        layout.flip_all_text();

        assert!(!layout.layers()[0].is_text_flipped);
        assert!(layout.layers()[1].is_text_flipped);
    }

    #[test]
    fn test_perspective_update_bumps_revision_once() {
        let mut layout = MenuLayout::new();
        let revision = layout.revision();
        layout.update_perspective(250.0);
        layout.update_perspective(250.0);

        assert_eq!(layout.perspective(), 250.0);
        assert_eq!(layout.revision(), revision + 1);
    }
}
