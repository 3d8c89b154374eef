//! Debounced export text cache.
//!
//! Recomputing the JSON and CSS text on every slider tick is wasteful, so the
//! output panel reads from this cache instead: a state change arms a timer,
//! further changes re-arm it, and the texts are rebuilt only once the state
//! has been quiet for the debounce window.

use std::time::{Duration, Instant};

use crate::export::{css, json};
use crate::models::presets::EXPORT_DEBOUNCE_MS;
use crate::state::MenuLayout;

pub struct ExportCache {
    window: Duration,
    seen_revision: u64,
    rendered_revision: u64,
    changed_at: Option<Instant>,
    json: String,
    css: String,
}

impl ExportCache {
    /// Builds the cache with the texts for the current state, undebounced.
    pub fn new(layout: &MenuLayout) -> Self {
        let mut cache = Self {
            window: Duration::from_millis(EXPORT_DEBOUNCE_MS),
            seen_revision: layout.revision(),
            rendered_revision: layout.revision(),
            changed_at: None,
            json: String::new(),
            css: String::new(),
        };
        cache.rebuild(layout);
        cache
    }

    #[cfg(test)]
    fn with_window(layout: &MenuLayout, window: Duration) -> Self {
        let mut cache = Self::new(layout);
        cache.window = window;
        cache
    }

    /// Observes the current state at time `now`, rebuilding the texts once
    /// the revision has been stable for the debounce window. A revision
    /// change before the window elapses re-arms the timer, cancelling the
    /// pending rebuild.
    pub fn poll(&mut self, layout: &MenuLayout, now: Instant) {
        if layout.revision() != self.seen_revision {
            self.seen_revision = layout.revision();
            self.changed_at = Some(now);
            return;
        }
        if let Some(changed_at) = self.changed_at
            && now.duration_since(changed_at) >= self.window
        {
            self.changed_at = None;
            if self.rendered_revision != self.seen_revision {
                self.rebuild(layout);
            }
        }
    }

    /// Whether a rebuild is armed (used to keep redraws coming while idle).
    pub fn pending(&self) -> bool {
        self.changed_at.is_some()
    }

    pub fn json(&self) -> &str {
        &self.json
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    fn rebuild(&mut self, layout: &MenuLayout) {
        match json::export_config(layout.layers()) {
            Ok(text) => self.json = text,
            // Keep the previous text on a serialization failure.
            Err(err) => log::error!("Config serialization failed: {err}"),
        }
        self.css = css::build_stylesheet(layout.layers());
        self.rendered_revision = layout.revision();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::layer::{FieldValue, LayerField, SettingField};

    const WINDOW: Duration = Duration::from_millis(200);

    fn nudge(layout: &mut MenuLayout, value: f32) {
        layout.update_property(
            0,
            LayerField::Settings(SettingField::TranslateX),
            FieldValue::Scalar(value),
        );
    }

    #[test]
    fn test_initial_texts_are_populated() {
        let layout = MenuLayout::new();
        let cache = ExportCache::new(&layout);
        assert!(cache.json().contains("\"label\""));
        assert!(cache.css().contains(".layer-title-0 {"));
    }

    #[test]
    fn test_no_rebuild_inside_window() {
        let mut layout = MenuLayout::new();
        let mut cache = ExportCache::with_window(&layout, WINDOW);
        let t0 = Instant::now();

        nudge(&mut layout, 25.0);
        cache.poll(&layout, t0);
        cache.poll(&layout, t0 + Duration::from_millis(50));

        assert!(!cache.css().contains("translate(25px"));
        assert!(cache.pending());
    }

    #[test]
    fn test_rebuild_after_window() {
        let mut layout = MenuLayout::new();
        let mut cache = ExportCache::with_window(&layout, WINDOW);
        let t0 = Instant::now();

        nudge(&mut layout, 25.0);
        cache.poll(&layout, t0);
        cache.poll(&layout, t0 + WINDOW);

        assert!(cache.css().contains("translate(25px"));
        assert!(!cache.pending());
    }

    #[test]
    fn test_new_change_cancels_pending_rebuild() {
        let mut layout = MenuLayout::new();
        let mut cache = ExportCache::with_window(&layout, WINDOW);
        let t0 = Instant::now();

        nudge(&mut layout, 25.0);
        cache.poll(&layout, t0);

        // A second edit lands just before the window elapses.
        nudge(&mut layout, 30.0);
        cache.poll(&layout, t0 + Duration::from_millis(190));

        // The original deadline passes: still no rebuild.
        cache.poll(&layout, t0 + Duration::from_millis(210));
        assert!(!cache.css().contains("translate(25px"));
        assert!(!cache.css().contains("translate(30px"));

        // The re-armed window elapses: the latest state is rendered.
        cache.poll(&layout, t0 + Duration::from_millis(390));
        assert!(cache.css().contains("translate(30px"));
    }

    #[test]
    fn test_stable_revision_does_not_rebuild_again() {
        let layout = MenuLayout::new();
        let mut cache = ExportCache::with_window(&layout, WINDOW);
        cache.poll(&layout, Instant::now() + WINDOW * 2);
        assert!(!cache.pending());
    }
}
