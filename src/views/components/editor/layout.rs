//! Top-level editor chrome: menu bar, inspector, output, preview.

use egui::{CentralPanel, Color32, Context, DragValue, RichText, SidePanel, TopBottomPanel};

use super::inspector::LayerInspector;
use super::output::OutputPanel;
use super::viewport::PreviewViewport;
use crate::export::ExportCache;
use crate::models::presets;
use crate::state::MenuLayout;

pub struct MenuEditorLayout {
    inspector: LayerInspector,
    output: OutputPanel,
    viewport: PreviewViewport,
    preset_index: usize,
}

impl MenuEditorLayout {
    pub fn new() -> Self {
        Self {
            inspector: LayerInspector::new(),
            output: OutputPanel::new(),
            viewport: PreviewViewport::new(),
            preset_index: 0,
        }
    }

    /// Called every frame by the renderer to draw the editor interface.
    pub fn show(&mut self, ctx: &Context, layout: &mut MenuLayout, exports: &ExportCache) {
        TopBottomPanel::top("editor_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("🛠 Menu Editor").strong());
                ui.separator();

                ui.label("Perspective:");
                let mut perspective = layout.perspective();
                if ui
                    .add(
                        DragValue::new(&mut perspective)
                            .speed(1.0)
                            .range(0.0..=1000.0)
                            .suffix("px"),
                    )
                    .changed()
                {
                    layout.update_perspective(perspective);
                }

                ui.separator();

                egui::ComboBox::from_id_salt("preset_select")
                    .selected_text(format!("Settings {}", self.preset_index + 1))
                    .show_ui(ui, |ui| {
                        for index in 0..presets::preset_count() {
                            if ui
                                .selectable_value(
                                    &mut self.preset_index,
                                    index,
                                    format!("Settings {}", index + 1),
                                )
                                .clicked()
                            {
                                layout.apply_preset(index);
                            }
                        }
                    });

                ui.separator();

                if ui.button("Add Layer").clicked() {
                    layout.add_new_layer();
                }
                if ui.button("Hide All").clicked() {
                    layout.hide_all();
                }
                if ui.button("Show All").clicked() {
                    layout.show_all();
                }
                if ui.button("Show Only Selected").clicked() {
                    layout.show_only_selected();
                }
                if ui.button("Flip All").clicked() {
                    layout.flip_all_text();
                }
                if ui.button("Reset config").clicked() {
                    layout.reset_to_defaults();
                }
            });
        });

        SidePanel::left("editor_inspector_panel")
            .resizable(true)
            .default_width(430.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.heading("Layers");
                ui.separator();
                self.inspector.show(ui, layout);
            });

        SidePanel::right("editor_output_panel")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.heading("Output");
                ui.separator();
                self.output.show(ui, exports);
            });

        CentralPanel::default().show(ctx, |ui| {
            egui::Frame::canvas(ui.style())
                .fill(Color32::from_rgb(20, 20, 20))
                .show(ui, |ui| {
                    self.viewport.show(ui, layout);
                });
        });
    }
}
