//! Live preview viewport.
//!
//! Projects each visible layer through the global perspective and its own
//! transform chain, then paints the result with the egui painter. The
//! projection follows CSS 3D semantics: transforms compose in the order
//! rotateZ, translateX%, rotateX, translateY%, rotateY, translateZpx, are
//! anchored at the transform origin (taken as pixels here), and the
//! perspective scale is d / (d - z) about the stage center.
//!
//! Purely presentational; the exporters are the source of truth for the
//! numbers.

use egui::epaint::TextShape;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2, pos2};
use glam::{Mat4, Vec3};

use crate::models::color::parse_css_color_or_fallback;
use crate::models::layer::LayerConfig;
use crate::state::MenuLayout;

/// The stage models a 200px disc (the space the exported CSS targets);
/// everything is computed there and scaled to the viewport.
const STAGE_SIDE: f32 = 200.0;
const FONT_SIZE: f32 = 15.0;
const PADDING_LEFT: f32 = 6.0;
const PADDING_RIGHT: f32 = 4.0;

const SELECTION_STROKE: Color32 = Color32::from_rgb(66, 133, 244);

pub struct PreviewViewport;

struct ProjectedLayer {
    index: usize,
    corners: [Pos2; 4],
    depth: f32,
    text_pos: Pos2,
    angle: f32,
    text_scale: f32,
    label: String,
    color: Color32,
    bg: Color32,
    selected: bool,
    origin_marker: Option<Pos2>,
}

impl PreviewViewport {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut Ui, layout: &mut MenuLayout) {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, Sense::click());

        let side = (available.x.min(available.y) * 0.8).max(1.0);
        let stage = Rect::from_center_size(response.rect.center(), Vec2::splat(side));
        let scale = side / STAGE_SIDE;

        painter.circle_filled(
            stage.center(),
            side / 2.0,
            Color32::from_rgba_unmultiplied(0, 0, 0, 128),
        );
        // z = 0 marker at the perspective origin.
        painter.circle_filled(stage.center(), 4.0 * scale, Color32::from_rgb(40, 90, 220));

        if layout.layers().iter().all(|layer| !layer.visible) {
            painter.text(
                stage.center(),
                Align2::CENTER_CENTER,
                "No visible layers",
                FontId::proportional(14.0),
                Color32::from_gray(120),
            );
        }

        let depth_of_field = layout.perspective() * scale;

        let mut projected: Vec<ProjectedLayer> = layout
            .layers()
            .iter()
            .enumerate()
            .filter(|(_, layer)| layer.visible)
            .filter_map(|(index, layer)| {
                project_layer(&painter, layer, index, stage, scale, depth_of_field)
            })
            .collect();

        // Far layers first so near ones overdraw them.
        projected.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        for item in &projected {
            self.draw_layer(&painter, item);
        }

        if response.clicked()
            && let Some(pointer) = response.interact_pointer_pos()
        {
            let hit = projected
                .iter()
                .rev()
                .find(|item| polygon_contains(&item.corners, pointer));
            if let Some(item) = hit {
                layout.toggle_selected(item.index);
            }
        }
    }

    fn draw_layer(&self, painter: &egui::Painter, item: &ProjectedLayer) {
        let stroke = if item.selected {
            Stroke::new(2.0, SELECTION_STROKE)
        } else {
            Stroke::new(1.0, Color32::from_gray(70))
        };
        painter.add(Shape::convex_polygon(
            item.corners.to_vec(),
            item.bg,
            stroke,
        ));

        let font = FontId::proportional((FONT_SIZE * item.text_scale).max(1.0));
        let galley = painter.layout_no_wrap(item.label.clone(), font, item.color);
        let mut text = TextShape::new(item.text_pos, galley, item.color);
        text.angle = item.angle;
        painter.add(Shape::Text(text));

        if item.selected
            && let Some(origin) = item.origin_marker
        {
            painter.circle_filled(origin, 3.0, Color32::RED);
            painter.circle_stroke(origin, 3.0, Stroke::new(1.0, Color32::WHITE));
        }
    }
}

fn project_layer(
    painter: &egui::Painter,
    layer: &LayerConfig,
    index: usize,
    stage: Rect,
    scale: f32,
    depth_of_field: f32,
) -> Option<ProjectedLayer> {
    let s = &layer.layer_settings;
    let color = parse_css_color_or_fallback(&layer.color);
    let bg = parse_css_color_or_fallback(&layer.bg);

    // Mirrored text approximated by reversing the glyph order.
    let label = if layer.is_text_flipped {
        layer.label.chars().rev().collect()
    } else {
        layer.label.clone()
    };

    let measure = painter.layout_no_wrap(
        label.clone(),
        FontId::proportional(FONT_SIZE * scale),
        color,
    );
    let width = measure.size().x + (PADDING_LEFT + PADDING_RIGHT) * scale;
    let height = measure.size().y;

    let origin = Vec3::new(
        s.transform_origin_x * scale,
        s.transform_origin_y * scale,
        s.transform_origin_z * scale,
    );
    // Percent translations are relative to the element's own box.
    let chain = Mat4::from_rotation_z(s.rotate_z.to_radians())
        * Mat4::from_translation(Vec3::new(s.translate_x / 100.0 * width, 0.0, 0.0))
        * Mat4::from_rotation_x(s.rotate_x.to_radians())
        * Mat4::from_translation(Vec3::new(0.0, s.translate_y / 100.0 * height, 0.0))
        * Mat4::from_rotation_y(s.rotate_y.to_radians())
        * Mat4::from_translation(Vec3::new(0.0, 0.0, s.translate_z * scale));
    let transform =
        Mat4::from_translation(origin) * chain * Mat4::from_translation(-origin);

    let anchor = Vec3::new(
        stage.min.x + s.left / 100.0 * stage.width(),
        stage.min.y + s.top / 100.0 * stage.height(),
        0.0,
    );
    let center = stage.center();
    let world = |local: Vec3| anchor + transform.transform_point3(local);
    let project = |point: Vec3| -> Option<Pos2> {
        if depth_of_field <= f32::EPSILON {
            return Some(pos2(point.x, point.y));
        }
        let denom = depth_of_field - point.z;
        // Behind the eye; drop the whole layer rather than draw garbage.
        if denom <= 1.0 {
            return None;
        }
        let factor = depth_of_field / denom;
        Some(pos2(
            center.x + (point.x - center.x) * factor,
            center.y + (point.y - center.y) * factor,
        ))
    };

    let locals = [
        Vec3::ZERO,
        Vec3::new(width, 0.0, 0.0),
        Vec3::new(width, height, 0.0),
        Vec3::new(0.0, height, 0.0),
    ];
    let mut corners = [Pos2::ZERO; 4];
    let mut depth = 0.0;
    for (slot, local) in corners.iter_mut().zip(locals) {
        let point = world(local);
        depth += point.z / 4.0;
        *slot = project(point)?;
    }

    let top_edge = corners[1] - corners[0];
    let angle = top_edge.angle();
    let text_scale = (top_edge.length() / width.max(1.0)) * scale;
    let text_pos = project(world(Vec3::new(PADDING_LEFT * scale, 0.0, 0.0)))?;

    let origin_marker = project(world(Vec3::new(
        s.transform_origin_x * scale,
        s.transform_origin_y * scale,
        0.0,
    )));

    Some(ProjectedLayer {
        index,
        corners,
        depth,
        text_pos,
        angle,
        text_scale,
        label,
        color,
        bg,
        selected: layer.selected,
        origin_marker,
    })
}

fn polygon_contains(corners: &[Pos2; 4], point: Pos2) -> bool {
    let mut inside = false;
    let mut j = corners.len() - 1;
    for i in 0..corners.len() {
        let (a, b) = (corners[i], corners[j]);
        if (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
