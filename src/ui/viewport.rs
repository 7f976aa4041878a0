//! Viewport-Host: Platzhalter-Fläche für den externen Renderer.
//!
//! Der Viewport zeigt Kamera-, Gitter- und Linealzustand und liefert den
//! Hover-Punkt auf der Bodenebene für die Lineal-Messpunkte.

use crate::app::state::{Axis, GridAxis, Projection, RenderViewState};
use crate::app::{AppIntent, AppState};
use glam::Vec3;

/// Rendert den Viewport in den zentralen Bereich.
pub fn render_viewport(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        let response = ui.allocate_rect(rect, egui::Sense::hover());
        let render = &state.render_view;

        if render.grid.visible {
            paint_grid(ui.painter(), rect, render);
        }

        let hover = response
            .hover_pos()
            .map(|pos| ground_point(rect, pos, render.bounds, render.ruler.snap));
        if hover != render.ruler.hover {
            events.push(AppIntent::RulerHoverChanged { point: hover });
        }

        paint_overlay(ui.painter(), rect, state);
    });

    events
}

/// Projiziert eine Bildschirmposition auf die Bodenebene (Draufsicht).
fn ground_point(rect: egui::Rect, pos: egui::Pos2, bounds: f32, snap: bool) -> Vec3 {
    let scale = bounds / rect.width().min(rect.height()).max(1.0);
    let offset = pos - rect.center();
    let mut point = Vec3::new(offset.x * scale, -offset.y * scale, 0.0);
    if snap {
        point = point.round();
    }
    point
}

fn paint_grid(painter: &egui::Painter, rect: egui::Rect, render: &RenderViewState) {
    const LINES: i32 = 10;
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(60));
    let step = rect.width().min(rect.height()) / (2 * LINES) as f32;
    let center = rect.center();

    for i in -LINES..=LINES {
        let d = i as f32 * step;
        painter.line_segment(
            [
                egui::pos2(center.x + d, rect.top()),
                egui::pos2(center.x + d, rect.bottom()),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.left(), center.y + d),
                egui::pos2(rect.right(), center.y + d),
            ],
            stroke,
        );
    }

    let axis_color = |axis: GridAxis| match axis {
        GridAxis::None => None,
        GridAxis::Primary => Some(egui::Color32::from_rgb(200, 80, 80)),
        GridAxis::Secondary => Some(egui::Color32::from_rgb(80, 180, 80)),
        GridAxis::Tertiary => Some(egui::Color32::from_rgb(80, 120, 220)),
    };
    if let Some(color) = axis_color(render.grid.axis(Axis::X)) {
        painter.hline(rect.x_range(), center.y, egui::Stroke::new(2.0, color));
    }
    if let Some(color) = axis_color(render.grid.axis(Axis::Y)) {
        painter.vline(center.x, rect.y_range(), egui::Stroke::new(2.0, color));
    }
}

fn paint_overlay(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let render = &state.render_view;
    let projection = match render.camera.projection {
        Projection::Perspective => "Perspective",
        Projection::Orthographic => "Orthographic",
    };
    let unit = render.grid.unit.unit_label();
    let mut lines = vec![format!(
        "{projection} | camera ({:.0}, {:.0}, {:.0}) | bounds {:.0} {unit}",
        render.camera.position.x, render.camera.position.y, render.camera.position.z, render.bounds
    )];

    if render.ruler.visible {
        let distance = render
            .ruler
            .distance()
            .map(|d| format!("{d:.2} {unit}"))
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!("Ruler: {distance}"));
    }
    if state.project_view.focused {
        lines.push("Focus mode".to_string());
    }

    painter.text(
        rect.left_top() + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        lines.join("\n"),
        egui::FontId::monospace(12.0),
        egui::Color32::LIGHT_GRAY,
    );
}
