//! Aktiv-Panel (rechte Seitenleiste) mit Info, Maßen, Position und Rotation.

use crate::app::state::ActiveTab;
use crate::app::{AppIntent, AppState};
use crate::core::{NodeKind, NodePath, Project};
use glam::Vec3;

/// Geometrie eines Knotens für die Anzeige.
struct NodeGeometry {
    dimensions: Option<Vec3>,
    position: Vec3,
    rotation: Vec3,
}

fn node_geometry(project: &Project, path: NodePath) -> Option<NodeGeometry> {
    match path {
        NodePath::Component { component } => project.component(component).map(|c| NodeGeometry {
            dimensions: None,
            position: c.position,
            rotation: c.rotation,
        }),
        NodePath::Board { component, board } => {
            project.board(component, board).map(|b| NodeGeometry {
                dimensions: Some(b.dimensions),
                position: b.position,
                rotation: b.rotation,
            })
        }
        NodePath::Cut {
            component,
            board,
            cut,
        } => project.cut(component, board, cut).map(|c| NodeGeometry {
            dimensions: Some(c.dimensions),
            position: c.position,
            rotation: c.rotation,
        }),
    }
}

fn vector_grid(ui: &mut egui::Ui, id: &str, labels: [&str; 3], value: Vec3, unit: &str) {
    egui::Grid::new(id).num_columns(2).show(ui, |ui| {
        for (label, component) in labels.into_iter().zip(value.to_array()) {
            ui.label(label);
            ui.label(format!("{component:.2} {unit}"));
            ui.end_row();
        }
    });
}

/// Rendert das Aktiv-Panel, solange es geöffnet ist.
pub fn render_active_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = &state.project_view.active;
    if !active.panel_open {
        return events;
    }

    egui::SidePanel::right("active_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in ActiveTab::ALL {
                    if ui
                        .selectable_label(active.tab == Some(tab), tab.label())
                        .clicked()
                    {
                        events.push(AppIntent::ActiveTabRequested { tab });
                    }
                }
            });
            ui.separator();

            let Some(path) = active.path.filter(|&p| state.project.contains(p)) else {
                ui.weak("No active node");
                return;
            };
            let Some(geometry) = node_geometry(&state.project, path) else {
                return;
            };
            let unit = state.project.settings.measurement.unit_label();

            match active.tab.unwrap_or_default() {
                ActiveTab::Info => {
                    let kind = match path.kind() {
                        NodeKind::Component => "Component",
                        NodeKind::Board => "Board",
                        NodeKind::Cut => "Cut",
                    };
                    egui::Grid::new("active_info").num_columns(2).show(ui, |ui| {
                        ui.label("Name");
                        ui.label(state.project.node_name(path).unwrap_or_default());
                        ui.end_row();
                        ui.label("Type");
                        ui.label(kind);
                        ui.end_row();
                        ui.label("Path");
                        ui.label(path.to_string());
                        ui.end_row();
                        ui.label("Visible");
                        ui.label(if state.project.is_visible(path) == Some(true) {
                            "Yes"
                        } else {
                            "No"
                        });
                        ui.end_row();
                    });
                }
                ActiveTab::Dimension => match geometry.dimensions {
                    Some(dimensions) => vector_grid(
                        ui,
                        "active_dimension",
                        ["Length", "Width", "Thickness"],
                        dimensions,
                        unit,
                    ),
                    None => {
                        ui.weak("Components have no dimensions");
                    }
                },
                ActiveTab::Position => {
                    vector_grid(ui, "active_position", ["X", "Y", "Z"], geometry.position, unit)
                }
                ActiveTab::Rotation => {
                    vector_grid(ui, "active_rotation", ["X", "Y", "Z"], geometry.rotation, "°")
                }
            }
        });

    events
}
