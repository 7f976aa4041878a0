//! Projektbaum (linke Seitenleiste).

use crate::app::{AppIntent, AppState};
use crate::core::NodePath;

/// Einrückung pro Baumebene in Pixeln.
const INDENT: f32 = 14.0;

/// Rendert den Projektbaum und gibt ausgelöste Intents zurück.
pub fn render_project_tree(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("project_tree")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading(&state.project.name);
            ui.separator();

            if state.project.components.is_empty() {
                ui.weak("Empty project");
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for (c, component) in state.project.components.iter().enumerate() {
                    let path = NodePath::component(c);
                    render_row(ui, state, path, 0, !component.boards.is_empty(), &mut events);
                    if !state.project_view.expanded.is_expanded(path) {
                        continue;
                    }

                    for (b, board) in component.boards.iter().enumerate() {
                        let path = NodePath::board(c, b);
                        render_row(ui, state, path, 1, !board.cuts.is_empty(), &mut events);
                        if !state.project_view.expanded.is_expanded(path) {
                            continue;
                        }

                        for k in 0..board.cuts.len() {
                            render_row(ui, state, NodePath::cut(c, b, k), 2, false, &mut events);
                        }
                    }
                }
            });
        });

    events
}

fn render_row(
    ui: &mut egui::Ui,
    state: &AppState,
    path: NodePath,
    depth: usize,
    has_children: bool,
    events: &mut Vec<AppIntent>,
) {
    let Some(name) = state.project.node_name(path) else {
        return;
    };
    let visible = state.project.is_visible(path).unwrap_or(true);
    let view = &state.project_view;
    let highlighted = view.active.path == Some(path) || view.selected.contains(path);

    ui.horizontal(|ui| {
        ui.add_space(depth as f32 * INDENT);

        if has_children {
            let arrow = if view.expanded.is_expanded(path) {
                "▼"
            } else {
                "▶"
            };
            if ui.small_button(arrow).clicked() {
                events.push(AppIntent::NodeExpandToggled { path });
            }
        } else {
            ui.add_space(INDENT + 4.0);
        }

        let text = if visible {
            egui::RichText::new(name)
        } else {
            egui::RichText::new(name).weak()
        };
        let response = ui.selectable_label(highlighted, text);
        if response.clicked() {
            let additive = ui.input(|i| i.modifiers.command);
            events.push(AppIntent::NodeClicked { path, additive });
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let eye = if visible { "👁" } else { "–" };
            if ui
                .small_button(eye)
                .on_hover_text("Toggle visibility")
                .clicked()
            {
                events.push(AppIntent::NodeVisibilityToggled { path });
            }
        });
    });
}
