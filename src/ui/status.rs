//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let project = &state.project;
            ui.label(format!(
                "Project: {} | Nodes: {} | Cutlists: {}",
                project.name,
                state.node_count(),
                project.cutlists.len()
            ));

            ui.separator();

            match state.project_view.active.path {
                Some(path) if project.contains(path) => {
                    ui.label(format!(
                        "Active: {} ({})",
                        project.node_name(path).unwrap_or_default(),
                        path
                    ));
                }
                _ => {
                    ui.label("Active: none");
                }
            }

            ui.separator();

            ui.label(format!("Selected: {}", state.project_view.selected.len()));

            if let Some(ref path) = state.ui.current_file_path {
                ui.separator();
                let filename = std::path::Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                ui.label(format!("File: {}", filename));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(ref session) = state.ui.session_name {
                    ui.weak(format!("Session: {}", session));
                }
            });
        });
    });
}
