//! Use-Case: Knoten hinzufügen, Sichtbarkeit, Projekteinstellungen.

use crate::app::AppState;
use crate::core::{CutKind, NodePath, Project, ProjectSettings};

/// Hängt eine Standard-Komponente an das Projekt an.
pub fn add_default_component(state: &mut AppState) {
    let mut project = Project::clone(&state.project);
    let path = project.add_default_component();
    log::info!("Komponente {} hinzugefügt", path);
    state.commit_project(project);
}

/// Hängt ein Standard-Brett an eine Komponente an.
pub fn add_default_board(state: &mut AppState, component: usize) {
    let mut project = Project::clone(&state.project);
    match project.add_default_board(component) {
        Some(path) => {
            log::info!("Brett {} hinzugefügt", path);
            state.commit_project(project);
        }
        None => log::warn!("Komponente {} existiert nicht", component),
    }
}

/// Hängt einen Standard-Schnitt der Art `kind` an ein Brett an.
pub fn add_default_cut(state: &mut AppState, component: usize, board: usize, kind: CutKind) {
    let mut project = Project::clone(&state.project);
    match project.add_default_cut(component, board, kind) {
        Some(path) => {
            log::info!("{} {} hinzugefügt", kind.label(), path);
            state.commit_project(project);
        }
        None => log::warn!("Brett {} existiert nicht", NodePath::board(component, board)),
    }
}

/// Schaltet die Sichtbarkeit eines Knotens um.
pub fn toggle_node_visibility(state: &mut AppState, path: NodePath) {
    let mut project = Project::clone(&state.project);
    if project.toggle_visible(path) {
        state.commit_project(project);
    } else {
        log::debug!("Sichtbarkeit: Pfad {} existiert nicht", path);
    }
}

/// Blendet alle Knoten ein oder aus.
pub fn set_all_visible(state: &mut AppState, visible: bool) {
    let mut project = Project::clone(&state.project);
    project.set_all_visible(visible);
    log::info!("Alle Knoten {}", if visible { "eingeblendet" } else { "ausgeblendet" });
    state.commit_project(project);
}

/// Übernimmt neue Projekteinstellungen (Einheit, Ausdehnung).
pub fn set_project_settings(state: &mut AppState, settings: ProjectSettings) {
    if settings == state.project.settings {
        return;
    }
    if !settings.bounds.is_finite() || settings.bounds <= 0.0 {
        log::warn!("Ungültige Projekt-Ausdehnung: {}", settings.bounds);
        return;
    }

    let mut project = Project::clone(&state.project);
    project.settings = settings;
    state.commit_project(project);
}
