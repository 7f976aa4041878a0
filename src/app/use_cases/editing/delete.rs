//! Use-Case: Knoten löschen.

use crate::app::AppState;
use crate::core::Project;

/// Löscht alle selektierten Knoten und leert die Selektion.
///
/// Die Filterung nutzt auf allen drei Ebenen die Indizes vor dem Löschen.
pub fn delete_selection(state: &mut AppState) {
    if state.project_view.selected.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }

    let mut project = Project::clone(&state.project);
    let removed = project.remove_many(state.project_view.selected.paths());
    state.project_view.selected.clear();

    if removed > 0 {
        log::info!("{} Knoten gelöscht", removed);
        state.commit_project(project);
    }
}

/// Löscht den aktiven Knoten und setzt den Aktiv-Zustand zurück.
pub fn delete_active(state: &mut AppState) {
    let Some(path) = state.project_view.active.path else {
        log::debug!("Löschen: kein aktiver Knoten");
        return;
    };

    let mut project = Project::clone(&state.project);
    let removed = project.remove(path);
    state.project_view.active.reset();

    if removed {
        log::info!("Knoten {} gelöscht", path);
        state.commit_project(project);
    }
}
