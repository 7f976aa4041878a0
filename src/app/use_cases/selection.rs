//! Use-Case-Funktionen für die Mehrfach-Selektion im Projektbaum.

use crate::app::AppState;
use crate::core::NodePath;

/// Selektiert alle Knoten des Projekts.
pub fn select_all(state: &mut AppState) {
    let selected = &mut state.project_view.selected;
    selected.clear();
    for path in state.project.document_order() {
        selected.insert(path);
    }
    log::debug!("{} Knoten selektiert", selected.len());
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.project_view.selected.clear();
}

/// Nimmt einen Knoten in die Selektion auf bzw. entfernt ihn (Ctrl-Klick).
pub fn toggle_node_selected(state: &mut AppState, path: NodePath) {
    if !state.project.contains(path) {
        log::debug!("Selektion: Pfad {} existiert nicht", path);
        return;
    }
    state.project_view.selected.toggle(path);
}

/// Klappt einen Knoten im Baum auf bzw. zu.
pub fn toggle_expanded(state: &mut AppState, path: NodePath) {
    state.project_view.expanded.toggle(path);
}
