//! Handler für Selektion, Navigation und Suche.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::NodePath;

/// Vergisst aktiven Pfad, Aufklapp-Zustand und Selektion.
pub fn reset_navigation(state: &mut AppState) {
    use_cases::navigation::reset_navigation(state);
}

pub fn select_next(state: &mut AppState) {
    use_cases::navigation::select_next(state);
}

pub fn select_previous(state: &mut AppState) {
    use_cases::navigation::select_previous(state);
}

pub fn select_all(state: &mut AppState) {
    use_cases::selection::select_all(state);
}

pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Setzt den aktiven Knoten (Baum-Klick).
pub fn activate_node(state: &mut AppState, path: NodePath) {
    use_cases::navigation::activate_node(state, path);
}

/// Schaltet einen Knoten in der Mehrfach-Selektion um.
pub fn toggle_node_selected(state: &mut AppState, path: NodePath) {
    use_cases::selection::toggle_node_selected(state, path);
}

pub fn toggle_expanded(state: &mut AppState, path: NodePath) {
    use_cases::selection::toggle_expanded(state, path);
}

pub fn open_find(state: &mut AppState) {
    use_cases::find::open_find(state);
}

pub fn close_find(state: &mut AppState) {
    use_cases::find::close_find(state);
}

pub fn run_find(state: &mut AppState) {
    use_cases::find::run_find(state);
}

/// Aktiviert einen Suchtreffer.
pub fn activate_find_result(state: &mut AppState, path: NodePath) {
    use_cases::find::activate_find_result(state, path);
}
