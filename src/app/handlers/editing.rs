//! Handler für Projekt-Mutationen (Edit-Menü, Schnitt-Menü, Einstellungen).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CutKind, NodePath, ProjectSettings};

pub fn copy_active(state: &mut AppState) {
    use_cases::editing::copy_active(state);
}

pub fn duplicate_active(state: &mut AppState) {
    use_cases::editing::duplicate_active(state);
}

pub fn paste(state: &mut AppState) {
    use_cases::editing::paste(state);
}

/// Löscht alle selektierten Knoten.
pub fn delete_selection(state: &mut AppState) {
    use_cases::editing::delete_selection(state);
}

/// Löscht den aktiven Knoten.
pub fn delete_active(state: &mut AppState) {
    use_cases::editing::delete_active(state);
}

pub fn add_default_component(state: &mut AppState) {
    use_cases::editing::add_default_component(state);
}

pub fn add_default_board(state: &mut AppState, component: usize) {
    use_cases::editing::add_default_board(state, component);
}

pub fn add_default_cut(state: &mut AppState, component: usize, board: usize, kind: CutKind) {
    use_cases::editing::add_default_cut(state, component, board, kind);
}

pub fn open_cut_menu(state: &mut AppState) {
    use_cases::view::open_cut_menu(state);
}

pub fn close_cut_menu(state: &mut AppState) {
    use_cases::view::close_cut_menu(state);
}

pub fn toggle_transform(state: &mut AppState) {
    use_cases::view::toggle_transform(state);
}

/// Schaltet die Sichtbarkeit eines Knotens um.
pub fn toggle_node_visibility(state: &mut AppState, path: NodePath) {
    use_cases::editing::toggle_node_visibility(state, path);
}

/// Blendet alle Knoten ein bzw. aus.
pub fn set_all_visible(state: &mut AppState, visible: bool) {
    use_cases::editing::set_all_visible(state, visible);
}

/// Übernimmt geänderte Projekteinstellungen.
pub fn set_project_settings(state: &mut AppState, settings: ProjectSettings) {
    use_cases::editing::set_project_settings(state, settings);
}
