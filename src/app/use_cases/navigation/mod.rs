//! Use-Case-Funktionen für die Baum-Navigation (nächster/vorheriger Knoten).
//!
//! Die Navigation läuft in Dokument-Reihenfolge (Komponente → Brett → Schnitt)
//! mit Umlauf an beiden Enden. Veraltete Pfade führen in den Umlauf-Zweig.

use crate::app::AppState;
use crate::core::{NodePath, Project};

/// Nachfolger von `current` in Dokument-Reihenfolge.
///
/// Gibt `None` nur für ein Projekt ohne Komponenten zurück.
pub fn next_path(project: &Project, current: Option<NodePath>) -> Option<NodePath> {
    if project.components.is_empty() {
        return None;
    }

    let next = match current {
        None => None,
        Some(NodePath::Component { component }) => project
            .board(component, 0)
            .map(|_| NodePath::board(component, 0))
            .or_else(|| next_component(project, component)),
        Some(NodePath::Board { component, board }) => project
            .cut(component, board, 0)
            .map(|_| NodePath::cut(component, board, 0))
            .or_else(|| next_board(project, component, board)),
        Some(NodePath::Cut {
            component,
            board,
            cut,
        }) => project
            .cut(component, board, cut + 1)
            .map(|_| NodePath::cut(component, board, cut + 1))
            .or_else(|| next_board(project, component, board)),
    };

    Some(next.unwrap_or(NodePath::component(0)))
}

fn next_board(project: &Project, component: usize, board: usize) -> Option<NodePath> {
    project
        .board(component, board + 1)
        .map(|_| NodePath::board(component, board + 1))
        .or_else(|| next_component(project, component))
}

fn next_component(project: &Project, component: usize) -> Option<NodePath> {
    project
        .component(component + 1)
        .map(|_| NodePath::component(component + 1))
}

/// Vorgänger von `current` in Dokument-Reihenfolge.
///
/// Vom ersten Knoten, ohne aktiven Knoten oder bei veraltetem Pfad wird auf
/// den letzten Knoten umgelaufen.
pub fn previous_path(project: &Project, current: Option<NodePath>) -> Option<NodePath> {
    let order = project.document_order();
    let last = *order.last()?;

    let position = current.and_then(|path| order.iter().position(|&p| p == path));
    match position {
        Some(index) if index > 0 => Some(order[index - 1]),
        _ => Some(last),
    }
}

/// Aktiviert den nächsten Knoten und klappt seine Vorfahren auf.
pub fn select_next(state: &mut AppState) {
    let target = next_path(&state.project, state.project_view.active.path);
    apply_target(state, target);
}

/// Aktiviert den vorherigen Knoten und klappt seine Vorfahren auf.
pub fn select_previous(state: &mut AppState) {
    let target = previous_path(&state.project, state.project_view.active.path);
    apply_target(state, target);
}

fn apply_target(state: &mut AppState, target: Option<NodePath>) {
    let Some(target) = target else {
        log::debug!("Navigation: Projekt ist leer");
        return;
    };
    state.project_view.active.path = Some(target);
    state.project_view.expanded.expand_ancestors(target);
}

/// Setzt den aktiven Knoten als einzelnen Fokus (Baum-Klick).
pub fn activate_node(state: &mut AppState, path: NodePath) {
    if !state.project.contains(path) {
        log::debug!("Aktivieren: Pfad {} existiert nicht", path);
        return;
    }
    state.project_view.active.path = Some(path);
}

/// Vergisst aktiven Pfad, Aufklapp-Zustand und Selektion (vor Undo/Redo).
///
/// Das Aktiv-Panel bleibt in seinem Zustand, nur der Tab wird verworfen.
pub fn reset_navigation(state: &mut AppState) {
    let view = &mut state.project_view;
    view.active.path = None;
    view.active.tab = None;
    view.expanded.clear();
    view.selected.clear();
}

#[cfg(test)]
mod tests;
