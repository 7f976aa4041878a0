//! Use-Case-Funktionen für den Suchen-Dialog.

use crate::app::state::ActiveTab;
use crate::app::AppState;
use crate::core::{NodePath, Project};

/// Sucht `query` (ohne Groß-/Kleinschreibung) in allen Knotennamen.
///
/// Treffer erscheinen in Dokument-Reihenfolge. Der Suchbegriff wird
/// unverändert verglichen, eine leere Suche liefert daher alle Knoten.
pub fn search(project: &Project, query: &str) -> Vec<NodePath> {
    let needle = query.to_lowercase();
    project
        .document_order()
        .into_iter()
        .filter(|&path| {
            project
                .node_name(path)
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Öffnet den Suchen-Dialog.
pub fn open_find(state: &mut AppState) {
    state.ui.find.open = true;
}

/// Schließt den Suchen-Dialog und verwirft Suchbegriff und Treffer.
pub fn close_find(state: &mut AppState) {
    state.ui.find.close();
}

/// Führt die Suche mit dem aktuellen Suchbegriff aus.
pub fn run_find(state: &mut AppState) {
    let results = search(&state.project, &state.ui.find.query);
    log::debug!("Suche '{}': {} Treffer", state.ui.find.query, results.len());
    state.ui.find.results = results;
}

/// Aktiviert einen Treffer: Panel öffnen (Tab Info falls keiner gesetzt),
/// Vorfahren aufklappen.
pub fn activate_find_result(state: &mut AppState, path: NodePath) {
    if !state.project.contains(path) {
        log::debug!("Suchtreffer {} existiert nicht mehr", path);
        return;
    }

    let active = &mut state.project_view.active;
    active.panel_open = true;
    active.path = Some(path);
    active.tab.get_or_insert(ActiveTab::Info);
    state.project_view.expanded.expand_ancestors(path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CutKind;

    fn project() -> Project {
        let mut project = Project::new_default();
        project.add_default_component();
        project.add_default_board(0);
        project.add_default_cut(0, 0, CutKind::Rabbet);
        project.add_default_component();
        project.components[1].name = "Drawer BOX".to_string();
        project
    }

    #[test]
    fn search_is_case_insensitive_in_document_order() {
        let project = project();
        assert_eq!(
            search(&project, "o"),
            vec![
                NodePath::component(0),
                NodePath::board(0, 0),
                NodePath::component(1),
            ]
        );
        assert_eq!(search(&project, "box"), vec![NodePath::component(1)]);
        assert!(search(&project, "  ").is_empty());
    }

    #[test]
    fn empty_query_lists_every_node_and_whitespace_counts() {
        let project = project();
        assert_eq!(search(&project, ""), project.document_order());
        assert_eq!(search(&project, "").len(), 4);

        assert_eq!(search(&project, "r box"), vec![NodePath::component(1)]);
        assert!(search(&project, "box ").is_empty());
        assert!(search(&project, " board").is_empty());
    }

    #[test]
    fn activating_result_opens_panel_and_expands() {
        let mut state = AppState::new();
        state.commit_project(project());
        state.project_view.active.tab = Some(ActiveTab::Rotation);

        activate_find_result(&mut state, NodePath::cut(0, 0, 0));

        let active = &state.project_view.active;
        assert!(active.panel_open);
        assert_eq!(active.path, Some(NodePath::cut(0, 0, 0)));
        assert_eq!(active.tab, Some(ActiveTab::Rotation));
        assert!(state.project_view.expanded.is_expanded(NodePath::board(0, 0)));
    }
}
