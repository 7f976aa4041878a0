use super::*;
use crate::core::{CutKind, NodePath, Project};

/// c0: b0 (2 Schnitte), b1 ; c1: leer ; c2: b0
fn sample_project() -> Project {
    let mut project = Project::new_default();
    project.add_default_component();
    project.add_default_board(0);
    project.add_default_cut(0, 0, CutKind::Dado);
    project.add_default_cut(0, 0, CutKind::Groove);
    project.add_default_board(0);
    project.add_default_component();
    project.add_default_component();
    project.add_default_board(2);
    project
}

#[test]
fn next_walks_document_order_with_wraparound() {
    let project = sample_project();
    let mut current = None;
    let mut visited = Vec::new();
    for _ in 0..=project.node_count() {
        current = next_path(&project, current);
        visited.push(current.expect("Projekt nicht leer"));
    }

    let mut expected = project.document_order();
    expected.push(NodePath::component(0));
    assert_eq!(visited, expected);
}

#[test]
fn previous_inverts_next_for_every_node() {
    let project = sample_project();
    for path in project.document_order() {
        let next = next_path(&project, Some(path));
        assert_eq!(previous_path(&project, next), Some(path), "von {}", path);
    }
}

#[test]
fn previous_without_active_node_wraps_to_last() {
    let project = sample_project();
    assert_eq!(previous_path(&project, None), Some(NodePath::board(2, 0)));
    assert_eq!(
        previous_path(&project, Some(NodePath::component(0))),
        Some(NodePath::board(2, 0))
    );
}

#[test]
fn empty_project_is_noop() {
    let project = Project::new_default();
    assert_eq!(next_path(&project, None), None);
    assert_eq!(previous_path(&project, Some(NodePath::component(0))), None);
}

#[test]
fn stale_paths_fall_through_without_panic() {
    let project = sample_project();
    assert_eq!(
        next_path(&project, Some(NodePath::cut(0, 0, 7))),
        Some(NodePath::board(0, 1))
    );
    assert_eq!(
        next_path(&project, Some(NodePath::component(9))),
        Some(NodePath::component(0))
    );
    assert_eq!(
        previous_path(&project, Some(NodePath::board(5, 5))),
        Some(NodePath::board(2, 0))
    );
}

#[test]
fn select_next_expands_ancestors() {
    let mut state = AppState::new();
    state.commit_project(sample_project());
    state.project_view.active.path = Some(NodePath::board(0, 0));

    select_next(&mut state);

    assert_eq!(state.project_view.active.path, Some(NodePath::cut(0, 0, 0)));
    assert!(state.project_view.expanded.is_expanded(NodePath::component(0)));
    assert!(state.project_view.expanded.is_expanded(NodePath::board(0, 0)));
}

#[test]
fn reset_navigation_keeps_panel_flag() {
    let mut state = AppState::new();
    state.commit_project(sample_project());
    state.project_view.active.panel_open = true;
    state.project_view.active.path = Some(NodePath::component(0));
    state.project_view.expanded.expand_component(0);
    state.project_view.selected.insert(NodePath::component(1));

    reset_navigation(&mut state);

    assert!(state.project_view.active.panel_open);
    assert!(state.project_view.active.path.is_none());
    assert!(!state.project_view.expanded.is_expanded(NodePath::component(0)));
    assert!(state.project_view.selected.is_empty());
}
