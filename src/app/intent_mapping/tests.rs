use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{CutKind, NodePath, Project};
use std::sync::Arc;

use super::map_intent_to_commands;

fn state_with_board() -> AppState {
    let mut state = AppState::new();
    let mut project = Project::new_default();
    project.add_default_component();
    project.add_default_board(0);
    state.project = Arc::new(project);
    state
}

#[test]
fn save_requested_maps_to_save_file_without_path() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SaveRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::SaveFile { path: None }));
}

#[test]
fn undo_resets_navigation_before_history_step() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::UndoRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::ResetNavigation));
    assert!(matches!(commands[1], AppCommand::Undo));
}

#[test]
fn delete_prefers_selection_over_active_node() {
    let mut state = state_with_board();
    state.project_view.active.path = Some(NodePath::component(0));

    let commands = map_intent_to_commands(&state, AppIntent::DeleteRequested);
    assert!(matches!(commands[..], [AppCommand::DeleteActive]));

    state.project_view.selected.insert(NodePath::board(0, 0));
    let commands = map_intent_to_commands(&state, AppIntent::DeleteRequested);
    assert!(matches!(commands[..], [AppCommand::DeleteSelection]));
}

#[test]
fn new_depends_on_active_node() {
    let mut state = state_with_board();

    let commands = map_intent_to_commands(&state, AppIntent::NewRequested);
    assert!(matches!(commands[..], [AppCommand::AddDefaultComponent]));

    state.project_view.active.path = Some(NodePath::component(0));
    let commands = map_intent_to_commands(&state, AppIntent::NewRequested);
    assert!(matches!(
        commands[..],
        [AppCommand::AddDefaultBoard { component: 0 }]
    ));

    state.project_view.active.path = Some(NodePath::board(0, 0));
    let commands = map_intent_to_commands(&state, AppIntent::NewRequested);
    assert!(matches!(commands[..], [AppCommand::OpenCutMenu]));

    // Veralteter Pfad fällt auf eine neue Komponente zurück
    state.project_view.active.path = Some(NodePath::component(7));
    let commands = map_intent_to_commands(&state, AppIntent::NewRequested);
    assert!(matches!(commands[..], [AppCommand::AddDefaultComponent]));
}

#[test]
fn cut_kind_without_board_only_closes_menu() {
    let mut state = state_with_board();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::CutKindChosen {
            kind: CutKind::Hole,
        },
    );
    assert!(matches!(commands[..], [AppCommand::CloseCutMenu]));

    state.project_view.active.path = Some(NodePath::board(0, 0));
    let commands = map_intent_to_commands(
        &state,
        AppIntent::CutKindChosen {
            kind: CutKind::Hole,
        },
    );
    assert!(matches!(
        commands[..],
        [
            AppCommand::AddDefaultCut {
                component: 0,
                board: 0,
                kind: CutKind::Hole
            },
            AppCommand::CloseCutMenu
        ]
    ));
}

#[test]
fn visibility_toggle_without_active_node_is_empty() {
    let state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::VisibilityToggleRequested).is_empty());
}
