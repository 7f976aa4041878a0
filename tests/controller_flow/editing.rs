use super::common::{run, sample_project, state_with};
use woodcut_editor::{AppCommand, AppController, AppIntent, CutKind, NodePath};

#[test]
fn new_on_empty_project_adds_component_and_can_be_undone() {
    let mut controller = AppController::new();
    let mut state = woodcut_editor::AppState::new();

    run(&mut controller, &mut state, vec![AppIntent::NewRequested]);
    assert_eq!(state.project.components.len(), 1);
    assert_eq!(state.project.components[0].name, "Component 1");
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::AddDefaultComponent)
    ));

    run(&mut controller, &mut state, vec![AppIntent::UndoRequested]);
    assert!(state.project.components.is_empty());
    assert!(state.can_redo());

    run(&mut controller, &mut state, vec![AppIntent::RedoRequested]);
    assert_eq!(state.project.components.len(), 1);
}

#[test]
fn new_on_board_opens_cut_menu_and_chosen_kind_adds_cut() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::NodeClicked {
                path: NodePath::board(0, 1),
                additive: false,
            },
            AppIntent::NewRequested,
        ],
    );
    assert!(state.project_view.cut_menu_open);

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::CutKindChosen {
            kind: CutKind::Mortise,
        }],
    );
    assert!(!state.project_view.cut_menu_open);
    let cuts = &state.project.components[0].boards[1].cuts;
    assert_eq!(cuts.len(), 1);
    assert_eq!(cuts[0].kind, CutKind::Mortise);
    assert_eq!(cuts[0].name, "Mortise 1");
}

#[test]
fn copy_then_paste_into_other_component_appends_copy() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::NodeClicked {
                path: NodePath::board(0, 0),
                additive: false,
            },
            AppIntent::CopyRequested,
            AppIntent::NodeClicked {
                path: NodePath::component(1),
                additive: false,
            },
            AppIntent::PasteRequested,
        ],
    );

    let pasted = &state.project.components[1].boards;
    assert_eq!(pasted.len(), 1);
    assert_eq!(pasted[0].name, "Board 1 (Copy)");
    assert_eq!(pasted[0].cuts.len(), 2);
    // Original bleibt unverändert
    assert_eq!(state.project.components[0].boards[0].name, "Board 1");
}

#[test]
fn paste_cut_without_board_target_changes_nothing() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::NodeClicked {
                path: NodePath::cut(0, 0, 1),
                additive: false,
            },
            AppIntent::CopyRequested,
            AppIntent::NodeClicked {
                path: NodePath::component(1),
                additive: false,
            },
        ],
    );
    let history_len = state.history.len();

    run(&mut controller, &mut state, vec![AppIntent::PasteRequested]);
    assert_eq!(state.history.len(), history_len);
    assert!(state.project.components[1].boards.is_empty());
}

#[test]
fn duplicate_active_cut_lands_in_same_board() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::NodeClicked {
                path: NodePath::cut(0, 0, 0),
                additive: false,
            },
            AppIntent::DuplicateRequested,
        ],
    );

    let cuts = &state.project.components[0].boards[0].cuts;
    assert_eq!(cuts.len(), 3);
    assert_eq!(cuts[2].name, "Dado 1 (Copy)");
}

#[test]
fn delete_selection_removes_nodes_by_original_indices() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::NodeClicked {
                path: NodePath::cut(0, 0, 0),
                additive: true,
            },
            AppIntent::NodeClicked {
                path: NodePath::cut(0, 0, 1),
                additive: true,
            },
            AppIntent::NodeClicked {
                path: NodePath::component(1),
                additive: true,
            },
            AppIntent::DeleteRequested,
        ],
    );

    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::DeleteSelection)
    ));
    assert!(state.project_view.selected.is_empty());
    assert_eq!(state.project.components.len(), 1);
    assert!(state.project.components[0].boards[0].cuts.is_empty());
    assert_eq!(state.project.components[0].boards.len(), 2);
}

#[test]
fn delete_without_selection_removes_active_node() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::NodeClicked {
                path: NodePath::board(0, 1),
                additive: false,
            },
            AppIntent::DeleteRequested,
        ],
    );

    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::DeleteActive)
    ));
    assert_eq!(state.project_view.active.path, None);
    assert_eq!(state.project.components[0].boards.len(), 1);
}

#[test]
fn undo_resets_navigation_before_restoring() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::NodeClicked {
                path: NodePath::board(0, 0),
                additive: false,
            },
            AppIntent::DuplicateRequested,
            AppIntent::NodeClicked {
                path: NodePath::cut(0, 2, 0),
                additive: true,
            },
            AppIntent::UndoRequested,
        ],
    );

    let entries = state.command_log.entries();
    assert!(matches!(
        &entries[entries.len() - 2..],
        [AppCommand::ResetNavigation, AppCommand::Undo]
    ));
    assert_eq!(state.project_view.active.path, None);
    assert!(state.project_view.selected.is_empty());
    assert!(state.project_view.expanded.components.is_empty());
    assert_eq!(state.project.components[0].boards.len(), 2);
}

#[test]
fn visibility_toggle_and_show_all() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::NodeClicked {
                path: NodePath::board(0, 0),
                additive: false,
            },
            AppIntent::VisibilityToggleRequested,
            AppIntent::HideAllRequested,
        ],
    );
    assert!(!state.project.components[0].visible);
    assert!(!state.project.components[0].boards[0].cuts[1].visible);

    run(&mut controller, &mut state, vec![AppIntent::ShowAllRequested]);
    assert!(state.project.components[0].boards[0].visible);

    // Ohne aktiven Knoten entsteht kein Command.
    state.project_view.active.reset();
    let logged = state.command_log.len();
    run(
        &mut controller,
        &mut state,
        vec![AppIntent::VisibilityToggleRequested],
    );
    assert_eq!(state.command_log.len(), logged);
}
