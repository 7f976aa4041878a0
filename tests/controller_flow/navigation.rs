use super::common::{run, sample_project, state_with};
use woodcut_editor::app::state::ActiveTab;
use woodcut_editor::{AppController, AppIntent, NodePath};

#[test]
fn select_next_walks_document_order_and_wraps() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    let expected = [
        NodePath::component(0),
        NodePath::board(0, 0),
        NodePath::cut(0, 0, 0),
        NodePath::cut(0, 0, 1),
        NodePath::board(0, 1),
        NodePath::component(1),
        NodePath::component(0),
    ];
    for path in expected {
        run(
            &mut controller,
            &mut state,
            vec![AppIntent::SelectNextRequested],
        );
        assert_eq!(state.project_view.active.path, Some(path));
    }
}

#[test]
fn select_next_expands_ancestors_of_new_active_node() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::SelectNextRequested,
            AppIntent::SelectNextRequested,
            AppIntent::SelectNextRequested,
        ],
    );

    assert_eq!(state.project_view.active.path, Some(NodePath::cut(0, 0, 0)));
    assert!(state.project_view.expanded.is_expanded(NodePath::component(0)));
    assert!(state.project_view.expanded.is_expanded(NodePath::board(0, 0)));
}

#[test]
fn select_previous_wraps_to_last_node() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::NodeClicked {
                path: NodePath::component(0),
                additive: false,
            },
            AppIntent::SelectPreviousRequested,
        ],
    );
    assert_eq!(state.project_view.active.path, Some(NodePath::component(1)));

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::SelectPreviousRequested],
    );
    assert_eq!(state.project_view.active.path, Some(NodePath::board(0, 1)));
}

#[test]
fn select_all_then_none() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(&mut controller, &mut state, vec![AppIntent::SelectAllRequested]);
    assert_eq!(state.project_view.selected.len(), state.node_count());

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::SelectNoneRequested],
    );
    assert!(state.project_view.selected.is_empty());
}

#[test]
fn find_result_activates_node_and_closes_dialog() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(&mut controller, &mut state, vec![AppIntent::FindRequested]);
    assert!(state.ui.find.open);

    state.ui.find.query = "HOLE".to_string();
    run(&mut controller, &mut state, vec![AppIntent::FindSubmitted]);
    assert_eq!(state.ui.find.results, vec![NodePath::cut(0, 0, 1)]);

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::FindResultChosen {
            path: NodePath::cut(0, 0, 1),
        }],
    );

    let active = &state.project_view.active;
    assert_eq!(active.path, Some(NodePath::cut(0, 0, 1)));
    assert!(active.panel_open);
    assert_eq!(active.tab, Some(ActiveTab::Info));
    assert!(state.project_view.expanded.is_expanded(NodePath::board(0, 0)));
    assert!(!state.ui.find.open);
    assert!(state.ui.find.query.is_empty());
}

#[test]
fn find_result_keeps_previously_chosen_tab() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::ActiveTabRequested {
                tab: ActiveTab::Rotation,
            },
            AppIntent::FindResultChosen {
                path: NodePath::board(0, 1),
            },
        ],
    );

    assert_eq!(state.project_view.active.tab, Some(ActiveTab::Rotation));
}
