use super::common::{ready_cutlist, run, sample_project, state_with, MockEngine};
use woodcut_editor::app::use_cases::cutlist::SEED_RANGE;
use woodcut_editor::{AppController, AppIntent, Measurement};

#[test]
fn add_stock_collect_and_calculate() {
    let (engine, calls) = MockEngine::packing();
    let mut controller = AppController::with_engine(Box::new(engine));
    let mut state = state_with(sample_project());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::CutlistAddRequested,
            AppIntent::CutlistStockAddRequested { index: 0 },
            AppIntent::CutlistBoardsCollectRequested { index: 0 },
        ],
    );

    let cutlist = &state.project.cutlists[0];
    assert_eq!(cutlist.name, "Cutlist 1");
    assert_eq!(cutlist.input.stock.len(), 1);
    // Beide Standard-Bretter haben dieselbe Holzart, aber verschiedene Namen.
    assert_eq!(cutlist.input.boards.len(), 2);
    assert!(!cutlist.is_calculated());

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::CutlistCalculateRequested { index: 0 }],
    );
    assert!(state.project.cutlists[0].is_calculated());

    let seeds = &calls.borrow().seeds;
    assert_eq!(seeds.len(), 1);
    assert!(seeds[0] < SEED_RANGE);
}

#[test]
fn calculate_without_stock_or_boards_fails() {
    let (engine, calls) = MockEngine::packing();
    let mut controller = AppController::with_engine(Box::new(engine));
    let mut state = state_with(sample_project());

    run(&mut controller, &mut state, vec![AppIntent::CutlistAddRequested]);
    let result = controller.handle_intent(
        &mut state,
        AppIntent::CutlistCalculateRequested { index: 0 },
    );
    assert!(result.is_err());
    assert_eq!(
        state.alerts.first().map(|a| a.message.as_str()),
        Some("No stock found.")
    );

    state.alerts.dismiss_first();
    run(
        &mut controller,
        &mut state,
        vec![AppIntent::CutlistStockAddRequested { index: 0 }],
    );
    let result = controller.handle_intent(
        &mut state,
        AppIntent::CutlistCalculateRequested { index: 0 },
    );
    assert!(result.is_err());
    assert_eq!(
        state.alerts.first().map(|a| a.message.as_str()),
        Some("No boards found.")
    );
    assert!(calls.borrow().seeds.is_empty());
}

#[test]
fn unfit_board_is_reported_and_project_unchanged() {
    let mut controller = AppController::with_engine(Box::new(MockEngine::unfit("Side")));
    let mut project = sample_project();
    project.cutlists.push(ready_cutlist());
    let mut state = state_with(project);
    let history_len = state.history.len();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::CutlistCalculateRequested { index: 0 },
    );

    assert!(result.is_err());
    assert_eq!(
        state.alerts.first().map(|a| a.message.as_str()),
        Some("Unable to fit board: Side")
    );
    assert_eq!(state.history.len(), history_len);
    assert!(!state.project.cutlists[0].is_calculated());
}

#[test]
fn export_requires_calculated_cutlist() {
    let (engine, calls) = MockEngine::packing();
    let mut controller = AppController::with_engine(Box::new(engine));
    let mut project = sample_project();
    project.settings.measurement = Measurement::Imperial;
    project.cutlists.push(ready_cutlist());
    let mut state = state_with(project);

    let result =
        controller.handle_intent(&mut state, AppIntent::CutlistExportRequested { index: 0 });
    assert!(result.is_err());
    assert_eq!(
        state.alerts.first().map(|a| a.message.as_str()),
        Some("No cutlist found.")
    );

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::CutlistCalculateRequested { index: 0 },
            AppIntent::CutlistExportRequested { index: 0 },
        ],
    );
    assert_eq!(
        state.ui.pending_export.as_ref().map(|e| e.file_name.as_str()),
        Some("Shelves.xlsx")
    );
    assert_eq!(calls.borrow().exported_units, vec![Measurement::Imperial]);
}

#[test]
fn remove_cutlist_out_of_range_fails() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    let result =
        controller.handle_intent(&mut state, AppIntent::CutlistRemoveRequested { index: 3 });
    assert!(result.is_err());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::CutlistAddRequested,
            AppIntent::CutlistAddRequested,
            AppIntent::CutlistRemoveRequested { index: 0 },
        ],
    );
    assert_eq!(state.project.cutlists.len(), 1);
    assert_eq!(state.project.cutlists[0].name, "Cutlist 2");
}
