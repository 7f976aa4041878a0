use super::common::{ready_cutlist, run, sample_project, state_with, MockEngine};
use tempfile::tempdir;
use woodcut_editor::app::AlertSeverity;
use woodcut_editor::{AppController, AppIntent, AppState, MeshFormat, NodePath};

#[test]
fn save_as_then_reopen_restores_project() {
    let dir = tempdir().expect("Temp-Verzeichnis");
    let path = dir.path().join("shelf.woodcut");
    let path = path.to_string_lossy().to_string();

    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(&mut controller, &mut state, vec![AppIntent::SaveAsRequested]);
    assert!(state.ui.show_save_file_dialog);

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::SaveFilePathSelected { path: path.clone() }],
    );
    assert_eq!(state.ui.current_file_path.as_deref(), Some(path.as_str()));
    assert_eq!(
        state.alerts.first().map(|a| a.message.as_str()),
        Some("Project saved")
    );

    let mut reopened = AppState::new();
    reopened.project_view.active.path = Some(NodePath::component(0));
    run(
        &mut controller,
        &mut reopened,
        vec![AppIntent::FileSelected { path: path.clone() }],
    );

    assert_eq!(*reopened.project, *state.project);
    assert_eq!(reopened.project_view.active.path, None);
    let alert = reopened.alerts.first().expect("Meldung vorhanden");
    assert_eq!(alert.message, "Opened project: Bookshelf");
    assert_eq!(alert.severity, AlertSeverity::Success);

    // Laden ist rückgängig machbar.
    run(
        &mut controller,
        &mut reopened,
        vec![AppIntent::UndoRequested],
    );
    assert!(reopened.project.components.is_empty());
}

#[test]
fn save_without_known_path_opens_dialog() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(&mut controller, &mut state, vec![AppIntent::SaveRequested]);
    assert!(state.ui.show_save_file_dialog);
    assert!(state.alerts.is_empty());
}

#[test]
fn invalid_file_surfaces_error_alert() {
    let dir = tempdir().expect("Temp-Verzeichnis");
    let path = dir.path().join("broken.woodcut");
    std::fs::write(&path, "{ not json").expect("Datei schreiben");

    let mut controller = AppController::new();
    let mut state = AppState::new();
    let result = controller.handle_intent(
        &mut state,
        AppIntent::FileSelected {
            path: path.to_string_lossy().to_string(),
        },
    );

    assert!(result.is_err());
    let alert = state.alerts.first().expect("Fehlermeldung vorhanden");
    assert_eq!(alert.severity, AlertSeverity::Error);
    assert_eq!(alert.message, "Invalid project file");
    assert_eq!(state.history.len(), 1);
}

#[test]
fn xlsx_export_waits_for_path_then_writes_file() {
    let dir = tempdir().expect("Temp-Verzeichnis");
    let target = dir.path().join("out.xlsx");

    let (engine, calls) = MockEngine::packing();
    let mut controller = AppController::with_engine(Box::new(engine));
    let mut project = sample_project();
    project.cutlists.push(ready_cutlist());
    project.cutlists.push(ready_cutlist());
    let mut state = state_with(project);

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::ExportXlsxRequested],
    );
    let pending = state.ui.pending_export.as_ref().expect("Export vorgemerkt");
    assert_eq!(pending.file_name, "Bookshelf.xlsx");
    assert_eq!(calls.borrow().project_images, Some(2));

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::ExportPathSelected {
            path: target.to_string_lossy().to_string(),
        }],
    );
    assert!(state.ui.pending_export.is_none());
    assert_eq!(std::fs::read(&target).expect("Export lesbar"), b"Bookshelf");
    assert_eq!(
        state.alerts.first().map(|a| a.message.as_str()),
        Some("Exported project to XLSX")
    );
}

#[test]
fn cancelled_export_is_discarded() {
    let (engine, _) = MockEngine::packing();
    let mut controller = AppController::with_engine(Box::new(engine));
    let mut state = state_with(sample_project());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::ExportMeshRequested {
                format: MeshFormat::Stl,
            },
        ],
    );
    assert_eq!(
        state.ui.pending_export.as_ref().map(|e| e.file_name.as_str()),
        Some("Bookshelf.stl")
    );

    run(&mut controller, &mut state, vec![AppIntent::ExportCancelled]);
    assert!(state.ui.pending_export.is_none());
    assert!(state.alerts.is_empty());
}

#[test]
fn engine_failure_becomes_error_alert() {
    let (engine, _) = MockEngine::packing();
    let mut controller = AppController::with_engine(Box::new(engine));
    let mut state = state_with(sample_project());

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ExportMeshRequested {
            format: MeshFormat::Gltf,
        },
    );

    assert!(result.is_err());
    assert!(state.ui.pending_export.is_none());
    assert_eq!(
        state.alerts.first().map(|a| a.message.as_str()),
        Some("glTF export failed")
    );
}

#[test]
fn missing_engine_is_reported() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    let result = controller.handle_intent(&mut state, AppIntent::ExportXlsxRequested);

    assert!(result.is_err());
    assert_eq!(
        state.alerts.first().map(|a| a.message.as_str()),
        Some("Cutlist engine is not available")
    );
}

#[test]
fn png_export_requests_screenshot_and_encodes_capture() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::ExportPngRequested],
    );
    assert!(state.render_view.screenshot_requested);

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::ScreenshotCaptured {
            width: 2,
            height: 2,
            rgba: vec![255; 16],
        }],
    );
    let pending = state.ui.pending_export.as_ref().expect("PNG vorgemerkt");
    assert_eq!(pending.file_name, "Bookshelf.png");
    assert!(pending.bytes.starts_with(b"\x89PNG"));
}

#[test]
fn truncated_screenshot_is_rejected() {
    let mut controller = AppController::new();
    let mut state = state_with(sample_project());

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ScreenshotCaptured {
            width: 4,
            height: 4,
            rgba: vec![0; 8],
        },
    );

    assert!(result.is_err());
    assert!(state.ui.pending_export.is_none());
}
