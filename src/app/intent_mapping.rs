//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::NodePath;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // ── Datei ───────────────────────────────────────────────────
        AppIntent::NewWindowRequested => vec![AppCommand::SpawnNewInstance],
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveFile { path: Some(path) }]
        }
        AppIntent::ExportXlsxRequested => vec![AppCommand::ExportProjectXlsx],
        AppIntent::ExportPngRequested => vec![AppCommand::RequestScreenshot],
        AppIntent::ScreenshotCaptured {
            width,
            height,
            rgba,
        } => vec![AppCommand::EncodeScreenshot {
            width,
            height,
            rgba,
        }],
        AppIntent::ExportMeshRequested { format } => vec![AppCommand::ExportMesh { format }],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::WritePendingExport { path }],
        AppIntent::ExportCancelled => vec![AppCommand::DiscardPendingExport],

        // ── Bearbeiten ──────────────────────────────────────────────
        AppIntent::CopyRequested => vec![AppCommand::CopyActive],
        AppIntent::DeleteRequested => {
            if state.project_view.selected.is_empty() {
                vec![AppCommand::DeleteActive]
            } else {
                vec![AppCommand::DeleteSelection]
            }
        }
        AppIntent::DuplicateRequested => vec![AppCommand::DuplicateActive],
        AppIntent::UndoRequested => vec![AppCommand::ResetNavigation, AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::ResetNavigation, AppCommand::Redo],
        AppIntent::NewRequested => map_new_request(state),
        AppIntent::PasteRequested => vec![AppCommand::Paste],
        AppIntent::TransformToggled => vec![AppCommand::ToggleTransform],
        AppIntent::VisibilityToggleRequested => state
            .project_view
            .active
            .path
            .map(|path| vec![AppCommand::ToggleNodeVisibility { path }])
            .unwrap_or_default(),
        AppIntent::ShowAllRequested => vec![AppCommand::SetAllVisible { visible: true }],
        AppIntent::HideAllRequested => vec![AppCommand::SetAllVisible { visible: false }],
        AppIntent::CutKindChosen { kind } => {
            let target = state
                .project_view
                .active
                .path
                .and_then(|path| path.board_indices());
            match target {
                Some((component, board)) => vec![
                    AppCommand::AddDefaultCut {
                        component,
                        board,
                        kind,
                    },
                    AppCommand::CloseCutMenu,
                ],
                None => vec![AppCommand::CloseCutMenu],
            }
        }
        AppIntent::CutMenuClosed => vec![AppCommand::CloseCutMenu],

        // ── Selektion ───────────────────────────────────────────────
        AppIntent::FindRequested => vec![AppCommand::OpenFind],
        AppIntent::FindSubmitted => vec![AppCommand::RunFind],
        AppIntent::FindResultChosen { path } => vec![
            AppCommand::ActivateFindResult { path },
            AppCommand::CloseFind,
        ],
        AppIntent::FindClosed => vec![AppCommand::CloseFind],
        AppIntent::SelectNextRequested => vec![AppCommand::SelectNext],
        AppIntent::SelectPreviousRequested => vec![AppCommand::SelectPrevious],
        AppIntent::SelectAllRequested => vec![AppCommand::SelectAll],
        AppIntent::SelectNoneRequested => vec![AppCommand::ClearSelection],
        AppIntent::NodeClicked { path, additive } => {
            if additive {
                vec![AppCommand::ToggleNodeSelected { path }]
            } else {
                vec![AppCommand::ActivateNode { path }]
            }
        }
        AppIntent::NodeExpandToggled { path } => vec![AppCommand::ToggleExpanded { path }],
        AppIntent::NodeVisibilityToggled { path } => {
            vec![AppCommand::ToggleNodeVisibility { path }]
        }

        // ── Ansicht ─────────────────────────────────────────────────
        AppIntent::ActivePanelToggled => vec![AppCommand::ToggleActivePanel],
        AppIntent::ActiveTabRequested { tab } => vec![AppCommand::OpenActiveTab { tab }],
        AppIntent::CameraToggled => vec![AppCommand::ToggleCamera],
        AppIntent::DrawerToggled => vec![AppCommand::ToggleDrawer],
        AppIntent::DrawerTabSelected { tab } => vec![AppCommand::SetDrawerTab { tab }],
        AppIntent::FocusToggled => vec![AppCommand::ToggleFocused],
        AppIntent::GridToggled => vec![AppCommand::ToggleGrid],
        AppIntent::GridAxisChanged { axis, value } => {
            vec![AppCommand::SetGridAxis { axis, value }]
        }
        AppIntent::RulerToggled => vec![AppCommand::ToggleRuler],
        AppIntent::RulerSnapToggled => vec![AppCommand::ToggleRulerSnap],
        AppIntent::RulerPointRequested { point } => vec![AppCommand::SetRulerPoint { point }],
        AppIntent::RulerPointsCleared => vec![AppCommand::ClearRulerPoints],
        AppIntent::RulerHoverChanged { point } => vec![AppCommand::SetRulerHover { point }],
        AppIntent::ProjectSettingsChanged { settings } => {
            vec![AppCommand::SetProjectSettings { settings }]
        }

        // ── Zuschnittlisten ─────────────────────────────────────────
        AppIntent::CutlistAddRequested => vec![AppCommand::AddCutlist],
        AppIntent::CutlistRemoveRequested { index } => vec![AppCommand::RemoveCutlist { index }],
        AppIntent::CutlistStockAddRequested { index } => {
            vec![AppCommand::AddCutlistStock { index }]
        }
        AppIntent::CutlistBoardsCollectRequested { index } => {
            vec![AppCommand::CollectCutlistBoards { index }]
        }
        AppIntent::CutlistCalculateRequested { index } => {
            vec![AppCommand::CalculateCutlist { index }]
        }
        AppIntent::CutlistExportRequested { index } => vec![AppCommand::ExportCutlist { index }],

        AppIntent::AlertDismissed => vec![AppCommand::DismissAlert],
    }
}

/// Aktives Brett öffnet das Schnitt-Menü, aktive Komponente bekommt ein
/// Brett, sonst entsteht eine neue Komponente.
fn map_new_request(state: &AppState) -> Vec<AppCommand> {
    match state.project_view.active.path {
        Some(NodePath::Board { component, board })
            if state.project.board(component, board).is_some() =>
        {
            vec![AppCommand::OpenCutMenu]
        }
        Some(NodePath::Component { component })
            if state.project.component(component).is_some() =>
        {
            vec![AppCommand::AddDefaultBoard { component }]
        }
        _ => vec![AppCommand::AddDefaultComponent],
    }
}

#[cfg(test)]
mod tests;
