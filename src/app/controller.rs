//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::engine::{CutlistEngine, UnavailableEngine};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
pub struct AppController {
    engine: Box<dyn CutlistEngine>,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Erstellt einen Controller ohne gelinkte Engine.
    pub fn new() -> Self {
        Self::with_engine(Box::new(UnavailableEngine))
    }

    /// Erstellt einen Controller mit der übergebenen Engine.
    pub fn with_engine(engine: Box<dyn CutlistEngine>) -> Self {
        Self { engine }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Schlägt ein Command fehl, wird eine Fehlermeldung eingereiht und der
    /// Fehler an den Aufrufer weitergegeben. Folge-Commands entfallen.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            if let Err(error) = self.handle_command(state, command) {
                state.alerts.push_error(&error);
                return Err(error);
            }
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;
        let engine = self.engine.as_ref();

        match command {
            // === Datei-I/O & Export ===
            AppCommand::SpawnNewInstance => handlers::file_io::spawn_new_instance()?,
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::ExportProjectXlsx => {
                handlers::file_io::export_project_xlsx(state, engine)?
            }
            AppCommand::RequestScreenshot => handlers::file_io::request_screenshot(state),
            AppCommand::EncodeScreenshot {
                width,
                height,
                rgba,
            } => handlers::file_io::encode_screenshot(state, width, height, rgba)?,
            AppCommand::ExportMesh { format } => {
                handlers::file_io::export_mesh(state, engine, format)?
            }
            AppCommand::WritePendingExport { path } => {
                handlers::file_io::write_pending_export(state, path)?
            }
            AppCommand::DiscardPendingExport => handlers::file_io::discard_pending_export(state),

            // === Editing ===
            AppCommand::CopyActive => handlers::editing::copy_active(state),
            AppCommand::DeleteSelection => handlers::editing::delete_selection(state),
            AppCommand::DeleteActive => handlers::editing::delete_active(state),
            AppCommand::DuplicateActive => handlers::editing::duplicate_active(state),
            AppCommand::AddDefaultComponent => handlers::editing::add_default_component(state),
            AppCommand::AddDefaultBoard { component } => {
                handlers::editing::add_default_board(state, component)
            }
            AppCommand::AddDefaultCut {
                component,
                board,
                kind,
            } => handlers::editing::add_default_cut(state, component, board, kind),
            AppCommand::OpenCutMenu => handlers::editing::open_cut_menu(state),
            AppCommand::CloseCutMenu => handlers::editing::close_cut_menu(state),
            AppCommand::Paste => handlers::editing::paste(state),
            AppCommand::ToggleTransform => handlers::editing::toggle_transform(state),
            AppCommand::ToggleNodeVisibility { path } => {
                handlers::editing::toggle_node_visibility(state, path)
            }
            AppCommand::SetAllVisible { visible } => {
                handlers::editing::set_all_visible(state, visible)
            }
            AppCommand::SetProjectSettings { settings } => {
                handlers::editing::set_project_settings(state, settings)
            }

            // === Verlauf ===
            AppCommand::ResetNavigation => handlers::selection::reset_navigation(state),
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Selektion & Suche ===
            AppCommand::OpenFind => handlers::selection::open_find(state),
            AppCommand::CloseFind => handlers::selection::close_find(state),
            AppCommand::RunFind => handlers::selection::run_find(state),
            AppCommand::ActivateFindResult { path } => {
                handlers::selection::activate_find_result(state, path)
            }
            AppCommand::SelectNext => handlers::selection::select_next(state),
            AppCommand::SelectPrevious => handlers::selection::select_previous(state),
            AppCommand::SelectAll => handlers::selection::select_all(state),
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::ActivateNode { path } => handlers::selection::activate_node(state, path),
            AppCommand::ToggleNodeSelected { path } => {
                handlers::selection::toggle_node_selected(state, path)
            }
            AppCommand::ToggleExpanded { path } => {
                handlers::selection::toggle_expanded(state, path)
            }

            // === Ansicht ===
            AppCommand::ToggleActivePanel => handlers::view::toggle_active_panel(state),
            AppCommand::OpenActiveTab { tab } => handlers::view::open_active_tab(state, tab),
            AppCommand::ToggleCamera => handlers::view::toggle_camera(state),
            AppCommand::ToggleDrawer => handlers::view::toggle_drawer(state),
            AppCommand::SetDrawerTab { tab } => handlers::view::set_drawer_tab(state, tab),
            AppCommand::ToggleFocused => handlers::view::toggle_focused(state),
            AppCommand::ToggleGrid => handlers::view::toggle_grid(state),
            AppCommand::SetGridAxis { axis, value } => {
                handlers::view::set_grid_axis(state, axis, value)
            }
            AppCommand::ToggleRuler => handlers::view::toggle_ruler(state),
            AppCommand::ToggleRulerSnap => handlers::view::toggle_ruler_snap(state),
            AppCommand::SetRulerPoint { point } => handlers::view::set_ruler_point(state, point),
            AppCommand::ClearRulerPoints => handlers::view::clear_ruler_points(state),
            AppCommand::SetRulerHover { point } => handlers::view::set_ruler_hover(state, point),
            AppCommand::DismissAlert => handlers::view::dismiss_alert(state),

            // === Zuschnittlisten ===
            AppCommand::AddCutlist => handlers::cutlist::add(state),
            AppCommand::RemoveCutlist { index } => handlers::cutlist::remove(state, index)?,
            AppCommand::AddCutlistStock { index } => handlers::cutlist::add_stock(state, index)?,
            AppCommand::CollectCutlistBoards { index } => {
                handlers::cutlist::collect_boards(state, index)?
            }
            AppCommand::CalculateCutlist { index } => {
                handlers::cutlist::calculate(state, engine, index)?
            }
            AppCommand::ExportCutlist { index } => handlers::cutlist::export(state, engine, index)?,
        }

        Ok(())
    }
}
