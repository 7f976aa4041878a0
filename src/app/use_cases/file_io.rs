//! Use-Case-Funktionen für Dateiaktionen (Öffnen, Speichern, neues Fenster).
//! Alle Dateisystem-Operationen für `.woodcut`-Dateien sind hier zentralisiert.

use crate::app::alerts::AlertSeverity;
use crate::app::state::ProjectViewState;
use crate::app::AppState;
use crate::session::generate_session_name;
use crate::woodcut::{parse_woodcut, write_woodcut};
use anyhow::Context;

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Speichern-unter-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Lädt eine `.woodcut`-Datei als neues Projekt.
///
/// Der Ladevorgang ist ein normaler Commit und damit rückgängig machbar.
/// Aktiver Knoten, Selektion und Aufklapp-Zustand werden verworfen.
pub fn load_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Unable to read file: {path}"))?;
    let project = parse_woodcut(&content)?;

    log::info!(
        "Projekt geladen: '{}' ({} Knoten, {} Zuschnittlisten)",
        project.name,
        project.node_count(),
        project.cutlists.len()
    );

    let message = format!("Opened project: {}", project.name);
    state.ui.current_file_path = Some(path);
    state.project_view = ProjectViewState::default();
    state.commit_project(project);
    state.alerts.push(message, AlertSeverity::Success);
    Ok(())
}

/// Speichert das Projekt als `.woodcut`.
///
/// `None` speichert unter dem aktuell bekannten Pfad (oder öffnet den Dialog).
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save_file(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let Some(path) = path.or_else(|| state.ui.current_file_path.clone()) else {
        request_save_file(state);
        return Ok(());
    };

    let content = write_woodcut(&state.project)?;
    std::fs::write(&path, content).with_context(|| format!("Unable to write file: {path}"))?;

    log::info!("Projekt gespeichert: {}", path);
    state.ui.current_file_path = Some(path);
    state.alerts.push("Project saved", AlertSeverity::Success);
    Ok(())
}

/// Startet eine weitere Editor-Instanz mit eigener Session.
pub fn spawn_new_instance() -> anyhow::Result<()> {
    let exe = std::env::current_exe().context("Unable to locate editor executable")?;
    let session = generate_session_name();

    std::process::Command::new(&exe)
        .arg("--session")
        .arg(&session)
        .spawn()
        .with_context(|| format!("Unable to start {}", exe.display()))?;

    log::info!("Neue Instanz gestartet (Session '{}')", session);
    Ok(())
}
