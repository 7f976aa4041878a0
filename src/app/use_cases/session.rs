//! Use-Case-Funktionen für die lokale Session (Wiederherstellen, Sichern).

use crate::app::AppState;
use crate::session::SessionStore;

/// Übernimmt eine gespeicherte Session in den State.
///
/// Gibt `true` zurück, wenn Daten wiederhergestellt wurden.
pub fn restore(state: &mut AppState, store: &SessionStore) -> anyhow::Result<bool> {
    let Some(session) = store.load()? else {
        log::debug!("Keine Session '{}' vorhanden", store.name());
        return Ok(false);
    };

    log::info!(
        "Session '{}' wiederhergestellt: '{}' ({} Knoten)",
        store.name(),
        session.project.name,
        session.project.node_count()
    );
    state.restore_session(session.project, session.clipboard);
    state.ui.session_name = Some(store.name().to_string());
    Ok(true)
}

/// Sichert Projekt und Zwischenablage, falls sich seit dem letzten Frame
/// etwas geändert hat.
///
/// Schlägt das Schreiben fehl, bleibt die Session ungesichert markiert und
/// wird beim nächsten Aufruf erneut geschrieben.
pub fn persist_if_dirty(state: &mut AppState, store: &SessionStore) -> anyhow::Result<()> {
    if !state.take_session_dirty() {
        return Ok(());
    }
    if let Err(e) = store.store(&state.project, state.clipboard.as_ref()) {
        state.mark_session_dirty();
        return Err(e);
    }
    Ok(())
}
