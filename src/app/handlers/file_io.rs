//! Handler für Datei-Operationen (Öffnen, Speichern, Exporte, neues Fenster).

use crate::app::use_cases;
use crate::app::AppState;
use crate::engine::{CutlistEngine, MeshFormat};

/// Startet eine weitere Editor-Instanz.
pub fn spawn_new_instance() -> anyhow::Result<()> {
    use_cases::file_io::spawn_new_instance()
}

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::file_io::request_open_file(state);
}

/// Öffnet den Datei-Speichern-Dialog.
pub fn request_save(state: &mut AppState) {
    use_cases::file_io::request_save_file(state);
}

/// Lädt ein Projekt aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_file(state, path)
}

/// Speichert das Projekt.
///
/// `None` speichert unter dem aktuell bekannten Pfad (oder öffnet den Dialog).
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::file_io::save_file(state, path)
}

/// Erzeugt den XLSX-Export aller Zuschnittlisten.
pub fn export_project_xlsx(state: &mut AppState, engine: &dyn CutlistEngine) -> anyhow::Result<()> {
    use_cases::export::export_project_xlsx(state, engine)
}

/// Merkt einen Screenshot für den nächsten Frame vor.
pub fn request_screenshot(state: &mut AppState) {
    use_cases::view::request_screenshot(state);
}

/// Kodiert die Screenshot-Pixel als PNG.
pub fn encode_screenshot(
    state: &mut AppState,
    width: u32,
    height: u32,
    rgba: Vec<u8>,
) -> anyhow::Result<()> {
    use_cases::export::encode_screenshot(state, width, height, rgba)
}

/// Erzeugt einen 3D-Export.
pub fn export_mesh(
    state: &mut AppState,
    engine: &dyn CutlistEngine,
    format: MeshFormat,
) -> anyhow::Result<()> {
    use_cases::export::export_mesh(state, engine, format)
}

/// Schreibt den vorgemerkten Export.
pub fn write_pending_export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::export::write_pending_export(state, path)
}

/// Verwirft den vorgemerkten Export.
pub fn discard_pending_export(state: &mut AppState) {
    use_cases::export::discard_pending_export(state);
}
