use crate::core::NodePath;

/// Zustand des Suchen-Dialogs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FindState {
    pub open: bool,
    pub query: String,
    /// Treffer in Dokument-Reihenfolge
    pub results: Vec<NodePath>,
}

impl FindState {
    /// Schließt den Dialog und verwirft Eingabe und Treffer.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// Exportierte Datei, die noch auf einen Zielpfad wartet
#[derive(Debug, Clone, PartialEq)]
pub struct PendingExport {
    /// Vorgeschlagener Dateiname
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Erfolgsmeldung nach dem Schreiben
    pub success_message: Option<String>,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Datei-Öffnen-Dialog anzeigen
    pub show_file_dialog: bool,
    /// Datei-Speichern-Dialog anzeigen
    pub show_save_file_dialog: bool,
    /// Pfad der zuletzt geöffneten/gespeicherten `.woodcut`-Datei
    pub current_file_path: Option<String>,
    pub find: FindState,
    pub pending_export: Option<PendingExport>,
    /// Name der Session dieser Instanz
    pub session_name: Option<String>,
    /// Text für die System-Zwischenablage nach einem Kopieren
    pub system_clipboard_text: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}
