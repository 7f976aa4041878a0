use crate::app::alerts::AlertQueue;
use crate::app::history::History;
use crate::app::CommandLog;
use crate::core::{ClipboardItem, Project};
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{ProjectViewState, RenderViewState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktives Projekt (nur als Ganzes ersetzt, siehe `commit_project`)
    pub project: Arc<Project>,
    /// Undo/Redo-Verlauf
    pub history: History,
    /// Kopierter Knoten
    pub clipboard: Option<ClipboardItem>,
    /// Baum, Aktiv-Panel, Selektion, Schublade
    pub project_view: ProjectViewState,
    /// Kamera, Gitter, Lineal
    pub render_view: RenderViewState,
    /// Dialoge und Dateipfade
    pub ui: UiState,
    /// Toast-Meldungen
    pub alerts: AlertQueue,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    session_dirty: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit leerem Projekt gemäß `options`.
    pub fn with_options(options: EditorOptions) -> Self {
        let project = Arc::new(Project::new("Untitled", options.project_settings()));
        let mut history = History::with_limit(options.history_limit);
        history.add(project.clone());

        Self {
            render_view: RenderViewState::for_settings(&project.settings),
            project,
            history,
            clipboard: None,
            project_view: ProjectViewState::default(),
            ui: UiState::new(),
            alerts: AlertQueue::new(),
            command_log: CommandLog::new(),
            options,
            session_dirty: false,
        }
    }

    /// Setzt das aktive Projekt und trägt es in den Verlauf ein.
    ///
    /// Einziger Weg, das Projekt zu ändern. Der Viewport übernimmt danach
    /// Einheit und Ausdehnung aus den Projekteinstellungen.
    pub fn commit_project(&mut self, project: impl Into<Arc<Project>>) {
        self.project = project.into();
        self.history.add(self.project.clone());
        self.render_view.sync_with_settings(&self.project.settings);
        self.session_dirty = true;
    }

    /// Übernimmt eine gespeicherte Session als neuen Ausgangszustand.
    pub fn restore_session(&mut self, project: Project, clipboard: Option<ClipboardItem>) {
        self.project = Arc::new(project);
        self.history.reset(self.project.clone());
        self.render_view.sync_with_settings(&self.project.settings);
        self.clipboard = clipboard;
        self.project_view = ProjectViewState::default();
    }

    /// Legt einen Knoten in die Zwischenablage.
    pub fn set_clipboard(&mut self, item: ClipboardItem) {
        self.clipboard = Some(item);
        self.session_dirty = true;
    }

    /// Liefert und löscht das Flag "Session muss gespeichert werden".
    pub fn take_session_dirty(&mut self) -> bool {
        std::mem::take(&mut self.session_dirty)
    }

    /// Markiert die Session erneut als ungesichert.
    pub fn mark_session_dirty(&mut self) {
        self.session_dirty = true;
    }

    /// Gibt die Anzahl aller Projekt-Knoten zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.project.node_count()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
