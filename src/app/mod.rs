//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod alerts;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Projekt, Ansicht, Dialoge).
pub mod state;
pub mod use_cases;

pub use alerts::{Alert, AlertQueue, AlertSeverity};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::History;
pub use state::{AppState, ProjectViewState, RenderViewState, UiState};
