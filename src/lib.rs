//! Woodcut Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod engine;
pub mod session;
pub mod shared;
pub mod ui;
pub mod woodcut;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState};
pub use core::{
    Board, ClipboardItem, Component, Cut, CutKind, Cutlist, Measurement, NodePath, Project,
    ProjectSettings,
};
pub use engine::{CalculateOutcome, CutlistEngine, EngineError, MeshFormat, UnavailableEngine};
pub use session::SessionStore;
pub use shared::EditorOptions;
pub use woodcut::{parse_woodcut, write_woodcut};
