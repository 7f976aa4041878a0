//! Application State: zentrale Datenhaltung.
//!
//! `AppState` hält das aktive Projekt (`Arc<Project>`), den Verlauf und
//! die reinen UI-Zeiger (aktiver Knoten, Selektion, aufgeklappte Knoten)
//! sowie den Zustand des Viewports.

mod app_state;
mod project_view;
mod render_view;
mod ui;

pub use app_state::AppState;
pub use project_view::{
    ActiveState, ActiveTab, DrawerState, DrawerTab, ExpandedState, ProjectViewState,
    SelectionState,
};
pub use render_view::{
    camera_position_for_bounds, Axis, CameraState, GridAxis, GridState, Projection,
    RenderViewState, RulerPoint, RulerState,
};
pub use ui::{FindState, PendingExport, UiState};
