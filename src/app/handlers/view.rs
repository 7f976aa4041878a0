//! Handler für Ansicht-Menü, Aktiv-Panel, Schublade und Meldungen.

use crate::app::state::{ActiveTab, Axis, DrawerTab, GridAxis, RulerPoint};
use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec3;

pub fn toggle_active_panel(state: &mut AppState) {
    use_cases::view::toggle_active_panel(state);
}

pub fn open_active_tab(state: &mut AppState, tab: ActiveTab) {
    use_cases::view::open_active_tab(state, tab);
}

pub fn toggle_camera(state: &mut AppState) {
    use_cases::view::toggle_camera(state);
}

pub fn toggle_drawer(state: &mut AppState) {
    use_cases::view::toggle_drawer(state);
}

pub fn set_drawer_tab(state: &mut AppState, tab: DrawerTab) {
    use_cases::view::set_drawer_tab(state, tab);
}

pub fn toggle_focused(state: &mut AppState) {
    use_cases::view::toggle_focused(state);
}

pub fn toggle_grid(state: &mut AppState) {
    use_cases::view::toggle_grid(state);
}

pub fn set_grid_axis(state: &mut AppState, axis: Axis, value: GridAxis) {
    use_cases::view::set_grid_axis(state, axis, value);
}

pub fn toggle_ruler(state: &mut AppState) {
    use_cases::view::toggle_ruler(state);
}

pub fn toggle_ruler_snap(state: &mut AppState) {
    use_cases::view::toggle_ruler_snap(state);
}

/// Übernimmt den Hover-Punkt als Messpunkt.
pub fn set_ruler_point(state: &mut AppState, point: RulerPoint) {
    use_cases::view::set_ruler_point(state, point);
}

pub fn clear_ruler_points(state: &mut AppState) {
    use_cases::view::clear_ruler_points(state);
}

pub fn set_ruler_hover(state: &mut AppState, point: Option<Vec3>) {
    use_cases::view::set_ruler_hover(state, point);
}

/// Entfernt die aktuell angezeigte Meldung.
pub fn dismiss_alert(state: &mut AppState) {
    state.alerts.dismiss_first();
}
