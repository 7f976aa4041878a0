//! Use-Case-Funktionen für das Ansicht-Menü (Panel, Kamera, Gitter, Lineal).

use crate::app::alerts::AlertSeverity;
use crate::app::state::{ActiveTab, Axis, DrawerTab, GridAxis, RulerPoint};
use crate::app::AppState;
use glam::Vec3;

/// Öffnet bzw. schließt das Aktiv-Panel. Ohne Tab wird `Info` gewählt.
pub fn toggle_active_panel(state: &mut AppState) {
    let active = &mut state.project_view.active;
    active.panel_open = !active.panel_open;
    active.tab.get_or_insert(ActiveTab::Info);
}

/// Öffnet das Aktiv-Panel auf dem angegebenen Tab.
pub fn open_active_tab(state: &mut AppState, tab: ActiveTab) {
    let active = &mut state.project_view.active;
    active.panel_open = true;
    active.tab = Some(tab);
}

/// Wechselt zwischen perspektivischer und orthografischer Kamera.
pub fn toggle_camera(state: &mut AppState) {
    let camera = &mut state.render_view.camera;
    camera.projection = camera.projection.toggled();
    log::debug!("Kamera: {:?}", camera.projection);
}

/// Öffnet bzw. schließt die Schublade. Beim Schließen geht der Tab verloren.
pub fn toggle_drawer(state: &mut AppState) {
    let drawer = &mut state.project_view.drawer;
    let was_open = drawer.open;
    drawer.open = !was_open;
    if was_open {
        drawer.tab = None;
    }
}

/// Wählt den Tab der Schublade und öffnet sie.
pub fn set_drawer_tab(state: &mut AppState, tab: DrawerTab) {
    let drawer = &mut state.project_view.drawer;
    drawer.open = true;
    drawer.tab = Some(tab);
}

/// Schaltet den Fokus-Modus um und meldet den neuen Zustand.
pub fn toggle_focused(state: &mut AppState) {
    let focused = !state.project_view.focused;
    state.project_view.focused = focused;
    let message = if focused {
        "Focus mode enabled"
    } else {
        "Focus mode disabled"
    };
    state.alerts.push(message, AlertSeverity::Info);
}

/// Schaltet den Transform-Gizmo um.
pub fn toggle_transform(state: &mut AppState) {
    state.project_view.transform = !state.project_view.transform;
}

/// Öffnet das Menü "Schnitt hinzufügen".
pub fn open_cut_menu(state: &mut AppState) {
    state.project_view.cut_menu_open = true;
}

/// Schließt das Menü "Schnitt hinzufügen".
pub fn close_cut_menu(state: &mut AppState) {
    state.project_view.cut_menu_open = false;
}

pub fn toggle_grid(state: &mut AppState) {
    state.render_view.grid.visible = !state.render_view.grid.visible;
}

/// Setzt die Darstellung einer Gitter-Achse.
pub fn set_grid_axis(state: &mut AppState, axis: Axis, value: GridAxis) {
    state.render_view.grid.set_axis(axis, value);
}

/// Blendet das Lineal ein bzw. aus. Messpunkte bleiben erhalten.
pub fn toggle_ruler(state: &mut AppState) {
    state.render_view.ruler.visible = !state.render_view.ruler.visible;
}

pub fn toggle_ruler_snap(state: &mut AppState) {
    state.render_view.ruler.snap = !state.render_view.ruler.snap;
}

/// Übernimmt den aktuellen Hover-Punkt als Messpunkt A bzw. B.
pub fn set_ruler_point(state: &mut AppState, point: RulerPoint) {
    let ruler = &mut state.render_view.ruler;
    match point {
        RulerPoint::A => ruler.a = ruler.hover,
        RulerPoint::B => ruler.b = ruler.hover,
    }
}

/// Entfernt beide Messpunkte.
pub fn clear_ruler_points(state: &mut AppState) {
    let ruler = &mut state.render_view.ruler;
    ruler.a = None;
    ruler.b = None;
}

/// Aktualisiert den Punkt unter dem Mauszeiger.
pub fn set_ruler_hover(state: &mut AppState, point: Option<Vec3>) {
    state.render_view.ruler.hover = point;
}

/// Merkt einen Viewport-Screenshot für den nächsten Frame vor.
pub fn request_screenshot(state: &mut AppState) {
    state.render_view.screenshot_requested = true;
}
