//! Top-Menü (File, Edit, Selection, View).

use crate::app::state::{ActiveTab, Axis, GridAxis, Projection, RulerPoint};
use crate::app::{AppIntent, AppState};
use crate::engine::MeshFormat;

/// Button, der beim Klick einen Intent auslöst und das Menü schließt.
fn menu_item(ui: &mut egui::Ui, events: &mut Vec<AppIntent>, label: &str, intent: AppIntent) {
    menu_item_enabled(ui, events, true, label, intent);
}

fn menu_item_enabled(
    ui: &mut egui::Ui,
    events: &mut Vec<AppIntent>,
    enabled: bool,
    label: &str,
    intent: AppIntent,
) {
    if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
        events.push(intent);
        ui.close();
    }
}

/// Eintrag mit Häkchen für einen umschaltbaren Zustand.
fn toggle_item(
    ui: &mut egui::Ui,
    events: &mut Vec<AppIntent>,
    checked: bool,
    label: &str,
    intent: AppIntent,
) {
    if ui.selectable_label(checked, label).clicked() {
        events.push(intent);
        ui.close();
    }
}

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| render_file_menu(ui, &mut events));
            ui.menu_button("Edit", |ui| render_edit_menu(ui, state, &mut events));
            ui.menu_button("Selection", |ui| {
                render_selection_menu(ui, state, &mut events)
            });
            ui.menu_button("View", |ui| render_view_menu(ui, state, &mut events));
        });
    });

    events
}

fn render_file_menu(ui: &mut egui::Ui, events: &mut Vec<AppIntent>) {
    menu_item(ui, events, "New Window", AppIntent::NewWindowRequested);
    menu_item(ui, events, "Open...", AppIntent::OpenFileRequested);

    ui.separator();

    menu_item(ui, events, "Save", AppIntent::SaveRequested);
    menu_item(ui, events, "Save As...", AppIntent::SaveAsRequested);

    ui.separator();

    ui.menu_button("Export", |ui| {
        menu_item(ui, events, "XLSX", AppIntent::ExportXlsxRequested);
        menu_item(ui, events, "PNG", AppIntent::ExportPngRequested);

        ui.separator();

        for (label, format) in [
            ("OBJ", MeshFormat::Obj),
            ("PLY", MeshFormat::Ply),
            ("STL", MeshFormat::Stl),
        ] {
            menu_item(ui, events, label, AppIntent::ExportMeshRequested { format });
        }
        menu_item_enabled(
            ui,
            events,
            false,
            "glTF",
            AppIntent::ExportMeshRequested {
                format: MeshFormat::Gltf,
            },
        );
    });
}

fn render_edit_menu(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let has_active = state
        .project_view
        .active
        .path
        .is_some_and(|path| state.project.contains(path));
    let can_delete = has_active || !state.project_view.selected.is_empty();

    menu_item_enabled(ui, events, state.can_undo(), "Undo", AppIntent::UndoRequested);
    menu_item_enabled(ui, events, state.can_redo(), "Redo", AppIntent::RedoRequested);

    ui.separator();

    menu_item(ui, events, "New", AppIntent::NewRequested);
    menu_item_enabled(ui, events, has_active, "Copy", AppIntent::CopyRequested);
    menu_item_enabled(
        ui,
        events,
        state.clipboard.is_some(),
        "Paste",
        AppIntent::PasteRequested,
    );
    menu_item_enabled(ui, events, has_active, "Duplicate", AppIntent::DuplicateRequested);
    menu_item_enabled(ui, events, can_delete, "Delete", AppIntent::DeleteRequested);

    ui.separator();

    toggle_item(
        ui,
        events,
        state.project_view.transform,
        "Transform",
        AppIntent::TransformToggled,
    );

    ui.menu_button("Visibility", |ui| {
        menu_item_enabled(
            ui,
            events,
            has_active,
            "Toggle",
            AppIntent::VisibilityToggleRequested,
        );
        menu_item(ui, events, "Show All", AppIntent::ShowAllRequested);
        menu_item(ui, events, "Hide All", AppIntent::HideAllRequested);
    });
}

fn render_selection_menu(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let has_nodes = !state.project.components.is_empty();

    menu_item(ui, events, "Find...", AppIntent::FindRequested);

    ui.separator();

    menu_item_enabled(ui, events, has_nodes, "Next", AppIntent::SelectNextRequested);
    menu_item_enabled(
        ui,
        events,
        has_nodes,
        "Previous",
        AppIntent::SelectPreviousRequested,
    );

    ui.separator();

    menu_item_enabled(ui, events, has_nodes, "Select All", AppIntent::SelectAllRequested);
    menu_item(ui, events, "Select None", AppIntent::SelectNoneRequested);
}

fn render_view_menu(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let view = &state.project_view;
    let render = &state.render_view;

    ui.menu_button("Active", |ui| {
        toggle_item(
            ui,
            events,
            view.active.panel_open,
            "Panel",
            AppIntent::ActivePanelToggled,
        );

        ui.separator();

        for tab in ActiveTab::ALL {
            let checked = view.active.panel_open && view.active.tab == Some(tab);
            toggle_item(
                ui,
                events,
                checked,
                tab.label(),
                AppIntent::ActiveTabRequested { tab },
            );
        }
    });

    toggle_item(
        ui,
        events,
        render.camera.projection == Projection::Orthographic,
        "Orthographic Camera",
        AppIntent::CameraToggled,
    );
    toggle_item(ui, events, view.drawer.open, "Drawer", AppIntent::DrawerToggled);
    toggle_item(ui, events, view.focused, "Focused", AppIntent::FocusToggled);

    ui.separator();

    ui.menu_button("Grid", |ui| {
        toggle_item(ui, events, render.grid.visible, "Visible", AppIntent::GridToggled);

        ui.separator();

        for axis in Axis::ALL {
            ui.menu_button(axis.label(), |ui| {
                for value in GridAxis::ALL {
                    toggle_item(
                        ui,
                        events,
                        render.grid.axis(axis) == value,
                        value.label(),
                        AppIntent::GridAxisChanged { axis, value },
                    );
                }
            });
        }
    });

    ui.menu_button("Ruler", |ui| {
        toggle_item(ui, events, render.ruler.visible, "Visible", AppIntent::RulerToggled);
        toggle_item(ui, events, render.ruler.snap, "Snap", AppIntent::RulerSnapToggled);

        ui.separator();

        let has_hover = render.ruler.hover.is_some();
        menu_item_enabled(
            ui,
            events,
            has_hover,
            "Set Point A",
            AppIntent::RulerPointRequested {
                point: RulerPoint::A,
            },
        );
        menu_item_enabled(
            ui,
            events,
            has_hover,
            "Set Point B",
            AppIntent::RulerPointRequested {
                point: RulerPoint::B,
            },
        );
        menu_item(ui, events, "Clear Points", AppIntent::RulerPointsCleared);
    });
}
