//! Untere Schublade: Zuschnittlisten und Projekteinstellungen.

use crate::app::state::DrawerTab;
use crate::app::{AppIntent, AppState};
use crate::core::{Cutlist, Measurement, ProjectSettings};

/// Rendert die Schublade, solange sie geöffnet ist.
pub fn render_drawer(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let drawer = &state.project_view.drawer;
    if !drawer.open {
        return events;
    }
    let tab = drawer.tab.unwrap_or(DrawerTab::Cutlists);

    egui::TopBottomPanel::bottom("drawer")
        .resizable(true)
        .default_height(220.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (candidate, label) in [
                    (DrawerTab::Cutlists, "Cutlists"),
                    (DrawerTab::Settings, "Settings"),
                ] {
                    if ui.selectable_label(tab == candidate, label).clicked() {
                        events.push(AppIntent::DrawerTabSelected { tab: candidate });
                    }
                }
            });
            ui.separator();

            match tab {
                DrawerTab::Cutlists => render_cutlists(ui, state, &mut events),
                DrawerTab::Settings => render_settings(ui, &state.project.settings, &mut events),
            }
        });

    events
}

fn render_cutlists(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    if ui.button("Add Cutlist").clicked() {
        events.push(AppIntent::CutlistAddRequested);
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (index, cutlist) in state.project.cutlists.iter().enumerate() {
            ui.push_id(index, |ui| render_cutlist_row(ui, index, cutlist, events));
        }
    });
}

fn render_cutlist_row(
    ui: &mut egui::Ui,
    index: usize,
    cutlist: &Cutlist,
    events: &mut Vec<AppIntent>,
) {
    ui.horizontal(|ui| {
        ui.strong(&cutlist.name);
        ui.label(format!(
            "{} | {} stock | {} boards | {} layouts",
            cutlist.board_type.wood.slug(),
            cutlist.input.stock.len(),
            cutlist.input.boards.len(),
            cutlist.output.len()
        ));

        if ui.button("Add Stock").clicked() {
            events.push(AppIntent::CutlistStockAddRequested { index });
        }
        if ui.button("Collect Boards").clicked() {
            events.push(AppIntent::CutlistBoardsCollectRequested { index });
        }
        if ui.button("Calculate").clicked() {
            events.push(AppIntent::CutlistCalculateRequested { index });
        }
        if ui
            .add_enabled(cutlist.is_calculated(), egui::Button::new("Export XLSX"))
            .clicked()
        {
            events.push(AppIntent::CutlistExportRequested { index });
        }
        if ui.button("Remove").clicked() {
            events.push(AppIntent::CutlistRemoveRequested { index });
        }
    });
}

fn render_settings(ui: &mut egui::Ui, settings: &ProjectSettings, events: &mut Vec<AppIntent>) {
    let mut edited = settings.clone();

    egui::Grid::new("project_settings").num_columns(2).show(ui, |ui| {
        ui.label("Measurement");
        ui.horizontal(|ui| {
            ui.radio_value(&mut edited.measurement, Measurement::Metric, "Metric");
            ui.radio_value(&mut edited.measurement, Measurement::Imperial, "Imperial");
        });
        ui.end_row();

        ui.label("Bounds");
        if let Some(bounds) = bounds_input(ui, settings.bounds, edited.measurement.unit_label()) {
            edited.bounds = bounds;
        }
        ui.end_row();
    });

    if edited != *settings {
        events.push(AppIntent::ProjectSettingsChanged { settings: edited });
    }
}

/// Eingabe der Ausdehnung.
///
/// Zwischenwerte liegen im egui-Speicher; ein neuer Wert wird erst
/// geliefert, wenn das Ziehen endet oder das Textfeld den Fokus verliert.
fn bounds_input(ui: &mut egui::Ui, bounds: f32, unit: &str) -> Option<f32> {
    let id = ui.make_persistent_id("settings_bounds");
    let mut value = ui.data(|d| d.get_temp::<f32>(id)).unwrap_or(bounds);

    let response = ui.add(
        egui::DragValue::new(&mut value)
            .range(1.0..=100_000.0)
            .suffix(format!(" {unit}")),
    );

    if response.drag_stopped() || response.lost_focus() {
        ui.data_mut(|d| d.remove::<f32>(id));
        return (value != bounds).then_some(value);
    }
    if response.dragged() || response.has_focus() {
        ui.data_mut(|d| d.insert_temp(id, value));
    } else {
        ui.data_mut(|d| d.remove::<f32>(id));
    }
    None
}
