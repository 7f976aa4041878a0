//! Menü "Schnitt hinzufügen" für das aktive Brett.

use crate::app::{AppIntent, AppState};
use crate::core::CutKind;

/// Rendert das Schnitt-Menü, solange es geöffnet ist.
pub fn render_cut_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !state.project_view.cut_menu_open {
        return events;
    }

    let mut open = true;
    egui::Window::new("Add Cut")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            for kind in CutKind::ALL {
                if ui.button(kind.label()).clicked() {
                    events.push(AppIntent::CutKindChosen { kind });
                }
            }
        });

    if !open {
        events.push(AppIntent::CutMenuClosed);
    }
    events
}
