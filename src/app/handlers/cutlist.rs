//! Handler für Zuschnittlisten.

use crate::app::use_cases;
use crate::app::AppState;
use crate::engine::CutlistEngine;

pub fn add(state: &mut AppState) {
    use_cases::cutlist::add_cutlist(state);
}

pub fn remove(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::cutlist::remove_cutlist(state, index)
}

pub fn add_stock(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::cutlist::add_cutlist_stock(state, index)
}

/// Übernimmt die Projekt-Bretter in die Zuschnittliste.
pub fn collect_boards(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::cutlist::collect_cutlist_boards(state, index)
}

/// Berechnet die Zuschnittliste über die Engine.
pub fn calculate(
    state: &mut AppState,
    engine: &dyn CutlistEngine,
    index: usize,
) -> anyhow::Result<()> {
    use_cases::cutlist::calculate_cutlist(state, engine, index)
}

/// Exportiert die berechnete Zuschnittliste.
pub fn export(state: &mut AppState, engine: &dyn CutlistEngine, index: usize) -> anyhow::Result<()> {
    use_cases::cutlist::export_cutlist(state, engine, index)
}
