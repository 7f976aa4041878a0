//! Use-Case-Funktionen für Zuschnittlisten (Berechnung und Export über die Engine).

use crate::app::state::PendingExport;
use crate::app::AppState;
use crate::core::{Cutlist, CutlistBoard, Measurement, Project, StockItem};
use crate::engine::{CalculateOutcome, CutlistEngine};
use anyhow::bail;
use rand::Rng;

/// Obergrenze (exklusiv) für den Zufalls-Seed der Engine.
pub const SEED_RANGE: u64 = 1_000_000;

fn cutlist_at(project: &Project, index: usize) -> anyhow::Result<&Cutlist> {
    match project.cutlists.get(index) {
        Some(cutlist) => Ok(cutlist),
        None => bail!("No cutlist found."),
    }
}

/// Hängt eine leere Zuschnittliste an.
pub fn add_cutlist(state: &mut AppState) {
    let mut project = Project::clone(&state.project);
    let name = format!("Cutlist {}", project.cutlists.len() + 1);
    log::info!("Zuschnittliste '{}' angelegt", name);
    project.cutlists.push(Cutlist::new(name));
    state.commit_project(project);
}

/// Entfernt die Zuschnittliste am Index.
pub fn remove_cutlist(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    cutlist_at(&state.project, index)?;

    let mut project = Project::clone(&state.project);
    let removed = project.cutlists.remove(index);
    log::info!("Zuschnittliste '{}' entfernt", removed.name);
    state.commit_project(project);
    Ok(())
}

fn default_stock(measurement: Measurement, number: usize) -> StockItem {
    let (length, width, thickness) = match measurement {
        Measurement::Metric => (2440.0, 1220.0, 18.0),
        Measurement::Imperial => (96.0, 48.0, 0.75),
    };
    StockItem {
        name: format!("Stock {number}"),
        length,
        width,
        thickness,
        quantity: 1,
    }
}

/// Fügt der Zuschnittliste eine Standard-Lagerware hinzu.
pub fn add_cutlist_stock(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    cutlist_at(&state.project, index)?;

    let mut project = Project::clone(&state.project);
    let measurement = project.settings.measurement;
    let cutlist = &mut project.cutlists[index];
    let stock = default_stock(measurement, cutlist.input.stock.len() + 1);
    cutlist.input.stock.push(stock);
    cutlist.output.clear();
    state.commit_project(project);
    Ok(())
}

/// Sammelt alle Bretter der passenden Holzart als Zuschnitt-Bretter.
///
/// Bretter mit gleichem Namen und gleichen Maßen werden über `quantity`
/// zusammengefasst. Ein vorhandenes Ergebnis wird verworfen.
pub fn collect_boards(project: &Project, cutlist: &Cutlist) -> Vec<CutlistBoard> {
    let mut boards: Vec<CutlistBoard> = Vec::new();
    let wood = cutlist.board_type.wood;

    for board in project
        .components
        .iter()
        .flat_map(|c| c.boards.iter())
        .filter(|b| b.wood == wood)
    {
        let [length, width, thickness] = board.dimensions.to_array();
        let existing = boards.iter_mut().find(|b| {
            b.name == board.name
                && b.length == length
                && b.width == width
                && b.thickness == thickness
        });
        match existing {
            Some(entry) => entry.quantity += 1,
            None => boards.push(CutlistBoard {
                name: board.name.clone(),
                length,
                width,
                thickness,
                quantity: 1,
            }),
        }
    }
    boards
}

/// Übernimmt die Bretter des Projekts in die Zuschnittliste.
pub fn collect_cutlist_boards(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    let boards = collect_boards(&state.project, cutlist_at(&state.project, index)?);
    log::info!("{} Bretter für Zuschnittliste {} gesammelt", boards.len(), index);

    let mut project = Project::clone(&state.project);
    let cutlist = &mut project.cutlists[index];
    cutlist.input.boards = boards;
    cutlist.output.clear();
    state.commit_project(project);
    Ok(())
}

/// Berechnet das Packing der Zuschnittliste über die Engine.
///
/// Jede Anfrage bekommt einen neuen Zufalls-Seed. Ein gepacktes Ergebnis
/// ersetzt die Zuschnittliste (neuer Verlaufseintrag).
pub fn calculate_cutlist(
    state: &mut AppState,
    engine: &dyn CutlistEngine,
    index: usize,
) -> anyhow::Result<()> {
    let cutlist = cutlist_at(&state.project, index)?;
    if cutlist.input.stock.is_empty() {
        bail!("No stock found.");
    }
    if cutlist.input.boards.is_empty() {
        bail!("No boards found.");
    }

    let mut request = cutlist.clone();
    request.options.seed = rand::thread_rng().gen_range(0..SEED_RANGE);
    log::debug!(
        "Berechne Zuschnittliste '{}' (Seed {})",
        request.name,
        request.options.seed
    );

    match engine.calculate_cutlist(&request)? {
        CalculateOutcome::Packed(result) => {
            log::info!(
                "Zuschnittliste '{}' berechnet: {} Lagerware(n) belegt",
                result.name,
                result.output.len()
            );
            let mut project = Project::clone(&state.project);
            project.cutlists[index] = result;
            state.commit_project(project);
            Ok(())
        }
        CalculateOutcome::Unfit(board) => bail!("Unable to fit board: {}", board.name),
    }
}

/// Exportiert eine berechnete Zuschnittliste als `<cutlist>.xlsx`.
pub fn export_cutlist(
    state: &mut AppState,
    engine: &dyn CutlistEngine,
    index: usize,
) -> anyhow::Result<()> {
    let cutlist = cutlist_at(&state.project, index)?;
    if !cutlist.is_calculated() {
        bail!("No cutlist found.");
    }

    let image = super::export::wood_image_bytes(&state.options, cutlist.board_type.wood)?;
    let bytes = engine.export_cutlist(cutlist, state.project.settings.measurement, &image)?;

    state.ui.pending_export = Some(PendingExport {
        file_name: format!("{}.xlsx", cutlist.name),
        bytes,
        success_message: None,
    });
    Ok(())
}
