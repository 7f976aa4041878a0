//! Use-Case: Zwischenablage (Kopieren, Einfügen, Duplizieren).

use crate::app::AppState;
use crate::core::{ClipboardItem, NodePath, Project};

/// Legt eine Kopie des aktiven Knotens in die Zwischenablage.
///
/// Der Knotenname geht zusätzlich an die System-Zwischenablage, damit das
/// Backend Ctrl+V als `Paste` weiterreicht.
pub fn copy_active(state: &mut AppState) {
    let Some(path) = state.project_view.active.path else {
        log::debug!("Kopieren: kein aktiver Knoten");
        return;
    };
    let Some(item) = ClipboardItem::from_project(&state.project, path) else {
        log::debug!("Kopieren: Pfad {} existiert nicht", path);
        return;
    };

    log::info!("Kopiert: {}", item.name());
    state.ui.system_clipboard_text = Some(item.name().to_string());
    state.set_clipboard(item);
}

/// Hängt eine Kopie des aktiven Knotens an dessen Elternknoten an.
pub fn duplicate_active(state: &mut AppState) {
    let Some(path) = state.project_view.active.path else {
        log::debug!("Duplizieren: kein aktiver Knoten");
        return;
    };
    let Some(item) = ClipboardItem::from_project(&state.project, path) else {
        log::debug!("Duplizieren: Pfad {} existiert nicht", path);
        return;
    };

    let mut project = Project::clone(&state.project);
    let target = match item.into_copy() {
        ClipboardItem::Component(component) => Some(project.add_component(component)),
        ClipboardItem::Board(board) => project.add_board(path.component_index(), board),
        ClipboardItem::Cut(cut) => path
            .board_indices()
            .and_then(|(c, b)| project.add_cut(c, b, cut)),
    };

    if let Some(target) = target {
        log::info!("Dupliziert: {} → {}", path, target);
        state.commit_project(project);
    }
}

/// Fügt den Inhalt der Zwischenablage ein.
///
/// Komponenten landen am Projektende, Bretter in der Komponente des aktiven
/// Knotens, Schnitte im aktiven Brett (bzw. dem Brett des aktiven Schnitts).
pub fn paste(state: &mut AppState) {
    let Some(item) = state.clipboard.clone() else {
        log::debug!("Einfügen: Zwischenablage leer");
        return;
    };
    let active = state.project_view.active.path;

    let mut project = Project::clone(&state.project);
    let target = match item.into_copy() {
        ClipboardItem::Component(component) => Some(project.add_component(component)),
        ClipboardItem::Board(board) => {
            active.and_then(|path| project.add_board(path.component_index(), board))
        }
        ClipboardItem::Cut(cut) => match active {
            Some(NodePath::Board { component, board })
            | Some(NodePath::Cut {
                component, board, ..
            }) => project.add_cut(component, board, cut),
            _ => None,
        },
    };

    match target {
        Some(target) => {
            log::info!("Eingefügt: {}", target);
            state.commit_project(project);
        }
        None => log::debug!("Einfügen: kein passendes Ziel für den Zwischenablage-Inhalt"),
    }
}
