use crate::app::{AppIntent, UiState};
use crate::woodcut::{woodcut_file_name, WOODCUT_EXTENSION};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
///
/// `project_name` liefert den Vorschlag für den Speichern-Dialog, wenn noch
/// kein Dateipfad bekannt ist.
pub fn handle_file_dialogs(ui_state: &mut UiState, project_name: &str) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Open-Datei-Dialog
    if ui_state.show_file_dialog {
        ui_state.show_file_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Woodcut Project", &[WOODCUT_EXTENSION])
            .pick_file()
        {
            events.push(AppIntent::FileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Save-Datei-Dialog
    if ui_state.show_save_file_dialog {
        ui_state.show_save_file_dialog = false;

        let default_name = ui_state
            .current_file_path
            .as_ref()
            .and_then(|p| std::path::Path::new(p).file_name())
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| woodcut_file_name(project_name));

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Woodcut Project", &[WOODCUT_EXTENSION])
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::SaveFilePathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Export-Ziel (XLSX, PNG, 3D)
    if let Some(export) = &ui_state.pending_export {
        let mut dialog = rfd::FileDialog::new().set_file_name(&export.file_name);
        if let Some(extension) = std::path::Path::new(&export.file_name)
            .extension()
            .and_then(|e| e.to_str())
        {
            dialog = dialog.add_filter(extension.to_uppercase(), &[extension]);
        }

        match dialog.save_file() {
            Some(path) => events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&path),
            }),
            None => events.push(AppIntent::ExportCancelled),
        }
    }

    events
}
