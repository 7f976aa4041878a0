//! Use-Case-Funktionen für Exporte (XLSX, PNG, 3D-Formate).
//!
//! Exporte erzeugen zuerst die Bytes und legen sie als `PendingExport` ab.
//! Die UI fragt danach per Speichern-Dialog den Zielpfad ab.

use crate::app::alerts::AlertSeverity;
use crate::app::state::PendingExport;
use crate::app::AppState;
use crate::core::WoodType;
use crate::engine::{CutlistEngine, MeshFormat};
use crate::shared::EditorOptions;
use anyhow::{anyhow, Context};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Kantenlänge des Ersatz-Holzbilds in Pixeln.
const SWATCH_SIZE: u32 = 64;

/// Liefert das Holzbild für `wood` als PNG-Bytes.
///
/// Liegt im konfigurierten Bildverzeichnis keine Datei, wird eine
/// einfarbige Fläche erzeugt.
pub fn wood_image_bytes(options: &EditorOptions, wood: WoodType) -> anyhow::Result<Vec<u8>> {
    if let Some(path) = options.wood_image_path(wood).filter(|p| p.is_file()) {
        return std::fs::read(&path)
            .with_context(|| format!("Unable to read wood image: {}", path.display()));
    }
    wood_swatch_png(wood)
}

fn wood_swatch_png(wood: WoodType) -> anyhow::Result<Vec<u8>> {
    let color = match wood {
        WoodType::Pine => [222, 184, 135, 255],
        WoodType::Oak => [193, 154, 107, 255],
        WoodType::Maple => [235, 206, 160, 255],
        WoodType::Walnut => [93, 67, 44, 255],
        WoodType::Plywood => [210, 180, 140, 255],
        WoodType::Mdf => [160, 130, 98, 255],
    };
    let swatch = RgbaImage::from_pixel(SWATCH_SIZE, SWATCH_SIZE, Rgba(color));
    encode_png(&swatch)
}

fn encode_png(image: &RgbaImage) -> anyhow::Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .context("Unable to encode PNG")?;
    Ok(buffer.into_inner())
}

/// Exportiert alle Zuschnittlisten des Projekts als `<project>.xlsx`.
pub fn export_project_xlsx(state: &mut AppState, engine: &dyn CutlistEngine) -> anyhow::Result<()> {
    let images = state
        .project
        .cutlists
        .iter()
        .map(|cutlist| wood_image_bytes(&state.options, cutlist.board_type.wood))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let bytes = engine.export_project(&state.project, &images)?;
    log::info!("XLSX-Export erzeugt ({} Bytes)", bytes.len());

    state.ui.pending_export = Some(PendingExport {
        file_name: format!("{}.xlsx", state.project.name),
        bytes,
        success_message: Some("Exported project to XLSX".to_string()),
    });
    Ok(())
}

/// Kodiert einen Viewport-Screenshot als `<project>.png`.
pub fn encode_screenshot(
    state: &mut AppState,
    width: u32,
    height: u32,
    rgba: Vec<u8>,
) -> anyhow::Result<()> {
    let image = RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| anyhow!("Invalid screenshot buffer ({width}x{height})"))?;
    let bytes = encode_png(&image)?;

    state.ui.pending_export = Some(PendingExport {
        file_name: format!("{}.png", state.project.name),
        bytes,
        success_message: None,
    });
    Ok(())
}

/// Exportiert die Geometrie als `<project>.<ext>`.
pub fn export_mesh(
    state: &mut AppState,
    engine: &dyn CutlistEngine,
    format: MeshFormat,
) -> anyhow::Result<()> {
    let bytes = engine.export_mesh(&state.project, format)?;
    log::info!("{:?}-Export erzeugt ({} Bytes)", format, bytes.len());

    state.ui.pending_export = Some(PendingExport {
        file_name: format!("{}.{}", state.project.name, format.extension()),
        bytes,
        success_message: None,
    });
    Ok(())
}

/// Schreibt den vorgemerkten Export an den gewählten Pfad.
pub fn write_pending_export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let Some(export) = state.ui.pending_export.take() else {
        log::debug!("Kein vorgemerkter Export");
        return Ok(());
    };

    std::fs::write(&path, &export.bytes)
        .with_context(|| format!("Unable to write file: {path}"))?;
    log::info!("Export geschrieben: {}", path);

    if let Some(message) = export.success_message {
        state.alerts.push(message, AlertSeverity::Success);
    }
    Ok(())
}

/// Verwirft einen vorgemerkten Export (Dialog abgebrochen).
pub fn discard_pending_export(state: &mut AppState) {
    if state.ui.pending_export.take().is_some() {
        log::debug!("Export verworfen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_wood_image_falls_back_to_png_swatch() {
        let options = EditorOptions {
            wood_image_dir: Some(std::path::PathBuf::from("/does/not/exist")),
            ..EditorOptions::default()
        };
        let bytes = wood_image_bytes(&options, WoodType::Oak).expect("Ersatzbild");
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn wood_image_from_directory_is_used() {
        let dir = tempfile::tempdir().expect("tempdir");
        let options = EditorOptions {
            wood_image_dir: Some(dir.path().to_path_buf()),
            ..EditorOptions::default()
        };
        let path = options.wood_image_path(WoodType::Walnut).expect("Pfad");
        std::fs::write(&path, b"walnut").expect("schreiben");

        assert_eq!(
            wood_image_bytes(&options, WoodType::Walnut).expect("Bild"),
            b"walnut"
        );
    }

    #[test]
    fn screenshot_with_wrong_buffer_size_fails() {
        let mut state = AppState::new();
        assert!(encode_screenshot(&mut state, 4, 4, vec![0; 3]).is_err());
        assert!(state.ui.pending_export.is_none());

        encode_screenshot(&mut state, 2, 1, vec![255; 8]).expect("gültiger Puffer");
        let export = state.ui.pending_export.as_ref().expect("Export vorgemerkt");
        assert_eq!(export.file_name, "Untitled.png");
    }

    #[test]
    fn writing_pending_export_pushes_success_alert() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.xlsx");
        let mut state = AppState::new();
        state.ui.pending_export = Some(PendingExport {
            file_name: "out.xlsx".to_string(),
            bytes: vec![1, 2, 3],
            success_message: Some("Exported project to XLSX".to_string()),
        });

        write_pending_export(&mut state, path.to_string_lossy().to_string()).expect("schreiben");

        assert_eq!(std::fs::read(&path).expect("lesen"), vec![1, 2, 3]);
        assert!(state.ui.pending_export.is_none());
        assert_eq!(
            state.alerts.first().map(|a| a.severity),
            Some(AlertSeverity::Success)
        );
    }
}
