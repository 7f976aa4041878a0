//! Zentrale Konfiguration für den Woodcut Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Measurement, ProjectSettings, WoodType, DEFAULT_BOUNDS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl an Projekt-Snapshots im Undo/Redo-Verlauf.
pub const HISTORY_LIMIT: usize = 200;

// ── Alerts ──────────────────────────────────────────────────────────

/// Anzeigedauer eines Alerts in Millisekunden.
pub const ALERT_DURATION_MS: u64 = 1000;

// ── Dateien ─────────────────────────────────────────────────────────

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "woodcut_editor.toml";
/// Standard-Verzeichnisname für Sessions (relativ zur Binary).
pub const SESSION_DIR_NAME: &str = "sessions";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `woodcut_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Tiefe des Undo/Redo-Verlaufs
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Anzeigedauer eines Alerts (ms)
    #[serde(default = "default_alert_duration_ms")]
    pub alert_duration_ms: u64,
    /// Verzeichnis für Session-Dateien (None = `sessions/` neben der Binary)
    #[serde(default)]
    pub session_dir: Option<PathBuf>,
    /// Verzeichnis mit Holz-Texturen `<holzart>.png` für den XLSX-Export
    #[serde(default)]
    pub wood_image_dir: Option<PathBuf>,
    /// Maßsystem neuer Projekte
    #[serde(default)]
    pub default_measurement: Measurement,
    /// Szenen-Ausdehnung neuer Projekte
    #[serde(default = "default_bounds")]
    pub default_bounds: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_limit: HISTORY_LIMIT,
            alert_duration_ms: ALERT_DURATION_MS,
            session_dir: None,
            wood_image_dir: None,
            default_measurement: Measurement::Metric,
            default_bounds: DEFAULT_BOUNDS,
        }
    }
}

fn default_history_limit() -> usize {
    HISTORY_LIMIT
}

fn default_alert_duration_ms() -> u64 {
    ALERT_DURATION_MS
}

fn default_bounds() -> f32 {
    DEFAULT_BOUNDS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        binary_dir().join(CONFIG_FILE_NAME)
    }

    /// Effektives Session-Verzeichnis.
    pub fn resolved_session_dir(&self) -> PathBuf {
        self.session_dir
            .clone()
            .unwrap_or_else(|| binary_dir().join(SESSION_DIR_NAME))
    }

    /// Pfad der Holz-Textur für `wood`, falls ein Verzeichnis konfiguriert ist.
    pub fn wood_image_path(&self, wood: WoodType) -> Option<PathBuf> {
        self.wood_image_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.png", wood.slug())))
    }

    /// Einstellungen für neu angelegte Projekte.
    pub fn project_settings(&self) -> ProjectSettings {
        let bounds = if self.default_bounds.is_finite() && self.default_bounds > 0.0 {
            self.default_bounds
        } else {
            DEFAULT_BOUNDS
        };
        ProjectSettings {
            measurement: self.default_measurement,
            bounds,
        }
    }
}

fn binary_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let options = EditorOptions::load_from_file(&dir.path().join("missing.toml"));
        assert_eq!(options, EditorOptions::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "history_limit = 5\ndefault_measurement = \"imperial\"\n")
            .expect("schreiben");

        let options = EditorOptions::load_from_file(&path);
        assert_eq!(options.history_limit, 5);
        assert_eq!(options.default_measurement, Measurement::Imperial);
        assert_eq!(options.alert_duration_ms, ALERT_DURATION_MS);
    }

    #[test]
    fn save_and_load_preserves_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        let options = EditorOptions {
            wood_image_dir: Some(dir.path().join("woods")),
            default_bounds: 48.0,
            ..EditorOptions::default()
        };

        options.save_to_file(&path).expect("speichern");
        assert_eq!(EditorOptions::load_from_file(&path), options);
    }

    #[test]
    fn wood_image_path_uses_slug() {
        let options = EditorOptions {
            wood_image_dir: Some(PathBuf::from("woods")),
            ..EditorOptions::default()
        };
        assert_eq!(
            options.wood_image_path(WoodType::Walnut),
            Some(PathBuf::from("woods").join("walnut.png"))
        );
        assert_eq!(EditorOptions::default().wood_image_path(WoodType::Oak), None);
    }

    #[test]
    fn invalid_default_bounds_fall_back() {
        let options = EditorOptions {
            default_bounds: -1.0,
            ..EditorOptions::default()
        };
        assert_eq!(options.project_settings().bounds, DEFAULT_BOUNDS);
    }
}
