//! `.woodcut`-Projektdateien (JSON-Serialisierung des `Project`).

pub mod reader;
pub mod writer;

pub use reader::parse_woodcut;
pub use writer::write_woodcut;

/// Dateiendung der Projektdateien (ohne Punkt).
pub const WOODCUT_EXTENSION: &str = "woodcut";

/// Vorgeschlagener Dateiname für ein Projekt.
pub fn woodcut_file_name(project_name: &str) -> String {
    format!("{project_name}.{WOODCUT_EXTENSION}")
}
