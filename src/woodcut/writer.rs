//! Writer für `.woodcut`-Dateien.

use crate::core::Project;
use anyhow::Result;

/// Serialisiert ein Projekt als kompaktes JSON.
pub fn write_woodcut(project: &Project) -> Result<String> {
    Ok(serde_json::to_string(project)?)
}
