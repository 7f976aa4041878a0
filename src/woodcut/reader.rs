//! Parser für `.woodcut`-Dateien.

use crate::core::Project;
use anyhow::{bail, Context, Result};

/// Parsed ein Projekt aus dem JSON-Inhalt einer `.woodcut`-Datei.
///
/// Die Typprüfung erfolgt über die getypte Deserialisierung; zusätzlich
/// werden Werte abgelehnt, mit denen Viewport und Engine nicht arbeiten können.
pub fn parse_woodcut(content: &str) -> Result<Project> {
    let project: Project =
        serde_json::from_str(content).context("Invalid project file")?;
    validate(&project)?;
    Ok(project)
}

fn validate(project: &Project) -> Result<()> {
    let bounds = project.settings.bounds;
    if !bounds.is_finite() || bounds <= 0.0 {
        bail!("Invalid project file: bounds must be positive, got {bounds}");
    }

    for component in &project.components {
        for board in &component.boards {
            if !board.dimensions.is_finite() {
                bail!(
                    "Invalid project file: board '{}' has non-finite dimensions",
                    board.name
                );
            }
            for cut in &board.cuts {
                if !cut.dimensions.is_finite() {
                    bail!(
                        "Invalid project file: cut '{}' has non-finite dimensions",
                        cut.name
                    );
                }
            }
        }
    }
    Ok(())
}
