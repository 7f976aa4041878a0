//! Schnittstelle zur externen Woodcut-Engine.
//!
//! Zuschnitt-Optimierung und alle Export-Codecs (XLSX, OBJ, PLY, STL, glTF)
//! liegen außerhalb dieses Crates. Der Editor ruft sie ausschließlich über
//! den Trait [`CutlistEngine`] auf.

use crate::core::{Cutlist, CutlistBoard, Measurement, Project};
use thiserror::Error;

/// 3D-Exportformate der Engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    Obj,
    Ply,
    Stl,
    Gltf,
}

impl MeshFormat {
    /// Dateiendung ohne Punkt
    pub fn extension(self) -> &'static str {
        match self {
            MeshFormat::Obj => "obj",
            MeshFormat::Ply => "ply",
            MeshFormat::Stl => "stl",
            MeshFormat::Gltf => "gltf",
        }
    }
}

/// Ergebnis einer Zuschnitt-Berechnung
#[derive(Debug, Clone, PartialEq)]
pub enum CalculateOutcome {
    /// Alle Bretter platziert: aktualisierte Zuschnittliste inkl. `output`
    Packed(Cutlist),
    /// Dieses Brett passt auf keine Lagerware
    Unfit(CutlistBoard),
}

/// Fehler der Engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Cutlist engine is not available")]
    Unavailable,

    #[error("{0}")]
    Failed(String),
}

/// Aufrufe in die externe Engine.
pub trait CutlistEngine {
    /// Berechnet das Packing einer Zuschnittliste.
    fn calculate_cutlist(&self, cutlist: &Cutlist) -> Result<CalculateOutcome, EngineError>;

    /// Exportiert eine berechnete Zuschnittliste als XLSX.
    fn export_cutlist(
        &self,
        cutlist: &Cutlist,
        unit: Measurement,
        wood_image: &[u8],
    ) -> Result<Vec<u8>, EngineError>;

    /// Exportiert alle Zuschnittlisten des Projekts als XLSX
    /// (`wood_images[i]` gehört zu `project.cutlists[i]`).
    fn export_project(&self, project: &Project, wood_images: &[Vec<u8>])
        -> Result<Vec<u8>, EngineError>;

    /// Exportiert die sichtbare Geometrie des Projekts.
    fn export_mesh(&self, project: &Project, format: MeshFormat) -> Result<Vec<u8>, EngineError>;
}

/// Platzhalter ohne gelinkte Engine: jeder Aufruf liefert `Unavailable`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableEngine;

impl CutlistEngine for UnavailableEngine {
    fn calculate_cutlist(&self, _cutlist: &Cutlist) -> Result<CalculateOutcome, EngineError> {
        Err(EngineError::Unavailable)
    }

    fn export_cutlist(
        &self,
        _cutlist: &Cutlist,
        _unit: Measurement,
        _wood_image: &[u8],
    ) -> Result<Vec<u8>, EngineError> {
        Err(EngineError::Unavailable)
    }

    fn export_project(
        &self,
        _project: &Project,
        _wood_images: &[Vec<u8>],
    ) -> Result<Vec<u8>, EngineError> {
        Err(EngineError::Unavailable)
    }

    fn export_mesh(&self, _project: &Project, _format: MeshFormat) -> Result<Vec<u8>, EngineError> {
        Err(EngineError::Unavailable)
    }
}
