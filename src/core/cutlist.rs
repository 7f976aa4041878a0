//! Zuschnittlisten: Packing-Anfrage (Lagerware + Bretter + Optionen) und Ergebnis.
//!
//! Die eigentliche Berechnung erfolgt in der externen Engine
//! (siehe [`crate::engine::CutlistEngine`]).

use serde::{Deserialize, Serialize};

/// Holzart eines Bretts bzw. einer Zuschnittliste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WoodType {
    #[default]
    Pine,
    Oak,
    Maple,
    Walnut,
    Plywood,
    Mdf,
}

impl WoodType {
    /// Alle Holzarten in Anzeige-Reihenfolge.
    pub const ALL: [WoodType; 6] = [
        WoodType::Pine,
        WoodType::Oak,
        WoodType::Maple,
        WoodType::Walnut,
        WoodType::Plywood,
        WoodType::Mdf,
    ];

    /// Kurzname, identisch mit der Serialisierung (z.B. für Textur-Dateinamen).
    pub fn slug(self) -> &'static str {
        match self {
            WoodType::Pine => "pine",
            WoodType::Oak => "oak",
            WoodType::Maple => "maple",
            WoodType::Walnut => "walnut",
            WoodType::Plywood => "plywood",
            WoodType::Mdf => "mdf",
        }
    }
}

/// Materialangabe einer Zuschnittliste
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardType {
    /// Holzart
    #[serde(rename = "type")]
    pub wood: WoodType,
}

/// Verfügbare Lagerware (Rohbretter)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub name: String,
    pub length: f32,
    pub width: f32,
    pub thickness: f32,
    pub quantity: u32,
}

/// Benötigtes Zuschnitt-Brett
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutlistBoard {
    pub name: String,
    pub length: f32,
    pub width: f32,
    pub thickness: f32,
    pub quantity: u32,
}

/// Eingabe der Packing-Anfrage
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CutlistInput {
    #[serde(default)]
    pub stock: Vec<StockItem>,
    #[serde(default)]
    pub boards: Vec<CutlistBoard>,
}

/// Optionen für die Engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutlistOptions {
    /// Sägeblattstärke in Projekteinheiten
    pub kerf: f32,
    /// Zufalls-Seed der Heuristik (wird vor jeder Berechnung neu gesetzt)
    pub seed: u64,
    /// Bretter dürfen um 90° gedreht werden
    pub allow_rotation: bool,
}

impl Default for CutlistOptions {
    fn default() -> Self {
        Self {
            kerf: 3.0,
            seed: 0,
            allow_rotation: true,
        }
    }
}

/// Platzierung eines Bretts auf einer Lagerware
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub board: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub rotated: bool,
}

/// Berechnetes Layout einer einzelnen Lagerware
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLayout {
    pub stock: String,
    pub placements: Vec<Placement>,
}

/// Zuschnittliste: Anfrage plus (ggf. leeres) Ergebnis der Engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cutlist {
    pub name: String,
    #[serde(default)]
    pub board_type: BoardType,
    #[serde(default)]
    pub input: CutlistInput,
    #[serde(default)]
    pub options: CutlistOptions,
    #[serde(default)]
    pub output: Vec<StockLayout>,
}

impl Cutlist {
    /// Leere Zuschnittliste mit Standard-Optionen.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board_type: BoardType::default(),
            input: CutlistInput::default(),
            options: CutlistOptions::default(),
            output: Vec::new(),
        }
    }

    /// Gibt `true` zurück, wenn die Engine bereits ein Ergebnis geliefert hat.
    pub fn is_calculated(&self) -> bool {
        !self.output.is_empty()
    }
}
