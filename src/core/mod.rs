//! Core-Domänentypen: Projekt, Komponenten, Bretter, Schnitte, Zuschnittlisten.

pub mod clipboard;
pub mod cutlist;
pub mod node_path;
/// Projektbaum und Copy-on-Write-Mutationen
pub mod project;

pub use clipboard::ClipboardItem;
pub use cutlist::{
    BoardType, Cutlist, CutlistBoard, CutlistInput, CutlistOptions, Placement, StockItem,
    StockLayout, WoodType,
};
pub use node_path::{NodeKind, NodePath};
pub use project::{
    copy_name, Board, Component, Cut, CutKind, Measurement, Project, ProjectSettings,
    DEFAULT_BOUNDS,
};
