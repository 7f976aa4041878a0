//! Use-Case-Funktionen für Projekt-Mutationen (Edit-Menü).
//!
//! - `clipboard`: Kopieren, Einfügen, Duplizieren
//! - `delete`: Löschen von Selektion oder aktivem Knoten
//! - `nodes`: Hinzufügen, Sichtbarkeit, Projekteinstellungen

mod clipboard;
mod delete;
mod nodes;

pub use clipboard::{copy_active, duplicate_active, paste};
pub use delete::{delete_active, delete_selection};
pub use nodes::{
    add_default_board, add_default_component, add_default_cut, set_all_visible,
    set_project_settings, toggle_node_visibility,
};
