//! UI-Komponenten: Menü, Projektbaum, Panels, Dialoge, Keyboard-Shortcuts.
//!
//! Jede Funktion liest den `AppState` und gibt die ausgelösten `AppIntent`s
//! zurück. Mutiert wird ausschließlich über den Controller.

mod active_panel;
mod alerts;
mod cut_menu;
pub mod dialogs;
mod drawer;
mod find;
pub mod keyboard;
pub mod menu;
pub mod status;
mod tree;
mod viewport;

pub use active_panel::render_active_panel;
pub use alerts::render_alerts;
pub use cut_menu::render_cut_menu;
pub use dialogs::handle_file_dialogs;
pub use drawer::render_drawer;
pub use find::render_find_dialog;
pub use keyboard::collect_keyboard_intents;
pub use menu::render_menu;
pub use status::render_status_bar;
pub use tree::render_project_tree;
pub use viewport::render_viewport;
