//! Datei-Dialoge (Öffnen, Speichern, Export-Ziel).

mod file_dialogs;

pub use file_dialogs::handle_file_dialogs;
