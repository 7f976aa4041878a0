//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und die Hotkey-Tabelle, die sowohl von `app`
//! als auch von `ui` genutzt werden.

pub mod hotkeys;
pub mod options;

pub use hotkeys::{Chord, HotkeyAction, HotkeyKey, HOTKEYS};
pub use options::EditorOptions;
