//! Globale Tastenkürzel.
//!
//! Übersetzt egui-Tastenereignisse über die Hotkey-Tabelle in `AppIntent`s.

use crate::app::state::{ActiveTab, RulerPoint};
use crate::app::AppIntent;
use crate::shared::hotkeys::resolve;
use crate::shared::{Chord, HotkeyAction, HotkeyKey};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Texteingabefeld den Fokus hat, sind alle Kürzel deaktiviert.
pub fn collect_keyboard_intents(ctx: &egui::Context, text_input_focused: bool) -> Vec<AppIntent> {
    if text_input_focused {
        return Vec::new();
    }

    ctx.input(|i| {
        let copy_as_key = has_command_key(&i.events, egui::Key::C);
        let paste_as_key = has_command_key(&i.events, egui::Key::V);

        i.events
            .iter()
            .filter(|event| match event {
                egui::Event::Copy => !copy_as_key,
                egui::Event::Paste(_) => !paste_as_key,
                _ => true,
            })
            .filter_map(chord_for_event)
            .filter_map(resolve)
            .map(intent_for_action)
            .collect()
    })
}

/// Prüft, ob `key` mit Ctrl/Cmd in diesem Frame gedrückt wurde.
///
/// Liefert das Backend Ctrl+C/Ctrl+V zusätzlich als Tastenereignis, wird
/// das `Copy`/`Paste`-Ereignis desselben Frames übergangen.
fn has_command_key(events: &[egui::Event], wanted: egui::Key) -> bool {
    events.iter().any(|event| {
        matches!(
            event,
            egui::Event::Key { key, pressed: true, modifiers, .. }
                if *key == wanted && (modifiers.ctrl || modifiers.mac_cmd)
        )
    })
}

/// Ermittelt die Tastenkombination eines egui-Ereignisses.
///
/// Ctrl+C und Ctrl+V kommen je nach Backend als `Copy`/`Paste` oder als
/// Tastenereignis an.
fn chord_for_event(event: &egui::Event) -> Option<Chord> {
    match event {
        egui::Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } => Some(Chord {
            alt: modifiers.alt,
            ctrl: modifiers.ctrl || modifiers.mac_cmd,
            shift: modifiers.shift,
            key: hotkey_key(*key)?,
        }),
        egui::Event::Copy => Some(Chord::ctrl(HotkeyKey::C)),
        egui::Event::Paste(_) => Some(Chord::ctrl(HotkeyKey::V)),
        _ => None,
    }
}

fn hotkey_key(key: egui::Key) -> Option<HotkeyKey> {
    let mapped = match key {
        egui::Key::A => HotkeyKey::A,
        egui::Key::B => HotkeyKey::B,
        egui::Key::C => HotkeyKey::C,
        egui::Key::D => HotkeyKey::D,
        egui::Key::E => HotkeyKey::E,
        egui::Key::F => HotkeyKey::F,
        egui::Key::G => HotkeyKey::G,
        egui::Key::H => HotkeyKey::H,
        egui::Key::N => HotkeyKey::N,
        egui::Key::O => HotkeyKey::O,
        egui::Key::Q => HotkeyKey::Q,
        egui::Key::R => HotkeyKey::R,
        egui::Key::S => HotkeyKey::S,
        egui::Key::T => HotkeyKey::T,
        egui::Key::V => HotkeyKey::V,
        egui::Key::Z => HotkeyKey::Z,
        egui::Key::Num1 => HotkeyKey::Num1,
        egui::Key::Num2 => HotkeyKey::Num2,
        egui::Key::Num3 => HotkeyKey::Num3,
        egui::Key::Num4 => HotkeyKey::Num4,
        egui::Key::Delete => HotkeyKey::Delete,
        egui::Key::ArrowLeft => HotkeyKey::ArrowLeft,
        egui::Key::ArrowRight => HotkeyKey::ArrowRight,
        egui::Key::Slash => HotkeyKey::Slash,
        egui::Key::Backtick => HotkeyKey::Backtick,
        _ => return None,
    };
    Some(mapped)
}

/// Intent, den eine Menü-Aktion auslöst.
pub fn intent_for_action(action: HotkeyAction) -> AppIntent {
    match action {
        HotkeyAction::EditCopy => AppIntent::CopyRequested,
        HotkeyAction::EditDelete => AppIntent::DeleteRequested,
        HotkeyAction::EditDuplicate => AppIntent::DuplicateRequested,
        HotkeyAction::EditHistoryRedo => AppIntent::RedoRequested,
        HotkeyAction::EditHistoryUndo => AppIntent::UndoRequested,
        HotkeyAction::EditNew => AppIntent::NewRequested,
        HotkeyAction::EditPaste => AppIntent::PasteRequested,
        HotkeyAction::EditTransform => AppIntent::TransformToggled,
        HotkeyAction::EditVisibility => AppIntent::VisibilityToggleRequested,
        HotkeyAction::FileExport => AppIntent::ExportXlsxRequested,
        HotkeyAction::FileNew => AppIntent::NewWindowRequested,
        HotkeyAction::FileOpen => AppIntent::OpenFileRequested,
        HotkeyAction::FileSave => AppIntent::SaveRequested,
        HotkeyAction::SelectionFind => AppIntent::FindRequested,
        HotkeyAction::SelectionNext => AppIntent::SelectNextRequested,
        HotkeyAction::SelectionPrevious => AppIntent::SelectPreviousRequested,
        HotkeyAction::SelectionSelectAll => AppIntent::SelectAllRequested,
        HotkeyAction::SelectionSelectNone => AppIntent::SelectNoneRequested,
        HotkeyAction::ViewActiveDimension => AppIntent::ActiveTabRequested {
            tab: ActiveTab::Dimension,
        },
        HotkeyAction::ViewActiveInfo => AppIntent::ActiveTabRequested {
            tab: ActiveTab::Info,
        },
        HotkeyAction::ViewActivePosition => AppIntent::ActiveTabRequested {
            tab: ActiveTab::Position,
        },
        HotkeyAction::ViewActiveRotation => AppIntent::ActiveTabRequested {
            tab: ActiveTab::Rotation,
        },
        HotkeyAction::ViewActive => AppIntent::ActivePanelToggled,
        HotkeyAction::ViewCamera => AppIntent::CameraToggled,
        HotkeyAction::ViewDrawer => AppIntent::DrawerToggled,
        HotkeyAction::ViewFocused => AppIntent::FocusToggled,
        HotkeyAction::ViewGrid => AppIntent::GridToggled,
        HotkeyAction::ViewRulerPointA => AppIntent::RulerPointRequested {
            point: RulerPoint::A,
        },
        HotkeyAction::ViewRulerPointB => AppIntent::RulerPointRequested {
            point: RulerPoint::B,
        },
        HotkeyAction::ViewRulerPointsClear => AppIntent::RulerPointsCleared,
        HotkeyAction::ViewRulerSnap => AppIntent::RulerSnapToggled,
        HotkeyAction::ViewRuler => AppIntent::RulerToggled,
    }
}
