//! Feste Hotkey-Tabelle der App-Menü-Aktionen.
//!
//! Eine Aktion wird nur ausgelöst, wenn Taste und alle drei Modifier
//! (Alt, Ctrl, Shift) exakt übereinstimmen.

/// Benannte Menü-Aktion mit Tastenkürzel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotkeyAction {
    EditCopy,
    EditDelete,
    EditDuplicate,
    EditHistoryRedo,
    EditHistoryUndo,
    EditNew,
    EditPaste,
    EditTransform,
    EditVisibility,
    FileExport,
    FileNew,
    FileOpen,
    FileSave,
    SelectionFind,
    SelectionNext,
    SelectionPrevious,
    SelectionSelectAll,
    SelectionSelectNone,
    ViewActiveDimension,
    ViewActiveInfo,
    ViewActivePosition,
    ViewActiveRotation,
    ViewActive,
    ViewCamera,
    ViewDrawer,
    ViewFocused,
    ViewGrid,
    ViewRulerPointA,
    ViewRulerPointB,
    ViewRulerPointsClear,
    ViewRulerSnap,
    ViewRuler,
}

/// Tasten, die in der Hotkey-Tabelle vorkommen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotkeyKey {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    N,
    O,
    Q,
    R,
    S,
    T,
    V,
    Z,
    Num1,
    Num2,
    Num3,
    Num4,
    Delete,
    ArrowLeft,
    ArrowRight,
    Slash,
    Backtick,
}

/// Tastenkombination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub key: HotkeyKey,
}

impl Chord {
    /// Taste ohne Modifier.
    pub const fn plain(key: HotkeyKey) -> Self {
        Self {
            alt: false,
            ctrl: false,
            shift: false,
            key,
        }
    }

    /// Ctrl + Taste.
    pub const fn ctrl(key: HotkeyKey) -> Self {
        Self {
            alt: false,
            ctrl: true,
            shift: false,
            key,
        }
    }

    /// Alt + Taste.
    pub const fn alt(key: HotkeyKey) -> Self {
        Self {
            alt: true,
            ctrl: false,
            shift: false,
            key,
        }
    }

    /// Shift + Taste.
    pub const fn shift(key: HotkeyKey) -> Self {
        Self {
            alt: false,
            ctrl: false,
            shift: true,
            key,
        }
    }
}

/// Alle Tastenkürzel des App-Menüs.
pub const HOTKEYS: [(HotkeyAction, Chord); 32] = [
    (HotkeyAction::EditCopy, Chord::ctrl(HotkeyKey::C)),
    (HotkeyAction::EditDelete, Chord::plain(HotkeyKey::Delete)),
    (HotkeyAction::EditDuplicate, Chord::shift(HotkeyKey::D)),
    (
        HotkeyAction::EditHistoryRedo,
        Chord {
            alt: false,
            ctrl: true,
            shift: true,
            key: HotkeyKey::Z,
        },
    ),
    (HotkeyAction::EditHistoryUndo, Chord::ctrl(HotkeyKey::Z)),
    (HotkeyAction::EditNew, Chord::plain(HotkeyKey::N)),
    (HotkeyAction::EditPaste, Chord::ctrl(HotkeyKey::V)),
    (HotkeyAction::EditTransform, Chord::plain(HotkeyKey::T)),
    (HotkeyAction::EditVisibility, Chord::plain(HotkeyKey::H)),
    (HotkeyAction::FileExport, Chord::alt(HotkeyKey::E)),
    (HotkeyAction::FileNew, Chord::alt(HotkeyKey::N)),
    (HotkeyAction::FileOpen, Chord::alt(HotkeyKey::O)),
    (HotkeyAction::FileSave, Chord::alt(HotkeyKey::S)),
    (HotkeyAction::SelectionFind, Chord::alt(HotkeyKey::Slash)),
    (HotkeyAction::SelectionNext, Chord::plain(HotkeyKey::ArrowRight)),
    (HotkeyAction::SelectionPrevious, Chord::plain(HotkeyKey::ArrowLeft)),
    (HotkeyAction::SelectionSelectAll, Chord::ctrl(HotkeyKey::A)),
    (
        HotkeyAction::SelectionSelectNone,
        Chord {
            alt: true,
            ctrl: true,
            shift: false,
            key: HotkeyKey::A,
        },
    ),
    (HotkeyAction::ViewActiveDimension, Chord::plain(HotkeyKey::Num2)),
    (HotkeyAction::ViewActiveInfo, Chord::plain(HotkeyKey::Num1)),
    (HotkeyAction::ViewActivePosition, Chord::plain(HotkeyKey::Num3)),
    (HotkeyAction::ViewActiveRotation, Chord::plain(HotkeyKey::Num4)),
    (HotkeyAction::ViewActive, Chord::plain(HotkeyKey::Backtick)),
    (HotkeyAction::ViewCamera, Chord::plain(HotkeyKey::Q)),
    (HotkeyAction::ViewDrawer, Chord::plain(HotkeyKey::D)),
    (HotkeyAction::ViewFocused, Chord::plain(HotkeyKey::F)),
    (HotkeyAction::ViewGrid, Chord::plain(HotkeyKey::G)),
    (HotkeyAction::ViewRulerPointA, Chord::plain(HotkeyKey::A)),
    (HotkeyAction::ViewRulerPointB, Chord::plain(HotkeyKey::B)),
    (HotkeyAction::ViewRulerPointsClear, Chord::plain(HotkeyKey::C)),
    (HotkeyAction::ViewRulerSnap, Chord::plain(HotkeyKey::S)),
    (HotkeyAction::ViewRuler, Chord::plain(HotkeyKey::R)),
];

/// Sucht die Aktion zur gedrückten Kombination (exakter Modifier-Vergleich).
pub fn resolve(pressed: Chord) -> Option<HotkeyAction> {
    HOTKEYS
        .iter()
        .find(|(_, chord)| *chord == pressed)
        .map(|(action, _)| *action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_unique_actions_and_chords() {
        let actions: HashSet<_> = HOTKEYS.iter().map(|(a, _)| *a).collect();
        let chords: HashSet<_> = HOTKEYS.iter().map(|(_, c)| *c).collect();
        assert_eq!(actions.len(), HOTKEYS.len());
        assert_eq!(chords.len(), HOTKEYS.len());
    }

    #[test]
    fn undo_and_redo_differ_only_by_shift() {
        assert_eq!(
            resolve(Chord::ctrl(HotkeyKey::Z)),
            Some(HotkeyAction::EditHistoryUndo)
        );
        let redo = Chord {
            shift: true,
            ..Chord::ctrl(HotkeyKey::Z)
        };
        assert_eq!(resolve(redo), Some(HotkeyAction::EditHistoryRedo));
    }

    #[test]
    fn ruler_clear_and_copy_share_key() {
        assert_eq!(
            resolve(Chord::plain(HotkeyKey::C)),
            Some(HotkeyAction::ViewRulerPointsClear)
        );
        assert_eq!(
            resolve(Chord::ctrl(HotkeyKey::C)),
            Some(HotkeyAction::EditCopy)
        );
    }

    #[test]
    fn extra_modifier_does_not_match() {
        let chord = Chord {
            alt: true,
            ..Chord::ctrl(HotkeyKey::C)
        };
        assert_eq!(resolve(chord), None);
        assert_eq!(resolve(Chord::shift(HotkeyKey::Q)), None);
    }
}
