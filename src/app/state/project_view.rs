use crate::core::NodePath;
use indexmap::IndexSet;

/// Tab des Aktiv-Panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveTab {
    #[default]
    Info,
    Dimension,
    Position,
    Rotation,
}

impl ActiveTab {
    /// Alle Tabs in Anzeige-Reihenfolge.
    pub const ALL: [ActiveTab; 4] = [
        ActiveTab::Info,
        ActiveTab::Dimension,
        ActiveTab::Position,
        ActiveTab::Rotation,
    ];

    /// Anzeigename
    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::Info => "Info",
            ActiveTab::Dimension => "Dimension",
            ActiveTab::Position => "Position",
            ActiveTab::Rotation => "Rotation",
        }
    }
}

/// Aktiver Knoten und Zustand des Aktiv-Panels
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActiveState {
    /// Aktiv-Panel geöffnet
    pub panel_open: bool,
    /// Aktiver Knoten
    pub path: Option<NodePath>,
    /// Gewählter Tab (None = noch nie geöffnet)
    pub tab: Option<ActiveTab>,
}

impl ActiveState {
    /// Panel zu, kein aktiver Knoten, kein Tab.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Aufgeklappte Knoten im Projektbaum
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpandedState {
    pub components: IndexSet<usize>,
    pub boards: IndexSet<(usize, usize)>,
}

impl ExpandedState {
    /// Klappt eine Komponente auf (ans Ende der Reihenfolge verschoben).
    pub fn expand_component(&mut self, component: usize) {
        self.components.shift_remove(&component);
        self.components.insert(component);
    }

    /// Klappt ein Brett auf (ans Ende der Reihenfolge verschoben).
    pub fn expand_board(&mut self, component: usize, board: usize) {
        self.boards.shift_remove(&(component, board));
        self.boards.insert((component, board));
    }

    /// Klappt alle Vorfahren des Pfads auf.
    pub fn expand_ancestors(&mut self, path: NodePath) {
        match path {
            NodePath::Component { .. } => {}
            NodePath::Board { component, .. } => self.expand_component(component),
            NodePath::Cut {
                component, board, ..
            } => {
                self.expand_component(component);
                self.expand_board(component, board);
            }
        }
    }

    /// Gibt an, ob der Knoten aufgeklappt ist (Schnitte sind Blätter).
    pub fn is_expanded(&self, path: NodePath) -> bool {
        match path {
            NodePath::Component { component } => self.components.contains(&component),
            NodePath::Board { component, board } => self.boards.contains(&(component, board)),
            NodePath::Cut { .. } => false,
        }
    }

    /// Auf- bzw. zuklappen.
    pub fn toggle(&mut self, path: NodePath) {
        match path {
            NodePath::Component { component } => {
                if !self.components.shift_remove(&component) {
                    self.components.insert(component);
                }
            }
            NodePath::Board { component, board } => {
                if !self.boards.shift_remove(&(component, board)) {
                    self.boards.insert((component, board));
                }
            }
            NodePath::Cut { .. } => {}
        }
    }

    pub fn clear(&mut self) {
        self.components.clear();
        self.boards.clear();
    }
}

/// Mehrfach-Selektion im Projektbaum
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    pub components: IndexSet<usize>,
    pub boards: IndexSet<(usize, usize)>,
    pub cuts: IndexSet<(usize, usize, usize)>,
}

impl SelectionState {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.boards.is_empty() && self.cuts.is_empty()
    }

    /// Anzahl selektierter Knoten über alle Ebenen.
    pub fn len(&self) -> usize {
        self.components.len() + self.boards.len() + self.cuts.len()
    }

    pub fn clear(&mut self) {
        self.components.clear();
        self.boards.clear();
        self.cuts.clear();
    }

    pub fn contains(&self, path: NodePath) -> bool {
        match path {
            NodePath::Component { component } => self.components.contains(&component),
            NodePath::Board { component, board } => self.boards.contains(&(component, board)),
            NodePath::Cut {
                component,
                board,
                cut,
            } => self.cuts.contains(&(component, board, cut)),
        }
    }

    pub fn insert(&mut self, path: NodePath) {
        match path {
            NodePath::Component { component } => {
                self.components.insert(component);
            }
            NodePath::Board { component, board } => {
                self.boards.insert((component, board));
            }
            NodePath::Cut {
                component,
                board,
                cut,
            } => {
                self.cuts.insert((component, board, cut));
            }
        }
    }

    /// Fügt hinzu bzw. entfernt.
    pub fn toggle(&mut self, path: NodePath) {
        let removed = match path {
            NodePath::Component { component } => self.components.shift_remove(&component),
            NodePath::Board { component, board } => self.boards.shift_remove(&(component, board)),
            NodePath::Cut {
                component,
                board,
                cut,
            } => self.cuts.shift_remove(&(component, board, cut)),
        };
        if !removed {
            self.insert(path);
        }
    }

    /// Alle selektierten Pfade (Komponenten, dann Bretter, dann Schnitte).
    pub fn paths(&self) -> Vec<NodePath> {
        let components = self.components.iter().map(|&c| NodePath::component(c));
        let boards = self.boards.iter().map(|&(c, b)| NodePath::board(c, b));
        let cuts = self.cuts.iter().map(|&(c, b, k)| NodePath::cut(c, b, k));
        components.chain(boards).chain(cuts).collect()
    }
}

/// Tab der unteren Schublade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerTab {
    Cutlists,
    Settings,
}

/// Untere Schublade (Zuschnittlisten / Projekteinstellungen)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawerState {
    pub open: bool,
    pub tab: Option<DrawerTab>,
}

/// Zustand der Projektansicht (Baum, Aktiv-Panel, Schublade)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectViewState {
    pub active: ActiveState,
    pub expanded: ExpandedState,
    pub selected: SelectionState,
    pub drawer: DrawerState,
    /// Fokus-Modus (nur aktiver Knoten im Viewport)
    pub focused: bool,
    /// Transform-Gizmo sichtbar
    pub transform: bool,
    /// Menü "Schnitt hinzufügen" geöffnet
    pub cut_menu_open: bool,
}
