//! Adressierung von Knoten im Projektbaum (Komponente → Brett → Schnitt).

use serde::{Deserialize, Serialize};

/// Art eines Projekt-Knotens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Komponente (oberste Ebene)
    Component,
    /// Brett innerhalb einer Komponente
    Board,
    /// Schnitt innerhalb eines Bretts
    Cut,
}

/// Index-Pfad zu einem Knoten im Projektbaum.
///
/// Ersetzt die positionsbasierten `[component, board, cut]`-Tupel durch
/// benannte Felder pro Ebene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodePath {
    /// Komponente `component`
    Component { component: usize },
    /// Brett `board` in Komponente `component`
    Board { component: usize, board: usize },
    /// Schnitt `cut` in Brett `board` der Komponente `component`
    Cut {
        component: usize,
        board: usize,
        cut: usize,
    },
}

impl NodePath {
    /// Pfad auf eine Komponente.
    pub fn component(component: usize) -> Self {
        Self::Component { component }
    }

    /// Pfad auf ein Brett.
    pub fn board(component: usize, board: usize) -> Self {
        Self::Board { component, board }
    }

    /// Pfad auf einen Schnitt.
    pub fn cut(component: usize, board: usize, cut: usize) -> Self {
        Self::Cut {
            component,
            board,
            cut,
        }
    }

    /// Knotenart des Pfads.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Component { .. } => NodeKind::Component,
            Self::Board { .. } => NodeKind::Board,
            Self::Cut { .. } => NodeKind::Cut,
        }
    }

    /// Index der Komponente (auf jeder Ebene vorhanden).
    pub fn component_index(&self) -> usize {
        match *self {
            Self::Component { component }
            | Self::Board { component, .. }
            | Self::Cut { component, .. } => component,
        }
    }

    /// `(component, board)` für Bretter und Schnitte.
    pub fn board_indices(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Component { .. } => None,
            Self::Board { component, board } | Self::Cut { component, board, .. } => {
                Some((component, board))
            }
        }
    }

    /// Übergeordneter Knoten (None für Komponenten).
    pub fn parent(&self) -> Option<NodePath> {
        match *self {
            Self::Component { .. } => None,
            Self::Board { component, .. } => Some(Self::component(component)),
            Self::Cut {
                component, board, ..
            } => Some(Self::board(component, board)),
        }
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Component { component } => write!(f, "{component}"),
            Self::Board { component, board } => write!(f, "{component}/{board}"),
            Self::Cut {
                component,
                board,
                cut,
            } => write!(f, "{component}/{board}/{cut}"),
        }
    }
}
