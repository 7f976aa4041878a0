//! Zwischenablage-Inhalt des Editors.

use super::{copy_name, Board, Component, Cut, NodePath, Project};
use serde::{Deserialize, Serialize};

/// Kopierter Knoten (Komponente, Brett oder Schnitt)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "node", rename_all = "lowercase")]
pub enum ClipboardItem {
    Component(Component),
    Board(Board),
    Cut(Cut),
}

impl ClipboardItem {
    /// Name des kopierten Knotens
    pub fn name(&self) -> &str {
        match self {
            ClipboardItem::Component(c) => &c.name,
            ClipboardItem::Board(b) => &b.name,
            ClipboardItem::Cut(c) => &c.name,
        }
    }
}

impl ClipboardItem {
    /// Klont den Knoten am Pfad in einen Zwischenablage-Eintrag.
    pub fn from_project(project: &Project, path: NodePath) -> Option<Self> {
        match path {
            NodePath::Component { component } => {
                project.component(component).cloned().map(Self::Component)
            }
            NodePath::Board { component, board } => {
                project.board(component, board).cloned().map(Self::Board)
            }
            NodePath::Cut {
                component,
                board,
                cut,
            } => project.cut(component, board, cut).cloned().map(Self::Cut),
        }
    }

    /// Benennt den Eintrag als Kopie um.
    pub fn into_copy(self) -> Self {
        match self {
            ClipboardItem::Component(mut c) => {
                c.name = copy_name(&c.name);
                ClipboardItem::Component(c)
            }
            ClipboardItem::Board(mut b) => {
                b.name = copy_name(&b.name);
                ClipboardItem::Board(b)
            }
            ClipboardItem::Cut(mut c) => {
                c.name = copy_name(&c.name);
                ClipboardItem::Cut(c)
            }
        }
    }
}
