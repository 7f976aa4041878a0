//! Das Woodcut-Projekt: Komponenten → Bretter → Schnitte plus Zuschnittlisten.
//!
//! Ein `Project` wird im Editor nur als Ganzes ersetzt (Copy-on-Write über
//! `Arc<Project>`). Alle Mutationsmethoden arbeiten deshalb auf einer
//! geklonten Arbeitskopie, die anschließend committet wird.

use super::{Cutlist, NodePath, WoodType};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Standard-Ausdehnung der Szene (Projekteinheiten).
pub const DEFAULT_BOUNDS: f32 = 1000.0;

/// Maßsystem des Projekts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measurement {
    /// Millimeter
    #[default]
    Metric,
    /// Zoll
    Imperial,
}

impl Measurement {
    /// Einheiten-Kürzel für Anzeige und Export.
    pub fn unit_label(self) -> &'static str {
        match self {
            Measurement::Metric => "mm",
            Measurement::Imperial => "in",
        }
    }
}

/// Projekteinstellungen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    pub measurement: Measurement,
    /// Kantenlänge des sichtbaren Arbeitsbereichs
    pub bounds: f32,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            measurement: Measurement::Metric,
            bounds: DEFAULT_BOUNDS,
        }
    }
}

/// Art eines Schnitts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutKind {
    #[default]
    Dado,
    Rabbet,
    Groove,
    Mortise,
    Hole,
    Chamfer,
}

impl CutKind {
    /// Alle Schnittarten (Reihenfolge des Schnitt-Menüs).
    pub const ALL: [CutKind; 6] = [
        CutKind::Dado,
        CutKind::Rabbet,
        CutKind::Groove,
        CutKind::Mortise,
        CutKind::Hole,
        CutKind::Chamfer,
    ];

    /// Anzeigename
    pub fn label(self) -> &'static str {
        match self {
            CutKind::Dado => "Dado",
            CutKind::Rabbet => "Rabbet",
            CutKind::Groove => "Groove",
            CutKind::Mortise => "Mortise",
            CutKind::Hole => "Hole",
            CutKind::Chamfer => "Chamfer",
        }
    }
}

/// Schnitt in einem Brett
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    pub name: String,
    pub visible: bool,
    pub kind: CutKind,
    /// Länge, Breite, Tiefe
    pub dimensions: Vec3,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Brett einer Komponente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    pub visible: bool,
    #[serde(default)]
    pub wood: WoodType,
    /// Länge, Breite, Stärke
    pub dimensions: Vec3,
    pub position: Vec3,
    pub rotation: Vec3,
    #[serde(default)]
    pub cuts: Vec<Cut>,
}

/// Komponente (Baugruppe) des Projekts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub visible: bool,
    pub position: Vec3,
    pub rotation: Vec3,
    #[serde(default)]
    pub boards: Vec<Board>,
}

/// Wurzeldokument eines Woodcut-Projekts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub settings: ProjectSettings,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub cutlists: Vec<Cutlist>,
}

/// Name für Duplikate und eingefügte Kopien.
pub fn copy_name(name: &str) -> String {
    format!("{name} (Copy)")
}

impl Cut {
    /// Neuer sichtbarer Schnitt im Ursprung des Bretts.
    pub fn new(name: impl Into<String>, kind: CutKind, dimensions: Vec3) -> Self {
        Self {
            name: name.into(),
            visible: true,
            kind,
            dimensions,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }
}

impl Board {
    /// Neues sichtbares Brett ohne Schnitte.
    pub fn new(name: impl Into<String>, dimensions: Vec3) -> Self {
        Self {
            name: name.into(),
            visible: true,
            wood: WoodType::default(),
            dimensions,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            cuts: Vec::new(),
        }
    }
}

impl Component {
    /// Neue sichtbare, leere Komponente.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            boards: Vec::new(),
        }
    }
}

fn default_board_dimensions(measurement: Measurement) -> Vec3 {
    match measurement {
        Measurement::Metric => Vec3::new(600.0, 100.0, 20.0),
        Measurement::Imperial => Vec3::new(24.0, 4.0, 0.75),
    }
}

fn default_cut_dimensions(measurement: Measurement) -> Vec3 {
    match measurement {
        Measurement::Metric => Vec3::new(100.0, 20.0, 10.0),
        Measurement::Imperial => Vec3::new(4.0, 0.75, 0.375),
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new_default()
    }
}

impl Project {
    /// Leeres Projekt mit Standard-Einstellungen.
    pub fn new(name: impl Into<String>, settings: ProjectSettings) -> Self {
        Self {
            name: name.into(),
            settings,
            components: Vec::new(),
            cutlists: Vec::new(),
        }
    }

    /// Neues, unbenanntes Projekt (Startzustand des Editors).
    pub fn new_default() -> Self {
        Self::new("Untitled", ProjectSettings::default())
    }

    // ── Lookups ─────────────────────────────────────────────────────

    pub fn component(&self, component: usize) -> Option<&Component> {
        self.components.get(component)
    }

    pub fn board(&self, component: usize, board: usize) -> Option<&Board> {
        self.component(component)?.boards.get(board)
    }

    pub fn cut(&self, component: usize, board: usize, cut: usize) -> Option<&Cut> {
        self.board(component, board)?.cuts.get(cut)
    }

    /// Prüft, ob der Pfad auf einen existierenden Knoten zeigt.
    pub fn contains(&self, path: NodePath) -> bool {
        self.node_name(path).is_some()
    }

    /// Name des Knotens am Pfad.
    pub fn node_name(&self, path: NodePath) -> Option<&str> {
        match path {
            NodePath::Component { component } => self.component(component).map(|c| c.name.as_str()),
            NodePath::Board { component, board } => {
                self.board(component, board).map(|b| b.name.as_str())
            }
            NodePath::Cut {
                component,
                board,
                cut,
            } => self.cut(component, board, cut).map(|c| c.name.as_str()),
        }
    }

    /// Sichtbarkeit des Knotens am Pfad.
    pub fn is_visible(&self, path: NodePath) -> Option<bool> {
        match path {
            NodePath::Component { component } => self.component(component).map(|c| c.visible),
            NodePath::Board { component, board } => self.board(component, board).map(|b| b.visible),
            NodePath::Cut {
                component,
                board,
                cut,
            } => self.cut(component, board, cut).map(|c| c.visible),
        }
    }

    /// Alle Knotenpfade in Dokument-Reihenfolge (Pre-Order).
    pub fn document_order(&self) -> Vec<NodePath> {
        let mut paths = Vec::new();
        for (c, component) in self.components.iter().enumerate() {
            paths.push(NodePath::component(c));
            for (b, board) in component.boards.iter().enumerate() {
                paths.push(NodePath::board(c, b));
                for k in 0..board.cuts.len() {
                    paths.push(NodePath::cut(c, b, k));
                }
            }
        }
        paths
    }

    /// Anzahl aller Knoten (Komponenten + Bretter + Schnitte).
    pub fn node_count(&self) -> usize {
        self.components
            .iter()
            .map(|c| 1 + c.boards.iter().map(|b| 1 + b.cuts.len()).sum::<usize>())
            .sum()
    }

    // ── Hinzufügen ──────────────────────────────────────────────────

    /// Hängt eine Komponente an und gibt ihren Pfad zurück.
    pub fn add_component(&mut self, component: Component) -> NodePath {
        self.components.push(component);
        NodePath::component(self.components.len() - 1)
    }

    /// Hängt eine leere Komponente mit fortlaufendem Namen an.
    pub fn add_default_component(&mut self) -> NodePath {
        let name = format!("Component {}", self.components.len() + 1);
        self.add_component(Component::new(name))
    }

    /// Hängt ein Brett an Komponente `component` an.
    pub fn add_board(&mut self, component: usize, board: Board) -> Option<NodePath> {
        let target = self.components.get_mut(component)?;
        target.boards.push(board);
        Some(NodePath::board(component, target.boards.len() - 1))
    }

    /// Hängt ein Standard-Brett an Komponente `component` an.
    pub fn add_default_board(&mut self, component: usize) -> Option<NodePath> {
        let count = self.component(component)?.boards.len();
        let board = Board::new(
            format!("Board {}", count + 1),
            default_board_dimensions(self.settings.measurement),
        );
        self.add_board(component, board)
    }

    /// Hängt einen Schnitt an Brett `(component, board)` an.
    pub fn add_cut(&mut self, component: usize, board: usize, cut: Cut) -> Option<NodePath> {
        let target = self.components.get_mut(component)?.boards.get_mut(board)?;
        target.cuts.push(cut);
        Some(NodePath::cut(component, board, target.cuts.len() - 1))
    }

    /// Hängt einen Standard-Schnitt der Art `kind` an.
    pub fn add_default_cut(&mut self, component: usize, board: usize, kind: CutKind) -> Option<NodePath> {
        let count = self.board(component, board)?.cuts.len();
        let cut = Cut::new(
            format!("{} {}", kind.label(), count + 1),
            kind,
            default_cut_dimensions(self.settings.measurement),
        );
        self.add_cut(component, board, cut)
    }

    // ── Entfernen ───────────────────────────────────────────────────

    /// Entfernt den Knoten am Pfad. Gibt `false` bei ungültigem Pfad zurück.
    pub fn remove(&mut self, path: NodePath) -> bool {
        match path {
            NodePath::Component { component } => {
                if component < self.components.len() {
                    self.components.remove(component);
                    return true;
                }
                false
            }
            NodePath::Board { component, board } => {
                let Some(target) = self.components.get_mut(component) else {
                    return false;
                };
                if board < target.boards.len() {
                    target.boards.remove(board);
                    return true;
                }
                false
            }
            NodePath::Cut {
                component,
                board,
                cut,
            } => {
                let Some(target) = self
                    .components
                    .get_mut(component)
                    .and_then(|c| c.boards.get_mut(board))
                else {
                    return false;
                };
                if cut < target.cuts.len() {
                    target.cuts.remove(cut);
                    return true;
                }
                false
            }
        }
    }

    /// Entfernt alle übergebenen Knoten auf einmal.
    ///
    /// Alle Indizes beziehen sich auf den Zustand VOR dem Entfernen; es werden
    /// zuerst Schnitte, dann Bretter, dann Komponenten gefiltert.
    pub fn remove_many<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = NodePath>,
    {
        let mut components = HashSet::new();
        let mut boards = HashSet::new();
        let mut cuts = HashSet::new();
        for path in paths {
            match path {
                NodePath::Component { component } => {
                    components.insert(component);
                }
                NodePath::Board { component, board } => {
                    boards.insert((component, board));
                }
                NodePath::Cut {
                    component,
                    board,
                    cut,
                } => {
                    cuts.insert((component, board, cut));
                }
            }
        }

        let before = self.node_count();

        for (c, component) in self.components.iter_mut().enumerate() {
            for (b, board) in component.boards.iter_mut().enumerate() {
                let mut k = 0;
                board.cuts.retain(|_| {
                    let keep = !cuts.contains(&(c, b, k));
                    k += 1;
                    keep
                });
            }
            let mut b = 0;
            component.boards.retain(|_| {
                let keep = !boards.contains(&(c, b));
                b += 1;
                keep
            });
        }
        let mut c = 0;
        self.components.retain(|_| {
            let keep = !components.contains(&c);
            c += 1;
            keep
        });

        before - self.node_count()
    }

    // ── Sichtbarkeit ────────────────────────────────────────────────

    /// Setzt die Sichtbarkeit eines einzelnen Knotens.
    pub fn set_visible(&mut self, path: NodePath, visible: bool) -> bool {
        let flag = match path {
            NodePath::Component { component } => {
                self.components.get_mut(component).map(|c| &mut c.visible)
            }
            NodePath::Board { component, board } => self
                .components
                .get_mut(component)
                .and_then(|c| c.boards.get_mut(board))
                .map(|b| &mut b.visible),
            NodePath::Cut {
                component,
                board,
                cut,
            } => self
                .components
                .get_mut(component)
                .and_then(|c| c.boards.get_mut(board))
                .and_then(|b| b.cuts.get_mut(cut))
                .map(|c| &mut c.visible),
        };
        match flag {
            Some(flag) => {
                *flag = visible;
                true
            }
            None => false,
        }
    }

    /// Invertiert die Sichtbarkeit eines Knotens.
    pub fn toggle_visible(&mut self, path: NodePath) -> bool {
        match self.is_visible(path) {
            Some(visible) => self.set_visible(path, !visible),
            None => false,
        }
    }

    /// Setzt die Sichtbarkeit aller Knoten.
    pub fn set_all_visible(&mut self, visible: bool) {
        for component in &mut self.components {
            component.visible = visible;
            for board in &mut component.boards {
                board.visible = visible;
                for cut in &mut board.cuts {
                    cut.visible = visible;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
