//! Linearer Undo/Redo-Verlauf über vollständige Projekt-Snapshots.
//!
//! Jeder Eintrag ist ein `Arc<Project>`; Undo und Redo tauschen nur die
//! aktive Referenz aus und verändern keine Einträge.

use crate::core::Project;
use crate::shared::options::HISTORY_LIMIT;
use std::sync::Arc;

/// Snapshot-Verlauf mit aktuellem Index.
///
/// Invariante: `current` liegt in `0..items.len()` oder ist `None`, wenn
/// der Verlauf leer ist.
#[derive(Debug, Clone)]
pub struct History {
    items: Vec<Arc<Project>>,
    current: Option<usize>,
    syncing: bool,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }
}

impl History {
    /// Leerer Verlauf mit maximaler Tiefe (mindestens 1).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            current: None,
            syncing: false,
            limit: limit.max(1),
        }
    }

    /// Hängt einen Snapshot an.
    ///
    /// Ist `syncing` gesetzt (die Änderung stammt aus Undo/Redo), wird nur
    /// das Flag zurückgesetzt. Einträge hinter `current` werden verworfen.
    pub fn add(&mut self, project: Arc<Project>) {
        if self.syncing {
            self.syncing = false;
            return;
        }

        let keep = self.current.map_or(self.items.len(), |current| current + 1);
        self.items.truncate(keep);
        self.items.push(project);

        if self.items.len() > self.limit {
            let overflow = self.items.len() - self.limit;
            self.items.drain(..overflow);
        }
        self.current = Some(self.items.len() - 1);
    }

    /// Einen Schritt zurück. Gibt den zu aktivierenden Snapshot zurück.
    pub fn undo(&mut self) -> Option<Arc<Project>> {
        let current = self.current.filter(|&c| c > 0)?;
        self.current = Some(current - 1);
        self.syncing = true;
        Some(self.items[current - 1].clone())
    }

    /// Einen Schritt vor. Gibt den zu aktivierenden Snapshot zurück.
    pub fn redo(&mut self) -> Option<Arc<Project>> {
        let current = self.current.filter(|&c| c + 1 < self.items.len())?;
        self.current = Some(current + 1);
        self.syncing = true;
        Some(self.items[current + 1].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.current.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.current.is_some_and(|c| c + 1 < self.items.len())
    }

    /// Anzahl der Snapshots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index des aktiven Snapshots.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Gibt an, ob die nächste Projektänderung aus Undo/Redo stammt.
    pub fn is_syncing(&self) -> bool {
        self.syncing
    }

    /// Startet den Verlauf neu mit genau einem Snapshot.
    pub fn reset(&mut self, project: Arc<Project>) {
        self.items.clear();
        self.items.push(project);
        self.current = Some(0);
        self.syncing = false;
    }
}
