use crate::app::state::{ActiveTab, Axis, DrawerTab, GridAxis, RulerPoint};
use crate::core::{CutKind, NodePath, ProjectSettings};
use crate::engine::MeshFormat;
use glam::Vec3;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Datei ───────────────────────────────────────────────────────
    /// Neue Editor-Instanz mit eigener Session starten
    SpawnNewInstance,
    RequestOpenFileDialog,
    /// `.woodcut`-Datei laden
    LoadFile { path: String },
    /// Speichern (`None` = aktueller Pfad oder Dialog)
    SaveFile { path: Option<String> },
    RequestSaveFileDialog,
    /// Projekt-XLSX über die Engine erzeugen
    ExportProjectXlsx,
    /// Screenshot beim Host anfordern
    RequestScreenshot,
    /// Screenshot als PNG kodieren
    EncodeScreenshot {
        width: u32,
        height: u32,
        rgba: Vec<u8>,
    },
    ExportMesh { format: MeshFormat },
    /// Wartenden Export schreiben
    WritePendingExport { path: String },
    DiscardPendingExport,

    // ── Bearbeiten ──────────────────────────────────────────────────
    CopyActive,
    /// Alle selektierten Knoten löschen (Original-Indizes)
    DeleteSelection,
    /// Aktiven Knoten löschen und Aktiv-Zustand zurücksetzen
    DeleteActive,
    DuplicateActive,
    /// Aktiven Pfad, Aufklapp-Zustand und Selektion vor Undo/Redo verwerfen
    ResetNavigation,
    Undo,
    Redo,
    AddDefaultComponent,
    AddDefaultBoard { component: usize },
    AddDefaultCut {
        component: usize,
        board: usize,
        kind: CutKind,
    },
    OpenCutMenu,
    CloseCutMenu,
    Paste,
    ToggleTransform,
    ToggleNodeVisibility { path: NodePath },
    SetAllVisible { visible: bool },

    // ── Selektion ───────────────────────────────────────────────────
    OpenFind,
    CloseFind,
    RunFind,
    ActivateFindResult { path: NodePath },
    SelectNext,
    SelectPrevious,
    SelectAll,
    ClearSelection,
    ActivateNode { path: NodePath },
    ToggleNodeSelected { path: NodePath },
    ToggleExpanded { path: NodePath },

    // ── Ansicht ─────────────────────────────────────────────────────
    ToggleActivePanel,
    OpenActiveTab { tab: ActiveTab },
    ToggleCamera,
    ToggleDrawer,
    SetDrawerTab { tab: DrawerTab },
    ToggleFocused,
    ToggleGrid,
    SetGridAxis { axis: Axis, value: GridAxis },
    ToggleRuler,
    ToggleRulerSnap,
    SetRulerPoint { point: RulerPoint },
    ClearRulerPoints,
    SetRulerHover { point: Option<Vec3> },
    SetProjectSettings { settings: ProjectSettings },

    // ── Zuschnittlisten ─────────────────────────────────────────────
    AddCutlist,
    RemoveCutlist { index: usize },
    AddCutlistStock { index: usize },
    CollectCutlistBoards { index: usize },
    CalculateCutlist { index: usize },
    ExportCutlist { index: usize },

    DismissAlert,
}
