use crate::app::state::{ActiveTab, Axis, DrawerTab, GridAxis, RulerPoint};
use crate::core::{CutKind, NodePath, ProjectSettings};
use crate::engine::MeshFormat;
use glam::Vec3;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Datei ───────────────────────────────────────────────────────
    /// Neues Editor-Fenster mit eigener Session starten
    NewWindowRequested,
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei im Öffnen-Dialog gewählt
    FileSelected { path: String },
    /// Speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Unter neuem Pfad speichern
    SaveAsRequested,
    /// Zielpfad im Speichern-Dialog gewählt
    SaveFilePathSelected { path: String },
    /// Alle Zuschnittlisten als XLSX exportieren
    ExportXlsxRequested,
    /// Viewport als PNG exportieren
    ExportPngRequested,
    /// Screenshot des Viewports liegt vor (RGBA, zeilenweise)
    ScreenshotCaptured {
        width: u32,
        height: u32,
        rgba: Vec<u8>,
    },
    /// Sichtbare Geometrie exportieren
    ExportMeshRequested { format: MeshFormat },
    /// Zielpfad für einen wartenden Export gewählt
    ExportPathSelected { path: String },
    /// Wartenden Export verworfen
    ExportCancelled,

    // ── Bearbeiten ──────────────────────────────────────────────────
    CopyRequested,
    DeleteRequested,
    DuplicateRequested,
    UndoRequested,
    RedoRequested,
    /// Kontextabhängig: Schnitt-Menü, Brett oder Komponente
    NewRequested,
    PasteRequested,
    TransformToggled,
    /// Sichtbarkeit des aktiven Knotens umschalten
    VisibilityToggleRequested,
    ShowAllRequested,
    HideAllRequested,
    /// Schnittart im Schnitt-Menü gewählt
    CutKindChosen { kind: CutKind },
    CutMenuClosed,

    // ── Selektion ───────────────────────────────────────────────────
    FindRequested,
    /// Suche mit dem eingegebenen Text ausführen
    FindSubmitted,
    FindResultChosen { path: NodePath },
    FindClosed,
    SelectNextRequested,
    SelectPreviousRequested,
    SelectAllRequested,
    SelectNoneRequested,
    /// Klick im Projektbaum (`additive` = Mehrfachauswahl umschalten)
    NodeClicked { path: NodePath, additive: bool },
    NodeExpandToggled { path: NodePath },
    NodeVisibilityToggled { path: NodePath },

    // ── Ansicht ─────────────────────────────────────────────────────
    ActivePanelToggled,
    ActiveTabRequested { tab: ActiveTab },
    CameraToggled,
    DrawerToggled,
    DrawerTabSelected { tab: DrawerTab },
    FocusToggled,
    GridToggled,
    GridAxisChanged { axis: Axis, value: GridAxis },
    RulerToggled,
    RulerSnapToggled,
    /// Messpunkt auf den Hover-Punkt setzen
    RulerPointRequested { point: RulerPoint },
    RulerPointsCleared,
    RulerHoverChanged { point: Option<Vec3> },
    ProjectSettingsChanged { settings: ProjectSettings },

    // ── Zuschnittlisten ─────────────────────────────────────────────
    CutlistAddRequested,
    CutlistRemoveRequested { index: usize },
    CutlistStockAddRequested { index: usize },
    CutlistBoardsCollectRequested { index: usize },
    CutlistCalculateRequested { index: usize },
    CutlistExportRequested { index: usize },

    /// Sichtbare Meldung schließen
    AlertDismissed,
}
