use std::cell::RefCell;
use std::rc::Rc;
use woodcut_editor::core::{CutlistBoard, StockItem, StockLayout};
use woodcut_editor::{
    AppController, AppIntent, AppState, CalculateOutcome, CutKind, Cutlist, CutlistEngine,
    EngineError, Measurement, MeshFormat, Project,
};

/// Aufzeichnung der Engine-Aufrufe
#[derive(Debug, Default)]
pub struct EngineCalls {
    pub seeds: Vec<u64>,
    pub exported_units: Vec<Measurement>,
    pub project_images: Option<usize>,
}

/// Engine-Attrappe mit festem Verhalten.
pub struct MockEngine {
    unfit: Option<String>,
    calls: Rc<RefCell<EngineCalls>>,
}

impl MockEngine {
    /// Packt jede Zuschnittliste (eine leere Belegung je Lagerware).
    pub fn packing() -> (Self, Rc<RefCell<EngineCalls>>) {
        let calls = Rc::new(RefCell::new(EngineCalls::default()));
        let engine = Self {
            unfit: None,
            calls: calls.clone(),
        };
        (engine, calls)
    }

    /// Meldet immer das Brett `board` als nicht platzierbar.
    pub fn unfit(board: &str) -> Self {
        Self {
            unfit: Some(board.to_string()),
            calls: Rc::default(),
        }
    }
}

impl CutlistEngine for MockEngine {
    fn calculate_cutlist(&self, cutlist: &Cutlist) -> Result<CalculateOutcome, EngineError> {
        self.calls.borrow_mut().seeds.push(cutlist.options.seed);
        if let Some(name) = &self.unfit {
            return Ok(CalculateOutcome::Unfit(CutlistBoard {
                name: name.clone(),
                length: 9999.0,
                width: 1.0,
                thickness: 1.0,
                quantity: 1,
            }));
        }

        let mut packed = cutlist.clone();
        packed.output = cutlist
            .input
            .stock
            .iter()
            .map(|stock| StockLayout {
                stock: stock.name.clone(),
                placements: Vec::new(),
            })
            .collect();
        Ok(CalculateOutcome::Packed(packed))
    }

    fn export_cutlist(
        &self,
        cutlist: &Cutlist,
        unit: Measurement,
        _wood_image: &[u8],
    ) -> Result<Vec<u8>, EngineError> {
        self.calls.borrow_mut().exported_units.push(unit);
        Ok(cutlist.name.as_bytes().to_vec())
    }

    fn export_project(
        &self,
        project: &Project,
        wood_images: &[Vec<u8>],
    ) -> Result<Vec<u8>, EngineError> {
        self.calls.borrow_mut().project_images = Some(wood_images.len());
        Ok(project.name.as_bytes().to_vec())
    }

    fn export_mesh(&self, _project: &Project, format: MeshFormat) -> Result<Vec<u8>, EngineError> {
        match format {
            MeshFormat::Gltf => Err(EngineError::Failed("glTF export failed".to_string())),
            other => Ok(other.extension().as_bytes().to_vec()),
        }
    }
}

/// Führt Intents nacheinander aus; jeder muss erfolgreich sein.
pub fn run(controller: &mut AppController, state: &mut AppState, intents: Vec<AppIntent>) {
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }
}

/// Projekt: c0 (b0 mit Dado + Hole, b1), c1 (leer)
pub fn sample_project() -> Project {
    let mut project = Project::new_default();
    project.name = "Bookshelf".to_string();
    project.add_default_component();
    project.add_default_board(0);
    project.add_default_cut(0, 0, CutKind::Dado);
    project.add_default_cut(0, 0, CutKind::Hole);
    project.add_default_board(0);
    project.add_default_component();
    project
}

/// App-State mit `project` als einzigem Commit nach dem Startzustand.
pub fn state_with(project: Project) -> AppState {
    let mut state = AppState::new();
    state.commit_project(project);
    state
}

/// Zuschnittliste mit einer Lagerware und einem Brett.
pub fn ready_cutlist() -> Cutlist {
    let mut cutlist = Cutlist::new("Shelves");
    cutlist.input.stock.push(StockItem {
        name: "Sheet".to_string(),
        length: 2440.0,
        width: 1220.0,
        thickness: 18.0,
        quantity: 1,
    });
    cutlist.input.boards.push(CutlistBoard {
        name: "Side".to_string(),
        length: 900.0,
        width: 300.0,
        thickness: 18.0,
        quantity: 2,
    });
    cutlist
}
