//! Woodcut Editor.
//!
//! Desktop-Editor für Woodcut-Projekte: Komponenten, Bretter, Schnitte
//! und Zuschnittlisten. Berechnung und Exporte laufen über die Engine.

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use woodcut_editor::app::use_cases;
use woodcut_editor::session::{LockOutcome, DEFAULT_SESSION};
use woodcut_editor::{ui, AppController, AppIntent, AppState, EditorOptions, SessionStore};

/// Kommandozeilen-Argumente
#[derive(Parser, Debug)]
#[command(name = "woodcut-editor", version, about = "Editor for woodcut projects")]
struct Cli {
    /// `.woodcut`-Datei, die beim Start geöffnet wird
    file: Option<PathBuf>,

    /// Session dieser Instanz
    #[arg(long)]
    session: Option<String>,

    /// Alternative Konfigurationsdatei
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Woodcut Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("Woodcut Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Woodcut Editor",
        options,
        Box::new(move |_cc| Ok(Box::new(EditorApp::new(cli)))),
    )
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    session: SessionStore,
}

impl EditorApp {
    fn new(cli: Cli) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = cli.config.unwrap_or_else(EditorOptions::config_path);
        let editor_options = EditorOptions::load_from_file(&config_path);

        let session_name = cli.session.unwrap_or_else(|| DEFAULT_SESSION.to_string());
        let mut session = SessionStore::new(editor_options.resolved_session_dir(), session_name);
        let mut state = AppState::with_options(editor_options);

        match session.acquire() {
            Ok(LockOutcome::Acquired) => {
                if let Err(e) = use_cases::session::restore(&mut state, &session) {
                    log::warn!("Session konnte nicht geladen werden: {:#}", e);
                }
            }
            Ok(LockOutcome::StaleCleared) => {
                log::warn!("Session '{}' neu begonnen", session.name());
            }
            Ok(LockOutcome::Redirected { from }) => {
                log::warn!(
                    "Session '{}' ist bereits geöffnet, verwende '{}'",
                    from,
                    session.name()
                );
            }
            Err(e) => log::error!("Session-Lock fehlgeschlagen: {:#}", e),
        }
        state.ui.session_name = Some(session.name().to_string());

        let mut app = Self {
            state,
            controller: AppController::new(),
            session,
        };

        if let Some(file) = cli.file {
            app.process_events(vec![AppIntent::FileSelected {
                path: file.to_string_lossy().into_owned(),
            }]);
        }

        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);

        self.process_events(events);

        self.sync_screenshot_request(ctx);
        self.sync_system_clipboard(ctx);

        self.persist_session();
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::collect_keyboard_intents(ctx, ctx.wants_keyboard_input()));
        events.extend(collect_screenshots(ctx));

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_drawer(ctx, &self.state));
        events.extend(ui::render_project_tree(ctx, &self.state));
        events.extend(ui::render_active_panel(ctx, &self.state));
        events.extend(ui::render_viewport(ctx, &self.state));
        events.extend(ui::render_cut_menu(ctx, &self.state));
        events.extend(ui::render_find_dialog(
            ctx,
            &mut self.state.ui.find,
            &self.state.project,
        ));
        events.extend(ui::render_alerts(
            ctx,
            &mut self.state.alerts,
            self.state.options.alert_duration_ms,
        ));
        events.extend(ui::handle_file_dialogs(
            &mut self.state.ui,
            &self.state.project.name,
        ));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Fordert einen Screenshot beim Backend an, wenn ein PNG-Export läuft.
    fn sync_screenshot_request(&mut self, ctx: &egui::Context) {
        if std::mem::take(&mut self.state.render_view.screenshot_requested) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
        }
    }

    /// Reicht kopierte Knotennamen an die System-Zwischenablage weiter.
    fn sync_system_clipboard(&mut self, ctx: &egui::Context) {
        if let Some(text) = self.state.ui.system_clipboard_text.take() {
            ctx.copy_text(text);
        }
    }

    fn persist_session(&mut self) {
        if !self.session.is_locked() {
            return;
        }
        if let Err(e) = use_cases::session::persist_if_dirty(&mut self.state, &self.session) {
            log::error!("Session konnte nicht gespeichert werden: {:#}", e);
        }
    }
}

impl Drop for EditorApp {
    fn drop(&mut self) {
        if let Err(e) = self.session.release() {
            log::error!("Session-Lock konnte nicht freigegeben werden: {:#}", e);
        }
    }
}

/// Übersetzt eingegangene Screenshots in Intents.
fn collect_screenshots(ctx: &egui::Context) -> Vec<AppIntent> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(AppIntent::ScreenshotCaptured {
                    width: image.size[0] as u32,
                    height: image.size[1] as u32,
                    rgba: image.pixels.iter().flat_map(|c| c.to_array()).collect(),
                }),
                _ => None,
            })
            .collect()
    })
}
