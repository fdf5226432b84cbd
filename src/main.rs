//! Selection History (Demo-Host).
//!
//! Hält Selektionen einer Szene temporär unter Nicknames fest und wendet
//! sie später mit Replace/Add/Remove wieder an.

use eframe::egui;
use selection_history::{
    ui, AppController, AppIntent, AppState, HistoryOptions, InMemoryScene, SelectionRegistry,
};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Selection History v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let config_path = HistoryOptions::config_path();
        let history_options = HistoryOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([960.0, 600.0])
                .with_title("Selection History"),
            ..Default::default()
        };

        eframe::run_native(
            "Selection History",
            options,
            Box::new(|_cc| Ok(Box::new(HistoryApp::new(history_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
///
/// Die Registry lebt hier für die gesamte Session; Schließen und erneutes
/// Öffnen des Fensters lässt sie unverändert.
struct HistoryApp {
    registry: SelectionRegistry,
    scene: InMemoryScene,
    state: AppState,
    controller: AppController,
}

impl HistoryApp {
    fn new(options: HistoryOptions) -> Self {
        let registry = SelectionRegistry::new();
        let state = AppState::open(&registry, options);

        Self {
            registry,
            scene: InMemoryScene::demo(),
            state,
            controller: AppController::new(),
        }
    }
}

impl eframe::App for HistoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);
        self.process_events(events);
    }
}

impl HistoryApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::show_notification(ctx, &self.state.ui));
        events.extend(ui::render_history_window(ctx, &mut self.state));
        events.extend(ui::collect_keyboard_intents(ctx, &self.state));
        events.extend(ui::render_scene_panel(ctx, &mut self.scene, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            self.controller.dispatch(
                &mut self.state,
                &mut self.registry,
                &mut self.scene,
                event,
            );
        }
    }
}
