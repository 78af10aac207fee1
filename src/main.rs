mod app;
mod state;
mod ui;

use std::path::PathBuf;

use app::LabelHueApp;
use eframe::egui;
use label_hue::data::loader;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional first argument: dataset to open instead of the example.
    let state = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded '{}' with {} rows", dataset.title, dataset.len());
                AppState::new(dataset)
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                let mut state = AppState::default();
                state.status_message = Some(format!("Error: {e:#}"));
                state
            }
        },
        None => AppState::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Label Hue – Dataset Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(LabelHueApp::new(state)))),
    )
}
