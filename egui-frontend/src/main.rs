use eframe::egui;
use log::{error, info, warn};

mod data;
mod storage;
mod ui;

use storage::{JsonFileStore, KeyValueStore, NullStore};
use ui::{AppConfig, FridayApp};

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Friday life organizer");

    // Persistent storage is optional: without a usable data directory the
    // app still runs, it just forgets everything on exit.
    let storage: Box<dyn KeyValueStore> = match JsonFileStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("Persistent storage unavailable ({}), running in-memory only", e);
            Box::new(NullStore)
        }
    };

    // Catalogs are passed in explicitly so tests can substitute fixtures
    let config = AppConfig {
        events: data::calendar_events(),
        presets: data::builtin_presets(),
        life_start_date: None,
        storage,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 840.0]) // Room for the calendar grid + sticker canvas
            .with_min_inner_size([820.0, 600.0])
            .with_title("Friday")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Friday",
        options,
        Box::new(|cc| match FridayApp::new(cc, config) {
            Ok(app) => {
                info!("Successfully initialized Friday");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
