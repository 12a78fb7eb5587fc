pub mod config;
mod countries;
mod dataset;
pub mod errors;
mod icons;
mod map;
mod plugins;
pub mod refresher;
pub mod sources;
mod state;
pub mod types;
mod windows;

pub use config::Config;
pub use errors::{MapError, SourceError};
pub use map::MapShell;

use logger::Logger;

const WINDOW_TITLE: &str = "Flight Map";
const LOG_NAME: &str = "flight_map";

/// Opens the map window and blocks until it is closed.
pub fn run() -> Result<(), eframe::Error> {
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = Config::from_env();
    let logger = match Logger::new(&config.log_dir, LOG_NAME, true) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Logging to console only: {}", e);
            Logger::console()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let shell = MapShell::new(cc.egui_ctx.clone(), config, logger)?;
            Ok(Box::new(shell) as Box<dyn eframe::App>)
        }),
    )
}
