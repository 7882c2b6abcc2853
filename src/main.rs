use eframe::egui;

mod app;
mod catalog;
mod clipboard;
mod config;
mod render;
mod search;
mod ui;
mod watcher;

use app::VitrineApp;
use config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::load_or_default();
    log::info!("Using dataset {}", config.dataset_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Vitrine")
            .with_resizable(true)
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Vitrine",
        options,
        Box::new(|cc| Ok(Box::new(VitrineApp::new(cc, config)))),
    )?;

    Ok(())
}
