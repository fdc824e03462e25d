mod app;
mod data;
mod layout;
mod routes;
mod state;
mod tasks;
mod theme;
mod ui;

use app::FitDeckApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FitDeck – Image Fit Workbench",
        options,
        Box::new(|cc| Ok(Box::new(FitDeckApp::new(cc)))),
    )
}
