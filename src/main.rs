mod app;
mod data;
mod error;
mod report;
mod session;
mod state;
mod ui;

use app::OsrgApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([380.0, 320.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "OSRG Tool",
        options,
        Box::new(|_cc| Ok(Box::new(OsrgApp::default()))),
    )
}
