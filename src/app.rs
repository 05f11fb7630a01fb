use eframe::egui;

use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct OsrgApp {
    pub state: AppState,
}

impl eframe::App for OsrgApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("file_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        egui::TopBottomPanel::bottom("report_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            panels::bottom_bar(ui, &mut self.state);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            panels::log_panel(ui, &self.state);
        });
    }
}
