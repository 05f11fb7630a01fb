use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

/// Suggested name in the save dialog.
const DEFAULT_REPORT_NAME: &str = "Order Status Report.xlsx";

// ---------------------------------------------------------------------------
// Top panel – title and file picker
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Order Status Report");
        ui.add_space(4.0);
        if ui.button("Select CSV File").clicked() {
            open_file_dialog(state);
        }
        if let Some(path) = &state.selected_file {
            ui.label(RichText::new(path.display().to_string()).small());
        }
    });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Central panel – log
// ---------------------------------------------------------------------------

pub fn log_panel(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui: &mut Ui| {
            for line in &state.log {
                let mut text = RichText::new(line).monospace();
                if line.starts_with("Error:") {
                    text = text.color(Color32::RED);
                }
                ui.label(text);
            }
        });
}

// ---------------------------------------------------------------------------
// Bottom panel – report controls
// ---------------------------------------------------------------------------

pub fn bottom_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        let create = ui.add_enabled(
            state.selected_file.is_some(),
            egui::Button::new("Create Report"),
        );
        if create.clicked() {
            state.create_report(save_file_dialog);
        }
        ui.checkbox(&mut state.with_optional_columns, "with optional columns");
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Select order status export")
        .add_filter("CSV", &["csv"])
        .pick_file();
    state.select_file(file);
}

fn save_file_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save report")
        .set_file_name(DEFAULT_REPORT_NAME)
        .add_filter("Excel workbook", &["xlsx"])
        .save_file()
        .map(|mut path| {
            if path.extension().is_none() {
                path.set_extension("xlsx");
            }
            path
        })
}
