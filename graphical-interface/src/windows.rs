use chrono::{DateTime, Local, Utc};
use egui::{Align2, RichText, Ui, Window};
use walkers::MapMemory;

/// Simple GUI to zoom in and out.
pub fn zoom(ui: &Ui, map_memory: &mut MapMemory) {
    Window::new("Map")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [10., -10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }

                if ui.button(RichText::new("➖").heading()).clicked() {
                    let _ = map_memory.zoom_out();
                }
            });
        });
}

/// Number of tracked aircraft and when they were last refreshed.
pub fn status(ui: &Ui, aircraft: usize, updated_at: Option<DateTime<Utc>>) {
    Window::new("Status")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_TOP, [-10., 10.])
        .show(ui.ctx(), |ui| {
            ui.label(RichText::new(format!("{} aircraft", aircraft)).strong());
            ui.label(last_refresh_label(updated_at));
        });
}

fn last_refresh_label(updated_at: Option<DateTime<Utc>>) -> String {
    match updated_at {
        Some(time) => format!(
            "Updated {}",
            time.with_timezone(&Local).format("%H:%M:%S")
        ),
        None => "Waiting for data".to_string(),
    }
}
