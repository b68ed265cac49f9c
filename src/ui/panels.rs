use eframe::egui::{self, Align, Layout, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar: app name, catalog counts, theme switch.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Breakfast Tips");

        ui.separator();

        ui.label(format!(
            "{} tips, {} expanded",
            state.catalog.len(),
            state.expanded_count()
        ));

        ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
            egui::widgets::global_theme_preference_switch(ui);
        });
    });
}
