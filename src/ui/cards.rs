use eframe::egui::{self, Id, RichText, ScrollArea, Ui};

use crate::color;
use crate::data::model::Tip;
use crate::state::AppState;
use crate::ui::assets;

// ---------------------------------------------------------------------------
// Tip list (central panel)
// ---------------------------------------------------------------------------

/// Maximum rendered height of a tip's picture.
const IMAGE_MAX_HEIGHT: f32 = 180.0;
/// Vertical gap between cards.
const CARD_GAP: f32 = 8.0;
/// Fade duration of the description, in seconds.
const DESCRIPTION_FADE_SECS: f32 = 0.3;

/// Render the scrollable list of tip cards, one per catalog entry, in
/// catalog order. An empty catalog renders an empty list.
pub fn tip_list(ui: &mut Ui, state: &mut AppState) {
    // Clone the catalog so we can mutate card state inside the loop.
    let catalog = state.catalog.clone();
    let total = catalog.len();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for tip in catalog.iter() {
                tip_card(ui, state, tip, total);
                ui.add_space(CARD_GAP);
            }
        });
}

// ---------------------------------------------------------------------------
// One card
// ---------------------------------------------------------------------------

/// Render a single card: day and title always visible, picture centered,
/// toggle control below it, description only while expanded.
fn tip_card(ui: &mut Ui, state: &mut AppState, tip: &Tip, total: usize) {
    let accent = color::accent(tip.id as usize - 1, total);

    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());

        ui.label(RichText::new(tip.day).heading().strong().color(accent));
        ui.label(RichText::new(tip.title).small());
        ui.add_space(4.0);

        if let Some(source) = assets::tip_image(tip.image) {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.add(egui::Image::new(source).max_height(IMAGE_MAX_HEIGHT));
            });
            ui.add_space(4.0);
        }

        ui.vertical_centered(|ui: &mut Ui| {
            let expanded = state.is_expanded(tip.id);
            let glyph = if expanded { "⏶" } else { "⏷" };
            if ui.selectable_label(expanded, glyph).clicked() {
                state.toggle(tip.id);
            }
        });

        // The fade is a pure function of the current flag, not of the click:
        // a re-render mid-transition picks the interpolation up where it is.
        let expanded = state.is_expanded(tip.id);
        let openness = ui.ctx().animate_bool_with_time(
            Id::new(("tip_description", tip.id)),
            expanded,
            DESCRIPTION_FADE_SECS,
        );
        if openness > 0.0 {
            ui.scope(|ui: &mut Ui| {
                ui.set_opacity(openness);
                ui.label(tip.description);
            });
        }
    });
}
