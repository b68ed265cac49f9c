mod app;
mod color;
mod data;
mod state;
mod ui;

use app::BreakfastApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 840.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Breakfast Tips – 30-Day Guide",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render the bundled pngs.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            ui::theme::install(&cc.egui_ctx);
            Ok(Box::new(BreakfastApp::default()))
        }),
    )
}
