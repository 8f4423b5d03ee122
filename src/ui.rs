mod app;
mod canvas;
mod panel;
mod volume_view;

use std::path::PathBuf;

use eframe::egui;

use crate::runtime::AppContext;

use app::MprApp;

const WINDOW_TITLE: &str = "MPR Viewer";
const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 420.0];

/// Opens the viewer window and blocks until it is closed.
pub fn run(context: AppContext, startup_input: Option<PathBuf>) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(context.config().window_size)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(MprApp::new(cc, context, startup_input)))),
    )
    .map_err(|error| error.to_string())
}
