pub mod cine;
pub mod cli;
pub mod config;
pub mod formats;
pub mod interaction;
pub mod logging;
pub mod mapping;
pub mod model;
pub mod render;
pub mod runtime;
pub mod session;
pub mod ui;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}

/// Opens the viewer with default settings and no volume.
pub fn run_viewer() -> Result<(), String> {
    ui::run(runtime::AppContext::new(), None)
}
