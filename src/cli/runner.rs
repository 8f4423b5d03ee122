use std::path::Path;

use clap::Parser;
use serde_json::json;

use crate::config::{ViewerConfig, load_config, save_config};
use crate::runtime::{AppContext, AppError};
use crate::session::{ViewerSession, ViewportSize};

use super::types::{Cli, Commands, VolumeInfo};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    execute(cli).map_err(|error| error.to_string())
}

pub(super) fn execute(cli: Cli) -> Result<(), AppError> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ViewerConfig::default(),
    };
    let app = AppContext::from_config(config);

    match cli.command {
        Commands::Info { input } => {
            let loaded = app.io_service().read(&input)?;
            let volume = &loaded.volume;
            let (depth, height, width) = volume.dim();
            let info = VolumeInfo {
                shape: [depth, height, width],
                min: volume.min(),
                max: volume.max(),
                spacing: volume.spacing(),
                source: volume.source().map(|path| path.display().to_string()),
                warnings: loaded.warnings.iter().map(ToString::to_string).collect(),
            };
            print_json(&info);
        }
        Commands::Render {
            input,
            output,
            plane,
            slice,
            width,
            height,
            brightness,
            contrast,
            crosshair,
        } => {
            let mut session = load_session(&app, &input)?;
            let Some(focus) = session.focus_mut() else {
                return Err(AppError::Render(format!("{} has no volume", input.display())));
            };
            if let Some(slice) = slice {
                focus.set_slice_index(plane, i64::try_from(slice).unwrap_or(i64::MAX));
            }
            let slice = focus.slice(plane);
            let (columns, rows) = focus.extents().plane_size(plane);
            session.set_viewport(
                plane,
                ViewportSize::new(width.unwrap_or(columns as u32), height.unwrap_or(rows as u32)),
            );
            session.display_mut().set_brightness(brightness);
            session.display_mut().set_contrast(contrast);

            let image = app
                .render_service()
                .render_slice_rgb(&session, plane, crosshair)?;
            app.io_service().write_png(&output, &image)?;
            print_json(&json!({
                "status": "ok",
                "output": output,
                "plane": plane.label(),
                "slice": slice,
            }));
        }
        Commands::Volume {
            input,
            output,
            axis,
        } => {
            let loaded = app.io_service().read(&input)?;
            let image = app.render_service().render_volume(&loaded.volume, axis)?;
            app.io_service().write_png(&output, &image)?;
            print_json(&json!({
                "status": "ok",
                "output": output,
                "axis": axis.label(),
            }));
        }
        Commands::Config { write } => match write {
            Some(path) => {
                save_config(&path, app.config())?;
                print_json(&json!({"status": "ok", "output": path}));
            }
            None => print_json(app.config()),
        },
        Commands::View { input } => {
            crate::ui::run(app, input).map_err(AppError::Ui)?;
        }
    }

    Ok(())
}

fn load_session(app: &AppContext, input: &Path) -> Result<ViewerSession, AppError> {
    let mut session = app.new_session();
    // Load warnings are already reported through tracing.
    app.io_service().load_into(&mut session, input)?;
    Ok(session)
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(error) => tracing::error!("failed to serialize output: {}", error),
    }
}
