use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::model::{Plane, Spacing};
use crate::render::ViewAxis;

#[derive(Debug, Parser)]
#[command(
    name = "mpr",
    version,
    about = "Multi-planar reconstruction viewer for medical volumes"
)]
pub(super) struct Cli {
    /// Viewer settings as YAML or JSON.
    #[arg(long, global = true)]
    pub(super) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Prints shape, intensity range and spacing of a volume as JSON.
    Info { input: PathBuf },
    /// Renders one slice to PNG.
    Render {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value = "axial")]
        plane: Plane,
        /// Slice index; defaults to the middle of the volume.
        #[arg(long)]
        slice: Option<usize>,
        /// Output width; defaults to the slice width.
        #[arg(long)]
        width: Option<u32>,
        /// Output height; defaults to the slice height.
        #[arg(long)]
        height: Option<u32>,
        #[arg(long, default_value_t = 1.0)]
        brightness: f32,
        #[arg(long, default_value_t = 1.0)]
        contrast: f32,
        /// Draws the red crosshair at the focused voxel.
        #[arg(long)]
        crosshair: bool,
    },
    /// Renders the composited 3D view to PNG.
    Volume {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value = "anterior")]
        axis: ViewAxis,
    },
    /// Prints the effective configuration, or writes it to a file.
    Config {
        #[arg(long)]
        write: Option<PathBuf>,
    },
    /// Opens the viewer window, optionally with a volume loaded.
    View { input: Option<PathBuf> },
}

#[derive(Debug, Serialize)]
pub(super) struct VolumeInfo {
    pub(super) shape: [usize; 3],
    pub(super) min: f32,
    pub(super) max: f32,
    pub(super) spacing: Option<Spacing>,
    pub(super) source: Option<String>,
    pub(super) warnings: Vec<String>,
}
