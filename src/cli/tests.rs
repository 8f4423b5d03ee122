use std::fs;

use clap::Parser;
use image::GrayImage;
use tempfile::tempdir;
use tiff::encoder::{TiffEncoder, colortype};

use super::runner::execute;
use super::types::{Cli, Commands};
use crate::config::load_config;
use crate::model::Plane;
use crate::render::{CROSSHAIR_COLOR, ViewAxis};
use crate::runtime::AppError;

fn write_stack(path: &std::path::Path) {
    let file = fs::File::create(path).expect("create");
    let mut encoder = TiffEncoder::new(file).expect("encoder");
    for z in 0..6_u8 {
        let page = (0..8 * 5).map(|index| z * 10 + index as u8).collect::<Vec<_>>();
        encoder
            .write_image::<colortype::Gray8>(8, 5, &page)
            .expect("page");
    }
}

#[test]
fn render_arguments_parse_with_defaults() {
    let cli = Cli::try_parse_from(["mpr", "render", "in.nii", "out.png", "--plane", "coronal"])
        .expect("parse");
    let Commands::Render {
        plane,
        slice,
        brightness,
        crosshair,
        ..
    } = cli.command
    else {
        panic!("expected render");
    };
    assert_eq!(plane, Plane::Coronal);
    assert_eq!(slice, None);
    assert_eq!(brightness, 1.0);
    assert!(!crosshair);
}

#[test]
fn unknown_plane_is_rejected_by_parser() {
    assert!(Cli::try_parse_from(["mpr", "render", "a", "b", "--plane", "oblique"]).is_err());
}

#[test]
fn config_flag_is_global() {
    let cli = Cli::try_parse_from([
        "mpr", "volume", "in.tif", "out.png", "--axis", "lateral", "--config", "v.yaml",
    ])
    .expect("parse");
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("v.yaml")));
    assert!(matches!(
        cli.command,
        Commands::Volume {
            axis: ViewAxis::Lateral,
            ..
        }
    ));
}

#[test]
fn render_writes_slice_with_crosshair() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("stack.tif");
    let output = dir.path().join("sagittal.png");
    write_stack(&input);

    let cli = Cli::try_parse_from([
        "mpr",
        "render",
        input.to_str().expect("utf-8"),
        output.to_str().expect("utf-8"),
        "--plane",
        "sagittal",
        "--width",
        "50",
        "--height",
        "60",
        "--crosshair",
    ])
    .expect("parse");
    execute(cli).expect("render");

    let image = image::open(&output).expect("open output").to_rgb8();
    assert_eq!(image.dimensions(), (50, 60));
    assert!(image.pixels().any(|pixel| pixel.0 == CROSSHAIR_COLOR));
}

#[test]
fn volume_writes_composite_png() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("stack.tif");
    let output = dir.path().join("volume.png");
    write_stack(&input);
    let cli = Cli::try_parse_from([
        "mpr",
        "volume",
        input.to_str().expect("utf-8"),
        output.to_str().expect("utf-8"),
    ])
    .expect("parse");
    execute(cli).expect("volume");
    // Anterior view: X across, Z down.
    assert_eq!(image::image_dimensions(&output).expect("dims"), (8, 6));
}

#[test]
fn config_command_writes_effective_settings() {
    let dir = tempdir().expect("tempdir");
    let source = dir.path().join("in.yaml");
    let target = dir.path().join("out.json");
    fs::write(&source, "zoom_speed: 0.25\n").expect("write");
    let cli = Cli::try_parse_from([
        "mpr",
        "--config",
        source.to_str().expect("utf-8"),
        "config",
        "--write",
        target.to_str().expect("utf-8"),
    ])
    .expect("parse");
    execute(cli).expect("config");
    assert_eq!(load_config(&target).expect("load").zoom_speed, 0.25);
}

#[test]
fn unsupported_input_surfaces_io_error() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("scan.bmp");
    GrayImage::new(2, 2).save(&input).expect("save");
    let cli = Cli::try_parse_from(["mpr", "info", input.to_str().expect("utf-8")]).expect("parse");
    let err = execute(cli).expect_err("must fail");
    assert!(matches!(err, AppError::Io(_)));
    assert!(err.to_string().contains("bmp"));
}

#[test]
fn render_accepts_single_image_with_load_warning() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("slice.png");
    let output = dir.path().join("axial.png");
    GrayImage::from_fn(4, 3, |x, y| image::Luma([(x * 40 + y * 10) as u8]))
        .save(&input)
        .expect("save");

    let cli = Cli::try_parse_from([
        "mpr",
        "render",
        input.to_str().expect("utf-8"),
        output.to_str().expect("utf-8"),
        "--width",
        "8",
        "--height",
        "6",
    ])
    .expect("parse");
    execute(cli).expect("render");
    assert_eq!(image::image_dimensions(&output).expect("dims"), (8, 6));
}
