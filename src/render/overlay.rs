use image::{GrayImage, Rgb, RgbImage};

use super::Crosshair;

pub const CROSSHAIR_COLOR: [u8; 3] = [255, 0, 0];

/// Copies a grayscale slice into RGB and draws a one pixel wide crosshair.
/// Lines that fall outside the image are skipped.
pub fn burn_crosshair(image: &GrayImage, crosshair: Crosshair) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut output = RgbImage::from_fn(width, height, |x, y| {
        let value = image.get_pixel(x, y).0[0];
        Rgb([value, value, value])
    });

    let column = crosshair.x.floor();
    if column >= 0.0 && column < width as f32 {
        for y in 0..height {
            output.put_pixel(column as u32, y, Rgb(CROSSHAIR_COLOR));
        }
    }
    let row = crosshair.y.floor();
    if row >= 0.0 && row < height as f32 {
        for x in 0..width {
            output.put_pixel(x, row as u32, Rgb(CROSSHAIR_COLOR));
        }
    }
    output
}
