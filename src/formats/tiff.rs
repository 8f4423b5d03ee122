use std::fs::File;
use std::path::Path;

use ndarray::{Array2, Array3};
use tiff::decoder::{Decoder, DecodingResult};

use super::util::finish_volume;
use super::{IoError, Loaded, Result};

/// Reads every page of a TIFF as one Z slice. A single-page file is a 2D
/// image and is padded like one.
pub(crate) fn read_tiff_stack(path: &Path) -> Result<Loaded> {
    let file = File::open(path)?;
    let mut decoder = Decoder::new(file)?;
    let (width, height) = decoder.dimensions()?;
    let mut pages = Vec::new();

    loop {
        pages.push(decode_tiff_page(&mut decoder, width, height)?);
        if !decoder.more_images() {
            break;
        }
        decoder.next_image()?;
        let (other_width, other_height) = decoder.dimensions()?;
        if other_width != width || other_height != height {
            return Err(IoError::InconsistentDimensions {
                expected: (height as usize, width as usize),
                found: (other_height as usize, other_width as usize),
            });
        }
    }

    let (width, height) = (width as usize, height as usize);
    let data = if pages.len() == 1 {
        Array2::from_shape_vec((height, width), pages.remove(0))
            .expect("shape checked")
            .into_dyn()
    } else {
        let depth = pages.len();
        Array3::from_shape_vec((depth, height, width), pages.concat())
            .expect("shape checked")
            .into_dyn()
    };
    finish_volume(data, path, None, Vec::new())
}

fn decode_tiff_page(decoder: &mut Decoder<File>, width: u32, height: u32) -> Result<Vec<f32>> {
    let values = match decoder.read_image()? {
        DecodingResult::U8(buffer) => buffer.into_iter().map(f32::from).collect::<Vec<_>>(),
        DecodingResult::U16(buffer) => buffer.into_iter().map(f32::from).collect(),
        DecodingResult::I8(buffer) => buffer.into_iter().map(f32::from).collect(),
        DecodingResult::I16(buffer) => buffer.into_iter().map(f32::from).collect(),
        DecodingResult::U32(buffer) => buffer.into_iter().map(|value| value as f32).collect(),
        DecodingResult::I32(buffer) => buffer.into_iter().map(|value| value as f32).collect(),
        DecodingResult::F32(buffer) => buffer,
        DecodingResult::F64(buffer) => buffer.into_iter().map(|value| value as f32).collect(),
        other => {
            return Err(IoError::UnsupportedLayout(format!(
                "unsupported TIFF sample type: {other:?}"
            )));
        }
    };
    if values.len() != width as usize * height as usize {
        return Err(IoError::UnsupportedLayout(
            "only single-channel TIFF pages are supported".into(),
        ));
    }
    Ok(values)
}
