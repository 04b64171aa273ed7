//! Reads a QR payload back out of an image.

use image::DynamicImage;

use crate::StudioError;

/// Finds and decodes one QR symbol in an image.
pub trait QrDecoder {
    fn decode(&self, image: &DynamicImage) -> Result<String, StudioError>;
}

/// Grid detector backed by `rqrr`. Uses the first symbol it finds.
#[derive(Debug, Default, Clone, Copy)]
pub struct GridDecoder;

impl QrDecoder for GridDecoder {
    fn decode(&self, image: &DynamicImage) -> Result<String, StudioError> {
        let luma = image.to_luma8();
        let (width, height) = luma.dimensions();
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            width as usize,
            height as usize,
            |x, y| {
                // Coordinates come from the dimensions above, so they fit in u32.
                luma.get_pixel(x as u32, y as u32).0[0]
            },
        );

        let grids = prepared.detect_grids();
        log::debug!("Detected {} QR grid(s) in {width}x{height} image", grids.len());

        let grid = grids
            .into_iter()
            .next()
            .ok_or_else(|| StudioError::Decode("no QR code found in image".to_owned()))?;
        let (_meta, content) = grid
            .decode()
            .map_err(|e| StudioError::Decode(format!("{e:?}")))?;
        Ok(content)
    }
}
