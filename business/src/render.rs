//! Turns a payload into pixels.

use std::fmt;

use image::RgbaImage;
use image::imageops::{self, FilterType};
use qrcode::{EcLevel, QrCode};

use crate::{RenderParams, StudioError};

/// Light modules kept around the symbol so scanners can find it.
pub const QUIET_ZONE: u32 = 4;

/// Produces the image for a payload. Implementations must not touch any state.
pub trait QrRenderer {
    fn render(&self, payload: &str, params: &RenderParams) -> Result<RgbaImage, StudioError>;
}

impl fmt::Debug for dyn QrRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn QrRenderer")
    }
}

/// Paints each module as a square block of `scale` pixels.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModuleRenderer;

impl QrRenderer for ModuleRenderer {
    fn render(&self, payload: &str, params: &RenderParams) -> Result<RgbaImage, StudioError> {
        // A centred logo hides modules; the highest correction level survives it.
        let level = if params.logo.is_some() {
            EcLevel::H
        } else {
            EcLevel::M
        };
        let code = QrCode::with_error_correction_level(payload.as_bytes(), level)
            .map_err(|e| StudioError::Render(e.to_string()))?;

        let width = u32::try_from(code.width())
            .map_err(|e| StudioError::Render(e.to_string()))?;
        let modules = width + 2 * QUIET_ZONE;
        let scale = (params.render_size / modules).max(1);
        let side = modules * scale;

        let mut image = RgbaImage::from_pixel(side, side, params.background.to_rgba());
        let dark = params.foreground.to_rgba();

        for (index, color) in code.to_colors().into_iter().enumerate() {
            if color != qrcode::Color::Dark {
                continue;
            }
            let index = u32::try_from(index).map_err(|e| StudioError::Render(e.to_string()))?;
            let x0 = (index % width + QUIET_ZONE) * scale;
            let y0 = (index / width + QUIET_ZONE) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    image.put_pixel(x0 + dx, y0 + dy, dark);
                }
            }
        }

        if let Some(logo) = &params.logo
            && params.logo_size > 0
        {
            let logo_side = params.logo_size.min(side);
            let resized = imageops::resize(logo.as_ref(), logo_side, logo_side, FilterType::Triangle);
            let offset = i64::from((side - logo_side) / 2);
            imageops::overlay(&mut image, &resized, offset, offset);
        }

        log::debug!(
            "Rendered {} byte payload as {width}x{width} modules at {side}px",
            payload.len()
        );
        Ok(image)
    }
}
