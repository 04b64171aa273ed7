//! The current QR artifact and the handle to its rasterised image.

use std::io::Cursor;
use std::rc::Rc;

use image::{ImageFormat, RgbaImage};

use crate::{QrColor, StudioConfig, StudioError};

/// Parameters the edit screen may change. Reused for every render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    /// Target side length in pixels. The image is never smaller than one
    /// pixel per module, so tiny sizes round up.
    pub render_size: u32,
    pub logo_size: u32,
    pub background: QrColor,
    pub foreground: QrColor,
    pub logo: Option<Rc<RgbaImage>>,
}

impl RenderParams {
    pub fn from_config(config: &StudioConfig) -> Self {
        Self {
            render_size: config.render_size,
            logo_size: config.logo_size,
            background: config.background,
            foreground: config.foreground,
            logo: None,
        }
    }
}

/// Opaque reference to a rendered QR image, used for saving and sharing.
///
/// Ids increase with every render of the owning store, so a view can tell
/// whether the image it uploaded is still current.
#[derive(Debug, Clone)]
pub struct RenderHandle {
    id: u64,
    image: Rc<RgbaImage>,
}

impl RenderHandle {
    pub(crate) fn new(id: u64, image: RgbaImage) -> Self {
        Self {
            id,
            image: Rc::new(image),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Encodes the image as PNG, the format every share target accepts.
    pub fn to_png(&self) -> Result<Vec<u8>, StudioError> {
        let mut buffer = Cursor::new(Vec::new());
        self.image
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| StudioError::Save(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}

/// The value shown on screen: what is encoded, how it looks, and the rendered image.
#[derive(Debug, Clone)]
pub struct QrArtifact {
    pub(crate) payload: String,
    pub(crate) params: RenderParams,
    pub(crate) render_handle: Option<RenderHandle>,
}

impl QrArtifact {
    pub fn empty(params: RenderParams) -> Self {
        Self {
            payload: String::new(),
            params,
            render_handle: None,
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    pub fn render_handle(&self) -> Option<&RenderHandle> {
        self.render_handle.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
