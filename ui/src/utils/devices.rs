//! Desktop implementations of the device services.
//!
//! - `DesktopCapabilities`: desktop apps are not permission gated, every prompt is granted.
//! - `RfdGalleryPicker`: native file dialog via `rfd`.
//! - `ClipboardShareSheet`: the desktop "share sheet" puts the image (or the
//!   saved file path) on the system clipboard via `arboard`.

use std::path::Path;

use async_trait::async_trait;
use qrforge_business::{
    Asset, Capabilities, Capability, GalleryPicker, PermissionStatus, PickOutcome, RenderHandle,
    ShareOptions, ShareSheet, StudioError,
};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopCapabilities;

#[async_trait(?Send)]
impl Capabilities for DesktopCapabilities {
    async fn request(&self, capability: Capability) -> PermissionStatus {
        log::debug!("Desktop grants {capability} access without prompting");
        PermissionStatus::Granted
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RfdGalleryPicker;

#[async_trait(?Send)]
impl GalleryPicker for RfdGalleryPicker {
    async fn pick_image(&self) -> Result<PickOutcome, StudioError> {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", IMAGE_EXTENSIONS)
            .set_title("Select an image")
            .pick_file()
        else {
            return Ok(PickOutcome::Cancelled);
        };

        log::info!("User selected file: {path:?}");
        let bytes = std::fs::read(&path)
            .map_err(|e| StudioError::Decode(format!("{}: {e}", path.display())))?;
        Ok(PickOutcome::Selected(Asset {
            uri: path_uri(&path),
            bytes,
        }))
    }
}

fn path_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ClipboardShareSheet;

impl ClipboardShareSheet {
    fn clipboard() -> Result<arboard::Clipboard, StudioError> {
        arboard::Clipboard::new().map_err(|e| StudioError::Share(e.to_string()))
    }
}

#[async_trait(?Send)]
impl ShareSheet for ClipboardShareSheet {
    async fn share_file(&self, path: &Path, options: &ShareOptions) -> Result<(), StudioError> {
        log::info!("{}: copying {path:?} ({})", options.dialog_title, options.mime_type);
        Self::clipboard()?
            .set_text(path.display().to_string())
            .map_err(|e| StudioError::Share(e.to_string()))
    }

    async fn share_image(
        &self,
        handle: &RenderHandle,
        options: &ShareOptions,
    ) -> Result<(), StudioError> {
        let (width, height) = handle.size();
        log::info!(
            "{}: copying {width}x{height} image #{} to clipboard",
            options.dialog_title,
            handle.id()
        );
        let image = arboard::ImageData {
            width: width as usize,
            height: height as usize,
            bytes: handle.image().as_raw().as_slice().into(),
        };
        Self::clipboard()?
            .set_image(image)
            .map_err(|e| StudioError::Share(e.to_string()))
    }
}
