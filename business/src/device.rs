//! Device services the screens depend on.
//!
//! Each service is a trait so the studio can be driven by fakes in tests and
//! by platform adapters in the UI crate. The async ones are `?Send`: the
//! studio runs on one cooperative thread.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{RenderHandle, StudioError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Camera,
    Gallery,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Camera => f.write_str("camera"),
            Self::Gallery => f.write_str("gallery"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

/// Permission prompts for camera and photo library.
#[async_trait(?Send)]
pub trait Capabilities {
    async fn request(&self, capability: Capability) -> PermissionStatus;
}

/// An image picked from the gallery: where it lives and its encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub uri: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Cancelled,
    Selected(Asset),
}

#[async_trait(?Send)]
pub trait GalleryPicker {
    async fn pick_image(&self) -> Result<PickOutcome, StudioError>;
}

/// App-local document storage.
pub trait FileStore {
    fn documents_dir(&self) -> &Path;

    /// Writes `bytes` to `name` inside the documents directory, replacing any
    /// previous file, and returns the full path.
    fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, StudioError>;
}

/// [`FileStore`] on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileStore for LocalFileStore {
    fn documents_dir(&self) -> &Path {
        &self.root
    }

    fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, StudioError> {
        fs::create_dir_all(&self.root).map_err(|e| StudioError::Save(e.to_string()))?;
        let path = self.root.join(name);
        fs::write(&path, bytes).map_err(|e| StudioError::Save(e.to_string()))?;
        log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}

/// Title and content type handed to the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareOptions {
    pub dialog_title: String,
    pub mime_type: String,
}

impl Default for ShareOptions {
    fn default() -> Self {
        Self {
            dialog_title: "Share QR Code".to_owned(),
            mime_type: "image/png".to_owned(),
        }
    }
}

/// Platform share sheet. Failures come back as [`StudioError::Share`].
#[async_trait(?Send)]
pub trait ShareSheet {
    async fn share_file(&self, path: &Path, options: &ShareOptions) -> Result<(), StudioError>;

    async fn share_image(
        &self,
        handle: &RenderHandle,
        options: &ShareOptions,
    ) -> Result<(), StudioError>;
}
