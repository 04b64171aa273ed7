//! Device fakes shared by the studio integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use qrforge_business::{
    Asset, Capabilities, Capability, GalleryPicker, ModuleRenderer, PermissionStatus, PickOutcome,
    QrRenderer, RenderHandle, RenderParams, ShareOptions, ShareSheet, StudioConfig, StudioError,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Answers permission prompts from fixed values and counts prompts.
pub struct FakeCapabilities {
    pub camera: PermissionStatus,
    pub gallery: PermissionStatus,
    pub prompts: Cell<usize>,
}

impl FakeCapabilities {
    pub fn granted() -> Self {
        Self {
            camera: PermissionStatus::Granted,
            gallery: PermissionStatus::Granted,
            prompts: Cell::new(0),
        }
    }

    pub fn camera_denied() -> Self {
        Self {
            camera: PermissionStatus::Denied,
            ..Self::granted()
        }
    }
}

#[async_trait(?Send)]
impl Capabilities for FakeCapabilities {
    async fn request(&self, capability: Capability) -> PermissionStatus {
        self.prompts.set(self.prompts.get() + 1);
        tokio::task::yield_now().await;
        match capability {
            Capability::Camera => self.camera,
            Capability::Gallery => self.gallery,
        }
    }
}

/// Returns queued outcomes in order; `Cancelled` once the queue is empty.
#[derive(Default)]
pub struct ScriptedPicker {
    outcomes: RefCell<VecDeque<PickOutcome>>,
}

impl ScriptedPicker {
    pub fn new(outcomes: impl IntoIterator<Item = PickOutcome>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.into_iter().collect()),
        }
    }
}

#[async_trait(?Send)]
impl GalleryPicker for ScriptedPicker {
    async fn pick_image(&self) -> Result<PickOutcome, StudioError> {
        tokio::task::yield_now().await;
        Ok(self
            .outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or(PickOutcome::Cancelled))
    }
}

/// Records every share request. Suspends once per call so overlapping
/// calls can interleave.
#[derive(Default)]
pub struct RecordingSheet {
    pub files: RefCell<Vec<PathBuf>>,
    pub images: RefCell<Vec<u64>>,
    pub fail_with: Option<String>,
}

impl RecordingSheet {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_owned()),
            ..Self::default()
        }
    }

    fn outcome(&self) -> Result<(), StudioError> {
        match &self.fail_with {
            Some(message) => Err(StudioError::Share(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl ShareSheet for RecordingSheet {
    async fn share_file(&self, path: &Path, _options: &ShareOptions) -> Result<(), StudioError> {
        tokio::task::yield_now().await;
        self.files.borrow_mut().push(path.to_path_buf());
        self.outcome()
    }

    async fn share_image(
        &self,
        handle: &RenderHandle,
        _options: &ShareOptions,
    ) -> Result<(), StudioError> {
        tokio::task::yield_now().await;
        self.images.borrow_mut().push(handle.id());
        self.outcome()
    }
}

/// Real renderer that counts how often it runs.
#[derive(Default)]
pub struct CountingRenderer {
    pub calls: Cell<usize>,
}

impl QrRenderer for CountingRenderer {
    fn render(
        &self,
        payload: &str,
        params: &RenderParams,
    ) -> Result<image::RgbaImage, StudioError> {
        self.calls.set(self.calls.get() + 1);
        ModuleRenderer.render(payload, params)
    }
}

/// Encodes `payload` the way the studio renders it, as PNG bytes.
pub fn qr_png(payload: &str) -> Vec<u8> {
    let params = RenderParams::from_config(&StudioConfig::default());
    let image = ModuleRenderer.render(payload, &params).expect("renders");
    let mut bytes = std::io::Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, image::ImageFormat::Png)
        .expect("png encoding");
    bytes.into_inner()
}

pub fn asset(uri: &str, bytes: Vec<u8>) -> PickOutcome {
    PickOutcome::Selected(Asset {
        uri: uri.to_owned(),
        bytes,
    })
}
