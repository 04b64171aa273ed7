#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use async_trait::async_trait;
use qrforge_business::{
    Asset, Capabilities, Capability, GalleryPicker, LocalFileStore, ModuleRenderer,
    PermissionStatus, PickOutcome, QrRenderer, RenderHandle, RenderParams, ShareOptions,
    ShareSheet, StudioConfig, StudioError,
};
use qrforge_ui::state::{Devices, State};
use tempfile::TempDir;

pub struct FixedCapabilities(pub PermissionStatus);

#[async_trait(?Send)]
impl Capabilities for FixedCapabilities {
    async fn request(&self, _capability: Capability) -> PermissionStatus {
        self.0
    }
}

/// Returns the same outcome on every pick.
pub struct FixedPicker(pub PickOutcome);

#[async_trait(?Send)]
impl GalleryPicker for FixedPicker {
    async fn pick_image(&self) -> Result<PickOutcome, StudioError> {
        Ok(self.0.clone())
    }
}

/// Share log visible to the test after the sheet moved into the state.
#[derive(Default, Clone)]
pub struct ShareLog {
    pub files: Rc<RefCell<Vec<PathBuf>>>,
    pub images: Rc<RefCell<Vec<u64>>>,
}

#[async_trait(?Send)]
impl ShareSheet for ShareLog {
    async fn share_file(&self, path: &Path, _options: &ShareOptions) -> Result<(), StudioError> {
        self.files.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    async fn share_image(
        &self,
        handle: &RenderHandle,
        _options: &ShareOptions,
    ) -> Result<(), StudioError> {
        self.images.borrow_mut().push(handle.id());
        Ok(())
    }
}

pub struct TestDevices {
    pub dir: TempDir,
    pub share_log: ShareLog,
}

impl TestDevices {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
            share_log: ShareLog::default(),
        }
    }

    pub fn devices(&self, permission: PermissionStatus, pick: PickOutcome) -> Devices {
        Devices {
            capabilities: Box::new(FixedCapabilities(permission)),
            picker: Box::new(FixedPicker(pick)),
            files: Box::new(LocalFileStore::new(self.dir.path())),
            sheet: Box::new(self.share_log.clone()),
        }
    }

    pub fn state(&self) -> State {
        State::test(self.devices(PermissionStatus::Granted, PickOutcome::Cancelled))
    }
}

pub fn qr_png(payload: &str) -> Vec<u8> {
    let params = RenderParams::from_config(&StudioConfig::default());
    let image = ModuleRenderer.render(payload, &params).expect("renders");
    let mut bytes = std::io::Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, image::ImageFormat::Png)
        .expect("png encoding");
    bytes.into_inner()
}

pub fn picked(uri: &str, bytes: Vec<u8>) -> PickOutcome {
    PickOutcome::Selected(Asset {
        uri: uri.to_owned(),
        bytes,
    })
}

pub fn payload(state: &State) -> String {
    state
        .studio
        .store()
        .read(|store| store.payload().to_owned())
        .expect("store readable")
}
