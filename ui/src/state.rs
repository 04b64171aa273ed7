use chrono::{DateTime, Utc};
use qrforge_business::{
    Capabilities, ColorsEditor, FileStore, GalleryPicker, GridDecoder, LocalFileStore, Platform,
    RenderHandle, ShareSheet, Studio, StudioConfig, StudioError,
};

use crate::utils::devices::{ClipboardShareSheet, DesktopCapabilities, RfdGalleryPicker};
use crate::utils::indicator_driver::IndicatorDriver;
use crate::widgets::{Notices, QrTexture};

/// Device services the pages call into.
pub struct Devices {
    pub capabilities: Box<dyn Capabilities>,
    pub picker: Box<dyn GalleryPicker>,
    pub files: Box<dyn FileStore>,
    pub sheet: Box<dyn ShareSheet>,
}

impl Devices {
    pub fn desktop(config: &StudioConfig) -> Self {
        Self {
            capabilities: Box::new(DesktopCapabilities),
            picker: Box::new(RfdGalleryPicker),
            files: Box::new(LocalFileStore::new(config.documents_dir())),
            sheet: Box::new(ClipboardShareSheet),
        }
    }
}

/// Text typed into the colour editor before it parses as a colour.
#[derive(Debug, Default)]
pub struct HexDrafts {
    pub background: String,
    pub foreground: String,
}

impl HexDrafts {
    pub fn load(&mut self, colors: &ColorsEditor) {
        if let (Ok(background), Ok(foreground)) = (colors.background(), colors.foreground()) {
            self.background = background.to_string();
            self.foreground = foreground.to_string();
        }
    }
}

/// The main application state.
pub struct State {
    pub studio: Studio,
    pub devices: Devices,
    pub decoder: GridDecoder,
    pub notices: Notices,
    pub qr_texture: QrTexture,
    pub hex_drafts: HexDrafts,
    /// Scanner permission prompts run on the first visit only.
    pub scanner_mounted: bool,
    pub indicator_driver: IndicatorDriver,
}

impl State {
    pub fn new(config: StudioConfig, platform: Platform) -> Self {
        let devices = Devices::desktop(&config);
        Self::with_devices(config, platform, devices)
    }

    pub fn with_devices(config: StudioConfig, platform: Platform, devices: Devices) -> Self {
        let mut studio = Studio::new(config, platform);
        let mut notices = Notices::default();
        notices.report(studio.start(Self::now()));

        Self {
            studio,
            devices,
            decoder: GridDecoder,
            notices,
            qr_texture: QrTexture::default(),
            hex_drafts: HexDrafts::default(),
            scanner_mounted: false,
            indicator_driver: IndicatorDriver::new(),
        }
    }

    /// Desktop state with injected devices and default configuration.
    pub fn test(devices: Devices) -> Self {
        Self::with_devices(StudioConfig::default(), Platform::Desktop, devices)
    }

    pub fn now() -> DateTime<Utc> {
        Utc::now()
    }

    pub fn render_handle(&mut self) -> Option<RenderHandle> {
        let handle = self
            .studio
            .store()
            .read(|store| store.render_handle().cloned());
        self.notices
            .report(handle.map_err(StudioError::from))
            .flatten()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(StudioConfig::default(), Platform::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop_state(dir: &std::path::Path) -> State {
        State::test(Devices {
            capabilities: Box::new(DesktopCapabilities),
            picker: Box::new(RfdGalleryPicker),
            files: Box::new(LocalFileStore::new(dir)),
            sheet: Box::new(ClipboardShareSheet),
        })
    }

    #[test]
    fn test_render_handle_follows_the_shared_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut state = desktop_state(dir.path());
        assert!(state.render_handle().is_none());

        let id = state
            .studio
            .store()
            .update(|store| store.generate_text("hello").map(RenderHandle::id))
            .expect("store writable")
            .expect("generates");

        assert_eq!(state.render_handle().map(|h| h.id()), Some(id));
        assert!(state.notices.is_empty());
    }

    #[test]
    fn test_render_handle_reports_a_busy_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut state = desktop_state(dir.path());
        let store = state.studio.store().clone();
        let _writer = store.borrow_mut().expect("first borrow");

        assert!(state.render_handle().is_none());
        let notice = state.notices.iter().last().expect("error notice");
        assert!(notice.message.contains("artifact_store"), "{}", notice.message);
    }
}
