//! The single shared QR artifact and the operations that replace or edit it.

use std::path::PathBuf;
use std::rc::Rc;

use image::RgbaImage;
use qrforge_states::State;

use crate::{
    FileStore, GenerationRequest, ModuleRenderer, Platform, QrArtifact, QrRenderer, RenderHandle,
    RenderParams, StudioConfig, StudioError,
};

/// Holds the current artifact. Registered once in the `StateCtx`; every screen
/// works on the same instance through a `Shared<ArtifactStore>` handle, so the
/// last writer wins and all readers see it immediately.
#[derive(Debug)]
pub struct ArtifactStore {
    artifact: QrArtifact,
    renderer: Rc<dyn QrRenderer>,
    next_handle_id: u64,
    share_file_name: String,
}

impl State for ArtifactStore {
    const NAME: &'static str = "artifact_store";
}

impl ArtifactStore {
    pub fn new(config: &StudioConfig) -> Self {
        Self::with_renderer(config, Rc::new(ModuleRenderer))
    }

    pub fn with_renderer(config: &StudioConfig, renderer: Rc<dyn QrRenderer>) -> Self {
        Self {
            artifact: QrArtifact::empty(RenderParams::from_config(config)),
            renderer,
            next_handle_id: 1,
            share_file_name: config.share_file_name.clone(),
        }
    }

    pub fn artifact(&self) -> &QrArtifact {
        &self.artifact
    }

    pub fn payload(&self) -> &str {
        self.artifact.payload()
    }

    pub fn params(&self) -> &RenderParams {
        self.artifact.params()
    }

    pub fn render_handle(&self) -> Option<&RenderHandle> {
        self.artifact.render_handle()
    }

    pub fn has_artifact(&self) -> bool {
        !self.artifact.is_empty()
    }

    pub fn share_file_name(&self) -> &str {
        &self.share_file_name
    }

    /// Validates `request`, renders it and replaces the artifact.
    ///
    /// On any error the artifact is left exactly as it was.
    pub fn generate(
        &mut self,
        request: &GenerationRequest,
        platform: Platform,
    ) -> Result<&RenderHandle, StudioError> {
        let payload = match request.resolve(platform) {
            Ok(payload) => payload,
            Err(err) => {
                log::info!("Rejected {} generation: {err}", request.variant());
                return Err(err);
            }
        };
        let image = self.renderer.render(&payload, &self.artifact.params)?;

        log::info!(
            "Generated {} QR code ({} chars) on {platform}",
            request.variant(),
            payload.chars().count()
        );
        self.artifact.payload = payload;
        Ok(self.set_render_ref(image))
    }

    pub fn generate_app_links(
        &mut self,
        android: &str,
        ios: &str,
        default: &str,
        platform: Platform,
    ) -> Result<&RenderHandle, StudioError> {
        self.generate(
            &GenerationRequest::AppLinks {
                android: android.to_owned(),
                ios: ios.to_owned(),
                default: default.to_owned(),
            },
            platform,
        )
    }

    pub fn generate_text(&mut self, body: &str) -> Result<&RenderHandle, StudioError> {
        self.generate(
            &GenerationRequest::Text {
                body: body.to_owned(),
            },
            Platform::current(),
        )
    }

    pub fn generate_youtube(&mut self, url: &str) -> Result<&RenderHandle, StudioError> {
        self.generate(
            &GenerationRequest::YoutubeLink { url: url.to_owned() },
            Platform::current(),
        )
    }

    pub fn generate_link(&mut self, url: &str) -> Result<&RenderHandle, StudioError> {
        self.generate(
            &GenerationRequest::Link { url: url.to_owned() },
            Platform::current(),
        )
    }

    /// Registers a freshly rendered image as the artifact's handle.
    pub fn set_render_ref(&mut self, image: RgbaImage) -> &RenderHandle {
        let id = self.next_handle_id;
        self.next_handle_id += 1;
        self.artifact
            .render_handle
            .insert(RenderHandle::new(id, image))
    }

    /// Resets the payload so no stale artifact is shown. Render params survive.
    pub fn clear(&mut self) {
        if self.has_artifact() {
            log::debug!("Clearing QR artifact");
        }
        self.artifact.payload.clear();
        self.artifact.render_handle = None;
    }

    /// Applies `f` to the render params and re-renders the current payload.
    ///
    /// The new params are committed only when the re-render succeeds; on error
    /// params and handle stay as they were.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut RenderParams) -> R) -> Result<R, StudioError> {
        let mut params = self.artifact.params.clone();
        let result = f(&mut params);
        if self.has_artifact() {
            let image = match self.renderer.render(&self.artifact.payload, &params) {
                Ok(image) => image,
                Err(err) => {
                    log::warn!("Edit discarded, re-render failed: {err}");
                    return Err(err);
                }
            };
            self.artifact.params = params;
            self.set_render_ref(image);
        } else {
            self.artifact.params = params;
        }
        Ok(result)
    }

    /// Writes the rendered image as PNG into the documents directory.
    pub fn save(&self, files: &dyn FileStore) -> Result<PathBuf, StudioError> {
        let handle = self.render_handle().ok_or(StudioError::NoArtifact)?;
        let png = handle.to_png()?;
        let path = files.write(&self.share_file_name, &png)?;
        log::info!("Saved QR code to {}", path.display());
        Ok(path)
    }
}
