//! Displays the current render handle as an egui texture.

use egui::{Color32, ColorImage, Response, Sense, TextureHandle, TextureOptions, Ui};
use image::RgbaImage;
use qrforge_business::RenderHandle;

/// Texture for the last displayed render handle.
///
/// Re-uploads only when the handle id changes, so an unchanged artifact costs
/// nothing per frame.
#[derive(Default)]
pub struct QrTexture {
    handle_id: Option<u64>,
    texture: Option<TextureHandle>,
}

impl QrTexture {
    pub fn sync(&mut self, ctx: &egui::Context, handle: Option<&RenderHandle>) -> Option<&TextureHandle> {
        let Some(handle) = handle else {
            self.handle_id = None;
            self.texture = None;
            return None;
        };

        if self.handle_id != Some(handle.id()) || self.texture.is_none() {
            log::debug!("Uploading QR texture for handle #{}", handle.id());
            self.texture = Some(ctx.load_texture(
                format!("qr_code_{}", handle.id()),
                to_color_image(handle.image()),
                TextureOptions::NEAREST,
            ));
            self.handle_id = Some(handle.id());
        }
        self.texture.as_ref()
    }

    pub fn handle_id(&self) -> Option<u64> {
        self.handle_id
    }
}

pub fn to_color_image(image: &RgbaImage) -> ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}

/// Draws the QR code framed on white. The response is clickable.
pub fn qr_view(ui: &mut Ui, texture: &mut QrTexture, handle: Option<&RenderHandle>) -> Option<Response> {
    let texture = texture.sync(ui.ctx(), handle)?;
    let response = egui::Frame::NONE
        .fill(Color32::WHITE)
        .inner_margin(egui::Margin::same(8))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.add(egui::Image::new(texture).sense(Sense::click()))
                .on_hover_text("Click to save")
        })
        .inner;
    Some(response)
}
