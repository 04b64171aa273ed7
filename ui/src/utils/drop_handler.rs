//! Dropped image files, fed to the scanner as camera frames.
//!
//! Desktop builds have no live camera stream; dropping an image onto the
//! scanner page runs the same frame decoder the camera would.

use image::DynamicImage;

/// Returns the first dropped file this frame that decodes as an image.
pub fn dropped_frame(ctx: &egui::Context) -> Option<(String, DynamicImage)> {
    let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
    if dropped_files.is_empty() {
        return None;
    }

    log::trace!(target: "qrforge_ui::drop", "dropped_files={}", dropped_files.len());

    let frame = dropped_files
        .iter()
        .find_map(|file| load_dropped_file(file).map(|image| (file.name.clone(), image)));
    if frame.is_none() {
        log::warn!(
            target: "qrforge_ui::drop",
            "no_valid_image_in_drop dropped_files={}",
            dropped_files.len()
        );
    }
    frame
}

/// Decodes a dropped file from its in-memory bytes (web) or its path (native).
pub fn load_dropped_file(file: &egui::DroppedFile) -> Option<DynamicImage> {
    let bytes = match (&file.bytes, &file.path) {
        (Some(bytes), _) => bytes.to_vec(),
        (None, Some(path)) => match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!(target: "qrforge_ui::drop", "read_failed path={path:?} error={e}");
                return None;
            }
        },
        (None, None) => return None,
    };

    match image::load_from_memory(&bytes) {
        Ok(image) => Some(image),
        Err(e) => {
            log::warn!(target: "qrforge_ui::drop", "decode_failed name={} error={e}", file.name);
            None
        }
    }
}
