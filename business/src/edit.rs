//! Edit screen: a Logo tab and a Colors tab over the same shared artifact.
//!
//! Editors keep no copy of the artifact. Each write goes straight through
//! [`ArtifactStore::edit`], re-renders, and is visible to every holder of the
//! store handle.

use std::rc::Rc;

use qrforge_states::Shared;

use crate::{ArtifactStore, QrColor, StudioError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EditTab {
    #[default]
    Logo,
    Colors,
}

impl EditTab {
    pub const ALL: [Self; 2] = [Self::Logo, Self::Colors];

    pub fn label(self) -> &'static str {
        match self {
            Self::Logo => "Logo",
            Self::Colors => "Colors",
        }
    }
}

#[derive(Debug)]
pub struct EditScreen {
    active: EditTab,
    logo: LogoEditor,
    colors: ColorsEditor,
}

impl EditScreen {
    pub fn new(store: Shared<ArtifactStore>) -> Self {
        Self {
            active: EditTab::default(),
            logo: LogoEditor {
                store: store.clone(),
            },
            colors: ColorsEditor { store },
        }
    }

    pub fn active(&self) -> EditTab {
        self.active
    }

    pub fn select(&mut self, tab: EditTab) {
        self.active = tab;
    }

    pub fn logo(&self) -> &LogoEditor {
        &self.logo
    }

    pub fn colors(&self) -> &ColorsEditor {
        &self.colors
    }
}

#[derive(Debug)]
pub struct LogoEditor {
    store: Shared<ArtifactStore>,
}

impl LogoEditor {
    pub fn logo_size(&self) -> Result<u32, StudioError> {
        Ok(self.store.read(|s| s.params().logo_size)?)
    }

    /// Largest logo that still leaves the symbol readable.
    pub fn max_logo_size(&self) -> Result<u32, StudioError> {
        Ok(self.store.read(|s| s.params().render_size / 2)?)
    }

    /// Sets the logo size, clamped to `0..=max_logo_size()`. Returns the applied size.
    pub fn set_logo_size(&self, size: u32) -> Result<u32, StudioError> {
        self.store.update(|store| {
            store.edit(|params| {
                params.logo_size = size.min(params.render_size / 2);
                params.logo_size
            })
        })?
    }

    pub fn has_logo(&self) -> Result<bool, StudioError> {
        Ok(self.store.read(|s| s.params().logo.is_some())?)
    }

    /// Decodes an encoded image (PNG, JPEG) and uses it as the centre logo.
    pub fn set_logo(&self, bytes: &[u8]) -> Result<(), StudioError> {
        let logo = image::load_from_memory(bytes)
            .map_err(|e| StudioError::Logo(e.to_string()))?
            .to_rgba8();
        log::info!("Logo set ({}x{})", logo.width(), logo.height());
        self.store
            .update(|store| store.edit(|params| params.logo = Some(Rc::new(logo))))?
    }

    pub fn clear_logo(&self) -> Result<(), StudioError> {
        self.store
            .update(|store| store.edit(|params| params.logo = None))?
    }
}

#[derive(Debug)]
pub struct ColorsEditor {
    store: Shared<ArtifactStore>,
}

impl ColorsEditor {
    /// Quick picks shown next to the colour pickers.
    pub const PRESETS: [QrColor; 6] = [
        QrColor::BLACK,
        QrColor::WHITE,
        QrColor::ACCENT,
        QrColor::rgb(0xbf, 0x88, 0xf3),
        QrColor::rgb(0x8a, 0x2b, 0xe2),
        QrColor::rgb(0x00, 0x80, 0x00),
    ];

    pub fn background(&self) -> Result<QrColor, StudioError> {
        Ok(self.store.read(|s| s.params().background)?)
    }

    pub fn foreground(&self) -> Result<QrColor, StudioError> {
        Ok(self.store.read(|s| s.params().foreground)?)
    }

    pub fn set_background(&self, color: QrColor) -> Result<(), StudioError> {
        self.store
            .update(|store| store.edit(|params| params.background = color))?
    }

    pub fn set_foreground(&self, color: QrColor) -> Result<(), StudioError> {
        self.store
            .update(|store| store.edit(|params| params.foreground = color))?
    }

    pub fn set_background_hex(&self, hex: &str) -> Result<(), StudioError> {
        self.set_background(hex.parse()?)
    }

    pub fn set_foreground_hex(&self, hex: &str) -> Result<(), StudioError> {
        self.set_foreground(hex.parse()?)
    }

    pub fn swap(&self) -> Result<(), StudioError> {
        self.store.update(|store| {
            store.edit(|params| std::mem::swap(&mut params.background, &mut params.foreground))
        })?
    }
}

#[cfg(test)]
mod tests {
    use qrforge_states::StateCtx;

    use super::*;
    use crate::StudioConfig;

    fn edit_screen() -> (EditScreen, Shared<ArtifactStore>) {
        let mut ctx = StateCtx::new();
        let store = ctx.add_state(ArtifactStore::new(&StudioConfig::default()));
        (EditScreen::new(store.clone()), store)
    }

    #[test]
    fn test_starts_on_logo_tab() {
        let (mut screen, _) = edit_screen();
        assert_eq!(screen.active(), EditTab::Logo);
        screen.select(EditTab::Colors);
        assert_eq!(screen.active(), EditTab::Colors);
    }

    #[test]
    fn test_logo_size_is_clamped() {
        let (screen, _) = edit_screen();
        assert_eq!(screen.logo().set_logo_size(500).expect("edit"), 120);
        assert_eq!(screen.logo().logo_size().expect("read"), 120);
        assert_eq!(screen.logo().set_logo_size(30).expect("edit"), 30);
    }

    #[test]
    fn test_invalid_logo_bytes_are_rejected() {
        let (screen, _) = edit_screen();
        let err = screen.logo().set_logo(b"not an image").unwrap_err();
        assert!(matches!(err, StudioError::Logo(_)));
        assert!(!screen.logo().has_logo().expect("read"));
    }

    #[test]
    fn test_swap_exchanges_colors() {
        let (screen, _) = edit_screen();
        screen.colors().swap().expect("swap");
        assert_eq!(screen.colors().background().expect("read"), QrColor::BLACK);
        assert_eq!(screen.colors().foreground().expect("read"), QrColor::WHITE);
    }

    #[test]
    fn test_bad_hex_leaves_color_alone() {
        let (screen, _) = edit_screen();
        assert!(screen.colors().set_background_hex("nope").is_err());
        assert_eq!(screen.colors().background().expect("read"), QrColor::WHITE);
    }

    #[test]
    fn test_color_edit_rerenders_current_artifact() {
        let (screen, store) = edit_screen();
        store
            .update(|s| s.generate_text("colour me").map(|h| h.id()))
            .expect("writable")
            .expect("generates");
        let before = store
            .read(|s| s.render_handle().map(|h| h.id()))
            .expect("readable");

        screen.colors().set_foreground(QrColor::ACCENT).expect("edit");

        let after = store
            .read(|s| s.render_handle().map(|h| h.id()))
            .expect("readable");
        assert_ne!(before, after);
    }
}
