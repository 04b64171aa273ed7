//! Share modal and the platform-specific share sequence.

use std::cell::Cell;
use std::path::PathBuf;

use qrforge_states::Shared;

use crate::{ArtifactStore, FileStore, Platform, ShareOptions, ShareSheet, StudioError};

/// Targets listed in the share modal. All of them open the platform share
/// sheet; the destination only labels the request in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareDestination {
    Twitter,
    Facebook,
    Whatsapp,
    Instagram,
    System,
}

impl ShareDestination {
    pub const ALL: [Self; 5] = [
        Self::Twitter,
        Self::Facebook,
        Self::Whatsapp,
        Self::Instagram,
        Self::System,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::Whatsapp => "WhatsApp",
            Self::Instagram => "Instagram",
            Self::System => "More…",
        }
    }
}

/// Modal visibility and the re-entrancy guard for the file-based share path.
#[derive(Debug, Default)]
pub struct ShareSession {
    visible: Cell<bool>,
    in_progress: Cell<bool>,
}

impl ShareSession {
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress.get()
    }
}

/// Clears `in_progress` when dropped, whichever way the share ends.
struct InProgressGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> InProgressGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Result<Self, StudioError> {
        if flag.replace(true) {
            return Err(StudioError::ShareInProgress);
        }
        Ok(Self { flag })
    }
}

impl Drop for InProgressGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The artifact was written to this path and the path was shared.
    File(PathBuf),
    /// The in-memory image with this handle id was shared.
    Image { handle_id: u64 },
}

#[derive(Debug)]
pub struct ShareFlow {
    store: Shared<ArtifactStore>,
    session: ShareSession,
    options: ShareOptions,
}

impl ShareFlow {
    pub fn new(store: Shared<ArtifactStore>) -> Self {
        Self {
            store,
            session: ShareSession::default(),
            options: ShareOptions::default(),
        }
    }

    pub fn session(&self) -> &ShareSession {
        &self.session
    }

    pub fn options(&self) -> &ShareOptions {
        &self.options
    }

    pub fn open(&self) {
        self.session.visible.set(true);
    }

    pub fn close(&self) {
        self.session.visible.set(false);
    }

    /// Shares the current artifact.
    ///
    /// On platforms that need a file, the image is written first and a second
    /// call made while that runs fails with [`StudioError::ShareInProgress`]
    /// without touching the modal. Every other outcome, success or failure,
    /// closes the modal and clears the guard.
    pub async fn share(
        &self,
        destination: ShareDestination,
        platform: Platform,
        files: &dyn FileStore,
        sheet: &dyn ShareSheet,
    ) -> Result<ShareOutcome, StudioError> {
        let guard = if platform.requires_file_share() {
            Some(InProgressGuard::acquire(&self.session.in_progress)?)
        } else {
            None
        };

        log::info!("Sharing QR code via {} on {platform}", destination.label());
        let result = self.run(platform, files, sheet).await;

        drop(guard);
        self.close();
        match &result {
            Ok(outcome) => log::info!("Share finished: {outcome:?}"),
            Err(err) => log::warn!("Share failed: {err}"),
        }
        result
    }

    async fn run(
        &self,
        platform: Platform,
        files: &dyn FileStore,
        sheet: &dyn ShareSheet,
    ) -> Result<ShareOutcome, StudioError> {
        if platform.requires_file_share() {
            let path = self.store.read(|store| store.save(files))??;
            sheet.share_file(&path, &self.options).await?;
            Ok(ShareOutcome::File(path))
        } else {
            let handle = self
                .store
                .read(|store| store.render_handle().cloned())?
                .ok_or(StudioError::NoArtifact)?;
            sheet.share_image(&handle, &self.options).await?;
            Ok(ShareOutcome::Image {
                handle_id: handle.id(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_rejects_second_holder_and_resets_on_drop() {
        let flag = Cell::new(false);
        let first = InProgressGuard::acquire(&flag).expect("free");
        assert!(matches!(
            InProgressGuard::acquire(&flag),
            Err(StudioError::ShareInProgress)
        ));
        drop(first);
        assert!(!flag.get());
        assert!(InProgressGuard::acquire(&flag).is_ok());
    }

    #[test]
    fn test_destinations_have_labels() {
        let labels: Vec<&str> = ShareDestination::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels.len(), 5);
        assert!(labels.contains(&"Twitter"));
    }
}
