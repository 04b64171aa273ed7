//! Non-blocking messages shown at the bottom of the window.
//!
//! Every failed action ends up here instead of in a modal alert.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, Utc};
use egui::{Color32, RichText};
use qrforge_business::{ErrorKind, StudioError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Notices {
    items: VecDeque<Notice>,
}

impl Notices {
    /// How long a notice stays visible.
    pub const TTL: Duration = Duration::from_secs(4);
    const MAX: usize = 3;

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message.into());
    }

    pub fn error(&mut self, err: &StudioError) {
        let message = match err.kind() {
            ErrorKind::Validation | ErrorKind::Permission => err.to_string(),
            ErrorKind::Platform => format!("Could not complete the action: {err}"),
            ErrorKind::Decode => format!("No QR code found: {err}"),
            ErrorKind::Internal => format!("Something went wrong: {err}"),
        };
        self.push(NoticeLevel::Error, message);
    }

    /// Unwraps `result`, posting an error notice on failure.
    pub fn report<T>(&mut self, result: Result<T, StudioError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("Action failed: {err}");
                self.error(&err);
                None
            }
        }
    }

    pub fn expire(&mut self, now: DateTime<Utc>) {
        self.items.retain(|notice| {
            (now - notice.posted_at)
                .to_std()
                .is_ok_and(|age| age < Self::TTL)
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, level: NoticeLevel, message: String) {
        if self.items.len() == Self::MAX {
            self.items.pop_front();
        }
        self.items.push_back(Notice {
            level,
            message,
            posted_at: Utc::now(),
        });
    }
}

pub fn notices_panel(ctx: &egui::Context, notices: &Notices) {
    if notices.is_empty() {
        return;
    }
    egui::TopBottomPanel::bottom("notices").show(ctx, |ui| {
        for notice in notices.iter() {
            let color = match notice.level {
                NoticeLevel::Info => Color32::from_rgb(34, 139, 34),
                NoticeLevel::Error => Color32::RED,
            };
            ui.label(RichText::new(&notice.message).color(color));
        }
    });
}
