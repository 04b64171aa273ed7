//! Input screens: collect fields, turn them into a request, generate.
//!
//! Every screen follows the same lifecycle:
//! - `on_enter` runs once per focus transition and clears both the shared
//!   artifact and the local fields, so nothing from a previous visit leaks.
//! - `generate` validates, resolves one payload and replaces the artifact.
//! - `start_refresh` clears the fields and shows a refreshing indicator for a
//!   fixed delay; `tick` ends it. No I/O happens.

use std::time::Duration;

use chrono::{DateTime, Utc};
use qrforge_states::Shared;

use crate::request::BoundedText;
use crate::{ArtifactStore, GenerationRequest, Platform, RenderHandle, StudioConfig, StudioError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    App,
    Text,
    Youtube,
    Link,
}

impl InputKind {
    pub const ALL: [Self; 4] = [Self::App, Self::Text, Self::Youtube, Self::Link];

    /// Position in [`InputKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::App => 0,
            Self::Text => 1,
            Self::Youtube => 2,
            Self::Link => 3,
        }
    }

    pub fn fields(self) -> &'static [FieldId] {
        match self {
            Self::App => &[FieldId::AndroidLink, FieldId::IosLink, FieldId::DefaultLink],
            Self::Text => &[FieldId::Body],
            Self::Youtube => &[FieldId::YoutubeUrl],
            Self::Link => &[FieldId::Url],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    AndroidLink,
    IosLink,
    DefaultLink,
    Body,
    YoutubeUrl,
    Url,
}

impl FieldId {
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::AndroidLink => "Android-app-link",
            Self::IosLink => "iOS-app-link",
            Self::DefaultLink => "Default-app-link",
            Self::Body => "e.g Enter-Text",
            Self::YoutubeUrl => "e.g https://www.youtube.com/channel/UClZgtDpxTuN1t53m9zZs50Q",
            Self::Url => "e.g https://example.com",
        }
    }
}

#[derive(Debug)]
pub struct InputScreen {
    kind: InputKind,
    store: Shared<ArtifactStore>,
    fields: Vec<(FieldId, BoundedText)>,
    focused: bool,
    refresh_delay: Duration,
    refresh_started: Option<DateTime<Utc>>,
}

impl InputScreen {
    pub fn new(kind: InputKind, store: Shared<ArtifactStore>, config: &StudioConfig) -> Self {
        let fields = kind
            .fields()
            .iter()
            .map(|&id| {
                let text = match id {
                    FieldId::Body => BoundedText::new(config.text_max_chars),
                    _ => BoundedText::unbounded(),
                };
                (id, text)
            })
            .collect();

        Self {
            kind,
            store,
            fields,
            focused: false,
            refresh_delay: config.refresh_delay(),
            refresh_started: None,
        }
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn store(&self) -> &Shared<ArtifactStore> {
        &self.store
    }

    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.fields.iter().map(|(id, text)| (*id, text.as_str()))
    }

    pub fn field(&self, id: FieldId) -> Option<&str> {
        self.slot(id).map(BoundedText::as_str)
    }

    /// Sets a field, truncating at its limit.
    ///
    /// Returns `false` if the field does not belong to this screen.
    pub fn set_field(&mut self, id: FieldId, value: &str) -> bool {
        let Some((_, text)) = self.fields.iter_mut().find(|(field, _)| *field == id) else {
            log::warn!("{:?} screen has no {id:?} field", self.kind);
            return false;
        };
        if text.set(value) {
            log::debug!("{id:?} input truncated to {} characters", text.max());
        }
        true
    }

    /// `(current, maximum)` character count for screens with a limit.
    pub fn char_count(&self) -> Option<(usize, usize)> {
        self.slot(FieldId::Body).map(|t| (t.len(), t.max()))
    }

    pub fn request(&self) -> GenerationRequest {
        let value = |id| self.field(id).unwrap_or_default().to_owned();
        match self.kind {
            InputKind::App => GenerationRequest::AppLinks {
                android: value(FieldId::AndroidLink),
                ios: value(FieldId::IosLink),
                default: value(FieldId::DefaultLink),
            },
            InputKind::Text => GenerationRequest::Text {
                body: value(FieldId::Body),
            },
            InputKind::Youtube => GenerationRequest::YoutubeLink {
                url: value(FieldId::YoutubeUrl),
            },
            InputKind::Link => GenerationRequest::Link {
                url: value(FieldId::Url),
            },
        }
    }

    /// Replaces the shared artifact with one built from the current fields.
    pub fn generate(&self, platform: Platform) -> Result<RenderHandle, StudioError> {
        let request = self.request();
        let handle = self
            .store
            .update(|store| store.generate(&request, platform).cloned())??;
        Ok(handle)
    }

    /// Focus gained. Clears the artifact and every field.
    ///
    /// Returns `Ok(false)` without touching anything when the screen already
    /// has focus, so re-renders never clear user input.
    pub fn on_enter(&mut self) -> Result<bool, StudioError> {
        if self.focused {
            return Ok(false);
        }
        self.store.update(ArtifactStore::clear)?;
        self.clear_fields();
        self.focused = true;
        log::debug!("{:?} screen focused, artifact cleared", self.kind);
        Ok(true)
    }

    pub fn on_leave(&mut self) {
        self.focused = false;
        self.refresh_started = None;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn clear_fields(&mut self) {
        for (_, text) in &mut self.fields {
            text.clear();
        }
    }

    /// Pull-to-refresh: fields clear now, the indicator stays for the delay.
    pub fn start_refresh(&mut self, now: DateTime<Utc>) {
        self.clear_fields();
        self.refresh_started = Some(now);
    }

    /// Advances the refresh indicator. Returns `true` when it just finished.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let Some(started) = self.refresh_started else {
            return false;
        };
        let elapsed = (now - started).to_std().unwrap_or(Duration::ZERO);
        if elapsed >= self.refresh_delay {
            self.refresh_started = None;
            true
        } else {
            false
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh_started.is_some()
    }

    fn slot(&self, id: FieldId) -> Option<&BoundedText> {
        self.fields
            .iter()
            .find(|(field, _)| *field == id)
            .map(|(_, text)| text)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use qrforge_states::StateCtx;

    use super::*;

    fn screen(kind: InputKind) -> InputScreen {
        let config = StudioConfig::default();
        let mut ctx = StateCtx::new();
        let store = ctx.add_state(ArtifactStore::new(&config));
        InputScreen::new(kind, store, &config)
    }

    #[test]
    fn test_app_screen_has_three_fields() {
        let screen = screen(InputKind::App);
        let ids: Vec<FieldId> = screen.fields().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![FieldId::AndroidLink, FieldId::IosLink, FieldId::DefaultLink]
        );
        assert!(screen.char_count().is_none());
    }

    #[test]
    fn test_foreign_field_is_refused() {
        let mut screen = screen(InputKind::Youtube);
        assert!(!screen.set_field(FieldId::Body, "nope"));
        assert!(screen.field(FieldId::Body).is_none());
    }

    #[test]
    fn test_text_counter_never_exceeds_limit() {
        let mut screen = screen(InputKind::Text);
        assert_eq!(screen.char_count(), Some((0, 300)));

        screen.set_field(FieldId::Body, &"a".repeat(450));
        assert_eq!(screen.char_count(), Some((300, 300)));

        screen.set_field(FieldId::Body, "short");
        assert_eq!(screen.char_count(), Some((5, 300)));
    }

    #[test]
    fn test_app_generation_uses_platform_link() {
        let mut screen = screen(InputKind::App);
        screen.set_field(FieldId::AndroidLink, "A");
        screen.set_field(FieldId::IosLink, "I");
        screen.set_field(FieldId::DefaultLink, "D");

        screen.generate(Platform::Android).expect("generates");
        let payload = screen.store().read(|s| s.payload().to_owned()).expect("readable");
        assert_eq!(payload, "A");
    }

    #[test]
    fn test_on_enter_fires_once_per_focus() {
        let mut screen = screen(InputKind::Link);
        assert!(screen.on_enter().expect("enter"));

        screen.set_field(FieldId::Url, "https://example.com");
        screen.generate(Platform::Desktop).expect("generates");

        // Still focused: typing and re-rendering must not wipe anything.
        assert!(!screen.on_enter().expect("enter"));
        assert_eq!(screen.field(FieldId::Url), Some("https://example.com"));

        screen.on_leave();
        assert!(screen.on_enter().expect("enter"));
        assert_eq!(screen.field(FieldId::Url), Some(""));
        assert!(!screen.store().read(ArtifactStore::has_artifact).expect("readable"));
    }

    #[test]
    fn test_refresh_clears_fields_and_ends_after_delay() {
        let mut screen = screen(InputKind::Youtube);
        screen.set_field(FieldId::YoutubeUrl, "https://youtu.be/abc");
        let now = Utc::now();

        screen.start_refresh(now);
        assert_eq!(screen.field(FieldId::YoutubeUrl), Some(""));
        assert!(screen.is_refreshing());

        assert!(!screen.tick(now + TimeDelta::milliseconds(1999)));
        assert!(screen.is_refreshing());
        assert!(screen.tick(now + TimeDelta::milliseconds(2000)));
        assert!(!screen.is_refreshing());
        assert!(!screen.tick(now + TimeDelta::milliseconds(4000)));
    }

    #[test]
    fn test_clock_going_backwards_keeps_refreshing() {
        let mut screen = screen(InputKind::Text);
        let now = Utc::now();
        screen.start_refresh(now);
        assert!(!screen.tick(now - TimeDelta::seconds(5)));
        assert!(screen.is_refreshing());
    }
}
