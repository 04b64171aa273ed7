//! User input turned into a single QR payload.

use crate::{Platform, StudioError};

/// Maximum number of characters accepted by the text screen.
pub const TEXT_MAX_CHARS: usize = 300;

/// One generation attempt, tagged by input domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    /// Per-platform store links with a fallback for everything else.
    AppLinks {
        android: String,
        ios: String,
        default: String,
    },
    Text {
        body: String,
    },
    YoutubeLink {
        url: String,
    },
    Link {
        url: String,
    },
}

impl GenerationRequest {
    pub fn variant(&self) -> &'static str {
        match self {
            Self::AppLinks { .. } => "app-links",
            Self::Text { .. } => "text",
            Self::YoutubeLink { .. } => "youtube",
            Self::Link { .. } => "link",
        }
    }

    /// Checks every field the variant requires.
    ///
    /// App links only require the default link; the platform links are
    /// optional overrides. Whitespace-only input counts as empty.
    pub fn validate(&self) -> Result<(), StudioError> {
        match self {
            Self::AppLinks { default, .. } => required("Default-app-link", default),
            Self::Text { body } => {
                required("Text", body)?;
                if body.chars().count() > TEXT_MAX_CHARS {
                    return Err(StudioError::TooLong {
                        field: "Text",
                        max: TEXT_MAX_CHARS,
                    });
                }
                Ok(())
            }
            Self::YoutubeLink { url } => required("YouTube link", url),
            Self::Link { url } => required("Link", url),
        }
    }

    /// Validates and picks the one payload string to encode.
    ///
    /// For app links: the iOS link on iOS when present, else the Android link
    /// on Android when present, else the default link.
    pub fn resolve(&self, platform: Platform) -> Result<String, StudioError> {
        self.validate()?;
        let payload = match self {
            Self::AppLinks {
                android,
                ios,
                default,
            } => match platform {
                Platform::Ios if present(ios) => ios,
                Platform::Android if present(android) => android,
                _ => default,
            },
            Self::Text { body } => body,
            Self::YoutubeLink { url } | Self::Link { url } => url,
        };
        Ok(payload.clone())
    }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn required(field: &'static str, value: &str) -> Result<(), StudioError> {
    if present(value) {
        Ok(())
    } else {
        Err(StudioError::MissingField { field })
    }
}

/// Text that can never grow past `max` characters.
///
/// Input beyond the limit is cut at the boundary rather than rejected later,
/// so `len() <= max()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedText {
    value: String,
    max: usize,
}

impl BoundedText {
    pub fn new(max: usize) -> Self {
        Self {
            value: String::new(),
            max,
        }
    }

    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Replaces the content, keeping at most `max` characters.
    ///
    /// Returns `true` when the input had to be truncated.
    pub fn set(&mut self, input: &str) -> bool {
        self.value = input.chars().take(self.max).collect();
        self.value.len() < input.len()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Length in characters, not bytes.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
