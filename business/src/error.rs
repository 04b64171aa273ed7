//! Error type shared by every QrForge action.
//!
//! Actions return `Result<_, StudioError>` and never alert on their own; the
//! presentation layer decides how an error is shown via [`StudioError::kind`].

use thiserror::Error;

use crate::device::Capability;

/// Coarse classification used by the UI to pick how a failure is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input is missing or out of bounds. Nothing was mutated.
    Validation,
    /// A device capability was refused. Terminal for the session.
    Permission,
    /// The platform share/save mechanism failed.
    Platform,
    /// An image did not contain a readable QR code.
    Decode,
    /// Rendering, configuration or state bookkeeping failed.
    Internal,
}

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Please fill the {field} field to generate a QR code")]
    MissingField { field: &'static str },
    #[error("The {field} field accepts at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("No access to {0}")]
    PermissionDenied(Capability),
    #[error("Sharing is already in progress")]
    ShareInProgress,
    #[error("There is no QR code yet")]
    NoArtifact,
    #[error("Failed to render QR code: {0}")]
    Render(String),
    #[error("Failed to decode QR code: {0}")]
    Decode(String),
    #[error("Failed to share QR code: {0}")]
    Share(String),
    #[error("Failed to save QR code: {0}")]
    Save(String),
    #[error("Invalid color `{0}`, expected #rrggbb")]
    InvalidColor(String),
    #[error("Failed to load logo: {0}")]
    Logo(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    State(#[from] qrforge_states::Error),
}

impl StudioError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. }
            | Self::TooLong { .. }
            | Self::InvalidColor(_)
            | Self::NoArtifact
            | Self::ShareInProgress => ErrorKind::Validation,
            Self::PermissionDenied(_) => ErrorKind::Permission,
            Self::Share(_) | Self::Save(_) => ErrorKind::Platform,
            Self::Decode(_) | Self::Logo(_) => ErrorKind::Decode,
            Self::Render(_) | Self::Config(_) | Self::State(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_the_field() {
        let err = StudioError::MissingField {
            field: "Default-app-link",
        };
        assert_eq!(
            err.to_string(),
            "Please fill the Default-app-link field to generate a QR code"
        );
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_platform_failures_keep_their_description() {
        let err = StudioError::Share("sheet dismissed".to_owned());
        assert_eq!(err.to_string(), "Failed to share QR code: sheet dismissed");
        assert_eq!(err.kind(), ErrorKind::Platform);
    }

    #[test]
    fn test_permission_denial_kind() {
        let err = StudioError::PermissionDenied(Capability::Camera);
        assert_eq!(err.to_string(), "No access to camera");
        assert_eq!(err.kind(), ErrorKind::Permission);
    }
}
