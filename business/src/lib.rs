//! QR generation, scanning, editing and sharing for the QrForge screens.
//!
//! Everything here is presentation-independent: screens are state machines
//! over one shared [`ArtifactStore`], device services are traits, and every
//! action returns a [`StudioError`] instead of alerting.

mod artifact;
mod color;
mod config;
mod decode;
mod device;
mod edit;
mod error;
mod input;
mod platform;
mod render;
mod request;
mod scanner;
mod share;
mod store;
mod studio;

pub use artifact::{QrArtifact, RenderHandle, RenderParams};
pub use color::QrColor;
pub use config::StudioConfig;
pub use decode::{GridDecoder, QrDecoder};
pub use device::{
    Asset, Capabilities, Capability, FileStore, GalleryPicker, LocalFileStore, PermissionStatus,
    PickOutcome, ShareOptions, ShareSheet,
};
pub use edit::{ColorsEditor, EditScreen, EditTab, LogoEditor};
pub use error::{ErrorKind, StudioError};
pub use input::{FieldId, InputKind, InputScreen};
pub use platform::Platform;
pub use render::{ModuleRenderer, QUIET_ZONE, QrRenderer};
pub use request::{BoundedText, GenerationRequest, TEXT_MAX_CHARS};
pub use scanner::{
    INDICATOR_MAX_OFFSET, INDICATOR_MAX_OPACITY, IndicatorFrame, QR_KIND, ScanIndicator,
    ScanResult, ScanSession, ScanSource, ScannerScreen, ScannerState, run_indicator,
};
pub use share::{ShareDestination, ShareFlow, ShareOutcome, ShareSession};
pub use store::ArtifactStore;
pub use studio::{Route, Studio};
