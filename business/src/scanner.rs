//! Scanner screen: permissions, camera/gallery decoding and the scan indicator.
//!
//! ```text
//! RequestingPermissions ──denied──▶ PermissionsDenied (terminal)
//!          │ granted
//!          ▼
//!        Ready ──decode──▶ Scanned(result) ──scan_again──▶ Ready
//! ```

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use image::DynamicImage;
use qrforge_states::{TaskHandle, TaskSlot};
use tokio_util::sync::CancellationToken;

use crate::{Capabilities, Capability, GalleryPicker, PickOutcome, QrDecoder, StudioError};

/// Symbol type reported for codes decoded by QrForge itself.
pub const QR_KIND: &str = "qr";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanSource {
    Camera,
    Gallery { uri: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub kind: String,
    pub data: String,
    pub source: ScanSource,
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bar code with type {} and data {} has been scanned!",
            self.kind, self.data
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannerState {
    RequestingPermissions,
    PermissionsDenied,
    Ready,
    Scanned(ScanResult),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSession {
    pub camera_granted: bool,
    pub gallery_granted: bool,
    pub scanned: bool,
    pub last_decoded_value: Option<String>,
}

#[derive(Debug)]
pub struct ScannerScreen {
    state: ScannerState,
    session: ScanSession,
    indicator: ScanIndicator,
}

impl ScannerScreen {
    pub fn new(indicator_period: Duration) -> Self {
        Self {
            state: ScannerState::RequestingPermissions,
            session: ScanSession::default(),
            indicator: ScanIndicator::new(indicator_period),
        }
    }

    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    pub fn indicator(&self) -> &ScanIndicator {
        &self.indicator
    }

    /// Requests camera and gallery access. Only the first call prompts;
    /// the answers hold for the rest of the session.
    pub async fn mount(
        &mut self,
        capabilities: &dyn Capabilities,
        now: DateTime<Utc>,
    ) -> &ScannerState {
        if self.state != ScannerState::RequestingPermissions {
            return &self.state;
        }

        self.session.camera_granted = capabilities.request(Capability::Camera).await.is_granted();
        self.session.gallery_granted = capabilities.request(Capability::Gallery).await.is_granted();
        log::info!(
            "Scanner permissions: camera={}, gallery={}",
            self.session.camera_granted,
            self.session.gallery_granted
        );

        if self.session.camera_granted && self.session.gallery_granted {
            self.state = ScannerState::Ready;
            self.indicator.start(now);
        } else {
            self.state = ScannerState::PermissionsDenied;
        }
        &self.state
    }

    /// Screen focused again after navigation. Restarts the indicator if ready.
    pub fn on_enter(&mut self, now: DateTime<Utc>) {
        if self.state == ScannerState::Ready && !self.indicator.is_running() {
            self.indicator.start(now);
        }
    }

    pub fn on_leave(&mut self) {
        self.indicator.stop();
    }

    /// A decode event from the live camera stream.
    ///
    /// Ignored unless the scanner is `Ready`; the first event wins.
    pub fn on_code_scanned(&mut self, kind: &str, data: &str) -> Option<&ScanResult> {
        if self.state != ScannerState::Ready {
            return None;
        }
        self.enter_scanned(ScanResult {
            kind: kind.to_owned(),
            data: data.to_owned(),
            source: ScanSource::Camera,
        })
    }

    /// Runs the decoder on one camera frame. Frames without a code are not an error.
    pub fn decode_frame(
        &mut self,
        frame: &DynamicImage,
        decoder: &dyn QrDecoder,
    ) -> Option<&ScanResult> {
        if self.state != ScannerState::Ready {
            return None;
        }
        match decoder.decode(frame) {
            Ok(data) => self.on_code_scanned(QR_KIND, &data),
            Err(err) => {
                log::trace!("No code in camera frame: {err}");
                None
            }
        }
    }

    /// Lets the user pick an image and decodes it with the camera decoder.
    ///
    /// A cancelled pick returns `Ok(None)` and changes nothing. An image without
    /// a readable code is an error and also changes nothing.
    pub async fn scan_from_gallery(
        &mut self,
        picker: &dyn GalleryPicker,
        decoder: &dyn QrDecoder,
    ) -> Result<Option<ScanResult>, StudioError> {
        match self.state {
            ScannerState::Ready | ScannerState::Scanned(_) => {}
            ScannerState::RequestingPermissions | ScannerState::PermissionsDenied => {
                return Err(StudioError::PermissionDenied(Capability::Gallery));
            }
        }

        let asset = match picker.pick_image().await? {
            PickOutcome::Cancelled => {
                log::debug!("Gallery pick cancelled");
                return Ok(None);
            }
            PickOutcome::Selected(asset) => asset,
        };

        let image = image::load_from_memory(&asset.bytes)
            .map_err(|e| StudioError::Decode(format!("{}: {e}", asset.uri)))?;
        let data = decoder.decode(&image)?;

        Ok(self
            .enter_scanned(ScanResult {
                kind: QR_KIND.to_owned(),
                data,
                source: ScanSource::Gallery { uri: asset.uri },
            })
            .cloned())
    }

    /// "Scan again": back to `Ready` with the indicator running.
    pub fn scan_again(&mut self, now: DateTime<Utc>) {
        if let ScannerState::Scanned(_) = self.state {
            self.state = ScannerState::Ready;
            self.session.scanned = false;
            self.indicator.start(now);
            log::debug!("Scanner ready again");
        }
    }

    fn enter_scanned(&mut self, result: ScanResult) -> Option<&ScanResult> {
        log::info!("Scanned {} code from {:?}", result.kind, result.source);
        self.indicator.stop();
        self.session.scanned = true;
        self.session.last_decoded_value = Some(result.data.clone());
        self.state = ScannerState::Scanned(result);
        match &self.state {
            ScannerState::Scanned(result) => Some(result),
            _ => None,
        }
    }
}

/// Peak opacity of the scan frame overlay.
pub const INDICATOR_MAX_OPACITY: f32 = 0.6;
/// Distance in points the overlay slides down over one cycle.
pub const INDICATOR_MAX_OFFSET: f32 = 50.0;

/// One frame of the scanning animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorFrame {
    pub opacity: f32,
    pub offset: f32,
}

impl IndicatorFrame {
    fn at(progress: f32) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        Self {
            opacity: progress * INDICATOR_MAX_OPACITY,
            offset: progress * INDICATOR_MAX_OFFSET,
        }
    }
}

/// Linear, repeating scan animation tied to a cancellable task.
///
/// Running only while the scanner is `Ready`; a successful scan or leaving
/// the screen cancels it so no further cycle is scheduled.
#[derive(Debug)]
pub struct ScanIndicator {
    period: Duration,
    slot: TaskSlot,
    started_at: Option<DateTime<Utc>>,
}

impl ScanIndicator {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            slot: TaskSlot::default(),
            started_at: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn start(&mut self, now: DateTime<Utc>) -> TaskHandle {
        self.started_at = Some(now);
        log::debug!("Scan indicator started");
        self.slot.start::<Self>()
    }

    pub fn stop(&mut self) {
        self.started_at = None;
        self.slot.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.slot.is_active()
    }

    pub fn handle(&self) -> Option<&TaskHandle> {
        self.slot.current()
    }

    /// Animation state at `now`, or `None` once stopped.
    pub fn frame(&self, now: DateTime<Utc>) -> Option<IndicatorFrame> {
        let started = self.started_at.filter(|_| self.is_running())?;
        let elapsed = (now - started).to_std().unwrap_or(Duration::ZERO);
        let period = self.period.as_secs_f32();
        if period <= 0.0 {
            return Some(IndicatorFrame::at(1.0));
        }
        Some(IndicatorFrame::at(elapsed.as_secs_f32() % period / period))
    }
}

/// Drives the indicator cycles until `token` is cancelled.
///
/// `on_cycle` receives the number of completed cycles. Returns the total.
pub async fn run_indicator(
    token: CancellationToken,
    period: Duration,
    mut on_cycle: impl FnMut(u64),
) -> u64 {
    let mut cycles = 0;
    loop {
        tokio::select! {
            () = token.cancelled() => {
                log::debug!("Scan indicator loop stopped after {cycles} cycles");
                return cycles;
            }
            () = tokio::time::sleep(period) => {
                cycles += 1;
                on_cycle(cycles);
            }
        }
    }
}
