//! Studio configuration read from `QRFORGE_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::request::TEXT_MAX_CHARS;
use crate::{QrColor, StudioError};

#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub render_size: u32,
    pub logo_size: u32,
    pub text_max_chars: usize,
    pub refresh_delay_ms: u64,
    pub indicator_period_ms: u64,
    /// File name used when the artifact is persisted for saving or sharing.
    pub share_file_name: String,
    pub documents_dir: Option<PathBuf>,
    pub background: QrColor,
    pub foreground: QrColor,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            render_size: 240,
            logo_size: 100,
            text_max_chars: TEXT_MAX_CHARS,
            refresh_delay_ms: 2000,
            indicator_period_ms: 2000,
            share_file_name: "QRCode.png".to_owned(),
            documents_dir: None,
            background: QrColor::WHITE,
            foreground: QrColor::BLACK,
        }
    }
}

/// Every field optional; missing ones fall back to [`StudioConfig::default`].
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    render_size: Option<u32>,
    logo_size: Option<u32>,
    text_max_chars: Option<usize>,
    refresh_delay_ms: Option<u64>,
    indicator_period_ms: Option<u64>,
    share_file_name: Option<String>,
    documents_dir: Option<PathBuf>,
    background: Option<String>,
    foreground: Option<String>,
}

impl StudioConfig {
    pub const ENV_PREFIX: &'static str = "QRFORGE_";

    /// Reads the process environment.
    pub fn from_env() -> Result<Self, StudioError> {
        log::info!("Loading configuration from {}* variables", Self::ENV_PREFIX);
        Self::from_vars(std::env::vars())
    }

    /// Builds a config from `(KEY, value)` pairs; keys without the prefix are ignored.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Result<Self, StudioError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let stripped: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(Self::ENV_PREFIX)
                    .map(|k| (k.to_owned(), value.as_ref().to_owned()))
            })
            .collect();
        let raw: RawConfig =
            serde_env::from_iter(stripped).map_err(|e| StudioError::Config(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, StudioError> {
        let defaults = Self::default();
        let color = |value: Option<String>, fallback: QrColor| {
            value.map_or(Ok(fallback), |v| v.parse::<QrColor>())
        };

        let config = Self {
            render_size: raw.render_size.unwrap_or(defaults.render_size),
            logo_size: raw.logo_size.unwrap_or(defaults.logo_size),
            text_max_chars: raw.text_max_chars.unwrap_or(defaults.text_max_chars),
            refresh_delay_ms: raw.refresh_delay_ms.unwrap_or(defaults.refresh_delay_ms),
            indicator_period_ms: raw
                .indicator_period_ms
                .unwrap_or(defaults.indicator_period_ms),
            share_file_name: raw.share_file_name.unwrap_or(defaults.share_file_name),
            documents_dir: raw.documents_dir,
            background: color(raw.background, defaults.background)?,
            foreground: color(raw.foreground, defaults.foreground)?,
        };

        if config.render_size == 0 {
            return Err(StudioError::Config("render_size must be positive".to_owned()));
        }
        if config.indicator_period_ms == 0 {
            return Err(StudioError::Config(
                "indicator_period_ms must be positive".to_owned(),
            ));
        }
        if config.text_max_chars == 0 || config.text_max_chars > TEXT_MAX_CHARS {
            return Err(StudioError::Config(format!(
                "text_max_chars must be between 1 and {TEXT_MAX_CHARS}, got {}",
                config.text_max_chars
            )));
        }
        if config.share_file_name.trim().is_empty() {
            return Err(StudioError::Config("share_file_name is empty".to_owned()));
        }
        Ok(config)
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    pub fn indicator_period(&self) -> Duration {
        Duration::from_millis(self.indicator_period_ms)
    }

    /// Where saved and shared images go.
    pub fn documents_dir(&self) -> PathBuf {
        self.documents_dir.clone().unwrap_or_else(|| {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("qrforge-documents")
        })
    }
}
