use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::StudioError;

/// Opaque RGB colour used for QR foreground and background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QrColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl QrColor {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const ACCENT: Self = Self::rgb(0x72, 0x86, 0xd3);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 0xff])
    }
}

impl FromStr for QrColor {
    type Err = StudioError;

    /// Accepts `#rrggbb`, `rrggbb` and the short `#rgb` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StudioError::InvalidColor(s.to_owned());
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |part: &str| u8::from_str_radix(part, 16).map_err(|_parse| invalid());

        match hex.len() {
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 0x11);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for QrColor {
    type Error = StudioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QrColor> for String {
    fn from(color: QrColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for QrColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_long_and_short_forms() {
        assert_eq!("#7286d3".parse::<QrColor>().ok(), Some(QrColor::ACCENT));
        assert_eq!("FFFFFF".parse::<QrColor>().ok(), Some(QrColor::WHITE));
        assert_eq!("#000".parse::<QrColor>().ok(), Some(QrColor::BLACK));
        assert_eq!(
            "#f0a".parse::<QrColor>().ok(),
            Some(QrColor::rgb(0xff, 0x00, 0xaa))
        );
    }

    #[test]
    fn test_rejects_garbage() {
        for input in ["", "#12345", "#gggggg", "blueviolet", "#ééé"] {
            let err = input.parse::<QrColor>().unwrap_err();
            assert!(
                matches!(err, StudioError::InvalidColor(_)),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_repeated_hash_and_sign_prefixes() {
        for input in ["##fff", "##7286d3", "#+1+2+3", "+fffff"] {
            assert!(input.parse::<QrColor>().is_err(), "{input} should be rejected");
        }
    }

    #[test]
    fn test_displays_as_lower_hex() {
        assert_eq!(QrColor::rgb(0xAB, 0x01, 0xff).to_string(), "#ab01ff");
    }

    #[test]
    fn test_rgba_is_opaque() {
        assert_eq!(QrColor::ACCENT.to_rgba(), Rgba([0x72, 0x86, 0xd3, 0xff]));
    }
}
