//! Conversions between QR colours and egui colours.

use egui::Color32;
use qrforge_business::QrColor;

pub fn to_color32(color: QrColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

pub fn from_color32(color: Color32) -> QrColor {
    QrColor::rgb(color.r(), color.g(), color.b())
}

/// Colour of the accent used for buttons and the share icon.
pub const ACCENT: Color32 = Color32::from_rgb(0x72, 0x86, 0xd3);
