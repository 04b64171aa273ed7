//! Scan frame overlay drawn from an [`IndicatorFrame`].

use egui::{Rect, Stroke, StrokeKind, Ui, Vec2};
use qrforge_business::IndicatorFrame;

use crate::utils::colors::ACCENT;

const VIEWFINDER: Vec2 = Vec2::new(240.0, 240.0);

/// Draws the viewfinder and, while scanning, the sliding line.
pub fn scan_indicator(ui: &mut Ui, frame: Option<IndicatorFrame>) {
    let (rect, _) = ui.allocate_exact_size(VIEWFINDER, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_stroke(rect, 8.0, Stroke::new(2.0, ACCENT), StrokeKind::Inside);

    let Some(frame) = frame else {
        return;
    };
    let top = rect.top() + rect.height() / 4.0 + frame.offset;
    let line = Rect::from_min_size(
        egui::pos2(rect.left() + 16.0, top),
        Vec2::new(rect.width() - 32.0, 4.0),
    );
    painter.rect_filled(line, 2.0, ACCENT.gamma_multiply(frame.opacity));
    ui.ctx().request_repaint();
}

