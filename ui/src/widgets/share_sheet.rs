//! "Share Using" window listing the share destinations.

use egui::{RichText, Vec2};
use qrforge_business::{ShareDestination, ShareFlow};

/// Shows the share window while the session is visible.
///
/// Returns the destination the user picked this frame, if any. Closing the
/// window closes the session.
pub fn share_sheet(ctx: &egui::Context, flow: &ShareFlow) -> Option<ShareDestination> {
    if !flow.session().is_visible() {
        return None;
    }

    let mut open = true;
    let mut picked = None;
    egui::Window::new("Share Using")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_BOTTOM, Vec2::new(0.0, -16.0))
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                for destination in ShareDestination::ALL {
                    let enabled = !flow.session().is_in_progress();
                    if ui
                        .add_enabled(enabled, egui::Button::new(destination.label()))
                        .clicked()
                    {
                        picked = Some(destination);
                    }
                }
            });
            if flow.session().is_in_progress() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Sharing…").weak());
                });
            }
        });

    if !open {
        flow.close();
    }
    picked
}
