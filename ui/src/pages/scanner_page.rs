//! Scanner page: permission status, viewfinder, gallery scanning.

use egui::{Response, RichText, Ui};
use qrforge_business::{ScanResult, ScannerState};

use crate::state::State;
use crate::utils::drop_handler::dropped_frame;
use crate::widgets::scan_indicator;

pub fn scanner_page(state: &mut State, ui: &mut Ui) -> Response {
    let now = State::now();
    if !state.scanner_mounted {
        state.scanner_mounted = true;
        pollster::block_on(
            state
                .studio
                .scanner_mut()
                .mount(state.devices.capabilities.as_ref(), now),
        );
    }
    let indicator = state.studio.scanner().indicator();
    state
        .indicator_driver
        .sync(indicator.handle(), indicator.period(), ui.ctx());

    ui.vertical_centered(|ui| {
        ui.heading("Scan Any Qr Code");
        ui.add_space(8.0);

        match state.studio.scanner().state().clone() {
            ScannerState::RequestingPermissions => {
                ui.label("Requesting camera and gallery permissions...");
            }
            ScannerState::PermissionsDenied => {
                ui.label("No access to camera or gallery");
            }
            ScannerState::Ready => {
                scan_indicator(ui, state.studio.scanner().indicator().frame(now));
                ui.label(RichText::new("Drop an image here to scan it").weak());
                if let Some((name, frame)) = dropped_frame(ui.ctx()) {
                    log::debug!("Scanning dropped file {name}");
                    let scanned = state
                        .studio
                        .scanner_mut()
                        .decode_frame(&frame, &state.decoder)
                        .cloned();
                    match scanned {
                        Some(result) => announce(state, &result),
                        None => state.notices.info(format!("No QR code found in {name}")),
                    }
                }
                gallery_button(state, ui);
            }
            ScannerState::Scanned(result) => {
                scan_indicator(ui, None);
                ui.label(RichText::new("Scan complete!").strong());
                ui.label(result.to_string());
                if ui.button("Scan Again").clicked() {
                    state.studio.scanner_mut().scan_again(now);
                }
                gallery_button(state, ui);
            }
        }
    })
    .response
}

fn gallery_button(state: &mut State, ui: &mut Ui) {
    if !ui.button("Scan from Gallery").clicked() {
        return;
    }
    let scanned = pollster::block_on(
        state
            .studio
            .scanner_mut()
            .scan_from_gallery(state.devices.picker.as_ref(), &state.decoder),
    );
    if let Some(Some(result)) = state.notices.report(scanned) {
        announce(state, &result);
    }
}

fn announce(state: &mut State, result: &ScanResult) {
    state.notices.info(result.to_string());
}
