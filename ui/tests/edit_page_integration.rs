//! Edit page tabs over the shared QR code.

mod common;

use common::TestDevices;
use egui_kittest::Harness;
use kittest::Queryable;
use qrforge_business::{EditTab, FieldId, InputKind, QrColor};
use qrforge_ui::pages::edit_page;
use qrforge_ui::state::State;

fn editor_harness<'a>(devices: &TestDevices) -> Harness<'a, State> {
    let mut state = devices.state();
    let platform = state.studio.platform();
    let app = state.studio.input_mut(InputKind::App);
    app.set_field(FieldId::DefaultLink, "https://example.com");
    app.generate(platform).expect("generates");
    state.studio.open_editor(State::now()).expect("editor opens");

    Harness::new_ui_state(
        |ui, state: &mut State| {
            edit_page(state, ui);
        },
        state,
    )
}

#[test]
fn test_logo_tab_is_default() {
    let devices = TestDevices::new();
    let mut harness = editor_harness(&devices);
    harness.step();

    assert!(harness.query_by_label("Logo").is_some());
    assert!(harness.query_by_label("Colors").is_some());
    assert!(harness.query_by_label("Choose logo").is_some());
    assert_eq!(harness.state().studio.edit().active(), EditTab::Logo);
}

#[test]
fn test_swap_colors_rerenders_shared_qr() {
    let devices = TestDevices::new();
    let mut harness = editor_harness(&devices);
    harness.step();
    let before = harness.state().qr_texture.handle_id();

    harness.get_by_label("Colors").click();
    harness.run_steps(2);
    harness.get_by_label("Swap").click();
    harness.run_steps(2);

    let state = harness.state();
    let colors = state.studio.edit().colors();
    assert_eq!(colors.background().expect("read"), QrColor::BLACK);
    assert_eq!(colors.foreground().expect("read"), QrColor::WHITE);
    assert_ne!(state.qr_texture.handle_id(), before, "texture follows the new render");
    assert_eq!(state.hex_drafts.background, "#000000");
}
