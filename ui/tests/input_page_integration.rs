//! Generator page driven through egui_kittest.

mod common;

use common::{TestDevices, payload};
use egui_kittest::Harness;
use kittest::Queryable;
use qrforge_business::{ArtifactStore, FieldId, InputKind, Route};
use qrforge_ui::pages::input_page;
use qrforge_ui::state::State;
use qrforge_ui::widgets::NoticeLevel;

fn harness<'a>(state: State, kind: InputKind) -> Harness<'a, State> {
    Harness::new_ui_state(
        move |ui, state: &mut State| {
            input_page(state, kind, ui);
        },
        state,
    )
}

#[test]
fn test_app_page_shows_fields_and_generate() {
    let devices = TestDevices::new();
    let mut harness = harness(devices.state(), InputKind::App);
    harness.step();

    assert!(harness.query_by_label_contains("Code Generator").is_some());
    assert!(harness.query_by_label("Generate").is_some());
    assert!(
        harness.query_by_label("Edit QR").is_none(),
        "Edit QR is only offered once a QR code exists"
    );
}

#[test]
fn test_generate_shows_qr_actions() {
    let devices = TestDevices::new();
    let mut state = devices.state();
    state
        .studio
        .input_mut(InputKind::App)
        .set_field(FieldId::DefaultLink, "https://example.com");
    let mut harness = harness(state, InputKind::App);
    harness.step();

    harness.get_by_label("Generate").click();
    harness.run_steps(2);

    assert_eq!(payload(harness.state()), "https://example.com");
    assert!(harness.query_by_label("Edit QR").is_some());
    assert!(harness.query_by_label("Share").is_some());
    assert!(
        harness
            .query_by_label_contains("Click the QR code to save it")
            .is_some()
    );
    assert!(harness.state().qr_texture.handle_id().is_some());
}

#[test]
fn test_generate_with_empty_field_posts_notice() {
    let devices = TestDevices::new();
    let mut harness = harness(devices.state(), InputKind::Text);
    harness.step();

    harness.get_by_label("Generate").click();
    harness.run_steps(2);

    let state = harness.state();
    assert_eq!(payload(state), "");
    let notice = state.notices.iter().last().expect("error notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(
        !state
            .studio
            .store()
            .read(ArtifactStore::has_artifact)
            .expect("read")
    );
}

#[test]
fn test_text_page_shows_char_counter() {
    let devices = TestDevices::new();
    let mut state = devices.state();
    state
        .studio
        .navigate(Route::Text, State::now())
        .expect("navigate");
    state
        .studio
        .input_mut(InputKind::Text)
        .set_field(FieldId::Body, "hello");
    let mut harness = harness(state, InputKind::Text);
    harness.step();

    assert!(harness.query_by_label("5/300").is_some());
}

#[test]
fn test_edit_qr_opens_editor() {
    let devices = TestDevices::new();
    let mut state = devices.state();
    let platform = state.studio.platform();
    let app = state.studio.input_mut(InputKind::App);
    app.set_field(FieldId::DefaultLink, "https://example.com");
    app.generate(platform).expect("generates");
    let mut harness = harness(state, InputKind::App);
    harness.step();

    harness.get_by_label("Edit QR").click();
    harness.run_steps(2);

    assert_eq!(harness.state().studio.route(), Route::Edit);
}
