//! Generator page shared by every input screen.

use std::path::PathBuf;

use egui::{Color32, Response, RichText, Ui};
use qrforge_business::{FieldId, FileStore, InputKind, Studio, StudioError};

use crate::state::State;
use crate::utils::colors::ACCENT;

fn heading(kind: InputKind) -> &'static str {
    match kind {
        InputKind::App => "App Links",
        InputKind::Text => "Free Text",
        InputKind::Youtube => "YouTube Link",
        InputKind::Link => "Web Link",
    }
}

/// Renders the generator for `kind`: fields, Generate, and the QR code once
/// one exists.
pub fn input_page(state: &mut State, kind: InputKind, ui: &mut Ui) -> Response {
    let now = State::now();
    if state.studio.input_mut(kind).tick(now) {
        log::debug!("{kind:?} refresh finished");
    }

    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("QR").color(ACCENT).strong().size(22.0));
            ui.label(RichText::new("Code Generator").size(22.0));
        });
        ui.label(RichText::new(heading(kind)).weak());
        ui.add_space(8.0);

        fields(state, kind, ui);

        ui.horizontal(|ui| {
            if ui.button("Generate").clicked() {
                let platform = state.studio.platform();
                state
                    .notices
                    .report(state.studio.input(kind).generate(platform));
            }
            let screen = state.studio.input_mut(kind);
            if screen.is_refreshing() {
                ui.spinner();
                ui.ctx().request_repaint();
            } else if ui.button("Refresh").clicked() {
                screen.start_refresh(now);
            }
        });

        if let Some((len, max)) = state.studio.input(kind).char_count() {
            let color = if len >= max { Color32::RED } else { Color32::GRAY };
            ui.label(RichText::new(format!("{len}/{max}")).color(color));
        }

        ui.add_space(12.0);
        artifact_section(state, ui);
    })
    .response
}

fn fields(state: &mut State, kind: InputKind, ui: &mut Ui) {
    for &id in kind.fields() {
        let screen = state.studio.input_mut(kind);
        let mut value = screen.field(id).unwrap_or_default().to_owned();
        let edit = if id == FieldId::Body {
            egui::TextEdit::multiline(&mut value).desired_rows(4)
        } else {
            egui::TextEdit::singleline(&mut value)
        };
        let response = ui.add(edit.hint_text(id.placeholder()).desired_width(280.0));
        if response.changed() {
            screen.set_field(id, &value);
        }
    }
}

fn artifact_section(state: &mut State, ui: &mut Ui) {
    let Some(handle) = state.render_handle() else {
        return;
    };

    if let Some(response) = crate::widgets::qr_view(ui, &mut state.qr_texture, Some(&handle))
        && response.clicked()
    {
        let saved = save(&state.studio, state.devices.files.as_ref());
        if let Some(path) = state.notices.report(saved) {
            state.notices.info(format!("Saved to {}", path.display()));
        }
    }

    ui.horizontal(|ui| {
        if ui.button("Share").clicked() {
            state.studio.share().open();
        }
        if ui
            .button(RichText::new("Edit QR").color(Color32::from_rgb(34, 139, 34)).strong())
            .clicked()
        {
            state.notices.report(state.studio.open_editor(State::now()));
        }
    });
    ui.label(RichText::new("Click the QR code to save it").weak());
}

fn save(studio: &Studio, files: &dyn FileStore) -> Result<PathBuf, StudioError> {
    studio.store().read(|store| store.save(files))?
}
