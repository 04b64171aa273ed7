//! Edit page with Logo and Colors tabs over the shared QR code.

use egui::{Response, RichText, Ui};
use qrforge_business::{ColorsEditor, EditTab, PickOutcome, QrColor, StudioError};

use crate::state::State;
use crate::utils::colors::{from_color32, to_color32};

pub fn edit_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical_centered(|ui| {
        ui.heading("Edit QR");
        ui.horizontal(|ui| {
            for tab in EditTab::ALL {
                let selected = state.studio.edit().active() == tab;
                if ui.selectable_label(selected, tab.label()).clicked() && !selected {
                    state.studio.edit_mut().select(tab);
                    state.hex_drafts.load(state.studio.edit().colors());
                }
            }
        });
        ui.separator();

        let handle = state.render_handle();
        crate::widgets::qr_view(ui, &mut state.qr_texture, handle.as_ref());
        ui.add_space(8.0);

        match state.studio.edit().active() {
            EditTab::Logo => logo_tab(state, ui),
            EditTab::Colors => colors_tab(state, ui),
        }
    })
    .response
}

fn logo_tab(state: &mut State, ui: &mut Ui) {
    let logo = state.studio.edit().logo();
    let (Some(mut size), Some(max)) = (
        state.notices.report(logo.logo_size()),
        state.notices.report(logo.max_logo_size()),
    ) else {
        return;
    };

    if ui
        .add(egui::Slider::new(&mut size, 0..=max).text("Logo size"))
        .changed()
    {
        state.notices.report(logo.set_logo_size(size));
    }

    ui.horizontal(|ui| {
        if ui.button("Choose logo").clicked() {
            let picked = pollster::block_on(state.devices.picker.pick_image());
            if let Some(PickOutcome::Selected(asset)) = state.notices.report(picked)
                && state.notices.report(logo.set_logo(&asset.bytes)).is_some()
            {
                log::info!("Logo set from {}", asset.uri);
            }
        }
        let has_logo = logo.has_logo().unwrap_or(false);
        if ui
            .add_enabled(has_logo, egui::Button::new("Remove logo"))
            .clicked()
        {
            state.notices.report(logo.clear_logo());
        }
    });
}

fn colors_tab(state: &mut State, ui: &mut Ui) {
    let colors = state.studio.edit().colors();
    if state.hex_drafts.background.is_empty() {
        state.hex_drafts.load(colors);
    }

    color_row(
        ui,
        &mut state.notices,
        "Background",
        &mut state.hex_drafts.background,
        colors.background(),
        |color| colors.set_background(color),
    );
    color_row(
        ui,
        &mut state.notices,
        "Foreground",
        &mut state.hex_drafts.foreground,
        colors.foreground(),
        |color| colors.set_foreground(color),
    );

    if ui.button("Swap").clicked() && state.notices.report(colors.swap()).is_some() {
        state.hex_drafts.load(colors);
    }
}

fn color_row(
    ui: &mut Ui,
    notices: &mut crate::widgets::Notices,
    label: &str,
    draft: &mut String,
    current: Result<QrColor, StudioError>,
    apply: impl Fn(QrColor) -> Result<(), StudioError>,
) {
    let Some(current) = notices.report(current) else {
        return;
    };

    ui.label(RichText::new(label).strong());
    ui.horizontal(|ui| {
        let mut picked = to_color32(current);
        if ui.color_edit_button_srgba(&mut picked).changed() {
            let color = from_color32(picked);
            if notices.report(apply(color)).is_some() {
                *draft = color.to_string();
            }
        }

        for preset in ColorsEditor::PRESETS {
            let swatch = egui::Button::new("  ").fill(to_color32(preset));
            if ui.add(swatch).on_hover_text(preset.to_string()).clicked()
                && notices.report(apply(preset)).is_some()
            {
                *draft = preset.to_string();
            }
        }
    });

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(draft)
                .hint_text("#rrggbb")
                .desired_width(90.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button(format!("Apply {label}")).clicked() || submitted {
            let parsed = draft.parse::<QrColor>();
            if let Some(color) = notices.report(parsed)
                && notices.report(apply(color)).is_some()
            {
                *draft = color.to_string();
            }
        }
    });
}
