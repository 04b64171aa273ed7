use qrforge_business::Route;

use crate::{pages, state::State, widgets};

pub struct QrForgeApp {
    state: State,
}

impl QrForgeApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for QrForgeApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = &mut self.state;
        state.notices.expire(State::now());

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                tab_bar(state, ui);
            });
        });

        widgets::notices_panel(ctx, &state.notices);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                route_page(state, ui);
            });
        });

        if let Some(destination) = widgets::share_sheet(ctx, state.studio.share()) {
            let share = state.studio.share().share(
                destination,
                state.studio.platform(),
                state.devices.files.as_ref(),
                state.devices.sheet.as_ref(),
            );
            if let Some(outcome) = state.notices.report(pollster::block_on(share)) {
                log::debug!("Shared: {outcome:?}");
                state.notices.info("Copied to clipboard");
            }
        }

        if !state.notices.is_empty() {
            ctx.request_repaint_after(widgets::Notices::TTL);
        }
    }
}

fn tab_bar(state: &mut State, ui: &mut egui::Ui) {
    let current = state.studio.route();
    for route in Route::TABS {
        if ui.selectable_label(current == route, route.label()).clicked() {
            state.notices.report(state.studio.navigate(route, State::now()));
        }
    }
    if current == Route::Edit {
        ui.separator();
        ui.label(Route::Edit.label());
    }
}

fn route_page(state: &mut State, ui: &mut egui::Ui) {
    let route = state.studio.route();
    match route.input_kind() {
        Some(kind) => {
            pages::input_page(state, kind, ui);
        }
        None if route == Route::Scanner => {
            pages::scanner_page(state, ui);
        }
        None => {
            pages::edit_page(state, ui);
        }
    }
}
