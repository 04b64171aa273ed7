#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use qrforge_business::{Platform, StudioConfig};
use qrforge_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = StudioConfig::from_env().unwrap_or_else(|err| {
        log::warn!("Invalid QRFORGE_ configuration, using defaults: {err}");
        StudioConfig::default()
    });
    log::info!("Starting QrForge on {} with {config:?}", Platform::current());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_min_inner_size([320.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "QrForge",
        native_options,
        Box::new(move |_cc| {
            let state = State::new(config, Platform::current());
            Ok(Box::new(qrforge_ui::QrForgeApp::new(state)))
        }),
    )
}
