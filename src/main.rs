//! XmlTab — a fast, filterable XML table viewer.
//!
//! Entry point: initialises structured logging and launches the eframe
//! application window.

// Hide the console window in release builds on Windows.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Declare crate modules
mod app;
mod app_actions;
mod core;
mod export;
mod ui;
mod util;

use tracing_subscriber::Layer as _;

use app::XmlTabApp;
use util::constants;

fn main() -> eframe::Result<()> {
    init_logging();

    tracing::info!("{} v{} starting", constants::APP_NAME, constants::APP_VERSION);

    // Configure the native window
    let viewport = egui::ViewportBuilder::default()
        .with_title(format!("{} v{}", constants::APP_NAME, constants::APP_VERSION))
        .with_inner_size([1100.0, 720.0])
        .with_min_inner_size([720.0, 420.0]);

    let options = eframe::NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        constants::APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(XmlTabApp::new(cc)))),
    )
}

/// Initialise the tracing subscriber: stderr, filtered by the `RUST_LOG`
/// env var (default: `info`).
fn init_logging() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(env_filter))
        .init();
}
