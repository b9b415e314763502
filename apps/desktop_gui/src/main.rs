use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod ui;

use controller::events::{UiError, UiErrorCategory, UiErrorContext};
use ui::RebuildApp;

#[derive(Parser, Debug)]
struct Args {
    /// Settings file; missing is fine, malformed is reported in the status bar.
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (settings, startup_error) = match config::load_settings(&args.config) {
        Ok(settings) => (settings, None),
        Err(err) => (
            config::Settings::default(),
            Some(UiError::new(
                UiErrorCategory::Config,
                UiErrorContext::Startup,
                format!("{err:#}; using defaults"),
            )),
        ),
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter =
        config::resolve_log_filter(args.log_filter.as_deref(), rust_log.as_deref(), &settings);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Some(err) = &startup_error {
        tracing::warn!(error = err.message(), "failed to load settings");
    }
    tracing::info!(config = %args.config.display(), filter = %filter, "starting desktop surface");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };
    let app_name = settings.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |_cc| Ok(Box::new(RebuildApp::new(settings, startup_error)))),
    )
    .map_err(|err| anyhow!("desktop surface exited with error: {err}"))
}
