mod app;

use std::sync::Arc;

use eframe::{egui, NativeOptions};
use placeholder_core::{AppConfig, Fetcher};
use tokio::runtime::Runtime;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::app::{AppInit, PlaceholderApp};

fn main() -> eframe::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let runtime = match Runtime::new() {
        Ok(runtime) => Arc::new(runtime),
        Err(e) => {
            error!(error = %e, "failed to initialise Tokio runtime");
            std::process::exit(1);
        }
    };
    let fetcher = match Fetcher::from_config(&config.api) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!(error = %e, "failed to set up the API client");
            std::process::exit(1);
        }
    };
    info!(base_url = %fetcher.base_url(), "starting placeholder viewer");

    let init = AppInit {
        runtime,
        fetcher,
        config,
    };

    eframe::run_native(
        "JSONPlaceholder Viewer",
        NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 800.0])
                .with_min_inner_size([640.0, 480.0]),
            ..Default::default()
        },
        Box::new(move |cc| Box::new(PlaceholderApp::new(init, &cc.egui_ctx))),
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
