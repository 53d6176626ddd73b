#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use kolam_core::{AnalysisController, ClientConfig, DemoBackend};

/// Status checks the demo backend answers with "processing"
const DEMO_PROCESSING_CHECKS: u32 = 2;

/// Kolam Analyzer - desktop client
#[derive(Parser, Debug)]
#[command(name = "kolam-desktop")]
#[command(about = "Kolam Analyzer - cultural and mathematical analysis of kolam patterns")]
struct Args {
    /// Analysis backend base URL (overrides KOLAM_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Seconds between status checks
    #[arg(long)]
    poll_interval: Option<u64>,

    /// Status checks before giving up
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Use the built-in demo backend instead of the HTTP API
    #[arg(long)]
    demo: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    kolam_core::logging::init(args.verbose);

    let config = ClientConfig::from_env()
        .and_then(|c| c.with_overrides(args.api_url.as_deref(), args.poll_interval, args.max_attempts))
        .context("invalid client configuration")?;

    let controller = if args.demo {
        tracing::info!("Starting with the demo backend");
        AnalysisController::new(Arc::new(DemoBackend::new(DEMO_PROCESSING_CHECKS)), config.poll)
    } else {
        tracing::info!("Starting against {}", config.base_url);
        AnalysisController::with_api(config).context("failed to build API client")?
    };
    let controller: context::SharedController = Arc::new(controller);

    let title = if args.demo {
        "Kolam Analyzer - Demo"
    } else {
        "Kolam Analyzer"
    };

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(controller)
        .launch(app::App);

    Ok(())
}
