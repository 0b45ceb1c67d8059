//! Crime Data Analysis Dashboard
//!
//! Loads a crime records CSV and presents station, category, yearly and
//! geographic breakdowns across a handful of navigable pages.

mod charts;
mod cli;
mod config;
mod data;
mod error;
mod gui;
mod logging;
mod report;
mod stats;

use anyhow::{anyhow, Context};
use clap::Parser;
use eframe::egui;
use tracing::info;

use cli::Cli;
use config::Config;
use data::DatasetLoader;
use gui::DashboardApp;
use report::Report;

const APP_TITLE: &str = "Crime Data Analysis Dashboard";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbosity());

    let mut config = Config::load_from(cli.config.as_deref()).context("loading configuration")?;
    cli.apply(&mut config);
    config.validate()?;

    if cli.report {
        let mut loader = DatasetLoader::new(config.dataset.path.clone());
        Report::build(&mut loader)
            .write_to(std::io::stdout().lock())
            .context("writing report")?;
        return Ok(());
    }

    info!(dataset = %config.dataset.path.display(), "starting dashboard");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 600.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("window system failure: {e}"))
}
