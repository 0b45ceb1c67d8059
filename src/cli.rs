//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::logging::Verbosity;

/// Interactive dashboard over a crime records CSV.
#[derive(Parser, Debug)]
#[command(name = "crime-dashboard", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./crime_dashboard.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Crime records CSV to load
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Folder listed on the screenshots page
    #[arg(long, value_name = "DIR")]
    pub screenshots: Option<PathBuf>,

    /// Cover image shown on the home page
    #[arg(long, value_name = "FILE")]
    pub cover: Option<PathBuf>,

    /// Print the dataset overview and derived views as JSON instead of opening a window
    #[arg(long)]
    pub report: bool,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }

    /// Apply path flags on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(data) = &self.data {
            config.dataset.path = data.clone();
        }
        if let Some(dir) = &self.screenshots {
            config.assets.screenshots_dir = dir.clone();
        }
        if let Some(cover) = &self.cover {
            config.assets.cover_image = cover.clone();
        }
    }
}
