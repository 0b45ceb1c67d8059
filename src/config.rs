//! Configuration loading.
//!
//! Sources, later overriding earlier: built-in defaults, a TOML file
//! (`crime_dashboard.toml` in the working directory unless `--config` names
//! another) and `CRIME_DASHBOARD_*` environment variables, with `__`
//! separating nested keys (`CRIME_DASHBOARD_DATASET__PATH`).

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "crime_dashboard.toml";
const ENV_PREFIX: &str = "CRIME_DASHBOARD_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub assets: AssetsConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// CSV file with the crime records.
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Image shown on the home page.
    pub cover_image: PathBuf,
    /// Directory listed by the screenshots page.
    pub screenshots_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/crime_data.csv"),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            cover_image: PathBuf::from("assets/cover.jpeg"),
            screenshots_dir: PathBuf::from("screenshots"),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1400.0,
            height: 900.0,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// The result is not validated; callers apply command line overrides first
    /// and then call [`Config::validate`].
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let config_file = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        Ok(Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.dataset.path.as_os_str().is_empty() {
            return Err(Error::config_validation("dataset.path must not be empty"));
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(Error::config_validation(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}
