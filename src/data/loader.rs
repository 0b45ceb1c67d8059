//! Dataset Loader Module
//! Reads the crime CSV with Polars once and caches the table for the process lifetime.

use super::schema;
use polars::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("dataset not found at {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to inspect {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),
}

/// Why the dataset could not be provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    /// No file at the configured path.
    NotFound,
    /// The file exists but could not be turned into a crime table.
    Unreadable(String),
}

/// Outcome of asking the loader for the dataset. Never an error.
#[derive(Debug, Clone)]
pub enum DatasetStatus {
    Ready(Arc<DataFrame>),
    Unavailable { path: PathBuf, reason: Unavailable },
}

impl DatasetStatus {
    pub fn table(&self) -> Option<&Arc<DataFrame>> {
        match self {
            Self::Ready(df) => Some(df),
            Self::Unavailable { .. } => None,
        }
    }

    /// User-facing explanation when the dataset is unavailable.
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Ready(_) => None,
            Self::Unavailable {
                path,
                reason: Unavailable::NotFound,
            } => {
                let file = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                let folder = match path.parent().and_then(|p| p.file_name()) {
                    Some(dir) => format!("the {} folder", dir.to_string_lossy()),
                    None => "the working directory".to_string(),
                };
                Some(format!("Dataset not found. Please add {file} in {folder}."))
            }
            Self::Unavailable {
                reason: Unavailable::Unreadable(msg),
                ..
            } => Some(format!("Dataset could not be read: {msg}")),
        }
    }
}

/// File identity used as the cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceIdentity {
    len: u64,
    modified: Option<SystemTime>,
}

impl SourceIdentity {
    fn probe(path: &Path) -> Result<Self, LoaderError> {
        let meta = fs::metadata(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoaderError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoaderError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Ok(Self {
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

struct CachedTable {
    identity: SourceIdentity,
    table: Arc<DataFrame>,
}

/// Lazily loads the crime table on first access and hands out the cached copy.
///
/// The cache is only replaced when the file's length or modification time
/// changes and the new contents load. Once a table has been loaded it is never
/// dropped: if the file later disappears or stops parsing, the last good table
/// keeps being served.
pub struct DatasetLoader {
    path: PathBuf,
    cached: Option<CachedTable>,
}

impl DatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the dataset, reading the file only if the cache is cold or stale.
    pub fn dataset(&mut self) -> DatasetStatus {
        match self.try_dataset() {
            Ok(table) => DatasetStatus::Ready(table),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "dataset unavailable");
                let reason = match err {
                    LoaderError::NotFound { .. } => Unavailable::NotFound,
                    other => Unavailable::Unreadable(other.to_string()),
                };
                DatasetStatus::Unavailable {
                    path: self.path.clone(),
                    reason,
                }
            }
        }
    }

    fn try_dataset(&mut self) -> Result<Arc<DataFrame>, LoaderError> {
        let identity = match SourceIdentity::probe(&self.path) {
            Ok(identity) => identity,
            Err(err) => {
                return match &self.cached {
                    Some(cached) => {
                        debug!(error = %err, "source vanished, serving cached table");
                        Ok(Arc::clone(&cached.table))
                    }
                    None => Err(err),
                };
            }
        };

        if let Some(cached) = &self.cached {
            if cached.identity == identity {
                debug!(path = %self.path.display(), "dataset cache hit");
                return Ok(Arc::clone(&cached.table));
            }
        }

        let table = match load_csv(&self.path) {
            Ok(df) => Arc::new(df),
            Err(err) => {
                return match &self.cached {
                    Some(cached) => {
                        warn!(
                            error = %err,
                            "changed dataset failed to load, serving cached table"
                        );
                        Ok(Arc::clone(&cached.table))
                    }
                    None => Err(err),
                };
            }
        };
        info!(
            path = %self.path.display(),
            rows = table.height(),
            columns = table.width(),
            "dataset loaded"
        );
        self.cached = Some(CachedTable {
            identity,
            table: Arc::clone(&table),
        });
        Ok(table)
    }
}

/// Read a crime CSV and normalise its required columns.
pub fn load_csv(path: &Path) -> Result<DataFrame, LoaderError> {
    let raw = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    let missing = schema::missing_columns(&raw);
    if !missing.is_empty() {
        return Err(LoaderError::MissingColumns(missing));
    }

    Ok(schema::normalize(raw).collect()?)
}
