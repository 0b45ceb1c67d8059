//! Screenshot gallery: enumerates the image directory.

use super::images::is_image_file;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// What the screenshots directory currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryListing {
    /// The directory does not exist.
    MissingFolder(PathBuf),
    /// The directory exists but could not be listed.
    Unreadable { dir: PathBuf, reason: String },
    /// The directory holds no images.
    Empty,
    /// Image files sorted by file name.
    Images(Vec<PathBuf>),
}

impl GalleryListing {
    pub fn scan(dir: &Path) -> Self {
        if !dir.is_dir() {
            return Self::MissingFolder(dir.to_path_buf());
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "cannot list screenshots");
                return Self::Unreadable {
                    dir: dir.to_path_buf(),
                    reason: err.to_string(),
                };
            }
        };

        let mut images: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && is_image_file(path))
            .collect();
        images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        if images.is_empty() {
            Self::Empty
        } else {
            Self::Images(images)
        }
    }
}

/// Caption shown under a screenshot: its file name.
pub fn caption(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
