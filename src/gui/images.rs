//! Image decoding and texture caching for the cover image and screenshot gallery.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ImageLoadError {
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Whether the file extension names an image format we can decode.
pub fn is_image_file(path: &Path) -> bool {
    image::ImageFormat::from_path(path).is_ok()
}

/// Decode an image file into egui's pixel format.
pub fn decode_image(path: &Path) -> Result<egui::ColorImage, ImageLoadError> {
    let rgba = image::open(path)
        .map_err(|source| ImageLoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Textures decoded so far, keyed by file path. Failures are cached too so a
/// broken file is only decoded once.
#[derive(Default)]
pub struct ImageCache {
    textures: HashMap<PathBuf, Result<egui::TextureHandle, String>>,
}

impl ImageCache {
    pub fn texture(
        &mut self,
        ctx: &egui::Context,
        path: &Path,
    ) -> Result<&egui::TextureHandle, &str> {
        self.textures
            .entry(path.to_path_buf())
            .or_insert_with(|| match decode_image(path) {
                Ok(image) => {
                    debug!(path = %path.display(), "image decoded");
                    Ok(ctx.load_texture(
                        path.to_string_lossy(),
                        image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(err) => {
                    warn!(error = %err, "image unavailable");
                    Err(err.to_string())
                }
            })
            .as_ref()
            .map_err(String::as_str)
    }

    /// Show an image scaled to the available width, with a caption below.
    pub fn show(&mut self, ui: &mut egui::Ui, path: &Path, caption: &str) -> Result<(), String> {
        let ctx = ui.ctx().clone();
        let texture = self.texture(&ctx, path).map_err(str::to_string)?;
        let sized = egui::load::SizedTexture::from_handle(texture);
        ui.add(egui::Image::new(sized).max_width(ui.available_width()).shrink_to_fit());
        ui.label(egui::RichText::new(caption).italics().color(egui::Color32::GRAY));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("shots/model.png")));
        assert!(is_image_file(Path::new("cover.jpeg")));
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("README")));
    }

    #[test]
    fn test_decode_round_trip_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tiny.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let decoded = decode_image(&path).unwrap();
        assert_eq!(decoded.size, [3, 2]);
    }

    #[test]
    fn test_broken_file_is_an_error_and_cached() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();

        let ctx = egui::Context::default();
        let mut cache = ImageCache::default();
        assert!(cache.texture(&ctx, &path).is_err());
        assert_eq!(cache.textures.len(), 1);
        assert!(cache.texture(&ctx, &path).is_err());
    }
}
