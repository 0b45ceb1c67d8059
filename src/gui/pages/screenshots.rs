//! Screenshots page: research images with their file names as captions.

use crate::gui::gallery::{self, GalleryListing};
use crate::gui::images::ImageCache;
use crate::gui::widgets;

pub fn show(ui: &mut egui::Ui, images: &mut ImageCache, listing: &GalleryListing) {
    ui.heading("🖼 Research Screenshots");
    ui.label(
        "This section presents screenshots of model comparison of models developed \
         during research.",
    );
    ui.add_space(10.0);

    match listing {
        GalleryListing::MissingFolder(dir) => {
            let name = gallery::caption(dir);
            widgets::warning(
                ui,
                &format!("Please create a '{name}' folder and add your images."),
            );
        }
        GalleryListing::Unreadable { dir, reason } => {
            widgets::warning(ui, &format!("Cannot read {}: {reason}", dir.display()));
        }
        GalleryListing::Empty => widgets::info(ui, "No screenshots found in the folder."),
        GalleryListing::Images(paths) => {
            for path in paths {
                let caption = gallery::caption(path);
                if let Err(err) = images.show(ui, path, &caption) {
                    widgets::warning(ui, &err);
                }
                ui.add_space(12.0);
            }
        }
    }
}
