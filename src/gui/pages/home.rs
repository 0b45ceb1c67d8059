//! Home page: welcome text and cover image.

use crate::gui::images::ImageCache;
use crate::gui::widgets;
use egui::RichText;
use std::path::Path;

pub fn show(ui: &mut egui::Ui, images: &mut ImageCache, cover_image: &Path) {
    ui.heading("📊 Crime Data Analysis Dashboard");
    ui.label(
        RichText::new("Exploratory Analysis of Crime Patterns in Mpumalanga")
            .size(16.0)
            .strong(),
    );
    ui.add_space(12.0);

    widgets::section(ui, "Welcome");
    ui.label(
        "This dashboard showcases research on crime analysis and hotspot identification \
         using data visualization and statistical analysis.",
    );
    ui.add_space(6.0);
    ui.label("It is based on recorded crime data containing:");
    for item in [
        "Police stations",
        "Crime categories",
        "Geographic coordinates",
        "Yearly crime counts",
    ] {
        ui.label(format!("  • {item}"));
    }
    ui.add_space(12.0);

    if images.show(ui, cover_image, "Crime Analysis Overview").is_err() {
        widgets::info(
            ui,
            &format!("Cover image not available at {}.", cover_image.display()),
        );
    }
}
