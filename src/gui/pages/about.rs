//! About Research page.

use crate::data::schema::REQUIRED_COLUMNS;
use crate::gui::widgets;
use egui::RichText;

fn bullets(ui: &mut egui::Ui, items: &[&str]) {
    for item in items {
        ui.label(format!("  • {item}"));
    }
}

pub fn show(ui: &mut egui::Ui) {
    ui.heading("📚 About This Research");

    widgets::section(ui, "Title");
    ui.label(
        RichText::new(
            "Predicting Crime Hotspots in Mpumalanga, South Africa Using Data Analysis Techniques",
        )
        .strong(),
    );

    widgets::section(ui, "Dataset Columns");
    for column in REQUIRED_COLUMNS {
        let note = match column {
            "location_x" => " (longitude)",
            "location_y" => " (latitude)",
            _ => "",
        };
        ui.label(format!("  • {column}{note}"));
    }

    widgets::section(ui, "Objectives");
    bullets(
        ui,
        &[
            "Explore spatial and temporal crime patterns",
            "Identify high-risk areas",
            "Support crime prevention strategies",
            "Present findings visually",
        ],
    );

    widgets::section(ui, "Methodology");
    for (i, step) in [
        "Data Collection",
        "Data Cleaning",
        "Exploratory Data Analysis (EDA)",
        "Visualization",
        "Interpretation of Results",
        "Dashboard Development",
    ]
    .iter()
    .enumerate()
    {
        ui.label(format!("  {}. {step}", i + 1));
    }

    widgets::section(ui, "Tools Used");
    bullets(ui, &["Rust", "Polars", "egui & egui_plot"]);

    widgets::section(ui, "Author");
    ui.label("Honour's Student in Data Science & AI");
    ui.label("TUMI Magwagwa");
}
