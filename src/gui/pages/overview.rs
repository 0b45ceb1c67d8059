//! Dataset Overview page.

use crate::data::{DatasetOverview, DatasetStatus};
use crate::gui::widgets;
use crate::stats::{DescriptiveStats, StatsCalculator};
use tracing::warn;

#[derive(Debug, Clone)]
pub enum OverviewPanel {
    Unavailable(String),
    Failed(String),
    Ready(Box<DatasetOverview>),
}

impl OverviewPanel {
    pub fn build(status: &DatasetStatus) -> Self {
        let Some(table) = status.table() else {
            return Self::Unavailable(status.warning().unwrap_or_default());
        };

        match DatasetOverview::build(table) {
            Ok(overview) => Self::Ready(Box::new(overview)),
            Err(err) => {
                warn!(error = %err, "overview failed");
                Self::Failed(format!("Overview failed: {err}"))
            }
        }
    }
}

pub fn show(ui: &mut egui::Ui, panel: &OverviewPanel) {
    ui.heading("📁 Dataset Overview");
    ui.add_space(8.0);

    let overview = match panel {
        OverviewPanel::Unavailable(msg) => return widgets::warning(ui, msg),
        OverviewPanel::Failed(msg) => return widgets::error(ui, msg),
        OverviewPanel::Ready(overview) => overview,
    };

    widgets::section(ui, "Sample Records");
    if overview.sample.rows.is_empty() {
        widgets::info(ui, "The dataset has no records.");
    } else {
        egui::ScrollArea::vertical()
            .id_salt("sample_records")
            .max_height(360.0)
            .show(ui, |ui| {
                widgets::data_grid(
                    ui,
                    "sample_grid",
                    &overview.sample.headers,
                    overview.sample.rows.iter().cloned(),
                );
            });
    }

    widgets::section(ui, "Dataset Shape");
    ui.label(format!("Rows: {}", overview.rows));
    ui.label(format!("Columns: {}", overview.columns));

    widgets::section(ui, "Column Names");
    ui.label(format!("{:?}", overview.column_names));

    widgets::section(ui, "Missing Values");
    widgets::data_grid(
        ui,
        "null_counts",
        &["column".to_string(), "missing".to_string()],
        overview
            .null_counts
            .iter()
            .map(|(name, n)| vec![name.clone(), n.to_string()]),
    );

    widgets::section(ui, "Basic Statistics");
    if overview.summary.is_empty() {
        widgets::info(ui, "No numeric columns to summarise.");
        return;
    }
    let mut headers = vec![String::new()];
    headers.extend(overview.summary.iter().map(|s| s.column.clone()));
    let columns: Vec<[f64; 8]> = overview.summary.iter().map(|s| s.stats.values()).collect();
    widgets::data_grid(
        ui,
        "summary_stats",
        &headers,
        DescriptiveStats::LABELS.iter().enumerate().map(|(i, label)| {
            let mut row = vec![label.to_string()];
            row.extend(columns.iter().map(|c| StatsCalculator::format_stat(c[i])));
            row
        }),
    );
}
