//! Data Analysis page: runs the aggregation engine and draws the charts.

use crate::charts::ChartPlotter;
use crate::data::{AggregationError, AnalysisViews, DatasetStatus, CATEGORY_LIMIT};
use crate::gui::widgets;
use egui::RichText;
use polars::prelude::DataFrame;
use std::sync::Arc;
use tracing::{debug, warn};

/// Last computed views, keyed by the identity of the table they came from.
#[derive(Default)]
pub struct AnalysisMemo {
    entry: Option<(Arc<DataFrame>, Arc<AnalysisViews>)>,
}

impl AnalysisMemo {
    pub fn views_for(
        &mut self,
        table: &Arc<DataFrame>,
    ) -> Result<Arc<AnalysisViews>, AggregationError> {
        if let Some((source, views)) = &self.entry {
            if Arc::ptr_eq(source, table) {
                debug!("analysis views reused");
                return Ok(Arc::clone(views));
            }
        }

        let views = Arc::new(AnalysisViews::compute(table)?);
        self.entry = Some((Arc::clone(table), Arc::clone(&views)));
        Ok(views)
    }
}

#[derive(Debug, Clone)]
pub enum AnalysisPanel {
    Unavailable(String),
    Failed(String),
    Ready(Arc<AnalysisViews>),
}

impl AnalysisPanel {
    pub fn build(status: &DatasetStatus, memo: &mut AnalysisMemo) -> Self {
        let Some(table) = status.table() else {
            let reason = status.warning().unwrap_or_default();
            return Self::Unavailable(format!("No data available for analysis. {reason}"));
        };

        match memo.views_for(table) {
            Ok(views) => Self::Ready(views),
            Err(err) => {
                warn!(error = %err, "aggregation failed");
                Self::Failed(format!("Analysis failed: {err}"))
            }
        }
    }
}

pub fn show(ui: &mut egui::Ui, panel: &AnalysisPanel) {
    ui.heading("📈 Data Analysis & Trends");
    ui.add_space(8.0);

    let views = match panel {
        AnalysisPanel::Unavailable(msg) => return widgets::warning(ui, msg),
        AnalysisPanel::Failed(msg) => return widgets::error(ui, msg),
        AnalysisPanel::Ready(views) => views,
    };

    widgets::section(ui, "🏢 Crime by Police Station");
    ChartPlotter::draw_station_bars(ui, &views.station_totals);

    widgets::section(ui, "📂 Crime by Category (Clear View)");
    if views.category_totals.group_count > CATEGORY_LIMIT {
        ui.label(
            RichText::new(format!(
                "Showing the top {CATEGORY_LIMIT} of {} categories; the rest are grouped as Others.",
                views.category_totals.group_count
            ))
            .small(),
        );
    }
    ChartPlotter::draw_category_pie(ui, &views.category_totals);

    widgets::section(ui, "📅 Crime Trend Over Years");
    ChartPlotter::draw_yearly_trend(ui, &views.yearly_trend);

    widgets::section(ui, "📍 All Police Stations Map");
    if views.station_locations.is_empty() {
        ChartPlotter::draw_no_data(ui);
    } else {
        let headers = ["station", "location_x", "location_y", "crime_count"].map(String::from);
        widgets::data_grid(
            ui,
            "station_locations",
            &headers,
            views.station_locations.rows.iter().map(|r| {
                vec![
                    r.key.station.clone(),
                    r.key.location_x.to_string(),
                    r.key.location_y.to_string(),
                    r.crime_count.to_string(),
                ]
            }),
        );
    }

    widgets::section(ui, "🗺 Police Stations Map");
    ChartPlotter::draw_station_map(ui, &views.station_locations);

    widgets::section(ui, "🔥 Top Crime Hotspots");
    if views.hotspots.is_empty() {
        ChartPlotter::draw_no_data(ui);
    } else {
        let headers = ["location_x", "location_y", "crime_count"].map(String::from);
        widgets::data_grid(
            ui,
            "hotspots",
            &headers,
            views.hotspots.rows.iter().map(|r| {
                vec![
                    r.key.location_x.to_string(),
                    r.key.location_y.to_string(),
                    r.crime_count.to_string(),
                ]
            }),
        );
    }

    widgets::section(ui, "🚨 Hotspot Map");
    ChartPlotter::draw_hotspot_map(ui, &views.hotspots);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Unavailable;
    use polars::prelude::*;
    use std::path::PathBuf;

    fn table() -> Arc<DataFrame> {
        Arc::new(
            df!(
                "station" => ["A", "B"],
                "category" => ["Theft", "Fraud"],
                "location_x" => [1.0, 2.0],
                "location_y" => [3.0, 4.0],
                "year" => [2020i64, 2021],
                "crime_count" => [5i64, 3]
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_memo_reuses_views_for_same_table() {
        let mut memo = AnalysisMemo::default();
        let table = table();

        let first = memo.views_for(&table).unwrap();
        let second = memo.views_for(&table).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let other = memo.views_for(&Arc::new(table.as_ref().clone())).unwrap();
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(*first, *other);
    }

    #[test]
    fn test_unavailable_status_builds_warning() {
        let status = DatasetStatus::Unavailable {
            path: PathBuf::from("data/crime_data.csv"),
            reason: Unavailable::NotFound,
        };

        match AnalysisPanel::build(&status, &mut AnalysisMemo::default()) {
            AnalysisPanel::Unavailable(msg) => {
                assert!(msg.starts_with("No data available for analysis."));
                assert!(msg.contains("Dataset not found"));
            }
            other => panic!("expected warning, got {other:?}"),
        }
    }

    #[test]
    fn test_table_without_count_column_fails_gracefully() {
        let broken = Arc::new(df!("station" => ["A"]).unwrap());
        let status = DatasetStatus::Ready(broken);

        assert!(matches!(
            AnalysisPanel::build(&status, &mut AnalysisMemo::default()),
            AnalysisPanel::Failed(_)
        ));
    }
}
