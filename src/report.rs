//! Headless JSON report: dataset status, overview and the derived views.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::data::{AnalysisViews, DatasetLoader, DatasetOverview, DatasetStatus};
use crate::error::Result;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Ready,
    Unavailable,
}

/// Document written by `--report`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub dataset: PathBuf,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<DatasetOverview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisViews>,
}

impl Report {
    /// Load the dataset and derive everything the dashboard pages show.
    ///
    /// Data problems are reported in `warning` rather than as errors.
    pub fn build(loader: &mut DatasetLoader) -> Self {
        let dataset = loader.path().to_path_buf();
        let status = loader.dataset();

        let DatasetStatus::Ready(df) = &status else {
            return Self {
                dataset,
                status: ReportStatus::Unavailable,
                warning: status.warning(),
                overview: None,
                analysis: None,
            };
        };

        let mut problems = Vec::new();
        let overview = DatasetOverview::build(df)
            .map_err(|e| problems.push(format!("Overview failed: {e}")))
            .ok();
        let analysis = AnalysisViews::compute(df)
            .map_err(|e| problems.push(format!("Analysis failed: {e}")))
            .ok();

        Self {
            dataset,
            status: ReportStatus::Ready,
            warning: (!problems.is_empty()).then(|| problems.join("; ")),
            overview,
            analysis,
        }
    }

    /// Write the report as pretty-printed JSON followed by a newline.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        info!(dataset = %self.dataset.display(), "report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    fn render(report: &Report) -> Value {
        let mut buf = Vec::new();
        report.write_to(&mut buf).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn test_report_for_missing_dataset() {
        let dir = TempDir::new().unwrap();
        let mut loader = DatasetLoader::new(dir.path().join("data").join("crime_data.csv"));

        let json = render(&Report::build(&mut loader));

        assert_eq!(json["status"], "unavailable");
        assert_eq!(
            json["warning"],
            "Dataset not found. Please add crime_data.csv in the data folder."
        );
        assert!(json.get("analysis").is_none());
    }

    #[test]
    fn test_report_contains_views() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crime_data.csv");
        fs::write(
            &path,
            "station,category,location_x,location_y,year,crime_count\n\
             A,Theft,1.0,2.0,2020,5\n\
             A,Theft,1.0,2.0,2021,3\n",
        )
        .unwrap();
        let mut loader = DatasetLoader::new(&path);

        let json = render(&Report::build(&mut loader));

        assert_eq!(json["status"], "ready");
        assert!(json.get("warning").is_none());
        assert_eq!(json["overview"]["rows"], 2);

        let analysis = &json["analysis"];
        assert_eq!(analysis["grand_total"], 8);
        assert_eq!(analysis["station_totals"]["rows"][0]["key"], "A");
        assert_eq!(analysis["station_totals"]["rows"][0]["crime_count"], 8);
        assert_eq!(analysis["category_totals"]["rows"][0]["key"], "Theft");
        assert_eq!(analysis["yearly_trend"]["rows"][0]["key"], 2020);
        assert_eq!(analysis["yearly_trend"]["rows"][1]["crime_count"], 3);
        assert_eq!(analysis["hotspots"]["rows"][0]["crime_count"], 8);
    }
}
