//! Dataset Overview Module
//! Shape, null counts, descriptive statistics and sample records of the loaded table.

use super::schema;
use crate::stats::{DescriptiveStats, StatsCalculator};
use polars::prelude::*;
use serde::Serialize;

/// Number of records shown in the sample table.
pub const SAMPLE_ROWS: usize = 50;

/// Descriptive statistics of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub stats: DescriptiveStats,
}

/// First rows of the table rendered as display strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SampleTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Everything the overview page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetOverview {
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
    pub null_counts: Vec<(String, usize)>,
    pub summary: Vec<ColumnSummary>,
    pub sample: SampleTable,
}

impl DatasetOverview {
    pub fn build(df: &DataFrame) -> PolarsResult<Self> {
        let column_names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let null_counts = df
            .get_columns()
            .iter()
            .map(|c| (c.name().to_string(), c.null_count()))
            .collect();

        let mut summary = Vec::new();
        for column in df.get_columns() {
            if !schema::is_numeric(column.dtype()) {
                continue;
            }
            let as_f64 = column.cast(&DataType::Float64)?;
            let values: Vec<f64> = as_f64
                .f64()?
                .into_iter()
                .flatten()
                .filter(|v| !v.is_nan())
                .collect();
            summary.push(ColumnSummary {
                column: column.name().to_string(),
                stats: StatsCalculator::compute_descriptive_stats(&values),
            });
        }

        Ok(Self {
            rows: df.height(),
            columns: df.width(),
            column_names: column_names.clone(),
            null_counts,
            summary,
            sample: Self::sample(df, column_names)?,
        })
    }

    fn sample(df: &DataFrame, headers: Vec<String>) -> PolarsResult<SampleTable> {
        let head = df.head(Some(SAMPLE_ROWS));
        let mut rows = Vec::with_capacity(head.height());
        for i in 0..head.height() {
            let row = head
                .get_columns()
                .iter()
                .map(|c| c.get(i).map(|v| format_cell(&v)))
                .collect::<PolarsResult<Vec<String>>>()?;
            rows.push(row);
        }
        Ok(SampleTable { headers, rows })
    }
}

fn format_cell(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => "null".to_string(),
        other => other.to_string().trim_matches('"').to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        df!(
            "station" => [Some("A"), Some("B"), None],
            "category" => ["Theft", "Fraud", "Theft"],
            "location_x" => [1.0, 2.0, 3.0],
            "location_y" => [Some(2.0), None, Some(4.0)],
            "year" => [2020i64, 2021, 2022],
            "crime_count" => [5i64, 3, 7]
        )
        .unwrap()
    }

    #[test]
    fn test_shape_and_columns() {
        let overview = DatasetOverview::build(&frame()).unwrap();

        assert_eq!(overview.rows, 3);
        assert_eq!(overview.columns, 6);
        assert_eq!(overview.column_names[0], "station");
        assert_eq!(overview.column_names[5], "crime_count");
    }

    #[test]
    fn test_null_counts() {
        let overview = DatasetOverview::build(&frame()).unwrap();
        let nulls: Vec<usize> = overview.null_counts.iter().map(|(_, n)| *n).collect();

        assert_eq!(nulls, vec![1, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_summary_covers_numeric_columns_only() {
        let overview = DatasetOverview::build(&frame()).unwrap();
        let described: Vec<&str> = overview.summary.iter().map(|s| s.column.as_str()).collect();

        assert_eq!(described, vec!["location_x", "location_y", "year", "crime_count"]);
        let lat = &overview.summary[1].stats;
        assert_eq!(lat.count, 2);
        assert_eq!(lat.mean, 3.0);
    }

    #[test]
    fn test_sample_rows_are_display_strings() {
        let overview = DatasetOverview::build(&frame()).unwrap();

        assert_eq!(overview.sample.rows.len(), 3);
        assert_eq!(overview.sample.rows[0][0], "A");
        assert_eq!(overview.sample.rows[2][0], "null");
        assert_eq!(overview.sample.rows[0][5], "5");
    }

    #[test]
    fn test_sample_is_capped() {
        let n = SAMPLE_ROWS + 10;
        let df = df!("crime_count" => (0..n as i64).collect::<Vec<_>>()).unwrap();

        let overview = DatasetOverview::build(&df).unwrap();
        assert_eq!(overview.sample.rows.len(), SAMPLE_ROWS);
        assert_eq!(overview.rows, n);
    }
}
