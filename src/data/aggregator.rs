//! Aggregation Engine
//! Groups the crime table and sums `crime_count` into the five dashboard views.

use super::schema::{CATEGORY, CRIME_COUNT, LOCATION_X, LOCATION_Y, STATION, YEAR};
use super::views::{CategoryLabel, DerivedView, GeoPoint, StationLocation, ViewRow};
use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Number of stations shown in the station bar chart.
pub const STATION_LIMIT: usize = 15;
/// Number of named slices in the category pie chart.
pub const CATEGORY_LIMIT: usize = 8;
/// Number of coordinates in the hotspot table and map.
pub const HOTSPOT_LIMIT: usize = 20;

#[derive(Error, Debug)]
pub enum AggregationError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// All derived views for the analysis page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisViews {
    pub grand_total: i64,
    pub station_totals: DerivedView<String>,
    pub category_totals: DerivedView<CategoryLabel>,
    pub yearly_trend: DerivedView<i64>,
    pub station_locations: DerivedView<StationLocation>,
    pub hotspots: DerivedView<GeoPoint>,
}

impl AnalysisViews {
    pub fn compute(df: &DataFrame) -> Result<Self, AggregationError> {
        Ok(Self {
            grand_total: CrimeAggregator::grand_total(df)?,
            station_totals: CrimeAggregator::station_totals(df)?,
            category_totals: CrimeAggregator::category_totals(df)?,
            yearly_trend: CrimeAggregator::yearly_trend(df)?,
            station_locations: CrimeAggregator::station_locations(df)?,
            hotspots: CrimeAggregator::hotspots(df)?,
        })
    }
}

/// Pure group-and-sum operations over a normalised crime table.
///
/// Grouping is stable (groups appear in first-seen order) and the count sort
/// keeps that order for ties, so equal totals rank by first appearance.
pub struct CrimeAggregator;

impl CrimeAggregator {
    /// Sum of `crime_count` over every row.
    pub fn grand_total(df: &DataFrame) -> Result<i64, AggregationError> {
        Ok(df.column(CRIME_COUNT)?.i64()?.sum().unwrap_or(0))
    }

    /// Top stations by summed count.
    pub fn station_totals(df: &DataFrame) -> Result<DerivedView<String>, AggregationError> {
        let grouped = Self::ranked_sums(df, &[STATION])?;
        let rows = string_values(&grouped, STATION)?
            .into_iter()
            .zip(count_values(&grouped)?)
            .map(|(station, count)| ViewRow::new(station, count))
            .collect();

        let view = DerivedView::ranked(rows, STATION_LIMIT);
        debug!(groups = view.group_count, shown = view.len(), "station totals");
        Ok(view)
    }

    /// Top categories by summed count, the rest folded into "Others".
    pub fn category_totals(
        df: &DataFrame,
    ) -> Result<DerivedView<CategoryLabel>, AggregationError> {
        let grouped = Self::ranked_sums(df, &[CATEGORY])?;
        let ranked: Vec<ViewRow<String>> = string_values(&grouped, CATEGORY)?
            .into_iter()
            .zip(count_values(&grouped)?)
            .map(|(category, count)| ViewRow::new(category, count))
            .collect();

        let group_count = ranked.len();
        let others: i64 = ranked
            .iter()
            .skip(CATEGORY_LIMIT)
            .map(|r| r.crime_count)
            .sum();

        let mut rows: Vec<ViewRow<CategoryLabel>> = ranked
            .into_iter()
            .take(CATEGORY_LIMIT)
            .map(|r| ViewRow::new(CategoryLabel::Named(r.key), r.crime_count))
            .collect();
        if others != 0 {
            rows.push(ViewRow::new(CategoryLabel::Others, others));
        }

        let mut view = DerivedView::ranked(rows, CATEGORY_LIMIT + 1);
        view.limit = Some(CATEGORY_LIMIT);
        view.group_count = group_count;
        debug!(groups = group_count, others, "category totals");
        Ok(view)
    }

    /// Summed count per year, oldest first.
    pub fn yearly_trend(df: &DataFrame) -> Result<DerivedView<i64>, AggregationError> {
        let grouped = Self::keyed_sums(df, &[YEAR])?;
        let rows = grouped
            .column(YEAR)?
            .i64()?
            .into_iter()
            .flatten()
            .zip(count_values(&grouped)?)
            .map(|(year, count)| ViewRow::new(year, count))
            .collect();

        let view = DerivedView::keyed(rows);
        debug!(years = view.len(), "yearly trend");
        Ok(view)
    }

    /// One row per distinct station coordinate.
    pub fn station_locations(
        df: &DataFrame,
    ) -> Result<DerivedView<StationLocation>, AggregationError> {
        let grouped = Self::keyed_sums(df, &[STATION, LOCATION_X, LOCATION_Y])?;
        let stations = string_values(&grouped, STATION)?;
        let xs = float_values(&grouped, LOCATION_X)?;
        let ys = float_values(&grouped, LOCATION_Y)?;
        let counts = count_values(&grouped)?;

        let rows = stations
            .into_iter()
            .zip(xs)
            .zip(ys)
            .zip(counts)
            .map(|(((station, location_x), location_y), count)| {
                ViewRow::new(
                    StationLocation {
                        station,
                        location_x,
                        location_y,
                    },
                    count,
                )
            })
            .collect();

        let view = DerivedView::keyed(rows);
        debug!(locations = view.len(), "station locations");
        Ok(view)
    }

    /// Top coordinates by summed count.
    pub fn hotspots(df: &DataFrame) -> Result<DerivedView<GeoPoint>, AggregationError> {
        let grouped = Self::ranked_sums(df, &[LOCATION_X, LOCATION_Y])?;
        let rows = float_values(&grouped, LOCATION_X)?
            .into_iter()
            .zip(float_values(&grouped, LOCATION_Y)?)
            .zip(count_values(&grouped)?)
            .map(|((location_x, location_y), count)| {
                ViewRow::new(
                    GeoPoint {
                        location_x,
                        location_y,
                    },
                    count,
                )
            })
            .collect();

        let view = DerivedView::ranked(rows, HOTSPOT_LIMIT);
        debug!(groups = view.group_count, shown = view.len(), "hotspots");
        Ok(view)
    }

    /// Group by `keys` (dropping rows with a null key) and sum the counts.
    fn grouped_sums(df: &DataFrame, keys: &[&str]) -> LazyFrame {
        let mut lf = df.clone().lazy();
        for key in keys {
            lf = lf.filter(col(*key).is_not_null());
        }
        lf.group_by_stable(keys.iter().map(|k| col(*k)).collect::<Vec<_>>())
            .agg([col(CRIME_COUNT).sum()])
    }

    fn ranked_sums(df: &DataFrame, keys: &[&str]) -> PolarsResult<DataFrame> {
        Self::grouped_sums(df, keys)
            .sort(
                [CRIME_COUNT],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_maintain_order(true),
            )
            .collect()
    }

    fn keyed_sums(df: &DataFrame, keys: &[&str]) -> PolarsResult<DataFrame> {
        Self::grouped_sums(df, keys)
            .sort(
                keys.to_vec(),
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .collect()
    }
}

fn string_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<String>> {
    Ok(df
        .column(name)?
        .as_materialized_series()
        .str()?
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect())
}

fn float_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<f64>> {
    Ok(df
        .column(name)?
        .f64()?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}

fn count_values(df: &DataFrame) -> PolarsResult<Vec<i64>> {
    Ok(df
        .column(CRIME_COUNT)?
        .i64()?
        .into_iter()
        .map(|v| v.unwrap_or(0))
        .collect())
}
