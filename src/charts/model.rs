//! Chart Models
//! Pure chart geometry and labels derived from the aggregation views.
//! The egui drawing code only consumes these.

use crate::data::{CategoryLabel, DerivedView, GeoPoint, StationLocation};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Largest angle covered by one wedge polygon; keeps every polygon convex.
const MAX_WEDGE_SWEEP: f64 = FRAC_PI_2;
/// Arc segments per full turn.
const ARC_SEGMENTS: f64 = 128.0;
/// Radial position of the percentage labels (fraction of the radius).
pub const PCT_DISTANCE: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub label: String,
    pub value: f64,
}

pub fn station_bars(view: &DerivedView<String>) -> Vec<BarEntry> {
    view.rows
        .iter()
        .map(|r| BarEntry {
            label: r.key.clone(),
            value: r.crime_count as f64,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: i64,
    /// Start angle in radians, measured counter-clockwise from the +x axis.
    pub start_angle: f64,
    pub sweep: f64,
    pub percent_label: String,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep / 2.0
    }

    /// Position of the percentage label on a unit pie.
    pub fn label_position(&self) -> [f64; 2] {
        let a = self.mid_angle();
        [PCT_DISTANCE * a.cos(), PCT_DISTANCE * a.sin()]
    }

    /// Convex polygons (center plus arc) that together cover the wedge.
    pub fn polygons(&self) -> Vec<Vec<[f64; 2]>> {
        if self.sweep <= 0.0 {
            return Vec::new();
        }
        let pieces = (self.sweep / MAX_WEDGE_SWEEP - 1e-9).ceil().max(1.0) as usize;
        let piece_sweep = self.sweep / pieces as f64;
        (0..pieces)
            .map(|p| {
                let start = self.start_angle + piece_sweep * p as f64;
                wedge(start, piece_sweep)
            })
            .collect()
    }
}

fn wedge(start: f64, sweep: f64) -> Vec<[f64; 2]> {
    let steps = ((sweep / TAU) * ARC_SEGMENTS).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let a = start + sweep * i as f64 / steps as f64;
        points.push([a.cos(), a.sin()]);
    }
    points
}

/// Legend name of the residual bucket when a real category is also called "Others".
pub const REMAINING_LABEL: &str = "Others (remaining)";

/// Slices starting at 12 o'clock and running counter-clockwise.
///
/// Legend names are unique: egui_plot merges entries that share a name.
pub fn category_slices(view: &DerivedView<CategoryLabel>) -> Vec<PieSlice> {
    let total: i64 = view.total();
    if total <= 0 {
        return Vec::new();
    }
    let others_taken = view.rows.iter().any(|r| {
        matches!(&r.key, CategoryLabel::Named(name) if name == CategoryLabel::Others.as_str())
    });

    let mut angle = FRAC_PI_2;
    view.rows
        .iter()
        .map(|r| {
            let fraction = r.crime_count as f64 / total as f64;
            let sweep = fraction * TAU;
            let slice = PieSlice {
                label: match &r.key {
                    CategoryLabel::Others if others_taken => REMAINING_LABEL.to_string(),
                    key => key.to_string(),
                },
                value: r.crime_count,
                start_angle: angle,
                sweep,
                percent_label: format!("{:.1}%", fraction * 100.0),
            };
            angle += sweep;
            slice
        })
        .collect()
}

pub fn trend_points(view: &DerivedView<i64>) -> Vec<[f64; 2]> {
    view.rows
        .iter()
        .map(|r| [r.key as f64, r.crime_count as f64])
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub label: String,
    pub lat: f64,
    pub lon: f64,
    pub crime_count: i64,
}

pub fn station_map_points(view: &DerivedView<StationLocation>) -> Vec<MapPoint> {
    view.rows
        .iter()
        .map(|r| MapPoint {
            label: r.key.station.clone(),
            lat: r.key.location_y,
            lon: r.key.location_x,
            crime_count: r.crime_count,
        })
        .collect()
}

pub fn hotspot_map_points(view: &DerivedView<GeoPoint>) -> Vec<MapPoint> {
    view.rows
        .iter()
        .enumerate()
        .map(|(rank, r)| MapPoint {
            label: format!("#{}", rank + 1),
            lat: r.key.location_y,
            lon: r.key.location_x,
            crime_count: r.crime_count,
        })
        .collect()
}
