//! Derived view types produced by the aggregation engine.

use serde::{Serialize, Serializer};
use std::fmt;

/// How the rows of a view are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewOrder {
    /// Summed count descending, ties in first-seen key order.
    CountDescending,
    /// Grouping key ascending.
    KeyAscending,
}

/// One grouped key and its summed crime count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewRow<K> {
    pub key: K,
    pub crime_count: i64,
}

impl<K> ViewRow<K> {
    pub fn new(key: K, crime_count: i64) -> Self {
        Self { key, crime_count }
    }
}

/// Grouped-and-summed table plus its ordering and truncation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView<K> {
    pub rows: Vec<ViewRow<K>>,
    pub order: ViewOrder,
    /// Truncation point, if the view is a top-N view.
    pub limit: Option<usize>,
    /// Number of distinct keys before truncation.
    pub group_count: usize,
}

impl<K> DerivedView<K> {
    /// Keep every group, already in key order.
    pub fn keyed(rows: Vec<ViewRow<K>>) -> Self {
        let group_count = rows.len();
        Self {
            rows,
            order: ViewOrder::KeyAscending,
            limit: None,
            group_count,
        }
    }

    /// Keep the first `limit` groups of rows already ranked by count.
    pub fn ranked(mut rows: Vec<ViewRow<K>>, limit: usize) -> Self {
        let group_count = rows.len();
        rows.truncate(limit);
        Self {
            rows,
            order: ViewOrder::CountDescending,
            limit: Some(limit),
            group_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Sum of the counts of the rows in this view.
    pub fn total(&self) -> i64 {
        self.rows.iter().map(|r| r.crime_count).sum()
    }
}

/// Pie slice key: a named category or the residual bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryLabel {
    Named(String),
    Others,
}

impl CategoryLabel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A police station at one coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationLocation {
    pub station: String,
    pub location_x: f64,
    pub location_y: f64,
}

/// A coordinate pair; `location_x` is longitude, `location_y` latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub location_x: f64,
    pub location_y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_truncates_and_keeps_group_count() {
        let rows = (0..5).map(|i| ViewRow::new(i, 10 - i)).collect();
        let view = DerivedView::ranked(rows, 3);

        assert_eq!(view.len(), 3);
        assert_eq!(view.group_count, 5);
        assert_eq!(view.limit, Some(3));
        assert_eq!(view.total(), 10 + 9 + 8);
    }

    #[test]
    fn test_keyed_keeps_everything() {
        let view = DerivedView::keyed(vec![ViewRow::new(2020, 5), ViewRow::new(2021, 3)]);

        assert_eq!(view.order, ViewOrder::KeyAscending);
        assert_eq!(view.limit, None);
        assert_eq!(view.group_count, 2);
    }

    #[test]
    fn test_category_label_serializes_as_plain_string() {
        let json = serde_json::to_string(&vec![
            CategoryLabel::Named("Theft".to_string()),
            CategoryLabel::Others,
        ])
        .unwrap();

        assert_eq!(json, r#"["Theft","Others"]"#);
    }
}
