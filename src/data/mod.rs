//! Data module - CSV loading, aggregation and overview

mod aggregator;
mod loader;
mod overview;
pub mod schema;
mod views;

pub use aggregator::{AggregationError, AnalysisViews, CATEGORY_LIMIT};
pub use loader::{DatasetLoader, DatasetStatus, Unavailable};
pub use overview::DatasetOverview;
pub use views::{CategoryLabel, DerivedView, GeoPoint, StationLocation, ViewRow};
