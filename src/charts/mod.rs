//! Charts module - Chart models and rendering

pub mod model;
mod plotter;

pub use plotter::ChartPlotter;
