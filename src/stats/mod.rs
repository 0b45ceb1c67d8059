//! Stats module - descriptive statistics

mod calculator;

pub use calculator::{DescriptiveStats, StatsCalculator};
