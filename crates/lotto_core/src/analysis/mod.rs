//! # Analysis Module
//!
//! Aggregate statistics over draw history, all pure functions over slices.
//!
//! ## Submodules
//!
//! - `frequency` - full-range frequency tables and hottest-value selection
//! - `distribution` - odd/even ratio, zone and shape distributions
//! - `trend` - sum trend over the recent window

pub mod distribution;
pub mod frequency;
pub mod trend;

pub use distribution::{
    odd_even_distribution, shape_distribution, zone_distribution, RatioBucket, ShapeCount,
    ZoneCount,
};
pub use frequency::{
    hottest, main_number_frequency, position_digit_frequency, special_number_frequency,
    FrequencyEntry,
};
pub use trend::{sum_trend, sum_trend_window, SumTrend, SUM_TREND_WINDOW};
