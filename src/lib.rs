//! Aggregation engine for a personal movie-watching tracker.
//!
//! Takes the flat collection of [`models::WatchedMovie`] records a user has
//! saved and turns it into chart-ready series: categorical distributions for
//! pie charts and mean ratings per category for bar charts, across seven
//! grouping dimensions. Fetching, persistence, and rendering live with the
//! caller; this crate is the pure computation in between.

pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use error::{StatsError, StatsResult};
pub use models::{Dimension, DistributionSlice, PieSlice, RatingBar, Rgb, WatchedMovie};
pub use services::{bar_chart, pie_chart, DistributionAggregator, RatingAggregator};
pub use store::{InMemoryRecordStore, RecordStore};
