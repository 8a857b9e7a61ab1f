pub mod chart;
pub mod dimension;
pub mod movie;

pub use chart::{DistributionSlice, PieSlice, RatingBar, Rgb, OTHER_LABEL};
pub use dimension::Dimension;
pub use movie::WatchedMovie;
