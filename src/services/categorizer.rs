use chrono::Datelike;

use crate::models::{Dimension, WatchedMovie};

pub const UNKNOWN_GENRE: &str = "Unknown Genre";
pub const UNKNOWN_DIRECTOR: &str = "Unknown Director";
pub const IN_THEATERS: &str = "In Theaters";
pub const OUT_OF_THEATERS: &str = "Out of Theaters";
pub const LOW_BUDGET: &str = "Low Budget";
pub const MEDIUM_BUDGET: &str = "Medium Budget";
pub const HIGH_BUDGET: &str = "High Budget";
/// Unknown-budget label in the distribution view
pub const UNKNOWN_BUDGET_SHORT: &str = "Unknown";
/// Unknown-budget label in the mean-rating view
pub const UNKNOWN_BUDGET: &str = "Unknown Budget";

const MEDIUM_BUDGET_FLOOR: u64 = 50_000_000;
const HIGH_BUDGET_FLOOR: u64 = 100_000_000;

/// Category keys for `record` under `dimension`, using the distribution
/// view's labels.
///
/// Most dimensions yield exactly one key. Cast yields one key per distinct
/// actor (possibly none), and the calendar dimensions yield none when the
/// record has no usable date.
pub fn distribution_memberships(dimension: Dimension, record: &WatchedMovie) -> Vec<String> {
    memberships(dimension, record, UNKNOWN_BUDGET_SHORT)
}

/// Category keys for `record` under `dimension`, using the mean-rating
/// view's labels.
///
/// Identical to [`distribution_memberships`] except for the unknown-budget
/// label; the two views have always charted different literals and consumers
/// key off the exact strings.
pub fn rating_memberships(dimension: Dimension, record: &WatchedMovie) -> Vec<String> {
    memberships(dimension, record, UNKNOWN_BUDGET)
}

fn memberships(dimension: Dimension, record: &WatchedMovie, unknown_budget: &str) -> Vec<String> {
    match dimension {
        Dimension::Genre => {
            vec![record.genre.clone().unwrap_or_else(|| UNKNOWN_GENRE.to_string())]
        }
        Dimension::Director => {
            vec![record
                .director
                .clone()
                .unwrap_or_else(|| UNKNOWN_DIRECTOR.to_string())]
        }
        Dimension::Cast => record.cast_members(),
        Dimension::InTheaters => {
            let label = if record.watched_in_theaters {
                IN_THEATERS
            } else {
                OUT_OF_THEATERS
            };
            vec![label.to_string()]
        }
        Dimension::Budget => vec![budget_bucket(record.budget, unknown_budget).to_string()],
        Dimension::DateWatched => match record.date_watched {
            Some(date) => vec![date.format("%B").to_string()],
            None => Vec::new(),
        },
        Dimension::ReleaseDate => match record.release_date {
            Some(date) => vec![decade_label(date.year())],
            None => Vec::new(),
        },
    }
}

/// Buckets a raw budget figure. Zero is indistinguishable from "the catalog
/// had no number" and always lands in the unknown bucket.
fn budget_bucket(budget: u64, unknown: &str) -> &str {
    if budget == 0 {
        unknown
    } else if budget < MEDIUM_BUDGET_FLOOR {
        LOW_BUDGET
    } else if budget < HIGH_BUDGET_FLOOR {
        MEDIUM_BUDGET
    } else {
        HIGH_BUDGET
    }
}

fn decade_label(year: i32) -> String {
    format!("{}s", (year / 10) * 10)
}
