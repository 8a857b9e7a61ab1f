use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single watched-movie record as the user saved it.
///
/// The record store is the sole owner of these; the aggregation services only
/// ever read them. Optional fields stay optional all the way through — the
/// categorizer decides per dimension whether an absent value becomes an
/// "Unknown …" bucket or drops the record from that dimension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchedMovie {
    /// Unique identifier for the record
    pub id: Uuid,
    /// Movie title as shown in the user's list
    pub title: Option<String>,
    /// Primary genre reported by the upstream catalog
    pub genre: Option<String>,
    /// Credited director
    pub director: Option<String>,
    /// Top-billed cast, stored as one comma-delimited string
    pub cast: Option<String>,
    /// Production budget in dollars; 0 means the catalog had no figure
    pub budget: u64,
    /// Theatrical release date
    pub release_date: Option<NaiveDate>,
    /// Date the user watched the movie
    pub date_watched: Option<NaiveDate>,
    /// Whether the user saw it in a theater
    pub watched_in_theaters: bool,
    /// User rating, 0 through 10
    pub rating: f64,
}

impl WatchedMovie {
    /// Creates a record with a fresh id and every optional field empty
    pub fn new(rating: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: None,
            genre: None,
            director: None,
            cast: None,
            budget: 0,
            release_date: None,
            date_watched: None,
            watched_in_theaters: false,
            rating,
        }
    }

    /// The distinct actor names in this record's cast string.
    ///
    /// Splits on `,`, trims each name, and drops empties and repeats, so a
    /// record contributes at most once per actor no matter how the upstream
    /// catalog formatted the list.
    pub fn cast_members(&self) -> Vec<String> {
        let mut members: Vec<String> = Vec::new();
        if let Some(cast) = &self.cast {
            for name in cast.split(',') {
                let name = name.trim();
                if !name.is_empty() && !members.iter().any(|m| m == name) {
                    members.push(name.to_string());
                }
            }
        }
        members
    }

    /// Parses a `YYYY-MM-DD` date string from an external boundary.
    ///
    /// Malformed input is treated the same as a missing field: `None`, never
    /// an error.
    pub fn parse_date(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
    }
}
