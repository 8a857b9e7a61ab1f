use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The seven fields (or derived fields) records can be grouped by.
///
/// A closed enum rather than a string key, so a dispatch over dimensions is
/// exhaustiveness-checked instead of needing a fallback branch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Genre,
    Director,
    Cast,
    InTheaters,
    Budget,
    DateWatched,
    ReleaseDate,
}

impl Dimension {
    /// Every supported dimension, in presentation order
    pub const ALL: [Dimension; 7] = [
        Dimension::Genre,
        Dimension::Director,
        Dimension::Cast,
        Dimension::InTheaters,
        Dimension::Budget,
        Dimension::DateWatched,
        Dimension::ReleaseDate,
    ];

    /// Category cap for the distribution (pie) view, `None` when the
    /// dimension's category set is small or naturally bounded
    pub fn distribution_cap(self) -> Option<usize> {
        match self {
            Dimension::Genre | Dimension::Director | Dimension::Cast => Some(7),
            Dimension::InTheaters
            | Dimension::Budget
            | Dimension::DateWatched
            | Dimension::ReleaseDate => None,
        }
    }

    /// Category cap for the mean-rating (bar) view; tighter than the
    /// distribution cap because bar charts fit fewer categories
    pub fn rating_cap(self) -> Option<usize> {
        match self {
            Dimension::Genre | Dimension::Director | Dimension::Cast => Some(4),
            Dimension::InTheaters
            | Dimension::Budget
            | Dimension::DateWatched
            | Dimension::ReleaseDate => None,
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dimension::Genre => "Genre",
            Dimension::Director => "Director",
            Dimension::Cast => "Cast",
            Dimension::InTheaters => "In Theaters",
            Dimension::Budget => "Budget",
            Dimension::DateWatched => "Date Watched",
            Dimension::ReleaseDate => "Release Date",
        };
        write!(f, "{}", name)
    }
}
