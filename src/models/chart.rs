use serde::{Deserialize, Serialize};

/// Label of the synthetic rollup category holding everything beyond a
/// dimension's cap. Consumers key off this exact string.
pub const OTHER_LABEL: &str = "Other";

/// One category's share of the collection in the distribution (pie) view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionSlice {
    /// Category label (e.g. "Drama", "High Budget", "1990s", "Other")
    pub label: String,
    /// Number of contributing records (for Cast, record-actor memberships)
    pub count: usize,
    /// `count` divided by the total record count
    pub proportion: f64,
}

impl DistributionSlice {
    /// Whether this is the rollup of categories beyond the cap
    pub fn is_other_rollup(&self) -> bool {
        self.label == OTHER_LABEL
    }
}

/// One category in the mean-rating (bar) view.
///
/// `value` is a mean rating in `[0, 10]` — except for the `"Other"` entry of
/// the capped dimensions, where it is the raw count of records in the
/// excluded categories. That unit mismatch is long-standing charting behavior
/// consumers render as-is, so it is kept rather than silently corrected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingBar {
    /// Category label
    pub label: String,
    /// Mean rating, or the excluded-record count for the "Other" entry
    pub value: f64,
}

impl RatingBar {
    /// Whether `value` is the excluded-record count rather than a mean
    pub fn is_other_rollup(&self) -> bool {
        self.label == OTHER_LABEL
    }
}

/// An RGB color attached to a chart element
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A distribution slice with its assigned color, ready for a pie renderer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PieSlice {
    /// Share of the whole pie
    pub proportion: f64,
    /// Category label for the legend
    pub label: String,
    /// Slice fill color
    pub color: Rgb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_rollup_detection() {
        let other = DistributionSlice {
            label: OTHER_LABEL.to_string(),
            count: 4,
            proportion: 0.4,
        };
        assert!(other.is_other_rollup());

        let drama = RatingBar {
            label: "Drama".to_string(),
            value: 7.0,
        };
        assert!(!drama.is_other_rollup());
    }

    #[test]
    fn test_slice_serialization() {
        let slice = DistributionSlice {
            label: "Drama".to_string(),
            count: 2,
            proportion: 0.5,
        };
        let json = serde_json::to_string(&slice).unwrap();
        assert_eq!(json, r#"{"label":"Drama","count":2,"proportion":0.5}"#);
    }
}
