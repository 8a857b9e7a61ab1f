use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{Dimension, RatingBar, WatchedMovie, OTHER_LABEL};
use crate::services::categorizer;
use crate::services::ranking::{rank_by_count, split_top};

/// Computes the mean rating per category for a dimension.
///
/// Bars are ordered by descending mean (label ascending on ties). For the
/// capped dimensions the trailing `"Other"` bar carries the raw count of
/// records in the excluded categories, not a mean — see
/// [`RatingBar::is_other_rollup`].
pub struct RatingAggregator<'a> {
    records: &'a [WatchedMovie],
}

impl<'a> RatingAggregator<'a> {
    /// Creates an aggregator over an immutable record snapshot
    pub fn new(records: &'a [WatchedMovie]) -> Self {
        Self { records }
    }

    /// Produces the mean-rating view for one dimension
    pub fn aggregate(&self, dimension: Dimension) -> Vec<RatingBar> {
        if self.records.is_empty() {
            return Vec::new();
        }

        tracing::debug!(
            dimension = %dimension,
            records = self.records.len(),
            "Computing mean ratings"
        );

        match dimension {
            Dimension::Genre | Dimension::Director | Dimension::Cast => self.capped_means(dimension),
            Dimension::InTheaters
            | Dimension::Budget
            | Dimension::DateWatched
            | Dimension::ReleaseDate => self.running_means(dimension),
        }
    }

    /// Two-pass view for the high-cardinality dimensions: rank categories by
    /// record count, keep the top few, then re-scan the records for each kept
    /// category to average its ratings.
    fn capped_means(&self, dimension: Dimension) -> Vec<RatingBar> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for record in self.records {
            for label in categorizer::rating_memberships(dimension, record) {
                *counts.entry(label).or_insert(0) += 1;
            }
        }

        let ranked = rank_by_count(counts);
        let (top, excluded) = split_top(ranked, dimension.rating_cap());

        let mut bars: Vec<RatingBar> = Vec::new();
        for (label, _) in &top {
            let mut rating_sum = 0.0;
            let mut matching = 0usize;
            for record in self.records {
                let member = categorizer::rating_memberships(dimension, record)
                    .iter()
                    .any(|m| m == label);
                if member {
                    rating_sum += record.rating;
                    matching += 1;
                }
            }
            if matching > 0 {
                bars.push(RatingBar {
                    label: label.clone(),
                    value: rating_sum / matching as f64,
                });
            }
        }

        sort_by_mean(&mut bars);

        // Everything past the cap rolls into one trailing entry whose value
        // is the excluded record count, not a mean. Consumers chart it as-is.
        if excluded > 0 {
            bars.push(RatingBar {
                label: OTHER_LABEL.to_string(),
                value: excluded as f64,
            });
        }

        bars
    }

    /// Single-pass view for the bounded dimensions: accumulate a running
    /// (sum, count) per category and emit every category that saw a record.
    fn running_means(&self, dimension: Dimension) -> Vec<RatingBar> {
        let mut accumulator: HashMap<String, (f64, usize)> = HashMap::new();
        for record in self.records {
            for label in categorizer::rating_memberships(dimension, record) {
                let entry = accumulator.entry(label).or_insert((0.0, 0));
                entry.0 += record.rating;
                entry.1 += 1;
            }
        }

        let mut bars: Vec<RatingBar> = accumulator
            .into_iter()
            .filter(|(_, (_, count))| *count > 0)
            .map(|(label, (rating_sum, count))| RatingBar {
                label,
                value: rating_sum / count as f64,
            })
            .collect();

        sort_by_mean(&mut bars);
        bars
    }
}

fn sort_by_mean(bars: &mut [RatingBar]) {
    bars.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });
}
