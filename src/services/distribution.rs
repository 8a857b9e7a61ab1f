use std::collections::HashMap;

use crate::models::{Dimension, DistributionSlice, WatchedMovie, OTHER_LABEL};
use crate::services::categorizer::{self, IN_THEATERS, OUT_OF_THEATERS};
use crate::services::ranking::{rank_by_count, split_top};

/// Computes how the collection splits across a dimension's categories.
///
/// Output slices are ordered by descending count (label ascending on ties)
/// with the `"Other"` rollup, when present, last. Proportions divide by the
/// total record count — for Cast, where one record can feed several actor
/// buckets, they can therefore sum past 1.0, which is how the charts have
/// always presented that dimension.
pub struct DistributionAggregator<'a> {
    records: &'a [WatchedMovie],
}

impl<'a> DistributionAggregator<'a> {
    /// Creates an aggregator over an immutable record snapshot
    pub fn new(records: &'a [WatchedMovie]) -> Self {
        Self { records }
    }

    /// Produces the distribution view for one dimension
    pub fn aggregate(&self, dimension: Dimension) -> Vec<DistributionSlice> {
        if self.records.is_empty() {
            return Vec::new();
        }

        tracing::debug!(
            dimension = %dimension,
            records = self.records.len(),
            "Computing distribution"
        );

        let mut counts: HashMap<String, usize> = HashMap::new();
        for record in self.records {
            for label in categorizer::distribution_memberships(dimension, record) {
                *counts.entry(label).or_insert(0) += 1;
            }
        }

        // The theater flag is exhaustive over its two labels: a label no
        // record hit still shows as a zero-count slice.
        if dimension == Dimension::InTheaters {
            for label in [IN_THEATERS, OUT_OF_THEATERS] {
                counts.entry(label.to_string()).or_insert(0);
            }
        }

        let ranked = rank_by_count(counts);
        let (top, excluded) = split_top(ranked, dimension.distribution_cap());

        let total = self.records.len() as f64;
        let mut slices: Vec<DistributionSlice> = top
            .into_iter()
            .map(|(label, count)| DistributionSlice {
                label,
                count,
                proportion: count as f64 / total,
            })
            .collect();

        if excluded > 0 {
            slices.push(DistributionSlice {
                label: OTHER_LABEL.to_string(),
                count: excluded,
                proportion: excluded as f64 / total,
            });
        }

        slices
    }
}
