use crate::error::StatsResult;
use crate::models::{Dimension, PieSlice, RatingBar};
use crate::services::colors::{ColorAssigner, OTHER_COLOR};
use crate::services::distribution::DistributionAggregator;
use crate::services::rating::RatingAggregator;
use crate::store::RecordStore;

/// Builds the distribution view of a dimension, ready for a pie renderer.
///
/// Snapshots the store once, aggregates, and pairs each slice with a color
/// from the assigner. The `"Other"` rollup always gets the fixed gray so it
/// reads as a remainder rather than a category of its own.
pub fn pie_chart(
    store: &dyn RecordStore,
    dimension: Dimension,
    colors: &mut dyn ColorAssigner,
) -> StatsResult<Vec<PieSlice>> {
    let records = store.snapshot()?;
    tracing::debug!(
        dimension = %dimension,
        records = records.len(),
        "Building pie chart"
    );

    let slices = DistributionAggregator::new(&records).aggregate(dimension);
    let pie = slices
        .into_iter()
        .map(|slice| {
            let color = if slice.is_other_rollup() {
                OTHER_COLOR
            } else {
                colors.color_for(&slice.label)
            };
            PieSlice {
                proportion: slice.proportion,
                label: slice.label,
                color,
            }
        })
        .collect();

    Ok(pie)
}

/// Builds the mean-rating view of a dimension for a bar renderer
pub fn bar_chart(store: &dyn RecordStore, dimension: Dimension) -> StatsResult<Vec<RatingBar>> {
    let records = store.snapshot()?;
    tracing::debug!(
        dimension = %dimension,
        records = records.len(),
        "Building bar chart"
    );

    Ok(RatingAggregator::new(&records).aggregate(dimension))
}
