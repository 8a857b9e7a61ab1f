use std::collections::HashMap;

/// Orders a tally by descending count.
///
/// Equal counts order by label ascending so the same snapshot always ranks
/// the same way, whatever order the tally map iterated in.
pub(crate) fn rank_by_count(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Splits a ranked list at `cap`, returning the kept head and the summed
/// count of the excluded tail. `None` keeps everything.
pub(crate) fn split_top(
    ranked: Vec<(String, usize)>,
    cap: Option<usize>,
) -> (Vec<(String, usize)>, usize) {
    match cap {
        Some(cap) if ranked.len() > cap => {
            let excluded: usize = ranked[cap..].iter().map(|(_, count)| count).sum();
            let mut top = ranked;
            top.truncate(cap);
            (top, excluded)
        }
        _ => (ranked, 0),
    }
}
