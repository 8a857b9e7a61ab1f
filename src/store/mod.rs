use uuid::Uuid;

use crate::error::{StatsError, StatsResult};
use crate::models::WatchedMovie;

/// Read interface the aggregation services consume.
///
/// `snapshot` returns an owned copy taken in one call, so a query's ranking
/// pass and mean pass always see the same records even if the store mutates
/// between queries.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore {
    /// Every watched-movie record, as one immutable snapshot
    fn snapshot(&self) -> StatsResult<Vec<WatchedMovie>>;
}

/// Record store holding the user's collection in memory.
///
/// Sole owner of the records: the engine only ever reads snapshots. `add` is
/// the one place a record enters the collection, so it is where the rating
/// invariant is enforced.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Vec<WatchedMovie>,
}

impl InMemoryRecordStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from existing records, validating each
    pub fn with_records(records: Vec<WatchedMovie>) -> StatsResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    /// Adds a record, rejecting ratings outside `[0, 10]`
    pub fn add(&mut self, movie: WatchedMovie) -> StatsResult<()> {
        if !movie.rating.is_finite() || !(0.0..=10.0).contains(&movie.rating) {
            return Err(StatsError::InvalidRecord(format!(
                "rating {} is outside 0..=10",
                movie.rating
            )));
        }
        self.records.push(movie);
        Ok(())
    }

    /// Removes the record with the given id; returns whether one was found
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|movie| movie.id != id);
        self.records.len() < before
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn snapshot(&self) -> StatsResult<Vec<WatchedMovie>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_snapshot() {
        let mut store = InMemoryRecordStore::new();
        store.add(WatchedMovie::new(7.0)).unwrap();
        store.add(WatchedMovie::new(3.5)).unwrap();

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_rejects_out_of_range_rating() {
        let mut store = InMemoryRecordStore::new();
        let result = store.add(WatchedMovie::new(10.5));
        assert!(matches!(result, Err(StatsError::InvalidRecord(_))));

        let result = store.add(WatchedMovie::new(f64::NAN));
        assert!(matches!(result, Err(StatsError::InvalidRecord(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_rating_bounds_are_inclusive() {
        let mut store = InMemoryRecordStore::new();
        store.add(WatchedMovie::new(0.0)).unwrap();
        store.add(WatchedMovie::new(10.0)).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = InMemoryRecordStore::new();
        let movie = WatchedMovie::new(6.0);
        let id = movie.id;
        store.add(movie).unwrap();

        assert!(store.remove(id));
        assert!(!store.remove(id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let mut store = InMemoryRecordStore::new();
        let movie = WatchedMovie::new(6.0);
        let id = movie.id;
        store.add(movie).unwrap();

        let snapshot = store.snapshot().unwrap();
        store.remove(id);
        assert_eq!(snapshot.len(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_with_records_validates() {
        let result = InMemoryRecordStore::with_records(vec![
            WatchedMovie::new(5.0),
            WatchedMovie::new(-1.0),
        ]);
        assert!(matches!(result, Err(StatsError::InvalidRecord(_))));
    }
}
