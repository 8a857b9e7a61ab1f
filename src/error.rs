/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    #[error("Record store error: {0}")]
    Store(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

pub type StatsResult<T> = Result<T, StatsError>;
