use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid timespan: end {end} is before start {start}")]
    InvalidTimespan {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<chrono::ParseError> for FeedError {
    fn from(err: chrono::ParseError) -> Self {
        FeedError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
