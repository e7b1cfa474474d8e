use crate::core::error::{FeedError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Post {
    pub fn new(id: u64, author: impl Into<String>, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            author: author.into(),
            text: text.into(),
            timestamp,
        }
    }
}

/// Closed interval of instants. `end >= start` always holds; construction
/// rejects inverted intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timespan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Timespan {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end < start {
            return Err(FeedError::InvalidTimespan { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Inclusive on both boundaries.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}
