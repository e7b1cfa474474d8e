pub mod core;
pub mod extract;
pub mod filters;
pub mod query;

pub use crate::core::{FeedError, Post, Result, Timespan};

pub use crate::filters::{containing, in_timespan, matches_author, tokenize, written_by};

pub use crate::extract::{feed_timespan, mentioned_users};

pub use crate::query::{FeedQuery, QueryParser};

pub mod prelude {
    pub use crate::core::{Post, Result, Timespan};
    pub use crate::query::{FeedQuery, QueryParser};
}
