pub mod mentions;
pub mod span;

pub use mentions::mentioned_users;
pub use span::feed_timespan;
