use crate::core::types::{Post, Timespan};

/// Smallest timespan covering every post's timestamp. `None` for an empty feed.
pub fn feed_timespan(posts: &[Post]) -> Option<Timespan> {
    let first = posts.first()?.timestamp;
    let (start, end) = posts.iter().skip(1).fold((first, first), |(lo, hi), post| {
        (lo.min(post.timestamp), hi.max(post.timestamp))
    });
    Timespan::new(start, end).ok()
}
