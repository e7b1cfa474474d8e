use crate::core::types::{Post, Timespan};

pub fn in_timespan(posts: &[Post], timespan: &Timespan) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| timespan.contains(post.timestamp))
        .cloned()
        .collect()
}
