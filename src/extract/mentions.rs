use crate::core::types::Post;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// A mention is '@' followed by username characters, where the '@' is not
// itself preceded by a username character (rules out email addresses).
static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^A-Za-z0-9_-])@([A-Za-z0-9_-]+)").unwrap());

/// Usernames `@`-mentioned anywhere in the feed, lowercased.
pub fn mentioned_users(posts: &[Post]) -> HashSet<String> {
    posts
        .iter()
        .flat_map(|post| MENTION_RE.captures_iter(&post.text))
        .map(|caps| caps[1].to_lowercase())
        .collect()
}
