use crate::core::types::Post;

pub fn matches_author(post: &Post, username: &str) -> bool {
    post.author.to_lowercase() == username.to_lowercase()
}

pub fn written_by(posts: &[Post], username: &str) -> Vec<Post> {
    let wanted = username.to_lowercase();
    posts
        .iter()
        .filter(|post| post.author.to_lowercase() == wanted)
        .cloned()
        .collect()
}
