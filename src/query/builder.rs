use crate::core::types::{Post, Timespan};
use crate::filters::{containing, in_timespan, written_by};

#[derive(Debug, Clone, Default)]
pub struct FeedQuery {
    pub author: Option<String>,
    pub timespan: Option<Timespan>,
    pub words: Vec<String>,
}

impl FeedQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_timespan(mut self, timespan: Timespan) -> Self {
        self.timespan = Some(timespan);
        self
    }

    pub fn with_words(mut self, words: Vec<String>) -> Self {
        self.words = words;
        self
    }

    /// Runs the configured filters in sequence. An unconstrained query
    /// returns the feed unchanged.
    pub fn apply(&self, posts: &[Post]) -> Vec<Post> {
        let mut result = posts.to_vec();

        if let Some(author) = &self.author {
            result = written_by(&result, author);
        }
        if let Some(timespan) = &self.timespan {
            result = in_timespan(&result, timespan);
        }
        if !self.words.is_empty() {
            result = containing(&result, &self.words);
        }

        log::debug!(
            "query matched {} of {} posts",
            result.len(),
            posts.len()
        );
        result
    }
}
