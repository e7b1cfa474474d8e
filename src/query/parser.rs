use crate::core::error::{FeedError, Result};
use crate::core::types::Timespan;
use crate::query::builder::FeedQuery;
use chrono::{DateTime, Utc};

pub struct QueryParser;

impl QueryParser {
    /// Parses the `key:value` query syntax: `from:`/`author:` select an
    /// author, `since:`/`until:` take RFC 3339 instants and must appear
    /// together, and every bare token is a search word.
    pub fn parse(input: &str) -> Result<FeedQuery> {
        let mut query = FeedQuery::new();
        let mut since: Option<DateTime<Utc>> = None;
        let mut until: Option<DateTime<Utc>> = None;

        for part in input.split_whitespace() {
            match part.split_once(':') {
                Some((key, value)) => match key.to_lowercase().as_str() {
                    "from" | "author" => {
                        if value.is_empty() {
                            return Err(FeedError::InvalidQuery(
                                "Author cannot be empty".to_string(),
                            ));
                        }
                        query.author = Some(value.to_string());
                    }
                    "since" => {
                        since = Some(Self::parse_instant(value)?);
                    }
                    "until" => {
                        until = Some(Self::parse_instant(value)?);
                    }
                    _ => {
                        query.words.push(part.to_string());
                    }
                },
                None => {
                    query.words.push(part.to_string());
                }
            }
        }

        query.timespan = match (since, until) {
            (Some(start), Some(end)) => Some(Timespan::new(start, end)?),
            (None, None) => None,
            _ => {
                return Err(FeedError::InvalidQuery(
                    "since: and until: must be given together".to_string(),
                ));
            }
        };

        Ok(query)
    }

    fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
        Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
    }
}
