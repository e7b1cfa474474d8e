pub mod author;
pub mod timespan;
pub mod words;

pub use author::{matches_author, written_by};
pub use timespan::in_timespan;
pub use words::{contains_any_word, containing, tokenize};
