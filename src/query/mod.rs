pub mod builder;
pub mod parser;

pub use builder::FeedQuery;
pub use parser::QueryParser;
