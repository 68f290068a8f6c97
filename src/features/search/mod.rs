pub mod engine;

pub use engine::{DEFAULT_SUGGESTION_LIMIT, SearchEngine};
