pub mod creation;
pub mod loader;

pub use creation::create_word;
pub use loader::{fetch_words, load_words};
