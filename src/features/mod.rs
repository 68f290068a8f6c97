pub mod errors;
pub mod requests;
pub mod search;
pub mod words;
