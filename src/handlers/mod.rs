pub mod admin;
pub mod requests;
pub mod search;
pub mod status;
