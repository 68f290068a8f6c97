pub mod submission;

pub use submission::submit_request;
