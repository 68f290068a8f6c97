pub mod content_store;
pub mod request_log;

pub use content_store::{ContentStore, SanityStore};
pub use request_log::{RequestLog, RequestLogBackend};
