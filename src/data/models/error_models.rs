use reqwest::StatusCode;
use thiserror::Error;

// Content store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Content store misconfigured: {0}")]
    Configuration(String),
    #[error("Content store read failed: {0}")]
    RemoteFetch(#[source] reqwest::Error),
    #[error("Content store write failed: {0}")]
    RemoteWrite(#[source] reqwest::Error),
    #[error("Content store rejected {operation} with status {status}")]
    Rejected {
        operation: &'static str,
        status: StatusCode,
    },
    #[error("Unexpected content store response: {0}")]
    MalformedResponse(String),
}

// Word request submission errors
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("{0}")]
    Validation(String),
}

// Admin word creation errors
#[derive(Error, Debug)]
pub enum CreateWordError {
    #[error("{0}")]
    Validation(String),
    #[error("No content store token provided. Cannot create content.")]
    MissingToken,
    #[error("Content store is not configured")]
    StoreUnavailable,
    #[error(transparent)]
    Store(#[from] StoreError),
}
