use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::RequestLogMode;
use crate::data::models::{StoreError, WordRequest};
use crate::data::repositories::{ContentStore, SanityStore};

const WORD_REQUEST_TYPE: &str = "wordRequest";

/// Append-only sink for word requests. Nothing here reads them back.
pub trait RequestLog {
    fn append(&self, request: &WordRequest) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Process-local request log, lost on restart. It is never pruned, so it
/// grows with every submission for the life of the process; set
/// `REQUEST_LOG=remote` with a write token for long-running deployments.
#[derive(Debug, Clone, Default)]
pub struct MemoryRequestLog {
    requests: Arc<Mutex<Vec<WordRequest>>>,
}

impl MemoryRequestLog {
    pub async fn len(&self) -> usize {
        self.requests.lock().await.len()
    }

    #[cfg(test)]
    pub async fn snapshot(&self) -> Vec<WordRequest> {
        self.requests.lock().await.clone()
    }
}

impl RequestLog for MemoryRequestLog {
    async fn append(&self, request: &WordRequest) -> Result<(), StoreError> {
        self.requests.lock().await.push(request.clone());
        Ok(())
    }
}

impl RequestLog for SanityStore {
    async fn append(&self, request: &WordRequest) -> Result<(), StoreError> {
        let id = self.create_document(WORD_REQUEST_TYPE, request).await?;
        log::debug!("Stored word request as {}", id);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum RequestLogBackend {
    Remote(SanityStore),
    Memory(MemoryRequestLog),
}

impl RequestLogBackend {
    /// Picks the sink for `mode`. Remote logging needs a store that can write.
    pub fn select(mode: RequestLogMode, store: Option<&SanityStore>) -> Self {
        let writable = store.filter(|s| s.can_write());
        match (mode, writable) {
            (RequestLogMode::Memory, _) => Self::memory(),
            (RequestLogMode::Auto | RequestLogMode::Remote, Some(store)) => {
                RequestLogBackend::Remote(store.clone())
            }
            (RequestLogMode::Remote, None) => {
                log::warn!("Remote request log needs a writable content store, keeping requests in memory");
                Self::memory()
            }
            (RequestLogMode::Auto, None) => Self::memory(),
        }
    }

    pub fn memory() -> Self {
        RequestLogBackend::Memory(MemoryRequestLog::default())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RequestLogBackend::Remote(_) => "remote",
            RequestLogBackend::Memory(_) => "memory",
        }
    }
}

impl RequestLog for RequestLogBackend {
    async fn append(&self, request: &WordRequest) -> Result<(), StoreError> {
        match self {
            RequestLogBackend::Remote(store) => store.append(request).await,
            RequestLogBackend::Memory(log) => log.append(request).await,
        }
    }
}
