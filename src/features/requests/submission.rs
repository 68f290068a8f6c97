use validator::Validate;

use crate::data::models::{Language, RequestError, WordRequest, WordRequestForm};
use crate::data::repositories::RequestLog;

/// Validates the form and appends a pending request to `log`.
///
/// Only validation failures are returned. A failed log write is reported
/// and swallowed so the visitor is still acknowledged.
pub async fn submit_request<L>(log: &L, form: &WordRequestForm) -> Result<WordRequest, RequestError>
where
    L: RequestLog + Sync,
{
    form.validate()?;
    let language: Language = form
        .language
        .as_deref()
        .ok_or_else(|| RequestError::Validation("Language is required".into()))?
        .parse()?;

    let request = WordRequest::pending(&form.word, language);

    match log.append(&request).await {
        Ok(()) => log::info!("Word request received: {} ({})", request.word, request.language),
        Err(e) => log::error!("Failed to store word request '{}': {}", request.word, e),
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::StoreError;
    use crate::data::models::request_models::RequestStatus;
    use crate::data::repositories::request_log::MemoryRequestLog;
    use rstest::rstest;

    struct BrokenLog;

    impl RequestLog for BrokenLog {
        async fn append(&self, _request: &WordRequest) -> Result<(), StoreError> {
            Err(StoreError::MalformedResponse("disk on fire".into()))
        }
    }

    fn form(word: &str, language: Option<&str>) -> WordRequestForm {
        WordRequestForm {
            word: word.into(),
            language: language.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn accepted_request_is_pending_and_logged() {
        let log = MemoryRequestLog::default();
        let request = submit_request(&log, &form("  mango ", Some("chinese")))
            .await
            .unwrap();

        assert_eq!(request.word, "mango");
        assert_eq!(request.language, Language::Chinese);
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(log.snapshot().await, vec![request]);
    }

    #[rstest]
    #[case("", Some("english"))]
    #[case("   ", Some("english"))]
    #[case("mango", None)]
    #[case("mango", Some("thai"))]
    #[tokio::test]
    async fn invalid_requests_are_rejected(#[case] word: &str, #[case] language: Option<&str>) {
        let log = MemoryRequestLog::default();
        let result = submit_request(&log, &form(word, language)).await;
        assert!(matches!(result, Err(RequestError::Validation(_))));
        assert_eq!(log.len().await, 0);
    }

    #[tokio::test]
    async fn resubmitting_creates_duplicates() {
        let log = MemoryRequestLog::default();
        for _ in 0..2 {
            submit_request(&log, &form("durian", Some("english"))).await.unwrap();
        }
        assert_eq!(log.len().await, 2);
    }

    #[tokio::test]
    async fn write_failures_still_succeed() {
        let request = submit_request(&BrokenLog, &form("rambutan", Some("english"))).await;
        assert!(request.is_ok());
    }
}
