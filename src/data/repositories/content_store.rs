use lazy_static::lazy_static;
use regex::Regex;
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::json;
use std::future::Future;

use crate::config::StoreConfig;
use crate::data::models::{
    DictionaryEntry, MutateResponse, NewDictionaryEntry, NewDocument, QueryResponse, RemoteEntry,
    StoreError, validate_remote_entries,
};

lazy_static! {
    static ref PROJECT_ID_RE: Regex = Regex::new(r"^[a-z0-9-]+$").unwrap();
    static ref DATASET_RE: Regex = Regex::new(r"^[a-z0-9][a-z0-9_-]*$").unwrap();
}

const ENTRY_QUERY: &str = r#"*[_type == $type]{
  _id,
  english,
  chinese,
  thai,
  romanized,
  pinyin,
  "audioUrl": coalesce(audioUrl, audio.asset->url)
}"#;

/// Remote source of dictionary documents.
pub trait ContentStore {
    /// All dictionary entries, already validated, in store order.
    fn fetch_entries(&self) -> impl Future<Output = Result<Vec<DictionaryEntry>, StoreError>> + Send;

    /// Creates a dictionary document and returns its id.
    fn create_entry(
        &self,
        entry: &NewDictionaryEntry,
    ) -> impl Future<Output = Result<String, StoreError>> + Send;

    fn can_write(&self) -> bool;
}

/// HTTP client for a Sanity-style content API.
#[derive(Debug, Clone)]
pub struct SanityStore {
    http: Client,
    query_url: Url,
    mutate_url: Url,
    token: Option<String>,
    entry_type: String,
    type_param: String,
}

impl SanityStore {
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        if config.project_id.is_empty() {
            return Err(StoreError::Configuration("project id is not set".into()));
        }
        if !PROJECT_ID_RE.is_match(&config.project_id) {
            return Err(StoreError::Configuration(format!(
                "invalid project id '{}'",
                config.project_id
            )));
        }
        if !DATASET_RE.is_match(&config.dataset) {
            return Err(StoreError::Configuration(format!(
                "invalid dataset '{}'",
                config.dataset
            )));
        }

        let version = config.api_version.trim_start_matches('v');
        let base = format!(
            "https://{}.api.sanity.io/v{}/data/",
            config.project_id, version
        );
        let parse = |path: String| {
            Url::parse(&base)
                .and_then(|base| base.join(&path))
                .map_err(|e| StoreError::Configuration(format!("invalid store url: {}", e)))
        };
        let query_url = parse(format!("query/{}", config.dataset))?;
        let mutate_url = parse(format!("mutate/{}", config.dataset))?;

        let type_param = serde_json::to_string(&config.entry_type)
            .map_err(|e| StoreError::Configuration(e.to_string()))?;

        let http = Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| StoreError::Configuration(format!("http client: {}", e)))?;

        Ok(Self {
            http,
            query_url,
            mutate_url,
            token: config.token.clone(),
            entry_type: config.entry_type.clone(),
            type_param,
        })
    }

    pub(crate) async fn create_document<T>(
        &self,
        doc_type: &str,
        fields: &T,
    ) -> Result<String, StoreError>
    where
        T: Serialize + Sync,
    {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| StoreError::Configuration("no write token configured".into()))?;

        let document = NewDocument { doc_type, fields };
        let body = json!({ "mutations": [{ "create": document }] });

        let response = self
            .http
            .post(self.mutate_url.clone())
            .query(&[("returnIds", "true")])
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(StoreError::RemoteWrite)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected {
                operation: "create",
                status,
            });
        }

        let parsed: MutateResponse = response.json().await.map_err(StoreError::RemoteWrite)?;
        parsed
            .results
            .into_iter()
            .next()
            .map(|result| result.id)
            .ok_or_else(|| StoreError::MalformedResponse("mutation returned no document id".into()))
    }
}

impl ContentStore for SanityStore {
    async fn fetch_entries(&self) -> Result<Vec<DictionaryEntry>, StoreError> {
        let mut request = self
            .http
            .get(self.query_url.clone())
            .query(&[("query", ENTRY_QUERY), ("$type", self.type_param.as_str())]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(StoreError::RemoteFetch)?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected {
                operation: "query",
                status,
            });
        }

        let body: QueryResponse<Vec<RemoteEntry>> =
            response.json().await.map_err(StoreError::RemoteFetch)?;
        Ok(validate_remote_entries(body.result))
    }

    async fn create_entry(&self, entry: &NewDictionaryEntry) -> Result<String, StoreError> {
        self.create_document(&self.entry_type, entry).await
    }

    fn can_write(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config(project_id: &str, dataset: &str) -> StoreConfig {
        StoreConfig {
            project_id: project_id.into(),
            dataset: dataset.into(),
            api_version: "2023-05-03".into(),
            token: None,
            entry_type: "word".into(),
        }
    }

    #[rstest]
    #[case("", "production")]
    #[case("fallback!", "production")]
    #[case("My Project", "production")]
    #[case("abc123", "")]
    #[case("abc123", "../admin")]
    fn rejects_invalid_configuration(#[case] project_id: &str, #[case] dataset: &str) {
        assert!(matches!(
            SanityStore::from_config(&config(project_id, dataset)),
            Err(StoreError::Configuration(_))
        ));
    }

    #[test]
    fn builds_endpoint_urls() {
        let store = SanityStore::from_config(&config("abc-123", "production")).unwrap();
        assert_eq!(
            store.query_url.as_str(),
            "https://abc-123.api.sanity.io/v2023-05-03/data/query/production"
        );
        assert_eq!(
            store.mutate_url.as_str(),
            "https://abc-123.api.sanity.io/v2023-05-03/data/mutate/production"
        );
        assert_eq!(store.type_param, "\"word\"");
        assert!(!store.can_write());
    }

    #[tokio::test]
    async fn writes_need_a_token() {
        let store = SanityStore::from_config(&config("abc-123", "production")).unwrap();
        let result = store.create_document("wordRequest", &json!({ "word": "mango" })).await;
        assert!(matches!(result, Err(StoreError::Configuration(_))));
    }
}
