pub mod entry_models;
pub mod error_models;
pub mod request_models;
pub mod search_models;
pub mod store_models;

pub use entry_models::{DictionaryEntry, Language, NewDictionaryEntry};
pub use error_models::{CreateWordError, RequestError, StoreError};
pub use request_models::{
    ApiResponse, CreateWordResponse, WordRequest, WordRequestForm,
};
pub use search_models::{SearchParams, SearchResult, SuggestParams, WordsResponse};
pub use store_models::{
    LoadedWords, MutateResponse, NewDocument, QueryResponse, RemoteEntry, WordSource,
    validate_remote_entries,
};
