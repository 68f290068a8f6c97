use validator::Validate;

use crate::data::models::{CreateWordError, NewDictionaryEntry};
use crate::data::repositories::ContentStore;

/// Adds a dictionary document to the store and returns its id.
pub async fn create_word<S>(store: Option<&S>, payload: NewDictionaryEntry) -> Result<String, CreateWordError>
where
    S: ContentStore + Sync,
{
    let store = store.ok_or(CreateWordError::StoreUnavailable)?;
    if !store.can_write() {
        return Err(CreateWordError::MissingToken);
    }

    let payload = payload.normalized();
    payload.validate()?;

    let id = store.create_entry(&payload).await?;
    log::info!("Created dictionary entry {} ({})", id, payload.english);
    Ok(id)
}
