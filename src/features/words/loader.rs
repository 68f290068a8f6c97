use crate::data::fallback::fallback_entries;
use crate::data::models::{DictionaryEntry, LoadedWords, WordSource};
use crate::data::repositories::ContentStore;

/// Loads the working set for one page load. Never fails: a missing store,
/// a failed query or an empty result all yield the fallback dataset.
pub async fn load_words<S>(store: Option<&S>) -> LoadedWords
where
    S: ContentStore + Sync,
{
    let Some(store) = store else {
        log::warn!("No content store available, using fallback data");
        return fallback();
    };

    match store.fetch_entries().await {
        Ok(entries) if !entries.is_empty() => {
            log::info!("Fetched {} entries from the content store", entries.len());
            LoadedWords {
                source: WordSource::Remote,
                entries,
            }
        }
        Ok(_) => {
            log::warn!("No data found in the content store, using fallback data");
            fallback()
        }
        Err(e) => {
            log::error!("Error fetching from the content store: {}", e);
            fallback()
        }
    }
}

pub async fn fetch_words<S>(store: Option<&S>) -> Vec<DictionaryEntry>
where
    S: ContentStore + Sync,
{
    load_words(store).await.entries
}

fn fallback() -> LoadedWords {
    LoadedWords {
        source: WordSource::Fallback,
        entries: fallback_entries(),
    }
}
