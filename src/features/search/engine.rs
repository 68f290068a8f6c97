use crate::data::models::{DictionaryEntry, Language};

pub const MIN_SUGGESTION_CHARS: usize = 2;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

pub struct SearchEngine;

impl SearchEngine {
    /// Entries whose `language` field contains `query`, in their original
    /// order. A blank query returns every entry.
    pub fn filter(
        entries: &[DictionaryEntry],
        query: &str,
        language: Language,
    ) -> Vec<DictionaryEntry> {
        if query.trim().is_empty() {
            return entries.to_vec();
        }
        SearchEngine::matching(entries, query, language)
            .cloned()
            .collect()
    }

    /// Dropdown suggestions: at most `limit` matches, none until the
    /// query has two characters.
    pub fn suggest(
        entries: &[DictionaryEntry],
        partial_query: &str,
        language: Language,
        limit: usize,
    ) -> Vec<DictionaryEntry> {
        let typed = partial_query.trim().to_lowercase().chars().count();
        if typed < MIN_SUGGESTION_CHARS {
            return Vec::new();
        }
        SearchEngine::matching(entries, partial_query, language)
            .take(limit)
            .cloned()
            .collect()
    }

    fn matching<'a>(
        entries: &'a [DictionaryEntry],
        query: &str,
        language: Language,
    ) -> impl Iterator<Item = &'a DictionaryEntry> {
        // Chinese script has no case, so only English is folded.
        let needle = match language {
            Language::English => query.to_lowercase(),
            Language::Chinese => query.to_string(),
        };

        entries.iter().filter(move |entry| {
            entry.term(language).is_some_and(|term| match language {
                Language::English => term.to_lowercase().contains(&needle),
                Language::Chinese => term.contains(&needle),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fallback::fallback_entries;
    use rstest::rstest;

    fn entry(id: &str, english: Option<&str>, chinese: Option<&str>) -> DictionaryEntry {
        DictionaryEntry {
            id: id.into(),
            english: english.map(str::to_string),
            chinese: chinese.map(str::to_string),
            thai: "ทดสอบ".into(),
            romanized: None,
            pinyin: None,
            audio_url: None,
        }
    }

    fn ids(entries: &[DictionaryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn english_match_ignores_case() {
        let entries = vec![
            entry("hello", Some("Hello"), None),
            entry("thanks", Some("Thank you"), None),
        ];
        let result = SearchEngine::filter(&entries, "tha", Language::English);
        assert_eq!(ids(&result), ["thanks"]);
        let result = SearchEngine::filter(&entries, "THANK", Language::English);
        assert_eq!(ids(&result), ["thanks"]);
    }

    #[test]
    fn chinese_match_is_verbatim_substring() {
        let entries = vec![
            entry("nihao", None, Some("你好")),
            entry("xiexie", None, Some("谢谢")),
        ];
        let result = SearchEngine::filter(&entries, "好", Language::Chinese);
        assert_eq!(ids(&result), ["nihao"]);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_query_is_identity(#[case] query: &str) {
        let entries = fallback_entries();
        assert_eq!(SearchEngine::filter(&entries, query, Language::English), entries);
        assert_eq!(SearchEngine::filter(&entries, query, Language::Chinese), entries);
    }

    #[test]
    fn missing_or_empty_fields_never_match() {
        let entries = vec![
            entry("a", None, Some("你好")),
            entry("b", Some(""), Some("好")),
            entry("c", Some("Good"), None),
        ];
        assert_eq!(ids(&SearchEngine::filter(&entries, "o", Language::English)), ["c"]);
        assert_eq!(ids(&SearchEngine::filter(&entries, "好", Language::Chinese)), ["a", "b"]);
    }

    #[test]
    fn keeps_original_relative_order() {
        let entries = vec![
            entry("3", Some("Good morning"), None),
            entry("1", Some("Bad"), None),
            entry("2", Some("Good night"), None),
            entry("0", Some("Goodbye"), None),
        ];
        let result = SearchEngine::filter(&entries, "good", Language::English);
        assert_eq!(ids(&result), ["3", "2", "0"]);
    }

    #[rstest]
    #[case("o", Language::English)]
    #[case("e", Language::English)]
    #[case("好", Language::Chinese)]
    #[case("x", Language::Chinese)]
    fn results_partition_the_working_set(#[case] query: &str, #[case] language: Language) {
        let entries = fallback_entries();
        let result = SearchEngine::filter(&entries, query, language);
        for e in &entries {
            let term = e.term(language).unwrap_or_default();
            let contains = match language {
                Language::English => term.to_lowercase().contains(&query.to_lowercase()),
                Language::Chinese => term.contains(query),
            };
            assert_eq!(result.contains(e), contains, "entry {}", e.id);
        }
    }

    #[test]
    fn english_query_does_not_fold_in_chinese_view() {
        let entries = vec![entry("a", Some("Hello"), Some("Hello 你好"))];
        assert!(SearchEngine::filter(&entries, "hello", Language::Chinese).is_empty());
        assert_eq!(SearchEngine::filter(&entries, "Hello", Language::Chinese).len(), 1);
    }

    #[rstest]
    #[case("")]
    #[case("t")]
    #[case(" t ")]
    #[case("好")]
    fn suggestions_need_two_characters(#[case] query: &str) {
        let entries = fallback_entries();
        assert!(SearchEngine::suggest(&entries, query, Language::English, 5).is_empty());
        assert!(SearchEngine::suggest(&entries, query, Language::Chinese, 5).is_empty());
    }

    #[test]
    fn suggestions_are_capped_in_order() {
        let entries: Vec<_> = (0..8)
            .map(|i| entry(&i.to_string(), Some(&format!("Word {i}")), None))
            .collect();
        let result = SearchEngine::suggest(&entries, "wo", Language::English, DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(ids(&result), ["0", "1", "2", "3", "4"]);
        assert!(SearchEngine::suggest(&entries, "wo", Language::English, 0).is_empty());
    }

    #[test]
    fn suggestions_use_the_filter_rule() {
        let entries = fallback_entries();
        let result = SearchEngine::suggest(&entries, "你好", Language::Chinese, 5);
        assert_eq!(ids(&result), ["1"]);
        let result = SearchEngine::suggest(&entries, "th", Language::English, 5);
        assert_eq!(ids(&result), ["2"]);
    }
}
