use lazy_static::lazy_static;

use crate::data::models::DictionaryEntry;

// (id, english, chinese, thai, romanized, audio)
const FALLBACK_WORDS: [(&str, &str, &str, &str, &str, &str); 5] = [
    (
        "1",
        "Hello",
        "你好",
        "สวัสดี",
        "Sawadee",
        "https://upload.wikimedia.org/wikipedia/commons/8/8a/Th-sawatdii_khrap.ogg",
    ),
    (
        "2",
        "Thank you",
        "谢谢",
        "ขอบคุณ",
        "Khob khun",
        "https://upload.wikimedia.org/wikipedia/commons/a/a0/Th-khxbkhun.ogg",
    ),
    (
        "3",
        "Yes",
        "是",
        "ใช่",
        "Chai",
        "https://upload.wikimedia.org/wikipedia/commons/b/b1/Th-ch%C4%B0.ogg",
    ),
    (
        "4",
        "No",
        "不",
        "ไม่",
        "Mai",
        "https://upload.wikimedia.org/wikipedia/commons/2/24/Th-m%C4%80y.ogg",
    ),
    (
        "5",
        "Good",
        "好",
        "ดี",
        "Dee",
        "https://upload.wikimedia.org/wikipedia/commons/8/88/Th-dii.ogg",
    ),
];

lazy_static! {
    static ref FALLBACK_ENTRIES: Vec<DictionaryEntry> = FALLBACK_WORDS
        .iter()
        .map(|&(id, english, chinese, thai, romanized, audio)| DictionaryEntry {
            id: id.to_string(),
            english: Some(english.to_string()),
            chinese: Some(chinese.to_string()),
            thai: thai.to_string(),
            romanized: Some(romanized.to_string()),
            pinyin: None,
            audio_url: Some(audio.to_string()),
        })
        .collect();
}

/// Built-in word list served whenever the content store is unusable.
pub fn fallback_entries() -> Vec<DictionaryEntry> {
    FALLBACK_ENTRIES.clone()
}
