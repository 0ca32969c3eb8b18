//! # 메모리 단어장
//!
//! SQLite를 쓸 수 없을 때 `WordStore`가 대신 사용하는 프로세스 내 저장소입니다.
//! `db::words`의 쿼리와 같은 의미를 갖도록 맞춰 두었습니다:
//! 중복 ID는 무시, 최신순 정렬(동률이면 나중에 넣은 것 먼저), 대소문자 무시 검색.
//! 프로세스가 끝나면 내용은 사라집니다.

use std::collections::HashMap;

use crate::models::*;

#[derive(Debug, Default)]
pub struct MemoryWords {
    /// id → (삽입 순번, 레코드)
    records: HashMap<String, (u64, WordRecord)>,
    next_seq: u64,
}

impl MemoryWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, candidate: &NewWord, now: i64) -> WordRecord {
        let id = candidate.id();
        if let Some((_, existing)) = self.records.get(&id) {
            return existing.clone();
        }

        let record = candidate.clone().into_record(now);
        self.records.insert(id, (self.next_seq, record.clone()));
        self.next_seq += 1;
        record
    }

    pub fn list(&self) -> Vec<WordRecord> {
        let mut rows: Vec<&(u64, WordRecord)> = self.records.values().collect();
        rows.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at.cmp(&a.created_at).then(seq_b.cmp(seq_a))
        });
        rows.into_iter().map(|(_, record)| record.clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<WordRecord> {
        self.records.get(id).map(|(_, record)| record.clone())
    }

    pub fn find_by_text(&self, word: &str) -> Vec<WordRecord> {
        let needle = word.to_lowercase();
        self.list()
            .into_iter()
            .filter(|record| record.word.to_lowercase() == needle)
            .collect()
    }

    pub fn record_review(&mut self, id: &str, now: i64) -> bool {
        match self.records.get_mut(id) {
            Some((_, record)) => {
                record.review_count += 1;
                record.last_review_at = Some(now);
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.records.remove(id).is_some()
    }

    pub fn clear(&mut self) -> u64 {
        let count = self.records.len() as u64;
        self.records.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(word: &str, pos: &str) -> NewWord {
        NewWord {
            word: word.to_string(),
            phonetic: String::new(),
            part_of_speech: pos.to_string(),
            definition_en: "def".to_string(),
            definition_zh: String::new(),
            example: String::new(),
        }
    }

    #[test]
    fn matches_sqlite_ordering_rules() {
        let mut words = MemoryWords::new();
        words.add(&candidate("old", "noun"), 1);
        words.add(&candidate("tie-a", "noun"), 5);
        words.add(&candidate("tie-b", "noun"), 5);

        let ids: Vec<String> = words.list().into_iter().map(|w| w.id).collect();
        assert_eq!(ids, vec!["tie-b-noun", "tie-a-noun", "old-noun"]);
    }

    #[test]
    fn duplicate_add_returns_original() {
        let mut words = MemoryWords::new();
        let first = words.add(&candidate("run", "verb"), 1);
        let second = words.add(&candidate("run", "verb"), 9);
        assert_eq!(first, second);
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn review_of_missing_word_changes_nothing() {
        let mut words = MemoryWords::new();
        words.add(&candidate("run", "verb"), 1);
        assert!(!words.record_review("walk-verb", 2));
        assert_eq!(words.get("run-verb").unwrap().review_count, 0);

        assert!(words.record_review("run-verb", 3));
        let run = words.get("run-verb").unwrap();
        assert_eq!(run.review_count, 1);
        assert_eq!(run.last_review_at, Some(3));
    }

    #[test]
    fn text_search_ignores_case() {
        let mut words = MemoryWords::new();
        words.add(&candidate("Run", "verb"), 1);
        words.add(&candidate("run", "noun"), 2);
        assert_eq!(words.find_by_text("rUn").len(), 2);
        assert!(words.find_by_text("walk").is_empty());
    }
}
