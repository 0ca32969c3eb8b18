//! 조회 파이프라인: 사전 실패는 "못 찾음", 번역 실패는 빈 번역

mod common;

use std::sync::Arc;

use common::{sample_dictionary, FakeDictionary, FakeTranslator};
use danci::services::WordLookup;

#[tokio::test]
async fn assembles_normalized_word() {
    let translator = Arc::new(FakeTranslator::default());
    let lookup = WordLookup::new(Arc::new(sample_dictionary()), translator.clone());

    let word = lookup.lookup("run").await.expect("run is in the dictionary");

    assert_eq!(word.word, "run");
    assert_eq!(word.phonetic, "/rʌn/");
    assert_eq!(word.part_of_speech, "verb");
    assert_eq!(word.definition_en, "To move swiftly on foot.");
    assert_eq!(word.definition_zh, "zh:To move swiftly on foot.");
    assert_eq!(word.example, "Run to the store.");
    assert_eq!(word.synonyms.len(), 6);
    assert_eq!(translator.calls(), 1);
}

#[tokio::test]
async fn translation_failure_leaves_chinese_empty() {
    let translator = Arc::new(FakeTranslator::failing());
    let lookup = WordLookup::new(Arc::new(sample_dictionary()), translator.clone());

    let word = lookup.lookup("run").await.expect("dictionary hit survives");

    assert_eq!(word.definition_zh, "");
    assert_eq!(word.part_of_speech, "verb");
    assert_eq!(word.definition_en, "To move swiftly on foot.");
    assert_eq!(word.phonetic, "/rʌn/");
    assert_eq!(word.example, "Run to the store.");
    assert_eq!(translator.calls(), 1);
}

#[tokio::test]
async fn unknown_word_skips_translation() {
    let dictionary = Arc::new(sample_dictionary());
    let translator = Arc::new(FakeTranslator::default());
    let lookup = WordLookup::new(dictionary.clone(), translator.clone());

    assert!(lookup.lookup("qwxzzk").await.is_none());
    assert_eq!(dictionary.calls(), 1);
    assert_eq!(translator.calls(), 0);
}

#[tokio::test]
async fn entry_without_definition_is_not_found() {
    let translator = Arc::new(FakeTranslator::default());
    let lookup = WordLookup::new(Arc::new(sample_dictionary()), translator.clone());

    assert!(lookup.lookup("set").await.is_none());
    assert_eq!(translator.calls(), 0);
}

#[tokio::test]
async fn transport_error_is_not_found() {
    let dictionary = Arc::new(FakeDictionary::offline());
    let translator = Arc::new(FakeTranslator::default());
    let lookup = WordLookup::new(dictionary.clone(), translator.clone());

    assert!(lookup.lookup("run").await.is_none());
    assert_eq!(dictionary.calls(), 1);
    assert_eq!(translator.calls(), 0);
}

#[tokio::test]
async fn blank_query_issues_no_calls() {
    let dictionary = Arc::new(sample_dictionary());
    let translator = Arc::new(FakeTranslator::default());
    let lookup = WordLookup::new(dictionary.clone(), translator.clone());

    assert!(lookup.lookup("   ").await.is_none());
    assert_eq!(dictionary.calls(), 0);
}

#[tokio::test]
async fn repeated_lookups_are_not_cached() {
    let dictionary = Arc::new(sample_dictionary());
    let translator = Arc::new(FakeTranslator::default());
    let lookup = WordLookup::new(dictionary.clone(), translator.clone());

    lookup.lookup("run").await.unwrap();
    lookup.lookup("run").await.unwrap();
    assert_eq!(dictionary.calls(), 2);
    assert_eq!(translator.calls(), 2);
}
