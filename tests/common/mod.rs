//! 통합 테스트 공용 도구: 가짜 사전/번역기와 라우터 호출 헬퍼

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use danci::{
    models::DictionaryEntry,
    services::{Dictionary, LookupError, Translator, WordLookup, WordStore},
    AppState,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// 미리 넣어 둔 단어만 아는 사전
#[derive(Default)]
pub struct FakeDictionary {
    entries: HashMap<String, Vec<DictionaryEntry>>,
    pub calls: AtomicUsize,
    /// true면 모든 호출이 전송 오류로 실패합니다
    pub offline: bool,
}

impl FakeDictionary {
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn with(mut self, word: &str, payload: Value) -> Self {
        let entries = serde_json::from_value(payload).expect("valid dictionary payload");
        self.entries.insert(word.to_string(), entries);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Dictionary for FakeDictionary {
    async fn lookup(&self, word: &str) -> Result<Option<Vec<DictionaryEntry>>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            return Err(LookupError::Decode("connection refused".to_string()));
        }
        Ok(self.entries.get(word).cloned())
    }
}

/// 입력 앞에 "zh:"를 붙여 돌려주거나, 항상 실패하는 번역기
#[derive(Default)]
pub struct FakeTranslator {
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl FakeTranslator {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!((source, target), ("en", "zh"));
        if self.fail {
            return Err(LookupError::Decode("translation service down".to_string()));
        }
        Ok(format!("zh:{}", text))
    }
}

/// "run"(동사)과 "set"(뜻 없음)을 아는 사전
pub fn sample_dictionary() -> FakeDictionary {
    FakeDictionary::default()
        .with(
            "run",
            json!([{
                "word": "run",
                "phonetic": "/rʌn/",
                "phonetics": [{"text": "/rʌn/"}],
                "meanings": [{
                    "partOfSpeech": "verb",
                    "definitions": [{
                        "definition": "To move swiftly on foot.",
                        "example": "Run to the store."
                    }],
                    "synonyms": ["sprint", "dash", "race", "jog", "hurry", "rush", "bolt"]
                }, {
                    "partOfSpeech": "noun",
                    "definitions": [{"definition": "An act of running."}]
                }]
            }]),
        )
        .with(
            "set",
            json!([{ "word": "set", "phonetics": [], "meanings": [] }]),
        )
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub dictionary: Arc<FakeDictionary>,
    pub translator: Arc<FakeTranslator>,
}

pub fn test_app(store: WordStore, translator: FakeTranslator) -> TestApp {
    let dictionary = Arc::new(sample_dictionary());
    let translator = Arc::new(translator);
    let lookup = WordLookup::new(dictionary.clone(), translator.clone());
    let state = AppState::new(store, lookup);

    TestApp {
        router: danci::app(state.clone()),
        state,
        dictionary,
        translator,
    }
}

impl TestApp {
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        let response = self.router.clone().oneshot(request).await.expect("router responds");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, value)
    }
}

pub fn new_word(word: &str, part_of_speech: &str) -> Value {
    json!({
        "word": word,
        "phonetic": "",
        "part_of_speech": part_of_speech,
        "definition_en": format!("meaning of {}", word),
        "definition_zh": "",
        "example": ""
    })
}
