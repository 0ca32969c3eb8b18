//! # 외부 사전/번역 API 클라이언트
//!
//! 조회 파이프라인(`services::lookup`)이 의존하는 두 외부 협력자입니다.
//! - `Dictionary`: 영어 단어 → 사전 항목 목록 (Free Dictionary API)
//! - `Translator`: 텍스트 번역 (MyMemory API)
//!
//! 트레이트로 분리해 두었으므로 테스트에서는 가짜 구현을 끼워 넣습니다.
//! 여기서 발생한 에러는 조회 파이프라인 밖으로 나가지 않습니다.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::config::Config;
use crate::models::{DictionaryEntry, TranslateResponse};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    HttpStatus(StatusCode),
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait Dictionary: Send + Sync {
    /// 단어를 조회합니다. 사전에 없는 단어는 `Ok(None)`입니다.
    async fn lookup(&self, word: &str) -> Result<Option<Vec<DictionaryEntry>>, LookupError>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    /// `source` → `target` 언어로 번역합니다 (예: "en" → "zh").
    async fn translate(&self, text: &str, source: &str, target: &str)
        -> Result<String, LookupError>;
}

fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Free Dictionary API 클라이언트 (`GET {base}/{word}`)
#[derive(Clone)]
pub struct FreeDictionaryClient {
    base_url: String,
    client: reqwest::Client,
}

impl FreeDictionaryClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: build_client(timeout),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.dictionary_api_url.clone(), config.http_timeout)
    }

    fn entry_url(&self, word: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(word))
    }
}

#[async_trait]
impl Dictionary for FreeDictionaryClient {
    async fn lookup(&self, word: &str) -> Result<Option<Vec<DictionaryEntry>>, LookupError> {
        let response = self.client.get(self.entry_url(word)).send().await?;

        match response.status() {
            // 사전 API는 모르는 단어에 404 + {"title":"No Definitions Found"}를 돌려줍니다
            StatusCode::NOT_FOUND => Ok(None),
            status if !status.is_success() => Err(LookupError::HttpStatus(status)),
            _ => {
                let entries: Vec<DictionaryEntry> = response.json().await?;
                Ok(Some(entries))
            }
        }
    }
}

/// MyMemory 번역 API 클라이언트 (`GET {url}?q=...&langpair=en|zh`)
#[derive(Clone)]
pub struct MyMemoryTranslator {
    url: String,
    client: reqwest::Client,
}

impl MyMemoryTranslator {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            client: build_client(timeout),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.translate_api_url.clone(), config.http_timeout)
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, LookupError> {
        let langpair = format!("{}|{}", source, target);
        let response = self
            .client
            .get(&self.url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?;

        Ok(body.response_data.translated_text)
    }
}
