//! # 단어 조회 파이프라인 (Lookup Orchestrator)
//!
//! 사전 조회와 번역을 합쳐 하나의 `NormalizedWord`를 만듭니다.
//!
//! ## 두 단계
//! ```text
//! word ──[사전]──> DefinedWord ──[번역]──> NormalizedWord
//!        실패 = 못 찾음            실패 = definition_zh ""
//! ```
//! 사전 단계의 실패(없는 단어, 네트워크 오류, 쓸 만한 뜻 없음)는 곧 "못 찾음"이고
//! 번역은 호출되지 않습니다. 번역 단계는 실패해도 조회 전체를 망치지 않습니다.
//! 번역이 뜻 문장에 의존하므로 두 호출은 순서대로 실행됩니다. 캐시는 없습니다.

use std::sync::Arc;

use crate::models::{DictionaryEntry, NormalizedWord};
use crate::services::dictionary::{Dictionary, Translator};

const MAX_SYNONYMS: usize = 6;
const SOURCE_LANG: &str = "en";
const TARGET_LANG: &str = "zh";

/// 사전 단계를 통과했고 아직 번역되지 않은 단어
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinedWord {
    pub word: String,
    pub phonetic: String,
    pub part_of_speech: String,
    pub definition_en: String,
    pub example: String,
    pub synonyms: Vec<String>,
}

impl DefinedWord {
    /// 첫 번째 항목의 첫 번째 뜻, 그 안의 첫 번째 정의를 고릅니다.
    /// 셋 중 하나라도 없으면 `None`입니다.
    pub fn from_entries(entries: &[DictionaryEntry]) -> Option<Self> {
        let entry = entries.first()?;
        let meaning = entry.meanings.first()?;
        let definition = meaning.definitions.first()?;

        Some(Self {
            word: entry.word.clone(),
            phonetic: pick_phonetic(entry),
            part_of_speech: meaning.part_of_speech.clone(),
            definition_en: definition.definition.clone(),
            example: definition.example.clone().unwrap_or_default(),
            synonyms: meaning
                .synonyms
                .as_deref()
                .unwrap_or_default()
                .iter()
                .take(MAX_SYNONYMS)
                .cloned()
                .collect(),
        })
    }

    /// 영어 뜻을 중국어로 번역해 최종 결과를 만듭니다. 번역 실패는 빈 문자열입니다.
    pub async fn translate(self, translator: &dyn Translator) -> NormalizedWord {
        let definition_zh = match translator
            .translate(&self.definition_en, SOURCE_LANG, TARGET_LANG)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(word = %self.word, "Translation failed, leaving it empty: {}", e);
                String::new()
            }
        };

        NormalizedWord {
            word: self.word,
            phonetic: self.phonetic,
            part_of_speech: self.part_of_speech,
            definition_en: self.definition_en,
            definition_zh,
            example: self.example,
            synonyms: self.synonyms,
        }
    }
}

/// 상위 `phonetic` → `phonetics[0]`의 텍스트 → 빈 문자열
///
/// 두 번째 이후 항목은 보지 않습니다. 첫 항목에 오디오만 있으면 빈 문자열입니다.
fn pick_phonetic(entry: &DictionaryEntry) -> String {
    entry
        .phonetic
        .as_deref()
        .filter(|p| !p.is_empty())
        .or_else(|| {
            entry
                .phonetics
                .first()
                .and_then(|p| p.text.as_deref())
                .filter(|t| !t.is_empty())
        })
        .unwrap_or_default()
        .to_string()
}

/// 사전 + 번역 조회기
#[derive(Clone)]
pub struct WordLookup {
    dictionary: Arc<dyn Dictionary>,
    translator: Arc<dyn Translator>,
}

impl WordLookup {
    pub fn new(dictionary: Arc<dyn Dictionary>, translator: Arc<dyn Translator>) -> Self {
        Self {
            dictionary,
            translator,
        }
    }

    /// 단어를 조회합니다. `None`은 "word not found"입니다.
    pub async fn lookup(&self, word: &str) -> Option<NormalizedWord> {
        let defined = self.define(word).await?;
        Some(defined.translate(self.translator.as_ref()).await)
    }

    /// 사전 단계만 실행합니다. 전송 오류도 여기서 "못 찾음"으로 정리됩니다.
    pub async fn define(&self, word: &str) -> Option<DefinedWord> {
        let word = word.trim();
        if word.is_empty() {
            return None;
        }

        let entries = match self.dictionary.lookup(word).await {
            Ok(Some(entries)) => entries,
            Ok(None) => {
                tracing::debug!(word, "No dictionary entry");
                return None;
            }
            Err(e) => {
                tracing::warn!(word, "Dictionary lookup failed: {}", e);
                return None;
            }
        };

        let defined = DefinedWord::from_entries(&entries);
        if defined.is_none() {
            tracing::debug!(word, "Dictionary entry has no usable definition");
        }
        defined
    }
}
