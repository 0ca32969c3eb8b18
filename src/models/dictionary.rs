//! # 외부 사전/번역 API 응답 모델
//!
//! Free Dictionary API와 MyMemory 번역 API가 돌려주는 JSON 구조입니다.
//! 두 API 모두 camelCase 필드를 쓰므로 `rename_all = "camelCase"`로 맞춥니다.
//! 선택 필드는 `#[serde(default)]`로 두어 누락되어도 역직렬화가 실패하지 않게 합니다.

use serde::Deserialize;

/// 사전 API 항목 하나 (`GET /entries/en/{word}`는 이 배열을 반환)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

/// 품사 하나에 대한 뜻 묶음
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// 번역 API 응답 (`{ "responseData": { "translatedText": "..." } }`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub response_data: TranslatedData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedData {
    pub translated_text: String,
}
