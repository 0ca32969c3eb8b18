//! # 단어 모델 정의
//!
//! 단어장에 저장되는 단어와, 사전 조회 결과로 만들어지는 단어를 정의합니다.
//!
//! ## 구조체 역할
//! - `WordRecord`: DB의 `words` 테이블 한 행 (저장된 단어)
//! - `NewWord`: 저장 요청 — id/생성 시각/복습 횟수는 서버가 채웁니다
//! - `NormalizedWord`: 사전 + 번역 조회 결과 (아직 저장되지 않은 단어)
//!
//! ## 단어 식별자
//! 단어의 유일성은 [`derive_id`] 하나로만 결정됩니다.
//! 같은 단어라도 품사가 다르면 서로 다른 레코드입니다 ("run-verb", "run-noun").

use serde::{Deserialize, Serialize};

/// 단어 텍스트와 품사로 레코드 ID를 만듭니다.
///
/// `"{word}-{part_of_speech}"` 형식이며, 저장소의 기본키이자
/// 중복 저장을 막는 유일한 수단입니다. 입력을 정규화하지 않으므로
/// 대소문자나 공백이 다르면 다른 ID가 됩니다.
///
/// ```
/// assert_eq!(danci::models::derive_id("run", "verb"), "run-verb");
/// ```
pub fn derive_id(word: &str, part_of_speech: &str) -> String {
    format!("{}-{}", word, part_of_speech)
}

/// 저장된 단어 엔티티 — DB의 `words` 테이블 한 행에 대응합니다.
///
/// 시각 필드는 모두 UTC 기준 밀리초 타임스탬프입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WordRecord {
    /// `derive_id(word, part_of_speech)`
    pub id: String,
    pub word: String,
    /// 발음 기호 (예: "/rʌn/"), 없으면 빈 문자열
    pub phonetic: String,
    /// 품사 (예: "verb", "noun")
    pub part_of_speech: String,
    /// 영어 뜻
    pub definition_en: String,
    /// 중국어 번역 — 번역 실패 시 빈 문자열
    pub definition_zh: String,
    /// 예문, 없으면 빈 문자열
    pub example: String,
    /// 생성 시각 — 저장 이후 절대 바뀌지 않습니다
    pub created_at: i64,
    /// 복습 횟수 — 복습할 때마다 정확히 1씩만 증가합니다
    pub review_count: i64,
    /// 마지막 복습 시각 — 한 번도 복습하지 않았으면 None
    pub last_review_at: Option<i64>,
}

/// 단어 저장 요청 — `POST /api/v1/words`의 요청 본문에 해당합니다.
///
/// `id`, `created_at`, `review_count`는 저장소가 계산하므로 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWord {
    pub word: String,
    #[serde(default)]
    pub phonetic: String,
    pub part_of_speech: String,
    pub definition_en: String,
    #[serde(default)]
    pub definition_zh: String,
    #[serde(default)]
    pub example: String,
}

impl NewWord {
    /// 이 후보가 저장될 때 갖게 될 ID
    pub fn id(&self) -> String {
        derive_id(&self.word, &self.part_of_speech)
    }

    /// 저장 시각을 붙여 새 레코드를 만듭니다. 복습 정보는 비어 있습니다.
    pub fn into_record(self, created_at: i64) -> WordRecord {
        WordRecord {
            id: self.id(),
            word: self.word,
            phonetic: self.phonetic,
            part_of_speech: self.part_of_speech,
            definition_en: self.definition_en,
            definition_zh: self.definition_zh,
            example: self.example,
            created_at,
            review_count: 0,
            last_review_at: None,
        }
    }
}

/// 사전 조회와 번역을 합쳐 만든 단어 — 조회 화면에 표시되는 "현재 단어"입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedWord {
    pub word: String,
    pub phonetic: String,
    pub part_of_speech: String,
    pub definition_en: String,
    pub definition_zh: String,
    pub example: String,
    /// 유의어 (최대 6개)
    pub synonyms: Vec<String>,
}

impl NormalizedWord {
    /// 저장용 후보로 변환합니다. 유의어는 저장하지 않습니다.
    pub fn to_new_word(&self) -> NewWord {
        NewWord {
            word: self.word.clone(),
            phonetic: self.phonetic.clone(),
            part_of_speech: self.part_of_speech.clone(),
            definition_en: self.definition_en.clone(),
            definition_zh: self.definition_zh.clone(),
            example: self.example.clone(),
        }
    }

    pub fn id(&self) -> String {
        derive_id(&self.word, &self.part_of_speech)
    }
}

/// 단어 검색 쿼리 — `GET /api/v1/words/search?word=...`
#[derive(Debug, Deserialize)]
pub struct WordSearchQuery {
    pub word: String,
}
