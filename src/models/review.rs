//! # 복습 세션 모델 정의
//!
//! 플래시카드 복습 화면이 주고받는 데이터 구조체들입니다.
//! 세션 자체(`ReviewSession`)는 `services::review`에 있고,
//! 여기에는 요청 본문과 화면에 내보내는 상태만 둡니다.

use serde::{Deserialize, Serialize};

use super::WordRecord;

/// 카드 평가 — 세 값 모두 같은 상태 전이를 일으킵니다 (간격 계산 없음).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Hard,
    Medium,
    Easy,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Medium => "medium",
            Self::Easy => "easy",
        }
    }
}

/// 복습 화면 상태
///
/// JSON에서는 `"state"` 필드로 구분됩니다:
/// - `{"state":"empty"}`: 저장된 단어가 없어 세션을 만들지 않음
/// - `{"state":"active","card":{...},"cursor":0,"total":3}`
/// - `{"state":"done","reviewed":3}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ReviewState {
    Empty,
    Active {
        card: WordRecord,
        cursor: usize,
        total: usize,
    },
    Done {
        reviewed: usize,
    },
}

/// 카드 평가 요청 — `POST /api/v1/review/sessions/{id}/rate`
#[derive(Debug, Deserialize)]
pub struct RateRequest {
    pub rating: Rating,
}

/// 복습 세션 시작 응답 — 빈 단어장이면 `session_id`가 없습니다.
#[derive(Debug, Serialize)]
pub struct StartReviewResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(flatten)]
    pub state: ReviewState,
}
