//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `StoreError`: 단어 저장소(SQLite) 에러 — 모두 "저장소 사용 불가"로 취급
//! - `AppError`: HTTP 계층의 에러 — `IntoResponse`로 JSON 에러 응답이 됩니다
//!
//! 사용자에게 보이는 실패 메시지는 두 가지뿐입니다:
//! "word not found"와 "잠시 후 다시 시도" 안내. 나머지는 조용히 성능 저하로 처리됩니다.

use axum::{
    http::StatusCode,                    // HTTP 상태 코드 (404, 503 등)
    response::{IntoResponse, Response},  // 타입을 HTTP 응답으로 바꾸는 트레이트
    Json,                                // JSON 응답 본문
};
use serde_json::json; // json! 매크로로 에러 본문을 만듭니다
use thiserror::Error; // #[derive(Error)]로 Display / Error 구현을 자동 생성

/// 단어 저장소 에러
///
/// 디스크 가득 참, 파일 잠김, 권한 없음 등 원인과 관계없이
/// 저장소가 응답하지 못하면 전부 `Unavailable`입니다.
/// `#[from]` 덕분에 sqlx 함수 호출에 `?`만 붙이면 자동 변환됩니다.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// HTTP 핸들러가 반환하는 에러
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면
/// Axum이 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스(단어 ID, 복습 세션)를 찾을 수 없음 (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// 사전에 없는 단어이거나 쓸 만한 뜻이 없음 (HTTP 404)
    #[error("word not found")]
    WordNotFound,

    /// 잘못된 요청 (HTTP 400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 저장소 사용 불가 (HTTP 503) — 클라이언트는 재시도 안내를 보여줍니다
    #[error("Storage error: {0}")]
    StorageUnavailable(#[from] StoreError),
}

impl IntoResponse for AppError {
    /// 에러 종류별로 상태 코드와 `{ "error": { "code", "message" } }` 본문을 만듭니다.
    ///
    /// 내부 에러의 상세 내용은 로그에만 남기고 클라이언트에는 일반 메시지만 보냅니다.
    fn into_response(self) -> Response {
        // (상태 코드, 기계용 코드, 사용자 메시지) 튜플을 만듭니다
        let (status, code, message) = match self {
            // 없는 단어 ID나 끝난 복습 세션
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            // 화면에 그대로 표시되는 "word not found"
            AppError::WordNotFound => {
                (StatusCode::NOT_FOUND, "word_not_found", self.to_string())
            }
            // 검증 메시지는 그대로 돌려줘도 안전합니다
            AppError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            AppError::Internal(ref msg) => {
                // 상세 내용은 로그에만
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::StorageUnavailable(ref e) => {
                // 저장소 전환 경고는 WordStore가 이미 한 번 남겼습니다
                tracing::debug!("Storage error surfaced to client: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "storage_unavailable",
                    "Storage is temporarily unavailable, please retry".to_string(),
                )
            }
        };

        // 모든 에러 응답은 같은 모양입니다: { "error": { "code", "message" } }
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // (StatusCode, Json) 튜플도 IntoResponse를 구현합니다
        (status, body).into_response()
    }
}
