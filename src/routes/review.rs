//! # 복습 세션 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | POST | /api/v1/review/sessions | `start_review` | 단어장 스냅샷으로 세션 시작 |
//! | GET | /api/v1/review/sessions/{id} | `get_review` | 현재 카드 / 완료 상태 |
//! | POST | /api/v1/review/sessions/{id}/rate | `rate_review` | 카드 평가 후 다음 카드 |
//! | POST | /api/v1/review/sessions/{id}/reset | `reset_review` | 처음부터 다시 |
//! | DELETE | /api/v1/review/sessions/{id} | `end_review` | 세션 종료 |
//!
//! ## 사용 흐름
//! ```text
//! 1. 복습 화면 진입 → POST /review/sessions ({"state":"empty"}이면 안내 화면)
//! 2. 카드마다 → POST /review/sessions/{id}/rate {"rating":"easy"}
//! 3. {"state":"done"} → 요약 표시, 필요하면 reset
//! 4. 화면 나감 → DELETE /review/sessions/{id}
//! ```

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppError, models::*, routes::words::AppState};

/// 저장소의 현재 단어장을 스냅샷으로 새 복습 세션을 시작합니다.
pub async fn start_review(
    State(state): State<AppState>,
) -> Result<Json<StartReviewResponse>, AppError> {
    let words = state.store.get_all().await?;
    state.session.write().await.saved_words = words.clone();

    let (session_id, review) = state.reviews.start(words).await;
    Ok(Json(StartReviewResponse {
        session_id,
        state: review,
    }))
}

pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReviewState>, AppError> {
    let review = state.reviews.state(&id).await.ok_or(AppError::NotFound)?;
    Ok(Json(review))
}

/// 현재 카드를 평가합니다. 평가 값과 관계없이 복습 횟수 +1 후 다음 카드로 넘어갑니다.
pub async fn rate_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RateRequest>,
) -> Result<Json<ReviewState>, AppError> {
    let review = state
        .reviews
        .rate(&id, &state.store, req.rating)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(review))
}

/// 같은 스냅샷으로 처음 카드부터 다시 시작합니다 (단어장을 다시 읽지 않음).
pub async fn reset_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReviewState>, AppError> {
    let review = state.reviews.reset(&id).await.ok_or(AppError::NotFound)?;
    Ok(Json(review))
}

pub async fn end_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !state.reviews.end(&id).await {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
