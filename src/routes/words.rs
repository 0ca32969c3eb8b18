//! # 단어(Word) 라우트 핸들러
//!
//! 단어 조회와 단어장 CRUD를 처리하는 HTTP 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//! - `GET    /api/v1/lookup/{word}`        → 사전 + 번역 조회 (현재 단어 갱신)
//! - `GET    /api/v1/words`                → 저장한 단어 목록 (최신순)
//! - `POST   /api/v1/words`                → 단어 저장 (이미 있으면 기존 것 반환)
//! - `DELETE /api/v1/words`                → 단어장 비우기
//! - `GET    /api/v1/words/search?word=`   → 단어 텍스트로 검색
//! - `GET    /api/v1/words/{id}`           → 단어 하나 조회
//! - `DELETE /api/v1/words/{id}`           → 단어 삭제
//! - `GET    /api/v1/session`              → 현재 단어 + 저장 목록
//!
//! 단어장을 보여주는 핸들러는 응답 전에 세션 캐시를 저장소에서 다시 읽습니다.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::*,
    services::{ReviewRegistry, SessionContext, WordLookup, WordStore},
};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 필드는 모두 내부적으로 Arc를 쓰므로 clone해도 같은 대상을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    /// 단어 저장소 (단어장의 유일한 원천)
    pub store: WordStore,
    /// 사전 + 번역 조회기
    pub lookup: WordLookup,
    /// 진행 중인 복습 세션들
    pub reviews: ReviewRegistry,
    /// 현재 단어 / 저장 단어 캐시
    pub session: Arc<RwLock<SessionContext>>,
}

impl AppState {
    pub fn new(store: WordStore, lookup: WordLookup) -> Self {
        Self {
            store,
            lookup,
            reviews: ReviewRegistry::new(),
            session: Arc::new(RwLock::new(SessionContext::new())),
        }
    }
}

/// `GET /lookup/{word}` — 단어를 조회하고 현재 단어로 설정합니다.
///
/// # 반환값
/// `{ "word": {...}, "saved": bool }` — 사전에 없으면 404 "word not found"
pub async fn lookup_word(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<Value>, AppError> {
    let found = state
        .lookup
        .lookup(&word)
        .await
        .ok_or(AppError::WordNotFound)?;

    let mut session = state.session.write().await;
    session.refresh_saved(&state.store).await?;
    let saved = session.is_word_saved(&found.word, &found.part_of_speech);
    session.set_current_word(found.clone());

    Ok(Json(json!({ "word": found, "saved": saved })))
}

/// `GET /words` — 저장한 단어 목록을 최신순으로 조회합니다.
pub async fn list_words(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let words = state.store.get_all().await?;
    let mut session = state.session.write().await;
    session.saved_words = words.clone();
    Ok(Json(json!({ "words": words })))
}

/// `POST /words` — 단어를 저장합니다.
///
/// 같은 단어·품사가 이미 저장되어 있으면 기존 레코드를 그대로 반환합니다
/// (생성 시각과 복습 기록이 바뀌지 않음).
pub async fn create_word(
    State(state): State<AppState>,
    Json(req): Json<NewWord>,
) -> Result<Json<WordRecord>, AppError> {
    if req.word.trim().is_empty() || req.part_of_speech.trim().is_empty() {
        return Err(AppError::BadRequest(
            "word and part_of_speech are required".to_string(),
        ));
    }

    let record = state.store.add(&req).await?;
    tracing::debug!(id = %record.id, "Word saved");

    let mut session = state.session.write().await;
    session.add_saved(record.clone());
    session.refresh_saved(&state.store).await?;

    Ok(Json(record))
}

/// `DELETE /words` — 단어장을 비웁니다. `{ "deleted": n }`
pub async fn clear_words(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let deleted = state.store.clear().await?;
    tracing::info!(deleted, "Word list cleared");
    state.session.write().await.clear_saved();
    Ok(Json(json!({ "deleted": deleted })))
}

/// `GET /words/search?word=run` — 품사와 관계없이 같은 단어를 모두 찾습니다.
pub async fn search_words(
    State(state): State<AppState>,
    Query(query): Query<WordSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let words = state.store.get_by_word(query.word.trim()).await?;
    Ok(Json(json!({ "words": words })))
}

/// `GET /words/{id}` — 단어 하나를 조회합니다.
pub async fn get_word(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WordRecord>, AppError> {
    let word = state
        .store
        .get_by_id(&id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(word))
}

/// `DELETE /words/{id}` — 단어를 삭제합니다. 없는 ID여도 204입니다.
pub async fn delete_word(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let deleted = state.store.delete(&id).await?;
    if deleted {
        tracing::debug!(%id, "Word deleted");
    }

    let mut session = state.session.write().await;
    session.remove_saved(&id);
    session.refresh_saved(&state.store).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /session` — 현재 단어와 (방금 다시 읽은) 저장 목록을 반환합니다.
pub async fn get_session(
    State(state): State<AppState>,
) -> Result<Json<SessionContext>, AppError> {
    let mut session = state.session.write().await;
    session.refresh_saved(&state.store).await?;
    Ok(Json(session.snapshot()))
}
