//! # 헬스체크(Health Check) 핸들러
//!
//! ## 엔드포인트
//! - `GET /api/v1/health` → `{ "status": "ok", "storage": "sqlite" | "memory" }`
//!
//! `storage`가 `"memory"`이면 SQLite를 쓸 수 없어 단어장이
//! 이번 실행 동안만 메모리에 유지되고 있다는 뜻입니다.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::routes::words::AppState;

/// `GET /health` — 서버와 저장소 상태를 확인합니다. 실패하지 않습니다.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "storage": state.store.backend_name()
    }))
}
