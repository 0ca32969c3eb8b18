//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `review`: 복습 세션 핸들러
//! - `words`: 단어 조회 및 단어장 CRUD 핸들러 (+ `AppState`)

pub mod health;
pub mod review;
pub mod words;

// 핸들러와 AppState를 `routes::` 바로 아래에서 쓸 수 있게 다시 내보냅니다
pub use health::*;
pub use review::*;
pub use words::*;

use axum::{
    routing::{get, post}, // HTTP 메서드별 라우팅 함수
    Router,               // 경로와 핸들러를 잇는 라우터
};
use tower_http::{
    cors::{Any, CorsLayer}, // 브라우저 프런트엔드의 교차 출처 요청 허용
    trace::TraceLayer,      // 요청/응답 로깅 미들웨어
};

/// `/api/v1` 아래의 모든 API 라우트
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // 사전 조회
        .route("/lookup/{word}", get(lookup_word))
        // 단어장 CRUD
        .route("/words", get(list_words).post(create_word).delete(clear_words))
        // 고정 경로 /words/search는 /words/{id}보다 우선합니다
        .route("/words/search", get(search_words))
        .route("/words/{id}", get(get_word).delete(delete_word))
        // 현재 단어 / 저장 목록
        .route("/session", get(get_session))
        // 복습 세션
        .route("/review/sessions", post(start_review))
        .route("/review/sessions/{id}", get(get_review).delete(end_review))
        .route("/review/sessions/{id}/rate", post(rate_review))
        .route("/review/sessions/{id}/reset", post(reset_review))
        // 헬스체크 (저장소 종류 포함)
        .route("/health", get(health_check))
        // 모든 핸들러가 State<AppState>로 공유 상태를 받습니다
        .with_state(state)
}

/// 전체 애플리케이션 라우터: API를 `/api/v1`에 중첩하고 CORS·요청 로깅을 붙입니다.
///
/// 로컬 단일 사용자 도구이므로 CORS는 모든 출처를 허용합니다.
pub fn app(state: AppState) -> Router {
    // 모든 출처·메서드·헤더 허용
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http()) // 가장 바깥 레이어: 모든 요청을 로깅
}
