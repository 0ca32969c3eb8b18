//! # danci 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 단어 저장소 열기 (SQLite, 실패 시 메모리)
//! 4. 사전/번역 클라이언트 생성
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작

use std::sync::Arc; // 여러 곳에서 같은 클라이언트를 공유하기 위한 참조 카운팅 포인터

use anyhow::Result; // 어떤 에러든 담는 범용 Result (main에서만 사용)
use danci::{
    // 라이브러리 크레이트(src/lib.rs)에서 가져오는 항목들
    services::{FreeDictionaryClient, MyMemoryTranslator, WordLookup, WordStore},
    AppState, Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 로깅 초기화 유틸리티

// 멀티스레드 tokio 런타임 위에서 main을 실행합니다
#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    tracing_subscriber::registry()
        .with(
            // RUST_LOG가 없으면 danci, tower_http, axum 모듈을 debug 레벨로 출력
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "danci=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer()) // 터미널 출력 포맷터
        .init(); // 전역 로거로 등록

    // ── 3단계: 설정 로딩 ──
    // 잘못된 숫자 값은 기본값으로 대체되므로 여기서는 실패하지 않습니다
    let config = Config::from_env();
    tracing::info!("Starting danci server on {}:{}", config.host, config.port);

    // ── 4단계: 단어 저장소 열기 ──
    // DB를 열 수 없어도 서버는 메모리 단어장으로 계속 실행됩니다
    let store = WordStore::open(&config.database_url).await;

    // ── 5단계: 사전/번역 클라이언트 ──
    // 같은 타임아웃 설정을 공유하는 reqwest 클라이언트 두 개
    let lookup = WordLookup::new(
        Arc::new(FreeDictionaryClient::from_config(&config)),
        Arc::new(MyMemoryTranslator::from_config(&config)),
    );

    // ── 6단계: 라우터 구성 ──
    // /api/v1 중첩, CORS, 요청 로깅은 routes::app 안에서 붙습니다
    let app = danci::app(AppState::new(store, lookup));

    // ── 7단계: HTTP 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?; // 포트가 사용 중이면 여기서 종료
    tracing::info!("Server listening on {}", addr);

    // 종료 신호가 올 때까지 요청을 처리합니다
    axum::serve(listener, app).await?;

    Ok(())
}
