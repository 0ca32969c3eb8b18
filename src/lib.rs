//! # danci — 단어 조회 · 플래시카드 복습 서비스
//!
//! 영어 단어를 사전/번역 API로 조회하고, 저장한 단어를 로컬 SQLite에
//! 보관하며, 저장한 단어를 플래시카드로 한 장씩 복습하는 단일 사용자용 서버입니다.
//!
//! ## 흐름
//! ```text
//! 조회(WordLookup) → 현재 단어(SessionContext) → 저장(WordStore)
//!                                                   ↓
//!                         복습(ReviewSession) ← 스냅샷(get_all)
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, StoreError};
pub use routes::{app, AppState};
