//! # 서비스 계층 (비즈니스 로직)
//!
//! 라우트 핸들러와 DB 계층 사이의 로직을 모아둔 모듈입니다.
//! - `word_store`: 단어 저장소 (SQLite + 메모리 대체)
//! - `dictionary`: 외부 사전/번역 API 클라이언트
//! - `lookup`: 사전 → 번역 조회 파이프라인
//! - `review`: 복습 세션 상태 기계
//! - `session`: 현재 단어 / 저장 단어 캐시

pub mod dictionary;
pub mod lookup;
pub mod review;
pub mod session;
pub mod word_store;

pub use dictionary::{
    Dictionary, FreeDictionaryClient, LookupError, MyMemoryTranslator, Translator,
};
pub use lookup::{DefinedWord, WordLookup};
pub use review::{ReviewRegistry, ReviewSession};
pub use session::SessionContext;
pub use word_store::WordStore;
