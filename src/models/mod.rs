//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! 각 하위 모듈은 특정 도메인의 데이터 타입을 담당합니다:
//! - `word`: 저장된 단어(WordRecord), 저장 요청, 조회 결과
//! - `dictionary`: 외부 사전/번역 API 응답
//! - `review`: 복습 평가와 복습 화면 상태
//!
//! `pub use X::*;`로 하위 모듈의 항목을 재공개하여
//! `crate::models::WordRecord`처럼 짧게 접근할 수 있게 합니다.

pub mod dictionary;
pub mod review;
pub mod word;

pub use dictionary::*;
pub use review::*;
pub use word::*;
