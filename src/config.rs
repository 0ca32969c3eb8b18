//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목 (모두 기본값이 있어 환경변수 없이도 실행됩니다):
//! - `DATABASE_URL`: SQLite 데이터베이스 경로
//! - `HOST`, `PORT`: 서버 바인딩 주소와 포트
//! - `DICTIONARY_API_URL`: 영어 사전 API 기본 주소
//! - `TRANSLATE_API_URL`: 번역 API 주소
//! - `HTTP_TIMEOUT_MS`: 외부 API 호출 타임아웃 (밀리초)

use std::env;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/danci.db?mode=rwc";
pub const DEFAULT_DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
pub const DEFAULT_TRANSLATE_API_URL: &str = "https://api.mymemory.translated.net/get";
const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 공유됩니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 URL (예: "sqlite:data/danci.db?mode=rwc")
    pub database_url: String,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 3000)
    pub port: u16,
    /// 사전 API 기본 주소 — 뒤에 `/{word}`가 붙습니다
    pub dictionary_api_url: String,
    /// 번역 API 주소
    pub translate_api_url: String,
    /// 외부 API 호출 타임아웃
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            dictionary_api_url: DEFAULT_DICTIONARY_API_URL.to_string(),
            translate_api_url: DEFAULT_TRANSLATE_API_URL.to_string(),
            http_timeout: Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS),
        }
    }
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 필수 항목이 없으므로 실패하지 않습니다.
    /// 숫자 파싱에 실패한 값(PORT, HTTP_TIMEOUT_MS)은 기본값으로 대체됩니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 → 값 조회 함수로 설정을 만듭니다. 테스트에서 환경변수 대신 사용합니다.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            dictionary_api_url: lookup("DICTIONARY_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.dictionary_api_url),
            translate_api_url: lookup("TRANSLATE_API_URL").unwrap_or(defaults.translate_api_url),
            http_timeout: lookup("HTTP_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.http_timeout),
        }
    }
}
