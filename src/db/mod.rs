//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 단어장 데이터와 직접 상호작용하는 코드를 모아둔 모듈입니다.
//! 서비스 계층(`services::word_store`)이 이 모듈의 함수를 호출합니다.
//!
//! 각 하위 모듈:
//! - `words`: SQLite `words` 테이블 쿼리
//! - `memory`: SQLite를 쓸 수 없을 때 사용하는 메모리 단어장

pub mod memory;
pub mod words;

pub use memory::MemoryWords;
pub use words::*;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::StoreError;

/// SQLite 연결 풀을 열고 마이그레이션을 실행합니다.
///
/// - 파일 DB면 상위 디렉토리를 만들고, 파일이 없으면 새로 생성합니다.
/// - `sqlite::memory:`는 연결마다 별도 DB가 되므로 연결 하나만 유지하고
///   유휴 연결이 정리되지 않게 합니다.
pub async fn connect(database_url: &str) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let in_memory = database_url.contains(":memory:")
        || options.get_filename().as_os_str().is_empty();

    if !in_memory {
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(sqlx::Error::Io)?;
                tracing::info!("Created database directory: {}", parent.display());
            }
        }
    }

    let pool = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?
    };

    migrate(&pool).await?;
    Ok(pool)
}

/// `./migrations`의 SQL을 아직 적용되지 않은 것만 순서대로 실행합니다.
pub async fn migrate(pool: &SqlitePool) -> Result<(), StoreError> {
    tracing::debug!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(sqlx::Error::from)?;
    Ok(())
}

/// 테스트용 메모리 DB (마이그레이션 적용됨)
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite should open")
}
