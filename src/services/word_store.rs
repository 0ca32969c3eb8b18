//! # 단어 저장소 (Word Record Store)
//!
//! 저장된 단어의 유일한 영속 소유자입니다. 라우트와 복습 세션은
//! 항상 이 타입을 통해 단어장을 읽고 씁니다.
//!
//! ## 저장소 전환
//! ```text
//! [SQLite] --(첫 sqlx 에러: 경고 1회, 해당 호출은 Err)--> [메모리]
//! ```
//! SQLite가 실패하면(디스크 가득 참, 파일 잠김 등) 그 호출만
//! `StoreError::Unavailable`을 반환하고, 이후 호출은 빈 메모리 단어장에서
//! 계속 동작합니다. 시작 시점에 DB를 열 수 없으면 처음부터 메모리로 시작합니다.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use sqlx::SqlitePool;

use crate::db::{self, MemoryWords};
use crate::error::StoreError;
use crate::models::*;

/// 현재 시각 (UTC 밀리초)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// 단어 저장소 핸들 — clone해도 같은 저장소를 가리킵니다.
#[derive(Clone)]
pub struct WordStore {
    inner: Arc<Inner>,
}

struct Inner {
    pool: Option<SqlitePool>,
    fallback: Mutex<MemoryWords>,
    degraded: AtomicBool,
}

impl WordStore {
    /// SQLite 풀 위에서 동작하는 저장소
    pub fn sqlite(pool: SqlitePool) -> Self {
        Self::build(Some(pool))
    }

    /// 처음부터 메모리로만 동작하는 저장소
    pub fn in_memory() -> Self {
        Self::build(None)
    }

    fn build(pool: Option<SqlitePool>) -> Self {
        Self {
            inner: Arc::new(Inner {
                pool,
                fallback: Mutex::new(MemoryWords::new()),
                degraded: AtomicBool::new(false),
            }),
        }
    }

    /// DB를 열고 마이그레이션합니다. 실패하면 경고를 남기고 메모리 저장소를 반환합니다.
    pub async fn open(database_url: &str) -> Self {
        match db::connect(database_url).await {
            Ok(pool) => {
                tracing::info!("Word store opened at {}", database_url);
                Self::sqlite(pool)
            }
            Err(e) => {
                tracing::warn!(
                    "Word store unavailable ({}); saved words will be kept in memory only",
                    e
                );
                Self::in_memory()
            }
        }
    }

    /// SQLite를 쓰지 않고 메모리로 동작 중인지 여부
    pub fn is_degraded(&self) -> bool {
        self.inner.pool.is_none() || self.inner.degraded.load(Ordering::SeqCst)
    }

    /// `/health`에 표시할 저장소 종류
    pub fn backend_name(&self) -> &'static str {
        if self.is_degraded() {
            "memory"
        } else {
            "sqlite"
        }
    }

    fn active_pool(&self) -> Option<&SqlitePool> {
        if self.inner.degraded.load(Ordering::SeqCst) {
            None
        } else {
            self.inner.pool.as_ref()
        }
    }

    /// SQLite 결과를 그대로 돌려주되, 실패했다면 메모리 저장소로 전환합니다.
    fn guard<T>(&self, result: Result<T, StoreError>) -> Result<T, StoreError> {
        if let Err(ref e) = result {
            if !self.inner.degraded.swap(true, Ordering::SeqCst) {
                tracing::warn!(
                    "{}; continuing with an in-memory word list for this session",
                    e
                );
            }
        }
        result
    }

    /// 단어를 저장합니다. 같은 ID가 있으면 기존 레코드를 바꾸지 않고 반환합니다.
    pub async fn add(&self, candidate: &NewWord) -> Result<WordRecord, StoreError> {
        let now = now_millis();
        if let Some(pool) = self.active_pool() {
            return self.guard(db::add_word(pool, candidate, now).await);
        }
        Ok(self.inner.fallback.lock().add(candidate, now))
    }

    /// 모든 단어를 최신순으로 반환합니다.
    pub async fn get_all(&self) -> Result<Vec<WordRecord>, StoreError> {
        if let Some(pool) = self.active_pool() {
            return self.guard(db::list_words(pool).await);
        }
        Ok(self.inner.fallback.lock().list())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<WordRecord>, StoreError> {
        if let Some(pool) = self.active_pool() {
            return self.guard(db::get_word(pool, id).await);
        }
        Ok(self.inner.fallback.lock().get(id))
    }

    /// 단어 텍스트로 찾습니다 (대소문자 무시, 품사별로 여러 개 가능).
    pub async fn get_by_word(&self, word: &str) -> Result<Vec<WordRecord>, StoreError> {
        if let Some(pool) = self.active_pool() {
            return self.guard(db::find_words_by_text(pool, word).await);
        }
        Ok(self.inner.fallback.lock().find_by_text(word))
    }

    /// 복습 한 번을 기록합니다. 없는 ID면 아무것도 하지 않고 `Ok(false)`입니다.
    ///
    /// 다른 곳에서 단어를 지운 직후 복습 버튼이 눌리는 경우가 여기에 해당합니다.
    pub async fn update_review(&self, id: &str) -> Result<bool, StoreError> {
        let now = now_millis();
        if let Some(pool) = self.active_pool() {
            return self.guard(db::record_review(pool, id, now).await);
        }
        Ok(self.inner.fallback.lock().record_review(id, now))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        if let Some(pool) = self.active_pool() {
            return self.guard(db::delete_word(pool, id).await);
        }
        Ok(self.inner.fallback.lock().delete(id))
    }

    pub async fn clear(&self) -> Result<u64, StoreError> {
        if let Some(pool) = self.active_pool() {
            return self.guard(db::clear_words(pool).await);
        }
        Ok(self.inner.fallback.lock().clear())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn candidate(word: &str, pos: &str) -> NewWord {
        NewWord {
            word: word.to_string(),
            phonetic: String::new(),
            part_of_speech: pos.to_string(),
            definition_en: "def".to_string(),
            definition_zh: String::new(),
            example: String::new(),
        }
    }

    #[tokio::test]
    async fn review_sets_timestamp_not_before_call() {
        let store = WordStore::sqlite(test_pool().await);
        store.add(&candidate("run", "verb")).await.unwrap();

        let before = now_millis();
        assert!(store.update_review("run-verb").await.unwrap());

        let word = store.get_by_id("run-verb").await.unwrap().unwrap();
        assert_eq!(word.review_count, 1);
        assert!(word.last_review_at.unwrap() >= before);
    }

    #[tokio::test]
    async fn fails_over_to_memory_after_first_error() {
        let pool = test_pool().await;
        let store = WordStore::sqlite(pool.clone());
        store.add(&candidate("run", "verb")).await.unwrap();
        assert_eq!(store.backend_name(), "sqlite");

        pool.close().await;

        let first = store.get_all().await;
        assert!(matches!(first, Err(StoreError::Unavailable(_))));
        assert!(store.is_degraded());

        // 이후 호출은 빈 메모리 단어장에서 동작합니다
        assert!(store.get_all().await.unwrap().is_empty());
        store.add(&candidate("walk", "verb")).await.unwrap();
        assert_eq!(store.get_all().await.unwrap().len(), 1);
        assert_eq!(store.backend_name(), "memory");
    }

    #[tokio::test]
    async fn unreachable_database_starts_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        // 디렉토리 자체를 DB 파일로 열 수는 없습니다
        let url = format!("sqlite:{}", dir.path().display());
        let store = WordStore::open(&url).await;

        assert!(store.is_degraded());
        let saved = store.add(&candidate("run", "verb")).await.unwrap();
        assert_eq!(saved.review_count, 0);
        assert_eq!(store.get_by_word("RUN").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn file_database_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}?mode=rwc", dir.path().join("nested/danci.db").display());

        let store = WordStore::open(&url).await;
        assert!(!store.is_degraded());
        store.add(&candidate("run", "verb")).await.unwrap();
        store.update_review("run-verb").await.unwrap();
        drop(store);

        let reopened = WordStore::open(&url).await;
        let word = reopened.get_by_id("run-verb").await.unwrap().unwrap();
        assert_eq!(word.review_count, 1);
    }
}
