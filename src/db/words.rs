//! # 단어장 데이터베이스 쿼리 모듈
//!
//! `words` 테이블의 저장/조회/복습 기록/삭제를 담당하는 SQL 쿼리 함수들입니다.
//! 모든 함수는 `SqlitePool` 참조를 받아 비동기로 실행되며,
//! sqlx 에러는 `?`로 `StoreError::Unavailable`로 변환됩니다.
//!
//! 시각 값(`now`)은 호출하는 쪽에서 넘겨받습니다. 시계를 읽는 일은
//! `services::word_store::WordStore`가 맡습니다.

use crate::error::StoreError;
use crate::models::*;
use sqlx::SqlitePool;

/// 같은 밀리초에 저장된 단어는 나중에 넣은 것이 먼저 오도록 rowid로 한 번 더 정렬합니다.
const SELECT_WORDS: &str = r#"
    SELECT id, word, phonetic, part_of_speech, definition_en, definition_zh,
           example, created_at, review_count, last_review_at
    FROM words
"#;

/// 단어를 저장합니다. 같은 ID가 이미 있으면 기존 레코드를 그대로 반환합니다.
///
/// `INSERT OR IGNORE`는 기본키(id) 충돌 시 아무것도 쓰지 않으므로
/// 중복 생성도, 덮어쓰기도 일어나지 않습니다. 이어지는 SELECT는
/// 새로 넣은 행이든 원래 있던 행이든 실제 저장된 값을 돌려줍니다.
pub async fn add_word(
    pool: &SqlitePool,
    candidate: &NewWord,
    now: i64,
) -> Result<WordRecord, StoreError> {
    let id = candidate.id();

    let inserted = sqlx::query(
        r#"
        INSERT OR IGNORE INTO words
            (id, word, phonetic, part_of_speech, definition_en, definition_zh,
             example, created_at, review_count, last_review_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0, NULL)
        "#,
    )
    .bind(&id)
    .bind(&candidate.word)
    .bind(&candidate.phonetic)
    .bind(&candidate.part_of_speech)
    .bind(&candidate.definition_en)
    .bind(&candidate.definition_zh)
    .bind(&candidate.example)
    .bind(now)
    .execute(pool)
    .await?;

    if inserted.rows_affected() == 0 {
        tracing::debug!(%id, "word already saved, keeping existing record");
    }

    get_word(pool, &id).await?.ok_or_else(|| {
        // 방금 INSERT (또는 IGNORE) 한 행이 보이지 않는 것은 저장소 이상입니다
        StoreError::Unavailable(sqlx::Error::RowNotFound)
    })
}

/// 저장된 모든 단어를 최신순(`created_at DESC`)으로 조회합니다.
///
/// 단어가 없으면 빈 Vec을 반환합니다.
pub async fn list_words(pool: &SqlitePool) -> Result<Vec<WordRecord>, StoreError> {
    let sql = format!("{} ORDER BY created_at DESC, rowid DESC", SELECT_WORDS);
    let words = sqlx::query_as::<_, WordRecord>(&sql)
        .fetch_all(pool)
        .await?;

    Ok(words)
}

/// ID로 단어 하나를 조회합니다. 없으면 `None`입니다.
pub async fn get_word(pool: &SqlitePool, id: &str) -> Result<Option<WordRecord>, StoreError> {
    let sql = format!("{} WHERE id = ?", SELECT_WORDS);
    let word = sqlx::query_as::<_, WordRecord>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(word)
}

/// 단어 텍스트로 조회합니다 (대소문자 무시).
///
/// 같은 단어라도 품사별로 다른 레코드이므로 여러 개가 나올 수 있습니다.
pub async fn find_words_by_text(
    pool: &SqlitePool,
    word: &str,
) -> Result<Vec<WordRecord>, StoreError> {
    let sql = format!(
        "{} WHERE lower(word) = ? ORDER BY created_at DESC, rowid DESC",
        SELECT_WORDS
    );
    let words = sqlx::query_as::<_, WordRecord>(&sql)
        .bind(word.to_lowercase())
        .fetch_all(pool)
        .await?;

    Ok(words)
}

/// 복습 한 번을 기록합니다: `review_count + 1`, `last_review_at = now`.
///
/// 단일 UPDATE 문이므로 원자적입니다. 해당 ID가 없으면(이미 삭제됨)
/// 아무것도 바뀌지 않고 `false`를 반환합니다 — 에러가 아닙니다.
pub async fn record_review(pool: &SqlitePool, id: &str, now: i64) -> Result<bool, StoreError> {
    let result = sqlx::query(
        r#"
        UPDATE words
        SET review_count = review_count + 1,
            last_review_at = ?
        WHERE id = ?
        "#,
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// ID로 단어를 삭제합니다. 없는 ID를 지워도 에러가 아닙니다.
pub async fn delete_word(pool: &SqlitePool, id: &str) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM words WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// 단어장을 비웁니다. 삭제된 행 수를 반환합니다.
pub async fn clear_words(pool: &SqlitePool) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM words").execute(pool).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn candidate(word: &str, pos: &str) -> NewWord {
        NewWord {
            word: word.to_string(),
            phonetic: "/test/".to_string(),
            part_of_speech: pos.to_string(),
            definition_en: format!("definition of {}", word),
            definition_zh: String::new(),
            example: String::new(),
        }
    }

    #[tokio::test]
    async fn add_is_idempotent_and_keeps_first_write() {
        let pool = test_pool().await;
        let first = add_word(&pool, &candidate("run", "verb"), 100).await.unwrap();

        let mut changed = candidate("run", "verb");
        changed.definition_en = "something else".to_string();
        let second = add_word(&pool, &changed, 200).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.created_at, 100);
        assert_eq!(list_words(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let pool = test_pool().await;
        add_word(&pool, &candidate("b", "noun"), 1).await.unwrap();
        add_word(&pool, &candidate("a", "noun"), 2).await.unwrap();

        let ids: Vec<String> = list_words(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(ids, vec!["a-noun", "b-noun"]);
    }

    #[tokio::test]
    async fn same_millisecond_keeps_insertion_order() {
        let pool = test_pool().await;
        add_word(&pool, &candidate("first", "noun"), 5).await.unwrap();
        add_word(&pool, &candidate("second", "noun"), 5).await.unwrap();

        let words = list_words(&pool).await.unwrap();
        assert_eq!(words[0].id, "second-noun");
        assert_eq!(words[1].id, "first-noun");
    }

    #[tokio::test]
    async fn finds_every_part_of_speech_ignoring_case() {
        let pool = test_pool().await;
        add_word(&pool, &candidate("Run", "verb"), 1).await.unwrap();
        add_word(&pool, &candidate("run", "noun"), 2).await.unwrap();
        add_word(&pool, &candidate("walk", "verb"), 3).await.unwrap();

        let found = find_words_by_text(&pool, "RUN").await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|w| w.word.eq_ignore_ascii_case("run")));
    }

    #[tokio::test]
    async fn review_increments_once_and_ignores_missing_ids() {
        let pool = test_pool().await;
        add_word(&pool, &candidate("run", "verb"), 1).await.unwrap();

        assert!(record_review(&pool, "run-verb", 50).await.unwrap());
        assert!(!record_review(&pool, "gone-noun", 60).await.unwrap());

        let word = get_word(&pool, "run-verb").await.unwrap().unwrap();
        assert_eq!(word.review_count, 1);
        assert_eq!(word.last_review_at, Some(50));
        assert_eq!(word.created_at, 1);
    }

    #[tokio::test]
    async fn delete_and_clear_are_idempotent() {
        let pool = test_pool().await;
        add_word(&pool, &candidate("run", "verb"), 1).await.unwrap();
        add_word(&pool, &candidate("walk", "verb"), 2).await.unwrap();

        assert!(delete_word(&pool, "run-verb").await.unwrap());
        assert!(!delete_word(&pool, "run-verb").await.unwrap());
        assert_eq!(clear_words(&pool).await.unwrap(), 1);
        assert_eq!(clear_words(&pool).await.unwrap(), 0);
        assert!(list_words(&pool).await.unwrap().is_empty());
    }
}
