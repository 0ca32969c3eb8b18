//! # 복습 큐 (Review Queue Controller)
//!
//! 복습을 시작하는 순간의 단어장 스냅샷을 커서로 한 장씩 넘깁니다.
//!
//! ## 상태 전이
//! ```text
//! start([])      → Empty (세션 없음)
//! start(words)   → Active(cursor = 0)
//! rate(_)        → Active(cursor + 1)      cursor + 1 < len
//!                → Done(reviewed = len)    마지막 카드
//! reset()        → Active(cursor = 0)      같은 스냅샷, 다시 읽지 않음
//! ```
//! 평가 값(hard/medium/easy)은 전이에 영향을 주지 않습니다. 세션 도중
//! 단어장이 바뀌어도 스냅샷은 그대로이며, 새 세션을 시작해야 반영됩니다.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::models::*;
use crate::services::word_store::WordStore;

#[derive(Debug, Clone)]
pub struct ReviewSession {
    ordered_words: Vec<WordRecord>,
    cursor: usize,
    completed: bool,
}

impl ReviewSession {
    /// 스냅샷으로 세션을 시작합니다. 단어가 없으면 `None`(Empty)입니다.
    pub fn start(words: Vec<WordRecord>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self {
            ordered_words: words,
            cursor: 0,
            completed: false,
        })
    }

    /// 지금 보여줄 카드. 완료된 세션에는 카드가 없습니다.
    pub fn current(&self) -> Option<&WordRecord> {
        if self.completed {
            None
        } else {
            self.ordered_words.get(self.cursor)
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.ordered_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_words.is_empty()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// 다음 카드로 넘기거나, 마지막 카드였다면 완료 처리합니다.
    /// 이미 완료된 세션에서는 아무것도 하지 않습니다.
    pub fn advance(&mut self) {
        if self.completed {
            return;
        }
        if self.cursor + 1 < self.ordered_words.len() {
            self.cursor += 1;
        } else {
            self.completed = true;
        }
    }

    /// 카드를 평가합니다: 저장소에 복습을 기록한 뒤 다음 카드로 넘깁니다.
    ///
    /// 그 사이 단어가 삭제되었으면 기록은 조용히 무시되고,
    /// 저장소 오류가 나도 커서는 정상적으로 넘어갑니다.
    pub async fn rate(&mut self, store: &WordStore, rating: Rating) -> ReviewState {
        let Some(card) = self.current() else {
            return self.state();
        };
        let id = card.id.clone();

        match store.update_review(&id).await {
            Ok(true) => tracing::debug!(%id, rating = rating.as_str(), "Review recorded"),
            Ok(false) => tracing::debug!(%id, "Reviewed word no longer exists"),
            Err(e) => tracing::warn!(%id, "Could not record review: {}", e),
        }

        self.advance();
        if self.completed {
            tracing::info!(reviewed = self.len(), "Review session completed");
        }
        self.state()
    }

    /// 같은 스냅샷으로 처음부터 다시 시작합니다.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.completed = false;
    }

    pub fn state(&self) -> ReviewState {
        match self.current() {
            Some(card) => ReviewState::Active {
                card: card.clone(),
                cursor: self.cursor,
                total: self.len(),
            },
            None => ReviewState::Done {
                reviewed: self.len(),
            },
        }
    }
}

/// 이 시간 동안 아무 요청이 없던 세션은 다음 `start` 때 정리됩니다.
pub const SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);
/// 동시에 유지하는 세션 수 상한. 넘치면 가장 오래된 세션부터 지웁니다.
pub const MAX_SESSIONS: usize = 256;

struct Slot {
    session: Arc<Mutex<ReviewSession>>,
    seq: u64,
    touched: Instant,
}

#[derive(Default)]
struct Slots {
    by_id: HashMap<String, Slot>,
    next_seq: u64,
}

/// 진행 중인 복습 세션 목록 (메모리 전용, 재시작하면 사라집니다)
///
/// 목록 잠금은 세션을 찾거나 넣을 때만 잠깐 쥡니다. 평가처럼 저장소를
/// 기다리는 작업은 해당 세션의 잠금만 쥐므로 다른 세션을 막지 않습니다.
#[derive(Clone)]
pub struct ReviewRegistry {
    slots: Arc<Mutex<Slots>>,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl Default for ReviewRegistry {
    fn default() -> Self {
        Self::with_limits(SESSION_IDLE_TIMEOUT, MAX_SESSIONS)
    }
}

impl ReviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(idle_timeout: Duration, max_sessions: usize) -> Self {
        Self {
            slots: Arc::new(Mutex::new(Slots::default())),
            idle_timeout,
            max_sessions: max_sessions.max(1),
        }
    }

    /// 저장소의 현재 단어장으로 새 세션을 만듭니다.
    ///
    /// 단어가 없으면 세션 없이 `(None, Empty)`를 반환합니다.
    pub async fn start(
        &self,
        words: Vec<WordRecord>,
    ) -> (Option<String>, ReviewState) {
        let Some(session) = ReviewSession::start(words) else {
            return (None, ReviewState::Empty);
        };

        let id = uuid::Uuid::now_v7().to_string();
        let state = session.state();

        let mut slots = self.slots.lock().await;
        self.evict(&mut slots);

        let seq = slots.next_seq;
        slots.next_seq += 1;
        slots.by_id.insert(
            id.clone(),
            Slot {
                session: Arc::new(Mutex::new(session)),
                seq,
                touched: Instant::now(),
            },
        );
        tracing::debug!(session_id = %id, "Review session started");
        (Some(id), state)
    }

    /// 오래 쉬고 있던 세션을 지우고, 새 세션이 들어갈 자리를 만듭니다.
    fn evict(&self, slots: &mut Slots) {
        let before = slots.by_id.len();
        slots
            .by_id
            .retain(|_, slot| slot.touched.elapsed() < self.idle_timeout);

        while slots.by_id.len() >= self.max_sessions {
            let oldest = slots
                .by_id
                .iter()
                .min_by_key(|(_, slot)| slot.seq)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    slots.by_id.remove(&id);
                }
                None => break,
            }
        }

        let evicted = before - slots.by_id.len();
        if evicted > 0 {
            tracing::debug!(evicted, "Review sessions evicted");
        }
    }

    /// 세션을 찾아 마지막 사용 시각을 갱신합니다.
    async fn touch(&self, id: &str) -> Option<Arc<Mutex<ReviewSession>>> {
        let mut slots = self.slots.lock().await;
        let slot = slots.by_id.get_mut(id)?;
        slot.touched = Instant::now();
        Some(slot.session.clone())
    }

    pub async fn state(&self, id: &str) -> Option<ReviewState> {
        let session = self.touch(id).await?;
        let state = session.lock().await.state();
        Some(state)
    }

    /// 세션 잠금을 쥔 채로 저장소에 기록하므로 같은 세션의 평가는 하나씩 적용됩니다.
    pub async fn rate(&self, id: &str, store: &WordStore, rating: Rating) -> Option<ReviewState> {
        let session = self.touch(id).await?;
        let mut session = session.lock().await;
        Some(session.rate(store, rating).await)
    }

    pub async fn reset(&self, id: &str) -> Option<ReviewState> {
        let session = self.touch(id).await?;
        let mut session = session.lock().await;
        session.reset();
        Some(session.state())
    }

    pub async fn end(&self, id: &str) -> bool {
        self.slots.lock().await.by_id.remove(id).is_some()
    }

    /// 현재 유지 중인 세션 수
    pub async fn len(&self) -> usize {
        self.slots.lock().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
