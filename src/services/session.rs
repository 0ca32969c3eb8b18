//! # 세션 상태 (Session State)
//!
//! 화면에 표시 중인 "현재 단어"와 마지막으로 읽어 온 저장 단어 목록을 들고 있는
//! 캐시입니다. 진실의 원천이 아니므로, 최신 내용이 필요한 곳은 `refresh_saved`로
//! 저장소에서 다시 읽어야 합니다.
//!
//! `AppState`에 `Arc<RwLock<SessionContext>>`로 명시적으로 들어 있으며,
//! 숨은 전역 변수로 쓰지 않습니다.

use serde::Serialize;

use crate::error::StoreError;
use crate::models::*;
use crate::services::word_store::WordStore;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionContext {
    /// 마지막으로 조회에 성공한 단어 — 다음 조회 성공 전까지 유지됩니다
    pub current_word: Option<NormalizedWord>,
    /// 저장소에서 마지막으로 읽어 온 단어 목록 (최신순)
    pub saved_words: Vec<WordRecord>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_word(&mut self, word: NormalizedWord) {
        self.current_word = Some(word);
    }

    /// 저장소에서 목록을 다시 읽습니다.
    ///
    /// 저장소가 실패하면 이전 목록을 그대로 두고 에러를 호출자에게 돌려줍니다.
    pub async fn refresh_saved(
        &mut self,
        store: &WordStore,
    ) -> Result<&[WordRecord], StoreError> {
        self.saved_words = store.get_all().await?;
        Ok(&self.saved_words)
    }

    /// 목록 맨 앞에 추가합니다. 같은 ID가 이미 있으면 무시합니다.
    pub fn add_saved(&mut self, word: WordRecord) {
        if !self.saved_words.iter().any(|w| w.id == word.id) {
            self.saved_words.insert(0, word);
        }
    }

    pub fn remove_saved(&mut self, id: &str) {
        self.saved_words.retain(|w| w.id != id);
    }

    pub fn clear_saved(&mut self) {
        self.saved_words.clear();
    }

    /// 현재 단어와 저장 목록 전체의 복사본
    pub fn snapshot(&self) -> SessionContext {
        self.clone()
    }

    /// 이 단어(같은 품사)가 저장 목록에 있는지 여부
    pub fn is_word_saved(&self, word: &str, part_of_speech: &str) -> bool {
        let id = derive_id(word, part_of_speech);
        self.saved_words.iter().any(|w| w.id == id)
    }
}
