use anyhow::Result;
use chrono::NaiveDate;
use dashmap::DashMap;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::poll::models::ChatPollState;
use crate::poll::store::ChatStore;
use crate::utils::datetime::today;

/// Cached state of one chat. `loaded` flips once the store has been consulted.
#[derive(Debug)]
struct ChatSlot {
    state: ChatPollState,
    loaded: bool,
}

/// In-memory owner of every chat's poll state.
///
/// Each chat gets its own lock, created on first use and kept for the lifetime
/// of the process. Work on one chat is serialized; different chats never wait
/// on each other.
pub struct ChatStateManager {
    store: ChatStore,
    chats: DashMap<i64, Arc<Mutex<ChatSlot>>>,
}

impl ChatStateManager {
    pub fn new(store: ChatStore) -> Self {
        Self {
            store,
            chats: DashMap::new(),
        }
    }

    pub fn store(&self) -> &ChatStore {
        &self.store
    }

    /// Number of chats with a lock registered in this process.
    pub fn cached_chats(&self) -> usize {
        self.chats.len()
    }

    fn slot(&self, chat_id: i64, today: NaiveDate) -> Arc<Mutex<ChatSlot>> {
        self.chats
            .entry(chat_id)
            .or_insert_with(|| {
                Arc::new(Mutex::new(ChatSlot {
                    state: ChatPollState::fresh(today),
                    loaded: false,
                }))
            })
            .clone()
    }

    /// Acquires the chat's lock and returns its current state.
    ///
    /// The first access loads the state from the store. A cached state from a
    /// previous day is replaced by an empty one.
    pub async fn lock(&self, chat_id: i64, chat_label: &str) -> ChatStateGuard<'_> {
        self.lock_for_date(chat_id, chat_label, today()).await
    }

    pub async fn lock_for_date(&self, chat_id: i64, chat_label: &str, today: NaiveDate) -> ChatStateGuard<'_> {
        let mut slot = self.slot(chat_id, today).lock_owned().await;

        if !slot.loaded {
            slot.state = self.store.load_for_date(chat_id, chat_label, today).await;
            slot.loaded = true;
        } else if slot.state.is_expired(today) {
            tracing::debug!(
                "Chat {} state from {} expired, starting a fresh day",
                chat_id,
                slot.state.valid_date
            );
            slot.state = ChatPollState::fresh(today);
        }

        ChatStateGuard {
            store: &self.store,
            chat_id,
            chat_label: chat_label.to_string(),
            slot,
        }
    }

    /// Runs `f` on the chat's state under its lock and persists the result
    /// before the lock is released.
    ///
    /// Suited to synchronous edits. Work that must await other calls while
    /// the chat is locked, like the poll controller's messaging, goes through
    /// [`ChatStateManager::lock`] and [`ChatStateGuard::persist`] instead.
    pub async fn with_state<R>(
        &self,
        chat_id: i64,
        chat_label: &str,
        f: impl FnOnce(&mut ChatPollState) -> R,
    ) -> Result<R> {
        let mut guard = self.lock(chat_id, chat_label).await;
        let result = f(&mut guard);
        guard.persist().await?;
        Ok(result)
    }
}

/// Exclusive access to one chat's state. The chat stays locked until drop.
pub struct ChatStateGuard<'a> {
    store: &'a ChatStore,
    chat_id: i64,
    chat_label: String,
    slot: OwnedMutexGuard<ChatSlot>,
}

impl ChatStateGuard<'_> {
    /// Writes the current state to the store.
    pub async fn persist(&self) -> Result<()> {
        self.store.save(self.chat_id, &self.chat_label, &self.slot.state).await
    }
}

impl Deref for ChatStateGuard<'_> {
    type Target = ChatPollState;

    fn deref(&self) -> &Self::Target {
        &self.slot.state
    }
}

impl DerefMut for ChatStateGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.slot.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::models::{Vote, VoteStatus};
    use chrono::Utc;
    use tempfile::TempDir;

    fn eating(name: &str) -> Vote {
        Vote {
            display_name: name.to_string(),
            handle: None,
            status: VoteStatus::Eating,
        }
    }

    #[tokio::test]
    async fn test_cached_state_rolls_over_to_new_day() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let manager = ChatStateManager::new(ChatStore::new(temp_dir.path()));
        let monday = NaiveDate::from_ymd_opt(2024, 9, 2).expect("valid date");
        let tuesday = monday.succ_opt().expect("valid date");

        {
            let mut guard = manager.lock_for_date(-1, "Класс", monday).await;
            guard.record_vote("7", eating("Аня"), Utc::now().naive_utc());
            guard.results_message_id = Some(10);
            guard.persist().await.expect("persist");
        }

        let guard = manager.lock_for_date(-1, "Класс", tuesday).await;
        assert!(guard.votes.is_empty());
        assert_eq!(guard.results_message_id, None);
        assert_eq!(guard.valid_date, tuesday);
    }

    #[tokio::test]
    async fn test_locks_are_per_chat() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let manager = ChatStateManager::new(ChatStore::new(temp_dir.path()));

        let _first = manager.lock(-1, "A").await;
        // A second chat must not wait on the first chat's lock.
        let second = tokio::time::timeout(std::time::Duration::from_secs(1), manager.lock(-2, "B")).await;
        assert!(second.is_ok());
        assert_eq!(manager.cached_chats(), 2);
    }

    #[tokio::test]
    async fn test_with_state_persists_before_unlocking() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let manager = ChatStateManager::new(ChatStore::new(temp_dir.path()));

        let count = manager
            .with_state(-5, "Класс", |state| {
                state.record_vote("7", eating("Аня"), Utc::now().naive_utc());
                state.votes.len()
            })
            .await
            .expect("with_state");
        assert_eq!(count, 1);

        let stored = ChatStore::new(temp_dir.path()).load(-5, "Класс").await;
        assert_eq!(stored.votes.len(), 1);
    }
}
