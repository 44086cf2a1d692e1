use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

use crate::poll::models::{ChatPollState, StoredChatState};
use crate::utils::datetime::today;
use crate::utils::logging::{log_store_error, log_store_operation};
use crate::utils::validation::sanitize_chat_label;

/// Durable per-chat snapshots, one JSON file per chat.
#[derive(Debug, Clone)]
pub struct ChatStore {
    data_dir: PathBuf,
}

impl ChatStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Creates the data directory if it does not exist yet.
    pub async fn init(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", self.data_dir.display()))
    }

    pub fn path_for(&self, chat_id: i64, chat_label: &str) -> PathBuf {
        self.data_dir
            .join(format!("stolovaya_{}_{}.json", sanitize_chat_label(chat_label), chat_id))
    }

    /// Loads today's state for the chat.
    ///
    /// A missing, unreadable or outdated file yields a fresh empty state.
    pub async fn load(&self, chat_id: i64, chat_label: &str) -> ChatPollState {
        self.load_for_date(chat_id, chat_label, today()).await
    }

    pub async fn load_for_date(&self, chat_id: i64, chat_label: &str, today: NaiveDate) -> ChatPollState {
        let path = self.path_for(chat_id, chat_label);
        let display = path.display().to_string();

        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log_store_operation("load", &display, Some("no file, starting fresh"));
                return ChatPollState::fresh(today);
            }
            Err(e) => {
                log_store_error("load", &display, &e.to_string());
                return ChatPollState::fresh(today);
            }
        };

        let stored: StoredChatState = match serde_json::from_slice(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                log_store_error("parse", &display, &e.to_string());
                return ChatPollState::fresh(today);
            }
        };

        let stored_date = stored.date;
        match stored.into_state(today) {
            Some(state) => {
                log_store_operation("load", &display, Some(format!("{} votes", state.votes.len()).as_str()));
                state
            }
            None => {
                log_store_operation("load", &display, Some(format!("expired snapshot from {stored_date}").as_str()));
                ChatPollState::fresh(today)
            }
        }
    }

    /// Writes the state next to its final path and renames it into place, so a
    /// reader never sees a half-written file.
    pub async fn save(&self, chat_id: i64, chat_label: &str, state: &ChatPollState) -> Result<()> {
        let path = self.path_for(chat_id, chat_label);
        let tmp_path = path.with_extension("json.tmp");

        let record = StoredChatState::from_state(chat_id, chat_label, state);
        let content = serde_json::to_vec_pretty(&record).context("Failed to serialize chat state")?;

        tokio::fs::write(&tmp_path, &content)
            .await
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        tokio::fs::rename(&tmp_path, &path)
            .await
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        log_store_operation(
            "save",
            &path.display().to_string(),
            Some(format!("{} votes", state.votes.len()).as_str()),
        );
        Ok(())
    }

    /// Round-trips a probe file to check the directory is writable.
    pub async fn check_writable(&self) -> Result<()> {
        let probe = self.data_dir.join(".health_probe");
        tokio::fs::write(&probe, b"ok").await?;
        tokio::fs::remove_file(&probe).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_combines_label_and_chat_id() {
        let store = ChatStore::new("data");
        let path = store.path_for(-1001234, "10 \"Б\" класс");
        assert_eq!(path, PathBuf::from("data").join("stolovaya_10_Б_класс_-1001234.json"));
    }
}
