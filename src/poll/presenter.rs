use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use teloxide::types::{ChatId, InlineKeyboardMarkup, MessageId};

/// Classified result of an in-place message edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The message now shows the new text.
    Success,
    /// Nothing to do: the text already matches or the message is gone.
    Skip,
    /// The platform asked us to back off for the given cooldown.
    RateLimited(Duration),
    /// A temporary failure worth another attempt.
    Retryable(String),
    /// Retrying will not help.
    Fatal(String),
}

/// Messaging primitives the poll core needs from the chat platform.
#[async_trait]
pub trait Presenter: Send + Sync {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<MessageId>;

    async fn edit_message_text(&self, chat_id: ChatId, message_id: MessageId, text: &str) -> EditOutcome;

    /// Pins silently, without notifying chat members.
    async fn pin_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()>;

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()>;
}
