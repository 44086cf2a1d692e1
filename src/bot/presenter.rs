use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId};
use teloxide::{ApiError, RequestError};

use crate::bot::TgBot;
use crate::poll::presenter::{EditOutcome, Presenter};

/// Poll messaging backed by the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramPresenter {
    bot: TgBot,
}

impl TelegramPresenter {
    pub fn new(bot: TgBot) -> Self {
        Self { bot }
    }
}

/// Sorts an edit failure into what the retry loop should do about it.
pub fn classify_edit_error(error: RequestError) -> EditOutcome {
    match error {
        RequestError::RetryAfter(cooldown) => EditOutcome::RateLimited(cooldown),
        RequestError::Api(
            ApiError::MessageNotModified | ApiError::MessageToEditNotFound | ApiError::MessageIdInvalid,
        ) => EditOutcome::Skip,
        e @ (RequestError::Network(_) | RequestError::Io(_) | RequestError::InvalidJson { .. }) => {
            EditOutcome::Retryable(e.to_string())
        }
        e => EditOutcome::Fatal(e.to_string()),
    }
}

#[async_trait]
impl Presenter for TelegramPresenter {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<MessageId> {
        let mut request = self.bot.send_message(chat_id, text);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(keyboard);
        }
        let message = request.await?;
        Ok(message.id)
    }

    async fn edit_message_text(&self, chat_id: ChatId, message_id: MessageId, text: &str) -> EditOutcome {
        match self.bot.edit_message_text(chat_id, message_id, text).await {
            Ok(_) => EditOutcome::Success,
            Err(e) => classify_edit_error(e),
        }
    }

    async fn pin_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()> {
        self.bot
            .pin_chat_message(chat_id, message_id)
            .disable_notification(true)
            .await?;
        Ok(())
    }

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()> {
        self.bot.delete_message(chat_id, message_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_retry_after_carries_cooldown() {
        assert_eq!(
            classify_edit_error(RequestError::RetryAfter(Duration::from_secs(3))),
            EditOutcome::RateLimited(Duration::from_secs(3))
        );
    }

    #[test]
    fn test_io_errors_are_retryable() {
        let error = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let outcome = classify_edit_error(RequestError::Io(error));
        assert!(matches!(outcome, EditOutcome::Retryable(_)));
    }

    #[test]
    fn test_benign_api_errors_are_skipped() {
        assert_eq!(
            classify_edit_error(RequestError::Api(ApiError::MessageNotModified)),
            EditOutcome::Skip
        );
        assert_eq!(
            classify_edit_error(RequestError::Api(ApiError::MessageToEditNotFound)),
            EditOutcome::Skip
        );
    }

    #[test]
    fn test_other_api_errors_are_fatal() {
        let outcome = classify_edit_error(RequestError::Api(ApiError::ChatNotFound));
        assert!(matches!(outcome, EditOutcome::Fatal(_)));
    }
}
