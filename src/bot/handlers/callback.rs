use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, ParseMode, User};
use teloxide::{ApiError, RequestError};

use crate::bot::actions::MenuAction;
use crate::bot::handlers::{HandlerResult, TelegramPollController};
use crate::bot::keyboards::{
    canteen_menu, days_menu, duties_menu, main_menu, profile_menu, CANTEEN_MENU_TEXT, MAIN_MENU_TEXT,
    PROFILE_MENU_TEXT,
};
use crate::bot::TgBot;
use crate::content::{day_schedule, DUTIES_TEXT};
use crate::poll::{Presenter, Voter};
use crate::utils::logging::{log_action_error, log_action_start, log_action_success};
use crate::utils::validation::{
    normalize_display_name, normalize_handle, validate_telegram_chat_id, UNTITLED_CHAT_LABEL,
};

pub const VOTE_ACK_TEXT: &str = "Голос учтён ✓";

pub async fn callback_handler(
    bot: TgBot,
    q: CallbackQuery,
    controller: Arc<TelegramPollController>,
) -> HandlerResult {
    let Some(message) = q.message.as_ref() else {
        return Ok(());
    };
    let data = q.data.as_deref().unwrap_or_default();

    tracing::info!(
        "Callback received: '{}' from user {} ({}) in chat {}",
        data,
        user_tag(&q.from),
        q.from.id.0,
        message.chat.id.0
    );

    let Some(action) = MenuAction::parse(data) else {
        tracing::debug!("Ignoring unknown callback selector '{}'", data);
        bot.answer_callback_query(q.id.clone()).await?;
        return Ok(());
    };

    match action {
        MenuAction::Vote(_) => {}
        _ => {
            bot.answer_callback_query(q.id.clone()).await?;
        }
    }

    match action {
        MenuAction::MainMenu => show_menu(&bot, message, MAIN_MENU_TEXT, main_menu(), false).await,
        MenuAction::ScheduleMenu => show_menu(&bot, message, PROFILE_MENU_TEXT, profile_menu(), false).await,
        MenuAction::ProfileDays(profile) => {
            show_menu(&bot, message, profile.title(), days_menu(profile), true).await
        }
        MenuAction::DaySchedule(profile, day) => {
            show_menu(&bot, message, day_schedule(profile, day), days_menu(profile), true).await
        }
        MenuAction::Duties => show_menu(&bot, message, DUTIES_TEXT, duties_menu(), false).await,
        MenuAction::CanteenMenu => show_menu(&bot, message, CANTEEN_MENU_TEXT, canteen_menu(), false).await,
        MenuAction::CreatePoll | MenuAction::ShowResults | MenuAction::Vote(_) => {
            handle_poll_action(&bot, &q, message, action, &controller).await
        }
    }
}

async fn handle_poll_action(
    bot: &TgBot,
    q: &CallbackQuery,
    message: &Message,
    action: MenuAction,
    controller: &TelegramPollController,
) -> HandlerResult {
    let chat_id = message.chat.id.0;
    let chat_label = message.chat.title().unwrap_or(UNTITLED_CHAT_LABEL);
    let user = &q.from;
    let tag = user_tag(user);
    let action_name = format!("{action:?}");

    if let Err(e) = validate_telegram_chat_id(chat_id) {
        tracing::warn!("Ignoring {} in chat {}: {}", action_name, chat_id, e);
        return Ok(());
    }

    log_action_start(&action_name, &tag, user.id.0, chat_id);

    if action.replaces_menu() {
        if let Err(e) = controller.presenter().delete_message(message.chat.id, message.id).await {
            tracing::debug!("Could not delete menu message {} in chat {}: {}", message.id.0, chat_id, e);
        }
    }

    let outcome = match action {
        MenuAction::CreatePoll => controller
            .create_poll(chat_id, chat_label)
            .await
            .map(|msgs| format!("poll message {}, results message {}", msgs.poll.0, msgs.results.0)),
        MenuAction::ShowResults => controller
            .show_results(chat_id, chat_label)
            .await
            .map(|msg| format!("results posted as message {}", msg.0)),
        MenuAction::Vote(status) => {
            let voter = voter_from_user(user);
            match controller.accept_vote(chat_id, chat_label, &voter, status).await {
                Ok(recorded) => {
                    // Ack before the summary edit, which may sit out rate limits
                    if let Err(e) = bot.answer_callback_query(q.id.clone()).text(VOTE_ACK_TEXT).await {
                        tracing::warn!("Could not acknowledge vote from {} in chat {}: {}", tag, chat_id, e);
                    }
                    let receipt = recorded.refresh_results().await;
                    Ok(format!("{status:?}, summary refreshed: {}", receipt.results_refreshed))
                }
                Err(e) => {
                    bot.answer_callback_query(q.id.clone()).await?;
                    Err(e)
                }
            }
        }
        _ => return Ok(()),
    };

    match outcome {
        Ok(details) => log_action_success(&action_name, &tag, user.id.0, chat_id, Some(details.as_str())),
        Err(e) => log_action_error(&action_name, &tag, user.id.0, chat_id, &format!("{e:#}")),
    }

    Ok(())
}

/// Edits the menu message in place. An unchanged message is not an error.
#[allow(deprecated)]
async fn show_menu(
    bot: &TgBot,
    message: &Message,
    text: &str,
    keyboard: InlineKeyboardMarkup,
    markdown: bool,
) -> HandlerResult {
    let mut request = bot
        .edit_message_text(message.chat.id, message.id, text)
        .reply_markup(keyboard);
    if markdown {
        request = request.parse_mode(ParseMode::Markdown);
    }

    match request.await {
        Ok(_) | Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

pub fn voter_from_user(user: &User) -> Voter {
    Voter {
        id: user.id.0.to_string(),
        display_name: normalize_display_name(&user.first_name),
        handle: normalize_handle(user.username.as_deref()),
    }
}

fn user_tag(user: &User) -> String {
    user.username.clone().unwrap_or_else(|| user.first_name.clone())
}
