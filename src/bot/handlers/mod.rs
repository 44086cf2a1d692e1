pub mod callback;
pub mod message;

use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::bot::presenter::TelegramPresenter;
use crate::bot::TgBot;
use crate::poll::PollController;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;

pub type TelegramPollController = PollController<TelegramPresenter>;

pub struct BotHandler {
    pub controller: Arc<TelegramPollController>,
}

impl BotHandler {
    pub fn new(controller: Arc<TelegramPollController>) -> Self {
        Self { controller }
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        use teloxide::dispatching::UpdateFilterExt;

        let controller = self.controller.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(message::command_handler),
            )
            .branch(Update::filter_callback_query().endpoint(move |bot: TgBot, q: CallbackQuery| {
                let controller = controller.clone();
                async move { callback::callback_handler(bot, q, controller).await }
            }))
    }
}
