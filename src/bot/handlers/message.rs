use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::bot::handlers::HandlerResult;
use crate::bot::keyboards::{main_menu, MAIN_MENU_TEXT};
use crate::bot::TgBot;

pub async fn command_handler(bot: TgBot, msg: Message, cmd: Command) -> HandlerResult {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start | Command::Menu => {
            bot.send_message(msg.chat.id, MAIN_MENU_TEXT)
                .reply_markup(main_menu())
                .await?;
        }
    }
    Ok(())
}
