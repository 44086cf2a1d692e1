use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Команды бота:")]
pub enum Command {
    #[command(description = "Показать это сообщение")]
    Help,
    #[command(description = "Открыть главное меню")]
    Start,
    #[command(description = "Открыть главное меню")]
    Menu,
}
