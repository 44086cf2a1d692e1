//! Telegram glue: commands, menus and the dispatcher schema.

pub mod actions;
pub mod commands;
pub mod handlers;
pub mod keyboards;
pub mod presenter;

use teloxide::adaptors::Throttle;
use teloxide::Bot;

/// Bot handle used everywhere; outbound requests are rate limited.
pub type TgBot = Throttle<Bot>;
