use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::bot::actions::{day_selector, profile_selector, vote_selector};
use crate::content::{Profile, SchoolDay};
use crate::poll::VoteStatus;

pub const MAIN_MENU_TEXT: &str = "Выбери раздел:";
pub const PROFILE_MENU_TEXT: &str = "Выбери профиль:";
pub const CANTEEN_MENU_TEXT: &str = "Выбери действие:";

fn back(selector: &str) -> Vec<InlineKeyboardButton> {
    vec![InlineKeyboardButton::callback("🔙 Назад", selector)]
}

pub fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("📅 Расписание", "menu_schedule")],
        vec![InlineKeyboardButton::callback("🍽 Столовая", "menu_stolovaya")],
        vec![InlineKeyboardButton::callback("🧹 Дежурства", "duties")],
    ])
}

pub fn profile_menu() -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = Profile::ALL
        .into_iter()
        .map(|p| vec![InlineKeyboardButton::callback(p.button_label(), profile_selector(p))])
        .collect();
    rows.push(back("back_main"));
    InlineKeyboardMarkup::new(rows)
}

/// Weekday picker: three days on the first row, two on the second.
pub fn days_menu(profile: Profile) -> InlineKeyboardMarkup {
    let day_button = |day: SchoolDay| InlineKeyboardButton::callback(day.short_label(), day_selector(profile, day));

    let (first, second) = SchoolDay::ALL.split_at(3);
    InlineKeyboardMarkup::new(vec![
        first.iter().copied().map(day_button).collect::<Vec<_>>(),
        second.iter().copied().map(day_button).collect::<Vec<_>>(),
        back("back_main_from_profile"),
    ])
}

pub fn canteen_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("🍽 Создать опрос", "stol_create_poll")],
        vec![InlineKeyboardButton::callback("📊 Посмотреть результаты", "stol_show_results")],
        back("back_main"),
    ])
}

/// Buttons attached to the poll prompt.
pub fn poll_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("🍽 Буду есть", vote_selector(VoteStatus::Eating))],
        vec![InlineKeyboardButton::callback("🙅 Не буду есть", vote_selector(VoteStatus::NotEating))],
        vec![InlineKeyboardButton::callback("🏫 Не буду в школе", vote_selector(VoteStatus::Absent))],
    ])
}

pub fn duties_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![back("back_main")])
}
