use chrono::{Duration, Local, NaiveDate};

/// The local calendar date a chat's poll state is valid for.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Polls are always about the next day's lunch.
pub fn poll_target_date(today: NaiveDate) -> NaiveDate {
    today + Duration::days(1)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
