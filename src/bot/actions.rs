use crate::content::{Profile, SchoolDay};
use crate::poll::VoteStatus;

/// What an inline button press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    MainMenu,
    ScheduleMenu,
    ProfileDays(Profile),
    DaySchedule(Profile, SchoolDay),
    Duties,
    CanteenMenu,
    CreatePoll,
    ShowResults,
    Vote(VoteStatus),
}

impl MenuAction {
    /// Parses callback data. Unknown selectors yield `None`.
    pub fn parse(data: &str) -> Option<Self> {
        let action = match data {
            "menu_schedule" => MenuAction::ScheduleMenu,
            "back_main" | "back_main_from_profile" => MenuAction::MainMenu,
            "duties" => MenuAction::Duties,
            "menu_stolovaya" => MenuAction::CanteenMenu,
            "stol_create_poll" => MenuAction::CreatePoll,
            "stol_show_results" => MenuAction::ShowResults,
            "stol_eat" => MenuAction::Vote(VoteStatus::Eating),
            "stol_no_eat" => MenuAction::Vote(VoteStatus::NotEating),
            "stol_absent" => MenuAction::Vote(VoteStatus::Absent),
            _ => {
                if let Some(key) = data.strip_prefix("profile_") {
                    return Profile::from_key(key).map(MenuAction::ProfileDays);
                }
                if let Some(rest) = data.strip_prefix("day*") {
                    let (profile, day) = rest.split_once('*')?;
                    return Some(MenuAction::DaySchedule(
                        Profile::from_key(profile)?,
                        SchoolDay::from_key(day)?,
                    ));
                }
                return None;
            }
        };
        Some(action)
    }

    /// Poll operations replace the menu message instead of editing it.
    pub fn replaces_menu(self) -> bool {
        matches!(self, MenuAction::CreatePoll | MenuAction::ShowResults)
    }
}

pub fn profile_selector(profile: Profile) -> String {
    format!("profile_{}", profile.key())
}

pub fn day_selector(profile: Profile, day: SchoolDay) -> String {
    format!("day*{}*{}", profile.key(), day.key())
}

pub fn vote_selector(status: VoteStatus) -> &'static str {
    match status {
        VoteStatus::Eating => "stol_eat",
        VoteStatus::NotEating => "stol_no_eat",
        VoteStatus::Absent => "stol_absent",
    }
}
