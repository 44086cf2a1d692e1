use chrono::NaiveDate;

use crate::poll::models::{Vote, VoteMap, VoteStatus};
use crate::utils::datetime::{format_date, poll_target_date};

const EMPTY_CATEGORY: &str = "—";

/// Voter labels split by status, in the iteration order of the vote map.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    pub eating: Vec<String>,
    pub not_eating: Vec<String>,
    pub absent: Vec<String>,
}

impl Tally {
    pub fn from_votes(votes: &VoteMap) -> Self {
        let mut tally = Tally::default();
        for vote in votes.values() {
            let label = voter_label(vote);
            match vote.status {
                VoteStatus::Eating => tally.eating.push(label),
                VoteStatus::NotEating => tally.not_eating.push(label),
                VoteStatus::Absent => tally.absent.push(label),
            }
        }
        tally
    }

    pub fn total(&self) -> usize {
        self.eating.len() + self.not_eating.len() + self.absent.len()
    }
}

/// "Name (@handle)" when a handle is known, else just the name.
pub fn voter_label(vote: &Vote) -> String {
    match &vote.handle {
        Some(handle) => format!("{} (@{})", vote.display_name, handle),
        None => vote.display_name.clone(),
    }
}

fn category(list: &[String]) -> String {
    if list.is_empty() {
        EMPTY_CATEGORY.to_string()
    } else {
        list.join("\n")
    }
}

/// Renders the results summary for a poll held on `today` about the next day.
pub fn render_results(votes: &VoteMap, today: NaiveDate) -> String {
    let tally = Tally::from_votes(votes);
    let target = format_date(poll_target_date(today));

    format!(
        "📊 Результаты на {}\n\n\
         🍽 Будут есть ({}):\n{}\n\n\
         🙅 Не будут есть ({}):\n{}\n\n\
         🏫 Не придут в школу ({}):\n{}",
        target,
        tally.eating.len(),
        category(&tally.eating),
        tally.not_eating.len(),
        category(&tally.not_eating),
        tally.absent.len(),
        category(&tally.absent),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voter_label_with_and_without_handle() {
        let mut vote = Vote {
            display_name: "Аня".to_string(),
            handle: Some("anya".to_string()),
            status: VoteStatus::Eating,
        };
        assert_eq!(voter_label(&vote), "Аня (@anya)");
        vote.handle = None;
        assert_eq!(voter_label(&vote), "Аня");
    }

    #[test]
    fn test_empty_poll_renders_placeholders() {
        let today = NaiveDate::from_ymd_opt(2024, 9, 2).expect("valid date");
        let text = render_results(&VoteMap::new(), today);

        assert!(text.starts_with("📊 Результаты на 03.09.2024"));
        assert_eq!(text.matches("(0):\n—").count(), 3);
    }
}
