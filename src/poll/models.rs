use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What a voter plans for tomorrow's lunch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteStatus {
    #[serde(rename = "eat")]
    Eating,
    #[serde(rename = "no_eat")]
    NotEating,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "username")]
    pub handle: Option<String>,
    pub status: VoteStatus,
}

/// Votes keyed by voter id, in the order voters first voted.
pub type VoteMap = IndexMap<String, Vote>;

/// Poll state of a single chat for a single calendar day.
///
/// Votes are keyed by the voter's Telegram user id rendered as a string, so a
/// repeated vote replaces the earlier one and keeps its place. Vote times are
/// UTC without an offset suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPollState {
    pub votes: VoteMap,
    pub last_vote_time: IndexMap<String, NaiveDateTime>,
    pub poll_message_id: Option<i32>,
    pub results_message_id: Option<i32>,
    pub valid_date: NaiveDate,
}

impl ChatPollState {
    /// An empty poll state valid for `date`.
    pub fn fresh(date: NaiveDate) -> Self {
        Self {
            votes: IndexMap::new(),
            last_vote_time: IndexMap::new(),
            poll_message_id: None,
            results_message_id: None,
            valid_date: date,
        }
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.valid_date != today
    }

    /// Inserts or overwrites the voter's vote and stamps the vote time.
    pub fn record_vote(&mut self, voter_id: &str, vote: Vote, at: NaiveDateTime) {
        self.votes.insert(voter_id.to_string(), vote);
        self.last_vote_time.insert(voter_id.to_string(), at);
    }

    /// Starts a new poll: drops every vote and forgets the tracked messages.
    pub fn reset_votes(&mut self) {
        self.votes.clear();
        self.last_vote_time.clear();
        self.poll_message_id = None;
        self.results_message_id = None;
    }
}

/// On-disk layout of a chat's state file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredChatState {
    #[serde(default)]
    pub votes: VoteMap,
    #[serde(default)]
    pub last_vote_time: IndexMap<String, NaiveDateTime>,
    #[serde(default)]
    pub poll_message_id: Option<i32>,
    #[serde(default)]
    pub results_message_id: Option<i32>,
    pub chat_id: i64,
    pub chat_title: String,
    pub date: NaiveDate,
}

impl StoredChatState {
    pub fn from_state(chat_id: i64, chat_title: &str, state: &ChatPollState) -> Self {
        Self {
            votes: state.votes.clone(),
            last_vote_time: state.last_vote_time.clone(),
            poll_message_id: state.poll_message_id,
            results_message_id: state.results_message_id,
            chat_id,
            chat_title: chat_title.to_string(),
            date: state.valid_date,
        }
    }

    /// Converts back into live state, or `None` when the record is not for `today`.
    pub fn into_state(self, today: NaiveDate) -> Option<ChatPollState> {
        if self.date != today {
            return None;
        }
        Some(ChatPollState {
            votes: self.votes,
            last_vote_time: self.last_vote_time,
            poll_message_id: self.poll_message_id,
            results_message_id: self.results_message_id,
            valid_date: self.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn vote(status: VoteStatus) -> Vote {
        Vote {
            display_name: "Аня".to_string(),
            handle: Some("anya".to_string()),
            status,
        }
    }

    #[test]
    fn test_vote_wire_format() {
        let json = serde_json::to_value(vote(VoteStatus::NotEating)).expect("serialize vote");
        assert_eq!(json["name"], "Аня");
        assert_eq!(json["username"], "anya");
        assert_eq!(json["status"], "no_eat");

        let parsed: VoteStatus = serde_json::from_str("\"absent\"").expect("parse status");
        assert_eq!(parsed, VoteStatus::Absent);
        let parsed: VoteStatus = serde_json::from_str("\"eat\"").expect("parse status");
        assert_eq!(parsed, VoteStatus::Eating);
    }

    #[test]
    fn test_record_vote_overwrites() {
        let today = NaiveDate::from_ymd_opt(2024, 9, 2).expect("valid date");
        let mut state = ChatPollState::fresh(today);
        state.record_vote("1", vote(VoteStatus::Eating), Utc::now().naive_utc());
        state.record_vote("1", vote(VoteStatus::Absent), Utc::now().naive_utc());

        assert_eq!(state.votes.len(), 1);
        assert_eq!(state.last_vote_time.len(), 1);
        assert_eq!(state.votes["1"].status, VoteStatus::Absent);
    }

    #[test]
    fn test_revote_keeps_first_vote_position() {
        let today = NaiveDate::from_ymd_opt(2024, 9, 2).expect("valid date");
        let mut state = ChatPollState::fresh(today);
        let now = Utc::now().naive_utc();
        state.record_vote("9", vote(VoteStatus::Eating), now);
        state.record_vote("10", vote(VoteStatus::Eating), now);
        state.record_vote("9", vote(VoteStatus::Absent), now);

        let order: Vec<&str> = state.votes.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["9", "10"]);
    }

    #[test]
    fn test_vote_time_without_offset_parses() {
        let raw = r#"{
            "votes": {"7": {"name": "Аня", "username": null, "status": "eat"}},
            "last_vote_time": {"7": "2024-09-02T08:15:30.123456"},
            "poll_message_id": 5,
            "results_message_id": 6,
            "chat_id": -100,
            "chat_title": "Класс",
            "date": "2024-09-02"
        }"#;
        let stored: StoredChatState = serde_json::from_str(raw).expect("parse stored state");
        let expected = NaiveDate::from_ymd_opt(2024, 9, 2)
            .and_then(|d| d.and_hms_micro_opt(8, 15, 30, 123_456))
            .expect("valid timestamp");
        assert_eq!(stored.last_vote_time["7"], expected);
    }

    #[test]
    fn test_stored_state_for_other_day_is_dropped() {
        let today = NaiveDate::from_ymd_opt(2024, 9, 2).expect("valid date");
        let yesterday = today.pred_opt().expect("valid date");
        let mut state = ChatPollState::fresh(yesterday);
        state.record_vote("1", vote(VoteStatus::Eating), Utc::now().naive_utc());

        let stored = StoredChatState::from_state(-100, "Класс", &state);
        assert!(stored.clone().into_state(yesterday).is_some());
        assert!(stored.into_state(today).is_none());
    }
}
