//! Daily canteen poll: per-chat state, persistence, results and lifecycle.

pub mod controller;
pub mod models;
pub mod presenter;
pub mod results;
pub mod state;
pub mod store;

pub use controller::{PollController, PollMessages, RecordedVote, RetryPolicy, VoteReceipt, Voter};
pub use models::{ChatPollState, Vote, VoteMap, VoteStatus};
pub use presenter::{EditOutcome, Presenter};
pub use state::{ChatStateGuard, ChatStateManager};
pub use store::ChatStore;
