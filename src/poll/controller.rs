use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use teloxide::types::{ChatId, MessageId};

use crate::bot::keyboards::poll_keyboard;
use crate::poll::models::{Vote, VoteStatus};
use crate::poll::presenter::{EditOutcome, Presenter};
use crate::poll::results::render_results;
use crate::poll::state::{ChatStateGuard, ChatStateManager};

pub const POLL_PROMPT: &str = "🍽 Опрос на завтра";

/// How hard to try refreshing the tracked results message.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Added on top of the cooldown the platform asks for.
    pub rate_limit_margin: Duration,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 8,
            rate_limit_margin: Duration::from_millis(500),
            backoff: Duration::from_millis(1200),
        }
    }
}

/// Who cast a vote.
#[derive(Debug, Clone)]
pub struct Voter {
    pub id: String,
    pub display_name: String,
    pub handle: Option<String>,
}

/// Messages posted by a new poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollMessages {
    pub poll: MessageId,
    pub results: MessageId,
}

/// Returned once a vote is recorded; the voter is acknowledged either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteReceipt {
    pub results_refreshed: bool,
}

pub struct PollController<P> {
    states: Arc<ChatStateManager>,
    presenter: P,
    retry: RetryPolicy,
}

impl<P: Presenter> PollController<P> {
    pub fn new(states: Arc<ChatStateManager>, presenter: P) -> Self {
        Self::with_retry_policy(states, presenter, RetryPolicy::default())
    }

    pub fn with_retry_policy(states: Arc<ChatStateManager>, presenter: P, retry: RetryPolicy) -> Self {
        Self {
            states,
            presenter,
            retry,
        }
    }

    pub fn states(&self) -> &Arc<ChatStateManager> {
        &self.states
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Opens a fresh poll: posts and pins the prompt, posts an empty summary
    /// and starts tracking both messages. Earlier votes of the day are dropped.
    pub async fn create_poll(&self, chat_id: i64, chat_label: &str) -> Result<PollMessages> {
        let mut state = self.states.lock(chat_id, chat_label).await;
        let chat = ChatId(chat_id);

        let poll = self
            .presenter
            .send_message(chat, POLL_PROMPT, Some(poll_keyboard()))
            .await
            .context("Failed to post poll prompt")?;

        if let Err(e) = self.presenter.pin_message(chat, poll).await {
            tracing::warn!("Could not pin poll message {} in chat {}: {}", poll.0, chat_id, e);
        }

        let summary = render_results(&Default::default(), state.valid_date);
        let results = self
            .presenter
            .send_message(chat, &summary, None)
            .await
            .context("Failed to post results summary")?;

        let previous = (*state).clone();
        state.reset_votes();
        state.poll_message_id = Some(poll.0);
        state.results_message_id = Some(results.0);
        if let Err(e) = state.persist().await {
            *state = previous;
            return Err(e.context("Failed to store new poll"));
        }

        tracing::info!(
            "Poll opened in chat {} (poll message {}, results message {})",
            chat_id, poll.0, results.0
        );
        Ok(PollMessages { poll, results })
    }

    /// Records the voter's choice, replacing any earlier one, and refreshes the
    /// tracked summary on a best-effort basis.
    pub async fn cast_vote(
        &self,
        chat_id: i64,
        chat_label: &str,
        voter: &Voter,
        status: VoteStatus,
    ) -> Result<VoteReceipt> {
        let recorded = self.accept_vote(chat_id, chat_label, voter, status).await?;
        Ok(recorded.refresh_results().await)
    }

    /// Records and stores the vote, returning before the summary is touched.
    ///
    /// The chat stays locked until the returned [`RecordedVote`] is refreshed
    /// or dropped, so the caller can acknowledge the voter in between.
    pub async fn accept_vote(
        &self,
        chat_id: i64,
        chat_label: &str,
        voter: &Voter,
        status: VoteStatus,
    ) -> Result<RecordedVote<'_, P>> {
        let mut state = self.states.lock(chat_id, chat_label).await;
        let previous = (*state).clone();

        let vote = Vote {
            display_name: voter.display_name.clone(),
            handle: voter.handle.clone(),
            status,
        };
        state.record_vote(&voter.id, vote, Utc::now().naive_utc());
        if let Err(e) = state.persist().await {
            *state = previous;
            return Err(e.context("Failed to store vote"));
        }

        tracing::debug!("Vote {:?} from {} recorded in chat {}", status, voter.id, chat_id);

        Ok(RecordedVote {
            controller: self,
            chat_id,
            state,
        })
    }

    /// Posts a standalone summary. The tracked results message is left alone.
    pub async fn show_results(&self, chat_id: i64, chat_label: &str) -> Result<MessageId> {
        let state = self.states.lock(chat_id, chat_label).await;
        let summary = render_results(&state.votes, state.valid_date);

        self.presenter
            .send_message(ChatId(chat_id), &summary, None)
            .await
            .context("Failed to post results")
    }

    /// Edits the results message in place, retrying transient failures.
    ///
    /// Returns whether the message is known to show `text`. Giving up is silent:
    /// the votes are already stored.
    pub async fn push_results_update(&self, chat_id: ChatId, message_id: MessageId, text: &str) -> bool {
        let attempts = self.retry.max_attempts;

        for attempt in 1..=attempts {
            let delay = match self.presenter.edit_message_text(chat_id, message_id, text).await {
                EditOutcome::Success => return true,
                EditOutcome::Skip => {
                    tracing::debug!("Results message {} in chat {} unchanged or gone", message_id.0, chat_id.0);
                    return true;
                }
                EditOutcome::RateLimited(cooldown) => {
                    tracing::debug!(
                        "Rate limited updating results in chat {}, waiting {:?}",
                        chat_id.0, cooldown
                    );
                    cooldown + self.retry.rate_limit_margin
                }
                EditOutcome::Retryable(e) => {
                    tracing::warn!(
                        "Results update attempt {}/{} in chat {} failed: {}",
                        attempt, attempts, chat_id.0, e
                    );
                    self.retry.backoff
                }
                EditOutcome::Fatal(e) => {
                    tracing::warn!("Results update in chat {} abandoned: {}", chat_id.0, e);
                    return false;
                }
            };

            if attempt < attempts {
                tokio::time::sleep(delay).await;
            }
        }

        tracing::warn!(
            "Gave up updating results message {} in chat {} after {} attempts",
            message_id.0, chat_id.0, attempts
        );
        false
    }
}

/// A stored vote whose summary refresh is still pending. Holds the chat lock.
pub struct RecordedVote<'a, P> {
    controller: &'a PollController<P>,
    chat_id: i64,
    state: ChatStateGuard<'a>,
}

impl<P: Presenter> RecordedVote<'_, P> {
    /// Edits the tracked summary to show the new tally, then releases the chat.
    pub async fn refresh_results(self) -> VoteReceipt {
        let results_refreshed = match self.state.results_message_id {
            Some(message_id) => {
                let text = render_results(&self.state.votes, self.state.valid_date);
                self.controller
                    .push_results_update(ChatId(self.chat_id), MessageId(message_id), &text)
                    .await
            }
            None => false,
        };

        VoteReceipt { results_refreshed }
    }
}
