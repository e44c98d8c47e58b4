//! Async view-model controller: issues the REST calls and refetches after
//! every successful mutation.

use shared::domain::AssignmentId;
use tracing::{error, info, warn};

use crate::{state::HomeworkState, Draft, HomeworkApi};

pub const VALIDATION_PROMPT: &str = "Please fill in all fields for the new homework.";
pub const DELETE_CONFIRMATION_PROMPT: &str = "Are you sure you want to delete this assignment?";

/// Blocking user interactions the controller needs.
pub trait Prompter {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The server accepted the change and the list was refetched.
    Applied,
    /// The draft was incomplete; no request was sent.
    Rejected,
    /// The user declined the confirmation; no request was sent.
    Cancelled,
    /// The request failed and the error was surfaced.
    Failed,
}

pub struct HomeworkController<A, P> {
    api: A,
    prompter: P,
    state: HomeworkState,
}

impl<A: HomeworkApi, P: Prompter> HomeworkController<A, P> {
    pub fn new(api: A, prompter: P) -> Self {
        Self {
            api,
            prompter,
            state: HomeworkState::default(),
        }
    }

    pub fn state(&self) -> &HomeworkState {
        &self.state
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.state.draft
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn load(&mut self) {
        self.state.begin_load();
        let outcome = match self.api.list_assignments().await {
            Ok(items) => Ok(items),
            Err(err) => {
                error!("Error fetching homework: {err}");
                Err(err.to_string())
            }
        };
        self.state.finish_load(outcome);
    }

    pub async fn create(&mut self) -> MutationOutcome {
        let submission = match self.state.draft.to_submission() {
            Ok(submission) => submission,
            Err(err) => {
                warn!("homework draft rejected: {err}");
                self.prompter.alert(VALIDATION_PROMPT);
                return MutationOutcome::Rejected;
            }
        };

        match self.api.create_assignment(&submission).await {
            Ok(()) => {
                info!(title = %submission.title, "homework created; refetching");
                self.load().await;
                self.state.draft.clear();
                MutationOutcome::Applied
            }
            Err(err) => {
                error!("Error adding homework: {err}");
                self.state.record_failure(err.to_string());
                MutationOutcome::Failed
            }
        }
    }

    pub async fn toggle_complete(
        &mut self,
        id: AssignmentId,
        current_status: bool,
    ) -> MutationOutcome {
        match self.api.set_completed(id, !current_status).await {
            Ok(()) => {
                info!("homework {id} marked completed={}; refetching", !current_status);
                self.load().await;
                MutationOutcome::Applied
            }
            Err(err) => {
                error!("Error updating homework: {err}");
                self.state.record_failure(err.to_string());
                MutationOutcome::Failed
            }
        }
    }

    pub async fn remove(&mut self, id: AssignmentId) -> MutationOutcome {
        if !self.prompter.confirm(DELETE_CONFIRMATION_PROMPT) {
            info!("delete of homework {id} cancelled");
            return MutationOutcome::Cancelled;
        }

        match self.api.delete_assignment(id).await {
            Ok(()) => {
                info!("homework {id} deleted; refetching");
                self.load().await;
                MutationOutcome::Applied
            }
            Err(err) => {
                error!("Error deleting homework: {err}");
                self.state.record_failure(err.to_string());
                MutationOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
