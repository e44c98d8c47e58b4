//! Applies backend events to the view-model state.
//!
//! A successful mutation never touches `items` directly; it asks for exactly
//! one refetch, and the next `Loaded` event replaces the list wholesale.

use client_core::HomeworkState;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{MutationKind, UiEvent};

/// Returns the follow-up command the event requires, if any.
pub fn apply_ui_event(
    state: &mut HomeworkState,
    status: &mut String,
    event: UiEvent,
) -> Option<BackendCommand> {
    match event {
        UiEvent::Info(message) => {
            *status = message;
            None
        }
        UiEvent::Loaded(outcome) => {
            state.finish_load(outcome);
            None
        }
        UiEvent::MutationApplied(kind) => {
            if kind == MutationKind::Create {
                state.draft.clear();
            }
            state.begin_load();
            Some(BackendCommand::Load)
        }
        UiEvent::MutationFailed { kind, message } => {
            tracing::error!("Error {} homework: {message}", kind.log_label());
            state.record_failure(message);
            None
        }
        UiEvent::BackendFailed(message) => {
            *status = message.clone();
            state.finish_load(Err(message));
            None
        }
    }
}
