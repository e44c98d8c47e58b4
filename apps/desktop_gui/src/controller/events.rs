//! Events delivered from the backend worker to the UI thread.

use shared::domain::Assignment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Toggle,
    Delete,
}

impl MutationKind {
    pub fn log_label(self) -> &'static str {
        match self {
            Self::Create => "adding",
            Self::Toggle => "updating",
            Self::Delete => "deleting",
        }
    }
}

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    /// Result of a collection fetch; the message is already user-facing.
    Loaded(Result<Vec<Assignment>, String>),
    MutationApplied(MutationKind),
    MutationFailed {
        kind: MutationKind,
        message: String,
    },
    BackendFailed(String),
}
