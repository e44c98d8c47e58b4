//! Backend commands queued from UI to backend worker.

use shared::{domain::AssignmentId, protocol::NewAssignment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    Load,
    Create(NewAssignment),
    SetCompleted { id: AssignmentId, completed: bool },
    Delete { id: AssignmentId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Create(_) => "create",
            Self::SetCompleted { .. } => "set_completed",
            Self::Delete { .. } => "delete",
        }
    }
}
