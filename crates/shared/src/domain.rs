use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(AssignmentId);

/// One homework record as the server reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: AssignmentId,
    pub title: String,
    pub subject: String,
    /// ISO calendar date (`YYYY-MM-DD`), kept as the server sent it.
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
}

impl Assignment {
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.completed {
            "Mark as Incomplete"
        } else {
            "Mark as Complete"
        }
    }
}
