use serde::{Deserialize, Serialize};

use crate::{domain::AssignmentId, error::ValidationError};

pub fn homework_collection_route() -> &'static str {
    "/api/homework"
}

pub fn homework_item_route(id: AssignmentId) -> String {
    format!("{}/{id}", homework_collection_route())
}

/// Body of `POST /api/homework`. The server assigns `id` and `completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub title: String,
    pub subject: String,
    pub due_date: String,
}

impl NewAssignment {
    /// Builds a submission only when every field carries text.
    pub fn validated(
        title: impl Into<String>,
        subject: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let candidate = Self {
            title: title.into(),
            subject: subject.into(),
            due_date: due_date.into(),
        };
        let mut missing = Vec::new();
        if candidate.title.is_empty() {
            missing.push("title");
        }
        if candidate.subject.is_empty() {
            missing.push("subject");
        }
        if candidate.due_date.is_empty() {
            missing.push("dueDate");
        }
        if missing.is_empty() {
            Ok(candidate)
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}

/// Body of `PUT /api/homework/{id}` when flipping completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionUpdate {
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_route_appends_id() {
        assert_eq!(homework_item_route(AssignmentId(42)), "/api/homework/42");
    }

    #[test]
    fn new_assignment_serializes_due_date_in_camel_case() {
        let body = NewAssignment::validated("Essay", "English", "2024-05-01").expect("valid");
        let json = serde_json::to_value(&body).expect("encode");
        assert_eq!(
            json,
            serde_json::json!({"title": "Essay", "subject": "English", "dueDate": "2024-05-01"})
        );
    }

    #[test]
    fn validation_lists_every_empty_field() {
        let err = NewAssignment::validated("", "Math", "").expect_err("must fail");
        assert_eq!(err, ValidationError::MissingFields(vec!["title", "dueDate"]));
    }
}
