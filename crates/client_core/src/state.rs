//! Observable view-model state and its transitions.
//!
//! Every front end drives the same transitions so the refetch-after-mutation
//! contract holds regardless of how requests are scheduled.

use shared::{
    domain::{Assignment, AssignmentId},
    error::ValidationError,
    protocol::NewAssignment,
};

/// Unsubmitted new-assignment form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub subject: String,
    pub due_date: String,
}

impl Draft {
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            due_date: due_date.into(),
        }
    }

    pub fn to_submission(&self) -> Result<NewAssignment, ValidationError> {
        NewAssignment::validated(
            self.title.clone(),
            self.subject.clone(),
            self.due_date.clone(),
        )
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.subject.clear();
        self.due_date.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkState {
    items: Vec<Assignment>,
    loading: bool,
    error: Option<String>,
    pub draft: Draft,
}

impl Default for HomeworkState {
    fn default() -> Self {
        // The first load is pending from the moment the view exists.
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            draft: Draft::default(),
        }
    }
}

impl HomeworkState {
    pub fn items(&self) -> &[Assignment] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, id: AssignmentId) -> Option<&Assignment> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Applies the result of a collection fetch. A failure blanks the list.
    pub fn finish_load(&mut self, outcome: Result<Vec<Assignment>, String>) {
        match outcome {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => {
                self.items.clear();
                self.error = Some(message);
            }
        }
        self.loading = false;
    }

    /// Surfaces a failed mutation. Items are left as they were.
    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn shows_loading_indicator(&self) -> bool {
        self.loading && self.items.is_empty()
    }

    pub fn shows_empty_notice(&self) -> bool {
        self.items.is_empty() && !self.loading && self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(id: i64, title: &str) -> Assignment {
        Assignment {
            id: AssignmentId(id),
            title: title.to_string(),
            subject: "Math".to_string(),
            due_date: "2024-03-10".to_string(),
            completed: false,
        }
    }

    #[test]
    fn fresh_state_shows_loading_indicator() {
        let state = HomeworkState::default();
        assert!(state.loading());
        assert!(state.shows_loading_indicator());
        assert!(!state.shows_empty_notice());
    }

    #[test]
    fn successful_load_replaces_items_and_clears_error() {
        let mut state = HomeworkState::default();
        state.record_failure("HTTP error! status: 500");
        state.begin_load();
        state.finish_load(Ok(vec![assignment(2, "b"), assignment(1, "a")]));

        assert_eq!(state.error(), None);
        assert!(!state.loading());
        let ids: Vec<i64> = state.items().iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn failed_load_blanks_previous_items() {
        let mut state = HomeworkState::default();
        state.finish_load(Ok(vec![assignment(1, "a")]));
        state.begin_load();
        state.finish_load(Err("HTTP error! status: 500".to_string()));

        assert!(state.items().is_empty());
        assert_eq!(state.error(), Some("HTTP error! status: 500"));
        assert!(!state.loading());
    }

    #[test]
    fn refetch_with_items_keeps_list_visible() {
        let mut state = HomeworkState::default();
        state.finish_load(Ok(vec![assignment(1, "a")]));
        state.begin_load();
        assert!(state.loading());
        assert!(!state.shows_loading_indicator());
    }

    #[test]
    fn mutation_failure_keeps_items() {
        let mut state = HomeworkState::default();
        state.finish_load(Ok(vec![assignment(1, "a")]));
        state.record_failure("HTTP error! status: 404");
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.error(), Some("HTTP error! status: 404"));
    }

    #[test]
    fn empty_notice_requires_settled_error_free_state() {
        let mut state = HomeworkState::default();
        state.finish_load(Ok(Vec::new()));
        assert!(state.shows_empty_notice());

        state.finish_load(Err("boom".to_string()));
        assert!(!state.shows_empty_notice());
    }

    #[test]
    fn draft_requires_all_fields() {
        let mut draft = Draft::new("Essay", "", "2024-05-01");
        assert!(draft.to_submission().is_err());

        draft.subject = "English".to_string();
        let submission = draft.to_submission().expect("complete draft");
        assert_eq!(submission.due_date, "2024-05-01");

        draft.clear();
        assert_eq!(draft, Draft::default());
    }
}
