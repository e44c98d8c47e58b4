use std::fmt::Write as _;

use shared::domain::Assignment;

use crate::state::HomeworkState;

pub const APP_TITLE: &str = "Homework Manager";
pub const LOADING_TEXT: &str = "Loading homework...";
pub const EMPTY_LIST_TEXT: &str = "No homework assignments yet! Add one above.";
pub const LIST_HEADING: &str = "Current Assignments";

pub fn error_banner(error: &str) -> String {
    format!("Error: {error}. Please try refreshing.")
}

pub fn due_line(assignment: &Assignment) -> String {
    format!("Due: {}", assignment.due_date)
}

pub fn status_line(assignment: &Assignment) -> String {
    format!("Status: {}", assignment.status_label())
}

/// Renders the whole page as plain text.
pub fn render_text(state: &HomeworkState) -> String {
    if state.shows_loading_indicator() {
        return format!("{LOADING_TEXT}\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "{APP_TITLE}");
    if let Some(error) = state.error() {
        let _ = writeln!(out, "{}", error_banner(error));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{LIST_HEADING}");
    if state.shows_empty_notice() {
        let _ = writeln!(out, "{EMPTY_LIST_TEXT}");
        return out;
    }
    for item in state.items() {
        let mark = if item.completed { 'x' } else { ' ' };
        let _ = writeln!(
            out,
            "[{mark}] #{} {} ({})",
            item.id, item.title, item.subject
        );
        let _ = writeln!(out, "    {}", due_line(item));
        let _ = writeln!(out, "    {}", status_line(item));
    }
    out
}
