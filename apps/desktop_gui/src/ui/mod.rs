//! UI layer for desktop GUI: the single homework page and its dialogs.

pub mod app;

pub use app::{HomeworkApp, StartupConfig};
