use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, render_text, Draft, HomeworkClient, HomeworkController, MutationOutcome,
    Prompter,
};
use shared::domain::AssignmentId;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "homework", about = "Manage the homework list over the REST API")]
struct Args {
    /// Base URL of the homework API; overrides homework.toml and env settings.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current assignments.
    List,
    /// Submit a new assignment.
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        due_date: String,
    },
    /// Flip the completion flag of an assignment.
    Toggle { id: i64 },
    /// Delete an assignment after confirmation.
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

struct StdioPrompter {
    assume_yes: bool,
}

impl Prompter for StdioPrompter {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(_) => false,
        }
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let settings = load_settings()
        .context("failed to load client settings")?
        .with_server_url(args.server_url.as_deref())?;
    info!(server_url = %settings.api_base_url, "using homework api");

    let assume_yes = matches!(args.command, Command::Delete { yes: true, .. });
    let mut controller = HomeworkController::new(
        HomeworkClient::new(settings.api_base_url),
        StdioPrompter { assume_yes },
    );
    controller.load().await;

    let outcome = match args.command {
        Command::List => None,
        Command::Add {
            title,
            subject,
            due_date,
        } => {
            *controller.draft_mut() = Draft::new(title, subject, due_date);
            Some(controller.create().await)
        }
        Command::Toggle { id } => {
            let id = AssignmentId(id);
            let current = controller.state().find(id).map(|hw| hw.completed);
            match current {
                Some(completed) => Some(controller.toggle_complete(id, completed).await),
                None if controller.state().error().is_some() => None,
                None => bail!("no homework assignment with id {id}"),
            }
        }
        Command::Delete { id, .. } => Some(controller.remove(AssignmentId(id)).await),
    };

    print!("{}", render_text(controller.state()));

    if outcome == Some(MutationOutcome::Rejected) || controller.state().error().is_some() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_yes_answers_confirm() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("no"));
    }

    #[test]
    fn delete_accepts_yes_flag() {
        let args = Args::parse_from(["homework", "delete", "4", "--yes"]);
        assert!(matches!(args.command, Command::Delete { id: 4, yes: true }));
    }

    #[test]
    fn add_defaults_missing_fields_to_empty() {
        let args = Args::parse_from(["homework", "add", "--title", "Essay"]);
        match args.command {
            Command::Add {
                title,
                subject,
                due_date,
            } => {
                assert_eq!(title, "Essay");
                assert!(subject.is_empty());
                assert!(due_date.is_empty());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn server_url_flag_is_global_option() {
        let args = Args::parse_from(["homework", "--server-url", "http://h:1", "list"]);
        assert_eq!(args.server_url.as_deref(), Some("http://h:1"));
    }
}
