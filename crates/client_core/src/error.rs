use thiserror::Error;

/// Detail used when a failed response carries no readable error body.
pub const UNKNOWN_ERROR_DETAIL: &str = "Unknown error";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error! status: {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(" - {detail}"),
        None => String::new(),
    }
}
