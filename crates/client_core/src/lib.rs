use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{Assignment, AssignmentId},
    error::ApiErrorBody,
    protocol::{homework_collection_route, homework_item_route, CompletionUpdate, NewAssignment},
};
use tracing::{debug, warn};

pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod state;

pub use config::{load_settings, ClientSettings};
pub use controller::{HomeworkController, MutationOutcome, Prompter};
pub use error::ClientError;
pub use render::render_text;
pub use state::{Draft, HomeworkState};

use crate::error::UNKNOWN_ERROR_DETAIL;

pub type ClientResult<T> = Result<T, ClientError>;

/// The REST calls the view-model needs from the homework service.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    async fn list_assignments(&self) -> ClientResult<Vec<Assignment>>;
    /// The response body is ignored; the caller refetches.
    async fn create_assignment(&self, assignment: &NewAssignment) -> ClientResult<()>;
    async fn set_completed(&self, id: AssignmentId, completed: bool) -> ClientResult<()>;
    async fn delete_assignment(&self, id: AssignmentId) -> ClientResult<()>;
}

#[derive(Debug, Clone)]
pub struct HomeworkClient {
    http: Client,
    server_url: String,
}

impl HomeworkClient {
    /// No request timeout is configured; a hung request stays pending.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), server_url)
    }

    pub fn with_http_client(http: Client, server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self { http, server_url }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.server_url, homework_collection_route())
    }

    fn item_url(&self, id: AssignmentId) -> String {
        format!("{}{}", self.server_url, homework_item_route(id))
    }
}

fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status {
            status: status.as_u16(),
            detail: None,
        })
    }
}

#[async_trait]
impl HomeworkApi for HomeworkClient {
    async fn list_assignments(&self) -> ClientResult<Vec<Assignment>> {
        let res = self.http.get(self.collection_url()).send().await?;
        let items: Vec<Assignment> = ensure_success(res)?.json().await?;
        debug!(count = items.len(), "fetched homework list");
        Ok(items)
    }

    async fn create_assignment(&self, assignment: &NewAssignment) -> ClientResult<()> {
        let res = self
            .http
            .post(self.collection_url())
            .json(assignment)
            .send()
            .await?;
        ensure_success(res)?;
        Ok(())
    }

    async fn set_completed(&self, id: AssignmentId, completed: bool) -> ClientResult<()> {
        let res = self
            .http
            .put(self.item_url(id))
            .json(&CompletionUpdate { completed })
            .send()
            .await?;
        ensure_success(res)?;
        Ok(())
    }

    async fn delete_assignment(&self, id: AssignmentId) -> ClientResult<()> {
        let res = self.http.delete(self.item_url(id)).send().await?;
        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        let detail = match res.json::<ApiErrorBody>().await {
            Ok(body) => body.detail().map(str::to_owned),
            Err(err) => {
                warn!("unreadable error body for delete of assignment {id}: {err}");
                None
            }
        };
        Err(ClientError::Status {
            status: status.as_u16(),
            detail: Some(detail.unwrap_or_else(|| UNKNOWN_ERROR_DETAIL.to_string())),
        })
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
