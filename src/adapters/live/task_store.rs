//! Live adapter for the `TaskStore` port speaking JSON over HTTP.

use std::env;

use reqwest::Client;

use crate::ports::task_store::{StoreFuture, TaskPayload, TaskStore};
use crate::tasks::model::TaskId;

/// Base URL used when `TASKPAD_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Live task store client for a JSON-over-HTTP task API.
pub struct HttpTaskStore {
    client: Client,
    base_url: String,
}

impl HttpTaskStore {
    /// Creates a client for the store at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { client: Client::new(), base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// Creates a client from the `TASKPAD_API_URL` environment variable,
    /// falling back to [`DEFAULT_API_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let base = env::var("TASKPAD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base)
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn item_url(&self, id: TaskId) -> String {
        format!("{}/tasks/{id}", self.base_url)
    }
}

/// Maps a transport error into the port's boxed error type.
fn transport_err(
    method: &str,
    url: &str,
    err: &reqwest::Error,
) -> Box<dyn std::error::Error + Send + Sync> {
    format!("{method} {url} failed: {err}").into()
}

/// Rejects non-success statuses as port errors.
fn check_status(
    method: &str,
    url: &str,
    status: reqwest::StatusCode,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if status.is_success() {
        Ok(())
    } else {
        Err(format!("{method} {url} returned status {}", status.as_u16()).into())
    }
}

impl TaskStore for HttpTaskStore {
    fn fetch_tasks(&self) -> StoreFuture<'_, serde_json::Value> {
        let url = self.collection_url();
        Box::pin(async move {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| transport_err("GET", &url, &e))?;
            check_status("GET", &url, response.status())?;
            let value = response
                .json::<serde_json::Value>()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("GET {url} returned a non-JSON body: {e}").into()
                })?;
            Ok(value)
        })
    }

    fn create_task(&self, payload: &TaskPayload) -> StoreFuture<'_, ()> {
        let url = self.collection_url();
        let payload = payload.clone();
        Box::pin(async move {
            let response = self
                .client
                .post(&url)
                .json(&payload)
                .send()
                .await
                .map_err(|e| transport_err("POST", &url, &e))?;
            check_status("POST", &url, response.status())
        })
    }

    fn update_task(&self, id: TaskId, payload: &TaskPayload) -> StoreFuture<'_, ()> {
        let url = self.item_url(id);
        let payload = payload.clone();
        Box::pin(async move {
            let response = self
                .client
                .patch(&url)
                .json(&payload)
                .send()
                .await
                .map_err(|e| transport_err("PATCH", &url, &e))?;
            check_status("PATCH", &url, response.status())
        })
    }

    fn delete_task(&self, id: TaskId) -> StoreFuture<'_, ()> {
        let url = self.item_url(id);
        Box::pin(async move {
            let response = self
                .client
                .delete(&url)
                .send()
                .await
                .map_err(|e| transport_err("DELETE", &url, &e))?;
            check_status("DELETE", &url, response.status())
        })
    }
}
