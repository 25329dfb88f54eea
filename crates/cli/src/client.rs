//! HTTP client for the notes API.
//!
//! Sends the acting identity on every request the same way the fronting
//! layer would, and re-fetches the full note list after each successful
//! mutation rather than patching local state.

use anyhow::Context;
use quill_types::Note;
use serde::Serialize;

const USER_ID_HEADER: &str = "x-user-id";

/// The mutable note fields sent on create and update.
#[derive(Debug, Default, Serialize)]
pub struct NoteDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub tags: Vec<String>,
}

pub struct ApiClient {
    base_url: String,
    user: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user: user.into(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn list(&self) -> anyhow::Result<Vec<Note>> {
        let notes = self
            .http
            .get(format!("{}/notes", self.base_url))
            .header(USER_ID_HEADER, &self.user)
            .send()
            .await?
            .error_for_status()
            .context("listing notes failed")?
            .json()
            .await?;
        Ok(notes)
    }

    pub async fn create(&self, draft: &NoteDraft) -> anyhow::Result<Note> {
        let note = self
            .http
            .post(format!("{}/notes", self.base_url))
            .header(USER_ID_HEADER, &self.user)
            .json(draft)
            .send()
            .await?
            .error_for_status()
            .context("creating the note failed")?
            .json()
            .await?;
        Ok(note)
    }

    pub async fn get(&self, id: &str) -> anyhow::Result<Note> {
        let note = self
            .http
            .get(format!("{}/notes/{id}", self.base_url))
            .header(USER_ID_HEADER, &self.user)
            .send()
            .await?
            .error_for_status()
            .context("no owned note matches this id")?
            .json()
            .await?;
        Ok(note)
    }

    pub async fn update(&self, id: &str, draft: &NoteDraft) -> anyhow::Result<Note> {
        let note = self
            .http
            .put(format!("{}/notes/{id}", self.base_url))
            .header(USER_ID_HEADER, &self.user)
            .json(draft)
            .send()
            .await?
            .error_for_status()
            .context("updating the note failed")?
            .json()
            .await?;
        Ok(note)
    }

    pub async fn delete(&self, id: &str) -> anyhow::Result<()> {
        self.http
            .delete(format!("{}/notes/{id}", self.base_url))
            .header(USER_ID_HEADER, &self.user)
            .send()
            .await?
            .error_for_status()
            .context("deleting the note failed")?;
        Ok(())
    }
}
