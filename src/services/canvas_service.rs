use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value as JsonValue;
use url::Url;

use crate::error::{Error, Result};

/// Course-scoped collections the relay exposes from Canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasResource {
    Assignments,
    Quizzes,
    Grades,
}

impl CanvasResource {
    pub fn name(self) -> &'static str {
        match self {
            CanvasResource::Assignments => "assignments",
            CanvasResource::Quizzes => "quizzes",
            CanvasResource::Grades => "grades",
        }
    }

    /// Path below `/api/v1/courses/{id}/`. Grades come from the student
    /// submissions listing.
    fn upstream_segments(self) -> &'static [&'static str] {
        match self {
            CanvasResource::Assignments => &["assignments"],
            CanvasResource::Quizzes => &["quizzes"],
            CanvasResource::Grades => &["students", "submissions"],
        }
    }
}

impl fmt::Display for CanvasResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone)]
pub struct CanvasService {
    client: Client,
    base_url: Url,
}

impl CanvasService {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "Canvas base URL cannot carry a path: {}",
                base_url
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        tracing::info!("Canvas upstream: {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn course_url(&self, resource: CanvasResource, course_id: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::Internal("Canvas base URL cannot carry a path".into()))?;
            segments
                .pop_if_empty()
                .extend(["api", "v1", "courses"])
                .push(course_id)
                .extend(resource.upstream_segments());
        }
        Ok(url)
    }

    /// Issues one GET and returns the upstream JSON untouched.
    pub async fn fetch(
        &self,
        resource: CanvasResource,
        course_id: &str,
        access_token: &str,
    ) -> Result<JsonValue> {
        let url = self.course_url(resource, course_id)?;
        tracing::info!(%resource, course_id, "Fetching from Canvas");

        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%resource, course_id, status = status.as_u16(), "Canvas returned an error status");
            return Err(Error::Upstream {
                status: status.as_u16(),
                resource,
            });
        }

        let body = response.json::<JsonValue>().await?;
        Ok(body)
    }
}
