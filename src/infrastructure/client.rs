//! Project definition sources
//!
//! [`HttpSource`] queries the platform API; [`FileSource`] reads a saved
//! response or a bare project document from disk.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::definition::{ApiError, ProjectDefinitionDocument};

/// Header carrying the access token
pub const TOKEN_HEADER: &str = "X-User-Token";
/// Envelope status of a successful call
pub const STATUS_SUCCESS: &str = "SUCCESS";

const PROJECT_DEF_PATH: &str = "api/cicd/projectDef";

/// Anything that can produce a project definition document
#[async_trait]
pub trait ProjectDefSource: Send + Sync {
    /// Short description used in logs
    fn describe(&self) -> String;

    /// Fetches the definition of `project_name`
    async fn fetch_project(&self, project_name: &str)
    -> Result<ProjectDefinitionDocument, ApiError>;
}

/// API response envelope
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiEnvelope {
    /// `SUCCESS` or an error status
    pub status: String,
    /// Human-readable message
    pub msg: String,
    /// Payload
    pub data: serde_json::Value,
}

impl ApiEnvelope {
    fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Decodes `data.project`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the field is missing or malformed.
    pub fn into_project(self) -> Result<ProjectDefinitionDocument, ApiError> {
        let project = match self.data {
            serde_json::Value::Object(mut data) => data
                .remove("project")
                .ok_or_else(|| ApiError::Decode("data.project missing".to_string()))?,
            _ => return Err(ApiError::Decode("data missing".to_string())),
        };
        serde_json::from_value(project).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Builds `{server_url}/api/cicd/projectDef/{project_name}`.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] if the server URL is not a valid base URL.
pub fn project_def_url(server_url: &str, project_name: &str) -> Result<Url, ApiError> {
    let invalid = |message: String| ApiError::Transport {
        url: server_url.to_string(),
        message,
    };
    let base = Url::parse(&format!("{}/", server_url.trim_end_matches('/')))
        .map_err(|e| invalid(e.to_string()))?;
    base.join(&format!("{PROJECT_DEF_PATH}/{project_name}"))
        .map_err(|e| invalid(e.to_string()))
}

/// Remote source backed by the platform HTTP API
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    server_url: String,
    access_token: String,
}

impl HttpSource {
    /// Creates a source for `server_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be built.
    pub fn new(
        server_url: &str,
        access_token: &str,
        timeout: Duration,
        insecure: bool,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(insecure)
            .build()
            .map_err(|e| ApiError::Transport {
                url: server_url.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            server_url: server_url.to_string(),
            access_token: access_token.to_string(),
        })
    }
}

#[async_trait]
impl ProjectDefSource for HttpSource {
    fn describe(&self) -> String {
        self.server_url.clone()
    }

    async fn fetch_project(
        &self,
        project_name: &str,
    ) -> Result<ProjectDefinitionDocument, ApiError> {
        let url = project_def_url(&self.server_url, project_name)?;
        let transport = |e: reqwest::Error| ApiError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };
        tracing::debug!(url = %url, "Requesting project definition");

        let response = self
            .client
            .get(url.clone())
            .header(TOKEN_HEADER, &self.access_token)
            .send()
            .await
            .map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        let envelope: Option<ApiEnvelope> = serde_json::from_str(&body).ok();
        if !status.is_success() {
            let message = envelope.map(|e| e.msg).unwrap_or(body);
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let envelope = envelope.ok_or_else(|| ApiError::Decode(format!("{url} returned no envelope")))?;
        if !envelope.is_success() {
            return Err(ApiError::Rejected {
                url: url.to_string(),
                status: envelope.status,
                message: envelope.msg,
            });
        }

        let project = envelope.into_project()?;
        tracing::info!(project = %project.project_info.project_name, "Fetched project definition");
        Ok(project)
    }
}

/// Local JSON file holding an API envelope or a bare project document
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Decodes file contents, accepting both layouts
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for invalid JSON or a failed envelope.
    pub fn decode(text: &str) -> Result<ProjectDefinitionDocument, ApiError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))?;

        if value.get("projectInfo").is_some() {
            return serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()));
        }

        let envelope: ApiEnvelope =
            serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
        if !envelope.status.is_empty() && !envelope.is_success() {
            return Err(ApiError::Rejected {
                url: String::new(),
                status: envelope.status,
                message: envelope.msg,
            });
        }
        envelope.into_project()
    }
}

#[async_trait]
impl ProjectDefSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_project(
        &self,
        project_name: &str,
    ) -> Result<ProjectDefinitionDocument, ApiError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ApiError::Read {
                path: self.describe(),
                message: e.to_string(),
            })?;
        let project = Self::decode(&text)?;

        if project.project_info.project_name != project_name {
            tracing::warn!(
                requested = project_name,
                found = %project.project_info.project_name,
                "Project name in file differs from the requested one"
            );
        }
        Ok(project)
    }
}
