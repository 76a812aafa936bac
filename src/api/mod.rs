//! Tournament API client
//!
//! Thin async wrapper over `reqwest`. Every endpoint except login requires
//! the bearer token written by `mm login`.

mod response;
mod types;

use std::time::Duration;

use reqwest::RequestBuilder;

use crate::config::Lang;
use crate::error::{MmError, MmResult};
use crate::project::Project;
use crate::session::TokenStore;

pub use response::ApiError;
pub use types::{BotVersion, Compilation, CompilationResult, CompileStatus, VersionListing};

use response::{check_status, parse_response};
use types::{LoginRequest, LoginResponse, SubmitRequest, SubmitResponse, SwitchRequest};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> MmResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("mm-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| MmError::Http {
                endpoint: "client setup".to_string(),
                source,
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Client for `project`'s API, authenticated with its stored token.
    pub fn for_project(project: &Project) -> MmResult<Self> {
        let token = TokenStore::new(&project.root).read()?;
        Ok(Self::new(project.config.api_base())?.with_token(token))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, req: RequestBuilder) -> MmResult<RequestBuilder> {
        let token = self.token.as_deref().ok_or(MmError::MissingToken)?;
        Ok(req.bearer_auth(token))
    }

    async fn send(&self, endpoint: &str, req: RequestBuilder) -> MmResult<reqwest::Response> {
        tracing::debug!(endpoint, "sending request");
        req.send().await.map_err(|source| MmError::Http {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Exchange team credentials for a token.
    pub async fn login(&self, username: &str, password: &str) -> MmResult<String> {
        let req = self
            .http
            .post(self.url("/auth/login"))
            .json(&LoginRequest { username, password });
        let resp = self.send("/auth/login", req).await?;
        let body: LoginResponse = parse_response(resp).await?;
        Ok(body.token)
    }

    /// Upload an encoded strategy archive; returns the submission id.
    pub async fn submit(&self, language: Lang, data: &str) -> MmResult<u32> {
        let req = self.authed(self.http.post(self.url("/bot/submit")))?.json(&SubmitRequest {
            language: language.as_str(),
            data,
        });
        let resp = self.send("/bot/submit", req).await?;
        let body: SubmitResponse = parse_response(resp).await?;
        tracing::info!(submission_id = body.submission_id, "submission queued");
        Ok(body.submission_id)
    }

    pub async fn compilation(&self, submission_id: u32) -> MmResult<Compilation> {
        let path = format!("/bot/compilation/{}", submission_id);
        let req = self.authed(self.http.get(self.url(&path)))?;
        let resp = self.send(&path, req).await?;
        parse_response(resp).await
    }

    pub async fn versions(&self) -> MmResult<VersionListing> {
        let req = self.authed(self.http.get(self.url("/bot/versions")))?;
        let resp = self.send("/bot/versions", req).await?;
        parse_response(resp).await
    }

    /// Make `version` the team's active bot. Returns the server's text reply.
    pub async fn change_version(&self, version: u32) -> MmResult<String> {
        let req = self
            .authed(self.http.post(self.url("/bot/change-version")))?
            .json(&SwitchRequest { version });
        let resp = self.send("/bot/change-version", req).await?;
        let resp = check_status(resp).await?;
        resp.text().await.map_err(|source| MmError::Http {
            endpoint: "/bot/change-version".to_string(),
            source,
        })
    }
}
