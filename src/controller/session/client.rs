use async_trait::async_trait;
use reqwest::{Client, Response, Url};

use super::sync::HolePublisher;
use crate::error::AppError;
use crate::model::{
    ErrorDetail, HoleSnapshot, JoinResponse, SessionCredentials, SessionHandle,
    SessionListResponse,
};

pub const SESSION_TOKEN_HEADER: &str = "X-Session-Token";

/// HTTP client for the shared session service.
#[derive(Debug, Clone)]
pub struct SessionClient {
    client: Client,
    base_url: Url,
}

impl SessionClient {
    /// # Errors
    ///
    /// Will return `Err` if `base_url` is not an absolute http(s) url.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::Validation(format!("invalid remote url '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Validation(format!(
                "remote url '{base_url}' cannot carry a path"
            )));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| AppError::Validation("remote url cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// # Errors
    ///
    /// Will return `Err` if the service is unreachable or refuses the name
    /// (for instance because it already exists).
    pub async fn create_session(&self, credentials: &SessionCredentials) -> Result<(), AppError> {
        let resp = self
            .client
            .post(self.endpoint(&["sessions"])?)
            .json(credentials)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(failure(resp, "Failed to create session").await);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if the service is unreachable, rejects the
    /// credentials, or answers without a token.
    pub async fn join_session(
        &self,
        credentials: &SessionCredentials,
    ) -> Result<SessionHandle, AppError> {
        let resp = self
            .client
            .post(self.endpoint(&["sessions", "join"])?)
            .json(credentials)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(failure(resp, "Failed to join session").await);
        }
        let body: JoinResponse = resp.json().await?;
        let token = body
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Network("join response did not include a token".into()))?;
        Ok(SessionHandle {
            name: credentials.name.clone(),
            token,
        })
    }

    /// # Errors
    ///
    /// Will return `Err` if the service is unreachable or the listing cannot
    /// be decoded.
    pub async fn list_sessions(&self) -> Result<Vec<String>, AppError> {
        let resp = self.client.get(self.endpoint(&["sessions"])?).send().await?;
        if !resp.status().is_success() {
            return Err(failure(resp, "Failed to fetch sessions").await);
        }
        let listing: SessionListResponse = resp.json().await?;
        Ok(listing.into_names())
    }
}

#[async_trait]
impl HolePublisher for SessionClient {
    /// Upserts one hole. Only transport failures count; the status code of
    /// the response is not inspected.
    async fn publish_hole(
        &self,
        session: &SessionHandle,
        snapshot: &HoleSnapshot,
    ) -> Result<(), AppError> {
        let url = self.endpoint(&["sessions", session.name.as_str(), "hole"])?;
        self.client
            .post(url)
            .header(SESSION_TOKEN_HEADER, &session.token)
            .json(snapshot)
            .send()
            .await?;
        Ok(())
    }
}

async fn failure(resp: Response, fallback: &str) -> AppError {
    let status = resp.status();
    let detail = resp
        .json::<ErrorDetail>()
        .await
        .ok()
        .and_then(|d| d.detail);
    AppError::Network(detail.unwrap_or_else(|| format!("{fallback} ({status})")))
}
