//! `reqwest` implementation of [`QualityApi`] for native tools.
//!
//! The session is carried either by a cookie handed in verbatim
//! (`--session-cookie`) or by whatever `Set-Cookie` the backend returns,
//! kept in the client's cookie store for the life of the process.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use quality::endpoints;
use quality::{ApiError, Comment, NewComment, QualityApi, QualityRecord, ReviewRequest, SessionStatus};
use reqwest::header::{ACCEPT, COOKIE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ClientSetupError {
    #[error("invalid session cookie: {0}")]
    InvalidCookie(#[from] reqwest::header::InvalidHeaderValue),
    #[error("http client setup failed: {0}")]
    Build(#[from] reqwest::Error),
}

#[derive(Clone, Debug)]
pub struct ReqwestQualityApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestQualityApi {
    pub fn new(base_url: impl Into<String>, session_cookie: Option<&str>) -> Result<Self, ClientSetupError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(cookie) = session_cookie.filter(|c| !c.trim().is_empty()) {
            headers.insert(COOKIE, HeaderValue::from_str(cookie.trim())?);
        }
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .build()?;
        Ok(Self { client, base_url: base_url.into() })
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await.map_err(transport_error)?;
        decode(response).await
    }
}

fn transport_error(error: reqwest::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(transport_error)?;
    if !status.is_success() {
        return Err(ApiError::from_status(status.as_u16(), &text));
    }
    Ok(serde_json::from_str(&text)?)
}

#[async_trait::async_trait(?Send)]
impl QualityApi for ReqwestQualityApi {
    async fn current_user(&self) -> Result<SessionStatus, ApiError> {
        self.get_json(&endpoints::auth_me()).await
    }

    async fn list(&self) -> Result<Vec<QualityRecord>, ApiError> {
        self.get_json(&endpoints::list()).await
    }

    async fn get(&self, id: i64) -> Result<QualityRecord, ApiError> {
        self.get_json(&endpoints::item(id)).await
    }

    async fn get_by_hd(&self, id_hd: i64) -> Result<QualityRecord, ApiError> {
        let value: serde_json::Value = self.get_json(&endpoints::by_hd(id_hd)).await?;
        quality::api::first_record(id_hd, value)
    }

    async fn previous(&self, id_hd: i64) -> Result<QualityRecord, ApiError> {
        self.get_json(&endpoints::previous(id_hd)).await
    }

    async fn comments(&self, id_chip: i64) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&endpoints::comments(id_chip)).await
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<Comment, ApiError> {
        self.post_json(&endpoints::create_comment(), comment).await
    }

    async fn start(&self, id: i64, body: &ReviewRequest) -> Result<bool, ApiError> {
        let record: QualityRecord = self.post_json(&endpoints::start(id), body).await?;
        Ok(record.reports_started())
    }

    async fn finalize(&self, id: i64, body: &ReviewRequest) -> Result<bool, ApiError> {
        let record: QualityRecord = self.post_json(&endpoints::finalize(id), body).await?;
        Ok(record.reports_finished())
    }
}
