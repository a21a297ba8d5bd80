//! Browser implementation of [`QualityApi`].
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sending the
//! session cookie with every request.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! the backend is only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx answers, and undecodable bodies map onto the
//! shared [`ApiError`] so the store and alerts treat them uniformly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use quality::endpoints;
use quality::{ApiError, Comment, NewComment, QualityApi, QualityRecord, ReviewRequest, SessionStatus};

/// HTTP client for the quality backend rooted at `base_url`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpQualityApi {
    base_url: String,
}

impl HttpQualityApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(error: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(error.to_string())
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use web_sys::RequestCredentials;

    use super::transport_error;
    use quality::ApiError;

    fn with_cookies(builder: RequestBuilder) -> RequestBuilder {
        builder
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json")
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        let text = resp.text().await.map_err(transport_error)?;
        if !resp.ok() {
            return Err(ApiError::from_status(status, &text));
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub(super) async fn get<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
        let resp = with_cookies(Request::get(url))
            .send()
            .await
            .map_err(transport_error)?;
        decode(resp).await
    }

    pub(super) async fn post<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
        let resp = with_cookies(Request::post(url))
            .json(body)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        decode(resp).await
    }
}

#[async_trait::async_trait(?Send)]
impl QualityApi for HttpQualityApi {
    async fn current_user(&self) -> Result<SessionStatus, ApiError> {
        let url = self.url(&endpoints::auth_me());
        #[cfg(feature = "hydrate")]
        {
            http::get(&url).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn list(&self) -> Result<Vec<QualityRecord>, ApiError> {
        let url = self.url(&endpoints::list());
        #[cfg(feature = "hydrate")]
        {
            http::get(&url).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn get(&self, id: i64) -> Result<QualityRecord, ApiError> {
        let url = self.url(&endpoints::item(id));
        #[cfg(feature = "hydrate")]
        {
            http::get(&url).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn get_by_hd(&self, id_hd: i64) -> Result<QualityRecord, ApiError> {
        let url = self.url(&endpoints::by_hd(id_hd));
        #[cfg(feature = "hydrate")]
        {
            let value: serde_json::Value = http::get(&url).await?;
            quality::api::first_record(id_hd, value)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn previous(&self, id_hd: i64) -> Result<QualityRecord, ApiError> {
        let url = self.url(&endpoints::previous(id_hd));
        #[cfg(feature = "hydrate")]
        {
            http::get(&url).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn comments(&self, id_chip: i64) -> Result<Vec<Comment>, ApiError> {
        let url = self.url(&endpoints::comments(id_chip));
        #[cfg(feature = "hydrate")]
        {
            http::get(&url).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<Comment, ApiError> {
        let url = self.url(&endpoints::create_comment());
        #[cfg(feature = "hydrate")]
        {
            http::post(&url, comment).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, comment);
            Err(ApiError::Unavailable)
        }
    }

    async fn start(&self, id: i64, body: &ReviewRequest) -> Result<bool, ApiError> {
        let url = self.url(&endpoints::start(id));
        #[cfg(feature = "hydrate")]
        {
            let record: QualityRecord = http::post(&url, body).await?;
            Ok(record.reports_started())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn finalize(&self, id: i64, body: &ReviewRequest) -> Result<bool, ApiError> {
        let url = self.url(&endpoints::finalize(id));
        #[cfg(feature = "hydrate")]
        {
            let record: QualityRecord = http::post(&url, body).await?;
            Ok(record.reports_finished())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(ApiError::Unavailable)
        }
    }
}
