//! Typed request layer. One method per REST endpoint, no retries.

#[macro_use]
mod macros;

pub mod auth;
pub mod metrics;
pub mod orders;
pub mod restaurant;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::ApiError;

/// HTTP client bound to one API base URL.
///
/// The session is carried by the cookie the API sets after the magic-link
/// authentication, so the underlying client keeps a cookie store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        url::Url::parse(base_url)?;
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `base/<segments>`, each segment percent-encoded on its own so ids can't
    /// add path separators, a query or dot segments.
    fn segments_url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(ApiError::InvalidPathSegment(bad.to_string()));
        }
        let mut target = Url::parse(&self.base_url)?;
        target
            .path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(target)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.url(path))
    }

    /// Sends the request and decodes a JSON body.
    async fn fetch<R: DeserializeOwned>(builder: RequestBuilder) -> Result<R, ApiError> {
        let resp = Self::send(builder).await?;
        resp.json::<R>()
            .await
            .map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }

    /// Sends the request and discards the body.
    async fn execute(builder: RequestBuilder) -> Result<(), ApiError> {
        Self::send(builder).await.map(|_| ())
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        debug!("Sending request");
        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let code = status.as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server { status: code, message });
        }
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_trimmed() {
        let client = ApiClient::new("http://localhost:3333/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3333");
        assert_eq!(client.url("/orders"), "http://localhost:3333/orders");
    }

    #[test]
    fn test_ids_stay_inside_one_segment() {
        let client = ApiClient::new("http://localhost:3333/api/").unwrap();
        let url = client.segments_url(&["orders", "../profile", "approve"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3333/api/orders/..%2Fprofile/approve");
        let url = client.segments_url(&["orders", "5?x=1"]).unwrap();
        assert_eq!(url.path(), "/api/orders/5%3Fx=1");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_rejects_dot_and_empty_segments() {
        let client = ApiClient::new("http://localhost:3333").unwrap();
        for id in ["..", ".", ""] {
            assert!(matches!(
                client.segments_url(&["orders", id]),
                Err(ApiError::InvalidPathSegment(_))
            ));
        }
    }

    #[test]
    fn test_rejects_relative_base_url() {
        assert!(matches!(ApiClient::new("localhost"), Err(ApiError::InvalidUrl(_))));
    }
}
