use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Response};
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::error::ClientError;
use crate::models::{Bookmark, BookmarkRef, BookmarkSync, NewBookmark, VisitParams};
use crate::routes;

/// Shareable bookmark API client for use across async tasks
///
/// Each operation issues exactly one request and hands back the
/// [`Response`] as received. Nothing is validated, retried or decoded on the
/// caller's behalf; a non-2xx status is turned into an error and the body is
/// otherwise left alone.
#[derive(Debug, Clone)]
pub struct BookmarkClient {
    http: reqwest::Client,
    base_url: Arc<str>,
}

impl BookmarkClient {
    /// Create a new client from configuration
    ///
    /// Every request carries `Accept: application/json` and
    /// `Content-Type: application/json` and is bounded by `config.timeout`.
    /// No cookie store is attached, so no credentials travel with requests.
    ///
    /// # Errors
    /// Returns an error if the base URL does not parse or the underlying HTTP
    /// client cannot be built
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let base_url = config.base_url.trim_end_matches('/');
        Url::parse(base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        tracing::debug!("Bookmark client targeting: {}", base_url);

        Ok(Self {
            http,
            base_url: Arc::from(base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /v1/bookmarks
    pub async fn list_bookmarks(&self) -> Result<Response, ClientError> {
        self.send::<()>(Method::GET, routes::BOOKMARKS, None).await
    }

    /// POST /v1/bookmarks with one `{url}` per input, in order
    ///
    /// # Arguments
    /// * `urls` - URLs to bookmark, forwarded without validation
    pub async fn create_bookmarks<S: AsRef<str>>(
        &self,
        urls: &[S],
    ) -> Result<Response, ClientError> {
        let body: Vec<NewBookmark<'_>> = urls
            .iter()
            .map(|url| NewBookmark { url: url.as_ref() })
            .collect();
        self.send(Method::POST, routes::BOOKMARKS, Some(&body)).await
    }

    /// PUT /v1/bookmarks with `{id, url}` per bookmark; every other field is dropped
    pub async fn replace_bookmarks(&self, bookmarks: &[Bookmark]) -> Result<Response, ClientError> {
        let body: Vec<BookmarkSync<'_>> = bookmarks.iter().map(BookmarkSync::from).collect();
        self.send(Method::PUT, routes::BOOKMARKS, Some(&body)).await
    }

    /// PATCH /v1/bookmarks with `edits` serialized as-is
    ///
    /// The server expects each edit to carry `description` and `tags`;
    /// [`crate::models::BookmarkEdit`] matches that shape, but any
    /// serializable value is passed straight through.
    pub async fn patch_bookmarks<E: Serialize>(&self, edits: &[E]) -> Result<Response, ClientError> {
        self.send(Method::PATCH, routes::BOOKMARKS, Some(edits)).await
    }

    /// DELETE /v1/bookmarks with `{id}` per bookmark carried in the request body
    pub async fn delete_bookmarks(&self, bookmarks: &[Bookmark]) -> Result<Response, ClientError> {
        let body: Vec<BookmarkRef<'_>> = bookmarks.iter().map(BookmarkRef::from).collect();
        self.send(Method::DELETE, routes::BOOKMARKS, Some(&body)).await
    }

    /// PATCH /v1/visit/bookmark with `{id, visitCount}`
    ///
    /// A bookmark without a visit count sends `{id}` alone.
    pub async fn record_visit(&self, bookmark: &Bookmark) -> Result<Response, ClientError> {
        let body = VisitParams::from(bookmark);
        self.send(Method::PATCH, routes::VISIT_BOOKMARK, Some(&body)).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!("{} {} failed: {}", method, url, err);
                return Err(err.into());
            }
        };

        tracing::debug!("{} {} -> {}", method, url, response.status());
        Ok(response.error_for_status()?)
    }
}
