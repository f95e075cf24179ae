// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the news backend.
//!
//! Every call is a single request: no retries and no backoff. Callers decide
//! what a failure means; in particular a failed refresh must leave the deck
//! untouched (see [`Deck::apply_fetch`](crate::deck::Deck::apply_fetch)).

mod wire;

use crate::config::Config;
use crate::domain::news::{Comment, CommentDraft, ItemId, NewsItem, ReactionCounts, ReactionKind};
use crate::error::{Error, FeedError, Result};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};
use wire::{
    CommentCreated, CommentRequest, CountsResponse, HealthResponse, ItemEnvelope, ItemsEnvelope,
    ReactionRequest, WireComment, WireNewsItem,
};

const USER_AGENT: &str = concat!("newsdeck/", env!("CARGO_PKG_VERSION"));

/// Client for the `/news` JSON API.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
    base: Url,
}

impl FeedClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidUrl`] if `base_url` is not an absolute
    /// http(s) URL, or [`FeedError::Request`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| FeedError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(FeedError::InvalidUrl(base_url.to_string()).into());
        }

        let http = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::Request(e.to_string()))?;

        info!(base = %base, "feed client ready");
        Ok(Self { http, base })
    }

    /// Creates a client from the `[feed]` section of the settings.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url(), config.request_timeout())
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Fetches the newest `limit` items, most recent first.
    pub async fn list_news(&self, limit: u32) -> Result<Vec<NewsItem>> {
        let mut url = self.endpoint(&["news"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());

        let envelope: ItemsEnvelope<WireNewsItem> = self.get_json(url).await?;
        debug!(count = envelope.items.len(), "fetched news list");
        Ok(envelope.items.into_iter().map(NewsItem::from).collect())
    }

    /// Fetches a single item.
    pub async fn get_news(&self, id: &ItemId) -> Result<NewsItem> {
        let url = self.endpoint(&["news", id.as_str()])?;
        let envelope: ItemEnvelope = self.get_json(url).await?;
        Ok(envelope.item.into())
    }

    /// Posts a reaction and returns the backend's updated totals.
    pub async fn send_reaction(&self, id: &ItemId, kind: ReactionKind) -> Result<ReactionCounts> {
        let url = self.endpoint(&["news", id.as_str(), "reaction"])?;
        let request = self.http.post(url).json(&ReactionRequest::from(kind));
        let counts: CountsResponse = read_json(send(request).await?).await?;
        Ok(counts.into())
    }

    /// Fetches the comments on an item, newest first.
    pub async fn fetch_comments(&self, id: &ItemId) -> Result<Vec<Comment>> {
        let url = self.endpoint(&["news", id.as_str(), "comments"])?;
        let envelope: ItemsEnvelope<WireComment> = self.get_json(url).await?;
        Ok(envelope.items.into_iter().map(Comment::from).collect())
    }

    /// Posts a comment and returns the id the backend assigned to it.
    pub async fn send_comment(&self, id: &ItemId, draft: &CommentDraft) -> Result<String> {
        let url = self.endpoint(&["news", id.as_str(), "comments"])?;
        let request = self.http.post(url).json(&CommentRequest {
            text: draft.as_str(),
        });
        let created: CommentCreated = read_json(send(request).await?).await?;
        Ok(created.id.into())
    }

    /// Returns whether the backend reports itself healthy.
    pub async fn health(&self) -> Result<bool> {
        let url = self.endpoint(&["healthz"])?;
        let health: HealthResponse = self.get_json(url).await?;
        Ok(health.status.eq_ignore_ascii_case("ok"))
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| FeedError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        read_json(send(self.http.get(url)).await?).await
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<Response> {
    request.send().await.map_err(Error::from)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    debug!(url = %response.url(), %status, "feed response");

    if status == StatusCode::NOT_FOUND {
        return Err(FeedError::NotFound.into());
    }
    if !status.is_success() {
        return Err(FeedError::Status(status.as_u16()).into());
    }

    let body = response.bytes().await.map_err(FeedError::from)?;
    serde_json::from_slice(&body).map_err(|e| FeedError::Decode(e.to_string()).into())
}
