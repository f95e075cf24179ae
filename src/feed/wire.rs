// SPDX-License-Identifier: MPL-2.0
//! JSON payloads exchanged with the news backend.
//!
//! The backend is lenient about what it returns (missing titles, `null`
//! counts, timestamps with or without an offset), so every payload field
//! except the id is optional here and defaulted on conversion.

use crate::domain::news::{Comment, ItemId, NewsItem, ReactionCounts, ReactionKind};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Identifiers arrive as strings from the current backend but as numbers
/// from some older deployments.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum WireId {
    Text(String),
    Number(u64),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(text) => text,
            WireId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemsEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemEnvelope {
    pub item: WireNewsItem,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireNewsItem {
    id: WireId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    likes: Option<u64>,
    #[serde(default)]
    dislikes: Option<u64>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<WireNewsItem> for NewsItem {
    fn from(wire: WireNewsItem) -> Self {
        let image = wire
            .image
            .filter(|url| !url.is_empty())
            .or(wire.thumbnail.filter(|url| !url.is_empty()));
        NewsItem {
            id: ItemId::from(String::from(wire.id)),
            title: wire.title.unwrap_or_default(),
            summary: wire.summary.unwrap_or_default(),
            link: wire.link.unwrap_or_default(),
            image,
            counts: ReactionCounts::new(
                wire.likes.unwrap_or_default(),
                wire.dislikes.unwrap_or_default(),
            ),
            created_at: wire.created_at.as_deref().and_then(parse_timestamp),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReactionRequest {
    pub action: &'static str,
}

impl From<ReactionKind> for ReactionRequest {
    fn from(kind: ReactionKind) -> Self {
        Self {
            action: kind.as_str(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CountsResponse {
    #[serde(default)]
    likes: Option<u64>,
    #[serde(default)]
    dislikes: Option<u64>,
}

impl From<CountsResponse> for ReactionCounts {
    fn from(wire: CountsResponse) -> Self {
        ReactionCounts::new(
            wire.likes.unwrap_or_default(),
            wire.dislikes.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireComment {
    id: WireId,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<WireComment> for Comment {
    fn from(wire: WireComment) -> Self {
        Comment {
            id: wire.id.into(),
            text: wire.text.unwrap_or_default(),
            created_at: wire.created_at.as_deref().and_then(parse_timestamp),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CommentRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentCreated {
    pub id: WireId,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

/// Parses RFC 3339 timestamps, and naive ISO-8601 ones (no offset) as UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Option<SystemTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(SystemTime::from(parsed.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| SystemTime::from(naive.and_utc()))
}
