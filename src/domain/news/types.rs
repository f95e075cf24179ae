// SPDX-License-Identifier: MPL-2.0
//! Core news types.

use std::fmt;
use std::time::SystemTime;

/// Stable identifier of a news item, as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Wraps a backend identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A reaction the reader can leave on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// The action name the backend expects.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Dislike => "dislike",
        }
    }
}

/// Like and dislike totals for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionCounts {
    pub likes: u64,
    pub dislikes: u64,
}

impl ReactionCounts {
    #[must_use]
    pub fn new(likes: u64, dislikes: u64) -> Self {
        Self { likes, dislikes }
    }

    /// Returns the counts with one more reaction of `kind`.
    #[must_use]
    pub fn with_added(self, kind: ReactionKind) -> Self {
        match kind {
            ReactionKind::Like => Self {
                likes: self.likes.saturating_add(1),
                ..self
            },
            ReactionKind::Dislike => Self {
                dislikes: self.dislikes.saturating_add(1),
                ..self
            },
        }
    }
}

/// One news card.
///
/// Only [`id`](Self::id) is load-bearing for navigation; everything else is
/// payload handed to whatever renders the card.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub id: ItemId,
    pub title: String,
    pub summary: String,
    pub link: String,
    pub image: Option<String>,
    pub counts: ReactionCounts,
    pub created_at: Option<SystemTime>,
}

impl NewsItem {
    /// Creates an item with the given id and title and empty payload otherwise.
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: String::new(),
            link: String::new(),
            image: None,
            counts: ReactionCounts::default(),
            created_at: None,
        }
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    #[must_use]
    pub fn with_counts(mut self, counts: ReactionCounts) -> Self {
        self.counts = counts;
        self
    }
}

/// A reader comment attached to an item.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub created_at: Option<SystemTime>,
}
