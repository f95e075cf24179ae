// SPDX-License-Identifier: MPL-2.0
//! News domain types.
//!
//! Items, reactions and comments as the reader sees them, independent of
//! the JSON shape the backend uses on the wire.

pub mod comment;
pub mod types;

// Re-export commonly used types
pub use comment::{CommentDraft, CommentError, MAX_COMMENT_CHARS};
pub use types::{Comment, ItemId, NewsItem, ReactionCounts, ReactionKind};
