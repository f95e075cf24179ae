// SPDX-License-Identifier: MPL-2.0
//! Comment text validation.

use std::fmt;

/// Longest comment accepted, in characters.
pub const MAX_COMMENT_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentError {
    /// Nothing left after trimming whitespace
    Empty,

    /// More than [`MAX_COMMENT_CHARS`] characters
    TooLong { chars: usize },
}

impl fmt::Display for CommentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentError::Empty => write!(f, "Comment is empty"),
            CommentError::TooLong { chars } => write!(
                f,
                "Comment is too long ({} characters, max {})",
                chars, MAX_COMMENT_CHARS
            ),
        }
    }
}

impl std::error::Error for CommentError {}

/// Comment text that is safe to send: trimmed, non-empty, bounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft(String);

impl CommentDraft {
    /// Validates raw input.
    ///
    /// # Errors
    ///
    /// Returns [`CommentError::Empty`] for blank input and
    /// [`CommentError::TooLong`] past the character limit.
    pub fn new(raw: &str) -> Result<Self, CommentError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(CommentError::Empty);
        }
        let chars = text.chars().count();
        if chars > MAX_COMMENT_CHARS {
            return Err(CommentError::TooLong { chars });
        }
        Ok(Self(text.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_is_trimmed() {
        let draft = CommentDraft::new("  nice read \n").expect("valid comment");
        assert_eq!(draft.as_str(), "nice read");
    }

    #[test]
    fn blank_draft_is_rejected() {
        assert_eq!(CommentDraft::new(""), Err(CommentError::Empty));
        assert_eq!(CommentDraft::new(" \t\n"), Err(CommentError::Empty));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // Telugu letters are three bytes each in UTF-8.
        let text: String = "క".repeat(MAX_COMMENT_CHARS);
        assert!(CommentDraft::new(&text).is_ok());

        let too_long = format!("{text}క");
        assert_eq!(
            CommentDraft::new(&too_long),
            Err(CommentError::TooLong {
                chars: MAX_COMMENT_CHARS + 1
            })
        );
    }
}
