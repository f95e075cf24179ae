// SPDX-License-Identifier: MPL-2.0
use crate::domain::news::CommentError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Feed(FeedError),
    Comment(CommentError),
}

/// Failures talking to the news backend.
///
/// Kept separate from [`Error`] so the host can tell a missing item apart
/// from a broken connection when deciding what to show.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    /// The base URL (or a URL built from it) is not valid
    InvalidUrl(String),

    /// The request never produced a response (DNS, connect, timeout...)
    Request(String),

    /// The backend answered 404 for the requested item
    NotFound,

    /// Any other non-success HTTP status
    Status(u16),

    /// The response body did not match the expected JSON shape
    Decode(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            FeedError::Request(msg) => write!(f, "Request failed: {}", msg),
            FeedError::NotFound => write!(f, "News item not found"),
            FeedError::Status(code) => write!(f, "HTTP status: {}", code),
            FeedError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Feed(e) => write!(f, "Feed Error: {}", e),
            Error::Comment(e) => write!(f, "Comment Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for FeedError {}

impl From<FeedError> for Error {
    fn from(err: FeedError) -> Self {
        Error::Feed(err)
    }
}

impl From<CommentError> for Error {
    fn from(err: CommentError) -> Self {
        Error::Comment(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FeedError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FeedError::Status(status.as_u16())
        } else {
            FeedError::Request(err.to_string())
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Feed(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
