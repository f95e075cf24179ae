// SPDX-License-Identifier: MPL-2.0
//! `newsdeck` is a swipe-driven news card reader.
//!
//! The core is small and synchronous: [`gesture`] turns pointer drags into
//! next/previous intents, [`navigation::Cursor`] walks the loaded items
//! without ever running off either end, and [`deck::Deck`] ties both to the
//! reader's reactions. Around it sit an async [`feed`] client for the news
//! backend, TOML [`config`], CBOR-persisted [`reactions`], and the
//! terminal front end in [`cli`].

pub mod cli;
pub mod config;
pub mod deck;
pub mod domain;
pub mod error;
pub mod feed;
pub mod gesture;
pub mod logging;
pub mod navigation;
pub mod paths;
pub mod reactions;
