// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core reader types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so the gesture and
//! navigation logic can be tested without a network or a terminal.
//!
//! # Modules
//!
//! - [`gesture`]: Gesture outcomes ([`Intent`](gesture::Intent), [`Axis`](gesture::Axis))
//!   and thresholds ([`SwipeThreshold`](gesture::SwipeThreshold),
//!   [`MaxGestureDuration`](gesture::MaxGestureDuration))
//! - [`news`]: Feed content ([`NewsItem`](news::NewsItem), [`ItemId`](news::ItemId),
//!   [`ReactionKind`](news::ReactionKind), [`CommentDraft`](news::CommentDraft))

pub mod gesture;
pub mod news;
