// SPDX-License-Identifier: MPL-2.0
//! Position tracking over a fetched item list.
//!
//! [`Cursor`] is the single source of truth for "which item is on screen".
//! Gestures, arrow keys and buttons all drive the same cursor, so they
//! share one set of boundary rules: stepping past either end does nothing.

mod cursor;

pub use cursor::Cursor;

/// Navigation state snapshot for rendering prev/next controls.
///
/// Lets the host enable or disable buttons without holding a borrow of the
/// cursor itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether advancing would change the current item.
    pub has_next: bool,
    /// Whether retreating would change the current item.
    pub has_previous: bool,
    /// Current position in the list (0-indexed), if any.
    pub current_index: Option<usize>,
    /// Total number of items in the list.
    pub total_count: usize,
}
