// SPDX-License-Identifier: MPL-2.0
//! Saturating cursor over an ordered sequence.

use super::NavigationInfo;
use crate::domain::gesture::Intent;

/// Index into an ordered, in-memory list of items.
///
/// Invariant: `position` is `Some(i)` with `i < items.len()` whenever the list
/// is non-empty, and `None` when it is empty. Stepping saturates at both ends;
/// there is no wraparound and no error.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor<T> {
    items: Vec<T>,
    position: Option<usize>,
}

impl<T> Cursor<T> {
    /// Creates an empty cursor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            position: None,
        }
    }

    /// Replaces the whole sequence and moves back to the first item.
    ///
    /// Returns the new current item, or `None` for an empty sequence.
    pub fn reset(&mut self, items: Vec<T>) -> Option<&T> {
        self.position = if items.is_empty() { None } else { Some(0) };
        self.items = items;
        self.current()
    }

    /// Returns the item under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.position?)
    }

    /// Returns the item under the cursor for in-place updates.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.items.get_mut(self.position?)
    }

    /// Moves one item forward unless already on the last one.
    pub fn advance(&mut self) -> Option<&T> {
        if let Some(position) = self.position {
            if position + 1 < self.items.len() {
                self.position = Some(position + 1);
            }
        }
        self.current()
    }

    /// Moves one item back unless already on the first one.
    pub fn retreat(&mut self) -> Option<&T> {
        if let Some(position) = self.position {
            self.position = Some(position.saturating_sub(1));
        }
        self.current()
    }

    /// Applies a classified intent: `Next` advances, `Prev` retreats,
    /// `None` leaves the cursor where it is.
    pub fn step(&mut self, intent: Intent) -> Option<&T> {
        match intent {
            Intent::Next => self.advance(),
            Intent::Prev => self.retreat(),
            Intent::None => self.current(),
        }
    }

    /// Jumps to the first item matching `predicate`, keeping the current
    /// position when nothing matches. Returns the matched index.
    pub fn seek(&mut self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        let index = self.items.iter().position(predicate)?;
        self.position = Some(index);
        Some(index)
    }

    /// Returns the current index, if the list is non-empty.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Mutable access to every item, e.g. to patch counts by id.
    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.position == Some(0)
    }

    #[must_use]
    pub fn is_at_last(&self) -> bool {
        matches!(self.position, Some(position) if position + 1 == self.items.len())
    }

    /// Returns a snapshot of the navigation state.
    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        NavigationInfo {
            has_next: self.position.is_some() && !self.is_at_last(),
            has_previous: self.position.is_some() && !self.is_at_first(),
            current_index: self.position,
            total_count: self.items.len(),
        }
    }
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::new()
    }
}
