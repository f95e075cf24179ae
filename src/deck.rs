// SPDX-License-Identifier: MPL-2.0
//! The reader's deck: the loaded items, which one is on screen, and the
//! reactions left on them.
//!
//! [`Deck`] is the one object a host talks to. Every input path (swipes,
//! arrow keys, prev/next buttons) lands on the same [`Cursor`] operations,
//! and every navigating call reports whether the visible card changed so
//! the host knows when to re-render.

use crate::domain::gesture::Intent;
use crate::domain::news::{ItemId, NewsItem, ReactionCounts, ReactionKind};
use crate::error::Result;
use crate::gesture::{GestureEvent, GestureSettings, GestureSignal, GestureTracker};
use crate::navigation::{Cursor, NavigationInfo};
use crate::reactions::ReactionLedger;
use tracing::{debug, info};

/// Keyboard keys the deck reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Next card, same as a swipe up.
    ArrowUp,
    /// Previous card, same as a swipe down.
    ArrowDown,
    Other,
}

impl Key {
    #[must_use]
    pub fn intent(self) -> Intent {
        match self {
            Key::ArrowUp => Intent::Next,
            Key::ArrowDown => Intent::Prev,
            Key::Other => Intent::None,
        }
    }
}

/// Result of a call that may move the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeckUpdate<'a> {
    /// The visible card is now this one (`None` when the deck is empty).
    Changed(Option<&'a NewsItem>),
    Unchanged,
}

impl DeckUpdate<'_> {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        matches!(self, DeckUpdate::Changed(_))
    }
}

/// A reaction the host should post to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReaction {
    pub id: ItemId,
    pub kind: ReactionKind,
    /// Counts after the optimistic local update.
    pub counts: ReactionCounts,
}

#[derive(Debug, Default)]
pub struct Deck {
    cursor: Cursor<NewsItem>,
    tracker: GestureTracker,
    ledger: ReactionLedger,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub fn new(settings: GestureSettings, ledger: ReactionLedger) -> Self {
        Self {
            cursor: Cursor::new(),
            tracker: GestureTracker::new(settings),
            ledger,
        }
    }

    /// Replaces the items with the outcome of a fetch.
    ///
    /// On success the cursor resets to the first item. On failure the
    /// current items and position are kept and the error is handed back.
    pub fn apply_fetch(&mut self, fetched: Result<Vec<NewsItem>>) -> Result<DeckUpdate<'_>> {
        let items = fetched?;
        info!(count = items.len(), "deck reloaded");
        Ok(DeckUpdate::Changed(self.cursor.reset(items)))
    }

    /// Feeds one pointer/touch event. Returns the tracker's signal (so the
    /// host can suppress native scrolling on a vertical lock) and the
    /// navigation it caused.
    pub fn on_gesture_event(&mut self, event: GestureEvent) -> (GestureSignal, DeckUpdate<'_>) {
        let signal = self.tracker.on_event(event);
        let update = match signal {
            GestureSignal::Finished(intent) => self.navigate(intent),
            _ => DeckUpdate::Unchanged,
        };
        (signal, update)
    }

    pub fn on_key(&mut self, key: Key) -> DeckUpdate<'_> {
        self.navigate(key.intent())
    }

    pub fn next(&mut self) -> DeckUpdate<'_> {
        self.navigate(Intent::Next)
    }

    pub fn prev(&mut self) -> DeckUpdate<'_> {
        self.navigate(Intent::Prev)
    }

    /// Moves to the item with `id`, if it is loaded.
    pub fn focus(&mut self, id: &ItemId) -> DeckUpdate<'_> {
        let before = self.cursor.position();
        match self.cursor.seek(|item| &item.id == id) {
            Some(position) if Some(position) != before => {
                DeckUpdate::Changed(self.cursor.current())
            }
            _ => DeckUpdate::Unchanged,
        }
    }

    fn navigate(&mut self, intent: Intent) -> DeckUpdate<'_> {
        if !intent.is_directional() {
            return DeckUpdate::Unchanged;
        }

        let before = self.cursor.position();
        self.cursor.step(intent);
        let after = self.cursor.position();

        if before == after {
            debug!(intent = intent.as_str(), "already at the edge of the deck");
            DeckUpdate::Unchanged
        } else {
            debug!(intent = intent.as_str(), ?after, "moved");
            DeckUpdate::Changed(self.cursor.current())
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&NewsItem> {
        self.cursor.current()
    }

    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        self.cursor.info()
    }

    #[must_use]
    pub fn items(&self) -> &[NewsItem] {
        self.cursor.items()
    }

    #[must_use]
    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    #[must_use]
    pub fn ledger(&self) -> &ReactionLedger {
        &self.ledger
    }

    /// The reader's own reaction to the visible card.
    #[must_use]
    pub fn my_reaction(&self) -> Option<ReactionKind> {
        self.current().and_then(|item| self.ledger.get(&item.id))
    }

    /// Records `kind` on the visible card and bumps its count locally.
    ///
    /// Returns `None` when the deck is empty or the reader already left the
    /// same reaction, so nothing needs posting.
    pub fn react(&mut self, kind: ReactionKind) -> Option<PendingReaction> {
        let item = self.cursor.current_mut()?;
        if !self.ledger.record(item.id.clone(), kind) {
            return None;
        }

        item.counts = item.counts.with_added(kind);
        debug!(id = %item.id, kind = kind.as_str(), "reaction recorded");
        Some(PendingReaction {
            id: item.id.clone(),
            kind,
            counts: item.counts,
        })
    }

    /// Overwrites the counts of the item with `id` with the backend's totals.
    /// Returns `false` if no such item is loaded.
    pub fn apply_counts(&mut self, id: &ItemId, counts: ReactionCounts) -> bool {
        match self.cursor.items_mut().iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.counts = counts;
                true
            }
            None => false,
        }
    }
}
