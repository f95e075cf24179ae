// SPDX-License-Identifier: MPL-2.0
//! Interaction state for a single pointer source.
//!
//! Handles start/move/end/cancel bookkeeping so the classifier only ever
//! sees one clean pair of samples per interaction.

use super::{classify, GestureEvent, GestureSample, GestureSettings};
use crate::domain::gesture::{Axis, Intent};
use std::time::Duration;
use tracing::{debug, trace};

/// What the tracker made of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSignal {
    /// The event was not part of a tracked interaction (multi-touch, stray
    /// move or end, cancel).
    Ignored,
    /// An interaction is in progress; nothing to act on yet.
    Tracking,
    /// The interaction just committed to an axis. Emitted once per interaction.
    /// On [`Axis::Vertical`] the host should stop native scrolling.
    Locked(Axis),
    /// The interaction ended with this classification.
    Finished(Intent),
}

#[derive(Debug, Clone, Copy)]
struct Interaction {
    start: GestureSample,
    last: GestureSample,
    lock: Option<Axis>,
}

/// Turns raw pointer/touch events into at most one [`Intent`] per drag.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    settings: GestureSettings,
    interaction: Option<Interaction>,
}

impl GestureTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            interaction: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    /// Whether an interaction is currently in flight.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.interaction.is_some()
    }

    /// Whether the in-flight interaction is locked vertically, i.e. the host
    /// should keep suppressing native scrolling.
    #[must_use]
    pub fn is_scroll_suppressed(&self) -> bool {
        matches!(
            self.interaction,
            Some(Interaction {
                lock: Some(Axis::Vertical),
                ..
            })
        )
    }

    /// Feeds one event through the tracker.
    pub fn on_event(&mut self, event: GestureEvent) -> GestureSignal {
        match event {
            GestureEvent::Start { sample, contacts } => self.start(sample, contacts),
            GestureEvent::Move { sample, contacts } => self.update(sample, contacts),
            GestureEvent::End { at, position } => self.finish(at, position),
            GestureEvent::Cancel => {
                if self.interaction.take().is_some() {
                    debug!("gesture cancelled");
                }
                GestureSignal::Ignored
            }
        }
    }

    fn start(&mut self, sample: GestureSample, contacts: usize) -> GestureSignal {
        if contacts != 1 {
            if self.interaction.take().is_some() {
                debug!(contacts, "second contact joined, dropping gesture");
            } else {
                trace!(contacts, "ignoring multi-touch start");
            }
            return GestureSignal::Ignored;
        }

        if self.interaction.is_some() {
            debug!("gesture restarted before the previous one ended");
        }

        self.interaction = Some(Interaction {
            start: sample,
            last: sample,
            lock: None,
        });
        GestureSignal::Tracking
    }

    fn update(&mut self, sample: GestureSample, contacts: usize) -> GestureSignal {
        let Some(interaction) = self.interaction.as_mut() else {
            return GestureSignal::Ignored;
        };

        if contacts > 1 {
            debug!(contacts, "second contact joined, dropping gesture");
            self.interaction = None;
            return GestureSignal::Ignored;
        }

        interaction.last = sample;
        if interaction.lock.is_some() {
            return GestureSignal::Tracking;
        }

        let dx = (sample.x - interaction.start.x).abs();
        let dy = (sample.y - interaction.start.y).abs();
        let slop = self.settings.lock_slop.value();

        let axis = if dy > slop && dy > dx {
            Axis::Vertical
        } else if dx > slop && dx > dy {
            Axis::Horizontal
        } else {
            return GestureSignal::Tracking;
        };

        debug!(?axis, dx, dy, "gesture axis locked");
        interaction.lock = Some(axis);
        GestureSignal::Locked(axis)
    }

    fn finish(&mut self, at: Duration, position: Option<(f32, f32)>) -> GestureSignal {
        let Some(interaction) = self.interaction.take() else {
            return GestureSignal::Ignored;
        };

        let intent = if interaction.lock == Some(Axis::Horizontal) {
            Intent::None
        } else {
            let end = match position {
                Some((x, y)) => GestureSample::new(x, y, at),
                None => GestureSample {
                    at,
                    ..interaction.last
                },
            };
            classify(interaction.start, end, &self.settings)
        };

        debug!(intent = intent.as_str(), "gesture finished");
        GestureSignal::Finished(intent)
    }
}
