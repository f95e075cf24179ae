// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture recognition.
//!
//! [`classify`] turns the first and last sample of a drag into an
//! [`Intent`]. [`GestureTracker`] sits in front of it as the single input
//! port for raw pointer/touch events: it remembers the start sample, locks
//! the drag to an axis once it leaves the slop radius, and produces at most
//! one intent per interaction.
//!
//! # Direction convention
//!
//! Screen y grows downward. A swipe *up* (end y smaller than start y) means
//! [`Intent::Next`]; a swipe *down* means [`Intent::Prev`].

mod tracker;

pub use tracker::{GestureSignal, GestureTracker};

use crate::domain::gesture::{
    AxisLockSlop, HorizontalGuard, Intent, MaxGestureDuration, SwipeThreshold,
};
use std::time::Duration;

/// One pointer position at one instant.
///
/// `at` is measured from whatever origin the host's event clock uses; only
/// differences between samples of the same interaction matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub x: f32,
    pub y: f32,
    pub at: Duration,
}

impl GestureSample {
    #[must_use]
    pub fn new(x: f32, y: f32, at: Duration) -> Self {
        Self { x, y, at }
    }

    /// Convenience constructor for millisecond event clocks.
    #[must_use]
    pub fn at_millis(x: f32, y: f32, ms: u64) -> Self {
        Self::new(x, y, Duration::from_millis(ms))
    }
}

/// Raw input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A pointer went down / a touch began. `contacts` is the number of
    /// simultaneous touch points (1 for a mouse).
    Start {
        sample: GestureSample,
        contacts: usize,
    },
    /// The pointer moved while down.
    Move {
        sample: GestureSample,
        contacts: usize,
    },
    /// The pointer was released at `at`. Some platforms report no
    /// coordinates on release; the last move position is used then.
    End {
        at: Duration,
        position: Option<(f32, f32)>,
    },
    /// The platform cancelled the interaction.
    Cancel,
}

impl GestureEvent {
    /// A release with known coordinates.
    #[must_use]
    pub fn release(sample: GestureSample) -> Self {
        GestureEvent::End {
            at: sample.at,
            position: Some((sample.x, sample.y)),
        }
    }
}

/// Thresholds the classifier and tracker run on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSettings {
    pub threshold: SwipeThreshold,
    pub max_duration: MaxGestureDuration,
    pub horizontal_guard: HorizontalGuard,
    pub lock_slop: AxisLockSlop,
}

/// Classifies a completed drag from its start and end samples.
///
/// Slow drags, horizontal drags and short drags all yield [`Intent::None`].
#[must_use]
pub fn classify(start: GestureSample, end: GestureSample, settings: &GestureSettings) -> Intent {
    let elapsed = end.at.saturating_sub(start.at);
    if settings.max_duration.is_exceeded_by(elapsed) {
        return Intent::None;
    }

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let (abs_dx, abs_dy) = (dx.abs(), dy.abs());

    if abs_dx > abs_dy && abs_dx > settings.horizontal_guard.value() {
        return Intent::None;
    }

    if abs_dy >= settings.threshold.value() && abs_dy > abs_dx {
        if dy < 0.0 {
            Intent::Next
        } else {
            Intent::Prev
        }
    } else {
        Intent::None
    }
}
