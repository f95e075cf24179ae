// SPDX-License-Identifier: MPL-2.0
//! Gesture domain types.
//!
//! The outcome vocabulary shared by the gesture classifier, the keyboard
//! mapping and the cursor, plus the clamped thresholds the classifier runs on.

pub mod newtypes;

pub use newtypes::{AxisLockSlop, HorizontalGuard, MaxGestureDuration, SwipeThreshold};

/// Classified outcome of a gesture or key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intent {
    /// Show the following item (swipe up, `ArrowUp`).
    Next,
    /// Show the preceding item (swipe down, `ArrowDown`).
    Prev,
    /// Nothing should happen.
    #[default]
    None,
}

impl Intent {
    /// Returns whether this intent moves the cursor at all.
    #[must_use]
    pub fn is_directional(self) -> bool {
        !matches!(self, Intent::None)
    }

    /// Short lowercase name, used in logs and the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Next => "next",
            Intent::Prev => "prev",
            Intent::None => "none",
        }
    }
}

/// Axis a drag has committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}
