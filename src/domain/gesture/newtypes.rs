// SPDX-License-Identifier: MPL-2.0
//! Gesture newtypes.
//!
//! This module provides type-safe wrappers for the classifier thresholds,
//! ensuring they are always within valid ranges no matter what the
//! settings file contains.

use std::time::Duration;

// =============================================================================
// Swipe Threshold Bounds
// =============================================================================

/// Minimum vertical travel for a swipe, in logical pixels (20 to 200).
pub mod threshold_bounds {
    /// Minimum threshold.
    pub const MIN: f32 = 20.0;
    /// Maximum threshold.
    pub const MAX: f32 = 200.0;
    /// Default threshold.
    pub const DEFAULT: f32 = 60.0;
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Vertical distance a drag must cover to count as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    ///
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(threshold_bounds::MIN, threshold_bounds::MAX))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(threshold_bounds::DEFAULT)
    }
}

// =============================================================================
// Gesture Duration Bounds
// =============================================================================

/// Longest interaction still treated as a swipe, in milliseconds (100 to 3000).
pub mod duration_bounds {
    /// Minimum duration in milliseconds.
    pub const MIN_MS: u64 = 100;
    /// Maximum duration in milliseconds.
    pub const MAX_MS: u64 = 3000;
    /// Default duration in milliseconds.
    pub const DEFAULT_MS: u64 = 800;
}

// =============================================================================
// MaxGestureDuration
// =============================================================================

/// Upper bound on swipe duration; slower drags are scrolls, not swipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxGestureDuration(Duration);

impl MaxGestureDuration {
    /// Creates a new duration limit from milliseconds, clamped to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(
            ms.clamp(duration_bounds::MIN_MS, duration_bounds::MAX_MS),
        ))
    }

    /// Returns the limit in whole milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(duration_bounds::MAX_MS)
    }

    /// Returns whether `elapsed` is too slow to be a swipe.
    #[must_use]
    pub fn is_exceeded_by(self, elapsed: Duration) -> bool {
        elapsed > self.0
    }
}

impl Default for MaxGestureDuration {
    fn default() -> Self {
        Self(Duration::from_millis(duration_bounds::DEFAULT_MS))
    }
}

// =============================================================================
// Horizontal Guard Bounds
// =============================================================================

/// Horizontal travel beyond which a horizontal-dominant drag is rejected (10 to 200).
pub mod guard_bounds {
    /// Minimum guard.
    pub const MIN: f32 = 10.0;
    /// Maximum guard.
    pub const MAX: f32 = 200.0;
    /// Default guard.
    pub const DEFAULT: f32 = 30.0;
}

// =============================================================================
// HorizontalGuard
// =============================================================================

/// Keeps sideways drags from paging vertically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalGuard(f32);

impl HorizontalGuard {
    /// Creates a new guard, clamping the value to the valid range.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(guard_bounds::MIN, guard_bounds::MAX))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for HorizontalGuard {
    fn default() -> Self {
        Self(guard_bounds::DEFAULT)
    }
}

// =============================================================================
// Axis Lock Slop Bounds
// =============================================================================

/// Movement tolerated before a drag commits to an axis (4 to 40).
pub mod slop_bounds {
    /// Minimum slop.
    pub const MIN: f32 = 4.0;
    /// Maximum slop.
    pub const MAX: f32 = 40.0;
    /// Default slop.
    pub const DEFAULT: f32 = 10.0;
}

// =============================================================================
// AxisLockSlop
// =============================================================================

/// Jitter allowance before the tracker locks the drag to one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLockSlop(f32);

impl AxisLockSlop {
    /// Creates a new slop, clamping the value to the valid range.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(slop_bounds::MIN, slop_bounds::MAX))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for AxisLockSlop {
    fn default() -> Self {
        Self(slop_bounds::DEFAULT)
    }
}
