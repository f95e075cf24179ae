// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gesture**: Swipe classification thresholds (mirrors the domain bounds)
//! - **Feed**: Backend location, page size and request timeout

use crate::domain::gesture::newtypes::{
    duration_bounds, guard_bounds, slop_bounds, threshold_bounds,
};

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default vertical travel (px) for a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = threshold_bounds::DEFAULT;

/// Default longest swipe (ms).
pub const DEFAULT_MAX_GESTURE_MS: u64 = duration_bounds::DEFAULT_MS;

/// Default horizontal guard (px).
pub const DEFAULT_HORIZONTAL_GUARD_PX: f32 = guard_bounds::DEFAULT;

/// Default axis-lock slop (px).
pub const DEFAULT_LOCK_SLOP_PX: f32 = slop_bounds::DEFAULT;

// ==========================================================================
// Feed Defaults
// ==========================================================================

/// Backend used when neither the settings file nor the command line name one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default number of items requested from `/news`.
pub const DEFAULT_FEED_LIMIT: u32 = 100;

/// Minimum page size.
pub const MIN_FEED_LIMIT: u32 = 1;

/// Maximum page size.
pub const MAX_FEED_LIMIT: u32 = 500;

/// Default per-request timeout (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Minimum per-request timeout (seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum per-request timeout (seconds).
pub const MAX_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_FEED_LIMIT > 0);
    assert!(MAX_FEED_LIMIT >= MIN_FEED_LIMIT);
    assert!(DEFAULT_FEED_LIMIT >= MIN_FEED_LIMIT);
    assert!(DEFAULT_FEED_LIMIT <= MAX_FEED_LIMIT);

    assert!(MIN_TIMEOUT_SECS > 0);
    assert!(MAX_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);

    assert!(duration_bounds::DEFAULT_MS >= duration_bounds::MIN_MS);
    assert!(duration_bounds::DEFAULT_MS <= duration_bounds::MAX_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_defaults_are_in_recommended_ranges() {
        assert!((40.0..=60.0).contains(&DEFAULT_SWIPE_THRESHOLD_PX));
        assert!((600..=1000).contains(&DEFAULT_MAX_GESTURE_MS));
        assert!((10.0..=12.0).contains(&DEFAULT_LOCK_SLOP_PX));
    }

    #[test]
    fn feed_defaults_are_valid() {
        assert_eq!(DEFAULT_FEED_LIMIT, 100);
        assert!(DEFAULT_BASE_URL.starts_with("http"));
    }
}
