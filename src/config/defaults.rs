// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the viewer. Constants are organized by category.
//!
//! # Categories
//!
//! - **Transition**: Open/close animation timing
//! - **Paging**: Inter-page margin
//! - **Zoom**: Page zoom scale bounds
//! - **Gestures**: Double-tap window and pan-to-dismiss threshold
//! - **Diagnostics**: Event history capacity

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default duration of the open/close transition (in milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 200;

/// Maximum allowed transition duration (in milliseconds).
pub const MAX_ANIMATION_DURATION_MS: u64 = 2_000;

// ==========================================================================
// Paging Defaults
// ==========================================================================

/// Default horizontal gap on each side of a page (in points).
pub const DEFAULT_PAGE_MARGIN: f32 = 4.0;

/// Maximum allowed page margin (in points).
pub const MAX_PAGE_MARGIN: f32 = 64.0;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale at which the image exactly fits its page.
pub const FIT_ZOOM_SCALE: f32 = 1.0;

/// Default upper bound for pinch zoom.
pub const DEFAULT_MAX_ZOOM_SCALE: f32 = 3.0;

/// Hard upper bound accepted for the pinch zoom limit.
pub const MAX_ZOOM_SCALE_LIMIT: f32 = 10.0;

/// Default scale reached by a double tap on a fitted image.
pub const DEFAULT_DOUBLE_TAP_ZOOM_SCALE: f32 = 2.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default window in which a second tap turns into a double tap (in milliseconds).
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 350;

/// Minimum double-tap window (in milliseconds).
pub const MIN_DOUBLE_TAP_WINDOW_MS: u64 = 100;

/// Maximum double-tap window (in milliseconds).
pub const MAX_DOUBLE_TAP_WINDOW_MS: u64 = 1_000;

/// Background alpha under which releasing a dismiss pan closes the viewer.
pub const DEFAULT_DISMISS_ALPHA_THRESHOLD: f32 = 0.6;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of viewer events kept in the diagnostics history.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

/// Minimum diagnostics history capacity.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = 16;

/// Maximum diagnostics history capacity.
pub const MAX_DIAGNOSTICS_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_ANIMATION_DURATION_MS <= MAX_ANIMATION_DURATION_MS);

    assert!(DEFAULT_PAGE_MARGIN >= 0.0);
    assert!(DEFAULT_PAGE_MARGIN <= MAX_PAGE_MARGIN);

    assert!(FIT_ZOOM_SCALE > 0.0);
    assert!(DEFAULT_MAX_ZOOM_SCALE > FIT_ZOOM_SCALE);
    assert!(DEFAULT_MAX_ZOOM_SCALE <= MAX_ZOOM_SCALE_LIMIT);
    assert!(DEFAULT_DOUBLE_TAP_ZOOM_SCALE > FIT_ZOOM_SCALE);
    assert!(DEFAULT_DOUBLE_TAP_ZOOM_SCALE <= DEFAULT_MAX_ZOOM_SCALE);

    assert!(MIN_DOUBLE_TAP_WINDOW_MS > 0);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS <= MAX_DOUBLE_TAP_WINDOW_MS);

    assert!(DEFAULT_DISMISS_ALPHA_THRESHOLD > 0.0);
    assert!(DEFAULT_DISMISS_ALPHA_THRESHOLD < 1.0);

    assert!(MIN_DIAGNOSTICS_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY <= MAX_DIAGNOSTICS_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_defaults_are_valid() {
        assert_eq!(DEFAULT_ANIMATION_DURATION_MS, 200);
    }

    #[test]
    fn zoom_defaults_are_valid() {
        assert!(DEFAULT_DOUBLE_TAP_ZOOM_SCALE > FIT_ZOOM_SCALE);
        assert!(DEFAULT_DOUBLE_TAP_ZOOM_SCALE <= DEFAULT_MAX_ZOOM_SCALE);
    }

    #[test]
    fn gesture_defaults_are_valid() {
        assert_eq!(DEFAULT_DOUBLE_TAP_WINDOW_MS, 350);
        assert!(DEFAULT_DISMISS_ALPHA_THRESHOLD > 0.0 && DEFAULT_DISMISS_ALPHA_THRESHOLD < 1.0);
    }

    #[test]
    fn paging_defaults_are_valid() {
        assert_eq!(DEFAULT_PAGE_MARGIN, 4.0);
    }
}
