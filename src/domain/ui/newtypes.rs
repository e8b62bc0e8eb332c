// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for viewer tuning values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_DISMISS_ALPHA_THRESHOLD,
    DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_DOUBLE_TAP_ZOOM_SCALE, DEFAULT_MAX_ZOOM_SCALE,
    DEFAULT_PAGE_MARGIN, FIT_ZOOM_SCALE, MAX_ANIMATION_DURATION_MS, MAX_DOUBLE_TAP_WINDOW_MS,
    MAX_PAGE_MARGIN, MAX_ZOOM_SCALE_LIMIT, MIN_DOUBLE_TAP_WINDOW_MS,
};
use std::time::Duration;

// =============================================================================
// ZoomScale
// =============================================================================

/// Zoom scale relative to the fitted image (1.0 = fit).
///
/// Clamped to `[FIT_ZOOM_SCALE, limit]` where the limit is supplied by the
/// page's [`MaxZoomScale`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// The fitted scale.
    pub const FIT: Self = Self(FIT_ZOOM_SCALE);

    /// Creates a new scale, clamping it to `[FIT_ZOOM_SCALE, max]`.
    #[must_use]
    pub fn new(scale: f32, max: MaxZoomScale) -> Self {
        if !scale.is_finite() {
            return Self::FIT;
        }
        Self(scale.clamp(FIT_ZOOM_SCALE, max.value()))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the image is magnified beyond its fitted size.
    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.0 > FIT_ZOOM_SCALE + f32::EPSILON
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self::FIT
    }
}

// =============================================================================
// MaxZoomScale
// =============================================================================

/// Upper bound for pinch zoom, guaranteed to be within `(FIT, MAX_ZOOM_SCALE_LIMIT]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxZoomScale(f32);

impl MaxZoomScale {
    /// Creates a new zoom limit, clamping to the valid range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if !scale.is_finite() {
            return Self::default();
        }
        Self(scale.clamp(FIT_ZOOM_SCALE + 0.1, MAX_ZOOM_SCALE_LIMIT))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for MaxZoomScale {
    fn default() -> Self {
        Self(DEFAULT_MAX_ZOOM_SCALE)
    }
}

// =============================================================================
// DoubleTapZoom
// =============================================================================

/// Scale reached by a double tap on a fitted image.
///
/// Always strictly above the fitted scale so that a double tap is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleTapZoom(f32);

impl DoubleTapZoom {
    /// Creates a new double-tap scale, clamping it to `(FIT, max]`.
    #[must_use]
    pub fn new(scale: f32, max: MaxZoomScale) -> Self {
        if !scale.is_finite() {
            return Self(DEFAULT_DOUBLE_TAP_ZOOM_SCALE.min(max.value()));
        }
        Self(scale.clamp(FIT_ZOOM_SCALE + 0.1, max.value()))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for DoubleTapZoom {
    fn default() -> Self {
        Self(DEFAULT_DOUBLE_TAP_ZOOM_SCALE)
    }
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// Duration of the open/close transition, capped at `MAX_ANIMATION_DURATION_MS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDuration(u64);

impl AnimationDuration {
    /// Zero-length transition used for the non-animated path.
    pub const INSTANT: Self = Self(0);

    /// Creates a new duration in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.min(MAX_ANIMATION_DURATION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(DEFAULT_ANIMATION_DURATION_MS)
    }
}

// =============================================================================
// PageMargin
// =============================================================================

/// Horizontal gap placed on each side of a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMargin(f32);

impl PageMargin {
    /// Creates a new margin, clamping to `[0, MAX_PAGE_MARGIN]`.
    #[must_use]
    pub fn new(points: f32) -> Self {
        if !points.is_finite() {
            return Self::default();
        }
        Self(points.clamp(0.0, MAX_PAGE_MARGIN))
    }

    /// Returns the margin in points.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for PageMargin {
    fn default() -> Self {
        Self(DEFAULT_PAGE_MARGIN)
    }
}

// =============================================================================
// DismissThreshold
// =============================================================================

/// Background alpha under which a released dismiss pan closes the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DismissThreshold(f32);

impl DismissThreshold {
    /// Creates a new threshold, clamping to `[0.05, 0.95]`.
    #[must_use]
    pub fn new(alpha: f32) -> Self {
        if !alpha.is_finite() {
            return Self::default();
        }
        Self(alpha.clamp(0.05, 0.95))
    }

    /// Returns the alpha threshold.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether releasing at `background_alpha` should dismiss.
    #[must_use]
    pub fn should_dismiss(self, background_alpha: f32) -> bool {
        background_alpha < self.0
    }
}

impl Default for DismissThreshold {
    fn default() -> Self {
        Self(DEFAULT_DISMISS_ALPHA_THRESHOLD)
    }
}

// =============================================================================
// DoubleTapWindow
// =============================================================================

/// Time in which a second tap is merged into a double tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleTapWindow(u64);

impl DoubleTapWindow {
    /// Creates a new window in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS))
    }

    /// Returns the window as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DoubleTapWindow {
    fn default() -> Self {
        Self(DEFAULT_DOUBLE_TAP_WINDOW_MS)
    }
}
