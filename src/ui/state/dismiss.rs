// SPDX-License-Identifier: MPL-2.0
//! Pan-to-dismiss state management
//!
//! Tracks a vertical pan on an unzoomed page and maps its distance to the
//! background alpha of the viewer.

use crate::domain::ui::DismissThreshold;
use iced_core::Vector;

/// Outcome of releasing a dismiss pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissRelease {
    /// The pan went far enough: close the viewer.
    Dismiss,
    /// The image springs back to its resting place.
    SnapBack,
}

/// Manages pan-to-dismiss state
#[derive(Debug, Clone, Default)]
pub struct DismissState {
    /// Whether a dismiss pan is currently active
    pub is_dragging: bool,

    /// Cumulative translation since the pan started
    pub translation: Vector,

    /// Page height used to normalize the drag distance
    travel: f32,
}

impl DismissState {
    /// Starts tracking a dismiss pan over a page of the given height.
    pub fn start(&mut self, page_height: f32) {
        self.is_dragging = true;
        self.translation = Vector::new(0.0, 0.0);
        // Half a page of vertical travel fades the background out completely.
        self.travel = (page_height / 2.0).max(1.0);
    }

    /// Updates the translation and returns the new background alpha.
    pub fn update(&mut self, translation: Vector) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        self.translation = translation;
        Some(self.background_alpha())
    }

    /// Drag progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if !self.is_dragging {
            return 0.0;
        }
        (self.translation.y.abs() / self.travel).clamp(0.0, 1.0)
    }

    /// Background alpha for the current progress (1 = opaque).
    #[must_use]
    pub fn background_alpha(&self) -> f32 {
        1.0 - self.progress()
    }

    /// Stops the pan and decides between dismissal and snap back.
    pub fn release(&mut self, threshold: DismissThreshold) -> Option<DismissRelease> {
        if !self.is_dragging {
            return None;
        }
        let alpha = self.background_alpha();
        self.stop();
        Some(if threshold.should_dismiss(alpha) {
            DismissRelease::Dismiss
        } else {
            DismissRelease::SnapBack
        })
    }

    /// Abandons the pan without a decision.
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.translation = Vector::new(0.0, 0.0);
    }
}
