// SPDX-License-Identifier: MPL-2.0
//! Zoom state management for a single page.
//!
//! This module handles the zoom scale and pan offset of a page's image:
//! - Scale relative to the fitted image, clamped to `[fit, max]`
//! - Double-tap toggling between fit and a fixed zoom-in scale
//! - Continuous pinch zoom around a focus point
//! - Pan offset clamping so the image never leaves the page
//!
//! Geometry model: the fitted image is centered in the page. Zooming scales
//! it around that center, then `offset` translates it.

use crate::domain::ui::{DoubleTapZoom, MaxZoomScale, ZoomScale};
use iced_core::{Point, Rectangle, Size, Vector};

/// Manages all zoom-related state for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    /// Current scale (1.0 = fitted).
    pub scale: ZoomScale,

    /// Translation of the zoomed image relative to the page center.
    pub offset: Vector,

    /// Upper bound for pinch zoom.
    pub max: MaxZoomScale,

    /// Scale reached by a double tap.
    pub double_tap: DoubleTapZoom,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(MaxZoomScale::default(), DoubleTapZoom::default())
    }
}

impl ZoomState {
    #[must_use]
    pub fn new(max: MaxZoomScale, double_tap: DoubleTapZoom) -> Self {
        Self {
            scale: ZoomScale::FIT,
            offset: Vector::new(0.0, 0.0),
            max,
            double_tap,
        }
    }

    /// Returns whether the image is magnified beyond its fitted size.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale.is_zoomed()
    }

    /// Resets scale and offset to identity.
    pub fn reset(&mut self) {
        self.scale = ZoomScale::FIT;
        self.offset = Vector::new(0.0, 0.0);
    }

    /// Toggles between fit and the double-tap scale, zooming towards `focus`.
    pub fn toggle_double_tap(&mut self, focus: Point, page: Size, fitted: Size) {
        if self.is_zoomed() {
            self.reset();
        } else {
            self.zoom_around(self.double_tap.value(), focus, page, fitted);
        }
    }

    /// Multiplies the current scale by `factor`, keeping `focus` fixed.
    pub fn pinch(&mut self, factor: f32, focus: Point, page: Size, fitted: Size) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let target = self.scale.value() * factor;
        self.zoom_around(target, focus, page, fitted);
    }

    /// Moves the zoomed image by `delta`. Returns false when not zoomed.
    pub fn pan_by(&mut self, delta: Vector, page: Size, fitted: Size) -> bool {
        if !self.is_zoomed() {
            return false;
        }
        self.offset = self.offset + delta;
        self.clamp_offset(page, fitted);
        true
    }

    /// Keeps the current scale and pulls the offset back inside the image
    /// edges for a new page size.
    pub fn relayout(&mut self, page: Size, fitted: Size) {
        self.clamp_offset(page, fitted);
    }

    /// Frame of the displayed image in page coordinates.
    #[must_use]
    pub fn displayed_frame(&self, page: Size, fitted: Size) -> Rectangle {
        let scale = self.scale.value();
        let width = fitted.width * scale;
        let height = fitted.height * scale;
        let center = page_center(page) + self.offset;
        Rectangle {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    fn zoom_around(&mut self, target: f32, focus: Point, page: Size, fitted: Size) {
        let old_scale = self.scale.value();
        let new_scale = ZoomScale::new(target, self.max);
        let ratio = new_scale.value() / old_scale;

        // Keep the image point under `focus` fixed while scaling.
        let center = page_center(page) + self.offset;
        let new_center = Point::new(
            focus.x - (focus.x - center.x) * ratio,
            focus.y - (focus.y - center.y) * ratio,
        );

        self.scale = new_scale;
        self.offset = new_center - page_center(page);
        if self.is_zoomed() {
            self.clamp_offset(page, fitted);
        } else {
            self.offset = Vector::new(0.0, 0.0);
        }
    }

    fn clamp_offset(&mut self, page: Size, fitted: Size) {
        let scale = self.scale.value();
        let max_x = ((fitted.width * scale - page.width) / 2.0).max(0.0);
        let max_y = ((fitted.height * scale - page.height) / 2.0).max(0.0);
        self.offset = Vector::new(
            self.offset.x.clamp(-max_x, max_x),
            self.offset.y.clamp(-max_y, max_y),
        );
    }
}

fn page_center(page: Size) -> Point {
    Point::new(page.width / 2.0, page.height / 2.0)
}
