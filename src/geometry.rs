// SPDX-License-Identifier: MPL-2.0
//! Frame and aspect-ratio calculations.
//!
//! All functions are pure and total: inputs that cannot produce a meaningful
//! frame (non-positive or non-finite dimensions) yield [`ZERO_FRAME`] instead
//! of an error.

use iced_core::{Point, Rectangle, Size};

/// The degenerate frame returned when geometry cannot be resolved.
pub const ZERO_FRAME: Rectangle = Rectangle {
    x: 0.0,
    y: 0.0,
    width: 0.0,
    height: 0.0,
};

/// Returns the largest frame with the image's aspect ratio that fits inside
/// `bounds`, anchored at the origin.
///
/// The clamped axis is picked from the bound's own shape: a portrait bound
/// (`width / height < 1`) clamps the width, anything else clamps the height.
/// When that choice would overflow the other axis (very tall images in a
/// portrait bound, very wide ones in a landscape bound) the frame is scaled
/// back so the overflowing axis matches the bound.
///
/// # Example
///
/// ```
/// use iced_core::Size;
/// use media_viewer::geometry::aspect_fit_frame;
///
/// let frame = aspect_fit_frame(Size::new(300.0, 600.0), Size::new(400.0, 200.0));
/// assert_eq!((frame.width, frame.height), (300.0, 150.0));
/// ```
#[must_use]
pub fn aspect_fit_frame(bounds: Size, image: Size) -> Rectangle {
    if !is_positive(image) || !is_positive(bounds) {
        tracing::debug!(?bounds, ?image, "aspect fit unresolvable, using zero frame");
        return ZERO_FRAME;
    }

    let image_ratio = image.width / image.height;
    let bounds_ratio = bounds.width / bounds.height;

    let (mut width, mut height) = if bounds_ratio < 1.0 {
        (bounds.width, bounds.width / image_ratio)
    } else {
        (bounds.height * image_ratio, bounds.height)
    };

    if height > bounds.height {
        height = bounds.height;
        width = bounds.height * image_ratio;
    } else if width > bounds.width {
        width = bounds.width;
        height = bounds.width / image_ratio;
    }

    Rectangle {
        x: 0.0,
        y: 0.0,
        width,
        height,
    }
}

/// Same as [`aspect_fit_frame`], bounded by an arbitrary frame.
///
/// The result is still anchored at the origin; callers position it with
/// [`center_on`].
#[must_use]
pub fn aspect_fit_frame_within(target: Rectangle, image: Size) -> Rectangle {
    aspect_fit_frame(target.size(), image)
}

/// Moves `frame` so that its center is `center`, keeping its size.
#[must_use]
pub fn center_on(frame: Rectangle, center: Point) -> Rectangle {
    Rectangle {
        x: center.x - frame.width / 2.0,
        y: center.y - frame.height / 2.0,
        width: frame.width,
        height: frame.height,
    }
}

/// Converts a frame expressed in window coordinates into the coordinate
/// space whose origin sits at `origin` in the window.
#[must_use]
pub fn window_to_local(frame: Rectangle, origin: Point) -> Rectangle {
    Rectangle {
        x: frame.x - origin.x,
        y: frame.y - origin.y,
        width: frame.width,
        height: frame.height,
    }
}

/// Linearly interpolates between two frames; `t` is clamped to `[0, 1]`.
#[must_use]
pub fn lerp_frame(from: Rectangle, to: Rectangle, t: f32) -> Rectangle {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
    Rectangle {
        x: lerp(from.x, to.x, t),
        y: lerp(from.y, to.y, t),
        width: lerp(from.width, to.width, t),
        height: lerp(from.height, to.height, t),
    }
}

pub(crate) fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Returns whether a frame has a drawable (positive, finite) size.
#[must_use]
pub fn is_drawable(frame: Rectangle) -> bool {
    is_positive(frame.size()) && frame.x.is_finite() && frame.y.is_finite()
}

fn is_positive(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
