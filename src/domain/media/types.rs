// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.
//! The viewer never decodes pixels: an image is an identity plus the
//! information needed to lay it out.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Opaque identity of an image in the host's data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u64);

impl ImageId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reference to the image payload held by the host.
///
/// `source` is whatever key the host uses to fetch pixels (URL, asset name).
/// The native dimensions are needed for aspect-fit geometry; hosts that do
/// not know them yet may pass zero, in which case geometry degrades to a
/// zero frame until the image is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    source: String,
    width: f32,
    height: f32,
}

impl ImagePayload {
    #[must_use]
    pub fn new(source: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            source: source.into(),
            width,
            height,
        }
    }

    /// Returns the host key for this payload.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the native pixel width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the native pixel height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns whether both native dimensions are positive.
    #[must_use]
    pub fn has_valid_dimensions(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Optional caption shown over the image while the interface chrome is visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayMetadata {
    pub title: Option<String>,
    pub caption: Option<String>,
}

impl OverlayMetadata {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.caption.is_none()
    }
}

/// An image as seen by the viewer.
///
/// Equality and hashing use the [`ImageId`] only: two values with the same
/// id are the same image even if their payloads differ (e.g. a low-res
/// payload later replaced by a full-size one).
///
/// # Example
///
/// ```
/// use media_viewer::domain::media::{ImageId, ImagePayload, MediaImage};
///
/// let low = MediaImage::new(ImageId::new(7), ImagePayload::new("a@1x", 100.0, 50.0));
/// let high = MediaImage::new(ImageId::new(7), ImagePayload::new("a@3x", 300.0, 150.0));
///
/// assert_eq!(low, high);
/// ```
#[derive(Debug, Clone)]
pub struct MediaImage {
    id: ImageId,
    payload: Arc<ImagePayload>,
    overlay: Option<Arc<OverlayMetadata>>,
}

impl MediaImage {
    #[must_use]
    pub fn new(id: ImageId, payload: ImagePayload) -> Self {
        Self {
            id,
            payload: Arc::new(payload),
            overlay: None,
        }
    }

    /// Attaches overlay metadata (builder style).
    #[must_use]
    pub fn with_overlay(mut self, overlay: OverlayMetadata) -> Self {
        self.overlay = if overlay.is_empty() {
            None
        } else {
            Some(Arc::new(overlay))
        };
        self
    }

    #[must_use]
    pub fn id(&self) -> ImageId {
        self.id
    }

    #[must_use]
    pub fn payload(&self) -> &ImagePayload {
        &self.payload
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&OverlayMetadata> {
        self.overlay.as_deref()
    }

    /// Returns the native `(width, height)` of the payload.
    #[must_use]
    pub fn native_dimensions(&self) -> (f32, f32) {
        (self.payload.width(), self.payload.height())
    }
}

impl PartialEq for MediaImage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MediaImage {}

impl Hash for MediaImage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: u64, w: f32, h: f32) -> MediaImage {
        MediaImage::new(ImageId::new(id), ImagePayload::new(format!("img-{id}"), w, h))
    }

    #[test]
    fn equality_uses_identity_only() {
        assert_eq!(image(1, 10.0, 10.0), image(1, 99.0, 5.0));
        assert_ne!(image(1, 10.0, 10.0), image(2, 10.0, 10.0));
    }

    #[test]
    fn payload_reports_invalid_dimensions() {
        assert!(image(1, 10.0, 20.0).payload().has_valid_dimensions());
        assert!(!image(1, 0.0, 20.0).payload().has_valid_dimensions());
        assert!(!image(1, 10.0, -1.0).payload().has_valid_dimensions());
    }

    #[test]
    fn empty_overlay_is_dropped() {
        let img = image(1, 1.0, 1.0).with_overlay(OverlayMetadata::default());
        assert!(img.overlay().is_none());

        let img = image(1, 1.0, 1.0).with_overlay(OverlayMetadata {
            title: Some("Harbour at dusk".into()),
            caption: None,
        });
        assert_eq!(img.overlay().and_then(|o| o.title.as_deref()), Some("Harbour at dusk"));
    }

    #[test]
    fn image_id_display() {
        assert_eq!(ImageId::new(42).to_string(), "#42");
    }
}
