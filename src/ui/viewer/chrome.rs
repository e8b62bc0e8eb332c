// SPDX-License-Identifier: MPL-2.0
//! Interface chrome state: background, close button and overlay metadata.

/// Renderable state of everything drawn around the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chrome {
    /// Alpha of the background and controls (0 = fully transparent).
    pub alpha: f32,
    /// Whether the overlay metadata (title, caption) is shown.
    pub overlay_visible: bool,
    /// Close button and dismiss pan are disabled while a transition runs.
    pub controls_enabled: bool,
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            overlay_visible: true,
            controls_enabled: false,
        }
    }
}

impl Chrome {
    /// Chrome of a fully presented viewer.
    pub(crate) fn presented(self) -> Self {
        Self {
            alpha: 1.0,
            controls_enabled: true,
            ..self
        }
    }

    /// Chrome while a transition is in flight.
    pub(crate) fn animating(self, alpha: f32) -> Self {
        Self {
            alpha,
            controls_enabled: false,
            ..self
        }
    }
}
