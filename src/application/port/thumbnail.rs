// SPDX-License-Identifier: MPL-2.0
//! Thumbnail port definitions.
//!
//! The host grid owns the thumbnails; the viewer only reads their on-screen
//! frame and toggles their visibility so that a thumbnail is never visible
//! behind the full-screen image it represents.

use crate::domain::media::MediaImage;
use iced_core::Rectangle;
use std::fmt;
use std::rc::Rc;

/// An on-screen thumbnail view owned by the host.
///
/// `set_hidden` takes `&self`: hosts keep the flag in a `Cell` (or forward it
/// to their toolkit), the viewer never needs exclusive access.
pub trait ThumbnailView {
    /// Frame in window coordinates, or `None` when the view is not attached
    /// to a window (coordinate conversion impossible).
    fn window_frame(&self) -> Option<Rectangle>;

    /// Shows or hides the thumbnail.
    fn set_hidden(&self, hidden: bool);

    /// Returns whether the thumbnail is currently hidden.
    fn is_hidden(&self) -> bool;
}

/// Shared reference to a host thumbnail.
///
/// Two handles are the same thumbnail when they point at the same view
/// object.
#[derive(Clone)]
pub struct ThumbnailHandle(Rc<dyn ThumbnailView>);

impl ThumbnailHandle {
    #[must_use]
    pub fn new(view: Rc<dyn ThumbnailView>) -> Self {
        Self(view)
    }

    /// Returns whether both handles refer to the same view object.
    #[must_use]
    pub fn same_view(&self, other: &ThumbnailHandle) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }

    #[must_use]
    pub fn window_frame(&self) -> Option<Rectangle> {
        self.0.window_frame()
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.0.set_hidden(hidden);
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.0.is_hidden()
    }
}

impl<T: ThumbnailView + 'static> From<Rc<T>> for ThumbnailHandle {
    fn from(view: Rc<T>) -> Self {
        Self(view)
    }
}

impl fmt::Debug for ThumbnailHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThumbnailHandle")
            .field("frame", &self.window_frame())
            .field("hidden", &self.is_hidden())
            .finish()
    }
}

/// Resolves the thumbnail currently representing an image in the host grid.
pub trait ThumbnailResolver {
    /// Returns the on-screen thumbnail for `image`, or `None` if it is
    /// off-screen or unknown to the grid.
    fn resolve_view(&self, image: &MediaImage) -> Option<ThumbnailHandle>;
}
