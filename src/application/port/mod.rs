// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the host collaborators.
//!
//! The viewer calls these interfaces; the host application implements them.
//! Every method is mandatory. Optional collaborators are expressed as
//! `Option` fields of [`Delegates`] instead of optional trait methods.
//!
//! # Available Ports
//!
//! - [`thumbnail`]: on-screen thumbnails and their resolution by image
//! - [`grid`]: scroll synchronization of the host grid
//! - [`pagination`]: lazy loading of more images
//! - [`actions`]: long-press action menu construction
//!
//! # Design Notes
//!
//! - The engine is single-threaded: collaborators are shared as `Rc<dyn _>`
//! - No `async fn` - asynchronous answers come back as viewer messages

pub mod actions;
pub mod grid;
pub mod pagination;
pub mod thumbnail;

use std::fmt;
use std::rc::Rc;

// Re-export main types for convenience
pub use actions::{ActionMenuBuilder, ActionRole, MenuAction, MenuDescriptor};
pub use grid::ScrollSync;
pub use pagination::{LoadMoreResult, LoadTicket, MoreImagesSource};
pub use thumbnail::{ThumbnailHandle, ThumbnailResolver, ThumbnailView};

/// The set of host collaborators wired into a viewer.
///
/// The resolver is required; the other collaborators may be absent, in
/// which case the corresponding behavior is skipped (no grid scrolling, no
/// pagination, no action menu).
#[derive(Clone)]
pub struct Delegates {
    pub resolver: Rc<dyn ThumbnailResolver>,
    pub scroll_sync: Option<Rc<dyn ScrollSync>>,
    pub more_images: Option<Rc<dyn MoreImagesSource>>,
    pub action_menu: Option<Rc<dyn ActionMenuBuilder>>,
}

impl Delegates {
    /// Creates delegates with only the mandatory resolver.
    #[must_use]
    pub fn new(resolver: Rc<dyn ThumbnailResolver>) -> Self {
        Self {
            resolver,
            scroll_sync: None,
            more_images: None,
            action_menu: None,
        }
    }

    #[must_use]
    pub fn with_scroll_sync(mut self, scroll_sync: Rc<dyn ScrollSync>) -> Self {
        self.scroll_sync = Some(scroll_sync);
        self
    }

    #[must_use]
    pub fn with_more_images(mut self, source: Rc<dyn MoreImagesSource>) -> Self {
        self.more_images = Some(source);
        self
    }

    #[must_use]
    pub fn with_action_menu(mut self, builder: Rc<dyn ActionMenuBuilder>) -> Self {
        self.action_menu = Some(builder);
        self
    }
}

impl fmt::Debug for Delegates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegates")
            .field("scroll_sync", &self.scroll_sync.is_some())
            .field("more_images", &self.more_images.is_some())
            .field("action_menu", &self.action_menu.is_some())
            .finish_non_exhaustive()
    }
}
