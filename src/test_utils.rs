// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::application::port::{
    ActionMenuBuilder, Delegates, LoadTicket, MenuAction, MenuDescriptor, MoreImagesSource,
    ScrollSync, ThumbnailHandle, ThumbnailResolver, ThumbnailView,
};
use crate::domain::media::{ImageId, ImagePayload, MediaImage};
use iced_core::Rectangle;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Builds an 800x600 test image with the given id.
pub fn image(id: u64) -> MediaImage {
    MediaImage::new(
        ImageId::new(id),
        ImagePayload::new(format!("image-{id}"), 800.0, 600.0),
    )
}

/// In-memory thumbnail with a fixed window frame.
#[derive(Debug, Default)]
pub struct FakeThumbnail {
    pub frame: Cell<Option<Rectangle>>,
    pub hidden: Cell<bool>,
}

impl FakeThumbnail {
    pub fn at(frame: Rectangle) -> Rc<Self> {
        Rc::new(Self {
            frame: Cell::new(Some(frame)),
            hidden: Cell::new(false),
        })
    }

    /// A thumbnail that is not attached to a window.
    pub fn detached() -> Rc<Self> {
        Rc::new(Self::default())
    }
}

impl ThumbnailView for FakeThumbnail {
    fn window_frame(&self) -> Option<Rectangle> {
        self.frame.get()
    }

    fn set_hidden(&self, hidden: bool) {
        self.hidden.set(hidden);
    }

    fn is_hidden(&self) -> bool {
        self.hidden.get()
    }
}

/// Resolver backed by a map from image id to thumbnail.
#[derive(Debug, Default)]
pub struct FakeResolver {
    views: RefCell<HashMap<ImageId, Rc<FakeThumbnail>>>,
}

impl FakeResolver {
    pub fn insert(&self, id: u64, view: Rc<FakeThumbnail>) {
        self.views.borrow_mut().insert(ImageId::new(id), view);
    }
}

impl ThumbnailResolver for FakeResolver {
    fn resolve_view(&self, image: &MediaImage) -> Option<ThumbnailHandle> {
        self.views
            .borrow()
            .get(&image.id())
            .map(|view| ThumbnailHandle::from(Rc::clone(view)))
    }
}

/// Records every scroll-sync call.
#[derive(Debug, Default)]
pub struct RecordingScrollSync {
    pub calls: RefCell<Vec<usize>>,
}

impl ScrollSync for RecordingScrollSync {
    fn scroll_container_to_index(&self, index: usize) {
        self.calls.borrow_mut().push(index);
    }
}

/// Pagination source that records requests and never answers by itself.
#[derive(Debug, Default)]
pub struct FakeMoreImages {
    pub more: Cell<bool>,
    pub requests: RefCell<Vec<(usize, LoadTicket)>>,
}

impl MoreImagesSource for FakeMoreImages {
    fn has_more(&self, _current: &[MediaImage]) -> bool {
        self.more.get()
    }

    fn load_more(&self, current: &[MediaImage], ticket: LoadTicket) {
        self.requests.borrow_mut().push((current.len(), ticket));
    }
}

/// Menu builder returning a single "save" action.
#[derive(Debug, Default)]
pub struct FakeActionMenu;

impl ActionMenuBuilder for FakeActionMenu {
    fn build_actions(&self, image: &MediaImage) -> MenuDescriptor {
        MenuDescriptor {
            title: Some(image.id().to_string()),
            actions: vec![MenuAction::new("save", "Save")],
        }
    }
}

/// Fully wired set of fake collaborators.
pub struct Harness {
    pub resolver: Rc<FakeResolver>,
    pub scroll_sync: Rc<RecordingScrollSync>,
    pub more_images: Rc<FakeMoreImages>,
}

impl Harness {
    pub fn new(has_more: bool) -> Self {
        let more_images = Rc::new(FakeMoreImages::default());
        more_images.more.set(has_more);
        Self {
            resolver: Rc::new(FakeResolver::default()),
            scroll_sync: Rc::new(RecordingScrollSync::default()),
            more_images,
        }
    }

    pub fn delegates(&self) -> Delegates {
        Delegates::new(self.resolver.clone())
            .with_scroll_sync(self.scroll_sync.clone())
            .with_more_images(self.more_images.clone())
            .with_action_menu(Rc::new(FakeActionMenu))
    }
}
