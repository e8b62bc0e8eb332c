// SPDX-License-Identifier: MPL-2.0
//! Horizontally paging multi-image container.
//!
//! The container owns one [`Page`] per image (plus a trailing placeholder
//! while the host reports more images), tracks which page is current and
//! keeps the host grid in sync with it:
//!
//! - the grid is scrolled to the current index,
//! - the thumbnail of the current image is hidden, the previous one shown,
//! - reaching the placeholder asks the host for more images.
//!
//! Page `i` sits at content x `margin + i * stride` where
//! `stride = width + 2 * margin`; the content offset that shows page `i` is
//! `i * stride`.

use crate::application::port::{Delegates, LoadMoreResult, LoadTicket, ThumbnailHandle};
use crate::domain::media::MediaImage;
use crate::domain::ui::PageMargin;
use crate::error::LoadMoreError;
use crate::ui::page::{GestureId, Page, PageSettings};
use iced_core::{Rectangle, Size};

/// The single thumbnail currently hidden behind the viewer.
///
/// Hiding a new thumbnail first shows the previous one again, so at most one
/// host thumbnail is hidden at any time.
#[derive(Debug, Default)]
pub struct HiddenThumbnail {
    current: Option<ThumbnailHandle>,
}

impl HiddenThumbnail {
    /// Hides `handle`, restoring the previously hidden thumbnail if it differs.
    pub fn hide(&mut self, handle: ThumbnailHandle) {
        if let Some(previous) = self.current.take() {
            if !previous.same_view(&handle) {
                previous.set_hidden(false);
            }
        }
        handle.set_hidden(true);
        self.current = Some(handle);
    }

    /// Shows the hidden thumbnail again, if any.
    pub fn restore(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.set_hidden(false);
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&ThumbnailHandle> {
        self.current.as_ref()
    }
}

/// Result of the current page changing (or being confirmed).
#[derive(Debug, Clone, PartialEq)]
pub struct PageChange {
    pub index: usize,
    /// Image on the new current page, `None` for the placeholder.
    pub image: Option<MediaImage>,
    /// Ticket of the lazy-load request sent because of this change.
    pub load_requested: Option<LoadTicket>,
}

/// Outcome of applying a lazy-load response.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The ticket is not the one the container waits for.
    Stale,
    /// The host reported an error; pages are untouched.
    Failed(LoadMoreError),
    /// Images were appended and the pages rebuilt. `change` is `None` when
    /// there is still no image to select.
    Applied {
        appended: usize,
        change: Option<PageChange>,
    },
}

/// Paging container state.
#[derive(Debug)]
pub struct PagingContainer {
    images: Vec<MediaImage>,
    pages: Vec<Page>,
    current: usize,
    page_size: Size,
    margin: PageMargin,
    settings: PageSettings,
    delegates: Delegates,
    hidden: HiddenThumbnail,
    pending_load: Option<LoadTicket>,
    next_ticket: u64,
    next_gesture: u64,
    single_tap_requires: Option<GestureId>,
}

impl PagingContainer {
    #[must_use]
    pub fn new(delegates: Delegates, settings: PageSettings, margin: PageMargin) -> Self {
        Self {
            images: Vec::new(),
            pages: Vec::new(),
            current: 0,
            page_size: Size::ZERO,
            margin,
            settings,
            delegates,
            hidden: HiddenThumbnail::default(),
            pending_load: None,
            next_ticket: 0,
            next_gesture: 0,
            single_tap_requires: None,
        }
    }

    /// Rebuilds all pages from `images` and selects `selected`.
    ///
    /// The current page is the index of `selected`, or 0 when it is absent.
    /// Any outstanding lazy-load request is forgotten.
    pub fn set_images(&mut self, images: Vec<MediaImage>, selected: Option<&MediaImage>) {
        self.pending_load = None;
        self.rebuild(images, selected);
        if let Some(image) = self.current_image().cloned() {
            self.hide_thumbnail_of(&image);
        }
        tracing::debug!(
            pages = self.pages.len(),
            current = self.current,
            "paging container rebuilt"
        );
    }

    fn rebuild(&mut self, images: Vec<MediaImage>, selected: Option<&MediaImage>) {
        self.images = images;
        self.pages.clear();

        for image in &self.images {
            self.next_gesture += 1;
            self.pages.push(Page::new(
                Some(image.clone()),
                self.page_size,
                self.settings,
                GestureId::new(self.next_gesture),
            ));
        }

        let has_more = self
            .delegates
            .more_images
            .as_ref()
            .is_some_and(|source| source.has_more(&self.images));
        if has_more {
            let gesture = self.allocate_gesture();
            self.pages
                .push(Page::new(None, self.page_size, self.settings, gesture));
        }

        self.current = selected
            .and_then(|selected| self.images.iter().position(|image| image == selected))
            .unwrap_or(0);
        self.activate_current();
    }

    fn allocate_gesture(&mut self) -> GestureId {
        self.next_gesture += 1;
        GestureId::new(self.next_gesture)
    }

    /// Sets the size of one page. Every page is laid out again.
    pub fn layout(&mut self, page_size: Size) {
        self.page_size = page_size;
        for page in &mut self.pages {
            page.layout(page_size);
        }
    }

    #[must_use]
    pub fn page_size(&self) -> Size {
        self.page_size
    }

    /// Distance between the origins of two consecutive pages.
    #[must_use]
    pub fn page_stride(&self) -> f32 {
        self.page_size.width + 2.0 * self.margin.value()
    }

    /// Frame of page `index` in content coordinates.
    #[must_use]
    pub fn page_frame(&self, index: usize) -> Option<Rectangle> {
        if index >= self.pages.len() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let x = self.margin.value() + index as f32 * self.page_stride();
        Some(Rectangle {
            x,
            y: 0.0,
            width: self.page_size.width,
            height: self.page_size.height,
        })
    }

    /// Content offset showing the current page.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn content_offset_x(&self) -> f32 {
        self.current as f32 * self.page_stride()
    }

    /// Maps a scroll offset to a page index, clamped to existing pages.
    #[must_use]
    pub fn index_for_offset(&self, offset_x: f32) -> usize {
        let stride = self.page_stride();
        if self.pages.is_empty() || !offset_x.is_finite() || offset_x <= 0.0 || stride <= 0.0 {
            return 0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (offset_x / stride).floor() as usize;
        index.min(self.pages.len() - 1)
    }

    /// Handles the end of a horizontal scroll.
    ///
    /// Returns `None` when there are no pages.
    pub fn scroll_ended(&mut self, offset_x: f32) -> Option<PageChange> {
        if self.pages.is_empty() {
            return None;
        }
        let index = self.index_for_offset(offset_x);
        self.select(index)
    }

    /// Makes page `index` current with the same side effects as a scroll end.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn select(&mut self, index: usize) -> Option<PageChange> {
        if index >= self.pages.len() {
            return None;
        }
        self.current = index;
        self.activate_current();

        let image = self.images.get(index).cloned();
        let load_requested = match &image {
            Some(image) => {
                if let Some(sync) = &self.delegates.scroll_sync {
                    sync.scroll_container_to_index(index);
                }
                self.hide_thumbnail_of(image);
                None
            }
            None => {
                self.hidden.restore();
                self.request_more()
            }
        };

        Some(PageChange {
            index,
            image,
            load_requested,
        })
    }

    fn activate_current(&mut self) {
        for (index, page) in self.pages.iter_mut().enumerate() {
            page.set_active(index == self.current);
        }
        self.single_tap_requires = self.pages.get(self.current).map(Page::double_tap_gesture);
    }

    fn hide_thumbnail_of(&mut self, image: &MediaImage) {
        match self.delegates.resolver.resolve_view(image) {
            Some(handle) => self.hidden.hide(handle),
            None => self.hidden.restore(),
        }
    }

    fn request_more(&mut self) -> Option<LoadTicket> {
        if let Some(ticket) = self.pending_load {
            tracing::debug!(%ticket, "load already outstanding");
            return None;
        }
        let source = self.delegates.more_images.clone()?;
        self.next_ticket += 1;
        let ticket = LoadTicket::new(self.next_ticket);
        self.pending_load = Some(ticket);
        for page in self.pages.iter_mut().filter(|page| page.is_placeholder()) {
            page.set_loading(true);
        }
        tracing::debug!(%ticket, count = self.images.len(), "requesting more images");
        source.load_more(&self.images, ticket);
        Some(ticket)
    }

    /// Applies the host's answer to a lazy-load request.
    pub fn apply_loaded(&mut self, ticket: LoadTicket, result: LoadMoreResult) -> LoadOutcome {
        if self.pending_load != Some(ticket) {
            return LoadOutcome::Stale;
        }
        self.pending_load = None;

        let appended = match result {
            Ok(appended) => appended,
            Err(error) => return LoadOutcome::Failed(error),
        };

        let previous = self.current_image().cloned();
        let first_new = appended.first().cloned();
        let count = appended.len();

        let mut images = std::mem::take(&mut self.images);
        images.extend(appended);

        let selected = previous
            .filter(|image| images.contains(image))
            .or(first_new)
            .or_else(|| images.first().cloned());

        self.rebuild(images, selected.as_ref());
        let change = match selected {
            Some(_) => self.select(self.current),
            None => {
                tracing::debug!(appended = count, "load answered without a selectable image");
                None
            }
        };

        LoadOutcome::Applied {
            appended: count,
            change,
        }
    }

    /// Stops the placeholder's loading indicator.
    pub fn stop_loading_indicator(&mut self) {
        for page in self.pages.iter_mut().filter(|page| page.is_placeholder()) {
            page.set_loading(false);
        }
    }

    #[must_use]
    pub fn images(&self) -> &[MediaImage] {
        &self.images
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub(crate) fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    #[must_use]
    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current)
    }

    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        self.pages.get_mut(self.current)
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&MediaImage> {
        self.current_page().and_then(Page::image)
    }

    /// Whether a lazy-load request is waiting for an answer.
    #[must_use]
    pub fn is_loading_more(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Double-tap recognizer the viewer's single tap must wait for.
    #[must_use]
    pub fn single_tap_requires(&self) -> Option<GestureId> {
        self.single_tap_requires
    }

    #[must_use]
    pub fn delegates(&self) -> &Delegates {
        &self.delegates
    }

    pub(crate) fn hidden_thumbnail(&mut self) -> &mut HiddenThumbnail {
        &mut self.hidden
    }
}
