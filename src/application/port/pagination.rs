// SPDX-License-Identifier: MPL-2.0
//! Lazy-load (pagination) port definition.
//!
//! The request is fire-and-forget: [`MoreImagesSource::load_more`] returns
//! immediately and the host later answers by sending
//! [`Message::MoreImagesLoaded`](crate::ui::viewer::Message::MoreImagesLoaded)
//! with the same [`LoadTicket`]. Answers carrying a ticket the viewer no
//! longer waits for are ignored.

use crate::domain::media::MediaImage;
use crate::error::LoadMoreError;
use std::fmt;

/// Identifies one lazy-load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "load#{}", self.0)
    }
}

/// Result delivered by the host for a lazy-load request.
pub type LoadMoreResult = std::result::Result<Vec<MediaImage>, LoadMoreError>;

/// Asynchronous pagination hook of the host data source.
pub trait MoreImagesSource {
    /// Returns whether images beyond `current` are available.
    fn has_more(&self, current: &[MediaImage]) -> bool;

    /// Starts fetching the images following `current`.
    ///
    /// The host must answer exactly once per ticket.
    fn load_more(&self, current: &[MediaImage], ticket: LoadTicket);
}
