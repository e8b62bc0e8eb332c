// SPDX-License-Identifier: MPL-2.0
//! Viewer components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns its state, handles `Message`s and reports `Effect`s to its
//! parent instead of calling back into it.
//!
//! # Components
//!
//! - [`page`] - One zoomable, pannable image page
//! - [`paging`] - Horizontally paging container of pages
//! - [`transition`] - Thumbnail to full-screen open/close transitions
//! - [`viewer`] - The full-screen viewer tying everything together
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (zoom, pan-to-dismiss)

pub mod page;
pub mod paging;
pub mod state;
pub mod transition;
pub mod viewer;
