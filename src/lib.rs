// SPDX-License-Identifier: MPL-2.0
//! `media_viewer` is the engine of a full-screen, zoomable, swipeable image
//! viewer with a thumbnail-to-full-screen transition.
//!
//! The crate is headless: a host rendering layer feeds it layout, gestures,
//! scroll positions and animation progress, and performs the effects it
//! returns. See [`ui::viewer::ViewerController`] for the entry point.

#![doc(html_root_url = "https://docs.rs/media_viewer/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
