// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer: lifecycle, gesture routing and transitions.
//!
//! The host drives a [`ViewerController`] through three lifecycle hooks
//! (`on_mount`, `on_first_appear`, `on_close`) and [`Message`]s for
//! everything else. Every call returns the [`Effect`]s to perform. State is
//! read back for rendering through the accessors (`chrome`, `container`).

mod chrome;
pub mod component;
mod tap;

pub use chrome::Chrome;
pub use component::{Effect, Message, ViewerController};
