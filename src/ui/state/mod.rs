// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state types used by the page component, kept apart from the
//! message handling so they can be tested in isolation.

pub mod dismiss;
pub mod zoom;

// Re-export commonly used types for convenience
pub use dismiss::{DismissRelease, DismissState};
pub use zoom::ZoomState;
