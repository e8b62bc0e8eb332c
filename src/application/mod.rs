// SPDX-License-Identifier: MPL-2.0
//! Application layer - the contracts between the viewer engine and its host.
//!
//! - [`port`]: traits the host implements (thumbnail resolution, grid
//!   scrolling, pagination, action menus)

pub mod port;
