// SPDX-License-Identifier: MPL-2.0
//! Host grid synchronization port.

/// Keeps the host grid's scroll position in step with the viewer.
pub trait ScrollSync {
    /// Asks the host grid to bring the item at `index` into view.
    fn scroll_container_to_index(&self, index: usize);
}
