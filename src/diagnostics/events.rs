// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for viewer activity tracking.
//!
//! This module defines the events recorded while a viewer session runs.
//! They mirror the log lines emitted through `tracing`, but are kept in
//! memory so hosts (and tests) can inspect what happened.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::ui::transition::TransitionKind;

/// Something noteworthy that happened inside the viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ViewerEvent {
    // ==========================================================================
    // Lifecycle
    // ==========================================================================
    /// Pages were built for the initial image list.
    Mounted {
        image_count: usize,
        selected_index: usize,
    },

    /// The close transition completed and the host was asked to dismiss.
    Dismissed,

    // ==========================================================================
    // Transitions
    // ==========================================================================
    /// An open/close transition started animating.
    TransitionStarted { kind: TransitionKind, animated: bool },

    /// A transition finished; `performed` is false for no-op transitions.
    TransitionCompleted { kind: TransitionKind, performed: bool },

    /// A transition was requested while another one was in flight.
    TransitionRejected { kind: TransitionKind },

    /// An animation completion arrived for a transition that no longer exists.
    StaleCompletionIgnored { token: u64 },

    // ==========================================================================
    // Paging
    // ==========================================================================
    /// The active page changed (or was confirmed) after a scroll.
    PageChanged {
        index: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        image: Option<u64>,
    },

    /// A lazy-load request was sent to the host.
    LoadMoreRequested { ticket: u64, current_count: usize },

    /// A lazy-load response was applied.
    LoadMoreCompleted {
        appended: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        selected: Option<u64>,
    },

    /// A lazy-load response reported an error.
    LoadMoreFailed { reason: String },

    /// A lazy-load response arrived for a request the viewer no longer waits for.
    StaleLoadIgnored { ticket: u64 },

    // ==========================================================================
    // Gestures
    // ==========================================================================
    /// A pan-to-dismiss gesture was released.
    DismissGestureReleased { dismissed: bool },

    /// The overlay metadata visibility was toggled by a single tap.
    OverlayToggled { visible: bool },

    /// The action menu was requested for an image.
    ActionsRequested { image: u64 },
}

/// A recorded event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub at: Instant,
    pub event: ViewerEvent,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(event: ViewerEvent) -> Self {
        Self {
            at: Instant::now(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_snake_case_tag() {
        let event = ViewerEvent::PageChanged {
            index: 2,
            image: None,
        };
        let encoded = toml::to_string(&event).expect("serializable");
        assert!(encoded.contains("event = \"page_changed\""));
        assert!(!encoded.contains("image"));
    }
}
