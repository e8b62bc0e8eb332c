// SPDX-License-Identifier: MPL-2.0
//! UI domain types.

mod newtypes;

pub use newtypes::{
    AnimationDuration, DismissThreshold, DoubleTapWindow, DoubleTapZoom, MaxZoomScale,
    PageMargin, ZoomScale,
};
