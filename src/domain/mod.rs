// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types shared by every viewer component.
//!
//! # Modules
//!
//! - [`media`]: Image identity and payload ([`MediaImage`](media::MediaImage),
//!   [`ImageId`](media::ImageId), [`OverlayMetadata`](media::OverlayMetadata))
//! - [`ui`]: Clamped tuning values ([`ZoomScale`](ui::ZoomScale),
//!   [`AnimationDuration`](ui::AnimationDuration), [`PageMargin`](ui::PageMargin))

pub mod media;
pub mod ui;
