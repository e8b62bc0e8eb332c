// SPDX-License-Identifier: MPL-2.0
//! Open/close transition between a host thumbnail and the full-screen page.
//!
//! The animator never drives time itself. Starting a transition produces an
//! [`AnimationRequest`] with a [`TransitionToken`]; the host animates the
//! keyframes, optionally reports progress, and reports completion with the
//! same token. Completions carrying an unknown token are ignored, which also
//! makes a duplicated completion a no-op.
//!
//! ```text
//! open:  Idle ──► Preparing ──► Animating ──► Settled
//! close: Settled ──► Preparing ──► Animating ──► Idle
//! ```

use crate::application::port::ThumbnailHandle;
use crate::domain::ui::AnimationDuration;
use crate::geometry::{self, ZERO_FRAME};
use crate::ui::paging::PagingContainer;
use crate::ui::page::ContentMode;
use iced_core::{Point, Rectangle, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Open,
    Close,
}

/// Lifecycle phase of the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not presented (before open, after close).
    #[default]
    Idle,
    /// Start state applied, request not yet handed out.
    Preparing(TransitionKind),
    /// Waiting for the host to finish the animation.
    Animating(TransitionKind),
    /// Fully presented.
    Settled,
}

/// Identifies one animation handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken(u64);

impl TransitionToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransitionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transition#{}", self.0)
    }
}

/// Timing curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
}

impl Easing {
    /// Maps linear progress to eased progress, both in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
        }
    }
}

/// Animated properties at one point of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Image view frame in viewer coordinates.
    pub image_frame: Rectangle,
    /// Alpha of the interface chrome and background.
    pub chrome_alpha: f32,
}

impl Keyframe {
    /// Linear interpolation towards `to`.
    #[must_use]
    pub fn interpolate(&self, to: &Keyframe, t: f32) -> Keyframe {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        Keyframe {
            image_frame: geometry::lerp_frame(self.image_frame, to.image_frame, t),
            chrome_alpha: geometry::lerp(self.chrome_alpha, to.chrome_alpha, t),
        }
    }
}

/// An animation the host must run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRequest {
    pub token: TransitionToken,
    pub kind: TransitionKind,
    pub duration: Duration,
    pub easing: Easing,
    pub from: Keyframe,
    pub to: Keyframe,
}

impl AnimationRequest {
    /// Keyframe at linear progress `t`, easing applied.
    #[must_use]
    pub fn sample(&self, t: f32) -> Keyframe {
        self.from.interpolate(&self.to, self.easing.apply(t))
    }
}

/// State of one running transition.
#[derive(Debug, Clone)]
pub struct TransitionContext {
    /// Thumbnail frame the transition starts from (open) or ends at (close),
    /// in viewer coordinates.
    pub source_frame: Rectangle,
    /// Thumbnail hidden while the transition runs.
    pub source_view: Option<ThumbnailHandle>,
    /// Index of the page whose image is animated.
    pub destination_page: usize,
    /// Last progress reported by the host.
    pub progress: f32,
    request: AnimationRequest,
}

impl TransitionContext {
    #[must_use]
    pub fn request(&self) -> &AnimationRequest {
        &self.request
    }
}

/// Effect of asking for a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The host must run this animation and report its completion.
    Animate(AnimationRequest),
    /// Nothing to animate: the transition completed immediately.
    Completed(TransitionKind),
    /// Another transition is in flight; the request was rejected.
    Busy(TransitionKind),
}

/// A transition reached its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Completion {
    pub kind: TransitionKind,
    /// Final chrome alpha.
    pub chrome_alpha: f32,
}

/// Drives open and close transitions of the current page.
#[derive(Debug)]
pub struct TransitionAnimator {
    source: ThumbnailHandle,
    viewer_frame: Rectangle,
    duration: AnimationDuration,
    phase: Phase,
    context: Option<TransitionContext>,
    next_token: u64,
}

impl TransitionAnimator {
    /// Creates an animator bound to the thumbnail the viewer was opened from.
    #[must_use]
    pub fn new(
        source: ThumbnailHandle,
        viewer_frame: Rectangle,
        duration: AnimationDuration,
    ) -> Self {
        Self {
            source,
            viewer_frame,
            duration,
            phase: Phase::Idle,
            context: None,
            next_token: 0,
        }
    }

    /// Updates the viewer frame (window coordinates).
    pub fn layout(&mut self, viewer_frame: Rectangle) {
        self.viewer_frame = viewer_frame;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a transition is waiting for completion.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.context.is_some()
    }

    #[must_use]
    pub fn context(&self) -> Option<&TransitionContext> {
        self.context.as_ref()
    }

    fn viewer_bounds(&self) -> Rectangle {
        Rectangle::with_size(self.viewer_frame.size())
    }

    fn to_local(&self, handle: &ThumbnailHandle) -> Option<Rectangle> {
        handle
            .window_frame()
            .map(|frame| geometry::window_to_local(frame, self.viewer_frame.position()))
    }

    fn duration_for(&self, animated: bool) -> (Duration, Easing) {
        if animated {
            (self.duration.as_duration(), Easing::EaseIn)
        } else {
            (Duration::ZERO, Easing::Linear)
        }
    }

    fn allocate_token(&mut self) -> TransitionToken {
        self.next_token += 1;
        TransitionToken(self.next_token)
    }

    /// Starts the open transition from the source thumbnail to the current
    /// page.
    pub fn open(&mut self, container: &mut PagingContainer, animated: bool) -> Effect {
        if self.is_in_flight() {
            tracing::debug!("open rejected, transition in flight");
            return Effect::Busy(TransitionKind::Open);
        }

        let bounds = self.viewer_bounds();
        let source_frame = self.to_local(&self.source);
        let destination_page = container.current_index();
        let native = container
            .current_page()
            .filter(|page| !page.is_placeholder())
            .map(|page| page.native_size());

        let (Some(source_frame), Some(native)) = (source_frame, native) else {
            tracing::debug!("open transition unresolvable, settling immediately");
            self.settle(container, destination_page);
            return Effect::Completed(TransitionKind::Open);
        };
        if !geometry::is_drawable(bounds) {
            tracing::debug!("open transition without layout, settling immediately");
            self.settle(container, destination_page);
            return Effect::Completed(TransitionKind::Open);
        }

        self.phase = Phase::Preparing(TransitionKind::Open);
        container.hidden_thumbnail().hide(self.source.clone());
        if let Some(page) = container.current_page_mut() {
            let view = page.image_view_mut();
            view.frame = source_frame;
            view.alpha = 1.0;
            view.content_mode = ContentMode::Fill;
        }

        let fitted = geometry::aspect_fit_frame_within(bounds, native);
        let destination = geometry::center_on(fitted, bounds.center());
        let (duration, easing) = self.duration_for(animated);
        let request = AnimationRequest {
            token: self.allocate_token(),
            kind: TransitionKind::Open,
            duration,
            easing,
            from: Keyframe {
                image_frame: source_frame,
                chrome_alpha: 0.0,
            },
            to: Keyframe {
                image_frame: destination,
                chrome_alpha: 1.0,
            },
        };

        tracing::info!(token = %request.token, animated, "open transition started");
        self.begin(request.clone(), source_frame, Some(self.source.clone()), destination_page);
        Effect::Animate(request)
    }

    /// Starts the close transition from the current page to its thumbnail.
    ///
    /// `chrome_alpha` is the chrome alpha at the time of the request (a
    /// dismiss pan may have faded it already).
    pub fn close(
        &mut self,
        container: &mut PagingContainer,
        animated: bool,
        chrome_alpha: f32,
    ) -> Effect {
        if self.is_in_flight() {
            tracing::debug!("close rejected, transition in flight");
            return Effect::Busy(TransitionKind::Close);
        }

        let bounds = self.viewer_bounds();
        let current = container.current_image().cloned();
        let (Some(image), true) = (current, geometry::is_drawable(bounds)) else {
            tracing::debug!("close transition has nothing to animate");
            container.hidden_thumbnail().restore();
            self.phase = Phase::Idle;
            return Effect::Completed(TransitionKind::Close);
        };

        let resolved = container.delegates().resolver.resolve_view(&image);
        let candidates = resolved.iter().chain(std::iter::once(&self.source));
        let destination = candidates
            .filter_map(|handle| self.to_local(handle).map(|frame| (handle.clone(), frame)))
            .next();
        let (thumbnail, destination_frame) = match destination {
            Some(found) => found,
            None => {
                tracing::warn!(
                    image = %image.id(),
                    "close destination unresolvable, collapsing to zero frame"
                );
                (resolved.unwrap_or_else(|| self.source.clone()), ZERO_FRAME)
            }
        };

        self.phase = Phase::Preparing(TransitionKind::Close);
        let destination_page = container.current_index();
        container.hidden_thumbnail().hide(thumbnail.clone());

        let mut start = ZERO_FRAME;
        if let Some(page) = container.current_page_mut() {
            page.zoom_out(false);
            let fitted = geometry::aspect_fit_frame_within(bounds, page.native_size());
            start = geometry::center_on(fitted, bounds.center());
            let view = page.image_view_mut();
            view.frame = start;
            view.content_mode = ContentMode::Fill;
        }

        let (duration, easing) = self.duration_for(animated);
        let request = AnimationRequest {
            token: self.allocate_token(),
            kind: TransitionKind::Close,
            duration,
            easing,
            from: Keyframe {
                image_frame: start,
                chrome_alpha,
            },
            to: Keyframe {
                image_frame: destination_frame,
                chrome_alpha: 0.0,
            },
        };

        tracing::info!(token = %request.token, animated, "close transition started");
        self.begin(request.clone(), destination_frame, Some(thumbnail), destination_page);
        Effect::Animate(request)
    }

    fn begin(
        &mut self,
        request: AnimationRequest,
        source_frame: Rectangle,
        source_view: Option<ThumbnailHandle>,
        destination_page: usize,
    ) {
        self.phase = Phase::Animating(request.kind);
        self.context = Some(TransitionContext {
            source_frame,
            source_view,
            destination_page,
            progress: 0.0,
            request,
        });
    }

    /// Applies host-reported progress. Returns the sampled keyframe, or
    /// `None` for an unknown token.
    pub fn progress(
        &mut self,
        container: &mut PagingContainer,
        token: TransitionToken,
        progress: f32,
    ) -> Option<Keyframe> {
        let context = self
            .context
            .as_mut()
            .filter(|context| context.request.token == token)?;
        context.progress = progress.clamp(0.0, 1.0);
        let keyframe = context.request.sample(context.progress);
        if let Some(page) = container.page_mut(context.destination_page) {
            page.image_view_mut().frame = keyframe.image_frame;
        }
        Some(keyframe)
    }

    /// Finishes the transition identified by `token`.
    ///
    /// Returns `None` when the token is stale or already completed.
    pub fn finish(
        &mut self,
        container: &mut PagingContainer,
        token: TransitionToken,
    ) -> Option<Completion> {
        let matches = self
            .context
            .as_ref()
            .is_some_and(|context| context.request.token == token);
        if !matches {
            tracing::debug!(%token, "ignoring stale transition completion");
            return None;
        }
        let context = self.context.take()?;

        match context.request.kind {
            TransitionKind::Open => {
                self.settle(container, context.destination_page);
            }
            TransitionKind::Close => {
                if let Some(page) = container.page_mut(context.destination_page) {
                    page.image_view_mut().frame = context.request.to.image_frame;
                }
                container.hidden_thumbnail().restore();
                self.phase = Phase::Idle;
            }
        }

        tracing::info!(%token, kind = ?context.request.kind, "transition completed");
        Some(Completion {
            kind: context.request.kind,
            chrome_alpha: context.request.to.chrome_alpha,
        })
    }

    /// Puts the animated page at rest, full screen.
    fn settle(&mut self, container: &mut PagingContainer, page: usize) {
        let size: Size = self.viewer_frame.size();
        if let Some(page) = container.page_mut(page) {
            let view = page.image_view_mut();
            view.frame = Rectangle::new(Point::ORIGIN, size);
            view.alpha = 1.0;
            view.content_mode = ContentMode::Fit;
        }
        self.phase = Phase::Settled;
    }
}
