// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.

use crate::application::port::{
    Delegates, LoadMoreResult, LoadTicket, MenuDescriptor, ThumbnailHandle,
};
use crate::config::ViewerConfig;
use crate::diagnostics::{ViewerDiagnostics, ViewerEvent};
use crate::domain::media::MediaImage;
use crate::error::Error;
use crate::geometry::ZERO_FRAME;
use crate::ui::page::{self, PageSettings};
use crate::ui::paging::{LoadOutcome, PageChange, PagingContainer};
use crate::ui::transition::{
    self, AnimationRequest, Completion, Phase, TransitionAnimator, TransitionKind, TransitionToken,
};
use crate::ui::viewer::chrome::Chrome;
use crate::ui::viewer::tap::{TapArbiter, TapOutcome};
use iced_core::{Point, Rectangle};
use std::time::Instant;

/// Messages sent by the host to the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// The viewer frame changed (window coordinates).
    Layout(Rectangle),
    /// A horizontal scroll came to rest at this content offset.
    ScrollEnded { offset_x: f32 },
    /// Jump to a page programmatically.
    SelectPage(usize),
    /// A tap on the viewer, in viewer coordinates.
    Tap { position: Point, at: Instant },
    /// Clock tick used to release pending single taps.
    Tick(Instant),
    /// A gesture on the current page.
    Page(page::Message),
    /// The close button was pressed.
    CloseRequested,
    AnimationProgress {
        token: TransitionToken,
        progress: f32,
    },
    AnimationFinished(TransitionToken),
    /// Answer to a lazy-load request.
    MoreImagesLoaded {
        ticket: LoadTicket,
        result: LoadMoreResult,
    },
}

/// Side effects the host should perform after handling a viewer message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Run this animation and answer with `AnimationFinished`.
    Animate(AnimationRequest),
    /// The current page changed; `None` for the loading placeholder.
    ScrolledToImage(Option<MediaImage>),
    ChromeChanged(Chrome),
    /// Show the save/share menu.
    PresentActions(MenuDescriptor),
    /// The close transition completed: remove the viewer.
    Dismiss,
}

/// Full-screen viewer: owns the paging container and the transition
/// animator, and turns host messages into effects.
#[derive(Debug)]
pub struct ViewerController {
    config: ViewerConfig,
    container: PagingContainer,
    source: ThumbnailHandle,
    animator: Option<TransitionAnimator>,
    viewer_frame: Rectangle,
    chrome: Chrome,
    taps: TapArbiter,
    appeared: bool,
    dismissed: bool,
    diagnostics: ViewerDiagnostics,
}

impl ViewerController {
    /// Builds the viewer for `images`, showing `initial` first.
    ///
    /// `source_view` is the thumbnail the viewer opens from and closes back to
    /// when the current image has no resolvable thumbnail.
    #[must_use]
    pub fn new(
        initial: &MediaImage,
        source_view: ThumbnailHandle,
        images: Vec<MediaImage>,
        delegates: Delegates,
        config: ViewerConfig,
    ) -> Self {
        let mut container = PagingContainer::new(
            delegates,
            PageSettings::from(&config),
            config.page_margin(),
        );
        container.set_images(images, Some(initial));

        let mut taps = TapArbiter::new(config.double_tap_window());
        taps.require_failure_of(container.single_tap_requires());

        Self {
            diagnostics: ViewerDiagnostics::new(config.diagnostics_capacity()),
            config,
            container,
            source: source_view,
            animator: None,
            viewer_frame: ZERO_FRAME,
            chrome: Chrome::default(),
            taps,
            appeared: false,
            dismissed: false,
        }
    }

    #[must_use]
    pub fn chrome(&self) -> Chrome {
        self.chrome
    }

    #[must_use]
    pub fn container(&self) -> &PagingContainer {
        &self.container
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&MediaImage> {
        self.container.current_image()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &ViewerDiagnostics {
        &self.diagnostics
    }

    /// Phase of the open/close transition, `Idle` before the first appearance
    /// and after dismissal.
    #[must_use]
    pub fn transition_phase(&self) -> Phase {
        self.animator
            .as_ref()
            .map_or(Phase::Idle, TransitionAnimator::phase)
    }

    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// The viewer was attached to the window at `frame`.
    pub fn on_mount(&mut self, frame: Rectangle) -> Vec<Effect> {
        self.layout(frame);
        tracing::info!(
            images = self.container.images().len(),
            selected = self.container.current_index(),
            "viewer mounted"
        );
        self.diagnostics.record(ViewerEvent::Mounted {
            image_count: self.container.images().len(),
            selected_index: self.container.current_index(),
        });
        vec![Effect::ChromeChanged(self.chrome)]
    }

    /// Runs the open transition. Only the first call has an effect.
    pub fn on_first_appear(&mut self, animated: bool) -> Vec<Effect> {
        if self.appeared || self.dismissed {
            return Vec::new();
        }
        self.appeared = true;

        let animator = self.animator.insert(TransitionAnimator::new(
            self.source.clone(),
            self.viewer_frame,
            self.config.animation_duration(),
        ));
        let effect = animator.open(&mut self.container, animated);
        self.apply_transition(TransitionKind::Open, animated, effect)
    }

    /// Runs the close transition; `Dismiss` follows its completion.
    pub fn on_close(&mut self, animated: bool) -> Vec<Effect> {
        if self.dismissed {
            return Vec::new();
        }
        let source = self.source.clone();
        let frame = self.viewer_frame;
        let duration = self.config.animation_duration();
        let animator = self
            .animator
            .get_or_insert_with(|| TransitionAnimator::new(source, frame, duration));
        let effect = animator.close(&mut self.container, animated, self.chrome.alpha);
        self.apply_transition(TransitionKind::Close, animated, effect)
    }

    /// Handle a host message.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        if self.dismissed {
            tracing::debug!(?message, "viewer dismissed, ignoring message");
            return Vec::new();
        }

        match message {
            Message::Layout(frame) => {
                self.layout(frame);
                Vec::new()
            }
            Message::ScrollEnded { offset_x } => {
                let change = self.container.scroll_ended(offset_x);
                self.page_changed(change)
            }
            Message::SelectPage(index) => {
                let change = self.container.select(index);
                self.page_changed(change)
            }
            Message::Tap { position, at } => self.handle_tap(position, at),
            Message::Tick(now) => match self.taps.tick(now) {
                Some(_) => self.toggle_overlay(),
                None => Vec::new(),
            },
            Message::Page(message) => self.handle_page(message),
            Message::CloseRequested => {
                if self.chrome.controls_enabled {
                    self.on_close(true)
                } else {
                    tracing::debug!("close ignored, controls disabled");
                    Vec::new()
                }
            }
            Message::AnimationProgress { token, progress } => {
                let keyframe = self
                    .animator
                    .as_mut()
                    .and_then(|animator| animator.progress(&mut self.container, token, progress));
                match keyframe {
                    Some(keyframe) => {
                        self.chrome = self.chrome.animating(keyframe.chrome_alpha);
                        vec![Effect::ChromeChanged(self.chrome)]
                    }
                    None => Vec::new(),
                }
            }
            Message::AnimationFinished(token) => {
                let completion = self
                    .animator
                    .as_mut()
                    .and_then(|animator| animator.finish(&mut self.container, token));
                match completion {
                    Some(completion) => self.transition_completed(completion, true),
                    None => {
                        self.diagnostics.record(ViewerEvent::StaleCompletionIgnored {
                            token: token.value(),
                        });
                        Vec::new()
                    }
                }
            }
            Message::MoreImagesLoaded { ticket, result } => self.more_images_loaded(ticket, result),
        }
    }

    fn layout(&mut self, frame: Rectangle) {
        self.viewer_frame = frame;
        self.container.layout(frame.size());
        if let Some(animator) = self.animator.as_mut() {
            animator.layout(frame);
        }
    }

    fn apply_transition(
        &mut self,
        kind: TransitionKind,
        animated: bool,
        effect: transition::Effect,
    ) -> Vec<Effect> {
        match effect {
            transition::Effect::Animate(request) => {
                self.diagnostics
                    .record(ViewerEvent::TransitionStarted { kind, animated });
                self.chrome = self.chrome.animating(request.from.chrome_alpha);
                vec![Effect::ChromeChanged(self.chrome), Effect::Animate(request)]
            }
            transition::Effect::Completed(kind) => self.transition_completed(
                Completion {
                    kind,
                    chrome_alpha: match kind {
                        TransitionKind::Open => 1.0,
                        TransitionKind::Close => 0.0,
                    },
                },
                false,
            ),
            transition::Effect::Busy(_) => {
                self.diagnostics
                    .record(ViewerEvent::TransitionRejected { kind });
                Vec::new()
            }
        }
    }

    fn transition_completed(&mut self, completion: Completion, performed: bool) -> Vec<Effect> {
        self.diagnostics.record(ViewerEvent::TransitionCompleted {
            kind: completion.kind,
            performed,
        });
        match completion.kind {
            TransitionKind::Open => {
                self.chrome = self.chrome.presented();
                vec![Effect::ChromeChanged(self.chrome)]
            }
            TransitionKind::Close => {
                self.chrome = self.chrome.animating(completion.chrome_alpha);
                self.animator = None;
                self.dismissed = true;
                tracing::info!("viewer dismissed");
                self.diagnostics.record(ViewerEvent::Dismissed);
                vec![Effect::ChromeChanged(self.chrome), Effect::Dismiss]
            }
        }
    }

    fn page_changed(&mut self, change: Option<PageChange>) -> Vec<Effect> {
        let Some(change) = change else {
            return Vec::new();
        };
        self.taps
            .require_failure_of(self.container.single_tap_requires());

        self.diagnostics.record(ViewerEvent::PageChanged {
            index: change.index,
            image: change.image.as_ref().map(|image| image.id().value()),
        });
        if let Some(ticket) = change.load_requested {
            self.diagnostics.record(ViewerEvent::LoadMoreRequested {
                ticket: ticket.value(),
                current_count: self.container.images().len(),
            });
        }
        vec![Effect::ScrolledToImage(change.image)]
    }

    fn handle_tap(&mut self, position: Point, at: Instant) -> Vec<Effect> {
        let mut effects = match self.taps.tick(at) {
            Some(_) => self.toggle_overlay(),
            None => Vec::new(),
        };
        match self.taps.tap(position, at) {
            TapOutcome::Pending => {}
            TapOutcome::Single(_) => effects.extend(self.toggle_overlay()),
            TapOutcome::Double(position) => {
                effects.extend(self.handle_page(page::Message::DoubleTap(position)));
            }
        }
        effects
    }

    fn toggle_overlay(&mut self) -> Vec<Effect> {
        self.chrome.overlay_visible = !self.chrome.overlay_visible;
        self.diagnostics.record(ViewerEvent::OverlayToggled {
            visible: self.chrome.overlay_visible,
        });
        vec![Effect::ChromeChanged(self.chrome)]
    }

    fn handle_page(&mut self, message: page::Message) -> Vec<Effect> {
        if !self.chrome.controls_enabled {
            return Vec::new();
        }
        let Some(page) = self.container.current_page_mut() else {
            return Vec::new();
        };

        match page.handle(message) {
            page::Effect::None | page::Effect::ZoomChanged { .. } => Vec::new(),
            page::Effect::DismissProgress { background_alpha } => {
                self.chrome.alpha = background_alpha;
                vec![Effect::ChromeChanged(self.chrome)]
            }
            page::Effect::DismissRequested => {
                self.diagnostics
                    .record(ViewerEvent::DismissGestureReleased { dismissed: true });
                self.on_close(true)
            }
            page::Effect::DismissCancelled => {
                self.diagnostics
                    .record(ViewerEvent::DismissGestureReleased { dismissed: false });
                self.chrome = self.chrome.presented();
                vec![Effect::ChromeChanged(self.chrome)]
            }
            page::Effect::ActionsRequested(image) => {
                let Some(builder) = self.container.delegates().action_menu.clone() else {
                    return Vec::new();
                };
                let menu = builder.build_actions(&image);
                if menu.is_empty() {
                    return Vec::new();
                }
                self.diagnostics.record(ViewerEvent::ActionsRequested {
                    image: image.id().value(),
                });
                vec![Effect::PresentActions(menu)]
            }
        }
    }

    fn more_images_loaded(&mut self, ticket: LoadTicket, result: LoadMoreResult) -> Vec<Effect> {
        match self.container.apply_loaded(ticket, result) {
            LoadOutcome::Stale => {
                tracing::debug!(%ticket, "ignoring stale load-more answer");
                self.diagnostics.record(ViewerEvent::StaleLoadIgnored {
                    ticket: ticket.value(),
                });
                Vec::new()
            }
            LoadOutcome::Failed(error) => {
                let error = Error::from(error);
                tracing::warn!(%ticket, %error, "load more failed");
                self.container.stop_loading_indicator();
                self.diagnostics.record(ViewerEvent::LoadMoreFailed {
                    reason: error.to_string(),
                });
                Vec::new()
            }
            LoadOutcome::Applied { appended, change } => {
                self.diagnostics.record(ViewerEvent::LoadMoreCompleted {
                    appended,
                    selected: change
                        .as_ref()
                        .and_then(|change| change.image.as_ref())
                        .map(|image| image.id().value()),
                });
                self.taps
                    .require_failure_of(self.container.single_tap_requires());
                self.page_changed(change)
            }
        }
    }
}
