// SPDX-License-Identifier: MPL-2.0
//! Interactive image page: one zoomable, pannable image surface.
//!
//! A page owns the renderable state of its image view (frame, alpha,
//! content mode), its zoom/pan state and the pan-to-dismiss tracking.
//! Gestures arrive as [`Message`]s; anything the page cannot decide alone is
//! reported upward as an [`Effect`].
//!
//! Only the active page reacts to gestures. A page without an image is the
//! pagination placeholder: it shows a loading indicator and ignores input.

use crate::domain::media::MediaImage;
use crate::domain::ui::{DismissThreshold, DoubleTapZoom, MaxZoomScale};
use crate::geometry::{self, ZERO_FRAME};
use crate::ui::state::{DismissRelease, DismissState, ZoomState};
use iced_core::{Point, Rectangle, Size, Vector};

/// How the image is drawn inside its view frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    /// Whole image visible, letterboxed.
    #[default]
    Fit,
    /// Frame fully covered, image cropped.
    Fill,
}

/// Renderable state of the page's image view, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageView {
    pub frame: Rectangle,
    pub alpha: f32,
    pub content_mode: ContentMode,
}

impl ImageView {
    fn resting(bounds: Size) -> Self {
        Self {
            frame: Rectangle::with_size(bounds),
            alpha: 1.0,
            content_mode: ContentMode::Fit,
        }
    }
}

/// Identity of a page's double-tap recognizer.
///
/// The viewer's single-tap recognizer is wired to require the failure of
/// exactly one of these at a time (the current page's).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GestureId(u64);

impl GestureId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Tuning shared by every page of a container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageSettings {
    pub max_zoom: MaxZoomScale,
    pub double_tap_zoom: DoubleTapZoom,
    pub dismiss_threshold: DismissThreshold,
}

impl From<&crate::config::ViewerConfig> for PageSettings {
    fn from(config: &crate::config::ViewerConfig) -> Self {
        Self {
            max_zoom: config.max_zoom_scale(),
            double_tap_zoom: config.double_tap_zoom(),
            dismiss_threshold: config.dismiss_threshold(),
        }
    }
}

/// Gesture messages for a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Double tap at a point in page coordinates.
    DoubleTap(Point),
    /// Pinch update: `factor` is relative to the previous update.
    Pinch { factor: f32, focus: Point },
    /// Pinch finished.
    PinchEnded,
    /// Pan update with the cumulative translation since the pan started.
    Pan(Vector),
    /// Pan finished.
    PanEnded,
    /// Long press anywhere on the page.
    LongPress,
}

/// Effects produced by page gestures.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Zoom or pan changed; `animated` tells the host whether to animate.
    ZoomChanged { animated: bool },
    /// A dismiss pan moved; the viewer background should use this alpha.
    DismissProgress { background_alpha: f32 },
    /// A dismiss pan was released far enough: the viewer should close.
    DismissRequested,
    /// A dismiss pan was released too early: restore the background.
    DismissCancelled,
    /// The action menu should be shown for this image.
    ActionsRequested(MediaImage),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PanMode {
    Idle,
    /// Panning zoomed content; remembers the last cumulative translation.
    Content { last: Vector },
    Dismiss,
    /// Horizontal pan on an unzoomed page: belongs to the paging container.
    PassThrough,
}

/// One slot of the paging container.
#[derive(Debug, Clone)]
pub struct Page {
    image: Option<MediaImage>,
    bounds: Size,
    image_view: ImageView,
    zoom: ZoomState,
    dismiss: DismissState,
    pan_mode: PanMode,
    loading: bool,
    active: bool,
    double_tap_gesture: GestureId,
    settings: PageSettings,
}

impl Page {
    /// Creates a page for `image` (or a placeholder when `None`).
    #[must_use]
    pub fn new(
        image: Option<MediaImage>,
        bounds: Size,
        settings: PageSettings,
        double_tap_gesture: GestureId,
    ) -> Self {
        let loading = image.is_none();
        Self {
            image,
            bounds,
            image_view: ImageView::resting(bounds),
            zoom: ZoomState::new(settings.max_zoom, settings.double_tap_zoom),
            dismiss: DismissState::default(),
            pan_mode: PanMode::Idle,
            loading,
            active: false,
            double_tap_gesture,
            settings,
        }
    }

    /// Assigns an image and resets zoom and pan.
    pub fn set_image(&mut self, image: Option<MediaImage>) {
        self.loading = image.is_none() && self.loading;
        self.image = image;
        self.reset_interaction();
        self.image_view = ImageView::resting(self.bounds);
    }

    /// Resets zoom and pan to identity.
    ///
    /// Returns [`Effect::ZoomChanged`] when something actually changed.
    pub fn zoom_out(&mut self, animated: bool) -> Effect {
        let was_zoomed = self.zoom.is_zoomed();
        self.zoom.reset();
        self.pan_mode = PanMode::Idle;
        if was_zoomed {
            Effect::ZoomChanged { animated }
        } else {
            Effect::None
        }
    }

    /// Updates the page size.
    ///
    /// Zoom is kept and its offset clamped to the new size. The image view
    /// follows only while it is at rest; a frame set by a running transition
    /// is left untouched.
    pub fn layout(&mut self, bounds: Size) {
        if bounds == self.bounds {
            return;
        }
        let at_rest = self.image_view == ImageView::resting(self.bounds);
        self.bounds = bounds;
        let fitted = self.fitted_frame().size();
        self.zoom.relayout(bounds, fitted);
        if at_rest {
            self.image_view = ImageView::resting(bounds);
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&MediaImage> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.image.is_none()
    }

    /// Whether the loading indicator is spinning.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed()
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        Rectangle::with_size(self.bounds)
    }

    #[must_use]
    pub fn image_view(&self) -> &ImageView {
        &self.image_view
    }

    pub(crate) fn image_view_mut(&mut self) -> &mut ImageView {
        &mut self.image_view
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enables or disables gesture handling. Deactivation zooms out.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.zoom_out(false);
            self.dismiss.stop();
        }
    }

    #[must_use]
    pub fn double_tap_gesture(&self) -> GestureId {
        self.double_tap_gesture
    }

    /// Native size of the image, zero for placeholders.
    #[must_use]
    pub fn native_size(&self) -> Size {
        self.image
            .as_ref()
            .map_or(Size::ZERO, |image| {
                let (width, height) = image.native_dimensions();
                Size::new(width, height)
            })
    }

    /// Aspect-fit frame of the image, centered in the page.
    #[must_use]
    pub fn fitted_frame(&self) -> Rectangle {
        let frame = geometry::aspect_fit_frame(self.bounds, self.native_size());
        if frame == ZERO_FRAME {
            return frame;
        }
        geometry::center_on(frame, self.bounds().center())
    }

    /// Frame of the image as currently displayed, zoom and pan included.
    #[must_use]
    pub fn displayed_frame(&self) -> Rectangle {
        self.zoom
            .displayed_frame(self.bounds, self.fitted_frame().size())
    }

    /// Handle a gesture message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        if !self.active || self.image.is_none() {
            return Effect::None;
        }
        let fitted = self.fitted_frame().size();

        match msg {
            Message::DoubleTap(focus) => {
                self.zoom.toggle_double_tap(focus, self.bounds, fitted);
                Effect::ZoomChanged { animated: true }
            }
            Message::Pinch { factor, focus } => {
                if self.pan_mode == PanMode::Dismiss {
                    return Effect::None;
                }
                self.zoom.pinch(factor, focus, self.bounds, fitted);
                Effect::ZoomChanged { animated: false }
            }
            Message::PinchEnded => Effect::None,
            Message::Pan(translation) => self.handle_pan(translation, fitted),
            Message::PanEnded => self.finish_pan(),
            Message::LongPress => match &self.image {
                Some(image) => Effect::ActionsRequested(image.clone()),
                None => Effect::None,
            },
        }
    }

    fn handle_pan(&mut self, translation: Vector, fitted: Size) -> Effect {
        if self.pan_mode == PanMode::Idle {
            self.pan_mode = if self.zoom.is_zoomed() {
                PanMode::Content {
                    last: Vector::new(0.0, 0.0),
                }
            } else if translation.y.abs() > translation.x.abs() {
                self.dismiss.start(self.bounds.height);
                PanMode::Dismiss
            } else {
                PanMode::PassThrough
            };
        }

        match self.pan_mode {
            PanMode::Content { last } => {
                let delta = translation - last;
                self.pan_mode = PanMode::Content { last: translation };
                if self.zoom.pan_by(delta, self.bounds, fitted) {
                    Effect::ZoomChanged { animated: false }
                } else {
                    Effect::None
                }
            }
            PanMode::Dismiss => match self.dismiss.update(translation) {
                Some(background_alpha) => Effect::DismissProgress { background_alpha },
                None => Effect::None,
            },
            PanMode::Idle | PanMode::PassThrough => Effect::None,
        }
    }

    fn finish_pan(&mut self) -> Effect {
        let mode = std::mem::replace(&mut self.pan_mode, PanMode::Idle);
        if mode != PanMode::Dismiss {
            return Effect::None;
        }
        match self.dismiss.release(self.settings.dismiss_threshold) {
            Some(DismissRelease::Dismiss) => Effect::DismissRequested,
            Some(DismissRelease::SnapBack) => Effect::DismissCancelled,
            None => Effect::None,
        }
    }

    fn reset_interaction(&mut self) {
        self.zoom.reset();
        self.dismiss.stop();
        self.pan_mode = PanMode::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{ImageId, ImagePayload};

    const BOUNDS: Size = Size {
        width: 400.0,
        height: 800.0,
    };

    fn image(id: u64) -> MediaImage {
        MediaImage::new(ImageId::new(id), ImagePayload::new("img", 800.0, 600.0))
    }

    fn active_page() -> Page {
        let mut page = Page::new(
            Some(image(1)),
            BOUNDS,
            PageSettings::default(),
            GestureId::new(1),
        );
        page.set_active(true);
        page
    }

    #[test]
    fn inactive_page_ignores_gestures() {
        let mut page = Page::new(
            Some(image(1)),
            BOUNDS,
            PageSettings::default(),
            GestureId::new(1),
        );
        let effect = page.handle(Message::DoubleTap(Point::new(200.0, 400.0)));
        assert_eq!(effect, Effect::None);
        assert!(!page.is_zoomed());
    }

    #[test]
    fn placeholder_shows_loading_and_ignores_gestures() {
        let mut page = Page::new(None, BOUNDS, PageSettings::default(), GestureId::new(2));
        page.set_active(true);
        assert!(page.is_placeholder());
        assert!(page.is_loading());
        assert_eq!(page.handle(Message::LongPress), Effect::None);
    }

    #[test]
    fn double_tap_toggles_zoom() {
        let mut page = active_page();
        page.handle(Message::DoubleTap(Point::new(200.0, 400.0)));
        assert!(page.is_zoomed());
        page.handle(Message::DoubleTap(Point::new(200.0, 400.0)));
        assert!(!page.is_zoomed());
    }

    #[test]
    fn set_image_resets_zoom() {
        let mut page = active_page();
        page.handle(Message::DoubleTap(Point::new(200.0, 400.0)));
        page.set_image(Some(image(2)));
        assert!(!page.is_zoomed());
        assert_eq!(page.image().map(MediaImage::id), Some(ImageId::new(2)));
    }

    #[test]
    fn deactivation_forces_zoom_out() {
        let mut page = active_page();
        page.handle(Message::Pinch {
            factor: 2.0,
            focus: Point::new(200.0, 400.0),
        });
        assert!(page.is_zoomed());
        page.set_active(false);
        assert!(!page.is_zoomed());
    }

    #[test]
    fn zoom_out_reports_change_only_when_zoomed() {
        let mut page = active_page();
        assert_eq!(page.zoom_out(true), Effect::None);
        page.handle(Message::DoubleTap(Point::new(200.0, 400.0)));
        assert_eq!(page.zoom_out(true), Effect::ZoomChanged { animated: true });
    }

    #[test]
    fn vertical_pan_on_unzoomed_page_reports_dismiss_progress() {
        let mut page = active_page();
        let effect = page.handle(Message::Pan(Vector::new(2.0, 200.0)));
        assert_eq!(effect, Effect::DismissProgress { background_alpha: 0.5 });
        assert_eq!(page.handle(Message::PanEnded), Effect::DismissRequested);
    }

    #[test]
    fn short_dismiss_pan_snaps_back() {
        let mut page = active_page();
        page.handle(Message::Pan(Vector::new(0.0, 20.0)));
        assert_eq!(page.handle(Message::PanEnded), Effect::DismissCancelled);
    }

    #[test]
    fn horizontal_pan_is_left_to_the_container() {
        let mut page = active_page();
        assert_eq!(page.handle(Message::Pan(Vector::new(120.0, 5.0))), Effect::None);
        assert_eq!(page.handle(Message::PanEnded), Effect::None);
    }

    #[test]
    fn pan_moves_content_only_while_zoomed() {
        let mut page = active_page();
        page.handle(Message::DoubleTap(Point::new(200.0, 400.0)));

        let effect = page.handle(Message::Pan(Vector::new(30.0, 0.0)));
        assert_eq!(effect, Effect::ZoomChanged { animated: false });
        assert!(page.zoom().offset.x > 0.0);
        page.handle(Message::PanEnded);
    }

    #[test]
    fn repeated_layout_keeps_zoom() {
        let mut page = active_page();
        page.handle(Message::DoubleTap(Point::new(200.0, 400.0)));
        page.layout(BOUNDS);
        assert!(page.is_zoomed());

        page.layout(Size::new(800.0, 400.0));
        assert!(page.is_zoomed());
        assert_eq!(page.image_view().frame, Rectangle::with_size(Size::new(800.0, 400.0)));
    }

    #[test]
    fn layout_leaves_a_moving_image_view_alone() {
        let mut page = active_page();
        let moving = Rectangle::new(Point::new(10.0, 20.0), Size::new(50.0, 50.0));
        let view = page.image_view_mut();
        view.frame = moving;
        view.content_mode = ContentMode::Fill;

        page.layout(Size::new(800.0, 400.0));
        assert_eq!(page.image_view().frame, moving);
        assert_eq!(page.image_view().content_mode, ContentMode::Fill);
    }

    #[test]
    fn long_press_requests_actions() {
        let mut page = active_page();
        assert_eq!(
            page.handle(Message::LongPress),
            Effect::ActionsRequested(image(1))
        );
    }

    #[test]
    fn fitted_frame_is_centered() {
        let page = active_page();
        let frame = page.fitted_frame();
        assert_eq!(frame.width, 400.0);
        assert_eq!(frame.height, 300.0);
        assert_eq!(frame.y, 250.0);
    }

    #[test]
    fn fitted_frame_of_invalid_image_is_zero() {
        let page = Page::new(
            Some(MediaImage::new(
                ImageId::new(9),
                ImagePayload::new("broken", 0.0, 0.0),
            )),
            BOUNDS,
            PageSettings::default(),
            GestureId::new(9),
        );
        assert_eq!(page.fitted_frame(), ZERO_FRAME);
    }
}
