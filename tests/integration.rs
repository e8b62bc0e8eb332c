// SPDX-License-Identifier: MPL-2.0
use iced_core::{Point, Rectangle, Size, Vector};
use media_viewer::application::port::{
    ActionMenuBuilder, Delegates, LoadTicket, MenuAction, MenuDescriptor, MoreImagesSource,
    ScrollSync, ThumbnailHandle, ThumbnailResolver, ThumbnailView,
};
use media_viewer::config::{self, ViewerConfig};
use media_viewer::diagnostics::ViewerEvent;
use media_viewer::domain::media::{ImageId, ImagePayload, MediaImage};
use media_viewer::error::LoadMoreError;
use media_viewer::ui::page;
use media_viewer::ui::transition::{AnimationRequest, Phase, TransitionKind};
use media_viewer::ui::viewer::{Effect, Message, ViewerController};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const SCREEN: Rectangle = Rectangle {
    x: 0.0,
    y: 0.0,
    width: 400.0,
    height: 800.0,
};

struct Thumb {
    frame: Rectangle,
    hidden: Cell<bool>,
}

impl Thumb {
    fn at(x: f32, y: f32) -> Rc<Self> {
        Rc::new(Self {
            frame: Rectangle::new(Point::new(x, y), Size::new(90.0, 90.0)),
            hidden: Cell::new(false),
        })
    }
}

impl ThumbnailView for Thumb {
    fn window_frame(&self) -> Option<Rectangle> {
        Some(self.frame)
    }

    fn set_hidden(&self, hidden: bool) {
        self.hidden.set(hidden);
    }

    fn is_hidden(&self) -> bool {
        self.hidden.get()
    }
}

#[derive(Default)]
struct Host {
    thumbs: RefCell<HashMap<u64, Rc<Thumb>>>,
    scrolled: RefCell<Vec<usize>>,
    has_more: Cell<bool>,
    requests: RefCell<Vec<LoadTicket>>,
}

impl Host {
    fn new(ids: &[u64], has_more: bool) -> Rc<Self> {
        let host = Rc::new(Self::default());
        for (slot, id) in ids.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let x = slot as f32 * 100.0;
            host.thumbs.borrow_mut().insert(*id, Thumb::at(x, 200.0));
        }
        host.has_more.set(has_more);
        host
    }

    fn thumb(&self, id: u64) -> Rc<Thumb> {
        Rc::clone(&self.thumbs.borrow()[&id])
    }

    fn any_hidden(&self) -> bool {
        self.thumbs.borrow().values().any(|thumb| thumb.hidden.get())
    }
}

impl ThumbnailResolver for Host {
    fn resolve_view(&self, image: &MediaImage) -> Option<ThumbnailHandle> {
        self.thumbs
            .borrow()
            .get(&image.id().value())
            .map(|thumb| ThumbnailHandle::from(Rc::clone(thumb)))
    }
}

impl ScrollSync for Host {
    fn scroll_container_to_index(&self, index: usize) {
        self.scrolled.borrow_mut().push(index);
    }
}

impl MoreImagesSource for Host {
    fn has_more(&self, _current: &[MediaImage]) -> bool {
        self.has_more.get()
    }

    fn load_more(&self, _current: &[MediaImage], ticket: LoadTicket) {
        self.requests.borrow_mut().push(ticket);
    }
}

impl ActionMenuBuilder for Host {
    fn build_actions(&self, image: &MediaImage) -> MenuDescriptor {
        MenuDescriptor {
            title: Some(image.id().to_string()),
            actions: vec![MenuAction::new("share", "Share")],
        }
    }
}

fn image(id: u64) -> MediaImage {
    MediaImage::new(ImageId::new(id), ImagePayload::new(format!("img-{id}"), 800.0, 600.0))
}

fn viewer(host: &Rc<Host>, ids: &[u64], selected: u64) -> ViewerController {
    let images = ids.iter().copied().map(image).collect();
    let source = ThumbnailHandle::from(host.thumb(selected));
    let delegates = Delegates::new(host.clone())
        .with_scroll_sync(host.clone())
        .with_more_images(host.clone())
        .with_action_menu(host.clone());
    let mut viewer = ViewerController::new(
        &image(selected),
        source,
        images,
        delegates,
        ViewerConfig::default(),
    );
    viewer.on_mount(SCREEN);
    viewer
}

fn animation(effects: &[Effect]) -> AnimationRequest {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Animate(request) => Some(request.clone()),
            _ => None,
        })
        .expect("an animation request")
}

/// Opens the viewer and completes the open animation.
fn presented(host: &Rc<Host>, ids: &[u64], selected: u64) -> ViewerController {
    let mut viewer = viewer(host, ids, selected);
    let open = animation(&viewer.on_first_appear(true));
    viewer.update(Message::AnimationFinished(open.token));
    viewer
}

#[test]
fn selection_and_scroll_sync_follow_the_current_page() {
    let host = Host::new(&[1, 2, 3], false);
    let mut viewer = viewer(&host, &[1, 2, 3], 2);
    assert_eq!(viewer.container().current_index(), 1);

    let stride = viewer.container().page_stride();
    let effects = viewer.update(Message::ScrollEnded {
        offset_x: 2.0 * stride,
    });

    assert_eq!(effects, vec![Effect::ScrolledToImage(Some(image(3)))]);
    assert_eq!(*host.scrolled.borrow(), vec![2]);
    assert!(host.thumb(3).hidden.get());
    assert!(!host.thumb(2).hidden.get());
}

#[test]
fn placeholder_triggers_lazy_load() {
    let host = Host::new(&[1], true);
    let mut viewer = viewer(&host, &[1], 1);

    assert_eq!(viewer.container().page_count(), 2);
    let placeholder = viewer.container().page(1).expect("placeholder page");
    assert!(placeholder.is_placeholder());
    assert!(placeholder.is_loading());

    let stride = viewer.container().page_stride();
    let effects = viewer.update(Message::ScrollEnded { offset_x: stride });
    assert_eq!(effects, vec![Effect::ScrolledToImage(None)]);
    assert_eq!(host.requests.borrow().len(), 1);
    assert!(!host.any_hidden());
}

#[test]
fn empty_answer_on_an_empty_viewer_sends_no_new_request() {
    let host = Host::new(&[1], true);
    let mut viewer = viewer(&host, &[], 1);
    assert_eq!(viewer.container().page_count(), 1);

    viewer.update(Message::ScrollEnded { offset_x: 0.0 });
    let ticket = host.requests.borrow()[0];
    let effects = viewer.update(Message::MoreImagesLoaded {
        ticket,
        result: Ok(Vec::new()),
    });

    assert!(effects.is_empty());
    assert_eq!(host.requests.borrow().len(), 1);
    assert!(!viewer.container().is_loading_more());
}

#[test]
fn loaded_images_keep_the_current_image() {
    let host = Host::new(&[1, 2, 3], true);
    let mut viewer = viewer(&host, &[1], 1);
    let stride = viewer.container().page_stride();

    viewer.update(Message::ScrollEnded { offset_x: stride });
    viewer.update(Message::ScrollEnded { offset_x: 0.0 });
    let ticket = host.requests.borrow()[0];
    assert_eq!(host.requests.borrow().len(), 1);

    host.has_more.set(false);
    let effects = viewer.update(Message::MoreImagesLoaded {
        ticket,
        result: Ok(vec![image(2), image(3)]),
    });

    assert_eq!(effects, vec![Effect::ScrolledToImage(Some(image(1)))]);
    assert_eq!(viewer.container().page_count(), 3);
    assert_eq!(viewer.current_image(), Some(&image(1)));
}

#[test]
fn failed_load_clears_the_indicator() {
    let host = Host::new(&[1], true);
    let mut viewer = viewer(&host, &[1], 1);
    let stride = viewer.container().page_stride();
    viewer.update(Message::ScrollEnded { offset_x: stride });
    let ticket = host.requests.borrow()[0];

    let effects = viewer.update(Message::MoreImagesLoaded {
        ticket,
        result: Err(LoadMoreError::Failed("offline".into())),
    });

    assert!(effects.is_empty());
    assert_eq!(viewer.container().page_count(), 2);
    assert!(!viewer.container().page(1).expect("placeholder").is_loading());
    assert_eq!(
        viewer
            .diagnostics()
            .count(|event| matches!(event, ViewerEvent::LoadMoreFailed { .. })),
        1
    );
}

#[test]
fn open_then_close_runs_both_transitions() {
    let host = Host::new(&[1, 2], false);
    let mut viewer = viewer(&host, &[1, 2], 1);

    let effects = viewer.on_first_appear(true);
    let open = animation(&effects);
    assert_eq!(open.kind, TransitionKind::Open);
    assert_eq!(open.duration, Duration::from_millis(200));
    assert!(!viewer.chrome().controls_enabled);
    assert!(viewer.on_first_appear(true).is_empty());

    viewer.update(Message::AnimationFinished(open.token));
    assert_eq!(viewer.transition_phase(), Phase::Settled);
    assert!(viewer.chrome().controls_enabled);
    assert!((viewer.chrome().alpha - 1.0).abs() < f32::EPSILON);

    let close = animation(&viewer.update(Message::CloseRequested));
    assert_eq!(close.kind, TransitionKind::Close);
    // Close button is disabled while the transition runs.
    assert!(viewer.update(Message::CloseRequested).is_empty());

    let effects = viewer.update(Message::AnimationFinished(close.token));
    assert_eq!(effects.last(), Some(&Effect::Dismiss));
    assert!(viewer.is_dismissed());
    assert!(!host.any_hidden());

    // Late completions after dismissal are ignored.
    assert!(viewer
        .update(Message::AnimationFinished(close.token))
        .is_empty());
}

#[test]
fn close_without_pages_completes_exactly_once() {
    let host = Host::new(&[1], false);
    let source = ThumbnailHandle::from(host.thumb(1));
    let mut viewer = ViewerController::new(
        &image(1),
        source,
        Vec::new(),
        Delegates::new(host.clone()),
        ViewerConfig::default(),
    );
    viewer.on_mount(SCREEN);

    let effects = viewer.on_close(true);
    let dismissals = effects
        .iter()
        .filter(|effect| matches!(effect, Effect::Dismiss))
        .count();
    assert_eq!(dismissals, 1);
    assert!(viewer.on_close(true).is_empty());
    assert!(!host.any_hidden());
}

#[test]
fn stale_animation_tokens_are_ignored() {
    let host = Host::new(&[1], false);
    let mut viewer = viewer(&host, &[1], 1);
    let open = animation(&viewer.on_first_appear(true));
    viewer.update(Message::AnimationFinished(open.token));

    assert!(viewer
        .update(Message::AnimationFinished(open.token))
        .is_empty());
    assert_eq!(
        viewer
            .diagnostics()
            .count(|event| matches!(event, ViewerEvent::StaleCompletionIgnored { .. })),
        1
    );
}

#[test]
fn single_tap_waits_for_the_double_tap_window() {
    let host = Host::new(&[1], false);
    let mut viewer = presented(&host, &[1], 1);
    let start = Instant::now();
    let center = Point::new(200.0, 400.0);

    assert!(viewer
        .update(Message::Tap {
            position: center,
            at: start
        })
        .is_empty());
    let effects = viewer.update(Message::Tick(start + Duration::from_millis(500)));
    assert_eq!(effects.len(), 1);
    assert!(!viewer.chrome().overlay_visible);

    let later = start + Duration::from_secs(2);
    viewer.update(Message::Tap {
        position: center,
        at: later,
    });
    viewer.update(Message::Tap {
        position: center,
        at: later + Duration::from_millis(100),
    });
    assert!(viewer
        .container()
        .current_page()
        .expect("page")
        .is_zoomed());
    assert!(!viewer.chrome().overlay_visible);
}

#[test]
fn dismiss_pan_fades_chrome_and_closes() {
    let host = Host::new(&[1], false);
    let mut viewer = presented(&host, &[1], 1);

    let effects = viewer.update(Message::Page(page::Message::Pan(Vector::new(0.0, 300.0))));
    assert_eq!(effects.len(), 1);
    assert!(viewer.chrome().alpha < 0.5);

    let effects = viewer.update(Message::Page(page::Message::PanEnded));
    let close = animation(&effects);
    assert_eq!(close.kind, TransitionKind::Close);
    assert!(close.from.chrome_alpha < 0.5);
}

#[test]
fn zoom_survives_a_repeated_layout() {
    let host = Host::new(&[1, 2], false);
    let mut viewer = presented(&host, &[1, 2], 1);

    viewer.update(Message::Page(page::Message::DoubleTap(Point::new(200.0, 400.0))));
    viewer.update(Message::Layout(SCREEN));

    let page = viewer.container().current_page().expect("current page");
    assert!(page.is_zoomed());
}

#[test]
fn long_press_presents_actions() {
    let host = Host::new(&[1], false);
    let mut viewer = presented(&host, &[1], 1);

    let effects = viewer.update(Message::Page(page::Message::LongPress));
    let Some(Effect::PresentActions(menu)) = effects.first() else {
        panic!("expected an action menu, got {effects:?}");
    };
    assert_eq!(menu.actions.len(), 1);
    assert_eq!(menu.title.as_deref(), Some("#1"));
}

#[test]
fn config_round_trips_through_a_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let custom = ViewerConfig {
        animation_duration_ms: 350,
        page_margin: 8.0,
        ..ViewerConfig::default()
    };
    config::save_to_path(&custom, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, custom);
    assert_eq!(loaded.animation_duration().as_millis(), 350);

    let host = Host::new(&[1], false);
    let source = ThumbnailHandle::from(host.thumb(1));
    let mut viewer = ViewerController::new(
        &image(1),
        source,
        vec![image(1)],
        Delegates::new(host.clone()),
        loaded,
    );
    viewer.on_mount(SCREEN);
    assert!((viewer.container().page_stride() - 416.0).abs() < f32::EPSILON);
    let open = animation(&viewer.on_first_appear(true));
    assert_eq!(open.duration, Duration::from_millis(350));
}
