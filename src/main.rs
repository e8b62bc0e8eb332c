// SPDX-License-Identifier: MPL-2.0
//! Scripted demo host: opens a viewer over an in-memory grid, swipes, answers
//! lazy-load requests and closes, printing every effect.

use iced_core::{Point, Rectangle, Size};
use media_viewer::application::port::{
    Delegates, LoadTicket, MoreImagesSource, ScrollSync, ThumbnailHandle, ThumbnailResolver,
    ThumbnailView,
};
use media_viewer::config::{self, ViewerConfig};
use media_viewer::domain::media::{ImageId, ImagePayload, MediaImage, OverlayMetadata};
use media_viewer::ui::viewer::{Effect, Message, ViewerController};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

const SCREEN: Rectangle = Rectangle {
    x: 0.0,
    y: 0.0,
    width: 390.0,
    height: 844.0,
};
const CELL: f32 = 96.0;
const COLUMNS: u64 = 4;

struct Flags {
    images: u64,
    selected: u64,
    swipe_to: Option<usize>,
    has_more: bool,
    config: Option<PathBuf>,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        images: args.opt_value_from_str("--images")?.unwrap_or(5),
        selected: args.opt_value_from_str("--selected")?.unwrap_or(0),
        swipe_to: args.opt_value_from_str("--swipe-to")?,
        has_more: args.contains("--has-more"),
        config: args.opt_value_from_str("--config")?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("ignoring unexpected arguments: {rest:?}");
    }
    Ok(flags)
}

/// A grid cell; the hidden flag is printed whenever it changes.
struct GridCell {
    id: u64,
    frame: Rectangle,
    hidden: Cell<bool>,
}

impl ThumbnailView for GridCell {
    fn window_frame(&self) -> Option<Rectangle> {
        Some(self.frame)
    }

    fn set_hidden(&self, hidden: bool) {
        if self.hidden.replace(hidden) != hidden {
            println!("  grid: thumbnail #{} hidden={hidden}", self.id);
        }
    }

    fn is_hidden(&self) -> bool {
        self.hidden.get()
    }
}

#[derive(Default)]
struct Grid {
    cells: RefCell<Vec<Rc<GridCell>>>,
    has_more: Cell<bool>,
    requests: RefCell<VecDeque<(usize, LoadTicket)>>,
}

impl Grid {
    fn push(&self, id: u64) -> Rc<GridCell> {
        #[allow(clippy::cast_precision_loss)]
        let frame = Rectangle::new(
            Point::new((id % COLUMNS) as f32 * CELL, 120.0 + (id / COLUMNS) as f32 * CELL),
            Size::new(CELL - 2.0, CELL - 2.0),
        );
        let cell = Rc::new(GridCell {
            id,
            frame,
            hidden: Cell::new(false),
        });
        self.cells.borrow_mut().push(Rc::clone(&cell));
        cell
    }
}

impl ThumbnailResolver for Grid {
    fn resolve_view(&self, image: &MediaImage) -> Option<ThumbnailHandle> {
        self.cells
            .borrow()
            .iter()
            .find(|cell| cell.id == image.id().value())
            .map(|cell| ThumbnailHandle::from(Rc::clone(cell)))
    }
}

impl ScrollSync for Grid {
    fn scroll_container_to_index(&self, index: usize) {
        println!("  grid: scrolled to index {index}");
    }
}

impl MoreImagesSource for Grid {
    fn has_more(&self, _current: &[MediaImage]) -> bool {
        self.has_more.get()
    }

    fn load_more(&self, current: &[MediaImage], ticket: LoadTicket) {
        println!("  grid: load more after {} images ({ticket})", current.len());
        self.requests.borrow_mut().push_back((current.len(), ticket));
    }
}

fn make_image(id: u64) -> MediaImage {
    let (width, height) = if id % 2 == 0 {
        (1600.0, 1200.0)
    } else {
        (1080.0, 1920.0)
    };
    MediaImage::new(ImageId::new(id), ImagePayload::new(format!("asset-{id}"), width, height))
        .with_overlay(OverlayMetadata {
            title: Some(format!("Photo {id}")),
            caption: None,
        })
}

/// Performs effects until none are left, answering animations immediately.
fn drive(viewer: &mut ViewerController, grid: &Grid, effects: Vec<Effect>) {
    let mut queue: VecDeque<Effect> = effects.into();
    while let Some(effect) = queue.pop_front() {
        match effect {
            Effect::Animate(request) => {
                println!(
                    "  animate {:?} {} over {:?}: {:?} -> {:?}",
                    request.kind,
                    request.token,
                    request.duration,
                    request.from.image_frame,
                    request.to.image_frame
                );
                queue.extend(viewer.update(Message::AnimationProgress {
                    token: request.token,
                    progress: 0.5,
                }));
                queue.extend(viewer.update(Message::AnimationFinished(request.token)));
            }
            Effect::ScrolledToImage(image) => match image {
                Some(image) => println!("  scrolled to image {}", image.id()),
                None => println!("  scrolled to loading placeholder"),
            },
            Effect::ChromeChanged(chrome) => println!("  chrome: {chrome:?}"),
            Effect::PresentActions(menu) => println!("  actions: {menu:?}"),
            Effect::Dismiss => println!("  dismiss"),
        }

        let pending = grid.requests.borrow_mut().pop_front();
        if let Some((count, ticket)) = pending {
            let first = count as u64 + 1;
            let batch: Vec<_> = (first..first + 3).map(make_image).collect();
            for image in &batch {
                grid.push(image.id().value());
            }
            grid.has_more.set(false);
            queue.extend(viewer.update(Message::MoreImagesLoaded {
                ticket,
                result: Ok(batch),
            }));
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let flags = parse_flags()?;
    let config: ViewerConfig = match &flags.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load().unwrap_or_default(),
    };

    let grid = Rc::new(Grid::default());
    grid.has_more.set(flags.has_more);
    let count = flags.images.max(1);
    let images: Vec<MediaImage> = (1..=count).map(make_image).collect();
    for image in &images {
        grid.push(image.id().value());
    }

    let index = usize::try_from(flags.selected.min(count - 1)).unwrap_or(0);
    let initial = images[index].clone();
    let Some(source) = grid.resolve_view(&initial) else {
        return Err("selected thumbnail missing from grid".into());
    };

    let delegates = Delegates::new(grid.clone())
        .with_scroll_sync(grid.clone())
        .with_more_images(grid.clone());
    let mut viewer = ViewerController::new(&initial, source, images, delegates, config);

    println!("mount");
    let effects = viewer.on_mount(SCREEN);
    drive(&mut viewer, &grid, effects);

    println!("open");
    let effects = viewer.on_first_appear(true);
    drive(&mut viewer, &grid, effects);

    if let Some(target) = flags.swipe_to {
        #[allow(clippy::cast_precision_loss)]
        let offset_x = target as f32 * viewer.container().page_stride();
        println!("swipe to page {target}");
        let effects = viewer.update(Message::ScrollEnded { offset_x });
        drive(&mut viewer, &grid, effects);
    }

    println!("close");
    let effects = viewer.update(Message::CloseRequested);
    drive(&mut viewer, &grid, effects);

    println!("history:");
    for event in viewer.diagnostics().events() {
        println!("  {event:?}");
    }
    Ok(())
}
