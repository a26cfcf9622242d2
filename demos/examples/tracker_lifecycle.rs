// Copyright 2026 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View-change handling and teardown.
//!
//! This example zooms the view while a node is focused (a redraw that keeps
//! icon identities), removes the node from the model (a reset), and finally
//! disposes the tracker.
//!
//! Run:
//! - `cargo run -p anchorage_demos --example tracker_lifecycle`

use std::cell::Cell;

use anchorage_core::geom::unit_connection_point;
use anchorage_core::types::{Anchor, AnchorDescriptor, IconStyle, PointerUpdate, ViewState};
use anchorage_tracker::AnchorTracker;
use anchorage_tracker::host::{AnchorView, CellModel, Surface, ViewEvent};
use kurbo::{Point, Rect};

struct Stage {
    alive: bool,
    scale: f64,
    anchor_queries: Cell<u32>,
}

impl CellModel<u32> for Stage {
    fn is_node(&self, _cell: &u32) -> bool {
        self.alive
    }
    fn is_connectable(&self, _cell: &u32) -> bool {
        self.alive
    }
    fn is_locked(&self, _cell: &u32) -> bool {
        false
    }
    fn parent_of(&self, _cell: &u32) -> Option<u32> {
        None
    }
    fn cell_at(&self, _pos: Point) -> Option<u32> {
        None
    }
}

impl AnchorView<u32> for Stage {
    fn view_state(&self, _cell: &u32) -> Option<ViewState> {
        self.alive.then(|| {
            ViewState::new(Rect::new(0.0, 0.0, 100.0 * self.scale, 100.0 * self.scale))
        })
    }
    fn anchors(&self, _cell: &u32, _is_source: bool) -> Option<Vec<AnchorDescriptor>> {
        self.anchor_queries.set(self.anchor_queries.get() + 1);
        Some(vec![
            AnchorDescriptor::Position(Point::new(0.5, 0.0)),
            AnchorDescriptor::Position(Point::new(0.5, 1.0)),
        ])
    }
    fn connection_point(&self, state: &ViewState, anchor: &Anchor) -> Point {
        unit_connection_point(state, anchor)
    }
}

#[derive(Default)]
struct Canvas {
    next: u32,
    live: Vec<u32>,
}

impl Surface for Canvas {
    type ShapeId = u32;

    fn create_icon(&mut self, _style: &IconStyle, _bounds: Rect) -> u32 {
        self.next += 1;
        self.live.push(self.next);
        self.next
    }
    fn update_icon(&mut self, _id: u32, _style: &IconStyle, _bounds: Rect) {}
    fn create_highlight(&mut self, _bounds: Rect) -> u32 {
        self.next += 1;
        self.live.push(self.next);
        self.next
    }
    fn move_highlight(&mut self, _id: u32, _bounds: Rect) {}
    fn remove(&mut self, id: u32) {
        self.live.retain(|k| *k != id);
    }
}

fn main() {
    let mut stage = Stage {
        alive: true,
        scale: 1.0,
        anchor_queries: Cell::new(0),
    };
    let mut canvas = Canvas::default();
    let mut tracker: AnchorTracker<u32, u32> = AnchorTracker::new();

    let ev = PointerUpdate::over(Point::new(50.0, 5.0), 1);
    tracker.update(&stage, &mut canvas, &ev, true, None);
    println!("== Focused ==");
    println!("  points: {:?}", tracker.anchor_points());
    assert_eq!(stage.anchor_queries.get(), 1);

    // Zoom in: geometry refreshes in place, the resolver is not asked again.
    stage.scale = 2.0;
    tracker.on_view_event(&stage, &mut canvas, ViewEvent::Scaled);
    println!("== After zoom ==");
    println!("  points: {:?}", tracker.anchor_points());
    assert_eq!(stage.anchor_queries.get(), 1, "redraw keeps the anchor set");
    assert_eq!(
        tracker.anchor_points().unwrap(),
        &[Point::new(100.0, 0.0), Point::new(100.0, 200.0)]
    );

    // The node disappears from the model: the next view event resets.
    stage.alive = false;
    tracker.on_view_event(&stage, &mut canvas, ViewEvent::ModelChanged);
    println!("== After model change ==");
    println!("  tracked: {:?}", tracker.tracked_cell());
    assert!(tracker.tracked_cell().is_none());
    assert!(canvas.live.is_empty());

    tracker.dispose(&mut canvas);
    assert!(!tracker.is_attached());

    // Events after disposal are inert.
    stage.alive = true;
    tracker.update(&stage, &mut canvas, &ev, true, None);
    assert!(tracker.tracked_cell().is_none());
    assert!(canvas.live.is_empty());
    println!("done");
}
