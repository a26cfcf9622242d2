// Copyright 2026 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor discovery from a hover sequence.
//!
//! This example walks the pointer over a two-node stage and prints how the
//! tracker focuses nodes, selects the closest anchor, and drops the
//! selection again.
//!
//! Run:
//! - `cargo run -p anchorage_demos --example anchor_hover`

use anchorage_core::geom::unit_connection_point;
use anchorage_core::types::{Anchor, AnchorDescriptor, IconStyle, PointerUpdate, ViewState};
use anchorage_tracker::AnchorTracker;
use anchorage_tracker::host::{AnchorView, CellModel, Surface};
use kurbo::{Point, Rect};

struct Stage {
    nodes: Vec<(u32, Rect, Vec<AnchorDescriptor>)>,
}

impl Stage {
    fn entry(&self, cell: &u32) -> Option<&(u32, Rect, Vec<AnchorDescriptor>)> {
        self.nodes.iter().find(|(id, ..)| id == cell)
    }
}

impl CellModel<u32> for Stage {
    fn is_node(&self, cell: &u32) -> bool {
        self.entry(cell).is_some()
    }
    fn is_connectable(&self, cell: &u32) -> bool {
        self.entry(cell).is_some()
    }
    fn is_locked(&self, _cell: &u32) -> bool {
        false
    }
    fn parent_of(&self, _cell: &u32) -> Option<u32> {
        None
    }
    fn cell_at(&self, pos: Point) -> Option<u32> {
        self.nodes
            .iter()
            .find(|(_, bounds, _)| bounds.contains(pos))
            .map(|(id, ..)| *id)
    }
}

impl AnchorView<u32> for Stage {
    fn view_state(&self, cell: &u32) -> Option<ViewState> {
        self.entry(cell).map(|(_, bounds, _)| ViewState::new(*bounds))
    }
    fn anchors(&self, cell: &u32, _is_source: bool) -> Option<Vec<AnchorDescriptor>> {
        self.entry(cell).map(|(.., anchors)| anchors.clone())
    }
    fn connection_point(&self, state: &ViewState, anchor: &Anchor) -> Point {
        unit_connection_point(state, anchor)
    }
}

/// Records shape traffic instead of drawing.
#[derive(Default)]
struct Canvas {
    next: u32,
    live: Vec<u32>,
}

impl Surface for Canvas {
    type ShapeId = u32;

    fn create_icon(&mut self, _style: &IconStyle, bounds: Rect) -> u32 {
        self.next += 1;
        self.live.push(self.next);
        println!("  create icon #{} at {:?}", self.next, bounds);
        self.next
    }
    fn update_icon(&mut self, id: u32, _style: &IconStyle, bounds: Rect) {
        println!("  update icon #{id} to {bounds:?}");
    }
    fn create_highlight(&mut self, bounds: Rect) -> u32 {
        self.next += 1;
        self.live.push(self.next);
        println!("  create highlight #{} at {:?}", self.next, bounds);
        self.next
    }
    fn move_highlight(&mut self, id: u32, bounds: Rect) {
        println!("  move highlight #{id} to {bounds:?}");
    }
    fn remove(&mut self, id: u32) {
        self.live.retain(|k| *k != id);
        println!("  remove shape #{id}");
    }
}

fn main() {
    // Two nodes side by side, four edge-midpoint anchors each.
    let midpoints = || {
        vec![
            AnchorDescriptor::Position(Point::new(0.5, 0.0)),
            AnchorDescriptor::Position(Point::new(1.0, 0.5)),
            AnchorDescriptor::Position(Point::new(0.5, 1.0)),
            AnchorDescriptor::Position(Point::new(0.0, 0.5)),
        ]
    };
    let stage = Stage {
        nodes: vec![
            (1, Rect::new(0.0, 0.0, 100.0, 100.0), midpoints()),
            (2, Rect::new(200.0, 0.0, 300.0, 100.0), midpoints()),
        ],
    };

    let mut canvas = Canvas::default();
    let mut tracker: AnchorTracker<u32, u32> = AnchorTracker::new();

    println!("== Enter node 1 near the top anchor ==");
    let ev = PointerUpdate::over(Point::new(50.0, 5.0), 1);
    tracker.update(&stage, &mut canvas, &ev, true, None);
    println!("  selected point: {:?}", tracker.current_point());
    assert_eq!(tracker.current_point(), Some(Point::new(50.0, 0.0)));

    println!("== Drift to the node center ==");
    let ev = PointerUpdate::over(Point::new(50.0, 50.0), 1);
    tracker.update(&stage, &mut canvas, &ev, true, None);
    println!("  selected point: {:?}", tracker.current_point());
    assert!(tracker.current_point().is_none());
    assert_eq!(tracker.tracked_cell(), Some(&1), "focus survives the drift");

    println!("== Jump to node 2's left anchor ==");
    let ev = PointerUpdate::over(Point::new(202.0, 50.0), 2);
    tracker.update(&stage, &mut canvas, &ev, true, None);
    println!("  selected point: {:?}", tracker.current_point());
    assert_eq!(tracker.current_point(), Some(Point::new(200.0, 50.0)));
    assert_eq!(tracker.redirect_target(), Some(&2));

    println!("== Leave the diagram ==");
    let ev = PointerUpdate::at(Point::new(500.0, 400.0));
    tracker.update(&stage, &mut canvas, &ev, true, None);
    assert!(tracker.tracked_cell().is_none());
    assert!(canvas.live.is_empty(), "every shape cleaned up");
    println!("done");
}
