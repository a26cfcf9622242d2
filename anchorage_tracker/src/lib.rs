// Copyright 2026 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchorage Tracker: interactive discovery and highlighting of anchor
//! points on diagram nodes.
//!
//! While the pointer hovers near a node (or drags an edge endpoint over
//! one), the [`AnchorTracker`] resolves the node's candidate anchors,
//! materializes an icon per anchor on the host's [`Surface`](host::Surface),
//! and keeps the closest anchor selected and highlighted. Connect gestures
//! read the selection off the tracker to decide where a new edge should
//! terminate.
//!
//! The tracker is host-agnostic: graph topology, view geometry, and
//! rendering are all reached through the traits in [`host`].
//!
//! # Example
//!
//! A single node with one anchor at top-center, driven by two pointer moves:
//!
//! ```
//! use anchorage_core::geom::unit_connection_point;
//! use anchorage_core::types::{Anchor, AnchorDescriptor, IconStyle, PointerUpdate, ViewState};
//! use anchorage_tracker::AnchorTracker;
//! use anchorage_tracker::host::{AnchorView, CellModel, Surface};
//! use kurbo::{Point, Rect};
//!
//! struct Host;
//!
//! impl CellModel<u32> for Host {
//!     fn is_node(&self, _cell: &u32) -> bool { true }
//!     fn is_connectable(&self, _cell: &u32) -> bool { true }
//!     fn is_locked(&self, _cell: &u32) -> bool { false }
//!     fn parent_of(&self, _cell: &u32) -> Option<u32> { None }
//!     fn cell_at(&self, _pos: Point) -> Option<u32> { None }
//! }
//!
//! impl AnchorView<u32> for Host {
//!     fn view_state(&self, _cell: &u32) -> Option<ViewState> {
//!         Some(ViewState::new(Rect::new(0.0, 0.0, 100.0, 100.0)))
//!     }
//!     fn anchors(&self, _cell: &u32, _is_source: bool) -> Option<Vec<AnchorDescriptor>> {
//!         Some(vec![AnchorDescriptor::Position(Point::new(0.5, 0.0))])
//!     }
//!     fn connection_point(&self, state: &ViewState, anchor: &Anchor) -> Point {
//!         unit_connection_point(state, anchor)
//!     }
//! }
//!
//! struct Canvas(u32);
//!
//! impl Surface for Canvas {
//!     type ShapeId = u32;
//!     fn create_icon(&mut self, _style: &IconStyle, _bounds: Rect) -> u32 {
//!         self.0 += 1;
//!         self.0
//!     }
//!     fn update_icon(&mut self, _id: u32, _style: &IconStyle, _bounds: Rect) {}
//!     fn create_highlight(&mut self, _bounds: Rect) -> u32 {
//!         self.0 += 1;
//!         self.0
//!     }
//!     fn move_highlight(&mut self, _id: u32, _bounds: Rect) {}
//!     fn remove(&mut self, _id: u32) {}
//! }
//!
//! let mut tracker = AnchorTracker::new();
//! let mut canvas = Canvas(0);
//!
//! // Hovering near the top edge selects the top-center anchor.
//! let over_anchor = PointerUpdate::over(Point::new(50.0, 5.0), 1);
//! tracker.update(&Host, &mut canvas, &over_anchor, true, None);
//! assert_eq!(tracker.current_point(), Some(Point::new(50.0, 0.0)));
//!
//! // Drifting into the interior clears the selection; the icons stay up
//! // because the node keeps the focus.
//! let interior = PointerUpdate::over(Point::new(50.0, 50.0), 1);
//! tracker.update(&Host, &mut canvas, &interior, true, None);
//! assert!(tracker.current_point().is_none());
//! assert!(tracker.icons().is_some());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod host;
pub mod tracker;

pub use tracker::AnchorTracker;
