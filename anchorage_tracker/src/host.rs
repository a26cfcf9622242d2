// Copyright 2026 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side contracts: model queries, view geometry, styling, and the
//! rendering surface.
//!
//! ## Overview
//!
//! The tracker never talks to a DOM, a scene graph, or a graph model
//! directly. Everything it needs from the canvas is expressed through the
//! traits in this module, and everything it draws goes through [`Surface`].
//! All failure modes are `None` results; none of these contracts report
//! errors.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use anchorage_core::types::{Anchor, AnchorDescriptor, IconStyle, ViewState};

/// Topology and policy queries against the graph model.
///
/// `K` is a small copyable cell key (an id or generational handle); the
/// tracker holds keys, never model data.
pub trait CellModel<K> {
    /// Whether the cell is a node (as opposed to an edge or group).
    fn is_node(&self, cell: &K) -> bool;

    /// Whether edges may terminate on the cell.
    fn is_connectable(&self, cell: &K) -> bool;

    /// Whether the cell is locked against interaction.
    fn is_locked(&self, cell: &K) -> bool;

    /// Parent of the cell, or `None` at the root.
    fn parent_of(&self, cell: &K) -> Option<K>;

    /// Topmost cell at a graph-space position, if any.
    fn cell_at(&self, pos: Point) -> Option<K>;

    /// Whether the cell is excluded from anchor tracking by policy.
    fn is_ignored(&self, _cell: &K, _is_source: bool) -> bool {
        false
    }
}

/// View-side queries: render state, candidate anchors, geometry solving,
/// and icon styling.
pub trait AnchorView<K> {
    /// Current render state of the cell, or `None` if it is not rendered.
    fn view_state(&self, cell: &K) -> Option<ViewState>;

    /// Candidate anchors for the cell in the given direction (`is_source`
    /// distinguishes edge-source from edge-target lookups).
    ///
    /// `None` or an empty list means the cell offers no anchors. Must be
    /// deterministic for unchanged host state: icon indices derived from the
    /// returned order stay live across geometry refreshes.
    fn anchors(&self, cell: &K, is_source: bool) -> Option<Vec<AnchorDescriptor>>;

    /// Resolve an anchor to a pixel-space connection point.
    ///
    /// Called repeatedly during geometry refresh; must be consistent for
    /// unchanged inputs. [`anchorage_core::geom::unit_connection_point`] is a
    /// suitable implementation when no perimeter projection is needed.
    fn connection_point(&self, state: &ViewState, anchor: &Anchor) -> Point;

    /// Styling for the icon shown at `point` for `anchor` on `cell`.
    fn icon_style(&self, _anchor: &Anchor, _point: Point, _cell: &K) -> IconStyle {
        IconStyle::default()
    }
}

/// Rendering primitives for anchor icons and the hover highlight.
///
/// Shapes are addressed by a small copyable handle chosen by the surface
/// (generational keys work well). The tracker owns every handle it receives
/// and removes each shape it created on reset and disposal.
///
/// ## Event redirection
///
/// Pointer events hitting an icon shape must be reported against
/// [`AnchorTracker::redirect_target`](crate::tracker::AnchorTracker::redirect_target)
/// resolved at event time, not against a cell captured at icon creation:
/// the tracked node can change between creating an icon and a later event
/// on it.
pub trait Surface {
    /// Handle addressing a shape created by this surface.
    type ShapeId: Copy + core::fmt::Debug;

    /// Create an anchor icon at `bounds`, attached behind sibling content in
    /// the decorator pane.
    fn create_icon(&mut self, style: &IconStyle, bounds: Rect) -> Self::ShapeId;

    /// Re-apply styling and bounds to an existing icon and trigger a redraw.
    fn update_icon(&mut self, id: Self::ShapeId, style: &IconStyle, bounds: Rect);

    /// Create the hover highlight at `bounds` in the overlay pane.
    fn create_highlight(&mut self, bounds: Rect) -> Self::ShapeId;

    /// Move the hover highlight to `bounds` and trigger a redraw.
    fn move_highlight(&mut self, id: Self::ShapeId, bounds: Rect);

    /// Dispose a shape previously created by this surface.
    fn remove(&mut self, id: Self::ShapeId);
}

/// Change notifications forwarded by the host.
///
/// Every variant except [`PointerLeftCanvas`](ViewEvent::PointerLeftCanvas)
/// triggers reset-or-redraw in the tracker: reset when the tracked node is
/// no longer rendered, redraw otherwise. `PointerLeftCanvas` always resets.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ViewEvent {
    /// The structural root of the displayed model changed.
    RootChanged,
    /// The model mutated (cells added, removed, or edited).
    ModelChanged,
    /// The view scale changed.
    Scaled,
    /// The view translation changed.
    Translated,
    /// Scale and translation changed together.
    ScaledAndTranslated,
    /// The pointer left the canvas container.
    PointerLeftCanvas,
}
