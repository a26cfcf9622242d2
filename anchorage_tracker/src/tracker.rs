// Copyright 2026 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracker implementation: focus lifecycle, proximity hit-testing, and the
//! hover highlight.
//!
//! ## Overview
//!
//! [`AnchorTracker`] watches the node under the pointer, materializes one
//! icon per candidate anchor, and keeps the closest anchor highlighted while
//! the pointer stays near it.
//!
//! ## Focus retention
//!
//! Once a node is focused, pointer moves inside its focus region (node
//! bounds unioned with all icon bounds, grown by the tolerance) do not
//! re-resolve anchors. This keeps icon identities stable and avoids flicker
//! when the pointer crosses between the node and its icons.
//!
//! ## Selection
//!
//! Distances are compared squared; the strict `<` comparison means the first
//! of two equidistant candidates in anchor order wins. An icon is a
//! candidate when the pointer is within the induction radius of its center,
//! or its bounds overlap the pointer's tolerance square, or (while dragging
//! with a target-point override) they overlap the target's tolerance square.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use anchorage_core::geom::{icon_bounds, rects_intersect, tolerance_square};
use anchorage_core::types::{
    Anchor, AnchorDescriptor, DEFAULT_INDUCTION_RADIUS, DEFAULT_TOLERANCE, IconInstance,
    PointerUpdate, ViewState,
};

use crate::host::{AnchorView, CellModel, Surface, ViewEvent};

/// Tracks anchor points on the node under the pointer and highlights the
/// closest match.
///
/// ## Usage
///
/// - Forward pointer moves through [`AnchorTracker::update`].
/// - Forward model/view change notifications through
///   [`AnchorTracker::on_view_event`].
/// - Read the selection via [`AnchorTracker::current_anchor`] and
///   [`AnchorTracker::current_point`] when a connect handler needs a
///   terminal.
/// - Call [`AnchorTracker::dispose`] when the canvas goes away.
///
/// `K` is the host's cell key, `I` the surface's shape handle. The tracker
/// owns every shape it creates and is inert after disposal.
pub struct AnchorTracker<K, I> {
    enabled: bool,
    attached: bool,
    tolerance: f64,
    induction_radius: f64,
    focus: Option<K>,
    focus_state: Option<ViewState>,
    focus_region: Option<Rect>,
    // Parallel sequences: either all None or all Some with equal length and
    // index-aligned meaning. Rebuilt wholesale on focus change, mutated in
    // place (same length) on geometry refresh.
    anchors: Option<Vec<Anchor>>,
    points: Option<Vec<Point>>,
    icons: Option<Vec<IconInstance<I>>>,
    highlight: Option<I>,
    current_anchor: Option<Anchor>,
    current_point: Option<Point>,
}

impl<K: core::fmt::Debug, I> core::fmt::Debug for AnchorTracker<K, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnchorTracker")
            .field("enabled", &self.enabled)
            .field("attached", &self.attached)
            .field("focus", &self.focus)
            .field("current_anchor", &self.current_anchor)
            .field("current_point", &self.current_point)
            .finish_non_exhaustive()
    }
}

impl<K, I> Default for AnchorTracker<K, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, I> AnchorTracker<K, I> {
    /// Create an enabled tracker with default tolerance and induction radius.
    pub fn new() -> Self {
        Self {
            enabled: true,
            attached: true,
            tolerance: DEFAULT_TOLERANCE,
            induction_radius: DEFAULT_INDUCTION_RADIUS,
            focus: None,
            focus_state: None,
            focus_region: None,
            anchors: None,
            points: None,
            icons: None,
            highlight: None,
            current_anchor: None,
            current_point: None,
        }
    }

    /// Whether the tracker reacts to pointer updates.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the tracker. Disabling does not clear state by
    /// itself; the next update does.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the tracker is still attached to event delivery.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Half-extent of the tolerance square, in pixels.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Set the tolerance. Takes effect on the next update or focus.
    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.tolerance = tolerance;
    }

    /// Distance within which an anchor is selected without icon overlap.
    pub fn induction_radius(&self) -> f64 {
        self.induction_radius
    }

    /// Set the induction radius.
    pub fn set_induction_radius(&mut self, radius: f64) {
        self.induction_radius = radius;
    }

    /// The currently selected anchor, if the pointer is close enough to one.
    pub fn current_anchor(&self) -> Option<Anchor> {
        self.current_anchor
    }

    /// Resolved connection point for the selected anchor.
    pub fn current_point(&self) -> Option<Point> {
        self.current_point
    }

    /// The node whose anchors are currently shown.
    pub fn tracked_cell(&self) -> Option<&K> {
        self.focus.as_ref()
    }

    /// Cached view state of the tracked node.
    pub fn tracked_state(&self) -> Option<&ViewState> {
        self.focus_state.as_ref()
    }

    /// The region within which pointer moves keep the current focus.
    pub fn focus_region(&self) -> Option<Rect> {
        self.focus_region
    }

    /// The cell that pointer events on icon shapes must be reported against.
    ///
    /// Surfaces resolve this at event time, never at icon creation: the
    /// tracked node can change between creating an icon and a later pointer
    /// event on it.
    pub fn redirect_target(&self) -> Option<&K> {
        self.focus.as_ref()
    }

    /// The active anchor set, in resolver order.
    pub fn anchor_set(&self) -> Option<&[Anchor]> {
        self.anchors.as_deref()
    }

    /// Connection points index-aligned with [`AnchorTracker::anchor_set`].
    pub fn anchor_points(&self) -> Option<&[Point]> {
        self.points.as_deref()
    }

    /// Icon instances index-aligned with [`AnchorTracker::anchor_set`].
    pub fn icons(&self) -> Option<&[IconInstance<I>]> {
        self.icons.as_deref()
    }
}

impl<K: Copy + Eq, I: Copy> AnchorTracker<K, I> {
    /// Process a pointer update.
    ///
    /// `is_source` selects the anchor direction (edge source vs. target) and
    /// `target` is an optional target-point override supplied while dragging
    /// an edge endpoint. Re-derives the current anchor from scratch on every
    /// call; a selection is never carried over from a previous event.
    pub fn update<H, S>(
        &mut self,
        host: &H,
        surface: &mut S,
        ev: &PointerUpdate<K>,
        is_source: bool,
        target: Option<Point>,
    ) where
        H: CellModel<K> + AnchorView<K>,
        S: Surface<ShapeId = I>,
    {
        if !self.attached {
            return;
        }
        if self.enabled && !ev.is_ignored() {
            let grid = tolerance_square(target.unwrap_or(ev.pos), self.tolerance);
            let mouse = tolerance_square(ev.pos, self.tolerance);
            let cell = self.cell_for_event(host, ev, target);
            let state = cell.and_then(|c| host.view_state(&c).map(|st| (c, st)));
            let under = state.as_ref().map(|(c, _)| *c);

            // Focus retention: a keep-focus modifier, or a tracked vertex
            // whose focus region still covers the pointer square with
            // nothing else underneath, suppresses re-resolution. The tracked
            // cell is checked for being a vertex but not for connectability.
            let retained = ev.keeps_focus()
                || (self.focus_region.is_some_and(|r| rects_intersect(r, mouse))
                    && under.is_none()
                    && self.focus.as_ref().is_some_and(|f| host.is_node(f)));
            if !retained && under != self.focus {
                self.focus = None;
                self.focus_state = None;
                self.focus_region = None;
                self.set_focus(host, surface, state, is_source);
            }

            self.current_anchor = None;
            self.current_point = None;
            let mut min_dist_sq: Option<f64> = None;
            let mut selected: Option<usize> = None;

            if let (Some(icons), Some(anchors), Some(points)) =
                (&self.icons, &self.anchors, &self.points)
                && (under.is_none() || under == self.focus)
            {
                let radius_sq = self.induction_radius * self.induction_radius;
                for (i, icon) in icons.iter().enumerate() {
                    let dist_sq = ev.pos.distance_squared(icon.bounds.center());
                    let candidate = dist_sq < radius_sq
                        || rects_intersect(icon.bounds, mouse)
                        || (target.is_some() && rects_intersect(icon.bounds, grid));
                    // Strict `<` keeps the first of two equidistant icons.
                    if candidate && min_dist_sq.is_none_or(|m| dist_sq < m) {
                        min_dist_sq = Some(dist_sq);
                        selected = Some(i);
                        self.current_anchor = Some(anchors[i]);
                        self.current_point = Some(points[i]);
                        if self.highlight.is_none() {
                            self.highlight = Some(surface.create_highlight(icon.bounds));
                        }
                    }
                }
                if let (Some(i), Some(hl)) = (selected, self.highlight) {
                    surface.move_highlight(hl, icons[i].bounds);
                }
            }

            if self.current_anchor.is_none() {
                self.destroy_highlight(surface);
            }
        } else {
            // Disabled or policy-ignored: transient state goes, the icon
            // arrays stay.
            self.current_anchor = None;
            self.current_point = None;
            self.focus = None;
            self.focus_state = None;
        }
    }

    /// Handle a model or view change notification.
    ///
    /// Resets when the pointer left the canvas or the tracked node is no
    /// longer rendered; redraws otherwise.
    pub fn on_view_event<H, S>(&mut self, host: &H, surface: &mut S, event: ViewEvent)
    where
        H: CellModel<K> + AnchorView<K>,
        S: Surface<ShapeId = I>,
    {
        if !self.attached {
            return;
        }
        match event {
            ViewEvent::PointerLeftCanvas => self.reset(surface),
            _ => {
                if self.focus.as_ref().is_some_and(|f| host.view_state(f).is_none()) {
                    self.reset(surface);
                } else {
                    self.redraw(host, surface);
                }
            }
        }
    }

    /// Refresh geometry for the existing anchor set after the view moved.
    ///
    /// No-op unless a full session is active. Never re-resolves anchors and
    /// never changes the current selection; it only refreshes connection
    /// points, icon bounds, and the focus region.
    pub fn redraw<H, S>(&mut self, host: &H, surface: &mut S)
    where
        H: CellModel<K> + AnchorView<K>,
        S: Surface<ShapeId = I>,
    {
        let (Some(focus), Some(anchors), Some(points), Some(icons)) = (
            &self.focus,
            &self.anchors,
            &mut self.points,
            &mut self.icons,
        ) else {
            return;
        };
        let Some(state) = host.view_state(focus) else {
            return;
        };
        debug_assert!(
            anchors.len() == points.len() && points.len() == icons.len(),
            "anchor/point/icon sequences must stay index-aligned"
        );
        let mut region = state.bounds;
        for i in 0..anchors.len() {
            let point = host.connection_point(&state, &anchors[i]);
            let style = host.icon_style(&anchors[i], point, focus);
            let bounds = icon_bounds(&style.image, point);
            surface.update_icon(icons[i].shape, &style, bounds);
            icons[i].bounds = bounds;
            region = region.union(bounds);
            points[i] = point;
        }
        self.focus_state = Some(state);
        self.focus_region = Some(region);
    }

    /// Clear all session state and destroy every owned shape. Idempotent.
    pub fn reset<S>(&mut self, surface: &mut S)
    where
        S: Surface<ShapeId = I>,
    {
        self.destroy_icons(surface);
        self.destroy_highlight(surface);
        self.focus = None;
        self.focus_state = None;
        self.focus_region = None;
        self.current_anchor = None;
        self.current_point = None;
    }

    /// Tear down the tracker: reset state and detach from event delivery.
    ///
    /// The host must stop forwarding events after this call; every entry
    /// point is inert regardless. Safe to call twice; the second call is a
    /// no-op.
    pub fn dispose<S>(&mut self, surface: &mut S)
    where
        S: Surface<ShapeId = I>,
    {
        if !self.attached {
            return;
        }
        self.reset(surface);
        self.attached = false;
    }

    /// Resolve the cell a pointer event applies to.
    ///
    /// Falls back to a hit test at the target override when the event
    /// carries no cell, promotes to a connectable rendered parent while the
    /// current cell is not connectable, and drops locked cells entirely.
    fn cell_for_event<H>(&self, host: &H, ev: &PointerUpdate<K>, target: Option<Point>) -> Option<K>
    where
        H: CellModel<K> + AnchorView<K>,
    {
        let mut cell = ev.cell;
        if cell.is_none()
            && let Some(p) = target
            && p != ev.pos
        {
            cell = host.cell_at(p);
        }
        while let Some(c) = cell {
            if host.is_connectable(&c) {
                break;
            }
            match host.parent_of(&c) {
                Some(p) if host.view_state(&p).is_some() && host.is_connectable(&p) => {
                    cell = Some(p);
                }
                _ => break,
            }
        }
        match cell {
            Some(c) if host.is_locked(&c) => None,
            other => other,
        }
    }

    /// Ordered candidate anchors for a cell.
    ///
    /// `None` when the tracker is disabled, the cell is policy-ignored or
    /// not connectable, or the host reports no candidates. Deterministic for
    /// unchanged host state, so icon indices stay stable across redraws.
    fn resolve_anchors<H>(&self, host: &H, cell: &K, is_source: bool) -> Option<Vec<Anchor>>
    where
        H: CellModel<K> + AnchorView<K>,
    {
        if !self.enabled || host.is_ignored(cell, is_source) || !host.is_connectable(cell) {
            return None;
        }
        let raw = host.anchors(cell, is_source)?;
        if raw.is_empty() {
            return None;
        }
        Some(raw.into_iter().map(AnchorDescriptor::into_anchor).collect())
    }

    /// Focus a candidate `(cell, view-state)` pair.
    ///
    /// With a non-empty anchor set: rebuilds the parallel sequences, one
    /// icon per anchor, and grows the accumulated focus region by the
    /// tolerance. Without one: destroys icons and highlight and leaves the
    /// tracked node clear.
    fn set_focus<H, S>(
        &mut self,
        host: &H,
        surface: &mut S,
        state: Option<(K, ViewState)>,
        is_source: bool,
    ) where
        H: CellModel<K> + AnchorView<K>,
        S: Surface<ShapeId = I>,
    {
        let resolved = state.and_then(|(cell, st)| {
            self.resolve_anchors(host, &cell, is_source)
                .map(|anchors| (cell, st, anchors))
        });
        match resolved {
            Some((cell, st, anchors)) => {
                self.destroy_icons(surface);
                self.focus = Some(cell);
                self.focus_state = Some(st);
                let mut region = st.bounds;
                let mut points = Vec::with_capacity(anchors.len());
                let mut icons = Vec::with_capacity(anchors.len());
                for anchor in &anchors {
                    let point = host.connection_point(&st, anchor);
                    let style = host.icon_style(anchor, point, &cell);
                    let bounds = icon_bounds(&style.image, point);
                    let shape = surface.create_icon(&style, bounds);
                    region = region.union(bounds);
                    icons.push(IconInstance { shape, bounds });
                    points.push(point);
                }
                self.focus_region = Some(region.inflate(self.tolerance, self.tolerance));
                self.anchors = Some(anchors);
                self.points = Some(points);
                self.icons = Some(icons);
            }
            None => {
                self.destroy_icons(surface);
                self.destroy_highlight(surface);
            }
        }
    }

    fn destroy_icons<S>(&mut self, surface: &mut S)
    where
        S: Surface<ShapeId = I>,
    {
        if let Some(icons) = self.icons.take() {
            for icon in icons {
                surface.remove(icon.shape);
            }
        }
        self.points = None;
        self.anchors = None;
    }

    fn destroy_highlight<S>(&mut self, surface: &mut S)
    where
        S: Surface<ShapeId = I>,
    {
        if let Some(highlight) = self.highlight.take() {
            surface.remove(highlight);
        }
    }
}
