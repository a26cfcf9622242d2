// Copyright 2026 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core value types: anchors, view state, icon styling, and pointer events.

use alloc::string::String;
use kurbo::{Point, Rect, Vec2};

/// Default half-extent in pixels of the tolerance square around the pointer.
pub const DEFAULT_TOLERANCE: f64 = 4.0;

/// Default induction radius in pixels.
///
/// Within this distance of an icon center the anchor is selected even when
/// the pointer does not overlap the icon's tolerance rectangle.
pub const DEFAULT_INDUCTION_RADIUS: f64 = 10.0;

/// Normalized descriptor of a valid connection location on a node.
///
/// `pos` lives in the unit square of the node's bounds: `(0, 0)` is the
/// top-left corner, `(1, 1)` the bottom-right. `offset` is an absolute pixel
/// offset applied after scaling into the bounds. With `perimeter` set, the
/// host's geometry solver should project the resolved point onto the node's
/// perimeter.
///
/// Anchors are immutable value objects once resolved for a focus session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anchor {
    /// Position in the unit square of the node's bounds.
    pub pos: Point,
    /// Absolute pixel offset added to the scaled position.
    pub offset: Vec2,
    /// Whether the resolved point should be projected onto the perimeter.
    pub perimeter: bool,
}

impl Anchor {
    /// Create an anchor at a unit-square position with no offset.
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            offset: Vec2::ZERO,
            perimeter: false,
        }
    }

    /// Return a copy with the given pixel offset.
    pub const fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Return a copy with perimeter projection enabled.
    pub const fn on_perimeter(mut self) -> Self {
        self.perimeter = true;
        self
    }
}

/// Raw anchor output from the host, prior to normalization.
///
/// Hosts that already speak [`Anchor`] pass values through unchanged; bare
/// positions are wrapped with no offset and no perimeter projection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AnchorDescriptor {
    /// A bare unit-square position.
    Position(Point),
    /// An already-normalized anchor.
    Anchor(Anchor),
}

impl AnchorDescriptor {
    /// Normalize into an [`Anchor`] value.
    pub const fn into_anchor(self) -> Anchor {
        match self {
            Self::Position(pos) => Anchor::new(pos),
            Self::Anchor(anchor) => anchor,
        }
    }
}

impl From<Anchor> for AnchorDescriptor {
    fn from(anchor: Anchor) -> Self {
        Self::Anchor(anchor)
    }
}

impl From<Point> for AnchorDescriptor {
    fn from(pos: Point) -> Self {
        Self::Position(pos)
    }
}

/// Resolved on-screen geometry for a cell.
///
/// Recomputed by the host whenever the cell's rendered geometry changes; the
/// tracker never caches one across a view transform without re-resolving.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewState {
    /// World-space bounds of the rendered cell.
    pub bounds: Rect,
}

impl ViewState {
    /// Wrap world-space bounds.
    pub const fn new(bounds: Rect) -> Self {
        Self { bounds }
    }
}

/// Image reference used to draw an anchor icon.
#[derive(Clone, Debug, PartialEq)]
pub struct IconImage {
    /// Source identifier understood by the rendering surface (URL, sprite
    /// key, ...). Surfaces map an empty source to their built-in point glyph.
    pub source: String,
    /// Intrinsic width in pixels.
    pub width: f64,
    /// Intrinsic height in pixels.
    pub height: f64,
}

impl IconImage {
    /// Create an image reference with intrinsic pixel size.
    pub fn new(source: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            source: source.into(),
            width,
            height,
        }
    }
}

impl Default for IconImage {
    /// The built-in 5×5 point glyph.
    fn default() -> Self {
        Self::new("", 5.0, 5.0)
    }
}

/// Pointer cursor requested while hovering an anchor icon.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Cursor {
    /// Inherit the canvas cursor.
    #[default]
    Inherit,
    /// Hand/pointer cursor.
    Pointer,
    /// Crosshair cursor.
    Crosshair,
}

/// Styling triple for one anchor icon, produced by the host's styling
/// strategy for a given (anchor, point, cell).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconStyle {
    /// Image to draw.
    pub image: IconImage,
    /// Cursor shown while the pointer is over the icon.
    pub cursor: Cursor,
    /// Extra class applied to the icon shape; may be empty.
    pub class_name: String,
}

/// An owned icon shape handle plus the bounds it was last positioned at.
///
/// One per anchor in the active set, index-aligned with the anchor and
/// connection-point sequences owned by the tracker.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IconInstance<I> {
    /// Surface handle for the icon shape.
    pub shape: I,
    /// World-space bounds the icon occupies.
    pub bounds: Rect,
}

bitflags::bitflags! {
    /// Modifier flags carried by a pointer update.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct EventFlags: u8 {
        /// Keep the current focus; suppresses focus re-evaluation.
        const KEEP_FOCUS = 0b0000_0001;
        /// The event is ignored by policy; transient state is cleared.
        const IGNORED    = 0b0000_0010;
    }
}

/// A pointer-move sample in graph coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerUpdate<K> {
    /// Pointer position in graph coordinates.
    pub pos: Point,
    /// Cell reported under the pointer by the host's event dispatch, if any.
    pub cell: Option<K>,
    /// Modifier flags.
    pub flags: EventFlags,
}

impl<K> PointerUpdate<K> {
    /// A pointer sample over empty canvas.
    pub const fn at(pos: Point) -> Self {
        Self {
            pos,
            cell: None,
            flags: EventFlags::empty(),
        }
    }

    /// A pointer sample over the given cell.
    pub const fn over(pos: Point, cell: K) -> Self {
        Self {
            pos,
            cell: Some(cell),
            flags: EventFlags::empty(),
        }
    }

    /// Return a copy with the given flags set in addition to existing ones.
    #[must_use]
    pub fn with_flags(mut self, flags: EventFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Whether the keep-focus modifier is active.
    pub fn keeps_focus(&self) -> bool {
        self.flags.contains(EventFlags::KEEP_FOCUS)
    }

    /// Whether the event is ignored by policy.
    pub fn is_ignored(&self) -> bool {
        self.flags.contains(EventFlags::IGNORED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_position_normalizes_with_defaults() {
        let anchor = AnchorDescriptor::Position(Point::new(0.5, 1.0)).into_anchor();
        assert_eq!(anchor.pos, Point::new(0.5, 1.0));
        assert_eq!(anchor.offset, Vec2::ZERO);
        assert!(!anchor.perimeter);
    }

    #[test]
    fn normalized_anchor_passes_through_unchanged() {
        let original = Anchor::new(Point::new(1.0, 0.5))
            .with_offset(Vec2::new(-2.0, 3.0))
            .on_perimeter();
        let anchor = AnchorDescriptor::from(original).into_anchor();
        assert_eq!(anchor, original);
    }

    #[test]
    fn pointer_update_flag_helpers() {
        let plain: PointerUpdate<u32> = PointerUpdate::at(Point::ZERO);
        assert!(!plain.keeps_focus());
        assert!(!plain.is_ignored());

        let keep = plain.with_flags(EventFlags::KEEP_FOCUS);
        assert!(keep.keeps_focus());
        assert!(!keep.is_ignored());

        let both = keep.with_flags(EventFlags::IGNORED);
        assert!(both.keeps_focus());
        assert!(both.is_ignored());
    }

    #[test]
    fn default_icon_image_is_point_glyph() {
        let image = IconImage::default();
        assert!(image.source.is_empty());
        assert_eq!((image.width, image.height), (5.0, 5.0));
    }
}
