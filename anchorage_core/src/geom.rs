// Copyright 2026 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tolerance squares, icon bounds, and the unit-square connection solver.

use kurbo::{Point, Rect, Size};

use crate::types::{Anchor, IconImage, ViewState};

/// Axis-aligned square of half-extent `tol` centered on `p`.
pub fn tolerance_square(p: Point, tol: f64) -> Rect {
    Rect::from_center_size(p, Size::new(2.0 * tol, 2.0 * tol))
}

/// Inclusive overlap test; touching edges count as intersecting.
pub fn rects_intersect(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Bounds for an icon image centered on a connection point.
///
/// The top-left corner is rounded to the nearest integer pixel so icons stay
/// crisp regardless of where the connection point lands.
pub fn icon_bounds(image: &IconImage, point: Point) -> Rect {
    let x = round_to_pixel(point.x - image.width / 2.0);
    let y = round_to_pixel(point.y - image.height / 2.0);
    Rect::new(x, y, x + image.width, y + image.height)
}

/// Resolve an anchor against a view state by scaling its unit-square
/// position into the bounds and applying the pixel offset.
///
/// This is the solver hosts can delegate to when they implement neither
/// perimeter projection nor rotation-aware placement.
pub fn unit_connection_point(state: &ViewState, anchor: &Anchor) -> Point {
    let b = state.bounds;
    Point::new(
        b.x0 + anchor.pos.x * b.width() + anchor.offset.x,
        b.y0 + anchor.pos.y * b.height() + anchor.offset.y,
    )
}

/// Round half-up (toward positive infinity) without `std` float intrinsics.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Pixel coordinates fit comfortably in i64."
)]
fn round_to_pixel(v: f64) -> f64 {
    let shifted = v + 0.5;
    let truncated = shifted as i64 as f64;
    // `as i64` truncates toward zero; compensate to get a floor for negatives.
    if shifted < 0.0 && truncated > shifted {
        truncated - 1.0
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    #[test]
    fn tolerance_square_is_centered() {
        let r = tolerance_square(Point::new(10.0, 20.0), 4.0);
        assert_eq!(r, Rect::new(6.0, 16.0, 14.0, 24.0));
    }

    #[test]
    fn rects_intersect_is_inclusive_at_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rects_intersect(a, Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(rects_intersect(a, Rect::new(5.0, 5.0, 7.0, 7.0)));
        assert!(!rects_intersect(a, Rect::new(10.1, 0.0, 20.0, 10.0)));
        assert!(!rects_intersect(a, Rect::new(0.0, -5.0, 10.0, -0.1)));
    }

    #[test]
    fn icon_bounds_rounds_top_left_half_up() {
        let image = IconImage::new("", 5.0, 5.0);
        // 47.5 rounds up to 48; -2.5 rounds up to -2 (toward positive infinity).
        let b = icon_bounds(&image, Point::new(50.0, 0.0));
        assert_eq!(b, Rect::new(48.0, -2.0, 53.0, 3.0));

        let b = icon_bounds(&image, Point::new(50.4, 50.6));
        assert_eq!(b.origin(), Point::new(48.0, 48.0));
        assert_eq!(b.size(), Size::new(5.0, 5.0));
    }

    #[test]
    fn icon_bounds_preserves_image_size() {
        let image = IconImage::new("arrow.svg", 16.0, 12.0);
        let b = icon_bounds(&image, Point::new(-3.3, -7.8));
        assert_eq!(b.size(), Size::new(16.0, 12.0));
        assert_eq!(b.origin(), Point::new(-11.0, -14.0));
    }

    #[test]
    fn unit_connection_point_scales_and_offsets() {
        let state = ViewState::new(Rect::new(10.0, 20.0, 110.0, 70.0));
        let center = Anchor::new(Point::new(0.5, 0.5));
        assert_eq!(unit_connection_point(&state, &center), Point::new(60.0, 45.0));

        let nudged = Anchor::new(Point::new(1.0, 0.0)).with_offset(Vec2::new(-5.0, 2.0));
        assert_eq!(unit_connection_point(&state, &nudged), Point::new(105.0, 22.0));
    }
}
