// Copyright 2026 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchorage Core: shared vocabulary for diagram anchor tracking.
//!
//! Anchorage Core is the bottom layer of a small stack for interactive
//! edge-connection affordances on diagram canvases.
//!
//! - Raw host descriptors are normalized into unit-square [`Anchor`](types::Anchor) values.
//! - [`ViewState`](types::ViewState) and [`IconStyle`](types::IconStyle) carry the geometry and
//!   styling exchanged with the host canvas.
//! - [`geom`] holds the pure tolerance/bounds math used by proximity hit testing.
//!
//! Higher layers (the tracker, a connect handler) build on these types; this
//! crate carries no state and performs no rendering.
//!
//! # Example
//!
//! ```
//! use anchorage_core::geom::{icon_bounds, unit_connection_point};
//! use anchorage_core::types::{Anchor, IconImage, ViewState};
//! use kurbo::{Point, Rect};
//!
//! let state = ViewState::new(Rect::new(0.0, 0.0, 100.0, 100.0));
//! let anchor = Anchor::new(Point::new(0.5, 0.0));
//! let point = unit_connection_point(&state, &anchor);
//! assert_eq!(point, Point::new(50.0, 0.0));
//!
//! // A default 5×5 icon centered on the point, snapped to whole pixels.
//! let bounds = icon_bounds(&IconImage::default(), point);
//! assert_eq!(bounds, Rect::new(48.0, -2.0, 53.0, 3.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod geom;
pub mod types;
