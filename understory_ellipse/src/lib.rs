// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ellipse --heading-base-level=0

//! Understory Ellipse: Kurbo-native projection of ring slots onto an ellipse.
//!
//! Understory Ellipse is the geometric building block behind elliptical carousels and orbit menus.
//!
//! - Maps a logical slot offset (the distance of an item from the focused item) to a perceptual angle.
//! - Projects an item's intrinsic size onto the ellipse, producing a screen rectangle and a z-order.
//!
//! Both steps are pure functions of their inputs.
//! There is no hidden state, so projections for different items can be computed in any order.
//!
//! ## Angles
//!
//! Slots are spaced evenly around the ring and then redistributed by a power law
//! (see [`angle_for`]). With an exponent below `1.0`, slots near the front of the ring are
//! spread apart and slots near the back are compressed, which matches the apparent density of
//! items seen in perspective. An exponent of exactly `1.0` keeps linear spacing.
//!
//! Angles are in radians in `(-π, π]`. Angle `0` is the front of the ellipse (nearest the viewer).
//!
//! ## Depth
//!
//! The depth coefficient `s` (see [`depth_coefficient`]) is `1` at the front and `ratio_min` at the
//! back. Item size and z-order are both monotonic in `s`, so an item nearer the front is never
//! stacked below an item further back. Items at symmetric angles tie, which is visually equivalent.
//!
//! ## Not a renderer
//!
//! This crate computes target rectangles and z-indices. Applying them, animating towards them,
//! and drawing are left to the caller.
//!
//! This crate is `no_std` and does not allocate. Enable the `libm` feature instead of `std` for
//! targets without the standard library.
//!
//! # Example
//!
//! ```rust
//! use understory_ellipse::{EllipseGeometry, ProjectionParams, angle_for, delta_index, project};
//! use kurbo::{Point, Size};
//!
//! let geometry = EllipseGeometry::new(Point::new(400.0, 60.0), 300.0, 50.0);
//! let params = ProjectionParams { ratio_min: 0.4, power_exponent: 1.0, ..Default::default() };
//!
//! // Two items, focus on the first one.
//! let count = 2;
//! let back = delta_index(1, 0, count);
//! let theta = angle_for(back as isize, count, params.power_exponent);
//! assert_eq!(theta, core::f64::consts::PI);
//!
//! let t = project(Size::new(100.0, 50.0), theta, count, &geometry, &params);
//! assert_eq!(t.size, Size::new(40.0, 20.0));
//!
//! // The focused item is drawn on top.
//! let front = project(Size::new(100.0, 50.0), 0.0, count, &geometry, &params);
//! assert!(front.depth > t.depth);
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod angle;
pub mod project;
pub mod types;

pub use angle::{angle_for, delta_index};
pub use project::{depth_coefficient, project};
pub use types::{EllipseGeometry, ProjectedTransform, ProjectionParams};
