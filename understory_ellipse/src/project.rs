// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of an item onto the ellipse.
//!
//! ## Overview
//!
//! Given the angle of an item (see [`angle_for`](crate::angle_for)), the projector computes:
//!
//! - the depth coefficient `s = 1 + ((1 - ratio_min) / 2) · (cos θ - 1)`,
//! - the scaled size `intrinsic · s`,
//! - the z-order `base_z_index + s · 2 · count`,
//! - the top-left corner, offset by half the scaled width so the item's horizontal center sits on
//!   the ellipse at `θ + offset_angle`.
//!
//! Sizes, coordinates and depth are truncated towards zero to whole units, so repeated passes
//! with identical inputs give bit-identical results and items snap to whole pixels.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size};

use crate::types::{EllipseGeometry, ProjectedTransform, ProjectionParams};

/// Depth coefficient of an item at angle `theta`.
///
/// Exactly `1.0` at the front (`θ = 0`) and exactly `ratio_min` at the back (`θ = ±π`).
/// Monotonic in `cos θ`.
pub fn depth_coefficient(theta: f64, ratio_min: f64) -> f64 {
    // Same curve as `1 + (1 - r)/2 · (cos θ - 1)`, arranged so both end points round exactly.
    ratio_min + (1.0 - ratio_min) * (1.0 + theta.cos()) / 2.0
}

/// Project an item of size `intrinsic` at angle `theta` on a ring of `count` items.
pub fn project(
    intrinsic: Size,
    theta: f64,
    count: usize,
    geometry: &EllipseGeometry,
    params: &ProjectionParams,
) -> ProjectedTransform {
    let s = depth_coefficient(theta, params.ratio_min);
    let size = Size::new((intrinsic.width * s).trunc(), (intrinsic.height * s).trunc());

    #[allow(
        clippy::cast_precision_loss,
        reason = "Ring sizes are small integers."
    )]
    let stack = s * 2.0 * count as f64;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Z-indices are whole numbers; the fractional part is dropped like CSS integer z-index."
    )]
    let depth = (f64::from(params.base_z_index) + stack).trunc() as i32;

    let on_ellipse = geometry.point_at(theta + params.offset_angle);
    let origin = Point::new(
        (on_ellipse.x - size.width / 2.0).trunc(),
        on_ellipse.y.trunc(),
    );

    ProjectedTransform {
        origin,
        size,
        depth,
    }
}
