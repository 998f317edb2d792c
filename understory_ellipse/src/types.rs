// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for projection: ellipse geometry, projection parameters and projected transforms.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

/// The ellipse items are laid out on, in container coordinates.
///
/// Angle `0` sits at `center + (0, y_radius)`, the bottom of the ellipse, which reads as the
/// front of the ring. Positive angles move towards `+x`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipseGeometry {
    /// Center of the ellipse.
    pub center: Point,
    /// Horizontal semi-axis. Never negative.
    pub x_radius: f64,
    /// Vertical semi-axis. Never negative.
    pub y_radius: f64,
}

impl EllipseGeometry {
    /// Create a geometry, clamping negative radii to zero.
    pub fn new(center: Point, x_radius: f64, y_radius: f64) -> Self {
        debug_assert!(
            !x_radius.is_nan() && !y_radius.is_nan(),
            "ellipse radii must not be NaN"
        );
        Self {
            center,
            x_radius: x_radius.max(0.0),
            y_radius: y_radius.max(0.0),
        }
    }

    /// Point on the ellipse at angle `theta` (radians).
    pub fn point_at(&self, theta: f64) -> Point {
        let (sin, cos) = theta.sin_cos();
        Point::new(
            self.center.x + self.x_radius * sin,
            self.center.y + self.y_radius * cos,
        )
    }
}

impl Default for EllipseGeometry {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            x_radius: 0.0,
            y_radius: 0.0,
        }
    }
}

/// Parameters shared by every projection of a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionParams {
    /// Scale of the rearmost item, in `(0, 1]`.
    pub ratio_min: f64,
    /// Rotation of the whole ring, in radians.
    pub offset_angle: f64,
    /// Z-index the ring stacks upwards from.
    pub base_z_index: i32,
    /// Exponent of the angular redistribution. Must be positive.
    pub power_exponent: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            ratio_min: 0.4,
            offset_angle: 0.0,
            base_z_index: 100,
            power_exponent: 0.85,
        }
    }
}

/// Target placement of one item.
///
/// Derived on every layout or navigation pass; never stored by the projector.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedTransform {
    /// Top-left corner in container coordinates.
    pub origin: Point,
    /// Scaled size.
    pub size: Size,
    /// Stacking order. Higher is drawn on top.
    pub depth: i32,
}

impl ProjectedTransform {
    /// The item's rectangle in container coordinates.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Horizontal center of the item.
    ///
    /// This lies on the ellipse up to the whole-unit truncation applied by the projector.
    pub fn center_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }
}
