// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.
//!
//! [`CarouselConfig`] is fixed once the carousel is created. Build one with struct update syntax:
//!
//! ```
//! use understory_carousel::{CarouselConfig, Direction};
//!
//! let config = CarouselConfig {
//!     x_radius: 420.0,
//!     auto_run: false,
//!     direction: Direction::Clockwise,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use core::fmt;
use core::time::Duration;

use kurbo::Vec2;
use understory_ellipse::ProjectionParams;

use crate::error::ConfigError;
use crate::host::{ContainerPosition, RetargetPolicy};

/// Direction `next` travels around the ring.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// `next` focuses the following item (index + 1).
    Clockwise,
    /// `next` focuses the preceding item (index - 1).
    #[default]
    CounterClockwise,
}

impl Direction {
    /// Index step taken by `next`. `previous` takes the opposite step.
    pub fn next_step(self) -> isize {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }
}

/// When the end of a rotation is reported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RotateEndTiming {
    /// Once the rotate duration has elapsed, through a one-shot timer.
    #[default]
    Deferred,
    /// Right after the rotation starts, carrying the duration as data.
    Immediate,
}

/// Ellipse axis, used in error reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// Static carousel parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Positioning mode of the container.
    pub container_position: ContainerPosition,
    /// Space kept around the ellipse inside the container.
    pub margin: f64,
    /// Offset of the ellipse center from the top-center of the container.
    pub center_offset: Vec2,
    /// Horizontal semi-axis of the ellipse.
    pub x_radius: f64,
    /// Vertical semi-axis of the ellipse.
    pub y_radius: f64,
    /// Length of one rotation.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub rotate_duration: Duration,
    /// Retarget policy requested from the animator.
    pub transition_policy: RetargetPolicy,
    /// When [`CarouselEvent::RotateEnd`](crate::CarouselEvent::RotateEnd) is emitted.
    pub rotate_end: RotateEndTiming,
    /// Scale of the rearmost item, in `(0, 1]`.
    pub ratio_min: f64,
    /// Rotation of the ring, in radians.
    pub offset_angle: f64,
    /// Z-index of the container; items stack upwards from it.
    pub base_z_index: i32,
    /// Exponent of the angular redistribution. Must be positive.
    pub power_exponent: f64,
    /// Navigate with the wheel.
    pub enable_wheel_input: bool,
    /// Advance automatically.
    pub auto_run: bool,
    /// Time between automatic advances.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub interval: Duration,
    /// Pause automatic advances while the pointer is over the carousel.
    pub stop_on_hover: bool,
    /// Direction of `next`.
    pub direction: Direction,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            container_position: ContainerPosition::Relative,
            margin: 10.0,
            center_offset: Vec2::ZERO,
            x_radius: 300.0,
            y_radius: 50.0,
            rotate_duration: Duration::from_millis(500),
            transition_policy: RetargetPolicy::CancelAndRestart,
            rotate_end: RotateEndTiming::Deferred,
            ratio_min: 0.4,
            offset_angle: 0.0,
            base_z_index: 100,
            power_exponent: 0.85,
            enable_wheel_input: true,
            auto_run: true,
            interval: Duration::from_millis(3000),
            stop_on_hover: true,
            direction: Direction::CounterClockwise,
        }
    }
}

impl CarouselConfig {
    /// Check the parameter invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ratio_min > 0.0 && self.ratio_min <= 1.0) {
            return Err(ConfigError::RatioMinOutOfRange(self.ratio_min));
        }
        if !(self.power_exponent > 0.0 && self.power_exponent.is_finite()) {
            return Err(ConfigError::NonPositiveExponent(self.power_exponent));
        }
        for (axis, value) in [(Axis::X, self.x_radius), (Axis::Y, self.y_radius)] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::NegativeRadius { axis, value });
            }
        }
        if !(self.margin >= 0.0 && self.margin.is_finite()) {
            return Err(ConfigError::NegativeMargin(self.margin));
        }
        if !self.offset_angle.is_finite() {
            return Err(ConfigError::NonFiniteOffsetAngle(self.offset_angle));
        }
        if !self.center_offset.is_finite() {
            return Err(ConfigError::NonFiniteCenterOffset(self.center_offset));
        }
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    /// Parameters handed to the projector.
    pub fn projection_params(&self) -> ProjectionParams {
        ProjectionParams {
            ratio_min: self.ratio_min,
            offset_angle: self.offset_angle,
            base_z_index: self.base_z_index,
            power_exponent: self.power_exponent,
        }
    }
}

#[cfg(feature = "serde")]
mod millis {
    use core::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Configured durations are far below u64::MAX milliseconds."
        )]
        let ms = d.as_millis() as u64;
        s.serialize_u64(ms)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
