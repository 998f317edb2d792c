// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Only construction and item insertion can fail. Index math wraps and navigation on an
//! empty carousel is a no-op, so neither has an error variant.

use kurbo::Vec2;
use thiserror::Error;

use crate::config::Axis;

/// A configuration parameter is outside its valid range.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `ratio_min` must be in `(0, 1]`.
    #[error("ratio_min must be in (0, 1], got {0}")]
    RatioMinOutOfRange(f64),
    /// `power_exponent` must be positive and finite.
    #[error("power_exponent must be positive and finite, got {0}")]
    NonPositiveExponent(f64),
    /// Radii must be non-negative and finite.
    #[error("{axis} radius must be non-negative and finite, got {value}")]
    NegativeRadius {
        /// The offending axis.
        axis: Axis,
        /// The configured value.
        value: f64,
    },
    /// The margin must be non-negative and finite.
    #[error("margin must be non-negative and finite, got {0}")]
    NegativeMargin(f64),
    /// The offset angle must be finite.
    #[error("offset_angle must be finite, got {0}")]
    NonFiniteOffsetAngle(f64),
    /// The center offset must be finite.
    #[error("center_offset must be finite, got {0:?}")]
    NonFiniteCenterOffset(Vec2),
    /// The autorun interval must be non-zero.
    #[error("autorun interval must be non-zero")]
    ZeroInterval,
}

/// Errors reported by [`Carousel`](crate::Carousel).
#[derive(Error, Clone, Debug, PartialEq)]
pub enum CarouselError {
    /// The configuration was rejected.
    #[error("invalid carousel configuration: {0}")]
    Config(#[from] ConfigError),
    /// The item could not be measured and no size was supplied.
    #[error("item {index} has no measurable size and none was supplied")]
    UnmeasurableItem {
        /// Position the item would have taken.
        index: usize,
    },
    /// The supplied or measured size is negative or not finite.
    #[error("item {index} has an invalid size {width}x{height}")]
    InvalidItemSize {
        /// Position the item would have taken.
        index: usize,
        /// Resolved width.
        width: f64,
        /// Resolved height.
        height: f64,
    },
}
