// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular mapping: slot offsets to perceptual angles.
//!
//! ## Overview
//!
//! A ring of `count` slots is first spaced linearly (`2π · d / count`) and wrapped into
//! `(-π, π]`, so that slots past the half-way point sit on the left of the focused slot.
//! The wrapped angle is then redistributed by a sign-preserving power law:
//!
//! ```text
//! θ' = sign(θ) · π · (|θ| / π)^p
//! ```
//!
//! The end points `0` and `±π` are fixed by the redistribution. For `p < 1` every interior angle
//! moves away from the front, spreading slots near the focus.

use core::f64::consts::{PI, TAU};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Offset of the slot at `position` from the slot at `focus`, normalized into `[0, count)`.
///
/// Returns `0` when `count` is zero.
pub fn delta_index(position: usize, focus: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (position % count + count - focus % count) % count
}

/// Map a slot offset to its angle on the ring, in radians in `(-π, π]`.
///
/// `delta` may be any integer; it is normalized modulo `count` first, so the mapping is periodic.
/// Offset `0` (the focused slot) always maps to `0`.
///
/// `power_exponent` must be positive. A value of `1.0` yields exact linear spacing.
///
/// A ring of zero slots has no angles; callers must guard against `count == 0`.
/// In that case this returns `0.0`.
pub fn angle_for(delta: isize, count: usize, power_exponent: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let linear = wrapped_linear_angle(delta, count);
    if power_exponent == 1.0 || linear == 0.0 {
        return linear;
    }
    let spread = PI * (linear.abs() / PI).powf(power_exponent);
    if linear < 0.0 { -spread } else { spread }
}

/// Linear angle of a slot, wrapped into `(-π, π]`.
///
/// Wrapping is done on the integer offset so the back slot of an even ring lands on `+π` exactly.
fn wrapped_linear_angle(delta: isize, count: usize) -> f64 {
    #[allow(
        clippy::cast_possible_wrap,
        reason = "Ring sizes are far below isize::MAX."
    )]
    let n = count as isize;
    let mut d = delta.rem_euclid(n);
    if 2 * d > n {
        d -= n;
    }
    #[allow(
        clippy::cast_precision_loss,
        reason = "Slot offsets and ring sizes are small integers."
    )]
    let (d, n) = (d as f64, count as f64);
    TAU * d / n
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn focused_slot_is_at_zero() {
        for n in 1..16 {
            for p in [0.25, 0.85, 1.0, 2.0] {
                assert_eq!(angle_for(0, n, p), 0.0, "n={n} p={p}");
            }
        }
    }

    #[test]
    fn angle_is_periodic_in_delta() {
        for n in 1..9_usize {
            let ni = n as isize;
            for d in -20..20_isize {
                let a = angle_for(d, n, 0.85);
                let b = angle_for(d.rem_euclid(ni), n, 0.85);
                assert_eq!(a, b, "n={n} d={d}");
                assert_eq!(angle_for(d + 3 * ni, n, 0.85), a, "n={n} d={d}");
            }
        }
    }

    #[test]
    fn unit_exponent_is_linear_spacing() {
        let n = 6;
        let expected = [0.0, PI / 3.0, 2.0 * PI / 3.0, PI, -2.0 * PI / 3.0, -PI / 3.0];
        for (d, want) in expected.iter().enumerate() {
            let got = angle_for(d as isize, n, 1.0);
            assert!((got - want).abs() < EPS, "d={d} got={got} want={want}");
        }
    }

    #[test]
    fn range_is_half_open_at_minus_pi() {
        for n in 1..12 {
            for d in 0..n as isize {
                let a = angle_for(d, n, 0.7);
                assert!(a > -PI && a <= PI, "n={n} d={d} a={a}");
            }
        }
        assert_eq!(angle_for(1, 2, 1.0), PI);
        assert_eq!(angle_for(2, 4, 0.5), PI);
    }

    #[test]
    fn sub_unit_exponent_spreads_near_front() {
        let n = 8;
        for d in 1..n as isize {
            let linear = angle_for(d, n, 1.0);
            let spread = angle_for(d, n, 0.85);
            assert_eq!(linear.signum(), spread.signum(), "d={d}");
            if linear.abs() < PI {
                assert!(spread.abs() > linear.abs(), "d={d}");
            }
        }
        // Gap between the focused slot and its neighbour grows.
        assert!(angle_for(1, n, 0.5) > angle_for(1, n, 0.85));
    }

    #[test]
    fn redistribution_is_symmetric() {
        let n = 7;
        for d in 1..n as isize {
            let a = angle_for(d, n, 0.85);
            let b = angle_for(-d, n, 0.85);
            assert!((a + b).abs() < EPS, "d={d} a={a} b={b}");
        }
    }

    #[test]
    fn single_slot_ring() {
        assert_eq!(angle_for(0, 1, 0.85), 0.0);
        assert_eq!(angle_for(5, 1, 0.85), 0.0);
        assert_eq!(angle_for(-3, 1, 0.85), 0.0);
    }

    #[test]
    fn empty_ring_is_guarded() {
        assert_eq!(angle_for(3, 0, 0.85), 0.0);
        assert_eq!(delta_index(3, 1, 0), 0);
    }

    #[test]
    fn delta_index_wraps_around_focus() {
        assert_eq!(delta_index(0, 0, 4), 0);
        assert_eq!(delta_index(1, 0, 4), 1);
        assert_eq!(delta_index(0, 1, 4), 3);
        assert_eq!(delta_index(2, 3, 4), 3);
        assert_eq!(delta_index(3, 3, 4), 0);
    }
}
