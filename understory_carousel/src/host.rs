// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host interfaces: the surface, animator and timer a carousel drives.
//!
//! ## Overview
//!
//! The carousel never draws, tweens or sleeps. It asks the host for:
//!
//! - a [`Surface`]: the container's size, and the intrinsic size of an item handle,
//! - an [`Animator`]: applies target transforms, either immediately or over a [`Transition`],
//! - a [`Timer`]: schedules and cancels callbacks identified by [`TimerId`].
//!
//! Timers do not call back into the carousel. When a timer fires, the host passes its id to
//! [`Carousel::on_timer`](crate::Carousel::on_timer), which keeps all state owned by the carousel
//! and all calls on a single thread.

use core::time::Duration;

use understory_ellipse::ProjectedTransform;

/// Positioning mode applied to the carousel container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContainerPosition {
    /// Positioned relative to its normal flow position.
    #[default]
    Relative,
    /// Positioned relative to the nearest positioned ancestor.
    Absolute,
    /// Positioned relative to the viewport.
    Fixed,
    /// Normal flow.
    Static,
}

/// The container items are laid out in.
pub trait Surface<H> {
    /// Current size of the container.
    fn size(&self) -> kurbo::Size;

    /// Resize the container.
    fn set_size(&mut self, size: kurbo::Size);

    /// Intrinsic size of an item, or `None` if it cannot be measured.
    fn measure(&self, item: &H) -> Option<kurbo::Size>;

    /// Apply the container's positioning mode and base z-index.
    ///
    /// Called once, when the carousel is created.
    fn configure(&mut self, position: ContainerPosition, z_index: i32) {
        let _ = (position, z_index);
    }
}

/// What an animator does with a new target while an item is still moving.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RetargetPolicy {
    /// Abandon the running interpolation and head for the new target from the current state.
    ///
    /// Overlapping navigations resolve to the last one.
    #[default]
    CancelAndRestart,
    /// Finish the running interpolation, then start the next one.
    Queue,
}

/// How an animated move is to be played.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Length of the move.
    pub duration: Duration,
    /// Behavior when the item is already moving.
    pub policy: RetargetPolicy,
}

/// Applies projected transforms to items.
pub trait Animator<H> {
    /// Place `item` at `target` without animation, interrupting any running move.
    fn apply_immediate(&mut self, item: &H, target: ProjectedTransform);

    /// Move `item` towards `target` as described by `transition`.
    fn animate_to(&mut self, item: &H, target: ProjectedTransform, transition: Transition);
}

/// Identifier of a scheduled timer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Schedules timer callbacks on the host's event loop.
///
/// Implementations report expiry by passing the [`TimerId`] to
/// [`Carousel::on_timer`](crate::Carousel::on_timer).
pub trait Timer {
    /// Fire every `interval` until cancelled.
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId;

    /// Fire once after `delay`.
    fn schedule_once(&mut self, delay: Duration) -> TimerId;

    /// Cancel a timer. Cancelling a timer that already fired or was cancelled is a no-op.
    fn cancel(&mut self, id: TimerId);
}
