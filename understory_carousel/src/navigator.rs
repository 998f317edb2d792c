// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigator: focus state and animated rotations.
//!
//! ## Rotation
//!
//! [`Carousel::go_to`] first runs an immediate layout pass, so every rotation starts from an
//! up-to-date base, then moves the focus and hands each item's new target to the animator with
//! the configured [`Transition`]. Overlapping rotations are allowed: the last one wins, provided
//! the animator retargets (see [`RetargetPolicy`](crate::RetargetPolicy)).
//!
//! ## Index math
//!
//! Target indices wrap around the ring, so any integer is accepted. Navigation on an empty
//! carousel does nothing and emits nothing.

use log::debug;

use crate::carousel::{Carousel, PendingRotateEnd};
use crate::config::RotateEndTiming;
use crate::event::CarouselEvent;
use crate::host::{Animator, Surface, Timer, Transition};

/// The focused position on the ring.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Navigator {
    current: usize,
}

impl Navigator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current(&self) -> usize {
        self.current
    }

    /// Focus `target`, wrapped into `[0, count)`. Leaves the focus alone when `count` is zero.
    pub(crate) fn set(&mut self, target: isize, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        #[allow(
            clippy::cast_possible_wrap,
            reason = "Ring sizes are far below isize::MAX."
        )]
        let wrapped = target.rem_euclid(count as isize);
        #[allow(clippy::cast_sign_loss, reason = "rem_euclid is non-negative.")]
        let wrapped = wrapped as usize;
        self.current = wrapped;
        Some(wrapped)
    }

    /// The index `step` positions away from the focus, before wrapping.
    pub(crate) fn offset(&self, step: isize) -> isize {
        #[allow(
            clippy::cast_possible_wrap,
            reason = "Ring positions are far below isize::MAX."
        )]
        let current = self.current as isize;
        current + step
    }
}

impl<H, S, A, T> Carousel<H, S, A, T>
where
    H: Clone + PartialEq,
    S: Surface<H>,
    A: Animator<H>,
    T: Timer,
{
    /// Rotate to the item at `index`, wrapping around the ring.
    ///
    /// Emits [`CarouselEvent::RotateStart`] and, depending on
    /// [`RotateEndTiming`], [`CarouselEvent::RotateEnd`] now or after the rotate duration.
    /// While autorun is running, its interval restarts.
    pub fn go_to(&mut self, index: isize) -> &mut Self {
        if self.ring.is_empty() {
            debug!("go_to({index}) ignored: no items");
            return self;
        }
        self.invalidate();
        let Some(focused) = self.navigator.set(index, self.ring.len()) else {
            return self;
        };
        debug!("rotating to {focused} (requested {index})");

        let transition = Transition {
            duration: self.config.rotate_duration,
            policy: self.config.transition_policy,
        };
        for (item, target) in self.ring.project_all(focused, &self.params) {
            self.animator.animate_to(item.handle(), target, transition);
        }

        if self.autorun.restart(&mut self.timer) {
            debug!("autorun interval restarted");
        }

        self.events.push(CarouselEvent::RotateStart { focused });
        let duration = transition.duration;
        match self.config.rotate_end {
            RotateEndTiming::Immediate => {
                self.events
                    .push(CarouselEvent::RotateEnd { focused, duration });
            }
            RotateEndTiming::Deferred => {
                let timer = self.timer.schedule_once(duration);
                self.pending_rotate_end.push(PendingRotateEnd {
                    timer,
                    focused,
                    duration,
                });
            }
        }
        self
    }

    /// Rotate one step in the configured [`Direction`](crate::Direction).
    pub fn next(&mut self) -> &mut Self {
        let target = self.navigator.offset(self.config.direction.next_step());
        self.go_to(target)
    }

    /// Rotate one step against the configured [`Direction`](crate::Direction).
    pub fn previous(&mut self) -> &mut Self {
        let target = self.navigator.offset(-self.config.direction.next_step());
        self.go_to(target)
    }

    /// Rotate to the item with handle `handle`. Unknown handles are ignored.
    pub fn focus(&mut self, handle: &H) -> &mut Self {
        match self.ring.position_of(handle) {
            #[allow(
                clippy::cast_possible_wrap,
                reason = "Ring positions are far below isize::MAX."
            )]
            Some(position) => self.go_to(position as isize),
            None => {
                debug!("focus ignored: handle is not on the ring");
                self
            }
        }
    }
}

impl<H, S, A, T> Carousel<H, S, A, T> {
    /// Handle of the focused item, or `None` while the carousel is empty.
    pub fn focused(&self) -> Option<&H> {
        let items = self.ring.items();
        if items.is_empty() {
            return None;
        }
        items
            .get(self.navigator.current() % items.len())
            .map(|item| item.handle())
    }
}
