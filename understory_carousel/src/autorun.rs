// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autorun scheduler: periodic advancing with hover pausing.
//!
//! ## States
//!
//! ```text
//!            start                pointer enter
//! Stopped ──────────▶ Running ─────────────────▶ Paused
//!                      │  ▲ ◀───────────────────────┘
//!                      └──┘      pointer leave
//!               navigation restarts the interval
//! ```
//!
//! A carousel created with autorun disabled stays `Stopped` and ignores pointer enter/leave.
//! At most one repeating timer is live at any time: every (re)start cancels the previous one.
//!
//! Each tick calls [`Carousel::next`], which itself restarts the interval, so manual navigation
//! and automatic advances never land close together.

use core::time::Duration;

use log::debug;

use crate::carousel::Carousel;
use crate::event::CarouselEvent;
use crate::host::{Animator, Surface, Timer, TimerId};
use crate::input::InputFlags;

/// State of the automatic advance timer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SchedulerState {
    /// Autorun is disabled or not started. No timer is live.
    #[default]
    Stopped,
    /// A repeating timer advances the carousel.
    Running,
    /// Autorun is enabled but suspended while the pointer is over the carousel.
    Paused,
}

/// The advance timer and its state.
#[derive(Clone, Debug)]
pub(crate) struct Autorun {
    state: SchedulerState,
    interval: Duration,
    timer: Option<TimerId>,
}

impl Autorun {
    /// A stopped scheduler advancing every `interval` once started.
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            state: SchedulerState::Stopped,
            interval,
            timer: None,
        }
    }

    /// Current state.
    pub(crate) fn state(&self) -> SchedulerState {
        self.state
    }

    /// Whether `id` is the live advance timer.
    pub(crate) fn owns(&self, id: TimerId) -> bool {
        self.timer == Some(id)
    }

    /// Enter `Running`, (re)scheduling the timer a full interval from now.
    ///
    /// Returns `true` if the state changed.
    pub(crate) fn start<T: Timer>(&mut self, timer: &mut T) -> bool {
        self.cancel(timer);
        self.timer = Some(timer.schedule_repeating(self.interval));
        let changed = self.state != SchedulerState::Running;
        self.state = SchedulerState::Running;
        changed
    }

    /// Restart the interval if `Running`. Returns `true` if it was restarted.
    pub(crate) fn restart<T: Timer>(&mut self, timer: &mut T) -> bool {
        if self.state != SchedulerState::Running {
            return false;
        }
        self.start(timer);
        true
    }

    /// Move from `Running` to `Paused`, cancelling the timer.
    ///
    /// Returns `true` if the state changed.
    pub(crate) fn pause<T: Timer>(&mut self, timer: &mut T) -> bool {
        if self.state != SchedulerState::Running {
            return false;
        }
        self.cancel(timer);
        self.state = SchedulerState::Paused;
        true
    }

    fn cancel<T: Timer>(&mut self, timer: &mut T) {
        if let Some(id) = self.timer.take() {
            timer.cancel(id);
        }
    }
}

impl<H, S, A, T> Carousel<H, S, A, T>
where
    H: Clone + PartialEq,
    S: Surface<H>,
    A: Animator<H>,
    T: Timer,
{
    /// The pointer entered the carousel: pause autorun.
    ///
    /// Emits [`CarouselEvent::Stop`] when autorun was running.
    pub fn pointer_enter(&mut self) {
        if !self.inputs.contains(InputFlags::HOVER) {
            return;
        }
        if self.autorun.pause(&mut self.timer) {
            debug!("autorun paused");
            self.events.push(CarouselEvent::Stop);
        }
    }

    /// The pointer left the carousel: resume autorun a full interval from now.
    ///
    /// Emits [`CarouselEvent::Start`] when autorun was paused.
    pub fn pointer_leave(&mut self) {
        if !self.inputs.contains(InputFlags::HOVER) {
            return;
        }
        if self.autorun.start(&mut self.timer) {
            debug!("autorun resumed");
            self.events.push(CarouselEvent::Start);
        }
    }

    /// A host timer fired. Returns `false` if the id is not one of this carousel's timers.
    ///
    /// The advance timer calls [`next`](Self::next); rotation-end timers emit
    /// [`CarouselEvent::RotateEnd`].
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.autorun.owns(id) {
            debug!("autorun tick");
            self.next();
            return true;
        }
        if let Some(i) = self.pending_rotate_end.iter().position(|p| p.timer == id) {
            let pending = self.pending_rotate_end.remove(i);
            self.events.push(CarouselEvent::RotateEnd {
                focused: pending.focused,
                duration: pending.duration,
            });
            return true;
        }
        false
    }
}
