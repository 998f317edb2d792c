// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel: owned state plus the host it drives.
//!
//! Operations are split by concern:
//! - `layout`: adding items and immediate layout passes,
//! - `navigator`: focus changes and animated rotations,
//! - `autorun`: the automatic advance timer and hover pausing,
//! - `input`: wheel and resize routing.

use core::time::Duration;
use std::vec::Drain;

use log::{debug, warn};
use understory_ellipse::{EllipseGeometry, ProjectionParams};

use crate::autorun::{Autorun, SchedulerState};
use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::event::CarouselEvent;
use crate::host::{Animator, RetargetPolicy, Surface, Timer, TimerId};
use crate::input::InputFlags;
use crate::item::CarouselItem;
use crate::layout::Ring;
use crate::navigator::Navigator;

/// A rotation end waiting on its one-shot timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct PendingRotateEnd {
    pub(crate) timer: TimerId,
    pub(crate) focused: usize,
    pub(crate) duration: Duration,
}

/// An elliptical carousel over item handles of type `H`.
///
/// The carousel owns its items, focus and scheduler state, and drives the host's
/// [`Surface`], [`Animator`] and [`Timer`]. All calls are synchronous; see the crate docs for
/// the event flow.
pub struct Carousel<H, S, A, T> {
    pub(crate) config: CarouselConfig,
    pub(crate) params: ProjectionParams,
    pub(crate) ring: Ring<H>,
    pub(crate) navigator: Navigator,
    pub(crate) autorun: Autorun,
    pub(crate) inputs: InputFlags,
    pub(crate) events: Vec<CarouselEvent>,
    pub(crate) pending_rotate_end: Vec<PendingRotateEnd>,
    pub(crate) surface: S,
    pub(crate) animator: A,
    pub(crate) timer: T,
}

impl<H, S, A, T> core::fmt::Debug for Carousel<H, S, A, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("items", &self.ring.len())
            .field("current_index", &self.navigator.current())
            .field("scheduler", &self.autorun.state())
            .field("inputs", &self.inputs)
            .field("queued_events", &self.events.len())
            .field("pending_rotate_end", &self.pending_rotate_end.len())
            .finish_non_exhaustive()
    }
}

impl<H, S, A, T> Carousel<H, S, A, T>
where
    H: Clone + PartialEq,
    S: Surface<H>,
    A: Animator<H>,
    T: Timer,
{
    /// Create an empty carousel.
    ///
    /// Validates `config`, applies the container position and base z-index to the surface and,
    /// when autorun is enabled, starts the advance timer (emitting [`CarouselEvent::Start`]).
    pub fn new(
        config: CarouselConfig,
        mut surface: S,
        animator: A,
        timer: T,
    ) -> Result<Self, CarouselError> {
        config.validate()?;
        if config.transition_policy == RetargetPolicy::Queue {
            warn!("queued transitions: overlapping rotations will play back to back instead of retargeting");
        }
        surface.configure(config.container_position, config.base_z_index);
        let inputs = InputFlags::for_config(&config);
        debug!("carousel created, inputs {inputs:?}, autorun {}", config.auto_run);

        let mut carousel = Self {
            params: config.projection_params(),
            autorun: Autorun::new(config.interval),
            config,
            ring: Ring::new(),
            navigator: Navigator::new(),
            inputs,
            events: Vec::new(),
            pending_rotate_end: Vec::new(),
            surface,
            animator,
            timer,
        };
        if carousel.config.auto_run && carousel.autorun.start(&mut carousel.timer) {
            carousel.events.push(CarouselEvent::Start);
        }
        Ok(carousel)
    }
}

impl<H, S, A, T> Carousel<H, S, A, T> {
    /// Number of items.
    pub fn count(&self) -> usize {
        self.ring.len()
    }

    /// Items in ring order.
    pub fn items(&self) -> &[CarouselItem<H>] {
        self.ring.items()
    }

    /// The focused position. Meaningless while the carousel is empty.
    pub fn current_index(&self) -> usize {
        self.navigator.current()
    }

    /// Geometry used by the last layout pass.
    pub fn geometry(&self) -> EllipseGeometry {
        self.ring.geometry()
    }

    /// Configuration the carousel was created with.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// State of the automatic advance timer.
    pub fn scheduler_state(&self) -> SchedulerState {
        self.autorun.state()
    }

    /// Inputs the carousel responds to. Hosts need not route the others.
    pub fn input_flags(&self) -> InputFlags {
        self.inputs
    }

    /// Events queued since the last drain, oldest first.
    pub fn events(&self) -> &[CarouselEvent] {
        &self.events
    }

    /// Take the queued events, oldest first.
    pub fn drain_events(&mut self) -> Drain<'_, CarouselEvent> {
        self.events.drain(..)
    }

    /// The host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The host surface, mutably (for example to resize it before calling
    /// [`resize`](Self::resize)).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The host animator.
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// The host animator, mutably.
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// The host timer.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// The host timer, mutably.
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }
}
