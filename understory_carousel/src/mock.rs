// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording host used by the unit tests.

use core::time::Duration;
use std::collections::{BTreeMap, HashMap};

use kurbo::Size;
use understory_ellipse::ProjectedTransform;

use crate::host::{Animator, ContainerPosition, Surface, Timer, TimerId, Transition};
use crate::{Carousel, CarouselConfig};

pub(crate) type TestCarousel = Carousel<u32, RecordingSurface, RecordingAnimator, ManualTimer>;

#[derive(Debug)]
pub(crate) struct RecordingSurface {
    pub(crate) size: Size,
    pub(crate) sizes: HashMap<u32, Size>,
    pub(crate) configured: Option<(ContainerPosition, i32)>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            size: Size::new(800.0, 0.0),
            sizes: HashMap::new(),
            configured: None,
        }
    }
}

impl Surface<u32> for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn measure(&self, item: &u32) -> Option<Size> {
        self.sizes.get(item).copied()
    }

    fn configure(&mut self, position: ContainerPosition, z_index: i32) {
        self.configured = Some((position, z_index));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Applied {
    Immediate(u32, ProjectedTransform),
    Animated(u32, ProjectedTransform, Transition),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingAnimator {
    pub(crate) log: Vec<Applied>,
}

impl RecordingAnimator {
    pub(crate) fn last_immediate(&self, id: u32) -> Option<ProjectedTransform> {
        self.log.iter().rev().find_map(|a| match a {
            Applied::Immediate(i, t) if *i == id => Some(*t),
            _ => None,
        })
    }

    pub(crate) fn last_animated(&self, id: u32) -> Option<(ProjectedTransform, Transition)> {
        self.log.iter().rev().find_map(|a| match a {
            Applied::Animated(i, t, tr) if *i == id => Some((*t, *tr)),
            _ => None,
        })
    }
}

impl Animator<u32> for RecordingAnimator {
    fn apply_immediate(&mut self, item: &u32, target: ProjectedTransform) {
        self.log.push(Applied::Immediate(*item, target));
    }

    fn animate_to(&mut self, item: &u32, target: ProjectedTransform, transition: Transition) {
        self.log.push(Applied::Animated(*item, target, transition));
    }
}

#[derive(Copy, Clone, Debug)]
struct Scheduled {
    due: Duration,
    repeat: Option<Duration>,
}

/// A virtual clock. Time only moves through [`ManualTimer::set_now`].
#[derive(Debug, Default)]
pub(crate) struct ManualTimer {
    now: Duration,
    next_id: u64,
    live: BTreeMap<TimerId, Scheduled>,
}

impl ManualTimer {
    pub(crate) fn live_count(&self) -> usize {
        self.live.len()
    }

    pub(crate) fn now(&self) -> Duration {
        self.now
    }

    pub(crate) fn set_now(&mut self, now: Duration) {
        self.now = now;
    }

    /// Earliest timer due at or before `limit`, advancing the clock to its due time.
    ///
    /// Repeating timers are rescheduled; one-shot timers are removed.
    pub(crate) fn pop_due(&mut self, limit: Duration) -> Option<TimerId> {
        let (id, scheduled) = self
            .live
            .iter()
            .filter(|(_, s)| s.due <= limit)
            .min_by_key(|(id, s)| (s.due, **id))
            .map(|(id, s)| (*id, *s))?;
        self.now = scheduled.due;
        match scheduled.repeat {
            Some(interval) => {
                if let Some(s) = self.live.get_mut(&id) {
                    s.due += interval;
                }
            }
            None => {
                self.live.remove(&id);
            }
        }
        Some(id)
    }

    fn schedule(&mut self, delay: Duration, repeat: Option<Duration>) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.live.insert(
            id,
            Scheduled {
                due: self.now + delay,
                repeat,
            },
        );
        id
    }
}

impl Timer for ManualTimer {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId {
        self.schedule(interval, Some(interval))
    }

    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        self.schedule(delay, None)
    }

    fn cancel(&mut self, id: TimerId) {
        self.live.remove(&id);
    }
}

/// Config with autorun disabled, so tests drive navigation by hand.
pub(crate) fn manual_config() -> CarouselConfig {
    CarouselConfig {
        auto_run: false,
        ..Default::default()
    }
}

/// `n` items with ids `0..n`, each 100x50, default geometry and autorun disabled.
pub(crate) fn carousel(n: u32) -> TestCarousel {
    let items: Vec<_> = (0..n).map(|i| (i, Size::new(100.0, 50.0))).collect();
    carousel_with(manual_config(), &items)
}

pub(crate) fn carousel_with(config: CarouselConfig, items: &[(u32, Size)]) -> TestCarousel {
    let mut c = Carousel::new(
        config,
        RecordingSurface::default(),
        RecordingAnimator::default(),
        ManualTimer::default(),
    )
    .unwrap();
    for (id, size) in items {
        c.add_item(*id, Some(*size)).unwrap();
    }
    c
}

/// Advance the virtual clock by `span`, delivering every timer that falls due in order.
pub(crate) fn run_for(c: &mut TestCarousel, span: Duration) {
    let target = c.timer().now() + span;
    while let Some(id) = c.timer_mut().pop_due(target) {
        c.on_timer(id);
    }
    c.timer_mut().set_now(target);
}
