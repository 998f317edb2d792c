// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless host for the carousel demos.
//!
//! - [`Stage`]: a container with a fixed width and a table of item sizes.
//! - [`TweenAnimator`]: eases items towards their targets on a virtual clock, honoring
//!   [`RetargetPolicy`].
//! - [`VirtualClock`]: a timer whose time only moves through [`advance`].

use core::time::Duration;
use core::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use kurbo::{Point, Size};
use log::{debug, trace};
use understory_carousel::{
    Animator, Carousel, ProjectedTransform, RetargetPolicy, Surface, Timer, TimerId, Transition,
};

/// The carousel type every demo drives.
pub type DemoCarousel = Carousel<u32, Stage, TweenAnimator, VirtualClock>;

/// A container of fixed width whose items have known sizes.
#[derive(Debug)]
pub struct Stage {
    size: Size,
    sizes: HashMap<u32, Size>,
}

impl Stage {
    /// A stage `width` wide. Its height is set by the carousel.
    pub fn new(width: f64) -> Self {
        Self {
            size: Size::new(width, 0.0),
            sizes: HashMap::new(),
        }
    }

    /// Register the measurable size of `item`.
    pub fn with_item(mut self, item: u32, size: Size) -> Self {
        self.sizes.insert(item, size);
        self
    }

    /// Change the width, as a window resize would.
    pub fn set_width(&mut self, width: f64) {
        self.size.width = width;
    }
}

impl Surface<u32> for Stage {
    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        if size != self.size {
            debug!("stage resized to {}x{}", size.width, size.height);
        }
        self.size = size;
    }

    fn measure(&self, item: &u32) -> Option<Size> {
        self.sizes.get(item).copied()
    }
}

#[derive(Clone, Debug)]
struct Tween {
    from: ProjectedTransform,
    to: ProjectedTransform,
    started: Duration,
    duration: Duration,
    queued: VecDeque<(ProjectedTransform, Duration)>,
}

impl Tween {
    fn resting(at: ProjectedTransform, now: Duration) -> Self {
        Self {
            from: at,
            to: at,
            started: now,
            duration: Duration::ZERO,
            queued: VecDeque::new(),
        }
    }

    fn ends(&self) -> Duration {
        self.started + self.duration
    }

    /// Start queued moves whose predecessors finished by `now`.
    fn settle(&mut self, now: Duration) {
        while now >= self.ends() {
            let Some((to, duration)) = self.queued.pop_front() else {
                break;
            };
            self.from = self.to;
            self.started = self.ends();
            self.to = to;
            self.duration = duration;
        }
    }

    fn sample(&self, now: Duration) -> ProjectedTransform {
        if self.duration.is_zero() || now >= self.ends() {
            return self.to;
        }
        let t = (now.saturating_sub(self.started).as_secs_f64() / self.duration.as_secs_f64())
            .clamp(0.0, 1.0);
        lerp(self.from, self.to, ease_out(t))
    }
}

fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn lerp(a: ProjectedTransform, b: ProjectedTransform, t: f64) -> ProjectedTransform {
    let mix = |x: f64, y: f64| x + (y - x) * t;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Interpolated z-indices lie between two i32 values."
    )]
    let depth = mix(f64::from(a.depth), f64::from(b.depth)).round() as i32;
    ProjectedTransform {
        origin: Point::new(mix(a.origin.x, b.origin.x), mix(a.origin.y, b.origin.y)),
        size: Size::new(mix(a.size.width, b.size.width), mix(a.size.height, b.size.height)),
        depth,
    }
}

/// Eases items towards their targets with a quadratic ease-out.
#[derive(Debug, Default)]
pub struct TweenAnimator {
    now: Duration,
    tweens: HashMap<u32, Tween>,
}

impl TweenAnimator {
    fn set_now(&mut self, now: Duration) {
        self.now = now;
        for tween in self.tweens.values_mut() {
            tween.settle(now);
        }
    }

    /// Where `item` is drawn right now.
    pub fn current(&self, item: u32) -> Option<ProjectedTransform> {
        self.tweens.get(&item).map(|t| t.sample(self.now))
    }

    /// Whether any item is still moving or has moves queued.
    pub fn is_animating(&self) -> bool {
        self.tweens
            .values()
            .any(|t| self.now < t.ends() || !t.queued.is_empty())
    }
}

impl Animator<u32> for TweenAnimator {
    fn apply_immediate(&mut self, item: &u32, target: ProjectedTransform) {
        self.tweens.insert(*item, Tween::resting(target, self.now));
    }

    fn animate_to(&mut self, item: &u32, target: ProjectedTransform, transition: Transition) {
        let now = self.now;
        let tween = self
            .tweens
            .entry(*item)
            .or_insert_with(|| Tween::resting(target, now));
        match transition.policy {
            RetargetPolicy::CancelAndRestart => {
                let from = tween.sample(now);
                trace!("item {item}: retarget from {from:?}");
                *tween = Tween {
                    from,
                    to: target,
                    started: now,
                    duration: transition.duration,
                    queued: VecDeque::new(),
                };
            }
            RetargetPolicy::Queue => {
                if now >= tween.ends() && tween.queued.is_empty() {
                    tween.from = tween.to;
                    tween.to = target;
                    tween.started = now;
                    tween.duration = transition.duration;
                } else {
                    tween.queued.push_back((target, transition.duration));
                }
            }
        }
    }
}

/// A timer on a virtual clock.
///
/// Deadlines sit in a min-heap. Cancelled timers are dropped from `intervals` and their heap
/// entries are skipped when they surface.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    issued: u64,
    deadlines: BinaryHeap<Reverse<(Duration, TimerId)>>,
    /// Live timers and their repeat interval (`None` for one-shots).
    intervals: HashMap<TimerId, Option<Duration>>,
}

impl VirtualClock {
    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that have neither fired (one-shots) nor been cancelled.
    pub fn pending(&self) -> usize {
        self.intervals.len()
    }

    /// Fire the next timer due by `limit`, moving the clock to its deadline.
    fn fire_next(&mut self, limit: Duration) -> Option<TimerId> {
        while let Some(&Reverse((due, id))) = self.deadlines.peek() {
            if due > limit {
                return None;
            }
            self.deadlines.pop();
            let Some(&repeat) = self.intervals.get(&id) else {
                continue;
            };
            self.now = due;
            match repeat {
                Some(interval) => self.deadlines.push(Reverse((due + interval, id))),
                None => {
                    self.intervals.remove(&id);
                }
            }
            return Some(id);
        }
        None
    }

    fn arm(&mut self, delay: Duration, repeat: Option<Duration>) -> TimerId {
        self.issued += 1;
        let id = TimerId(self.issued);
        self.deadlines.push(Reverse((self.now + delay, id)));
        self.intervals.insert(id, repeat);
        id
    }
}

impl Timer for VirtualClock {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId {
        self.arm(interval, Some(interval))
    }

    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        self.arm(delay, None)
    }

    fn cancel(&mut self, id: TimerId) {
        if self.intervals.remove(&id).is_some() {
            trace!("timer {} cancelled", id.0);
        }
    }
}

/// Advance virtual time by `span`, firing due timers in order and keeping the animator in step.
pub fn advance(carousel: &mut DemoCarousel, span: Duration) {
    let target = carousel.timer().now() + span;
    while let Some(id) = carousel.timer_mut().fire_next(target) {
        let now = carousel.timer().now();
        carousel.animator_mut().set_now(now);
        carousel.on_timer(id);
    }
    carousel.timer_mut().now = target;
    carousel.animator_mut().set_now(target);
}

/// Log and discard the queued carousel events.
pub fn log_events(carousel: &mut DemoCarousel) {
    let now = carousel.timer().now();
    for event in carousel.drain_events() {
        log::info!("{:>6} ms  {} {:?}", now.as_millis(), event.name(), event);
    }
}

#[cfg(test)]
mod tests {
    use understory_carousel::{CarouselConfig, RotateEndTiming};

    use super::*;

    fn demo(policy: RetargetPolicy) -> DemoCarousel {
        let config = CarouselConfig {
            auto_run: false,
            transition_policy: policy,
            rotate_end: RotateEndTiming::Immediate,
            ..Default::default()
        };
        let stage = (0..4).fold(Stage::new(800.0), |s, i| s.with_item(i, Size::new(100.0, 60.0)));
        let mut c = Carousel::new(config, stage, TweenAnimator::default(), VirtualClock::default())
            .unwrap();
        c.add_items(0..4).unwrap();
        c
    }

    #[test]
    fn tween_reaches_target_after_duration() {
        let mut c = demo(RetargetPolicy::CancelAndRestart);
        c.go_to(1);
        assert!(c.animator().is_animating());
        advance(&mut c, Duration::from_millis(250));
        let mid = c.animator().current(1).unwrap();
        assert!(mid.size.width > 40.0 && mid.size.width < 100.0, "{mid:?}");
        advance(&mut c, Duration::from_millis(250));
        assert!(!c.animator().is_animating());
        assert_eq!(c.animator().current(1).unwrap().size, Size::new(100.0, 60.0));
    }

    #[test]
    fn cancel_and_restart_resolves_to_last_target() {
        let mut c = demo(RetargetPolicy::CancelAndRestart);
        c.go_to(1);
        advance(&mut c, Duration::from_millis(100));
        c.go_to(2);
        advance(&mut c, Duration::from_millis(500));
        assert!(!c.animator().is_animating());
        assert_eq!(c.animator().current(2).unwrap().size, Size::new(100.0, 60.0));
    }

    #[test]
    fn queue_plays_moves_back_to_back() {
        let at = |w: f64| ProjectedTransform {
            origin: Point::ZERO,
            size: Size::new(w, w),
            depth: 0,
        };
        let queued = Transition {
            duration: Duration::from_millis(100),
            policy: RetargetPolicy::Queue,
        };
        let mut a = TweenAnimator::default();
        a.apply_immediate(&7, at(10.0));
        a.animate_to(&7, at(20.0), queued);
        a.set_now(Duration::from_millis(50));
        a.animate_to(&7, at(30.0), queued);
        a.set_now(Duration::from_millis(100));
        assert_eq!(a.current(7), Some(at(20.0)));
        assert!(a.is_animating());
        a.set_now(Duration::from_millis(200));
        assert_eq!(a.current(7), Some(at(30.0)));
        assert!(!a.is_animating());
    }

    #[test]
    fn apply_immediate_interrupts_a_running_move() {
        let mut c = demo(RetargetPolicy::Queue);
        c.go_to(1);
        advance(&mut c, Duration::from_millis(100));
        c.layout(None);
        assert!(!c.animator().is_animating());
        assert_eq!(c.animator().current(1).unwrap().size, Size::new(100.0, 60.0));
    }

    #[test]
    fn clock_skips_cancelled_deadlines_and_repeats() {
        let mut clock = VirtualClock::default();
        let tick = clock.schedule_repeating(Duration::from_millis(300));
        let once = clock.schedule_once(Duration::from_millis(100));
        let dropped = clock.schedule_once(Duration::from_millis(200));
        clock.cancel(dropped);
        clock.cancel(dropped);
        assert_eq!(clock.pending(), 2);

        let limit = Duration::from_millis(650);
        let fired: Vec<_> = core::iter::from_fn(|| clock.fire_next(limit)).collect();
        assert_eq!(fired, vec![once, tick, tick]);
        assert_eq!(clock.now(), Duration::from_millis(600));
        assert_eq!(clock.pending(), 1);
    }
}
