// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: an elliptical carousel engine.
//!
//! Items are arranged around an ellipse, scaled and stacked by their distance from the front, and
//! rotated so that the focused item sits front and center.
//!
//! - Lays items out with [`understory_ellipse`] projections, sizing the container to fit.
//! - Navigates by index, by handle, or one step at a time, handing animated targets to the host.
//! - Advances automatically on a timer, pausing while the pointer hovers the carousel.
//!
//! ## Host interfaces
//!
//! The carousel does not draw, tween or keep time. A host implements three traits:
//!
//! - [`Surface`]: the container size and item measurement,
//! - [`Animator`]: applying target transforms immediately or over a [`Transition`],
//! - [`Timer`]: scheduling callbacks, reported back through [`Carousel::on_timer`].
//!
//! Everything runs on the caller's thread. Notifications queue up as [`CarouselEvent`]s and are
//! taken with [`Carousel::drain_events`].
//!
//! ## Event flow
//!
//! - Every layout pass (adding items, [`Carousel::layout`], [`Carousel::resize`] and the start of
//!   each rotation) emits [`CarouselEvent::Init`].
//! - Each rotation emits [`CarouselEvent::RotateStart`], then [`CarouselEvent::RotateEnd`] either
//!   after the rotate duration or right away (see [`RotateEndTiming`]).
//! - Autorun emits [`CarouselEvent::Start`] when it (re)starts and [`CarouselEvent::Stop`] when
//!   hovering pauses it.
//!
//! # Example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Size;
//! use understory_carousel::{
//!     Animator, Carousel, CarouselConfig, CarouselEvent, ProjectedTransform, Surface, Timer,
//!     TimerId, Transition,
//! };
//!
//! struct Stage(Size);
//! impl Surface<&'static str> for Stage {
//!     fn size(&self) -> Size { self.0 }
//!     fn set_size(&mut self, size: Size) { self.0 = size; }
//!     fn measure(&self, _: &&'static str) -> Option<Size> { Some(Size::new(120.0, 80.0)) }
//! }
//!
//! #[derive(Default)]
//! struct Placed(Vec<(&'static str, ProjectedTransform)>);
//! impl Animator<&'static str> for Placed {
//!     fn apply_immediate(&mut self, item: &&'static str, t: ProjectedTransform) {
//!         self.0.push((*item, t));
//!     }
//!     fn animate_to(&mut self, item: &&'static str, t: ProjectedTransform, _: Transition) {
//!         self.0.push((*item, t));
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Ticks(u64);
//! impl Timer for Ticks {
//!     fn schedule_repeating(&mut self, _: Duration) -> TimerId { self.0 += 1; TimerId(self.0) }
//!     fn schedule_once(&mut self, _: Duration) -> TimerId { self.0 += 1; TimerId(self.0) }
//!     fn cancel(&mut self, _: TimerId) {}
//! }
//!
//! let config = CarouselConfig { auto_run: false, ..Default::default() };
//! let mut carousel =
//!     Carousel::new(config, Stage(Size::new(800.0, 0.0)), Placed::default(), Ticks::default())
//!         .unwrap();
//! carousel.add_items(["a", "b", "c", "d"]).unwrap();
//!
//! // Container height fits the tallest item plus margins and the vertical radius.
//! assert_eq!(carousel.surface().0.height, 80.0 + 2.0 * (10.0 + 50.0));
//!
//! carousel.next();
//! assert_eq!(carousel.focused(), Some(&"d"));
//! assert!(carousel
//!     .drain_events()
//!     .any(|e| e == CarouselEvent::RotateStart { focused: 3 }));
//! ```

mod autorun;
mod carousel;
mod input;
mod item;
mod layout;
mod navigator;

pub mod config;
pub mod error;
pub mod event;
pub mod host;

#[cfg(test)]
mod mock;

pub use autorun::SchedulerState;
pub use carousel::Carousel;
pub use config::{Axis, CarouselConfig, Direction, RotateEndTiming};
pub use error::{CarouselError, ConfigError};
pub use event::CarouselEvent;
pub use host::{Animator, ContainerPosition, RetargetPolicy, Surface, Timer, TimerId, Transition};
pub use input::InputFlags;
pub use item::CarouselItem;
pub use understory_ellipse::{EllipseGeometry, ProjectedTransform, ProjectionParams};
