// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications emitted by the carousel.
//!
//! Events are queued synchronously as state changes and handed out by
//! [`Carousel::drain_events`](crate::Carousel::drain_events), in emission order.

use core::time::Duration;

/// A carousel notification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum CarouselEvent {
    /// A layout pass placed every item without animation.
    Init,
    /// Items started moving towards a new focus.
    RotateStart {
        /// The newly focused position.
        focused: usize,
    },
    /// A rotation finished (or, with
    /// [`RotateEndTiming::Immediate`](crate::RotateEndTiming::Immediate), was submitted).
    RotateEnd {
        /// Focus the rotation was heading to.
        focused: usize,
        /// The configured rotation length.
        duration: Duration,
    },
    /// Automatic advancing resumed.
    Start,
    /// Automatic advancing paused.
    Stop,
}

impl CarouselEvent {
    /// Conventional event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::RotateStart { .. } => "rotateStart",
            Self::RotateEnd { .. } => "rotateEnd",
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}
