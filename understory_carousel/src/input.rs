// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input routing: wheel navigation and container resizes.
//!
//! [`InputFlags`] tell the host which inputs the carousel listens to, derived once from the
//! configuration. Hover is handled by the autorun scheduler.

use log::debug;

use crate::carousel::Carousel;
use crate::config::CarouselConfig;
use crate::host::{Animator, Surface, Timer};

bitflags::bitflags! {
    /// Inputs a carousel responds to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InputFlags: u8 {
        /// Wheel deltas navigate.
        const WHEEL  = 0b0000_0001;
        /// Container resizes trigger a layout pass.
        const RESIZE = 0b0000_0010;
        /// Pointer enter/leave pause and resume autorun.
        const HOVER  = 0b0000_0100;
    }
}

impl Default for InputFlags {
    fn default() -> Self {
        Self::RESIZE
    }
}

impl InputFlags {
    /// Inputs implied by `config`.
    pub fn for_config(config: &CarouselConfig) -> Self {
        let mut flags = Self::default();
        flags.set(Self::WHEEL, config.enable_wheel_input);
        flags.set(Self::HOVER, config.auto_run && config.stop_on_hover);
        flags
    }
}

impl<H, S, A, T> Carousel<H, S, A, T>
where
    H: Clone + PartialEq,
    S: Surface<H>,
    A: Animator<H>,
    T: Timer,
{
    /// Route a wheel delta. Positive deltas go to the next item, negative to the previous.
    ///
    /// Returns `true` if the delta was consumed; hosts should then suppress their default
    /// scrolling. A zero (or NaN) delta, or wheel input being disabled, leaves the carousel
    /// untouched.
    pub fn wheel(&mut self, delta: f64) -> bool {
        if !self.inputs.contains(InputFlags::WHEEL) {
            return false;
        }
        if delta > 0.0 {
            debug!("wheel {delta}: next");
            self.next();
        } else if delta < 0.0 {
            debug!("wheel {delta}: previous");
            self.previous();
        } else {
            return false;
        }
        true
    }

    /// The container was resized: recompute the geometry and re-place every item.
    pub fn resize(&mut self) -> &mut Self {
        debug!("resize to {:?}", self.surface.size());
        self.invalidate();
        self
    }
}
