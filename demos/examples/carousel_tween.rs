// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sample a rotation frame by frame.
//!
//! A second navigation arrives mid-rotation. Every rotation starts with an immediate layout pass,
//! so the items first snap to where the interrupted rotation was heading, then ease towards the
//! new focus.
//!
//! Run:
//! - `cargo run -p understory_carousel_demos --example carousel_tween`

use core::time::Duration;

use kurbo::Size;
use understory_carousel::{Carousel, CarouselConfig, RetargetPolicy};
use understory_carousel_demos::{Stage, TweenAnimator, VirtualClock, advance, log_events};

const FRAME: Duration = Duration::from_millis(100);

fn main() {
    env_logger::init();

    let stage = (0..4).fold(Stage::new(800.0), |s, i| s.with_item(i, Size::new(100.0, 60.0)));
    let config = CarouselConfig {
        auto_run: false,
        transition_policy: RetargetPolicy::CancelAndRestart,
        ..Default::default()
    };
    let mut c = Carousel::new(config, stage, TweenAnimator::default(), VirtualClock::default())
        .expect("valid config");
    c.add_items(0..4).expect("all items are measurable");

    c.go_to(1);
    for frame in 0..12 {
        if frame == 2 {
            c.go_to(2);
        }
        advance(&mut c, FRAME);
        if let Some(t) = c.animator().current(2) {
            println!(
                "{:>5} ms  item 2 at x {:>5.1}, width {:>5.1}, z {}",
                c.timer().now().as_millis(),
                t.origin.x,
                t.size.width,
                t.depth
            );
        }
    }
    log_events(&mut c);
}
