// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autorun with hover pausing on a virtual clock.
//!
//! The pointer rests on the carousel for a while, then leaves; the next advance comes a full
//! interval after it leaves.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p understory_carousel_demos --example carousel_autorun`

use core::time::Duration;

use kurbo::Size;
use understory_carousel::{Carousel, CarouselConfig};
use understory_carousel_demos::{Stage, TweenAnimator, VirtualClock, advance, log_events};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stage = (0..5).fold(Stage::new(800.0), |s, i| s.with_item(i, Size::new(120.0, 80.0)));
    let config = CarouselConfig {
        interval: Duration::from_millis(3000),
        ..Default::default()
    };
    let mut c = Carousel::new(config, stage, TweenAnimator::default(), VirtualClock::default())
        .expect("valid config");
    c.add_items(0..5).expect("all items are measurable");
    log_events(&mut c);

    advance(&mut c, Duration::from_millis(7000));
    log_events(&mut c);
    println!("after 7s: focus {:?}, {:?}", c.focused(), c.scheduler_state());

    c.pointer_enter();
    log_events(&mut c);
    advance(&mut c, Duration::from_millis(10_000));
    println!("hovered 10s: focus {:?}, {:?}", c.focused(), c.scheduler_state());

    c.pointer_leave();
    log_events(&mut c);
    advance(&mut c, Duration::from_millis(3000));
    log_events(&mut c);
    println!("left 3s: focus {:?}, {:?}", c.focused(), c.scheduler_state());
}
