// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lay out a ring, navigate it, and print where each item lands.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_carousel_demos --example carousel_basics`

use core::time::Duration;

use kurbo::Size;
use understory_carousel::{Carousel, CarouselConfig, Direction, RotateEndTiming};
use understory_carousel_demos::{
    DemoCarousel, Stage, TweenAnimator, VirtualClock, advance, log_events,
};

fn print_ring(c: &DemoCarousel) {
    println!("focus = {:?}", c.focused());
    for item in c.items() {
        let id = *item.handle();
        if let Some(t) = c.animator().current(id) {
            println!(
                "  item {id}: origin ({:>5.0}, {:>4.0})  size {:>3.0}x{:<3.0}  z {}",
                t.origin.x, t.origin.y, t.size.width, t.size.height, t.depth
            );
        }
    }
}

fn main() {
    env_logger::init();

    let stage = (0..6).fold(Stage::new(960.0), |s, i| {
        s.with_item(i, Size::new(160.0, 100.0 + f64::from(i) * 4.0))
    });
    let config = CarouselConfig {
        auto_run: false,
        direction: Direction::Clockwise,
        rotate_end: RotateEndTiming::Immediate,
        ..Default::default()
    };
    let mut c = Carousel::new(config, stage, TweenAnimator::default(), VirtualClock::default())
        .expect("valid config");
    c.add_items(0..6).expect("all items are measurable");
    println!("content size: {:?}", c.content_size());
    print_ring(&c);

    c.next();
    advance(&mut c, Duration::from_millis(500));
    print_ring(&c);

    c.focus(&4);
    advance(&mut c, Duration::from_millis(500));
    print_ring(&c);

    // A negative wheel delta goes to the previous item.
    c.wheel(-1.0);
    advance(&mut c, Duration::from_millis(500));
    print_ring(&c);

    c.surface_mut().set_width(640.0);
    c.resize();
    print_ring(&c);

    log_events(&mut c);
}
