// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag element basics.
//!
//! Drive a draggable box through a few gestures on each axis and print the
//! style writes.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_drag_element_demos --example drag_basics`

use kurbo::{Point, Size};
use understory_drag_element::{DragAxis, DragConfig, DragElement, PointerEvent};
use understory_drag_element_demos::TraceHost;

fn main() {
    env_logger::init();

    for axis in [DragAxis::Y, DragAxis::X, DragAxis::XY] {
        println!("== axis {axis}");
        let host = TraceHost::new(10.0, 20.0, Size::new(120.0, 40.0));
        let config = DragConfig::new()
            .with_axis(axis)
            .with_icon("::")
            .with_class("dragging");
        let mut drag = DragElement::new(host, config);
        drag.decorate();

        for event in [
            PointerEvent::Down(Point::new(15.0, 25.0)),
            PointerEvent::Move(Point::new(30.0, 40.0)),
            PointerEvent::Move(Point::new(60.0, 90.0)),
            PointerEvent::Up,
            // After release, moves no longer reach the element.
            PointerEvent::Move(Point::new(200.0, 200.0)),
        ] {
            let outcome = drag.handle(event);
            println!("{event:?} -> {outcome:?}");
        }
        println!("{}", drag.host().describe());

        drag.detach();
    }

    println!("== unrecognized axis");
    let host = TraceHost::new(0.0, 0.0, Size::new(50.0, 50.0));
    let mut drag = DragElement::new(host, DragConfig::new().with_axis_str("a"));
    drag.decorate();
    drag.handle(PointerEvent::Down(Point::new(5.0, 5.0)));
    let outcome = drag.handle(PointerEvent::Move(Point::new(25.0, 25.0)));
    println!("move -> {outcome:?}");
    println!("{}", drag.host().describe());
}
