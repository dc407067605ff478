// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Drag Element: make any element draggable along an axis.
//!
//! This crate provides a small behavior that turns pointer press, move,
//! release and leave notifications into `left`/`top` style writes on a host
//! element. A drag can be constrained to the horizontal axis, the vertical
//! axis, or allowed on both. The element can be decorated with a drag cursor,
//! an icon and an extra class.
//!
//! The crate does not assume any particular UI toolkit. The element is reached
//! through the [`DragHost`] trait, which supplies geometry and accepts style
//! mutations. `understory_drag_element_web` implements it for DOM elements.
//!
//! ## Lifecycle
//!
//! 1) [`DragElement::new`]: bind to a host with a [`DragConfig`].
//! 2) [`DragElement::decorate`]: once the element is rendered, apply the
//!    cursor, icon and class.
//! 3) [`DragElement::handle`]: feed [`PointerEvent`]s as they are dispatched.
//! 4) [`DragElement::detach`]: stop reacting to events.
//!
//! ## Gestures
//!
//! A press captures the pointer's offset from the element origin and the
//! element's current style position. Each move while pressed computes
//! `pointer - offset` and writes the coordinate(s) of the configured axis; the
//! other coordinate is held at the captured value. The first release or leave
//! ends the gesture. [`DragGesture`] exposes this state machine on its own.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_drag_element::{
//!     DragAxis, DragConfig, DragElement, DragHost, DragOutcome, PointerEvent, StylePosition,
//! };
//!
//! #[derive(Default)]
//! struct Panel {
//!     style: StylePosition,
//!     cursor: String,
//! }
//!
//! impl DragHost for Panel {
//!     fn bounding_origin(&self) -> Point {
//!         Point::new(self.style.left.unwrap_or(0.0), self.style.top.unwrap_or(0.0))
//!     }
//!     fn style_position(&self) -> StylePosition {
//!         self.style
//!     }
//!     fn set_left(&mut self, px: f64) {
//!         self.style.left = Some(px);
//!     }
//!     fn set_top(&mut self, px: f64) {
//!         self.style.top = Some(px);
//!     }
//!     fn set_cursor(&mut self, cursor: &str) {
//!         self.cursor = cursor.to_string();
//!     }
//!     fn add_class(&mut self, _class_name: &str) {}
//!     fn append_icon(&mut self, _markup: &str) {}
//! }
//!
//! let panel = Panel {
//!     style: StylePosition::new(10.0, 20.0),
//!     ..Panel::default()
//! };
//! let mut drag = DragElement::new(panel, DragConfig::new().with_axis(DragAxis::Y));
//! drag.decorate();
//! assert_eq!(drag.host().cursor, "n-resize");
//!
//! drag.handle(PointerEvent::Down(Point::new(15.0, 25.0)));
//! drag.handle(PointerEvent::Move(Point::new(15.0, 40.0)));
//! assert_eq!(drag.host().style, StylePosition::new(10.0, 35.0));
//!
//! drag.handle(PointerEvent::Up);
//! assert_eq!(
//!     drag.handle(PointerEvent::Move(Point::new(15.0, 90.0))),
//!     DragOutcome::Ignored
//! );
//! ```
//!
//! ## Misconfiguration
//!
//! An unrecognized axis string (see [`DragConfig::with_axis_str`]) is not an
//! error. It leaves the element without a drag cursor, and without a cursor
//! no movement is applied.
//!
//! ## Known limitation
//!
//! With the default [`ListenScope::Element`], only events on the element
//! itself are observed. A drag fast enough for the pointer to leave the
//! element ends the gesture early. [`ListenScope::Document`] asks the binding
//! to observe move and release document-wide instead.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: forward `libm` to Kurbo for `no_std` builds.
//! - `serde`: deserialize [`DragConfig`] from option objects.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod axis;
mod config;
mod element;
mod gesture;
mod host;

pub use axis::{DragAxis, DragCursor, ParseAxisError};
pub use config::{DragConfig, ListenScope};
pub use element::{DragElement, DragOutcome};
pub use gesture::{DragGesture, PointerEvent};
pub use host::{DragHost, ICON_WRAPPER_CLASS, ICON_WRAPPER_STYLE, StylePosition, parse_px};
