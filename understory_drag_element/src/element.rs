// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The draggable-element behavior.
//!
//! [`DragElement`] owns a [`DragHost`] and a [`DragConfig`] and walks through
//! three phases:
//!
//! - **Setup** ([`DragElement::new`]): subscribe to pointer events if enabled.
//!   Nothing touches the host yet.
//! - **Decoration** ([`DragElement::decorate`]): once the element is in the
//!   render tree, derive the cursor, append the icon and add the class.
//! - **Teardown** ([`DragElement::detach`]): drop the subscription so no
//!   further event mutates the element.
//!
//! Between setup and teardown, [`DragElement::handle`] consumes
//! [`PointerEvent`]s in dispatch order and writes `left`/`top` for the
//! configured axis.

use kurbo::{Point, Vec2};

use crate::axis::{DragAxis, DragCursor};
use crate::config::DragConfig;
use crate::gesture::{DragGesture, PointerEvent};
use crate::host::{DragHost, StylePosition};

/// What a [`PointerEvent`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    /// The event had no effect.
    Ignored,
    /// A gesture started. The caller should prevent the default action of the
    /// press (text selection, native image drag).
    Started {
        /// Pointer offset from the element origin.
        offset: Vec2,
    },
    /// The element was moved.
    Moved {
        /// The coordinates written to the element. A `None` coordinate was
        /// left untouched.
        position: StylePosition,
    },
    /// The active gesture ended.
    Ended,
}

/// Draggable-element behavior bound to a host element.
#[derive(Debug)]
pub struct DragElement<H> {
    host: H,
    config: DragConfig,
    cursor: Option<DragCursor>,
    gesture: DragGesture,
    decorated: bool,
    subscribed: bool,
    detached: bool,
}

impl<H: DragHost> DragElement<H> {
    /// Bind the behavior to `host`.
    ///
    /// The gesture subscription is only established when `config.enabled`.
    pub fn new(host: H, config: DragConfig) -> Self {
        let subscribed = config.enabled;
        Self {
            host,
            config,
            cursor: None,
            gesture: DragGesture::Idle,
            decorated: false,
            subscribed,
            detached: false,
        }
    }

    /// Apply the visual configuration once the element exists.
    ///
    /// Does nothing when disabled, when already decorated, or after
    /// [`DragElement::detach`].
    pub fn decorate(&mut self) {
        if !self.config.enabled || self.decorated || self.detached {
            return;
        }
        self.decorated = true;
        self.cursor = self.config.cursor();

        if self.config.icon {
            self.host
                .append_icon(self.config.icon_markup.as_deref().unwrap_or_default());
        }
        if let Some(cursor) = self.cursor {
            self.host.set_cursor(cursor.as_css());
        }
        if let Some(class_name) = &self.config.class_name {
            self.host.add_class(class_name);
        }
    }

    /// Feed one pointer event to the behavior.
    pub fn handle(&mut self, event: PointerEvent) -> DragOutcome {
        if !self.subscribed {
            return DragOutcome::Ignored;
        }
        match event {
            PointerEvent::Down(pointer) => {
                let origin = self.host.bounding_origin();
                let initial = self.host.style_position();
                let offset = self.gesture.start(pointer, origin, initial);
                log::debug!("drag started at {pointer:?}, offset {offset:?}");
                DragOutcome::Started { offset }
            }
            PointerEvent::Move(pointer) => match self.gesture.update(pointer) {
                Some(candidate) => self.apply(candidate),
                None => DragOutcome::Ignored,
            },
            PointerEvent::Up => self.end(),
            PointerEvent::Leave if self.config.listen_scope.ends_on_leave() => self.end(),
            PointerEvent::Leave => DragOutcome::Ignored,
        }
    }

    /// Cancel the subscription. Later events, including moves of a gesture in
    /// progress, no longer touch the element.
    pub fn detach(&mut self) {
        if self.subscribed {
            log::debug!("drag element detached");
        }
        self.subscribed = false;
        self.detached = true;
        self.gesture = DragGesture::Idle;
    }

    fn end(&mut self) -> DragOutcome {
        if self.gesture.end() {
            log::debug!("drag ended");
            DragOutcome::Ended
        } else {
            DragOutcome::Ignored
        }
    }

    fn apply(&mut self, candidate: Point) -> DragOutcome {
        if self.cursor.is_none() {
            return DragOutcome::Ignored;
        }
        let (Some(axis), Some(initial)) = (self.config.axis, self.gesture.initial()) else {
            return DragOutcome::Ignored;
        };
        let position = match axis {
            DragAxis::X => StylePosition {
                left: Some(candidate.x),
                top: initial.top,
            },
            DragAxis::Y => StylePosition {
                left: initial.left,
                top: Some(candidate.y),
            },
            DragAxis::XY => StylePosition::new(candidate.x, candidate.y),
        };
        if let Some(left) = position.left {
            self.host.set_left(left);
        }
        if let Some(top) = position.top {
            self.host.set_top(top);
        }
        DragOutcome::Moved { position }
    }
}

impl<H> DragElement<H> {
    /// The configuration this behavior was attached with.
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// The cursor established by decoration, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<DragCursor> {
        self.cursor
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Returns `true` until [`DragElement::detach`] is called on an enabled behavior.
    ///
    /// A disabled behavior is never attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscribed
    }

    /// Returns `true` once decoration has run.
    #[must_use]
    pub fn is_decorated(&self) -> bool {
        self.decorated
    }

    /// The host element.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host element, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the behavior and return the host.
    pub fn into_host(self) -> H {
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListenScope;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct TestHost {
        origin: Point,
        style: StylePosition,
        cursor: Option<String>,
        classes: Vec<String>,
        icons: Vec<String>,
        writes: usize,
    }

    impl TestHost {
        fn at(left: f64, top: f64) -> Self {
            Self {
                origin: Point::new(left, top),
                style: StylePosition::new(left, top),
                ..Self::default()
            }
        }
    }

    impl DragHost for TestHost {
        fn bounding_origin(&self) -> Point {
            self.origin
        }
        fn style_position(&self) -> StylePosition {
            self.style
        }
        fn set_left(&mut self, px: f64) {
            self.style.left = Some(px);
            self.origin.x = px;
            self.writes += 1;
        }
        fn set_top(&mut self, px: f64) {
            self.style.top = Some(px);
            self.origin.y = px;
            self.writes += 1;
        }
        fn set_cursor(&mut self, cursor: &str) {
            self.cursor = Some(cursor.to_string());
        }
        fn add_class(&mut self, class_name: &str) {
            self.classes.push(class_name.to_string());
        }
        fn append_icon(&mut self, markup: &str) {
            self.icons.push(markup.to_string());
        }
    }

    fn attached(host: TestHost, config: DragConfig) -> DragElement<TestHost> {
        let mut element = DragElement::new(host, config);
        element.decorate();
        element
    }

    #[test]
    fn setup_does_not_touch_host() {
        let element = DragElement::new(TestHost::at(0.0, 0.0), DragConfig::new().with_class("c"));
        assert!(element.is_attached());
        assert!(!element.is_decorated());
        assert_eq!(element.host().cursor, None);
        assert!(element.host().classes.is_empty());
    }

    #[test]
    fn decorate_runs_once() {
        let mut element = DragElement::new(
            TestHost::at(0.0, 0.0),
            DragConfig::new().with_icon("+").with_class("c"),
        );
        element.decorate();
        element.decorate();
        assert_eq!(element.host().icons, ["+"]);
        assert_eq!(element.host().classes, ["c"]);
    }

    #[test]
    fn icon_without_markup_appends_empty_wrapper() {
        let config = DragConfig {
            icon: true,
            ..DragConfig::default()
        };
        let element = attached(TestHost::at(0.0, 0.0), config);
        assert_eq!(element.host().icons, [""]);
    }

    #[test]
    fn press_reports_offset() {
        let mut element = attached(TestHost::at(10.0, 20.0), DragConfig::new());
        let outcome = element.handle(PointerEvent::Down(Point::new(15.0, 25.0)));
        assert_eq!(
            outcome,
            DragOutcome::Started {
                offset: Vec2::new(5.0, 5.0)
            }
        );
        assert!(element.is_dragging());
    }

    #[test]
    fn horizontal_drag_holds_top() {
        let mut element = attached(
            TestHost::at(10.0, 20.0),
            DragConfig::new().with_axis(DragAxis::X),
        );
        element.handle(PointerEvent::Down(Point::new(15.0, 25.0)));
        let outcome = element.handle(PointerEvent::Move(Point::new(40.0, 90.0)));
        assert_eq!(
            outcome,
            DragOutcome::Moved {
                position: StylePosition::new(35.0, 20.0)
            }
        );
        assert_eq!(element.host().style, StylePosition::new(35.0, 20.0));
    }

    #[test]
    fn moves_before_press_are_ignored() {
        let mut element = attached(TestHost::at(10.0, 20.0), DragConfig::new());
        assert_eq!(
            element.handle(PointerEvent::Move(Point::new(50.0, 50.0))),
            DragOutcome::Ignored
        );
        assert_eq!(element.host().writes, 0);
    }

    #[test]
    fn unset_held_coordinate_is_not_written() {
        let host = TestHost {
            style: StylePosition {
                left: None,
                top: Some(20.0),
            },
            origin: Point::new(10.0, 20.0),
            ..TestHost::default()
        };
        let mut element = attached(host, DragConfig::new());
        element.handle(PointerEvent::Down(Point::new(15.0, 25.0)));
        let outcome = element.handle(PointerEvent::Move(Point::new(15.0, 40.0)));
        assert_eq!(
            outcome,
            DragOutcome::Moved {
                position: StylePosition {
                    left: None,
                    top: Some(35.0)
                }
            }
        );
        assert_eq!(element.host().writes, 1);
        assert_eq!(element.host().style.left, None);
    }

    #[test]
    fn leave_is_ignored_with_document_scope() {
        let mut element = attached(
            TestHost::at(0.0, 0.0),
            DragConfig::new().with_listen_scope(ListenScope::Document),
        );
        element.handle(PointerEvent::Down(Point::new(1.0, 1.0)));
        assert_eq!(element.handle(PointerEvent::Leave), DragOutcome::Ignored);
        assert!(element.is_dragging());
        assert_eq!(element.handle(PointerEvent::Up), DragOutcome::Ended);
    }

    #[test]
    fn second_termination_is_ignored() {
        let mut element = attached(TestHost::at(0.0, 0.0), DragConfig::new());
        element.handle(PointerEvent::Down(Point::new(1.0, 1.0)));
        assert_eq!(element.handle(PointerEvent::Leave), DragOutcome::Ended);
        assert_eq!(element.handle(PointerEvent::Up), DragOutcome::Ignored);
    }

    #[test]
    fn no_movement_before_decoration() {
        let mut element = DragElement::new(TestHost::at(0.0, 0.0), DragConfig::new());
        element.handle(PointerEvent::Down(Point::new(1.0, 1.0)));
        assert_eq!(
            element.handle(PointerEvent::Move(Point::new(1.0, 50.0))),
            DragOutcome::Ignored
        );
        assert_eq!(element.host().writes, 0);
    }

    #[test]
    fn detach_on_disabled_element_is_harmless() {
        let mut element = attached(
            TestHost::at(0.0, 0.0),
            DragConfig::new().with_enabled(false),
        );
        assert!(!element.is_attached());
        element.detach();
        assert!(!element.is_attached());
    }

    #[test]
    fn into_host_returns_the_mutated_host() {
        let mut element = attached(TestHost::at(0.0, 0.0), DragConfig::new());
        element.handle(PointerEvent::Down(Point::new(0.0, 0.0)));
        element.handle(PointerEvent::Move(Point::new(0.0, 12.0)));
        let host = element.into_host();
        assert_eq!(host.style.top, Some(12.0));
    }
}
