// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state: turn press/move/release into candidate element positions.
//!
//! ## Usage
//!
//! 1) On press, call [`DragGesture::start`] with the pointer, the element's
//!    bounding-box origin and its current style position. The returned offset
//!    is the pointer's position relative to the element.
//! 2) On each move, call [`DragGesture::update`] to get the candidate
//!    element origin (pointer − offset).
//! 3) On release or leave, call [`DragGesture::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_drag_element::{DragGesture, StylePosition};
//!
//! let mut gesture = DragGesture::default();
//!
//! // Element at (10, 20), pressed at (15, 25).
//! let offset = gesture.start(
//!     Point::new(15.0, 25.0),
//!     Point::new(10.0, 20.0),
//!     StylePosition::new(10.0, 20.0),
//! );
//! assert_eq!(offset, Vec2::new(5.0, 5.0));
//!
//! // Moving to (15, 40) puts the element's origin at (10, 35).
//! assert_eq!(gesture.update(Point::new(15.0, 40.0)), Some(Point::new(10.0, 35.0)));
//!
//! assert!(gesture.end());
//! assert_eq!(gesture.update(Point::new(0.0, 0.0)), None);
//! ```

use kurbo::{Point, Vec2};

use crate::host::StylePosition;

/// A raw pointer notification delivered to a drag behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed at the given position.
    Down(Point),
    /// Pointer moved to the given position.
    Move(Point),
    /// Pointer released.
    Up,
    /// Pointer left the element.
    Leave,
}

/// Tracks whether a press-to-release gesture is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragGesture {
    /// No gesture is active.
    #[default]
    Idle,
    /// A gesture is active.
    Dragging {
        /// Pointer position relative to the element origin at press time.
        offset: Vec2,
        /// Element style position captured at press time.
        initial: StylePosition,
    },
}

impl DragGesture {
    /// Begin a gesture, replacing any gesture already in progress.
    ///
    /// Returns the pointer offset from `origin`.
    pub fn start(&mut self, pointer: Point, origin: Point, initial: StylePosition) -> Vec2 {
        let offset = pointer - origin;
        *self = Self::Dragging { offset, initial };
        offset
    }

    /// Candidate element origin for a pointer at `pointer`, or `None` when idle.
    #[must_use]
    pub fn update(&self, pointer: Point) -> Option<Point> {
        self.offset().map(|offset| pointer - offset)
    }

    /// End the gesture. Returns `true` if one was active.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = Self::Idle;
        was_dragging
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Offset captured at the start of the active gesture.
    #[must_use]
    pub fn offset(&self) -> Option<Vec2> {
        match *self {
            Self::Dragging { offset, .. } => Some(offset),
            Self::Idle => None,
        }
    }

    /// Style position captured at the start of the active gesture.
    #[must_use]
    pub fn initial(&self) -> Option<StylePosition> {
        match *self {
            Self::Dragging { initial, .. } => Some(initial),
            Self::Idle => None,
        }
    }
}
