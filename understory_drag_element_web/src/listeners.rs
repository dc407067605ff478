// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which DOM listeners a binding registers, and how their events map onto
//! [`PointerEvent`]s.

use kurbo::Point;
use understory_drag_element::{DragConfig, ListenScope, PointerEvent};

/// Where a DOM listener is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The dragged element.
    Element,
    /// The element's owner document.
    Document,
}

/// A DOM listener registered by the binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DomListener {
    /// `mousedown`, always on the element.
    Press,
    /// `mousemove`.
    Move,
    /// `mouseup`.
    Release,
    /// `mouseleave`, only registered when leaving ends the gesture.
    Leave,
}

impl DomListener {
    /// The DOM event type.
    #[must_use]
    pub const fn event_type(self) -> &'static str {
        match self {
            Self::Press => "mousedown",
            Self::Move => "mousemove",
            Self::Release => "mouseup",
            Self::Leave => "mouseleave",
        }
    }

    /// Where this listener is registered for the given scope.
    #[must_use]
    pub const fn target(self, scope: ListenScope) -> ListenerTarget {
        match (self, scope) {
            (Self::Move | Self::Release, ListenScope::Document) => ListenerTarget::Document,
            _ => ListenerTarget::Element,
        }
    }

    /// Translate a DOM event with the given client coordinates.
    #[must_use]
    pub const fn pointer_event(self, client: Point) -> PointerEvent {
        match self {
            Self::Press => PointerEvent::Down(client),
            Self::Move => PointerEvent::Move(client),
            Self::Release => PointerEvent::Up,
            Self::Leave => PointerEvent::Leave,
        }
    }
}

/// The listeners to register for `config`. A disabled configuration registers none.
#[must_use]
pub fn listeners_for(config: &DragConfig) -> Vec<DomListener> {
    let mut listeners = Vec::new();
    if !config.enabled {
        return listeners;
    }
    listeners.extend([DomListener::Press, DomListener::Move, DomListener::Release]);
    if config.listen_scope.ends_on_leave() {
        listeners.push(DomListener::Leave);
    }
    listeners
}
