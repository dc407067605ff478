// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use kurbo::Point;
use understory_drag_element::{DragConfig, DragElement, DragOutcome};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{EventTarget, HtmlElement, MouseEvent};

use crate::host::WebHost;
use crate::listeners::{DomListener, ListenerTarget, listeners_for};

type SharedElement = Rc<RefCell<DragElement<WebHost>>>;

/// A registered DOM listener; removed from its target on drop.
struct Registration {
    target: EventTarget,
    listener: DomListener,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl Registration {
    fn new(
        target: EventTarget,
        listener: DomListener,
        element: &SharedElement,
    ) -> Result<Self, JsValue> {
        let element = Rc::clone(element);
        let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
            let Ok(mut element) = element.try_borrow_mut() else {
                log::warn!("re-entrant `{}` ignored", listener.event_type());
                return;
            };
            let client = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
            if let DragOutcome::Started { .. } = element.handle(listener.pointer_event(client)) {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        target.add_event_listener_with_callback(
            listener.event_type(),
            callback.as_ref().unchecked_ref(),
        )?;
        Ok(Self {
            target,
            listener,
            callback,
        })
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove_event_listener_with_callback(
            self.listener.event_type(),
            self.callback.as_ref().unchecked_ref(),
        ) {
            log::warn!(
                "failed to remove `{}` listener: {err:?}",
                self.listener.event_type()
            );
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("listener", &self.listener)
            .finish_non_exhaustive()
    }
}

/// A drag behavior attached to a DOM element.
///
/// Dropping the binding detaches the behavior and removes its listeners.
#[derive(Debug)]
pub struct DragElementBinding {
    dom_element: HtmlElement,
    element: SharedElement,
    registrations: Vec<Registration>,
}

impl DragElementBinding {
    /// Returns `true` while a gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.element
            .try_borrow()
            .is_ok_and(|element| element.is_dragging())
    }

    /// Returns `true` until the binding is detached.
    pub fn is_attached(&self) -> bool {
        self.element
            .try_borrow()
            .is_ok_and(|element| element.is_attached())
    }

    /// The element the behavior is attached to.
    pub fn element(&self) -> &HtmlElement {
        &self.dom_element
    }

    /// Detach the behavior and remove its listeners.
    pub fn detach(&mut self) {
        self.registrations.clear();
        if let Ok(mut element) = self.element.try_borrow_mut() {
            element.detach();
        }
    }
}

impl Drop for DragElementBinding {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Attach a drag behavior to `element`.
///
/// The element is decorated immediately, so it should already be in the
/// document. Listeners are only registered when `config.enabled`.
pub fn attach(element: HtmlElement, config: DragConfig) -> Result<DragElementBinding, JsValue> {
    let listeners = listeners_for(&config);
    let scope = config.listen_scope;

    let element_target: EventTarget = element.clone().into();
    let document_target: Option<EventTarget> = element.owner_document().map(Into::into);

    let dom_element = element.clone();
    let shared = Rc::new(RefCell::new(DragElement::new(WebHost::new(element), config)));
    shared.borrow_mut().decorate();

    let mut registrations = Vec::with_capacity(listeners.len());
    for listener in listeners {
        let target = match listener.target(scope) {
            ListenerTarget::Element => element_target.clone(),
            ListenerTarget::Document => document_target
                .clone()
                .ok_or_else(|| JsValue::from_str("element has no owner document"))?,
        };
        registrations.push(Registration::new(target, listener, &shared)?);
    }
    log::debug!("drag element attached with {} listeners", registrations.len());

    Ok(DragElementBinding {
        dom_element,
        element: shared,
        registrations,
    })
}
