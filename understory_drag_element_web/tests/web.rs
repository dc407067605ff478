// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser tests for the DOM binding.
//!
//! Run with `wasm-pack test --headless --firefox understory_drag_element_web`.
//! These attach to real elements, dispatch synthetic mouse events and read
//! back the inline style, class list and children.

#![cfg(target_arch = "wasm32")]

use understory_drag_element_web::{DragAxis, DragConfig, DragElementHandle, ListenScope, attach};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, EventTarget, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .unwrap()
}

/// A fixed-position 40x40 box whose bounding box starts at (`left`, `top`).
fn positioned_box(left: i32, top: i32) -> HtmlElement {
    let document = document();
    let element: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    let style = element.style();
    style.set_property("position", "fixed").unwrap();
    style.set_property("left", &format!("{left}px")).unwrap();
    style.set_property("top", &format!("{top}px")).unwrap();
    style.set_property("width", "40px").unwrap();
    style.set_property("height", "40px").unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn mouse(kind: &str, x: i32, y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    init.set_bubbles(true);
    init.set_cancelable(true);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

fn dispatch(target: &EventTarget, event: &MouseEvent) {
    target.dispatch_event(event).unwrap();
}

fn style(element: &HtmlElement, property: &str) -> String {
    element.style().get_property_value(property).unwrap()
}

#[wasm_bindgen_test]
fn vertical_drag_writes_top_and_holds_left() {
    let element = positioned_box(10, 20);
    let _binding = attach(element.clone(), DragConfig::new()).unwrap();
    assert_eq!(style(&element, "cursor"), "n-resize");

    let press = mouse("mousedown", 15, 25);
    dispatch(&element, &press);
    assert!(press.default_prevented());

    dispatch(&element, &mouse("mousemove", 15, 40));
    assert_eq!(style(&element, "top"), "35px");
    assert_eq!(style(&element, "left"), "10px");

    dispatch(&element, &mouse("mouseleave", 15, 40));
    dispatch(&element, &mouse("mousemove", 15, 90));
    assert_eq!(style(&element, "top"), "35px");

    element.remove();
}

#[wasm_bindgen_test]
fn decoration_adds_icon_wrapper_and_class() {
    let element = positioned_box(0, 0);
    let _binding = attach(
        element.clone(),
        DragConfig::new()
            .with_axis(DragAxis::XY)
            .with_icon("<b>+</b>")
            .with_class("highlight"),
    )
    .unwrap();

    assert_eq!(style(&element, "cursor"), "move");
    assert!(element.class_list().contains("highlight"));

    let icon: HtmlElement = element.last_element_child().unwrap().dyn_into().unwrap();
    assert_eq!(icon.class_name(), "drag-icon-wrapper");
    assert_eq!(icon.inner_html(), "<b>+</b>");
    assert_eq!(icon.style().get_property_value("text-align").unwrap(), "center");

    element.remove();
}

#[wasm_bindgen_test]
fn document_scope_tracks_moves_outside_the_element() {
    let element = positioned_box(10, 20);
    let document = document();
    let _binding = attach(
        element.clone(),
        DragConfig::new()
            .with_axis(DragAxis::XY)
            .with_listen_scope(ListenScope::Document),
    )
    .unwrap();

    dispatch(&element, &mouse("mousedown", 15, 25));
    dispatch(&element, &mouse("mouseleave", 200, 300));
    dispatch(&document, &mouse("mousemove", 200, 300));
    assert_eq!(style(&element, "left"), "195px");
    assert_eq!(style(&element, "top"), "295px");

    dispatch(&document, &mouse("mouseup", 200, 300));
    dispatch(&document, &mouse("mousemove", 400, 400));
    assert_eq!(style(&element, "left"), "195px");

    element.remove();
}

#[wasm_bindgen_test]
fn detached_binding_ignores_events_and_keeps_its_element() {
    let element = positioned_box(10, 20);
    let mut binding = attach(element.clone(), DragConfig::new()).unwrap();

    dispatch(&element, &mouse("mousedown", 15, 25));
    assert!(binding.is_dragging());
    binding.detach();
    assert!(!binding.is_attached());
    assert_eq!(binding.element(), &element);

    dispatch(&element, &mouse("mousemove", 15, 90));
    assert_eq!(style(&element, "top"), "20px");

    element.remove();
}

#[wasm_bindgen_test]
fn disabled_binding_leaves_element_alone() {
    let element = positioned_box(10, 20);
    let _binding = attach(element.clone(), DragConfig::new().with_enabled(false)).unwrap();

    let press = mouse("mousedown", 15, 25);
    dispatch(&element, &press);
    dispatch(&element, &mouse("mousemove", 15, 90));
    assert!(!press.default_prevented());
    assert_eq!(style(&element, "cursor"), "");
    assert_eq!(style(&element, "top"), "20px");

    element.remove();
}

#[wasm_bindgen_test]
fn handle_without_options_uses_defaults() {
    let element = positioned_box(10, 20);
    let mut handle = DragElementHandle::new(element.clone(), JsValue::UNDEFINED).unwrap();
    assert_eq!(style(&element, "cursor"), "n-resize");

    dispatch(&element, &mouse("mousedown", 15, 25));
    assert!(handle.is_dragging());
    handle.detach();
    handle.detach();
    assert!(!handle.is_dragging());

    element.remove();
}
