// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use understory_drag_element::{DragHost, ICON_WRAPPER_CLASS, ICON_WRAPPER_STYLE, StylePosition};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// [`DragHost`] over a DOM element.
///
/// Reads geometry from `getBoundingClientRect()` and the inline style, and
/// writes inline style, the class list and a child icon wrapper. Failed
/// writes are logged and otherwise ignored.
#[derive(Clone, Debug)]
pub struct WebHost {
    element: HtmlElement,
}

impl WebHost {
    /// Wrap a DOM element.
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// The wrapped element.
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(err) = self.element.style().set_property(property, value) {
            log::warn!("failed to set `{property}: {value}`: {err:?}");
        }
    }

    fn style_value(&self, property: &str) -> String {
        self.element
            .style()
            .get_property_value(property)
            .unwrap_or_default()
    }

    fn try_append_icon(&self, markup: &str) -> Result<(), JsValue> {
        let document = self
            .element
            .owner_document()
            .ok_or_else(|| JsValue::from_str("element has no owner document"))?;
        let wrapper: HtmlElement = document.create_element("div")?.dyn_into()?;
        wrapper.set_class_name(ICON_WRAPPER_CLASS);
        let style = wrapper.style();
        for &(property, value) in ICON_WRAPPER_STYLE {
            style.set_property(property, value)?;
        }
        wrapper.set_inner_html(markup);
        self.element.append_child(&wrapper)?;
        Ok(())
    }
}

impl DragHost for WebHost {
    fn bounding_origin(&self) -> Point {
        let rect = self.element.get_bounding_client_rect();
        Point::new(rect.left(), rect.top())
    }

    fn style_position(&self) -> StylePosition {
        StylePosition::from_css(&self.style_value("left"), &self.style_value("top"))
    }

    fn set_left(&mut self, px: f64) {
        self.set_style("left", &format!("{px}px"));
    }

    fn set_top(&mut self, px: f64) {
        self.set_style("top", &format!("{px}px"));
    }

    fn set_cursor(&mut self, cursor: &str) {
        self.set_style("cursor", cursor);
    }

    fn add_class(&mut self, class_name: &str) {
        if let Err(err) = self.element.class_list().add_1(class_name) {
            log::warn!("failed to add class `{class_name}`: {err:?}");
        }
    }

    fn append_icon(&mut self, markup: &str) {
        if let Err(err) = self.try_append_icon(markup) {
            log::warn!("failed to append drag icon: {err:?}");
        }
    }
}
