// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JavaScript surface.

use understory_drag_element::DragConfig;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlElement;

use crate::binding::{DragElementBinding, attach};

/// Drag behavior handle exported to JavaScript.
///
/// ```js
/// const drag = new DragElementHandle(panel, { axis: "xy", className: "dragging" });
/// // ...
/// drag.detach();
/// ```
#[wasm_bindgen]
#[derive(Debug)]
pub struct DragElementHandle {
    binding: Option<DragElementBinding>,
}

#[wasm_bindgen]
impl DragElementHandle {
    /// Attach to `element`.
    ///
    /// `options` may be `undefined`, `null` or an object with any of
    /// `enabled`, `axis`, `icon`, `iconMarkup`, `className` and `listenScope`.
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlElement, options: JsValue) -> Result<Self, JsValue> {
        let config: DragConfig = if options.is_undefined() || options.is_null() {
            DragConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        Ok(Self {
            binding: Some(attach(element, config)?),
        })
    }

    /// `true` while a gesture is active.
    #[wasm_bindgen(getter, js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.binding
            .as_ref()
            .is_some_and(DragElementBinding::is_dragging)
    }

    /// Detach the behavior. Safe to call more than once.
    pub fn detach(&mut self) {
        self.binding = None;
    }
}

/// Route `log` output to the browser console and install the panic hook.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already initialized");
    }
}
