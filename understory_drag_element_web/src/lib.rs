// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM binding for `understory_drag_element`.
//!
//! This crate attaches a [`DragElement`](understory_drag_element::DragElement)
//! to a `web_sys::HtmlElement` when targeting `wasm32`.
//!
//! # Usage
//!
//! From Rust, call `attach` with an element that is already in the document
//! and keep the returned `DragElementBinding` alive for as long as the element
//! should stay draggable:
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn make_draggable(
//!     panel: web_sys::HtmlElement,
//! ) -> Result<understory_drag_element_web::DragElementBinding, wasm_bindgen::JsValue> {
//!     use understory_drag_element_web::{DragAxis, DragConfig};
//!
//!     let config = DragConfig::new()
//!         .with_axis(DragAxis::XY)
//!         .with_icon("<i class=\"fa fa-arrows\"></i>")
//!         .with_class("draggable");
//!     understory_drag_element_web::attach(panel, config)
//! }
//! ```
//!
//! From JavaScript, construct a `DragElementHandle` with an options object and
//! call `detach()` when the element is removed. `initLogging()` routes `log`
//! output to the console.
//!
//! Notes:
//! - Listeners use mouse events: `mousedown` on the element, `mousemove` and
//!   `mouseup` on the element or, with `ListenScope::Document`, on the owner
//!   document, and `mouseleave` on the element.
//! - A press that starts a gesture has its default action prevented.
//! - Positions are written to the inline `left`/`top` style; the element is
//!   expected to be positioned (`relative`, `absolute` or `fixed`).
//! - On targets other than `wasm32`, only the listener plan and the re-exported
//!   configuration types are available.

mod listeners;

#[cfg(target_arch = "wasm32")]
mod binding;
#[cfg(target_arch = "wasm32")]
mod handle;
#[cfg(target_arch = "wasm32")]
mod host;

pub use listeners::{DomListener, ListenerTarget, listeners_for};
pub use understory_drag_element::{DragAxis, DragConfig, ListenScope};

#[cfg(target_arch = "wasm32")]
pub use binding::{DragElementBinding, attach};
#[cfg(target_arch = "wasm32")]
pub use handle::{DragElementHandle, init_logging};
#[cfg(target_arch = "wasm32")]
pub use host::WebHost;
