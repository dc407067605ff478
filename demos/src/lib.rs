// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the drag element demos.

use kurbo::{Point, Size};
use understory_drag_element::{DragHost, StylePosition};

/// A headless, absolutely positioned box that logs every mutation.
#[derive(Clone, Debug)]
pub struct TraceHost {
    /// Element position; the bounding box origin follows it.
    pub position: StylePosition,
    /// Element size, used only for printing.
    pub size: Size,
    /// Current `cursor` style.
    pub cursor: Option<String>,
    /// Class list.
    pub classes: Vec<String>,
    /// Inner markup of appended icons.
    pub icons: Vec<String>,
}

impl TraceHost {
    /// A box of `size` whose top-left corner is at (`left`, `top`).
    pub fn new(left: f64, top: f64, size: Size) -> Self {
        Self {
            position: StylePosition::new(left, top),
            size,
            cursor: None,
            classes: Vec::new(),
            icons: Vec::new(),
        }
    }

    /// One-line description of the box.
    pub fn describe(&self) -> String {
        format!(
            "box at left={:?} top={:?} ({}x{}), cursor={:?}, classes={:?}, icons={}",
            self.position.left,
            self.position.top,
            self.size.width,
            self.size.height,
            self.cursor,
            self.classes,
            self.icons.len()
        )
    }
}

impl DragHost for TraceHost {
    fn bounding_origin(&self) -> Point {
        Point::new(
            self.position.left.unwrap_or_default(),
            self.position.top.unwrap_or_default(),
        )
    }

    fn style_position(&self) -> StylePosition {
        self.position
    }

    fn set_left(&mut self, px: f64) {
        log::info!("left: {px}px");
        self.position.left = Some(px);
    }

    fn set_top(&mut self, px: f64) {
        log::info!("top: {px}px");
        self.position.top = Some(px);
    }

    fn set_cursor(&mut self, cursor: &str) {
        log::info!("cursor: {cursor}");
        self.cursor = Some(cursor.to_owned());
    }

    fn add_class(&mut self, class_name: &str) {
        log::info!("class added: {class_name}");
        self.classes.push(class_name.to_owned());
    }

    fn append_icon(&mut self, markup: &str) {
        log::info!("icon appended: {markup}");
        self.icons.push(markup.to_owned());
    }
}
