// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host element a drag behavior is attached to.
//!
//! [`DragHost`] is the explicit handle through which the behavior reads
//! geometry and mutates the element. A DOM binding implements it over an
//! HTML element; tests and headless tools implement it over plain data.

use kurbo::Point;

/// Class name given to the icon wrapper appended to the element.
pub const ICON_WRAPPER_CLASS: &str = "drag-icon-wrapper";

/// Inline style declarations applied to the icon wrapper, in order.
pub const ICON_WRAPPER_STYLE: &[(&str, &str)] = &[
    ("text-align", "center"),
    ("font-size", "1.5em"),
    ("padding", "0.2em 0"),
    ("color", "#1565c0"),
];

/// The `left`/`top` style of an element, in CSS pixels.
///
/// A coordinate is `None` when the style is unset or is not a pixel length.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StylePosition {
    /// The `left` style.
    pub left: Option<f64>,
    /// The `top` style.
    pub top: Option<f64>,
}

impl StylePosition {
    /// A position with both coordinates known.
    #[must_use]
    pub const fn new(left: f64, top: f64) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
        }
    }

    /// Build a position from the CSS text of the `left` and `top` properties.
    ///
    /// ```
    /// use understory_drag_element::StylePosition;
    ///
    /// let pos = StylePosition::from_css("10px", "");
    /// assert_eq!(pos.left, Some(10.0));
    /// assert_eq!(pos.top, None);
    /// ```
    #[must_use]
    pub fn from_css(left: &str, top: &str) -> Self {
        Self {
            left: parse_px(left),
            top: parse_px(top),
        }
    }
}

/// Parse a CSS pixel length such as `"12.5px"`.
///
/// `"0"` is accepted without a unit; anything else without `px` is rejected.
#[must_use]
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    if value == "0" {
        return Some(0.0);
    }
    let number = value.strip_suffix("px")?.trim_end();
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Element handle and style-mutation capability used by a drag behavior.
///
/// The behavior is the only writer of the element's position, cursor, class
/// list and icon while attached.
pub trait DragHost {
    /// Top-left corner of the element's bounding box, in the same space as
    /// pointer coordinates.
    fn bounding_origin(&self) -> Point;

    /// Current `left`/`top` style of the element.
    fn style_position(&self) -> StylePosition;

    /// Write the `left` style, in pixels.
    fn set_left(&mut self, px: f64);

    /// Write the `top` style, in pixels.
    fn set_top(&mut self, px: f64);

    /// Write the `cursor` style.
    fn set_cursor(&mut self, cursor: &str);

    /// Add a class to the element.
    fn add_class(&mut self, class_name: &str);

    /// Append an icon wrapper with [`ICON_WRAPPER_CLASS`] and
    /// [`ICON_WRAPPER_STYLE`], whose inner markup is `markup`.
    fn append_icon(&mut self, markup: &str);
}
