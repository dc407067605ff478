// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag element configuration.
//!
//! A [`DragConfig`] is resolved once when the behavior is attached and is not
//! expected to change while a gesture is active.
//!
//! ```
//! use understory_drag_element::{DragAxis, DragConfig};
//!
//! let config = DragConfig::new()
//!     .with_axis(DragAxis::XY)
//!     .with_icon("<i class=\"fa fa-arrows\"></i>")
//!     .with_class("highlight");
//!
//! assert!(config.enabled);
//! assert!(config.icon);
//! assert_eq!(config.class_name.as_deref(), Some("highlight"));
//! ```

use alloc::string::String;

use crate::axis::{DragAxis, DragCursor};

/// Where move and release events are listened for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ListenScope {
    /// Only on the dragged element.
    ///
    /// Leaving the element ends the gesture, so a pointer that outruns the
    /// element during a fast drag stops moving it.
    #[default]
    Element,
    /// Move and release are observed document-wide; leaving the element does
    /// not end the gesture.
    Document,
}

impl ListenScope {
    /// Returns `true` if a leave notification terminates the active gesture.
    #[must_use]
    pub const fn ends_on_leave(self) -> bool {
        matches!(self, Self::Element)
    }
}

/// Configuration of a draggable element.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DragConfig {
    /// Turns dragging on or off. Disabled elements are neither decorated nor moved.
    pub enabled: bool,
    /// Axis to drag along; `None` when the configured axis was not recognized.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient_axis"))]
    pub axis: Option<DragAxis>,
    /// Append a drag icon to the element.
    pub icon: bool,
    /// Markup placed inside the icon wrapper.
    pub icon_markup: Option<String>,
    /// Extra class added to the element.
    pub class_name: Option<String>,
    /// Where move and release are observed.
    pub listen_scope: ListenScope,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            axis: Some(DragAxis::default()),
            icon: false,
            icon_markup: None,
            class_name: None,
            listen_scope: ListenScope::default(),
        }
    }
}

impl DragConfig {
    /// Create the default configuration: enabled, vertical, no icon, no class.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether dragging is enabled.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the drag axis.
    #[must_use]
    pub fn with_axis(mut self, axis: DragAxis) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Set the drag axis from its configuration string.
    ///
    /// An unrecognized value is not an error: the axis becomes `None`, which
    /// leaves the element without a drag cursor and without movement.
    #[must_use]
    pub fn with_axis_str(mut self, axis: &str) -> Self {
        self.axis = match axis.parse() {
            Ok(axis) => Some(axis),
            Err(err) => {
                log::warn!("{err}; element will not move");
                None
            }
        };
        self
    }

    /// Show a drag icon with the given markup.
    #[must_use]
    pub fn with_icon(mut self, markup: impl Into<String>) -> Self {
        self.icon = true;
        self.icon_markup = Some(markup.into());
        self
    }

    /// Add `class_name` to the element once it is decorated.
    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set where move and release are observed.
    #[must_use]
    pub fn with_listen_scope(mut self, scope: ListenScope) -> Self {
        self.listen_scope = scope;
        self
    }

    /// The cursor derived from the configured axis.
    #[must_use]
    pub fn cursor(&self) -> Option<DragCursor> {
        self.axis.map(DragAxis::cursor)
    }
}

#[cfg(feature = "serde")]
fn lenient_axis<'de, D>(deserializer: D) -> Result<Option<DragAxis>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(match raw {
        None => Some(DragAxis::default()),
        Some(raw) => match raw.parse() {
            Ok(axis) => Some(axis),
            Err(err) => {
                log::warn!("{err}; element will not move");
                None
            }
        },
    })
}
