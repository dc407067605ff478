// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag axes and the cursors derived from them.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// Which position coordinate(s) a drag is permitted to update.
///
/// Parsed from the case-sensitive strings `"x"`, `"y"` and `"xy"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragAxis {
    /// Horizontal only: `left` follows the pointer, `top` is held.
    X,
    /// Vertical only: `top` follows the pointer, `left` is held.
    #[default]
    Y,
    /// Both coordinates follow the pointer.
    XY,
}

impl DragAxis {
    /// The configuration string for this axis.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::XY => "xy",
        }
    }

    /// The cursor shown over an element dragged along this axis.
    #[must_use]
    pub const fn cursor(self) -> DragCursor {
        match self {
            Self::X => DragCursor::EResize,
            Self::Y => DragCursor::NResize,
            Self::XY => DragCursor::Move,
        }
    }

    /// Returns `true` if a drag along this axis writes `left`.
    #[must_use]
    pub const fn moves_x(self) -> bool {
        matches!(self, Self::X | Self::XY)
    }

    /// Returns `true` if a drag along this axis writes `top`.
    #[must_use]
    pub const fn moves_y(self) -> bool {
        matches!(self, Self::Y | Self::XY)
    }
}

impl fmt::Display for DragAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DragAxis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "xy" => Ok(Self::XY),
            other => Err(ParseAxisError {
                value: other.to_string(),
            }),
        }
    }
}

/// Error returned when a string does not name a [`DragAxis`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized drag axis {value:?}, expected \"x\", \"y\" or \"xy\"")]
pub struct ParseAxisError {
    value: String,
}

impl ParseAxisError {
    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Cursor applied to a draggable element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragCursor {
    /// Vertical resize cursor (`n-resize`).
    NResize,
    /// Horizontal resize cursor (`e-resize`).
    EResize,
    /// Free movement cursor (`move`).
    Move,
}

impl DragCursor {
    /// The CSS `cursor` keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::NResize => "n-resize",
            Self::EResize => "e-resize",
            Self::Move => "move",
        }
    }
}

impl fmt::Display for DragCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}
