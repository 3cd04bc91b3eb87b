//! Side labels and side-length parsing.

use bigdecimal::{BigDecimal, Zero};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseSideError;

/// One of the three labelled sides of a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    A,
    B,
    C,
}

impl Side {
    /// All sides in validation order.
    pub const ALL: [Side; 3] = [Side::A, Side::B, Side::C];

    /// Bare letter used in prompts.
    pub fn letter(&self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
            Side::C => "C",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "side{}", self.letter())
    }
}

/// A side length as read from a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideInput {
    /// A strictly positive length
    Length(BigDecimal),
    /// An exact zero, used as the "stop asking" signal
    Abort,
}

/// Parse user text into a side length.
///
/// Accepts plain and scientific notation (`2.5`, `91E+1000000000`).
/// Any representation of zero maps to [`SideInput::Abort`].
pub fn parse_side(text: &str) -> Result<SideInput, ParseSideError> {
    let trimmed = text.trim();
    let value = BigDecimal::from_str(trimmed)
        .map_err(|_| ParseSideError::NotANumber(trimmed.to_string()))?;

    if value.is_zero() {
        Ok(SideInput::Abort)
    } else if value < BigDecimal::zero() {
        Err(ParseSideError::Negative(value))
    } else {
        Ok(SideInput::Length(value))
    }
}
