//! Common test utilities and helpers.

#![allow(dead_code)]

pub mod test_utils;

use bigdecimal::BigDecimal;
use std::str::FromStr;
use trigon::{Result, Triangle};

/// Parse a decimal literal, panicking on malformed test input
pub fn dec(text: &str) -> BigDecimal {
    BigDecimal::from_str(text).unwrap_or_else(|e| panic!("bad decimal {:?}: {}", text, e))
}

/// Construct a triangle from three decimal literals
pub fn triangle(a: &str, b: &str, c: &str) -> Result<Triangle> {
    Triangle::new(dec(a), dec(b), dec(c))
}

/// Common test data and constants
pub mod test_data {
    /// Sides around 10^1000000000, valid and pairwise distinct
    pub const HUGE_SCALENE: [&str; 3] =
        ["91E+1000000000", "92.4E+1000000000", "93.2E+1000000000"];

    /// Differs from 1 only in the 31st fractional digit
    pub const NEARLY_ONE: &str = "1.0000000000000000000000000000001";

    /// The permutations of a triple, by index
    pub const PERMUTATIONS: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
}
