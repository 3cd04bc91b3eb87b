//! Triangle categories by count of equal sides.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::triangle::Triangle;

/// The kind of a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// All three sides are equal
    Equilateral,
    /// Two and only two sides are equal
    Isosceles,
    /// All three sides are different
    Scalene,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Equilateral => write!(f, "EQUILATERAL"),
            Category::Isosceles => write!(f, "ISOSCELES"),
            Category::Scalene => write!(f, "SCALENE"),
        }
    }
}

/// Classify a triangle by comparing its sides numerically.
///
/// `2.0` and `2.000` are equal; `1` and `1.0000000000000000000000000000001`
/// are not.
pub fn classify(triangle: &Triangle) -> Category {
    let [a, b, c] = triangle.sides();
    let equal_ab = a == b;
    let equal_bc = b == c;

    if equal_ab && equal_bc {
        Category::Equilateral
    } else if equal_ab || equal_bc || a == c {
        Category::Isosceles
    } else {
        Category::Scalene
    }
}
