//! The validated triangle value type.
//!
//! A [`Triangle`] can only be obtained through a validating constructor, so
//! holding one proves its sides are positive and satisfy the strict triangle
//! inequality. Side lengths are exact decimals; no floating point is involved
//! in any comparison or sum.

use bigdecimal::{BigDecimal, Zero};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::core::category::{classify, Category};
use crate::core::side::Side;
use crate::error::{Result, TriangleError};

/// A non-degenerate triangle described by its three side lengths.
///
/// Values are kept exactly as supplied: `2.000` is not rescaled to `2`.
/// Equality compares the sides pairwise by numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TriangleRecord")]
pub struct Triangle {
    side_a: BigDecimal,
    side_b: BigDecimal,
    side_c: BigDecimal,
}

impl Triangle {
    /// Validate three side lengths and build a triangle.
    ///
    /// Checks run in a fixed order: positivity of A, B, C, then the
    /// inequality for A, B, C. The first failure is returned.
    pub fn new(side_a: BigDecimal, side_b: BigDecimal, side_c: BigDecimal) -> Result<Self> {
        let checked = check_positive(Side::A, &side_a)
            .and_then(|_| check_positive(Side::B, &side_b))
            .and_then(|_| check_positive(Side::C, &side_c))
            .and_then(|_| check_inequality(&side_a, &side_b, &side_c));

        if let Err(err) = checked {
            debug!(kind = %err.kind(), side = %err.side(), "Rejected triangle");
            return Err(err);
        }

        debug!("Constructed triangle");
        Ok(Self {
            side_a,
            side_b,
            side_c,
        })
    }

    /// Build a triangle from sides that may be missing.
    ///
    /// The first absent side (in order A, B, C) is reported as
    /// [`TriangleError::NullSide`] before any value is inspected.
    pub fn from_optional(
        side_a: Option<BigDecimal>,
        side_b: Option<BigDecimal>,
        side_c: Option<BigDecimal>,
    ) -> Result<Self> {
        match (side_a, side_b, side_c) {
            (Some(a), Some(b), Some(c)) => Self::new(a, b, c),
            (None, _, _) => Err(null_side(Side::A)),
            (_, None, _) => Err(null_side(Side::B)),
            (_, _, None) => Err(null_side(Side::C)),
        }
    }

    pub fn side_a(&self) -> &BigDecimal {
        &self.side_a
    }

    pub fn side_b(&self) -> &BigDecimal {
        &self.side_b
    }

    pub fn side_c(&self) -> &BigDecimal {
        &self.side_c
    }

    /// Length of the given side.
    pub fn side(&self, side: Side) -> &BigDecimal {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
            Side::C => &self.side_c,
        }
    }

    /// All three sides in order A, B, C.
    pub fn sides(&self) -> [&BigDecimal; 3] {
        [&self.side_a, &self.side_b, &self.side_c]
    }

    /// Category of this triangle, see [`classify`].
    pub fn category(&self) -> Category {
        classify(self)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangle [sideA={}, sideB={}, sideC={}]",
            self.side_a, self.side_b, self.side_c
        )
    }
}

/// Unvalidated wire form of a [`Triangle`]; absent fields become `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TriangleRecord {
    #[serde(deserialize_with = "exact_side")]
    side_a: Option<BigDecimal>,
    #[serde(deserialize_with = "exact_side")]
    side_b: Option<BigDecimal>,
    #[serde(deserialize_with = "exact_side")]
    side_c: Option<BigDecimal>,
}

/// Sides are read from decimal strings or integers only. Fractional number
/// tokens reach the visitor as `f64`, which has already lost digits and
/// scale, so they are refused.
fn exact_side<'de, D>(deserializer: D) -> std::result::Result<Option<BigDecimal>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(ExactSideVisitor)
}

struct ExactSideVisitor;

impl<'de> Visitor<'de> for ExactSideVisitor {
    type Value = Option<BigDecimal>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string, an integer or null")
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        BigDecimal::from_str(v)
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
        Ok(Some(BigDecimal::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
        Ok(Some(BigDecimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
        Err(E::invalid_type(Unexpected::Float(v), &self))
    }
}

impl TryFrom<TriangleRecord> for Triangle {
    type Error = TriangleError;

    fn try_from(record: TriangleRecord) -> Result<Self> {
        Triangle::from_optional(record.side_a, record.side_b, record.side_c)
    }
}

/// Validate three side lengths and build a triangle.
pub fn construct(side_a: BigDecimal, side_b: BigDecimal, side_c: BigDecimal) -> Result<Triangle> {
    Triangle::new(side_a, side_b, side_c)
}

/// Check the strict triangle inequality for every side, in order A, B, C.
///
/// A side equal to the sum of the other two is rejected: it describes a
/// straight line, not a triangle.
pub fn check_inequality(side_a: &BigDecimal, side_b: &BigDecimal, side_c: &BigDecimal) -> Result<()> {
    let pairs = [
        (Side::A, side_a, side_b + side_c),
        (Side::B, side_b, side_a + side_c),
        (Side::C, side_c, side_a + side_b),
    ];

    for (side, value, others) in pairs {
        if *value >= others {
            return Err(TriangleError::TriangleUnequal {
                side,
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// True when some side is at least the sum of the other two.
pub fn violates_inequality(side_a: &BigDecimal, side_b: &BigDecimal, side_c: &BigDecimal) -> bool {
    check_inequality(side_a, side_b, side_c).is_err()
}

fn check_positive(side: Side, value: &BigDecimal) -> Result<()> {
    if *value > BigDecimal::zero() {
        Ok(())
    } else {
        Err(TriangleError::NonPositiveSide {
            side,
            value: value.clone(),
        })
    }
}

fn null_side(side: Side) -> TriangleError {
    debug!(kind = "NullSide", side = %side, "Rejected triangle");
    TriangleError::NullSide { side }
}
