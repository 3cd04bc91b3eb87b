//! Exact-decimal triangle validation and classification.
//!
//! ```
//! use bigdecimal::BigDecimal;
//! use trigon::{classify, construct, Category};
//!
//! let triangle = construct(BigDecimal::from(3), BigDecimal::from(4), BigDecimal::from(5)).unwrap();
//! assert_eq!(classify(&triangle), Category::Scalene);
//! ```

/// Core data types module
pub mod core;

pub mod config;
pub mod error;
pub mod logging;
pub mod shell;

pub use crate::config::ShellConfig;
pub use crate::core::category::{classify, Category};
pub use crate::core::side::{parse_side, Side, SideInput};
pub use crate::core::triangle::{check_inequality, construct, violates_inequality, Triangle};
pub use crate::error::{ErrorKind, Result, TriangleError};
pub use crate::shell::{Outcome, Shell};
