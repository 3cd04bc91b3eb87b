//! Core data types for trigon.
//!
//! This module holds the validated [`triangle::Triangle`] value, the
//! [`category::Category`] it is classified into, and side labelling and
//! parsing. Nothing here performs I/O.

pub mod category;
pub mod side;
pub mod triangle;
