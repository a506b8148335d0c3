//! Entities Layer: Utilities
//!
//! Provides utility types shared by the term codec:
//! - Big number representation for integers of any magnitude
//!
//! Based on big.c

pub mod big;

pub use big::{BigNumber, ParseBigNumberError};
