//! Big Number Operations
//!
//! Provides the arbitrary precision integer used for every integer term.
//! Based on big.c
//!
//! This module uses the `malachite` crate for arbitrary-precision arithmetic.
//! The external term format stores big integers as a sign byte followed by
//! the magnitude in little-endian byte order, so the helpers here convert
//! between that split representation and a signed `Integer`.

use std::fmt;
use std::str::FromStr;

use malachite::base::num::arithmetic::traits::{Pow, UnsignedAbs};
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::{Integer, Natural};
use thiserror::Error;

/// Error returned when a decimal string is not a valid integer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid integer literal: {0:?}")]
pub struct ParseBigNumberError(pub String);

/// Big number representation using malachite's Integer
///
/// Small values are stored the same way as huge ones; callers that need a
/// machine integer use the checked `to_*` conversions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Rebuild a number from a sign flag and a little-endian magnitude.
    ///
    /// An empty magnitude is zero regardless of the sign flag.
    pub fn from_sign_and_magnitude(negative: bool, magnitude_le: &[u8]) -> Self {
        let natural = <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_asc(
            8,
            magnitude_le.iter().copied(),
        )
        .unwrap_or(Natural::ZERO);
        let value = Integer::from(natural);
        Self {
            value: if negative { -value } else { value },
        }
    }

    /// Split the number into a sign flag and its little-endian magnitude.
    ///
    /// Zero yields an empty magnitude.
    pub fn to_sign_and_magnitude(&self) -> (bool, Vec<u8>) {
        let natural: Natural = self.value.clone().unsigned_abs();
        let magnitude = <Natural as PowerOf2Digits<u8>>::to_power_of_2_digits_asc(&natural, 8);
        (self.is_negative(), magnitude)
    }

    /// Number of bytes the magnitude occupies when stored little-endian
    pub fn magnitude_len(&self) -> usize {
        let natural: Natural = self.value.clone().unsigned_abs();
        let bits = natural.significant_bits();
        bits.div_ceil(8) as usize
    }

    /// Convert to u8 (None if out of range)
    pub fn to_u8(&self) -> Option<u8> {
        u8::try_from(&self.value).ok()
    }

    /// Convert to i32 (None if out of range)
    pub fn to_i32(&self) -> Option<i32> {
        i32::try_from(&self.value).ok()
    }

    /// Convert to i64 (None if out of range)
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to u64 (None if negative or out of range)
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// True for values strictly below zero
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Add two big numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two big numbers: x - y
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    /// Multiply two big numbers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Raise to a non-negative power: x ^ exp
    pub fn pow(&self, exp: u64) -> Self {
        Self {
            value: self.value.clone().pow(exp),
        }
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for BigNumber {
    type Err = ParseBigNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Integer::from_str(s)
            .map(Self::from_integer)
            .map_err(|_| ParseBigNumberError(s.to_string()))
    }
}

macro_rules! big_number_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigNumber {
                fn from(value: $t) -> Self {
                    Self {
                        value: Integer::from(value),
                    }
                }
            }
        )*
    };
}

big_number_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}
