//! # Rational numbers
//!
//! Primary way to do exact computation. Every value is an arbitrary precision numerator and
//! denominator pair, kept in lowest terms with a strictly positive denominator.
//!
//! At the moment, this is wrapping the `num_rational::BigRational` type, following the newtype
//! pattern, such that the simplex code only depends on the operations listed here.
use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use thiserror::Error;

mod macros;
mod wrapping;

/// Reasons a value can't be turned into a `Rational`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    /// A numerator and denominator pair was given with a zero denominator.
    #[error("denominator of {numerator}/0 is zero")]
    ZeroDenominator {
        /// The numerator that was provided.
        numerator: BigInt,
    },
    /// A floating point input was infinite or not a number.
    #[error("value {value} is not a finite number")]
    NonFinite {
        /// Textual form of the offending input.
        value: String,
    },
    /// A string could not be parsed as `numerator/denominator` or as an integer.
    #[error("can't parse \"{input}\" as a rational number")]
    Parse {
        /// The string that was provided.
        input: String,
    },
}

/// An exact rational number of arbitrary size.
///
/// Immutable value type: all arithmetic returns a new, reduced value.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Rational(BigRational);

impl Rational {
    /// Create a new instance by converting the two provided numbers into arbitrary size ints.
    ///
    /// # Panics
    ///
    /// When `denominator` is zero. Use `checked_new` for input that is not trusted.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        Self(BigRational::new(numerator.into(), denominator.into()))
    }

    /// Create a new instance, failing instead of panicking on a zero denominator.
    pub fn checked_new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, RationalError> {
        let (numerator, denominator) = (numerator.into(), denominator.into());
        if denominator.is_zero() {
            Err(RationalError::ZeroDenominator { numerator })
        } else {
            Ok(Self(BigRational::new(numerator, denominator)))
        }
    }

    /// Wrap an integer.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// Exact binary value of a finite float.
    pub fn from_float(value: f64) -> Result<Self, RationalError> {
        BigRational::from_float(value)
            .map(Self)
            .ok_or_else(|| RationalError::NonFinite { value: value.to_string() })
    }

    /// Numerator, carries the sign.
    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    /// Denominator, always strictly positive.
    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    /// Whether the denominator equals one.
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Strictly larger than zero.
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// Strictly smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Whether `gcd(|numerator|, denominator) = 1` and the denominator is positive.
    ///
    /// All arithmetic maintains this, it is exposed for invariant checks on the tableau.
    pub fn is_in_lowest_terms(&self) -> bool {
        self.denominator().is_positive() && self.numerator().gcd(self.denominator()).is_one()
    }

    /// Render as `numerator/denominator`, also when the denominator is one.
    pub fn to_fraction_string(&self) -> String {
        format!("{}/{}", self.numerator(), self.denominator())
    }

    /// Unwrap the inner value.
    pub fn into_inner(self) -> BigRational {
        self.0
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R({})", self.to_fraction_string())
    }
}
