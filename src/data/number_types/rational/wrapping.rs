//! # Wrapping existing methods
//!
//! Standard operations on the `Rational` type, simply wrapping the operations already defined on
//! the inner type. Every result is reduced by the inner type.

mod creation {
    use std::str::FromStr;

    use num_bigint::BigInt;
    use num_rational::BigRational;

    use crate::data::number_types::rational::{Rational, RationalError};

    macro_rules! from_integer {
        ($($t:ty),*) => {
            $(
                impl From<$t> for Rational {
                    fn from(value: $t) -> Self {
                        Self::from_integer(value)
                    }
                }
            )*
        };
    }
    from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, isize);

    impl From<BigInt> for Rational {
        fn from(value: BigInt) -> Self {
            Self::from_integer(value)
        }
    }

    impl From<BigRational> for Rational {
        fn from(value: BigRational) -> Self {
            Self(value)
        }
    }

    impl From<&Rational> for Rational {
        fn from(value: &Rational) -> Self {
            value.clone()
        }
    }

    macro_rules! try_from_pair {
        ($($t:ty),*) => {
            $(
                impl TryFrom<($t, $t)> for Rational {
                    type Error = RationalError;

                    fn try_from((numerator, denominator): ($t, $t)) -> Result<Self, Self::Error> {
                        Self::checked_new(numerator, denominator)
                    }
                }
            )*
        };
    }
    try_from_pair!(i32, i64);

    impl TryFrom<f64> for Rational {
        type Error = RationalError;

        fn try_from(value: f64) -> Result<Self, Self::Error> {
            Self::from_float(value)
        }
    }

    impl TryFrom<&str> for Rational {
        type Error = RationalError;

        fn try_from(input: &str) -> Result<Self, Self::Error> {
            input.parse()
        }
    }

    impl FromStr for Rational {
        type Err = RationalError;

        fn from_str(input: &str) -> Result<Self, Self::Err> {
            BigRational::from_str(input.trim())
                .map(Self)
                .map_err(|_| RationalError::Parse { input: input.to_string() })
        }
    }
}

mod field {
    use std::iter::Sum;
    use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

    use num_traits::{One, Zero};

    use crate::data::number_types::rational::Rational;

    /// All four owned and borrowed combinations of a binary operator, plus its assigning form.
    macro_rules! forward {
        ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
            impl $op<Rational> for Rational {
                type Output = Rational;

                fn $method(self, rhs: Rational) -> Self::Output {
                    Rational($op::$method(self.0, rhs.0))
                }
            }

            impl $op<&Rational> for Rational {
                type Output = Rational;

                fn $method(self, rhs: &Rational) -> Self::Output {
                    Rational($op::$method(self.0, &rhs.0))
                }
            }

            impl $op<Rational> for &Rational {
                type Output = Rational;

                fn $method(self, rhs: Rational) -> Self::Output {
                    Rational($op::$method(&self.0, rhs.0))
                }
            }

            impl $op<&Rational> for &Rational {
                type Output = Rational;

                fn $method(self, rhs: &Rational) -> Self::Output {
                    Rational($op::$method(&self.0, &rhs.0))
                }
            }

            impl $op_assign<Rational> for Rational {
                fn $method_assign(&mut self, rhs: Rational) {
                    $op_assign::$method_assign(&mut self.0, rhs.0)
                }
            }

            impl $op_assign<&Rational> for Rational {
                fn $method_assign(&mut self, rhs: &Rational) {
                    $op_assign::$method_assign(&mut self.0, &rhs.0)
                }
            }
        };
    }

    forward!(Add, add, AddAssign, add_assign);
    forward!(Sub, sub, SubAssign, sub_assign);
    forward!(Mul, mul, MulAssign, mul_assign);
    // Division by zero panics inside the inner type; the engine only divides by pivot elements,
    // which are strictly positive.
    forward!(Div, div, DivAssign, div_assign);

    impl Neg for Rational {
        type Output = Rational;

        fn neg(self) -> Self::Output {
            Rational(-self.0)
        }
    }

    impl Neg for &Rational {
        type Output = Rational;

        fn neg(self) -> Self::Output {
            Rational(-&self.0)
        }
    }

    impl Zero for Rational {
        fn zero() -> Self {
            Rational(Zero::zero())
        }

        fn is_zero(&self) -> bool {
            self.0.is_zero()
        }
    }

    impl One for Rational {
        fn one() -> Self {
            Rational(One::one())
        }
    }

    impl Sum for Rational {
        fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Rational::zero(), |total, item| total + item)
        }
    }

    impl<'a> Sum<&'a Rational> for Rational {
        fn sum<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
            iter.fold(Rational::zero(), |total, item| total + item)
        }
    }
}
