/// Shorthand for creating a rational number, mostly in tests.
///
/// `R!(3)` is the integer three, `R!(3, 4)` is three quarters. The two argument form panics on a
/// zero denominator.
#[macro_export]
macro_rules! R {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational::from_integer($value as i64)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational::new($numer as i64, $denom as i64)
    };
}
