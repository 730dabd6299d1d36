use super::Rational;
use crate::error::RationalError;
use crate::traits::RationalBase;
use core::convert::TryFrom;
use num_rational::Ratio;
use num_traits::{AsPrimitive, ToPrimitive, Zero};

impl<T: Zero> Rational<T> {
    /// Truthiness of the number, false only for zero
    #[inline]
    pub fn to_bool(&self) -> bool {
        !self.numer.is_zero()
    }
}

impl<T: Zero> From<Rational<T>> for bool {
    #[inline]
    fn from(r: Rational<T>) -> Self {
        r.to_bool()
    }
}

impl<T: AsPrimitive<f64>> From<Rational<T>> for f64 {
    /// Approximate the number with a float, exact only when both parts
    /// and their quotient are representable.
    #[inline]
    fn from(r: Rational<T>) -> Self {
        r.numer.as_() / r.denom.as_()
    }
}

impl<T: RationalBase + ToPrimitive> ToPrimitive for Rational<T> {
    /// Only integral values are converted
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.numer.to_i64()
        } else {
            None
        }
    }

    /// Only integral values are converted
    #[inline]
    fn to_u64(&self) -> Option<u64> {
        if self.is_integer() {
            self.numer.to_u64()
        } else {
            None
        }
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(self.numer.to_f64()? / self.denom.to_f64()?)
    }
}

impl<T> From<Rational<T>> for (T, T) {
    /// Deconstruct the rational number into tuple `(numer, denom)`
    #[inline]
    fn from(r: Rational<T>) -> Self {
        (r.numer, r.denom)
    }
}

impl<T> From<Rational<T>> for Ratio<T> {
    /// The parts are already reduced, so no further normalization is needed
    #[inline]
    fn from(r: Rational<T>) -> Self {
        Ratio::new_raw(r.numer, r.denom)
    }
}

impl<T: RationalBase> TryFrom<Ratio<T>> for Rational<T> {
    type Error = RationalError;

    /// A `Ratio` built with `new_raw` may be unreduced or even have a zero denominator,
    /// so the parts go through the usual validation.
    #[inline]
    fn try_from(r: Ratio<T>) -> Result<Self, RationalError> {
        let (numer, denom) = r.into();
        Self::new(numer, denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub const ZERO: Rational<i32> = Rational::new_raw(0, 1);
    pub const HALF: Rational<i32> = Rational::new_raw(1, 2);
    pub const N_SEVEN_HALVES: Rational<i32> = Rational::new_raw(-7, 2);

    #[test]
    fn bool_test() {
        assert!(!ZERO.to_bool());
        assert!(!bool::from(ZERO));
        assert!(!bool::from(Rational::<i64>::new(0, -9).unwrap()));

        assert!(HALF.to_bool());
        assert!(bool::from(HALF));
        assert!(bool::from(N_SEVEN_HALVES));
    }

    #[test]
    fn float_test() {
        assert_eq!(f64::from(HALF), 0.5);
        assert_eq!(f64::from(N_SEVEN_HALVES), -3.5);
        assert_eq!(f64::from(ZERO), 0.0);
        assert_eq!(HALF.to_f64(), Some(0.5));

        let third = Rational::<i64>::new(1, 3).unwrap();
        assert!(matches!(third.to_f64(), Some(v) if (v - 0.333333333333f64).abs() < 1e-10));
        assert!((f64::from(third) - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn primitive_test() {
        assert_eq!(Rational::from(-4).to_i64(), Some(-4));
        assert_eq!(Rational::from(4).to_u64(), Some(4));
        assert_eq!(Rational::from(-4).to_u64(), None);
        assert_eq!(HALF.to_i64(), None);
        assert_eq!(HALF.to_u64(), None);
    }

    #[test]
    fn conversion_test() {
        let (n, d): (i32, i32) = N_SEVEN_HALVES.into();
        assert_eq!((n, d), (-7, 2));

        let ratio: Ratio<i32> = N_SEVEN_HALVES.into();
        assert_eq!(ratio, Ratio::new(-7, 2));
        assert_eq!(Rational::try_from(ratio), Ok(N_SEVEN_HALVES));

        // unreduced and zero denominators are caught
        assert_eq!(Rational::try_from(Ratio::new_raw(6, -4)), Ok(Rational::new(-3, 2).unwrap()));
        assert_eq!(
            Rational::<i32>::try_from(Ratio::new_raw(1, 0)),
            Err(RationalError::InvalidDenominator)
        );
    }

    #[test]
    #[cfg(feature = "num-bigint")]
    fn bigint_conversion_test() {
        use num_bigint::BigInt;

        let r = Rational::new(BigInt::from(3), BigInt::from(-12)).unwrap();
        assert_eq!(r.to_f64(), Some(-0.25));
        assert!(r.to_bool());
        assert_eq!(r.to_i64(), None);
    }
}
