use num_integer::Integer;
use num_traits::{NumRef, Signed};

/// A helper trait to define valid type that can be used for [Rational][crate::Rational].
///
/// Only signed integers qualify: unsigned integers are not [Signed] and
/// floating point numbers are not [Integer], so neither can be used as the
/// representation of a rational number.
///
/// ```compile_fail
/// use canonical_rational::Rational;
/// let r = Rational::<u32>::new(1, 2);
/// ```
///
/// ```compile_fail
/// use canonical_rational::Rational;
/// let r = Rational::<f64>::new(1.0, 2.0);
/// ```
pub trait RationalBase: Integer + Signed + NumRef + Clone {}
impl<T: Integer + Signed + NumRef + Clone> RationalBase for T {}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the wrapped value, no matter whether it's exact or not
    #[inline]
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) | Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}
