//! Implementation of exact rational numbers kept in canonical form

mod arith;
mod cmp;
mod convert;

use crate::error::{RationalError, Result};
use crate::traits::{Approximation, RationalBase};
use core::mem;
use num_traits::{One, Zero};

/// A rational number represented as `numer / denom`.
///
/// Every value is reduced when it is created: the denominator is positive
/// and coprime with the numerator, and zero is always `0/1`. Because of
/// that, two rationals are equal exactly when their parts are equal, and
/// [Eq] and [Hash][core::hash::Hash] are derived from the fields.
///
/// The representation must be wide enough for the intermediate products of
/// the operations used on it. Overflow in the plain operators behaves like
/// overflow of `T` itself; use the `checked_*` methods to have it reported
/// as [RationalError::Overflow].
#[derive(Hash, Clone, Debug, Copy, PartialEq, Eq)]
pub struct Rational<T> {
    numer: T,
    denom: T, // positive and coprime with numer
}

impl<T> Rational<T> {
    #[inline]
    pub(crate) const fn new_raw(numer: T, denom: T) -> Self {
        Rational { numer, denom }
    }

    /// Get the numerator, which carries the sign of the number
    #[inline]
    pub const fn numer(&self) -> &T {
        &self.numer
    }

    /// Get the denominator, which is always positive
    #[inline]
    pub const fn denom(&self) -> &T {
        &self.denom
    }

    /// Get return-only references to the components `(numer, denom)`
    #[inline]
    pub const fn parts(&self) -> (&T, &T) {
        (&self.numer, &self.denom)
    }
}

/// Greatest common divisor by repeated remainder, `gcd(a, 0) = a`.
///
/// No absolute value is taken so the sign of the result follows the inputs.
/// The result is zero only if both `a` and `b` are zero.
fn gcd_of<T: RationalBase>(mut a: T, mut b: T) -> T {
    while !b.is_zero() {
        let r = a % &b;
        a = mem::replace(&mut b, r);
    }
    a
}

impl<T: RationalBase> Rational<T> {
    // Divide out the common factor, then move the sign into the numerator
    fn reduce(&mut self) {
        debug_assert!(!self.denom.is_zero());

        let g = gcd_of(self.numer.clone(), self.denom.clone());
        debug_assert!(!g.is_zero());
        self.numer = self.numer.clone() / &g;
        self.denom = self.denom.clone() / g;

        if self.denom.is_negative() {
            self.numer = T::zero() - &self.numer;
            self.denom = T::zero() - &self.denom;
        }
    }

    /// Build a canonical rational from parts whose denominator is known to be nonzero.
    /// All arithmetic creates its results through here.
    #[inline]
    pub(crate) fn normalized(numer: T, denom: T) -> Self {
        let mut ret = Self::new_raw(numer, denom);
        ret.reduce();
        ret
    }

    /// Create a rational number `numer / denom` in lowest terms.
    ///
    /// # Errors
    /// [RationalError::InvalidDenominator] if `denom` is zero.
    ///
    /// ```
    /// use canonical_rational::Rational;
    ///
    /// let r = Rational::new(2, -4).unwrap();
    /// assert_eq!(r.parts(), (&-1, &2));
    /// ```
    #[inline]
    pub fn new(numer: T, denom: T) -> Result<Self> {
        if denom.is_zero() {
            return Err(RationalError::InvalidDenominator);
        }
        Ok(Self::normalized(numer, denom))
    }

    /// Returns the reciprocal `denom / numer`.
    ///
    /// # Errors
    /// [RationalError::ZeroHasNoReciprocal] if the number is zero.
    #[inline]
    pub fn recip(self) -> Result<Self> {
        if self.numer.is_zero() {
            return Err(RationalError::ZeroHasNoReciprocal);
        }
        Ok(Self::normalized(self.denom, self.numer))
    }

    /// Add one to the number and return the updated value (`++r`)
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        *self = self.clone() + Self::one();
        self
    }

    /// Subtract one from the number and return the updated value (`--r`)
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        *self = self.clone() - Self::one();
        self
    }

    /// Add one to the number and return the value before the update (`r++`)
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let old = self.clone();
        self.increment();
        old
    }

    /// Subtract one from the number and return the value before the update (`r--`)
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let old = self.clone();
        self.decrement();
        old
    }

    /// Determine if the number is an integer
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    #[inline]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Returns `-1`, `0` or `1` according to the sign of the number
    #[inline]
    pub fn signum(&self) -> Self {
        Self::from(self.numer.signum())
    }

    /// Round the number towards zero
    #[inline]
    pub fn trunc(&self) -> Self {
        Self::from(self.numer.clone() / &self.denom)
    }

    /// Round the number towards minus infinity
    #[inline]
    pub fn floor(&self) -> Self {
        Self::from(self.numer.div_floor(&self.denom))
    }

    /// Get the fractional part of the number, ensuring `self.trunc() + self.fract() == self`
    #[inline]
    pub fn fract(&self) -> Self {
        self.clone() - self.trunc()
    }

    /// Converts to an integer, rounding towards zero
    #[inline]
    pub fn to_integer(&self) -> Approximation<T> {
        if self.is_integer() {
            Approximation::Exact(self.numer.clone())
        } else {
            Approximation::Approximated(self.numer.clone() / &self.denom)
        }
    }
}

/// Returns the multiplicative inverse of `value`.
///
/// # Errors
/// [RationalError::ZeroHasNoReciprocal] if `value` is zero.
///
/// ```
/// use canonical_rational::{reciprocal_of, Rational, RationalError};
///
/// let r = Rational::new(2, 4).unwrap();
/// assert_eq!(reciprocal_of(&r), Ok(Rational::from(2)));
/// assert_eq!(reciprocal_of(&Rational::from(0)), Err(RationalError::ZeroHasNoReciprocal));
/// ```
#[inline]
pub fn reciprocal_of<T: RationalBase>(value: &Rational<T>) -> Result<Rational<T>> {
    value.clone().recip()
}

impl<T: Zero + One> Default for Rational<T> {
    /// Zero, represented as `0/1`
    #[inline]
    fn default() -> Self {
        Rational::new_raw(T::zero(), T::one())
    }
}

impl<T: One> From<T> for Rational<T> {
    /// Create a `Rational` representation of an integer.
    /// The denominator will be one.
    #[inline]
    fn from(t: T) -> Self {
        Rational::new_raw(t, T::one())
    }
}
