use super::Rational;
use crate::error::{RationalError, Result};
use crate::traits::RationalBase;
use core::iter::{Product, Sum};
use core::mem;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedRem, CheckedSub, One, Zero,
};

impl<T: RationalBase> Add<Rational<T>> for Rational<T> {
    type Output = Rational<T>;

    // a/b + c/d = (a*d + b*c) / (b*d)
    #[inline]
    fn add(self, rhs: Rational<T>) -> Rational<T> {
        Self::normalized(
            self.numer * &rhs.denom + self.denom.clone() * rhs.numer,
            self.denom * rhs.denom,
        )
    }
}

impl<T: RationalBase> Sub<Rational<T>> for Rational<T> {
    type Output = Rational<T>;

    #[inline]
    fn sub(self, rhs: Rational<T>) -> Rational<T> {
        self + (-rhs)
    }
}

impl<T: RationalBase> Mul<Rational<T>> for Rational<T> {
    type Output = Rational<T>;

    #[inline]
    fn mul(self, rhs: Rational<T>) -> Rational<T> {
        Self::normalized(self.numer * rhs.numer, self.denom * rhs.denom)
    }
}

impl<T: RationalBase> Neg for Rational<T> {
    type Output = Rational<T>;

    #[inline]
    fn neg(self) -> Rational<T> {
        Rational::from(-T::one()) * self
    }
}

impl<T: RationalBase> Rational<T> {
    /// Divide by `rhs`, computed as the product with its reciprocal.
    ///
    /// # Errors
    /// [RationalError::DivisionByZero] if `rhs` is zero.
    #[inline]
    pub fn try_div(self, rhs: Rational<T>) -> Result<Rational<T>> {
        match rhs.recip() {
            Ok(r) => Ok(self * r),
            Err(_) => Err(RationalError::DivisionByZero),
        }
    }

    /// The fallible form of `/=`. On error the receiver keeps its value.
    #[inline]
    pub fn try_div_assign(&mut self, rhs: Rational<T>) -> Result<&mut Self> {
        let quotient = self.clone().try_div(rhs)?;
        *self = quotient;
        Ok(self)
    }
}

impl<T: RationalBase> Div<Rational<T>> for Rational<T> {
    type Output = Rational<T>;

    /// # Panics
    /// if `rhs` is zero, use [Rational::try_div] to get an error instead
    #[inline]
    fn div(self, rhs: Rational<T>) -> Rational<T> {
        match self.try_div(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

// Operators on references and on bare integers are forwarded to the owned implementation
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a, T: RationalBase> $imp<&'a Rational<T>> for Rational<T> {
            type Output = Rational<T>;
            #[inline]
            fn $method(self, rhs: &'a Rational<T>) -> Rational<T> {
                self.$method(rhs.clone())
            }
        }

        impl<'a, T: RationalBase> $imp<Rational<T>> for &'a Rational<T> {
            type Output = Rational<T>;
            #[inline]
            fn $method(self, rhs: Rational<T>) -> Rational<T> {
                self.clone().$method(rhs)
            }
        }

        impl<'a, 'b, T: RationalBase> $imp<&'b Rational<T>> for &'a Rational<T> {
            type Output = Rational<T>;
            #[inline]
            fn $method(self, rhs: &'b Rational<T>) -> Rational<T> {
                self.clone().$method(rhs.clone())
            }
        }

        impl<T: RationalBase> $imp<T> for Rational<T> {
            type Output = Rational<T>;
            #[inline]
            fn $method(self, rhs: T) -> Rational<T> {
                self.$method(Rational::from(rhs))
            }
        }
    };
}

forward_binop!(impl Add, add);
forward_binop!(impl Sub, sub);
forward_binop!(impl Mul, mul);
forward_binop!(impl Div, div);

impl<'a, T: RationalBase> Neg for &'a Rational<T> {
    type Output = Rational<T>;

    #[inline]
    fn neg(self) -> Rational<T> {
        -self.clone()
    }
}

// Compound assignment rebuilds the receiver from the result of the binary operator
macro_rules! assign_impl {
    (impl $imp:ident, $method:ident, $op:ident, $op_method:ident) => {
        impl<T: RationalBase> $imp<Rational<T>> for Rational<T> {
            #[inline]
            fn $method(&mut self, rhs: Rational<T>) {
                *self = $op::$op_method(self.clone(), rhs);
            }
        }

        impl<'a, T: RationalBase> $imp<&'a Rational<T>> for Rational<T> {
            #[inline]
            fn $method(&mut self, rhs: &'a Rational<T>) {
                *self = $op::$op_method(self.clone(), rhs.clone());
            }
        }

        impl<T: RationalBase> $imp<T> for Rational<T> {
            #[inline]
            fn $method(&mut self, rhs: T) {
                *self = $op::$op_method(self.clone(), Rational::from(rhs));
            }
        }
    };
}

assign_impl!(impl AddAssign, add_assign, Add, add);
assign_impl!(impl SubAssign, sub_assign, Sub, sub);
assign_impl!(impl MulAssign, mul_assign, Mul, mul);
assign_impl!(impl DivAssign, div_assign, Div, div);

impl<T: RationalBase> Zero for Rational<T> {
    #[inline]
    fn zero() -> Self {
        Rational::new_raw(T::zero(), T::one())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T: RationalBase> One for Rational<T> {
    #[inline]
    fn one() -> Self {
        Rational::new_raw(T::one(), T::one())
    }
    #[inline]
    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

impl<T: RationalBase> Sum for Rational<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a, T: RationalBase> Sum<&'a Rational<T>> for Rational<T> {
    fn sum<I: Iterator<Item = &'a Rational<T>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<T: RationalBase> Product for Rational<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<'a, T: RationalBase> Product<&'a Rational<T>> for Rational<T> {
    fn product<I: Iterator<Item = &'a Rational<T>>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

// Same as gcd_of, but stops at the first remainder that doesn't fit in T
fn checked_gcd_of<T: RationalBase + CheckedRem>(mut a: T, mut b: T) -> Option<T> {
    while !b.is_zero() {
        let r = a.checked_rem(&b)?;
        a = mem::replace(&mut b, r);
    }
    Some(a)
}

impl<T> Rational<T>
where
    T: RationalBase + CheckedAdd + CheckedSub + CheckedMul + CheckedDiv + CheckedRem + CheckedNeg,
{
    fn checked_normalized(numer: T, denom: T) -> Result<Self> {
        if denom.is_zero() {
            return Err(RationalError::InvalidDenominator);
        }

        let g = checked_gcd_of(numer.clone(), denom.clone()).ok_or(RationalError::Overflow)?;
        let numer = numer.checked_div(&g).ok_or(RationalError::Overflow)?;
        let denom = denom.checked_div(&g).ok_or(RationalError::Overflow)?;

        if denom.is_negative() {
            Ok(Rational::new_raw(
                numer.checked_neg().ok_or(RationalError::Overflow)?,
                denom.checked_neg().ok_or(RationalError::Overflow)?,
            ))
        } else {
            Ok(Rational::new_raw(numer, denom))
        }
    }

    /// Same as [Rational::new], but returns [RationalError::Overflow] instead of
    /// overflowing when the reduced number doesn't fit in `T` (e.g. `MIN / -1`).
    #[inline]
    pub fn checked_new(numer: T, denom: T) -> Result<Self> {
        Self::checked_normalized(numer, denom)
    }

    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        let ad = self.numer.checked_mul(&rhs.denom).ok_or(RationalError::Overflow)?;
        let bc = self.denom.checked_mul(&rhs.numer).ok_or(RationalError::Overflow)?;
        let numer = ad.checked_add(&bc).ok_or(RationalError::Overflow)?;
        let denom = self.denom.checked_mul(&rhs.denom).ok_or(RationalError::Overflow)?;
        Self::checked_normalized(numer, denom)
    }

    // a/b - c/d = (a*d - b*c) / (b*d), without negating rhs first so `x - MIN` still fits
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        let ad = self.numer.checked_mul(&rhs.denom).ok_or(RationalError::Overflow)?;
        let bc = self.denom.checked_mul(&rhs.numer).ok_or(RationalError::Overflow)?;
        let numer = ad.checked_sub(&bc).ok_or(RationalError::Overflow)?;
        let denom = self.denom.checked_mul(&rhs.denom).ok_or(RationalError::Overflow)?;
        Self::checked_normalized(numer, denom)
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        let numer = self.numer.checked_mul(&rhs.numer).ok_or(RationalError::Overflow)?;
        let denom = self.denom.checked_mul(&rhs.denom).ok_or(RationalError::Overflow)?;
        Self::checked_normalized(numer, denom)
    }

    #[inline]
    pub fn checked_neg(&self) -> Result<Self> {
        Rational::from(-T::one()).checked_mul(self)
    }

    #[inline]
    pub fn checked_recip(&self) -> Result<Self> {
        if self.numer.is_zero() {
            return Err(RationalError::ZeroHasNoReciprocal);
        }
        Self::checked_normalized(self.denom.clone(), self.numer.clone())
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        let recip = rhs.checked_recip().map_err(|e| match e {
            RationalError::ZeroHasNoReciprocal => RationalError::DivisionByZero,
            other => other,
        })?;
        self.checked_mul(&recip)
    }
}
