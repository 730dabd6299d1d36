//! Exact rational numbers over signed integers, always kept in lowest terms
//! with the sign carried by the numerator.
//!
//! ```
//! use canonical_rational::{reciprocal_of, Rational, RationalError};
//!
//! let a = Rational::new(2, 4)?;
//! let b = Rational::new(1, -3)?;
//! assert_eq!((a + b).parts(), (&1, &6));
//! assert_eq!(reciprocal_of(&b)?, Rational::from(-3));
//! assert_eq!(a.try_div(Rational::from(0)), Err(RationalError::DivisionByZero));
//! # Ok::<(), RationalError>(())
//! ```

pub mod error;
mod rational;
pub mod traits;

pub use error::RationalError;
pub use rational::{reciprocal_of, Rational};
pub use traits::{Approximation, RationalBase};
