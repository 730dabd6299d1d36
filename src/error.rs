use thiserror::Error;

/// Failures of operations on [Rational][crate::Rational] values.
///
/// Every variant is a violated mathematical precondition, an operation that
/// returns one of these leaves its operands untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RationalError {
    #[error("denominator must not be zero")]
    InvalidDenominator,

    #[error("division by zero")]
    DivisionByZero,

    #[error("zero has no reciprocal")]
    ZeroHasNoReciprocal,

    /// Only reported by the `checked_*` family of operations
    #[error("arithmetic overflow")]
    Overflow,
}

pub type Result<T> = core::result::Result<T, RationalError>;
