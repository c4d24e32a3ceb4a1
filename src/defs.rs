//! Definitions.

use core::fmt::Display;

/// A decimal exponent.
pub type Exponent = i32;

/// Maximum exponent value.
pub const EXPONENT_MAX: Exponent = Exponent::MAX;

/// Minimum exponent value.
pub const EXPONENT_MIN: Exponent = Exponent::MIN;

/// Default rounding mode.
pub const DEFAULT_RM: RoundingMode = RoundingMode::ToEven;

/// Default minimum exponent: 28 fractional digits.
pub const DEFAULT_MIN_EXPONENT: Exponent = -28;

/// The largest number of decimal digits an operation may be asked to produce,
/// or to shift a mantissa by when aligning operands.
pub const MAX_PRECISION_DIGITS: usize = 1_000_000;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy)]
pub enum Error {
    /// An argument is out of the domain of the operation: a negative square root argument,
    /// a malformed string, a non-finite float, or a negative tolerance.
    InvalidArgument,

    /// Divizor is zero.
    DivisionByZero,

    /// The value does not fit the target type, or the exponent leaves its range.
    Overflow,

    /// The requested number of digits exceeds `MAX_PRECISION_DIGITS`,
    /// or an algorithm cannot reach it in a practical number of terms.
    PrecisionUnsatisfiable,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::InvalidArgument => "invalid argument",
            Error::DivisionByZero => "division by zero",
            Error::Overflow => "overflow",
            Error::PrecisionUnsatisfiable => "requested precision cannot be satisfied",
        };
        f.write_str(repr)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

impl Eq for Error {}

/// Rounding modes.
///
/// Every mode except `None` rounds to the nearest representable value;
/// the modes differ only in how an exact tie is resolved.
///
/// `Up`, `Down` and `ToZero` are not directed roundings: they select the direction of a tie only.
/// Rounding `2.501` to an integer gives `3` in all of them, while `2.5` gives `3`, `2`, and `2`.
/// Use `None` to truncate.
///
/// | mode       | 2.5 | -2.5 | 2.501 | 2.499 |
/// |:-----------|----:|-----:|------:|------:|
/// | `None`     |   2 |   -2 |     2 |     2 |
/// | `Up`       |   3 |   -2 |     3 |     2 |
/// | `Down`     |   2 |   -3 |     3 |     2 |
/// | `ToZero`   |   2 |   -2 |     3 |     2 |
/// | `FromZero` |   3 |   -3 |     3 |     2 |
/// | `ToEven`   |   2 |   -2 |     3 |     2 |
/// | `ToOdd`    |   3 |   -3 |     3 |     2 |
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum RoundingMode {
    /// Skip rounding operation: discarded digits are truncated.
    None = 1,

    /// Round to nearest, half toward positive infinity.
    Up = 2,

    /// Round to nearest, half toward negative infinity.
    Down = 4,

    /// Round to nearest, half toward zero.
    ToZero = 8,

    /// Round to nearest, half away from zero.
    FromZero = 16,

    /// Round to nearest, half to even.
    ToEven = 32,

    /// Round to nearest, half to odd.
    ToOdd = 64,
}
