//! Context carries the precision floor and the rounding mode through computations.
//!
//! The process-wide default minimum exponent is read only when a context is built with
//! [`Context::default`]. Arithmetic primitives and series evaluators never read it.
//! A change of the default made by one thread affects contexts created afterwards, so
//! multithreaded code should build contexts explicitly with [`Context::new`].

use core::sync::atomic::AtomicI32;
use core::sync::atomic::Ordering;

use crate::common::util::check_digits;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_MIN_EXPONENT;
use crate::defs::DEFAULT_RM;

static DEFAULT_MIN_EXPONENT_VAL: AtomicI32 = AtomicI32::new(DEFAULT_MIN_EXPONENT);

/// Sets the process-wide default minimum exponent.
pub fn set_default_min_exponent(e: Exponent) {
    DEFAULT_MIN_EXPONENT_VAL.store(e, Ordering::Relaxed);
}

/// Returns the process-wide default minimum exponent.
pub fn default_min_exponent() -> Exponent {
    DEFAULT_MIN_EXPONENT_VAL.load(Ordering::Relaxed)
}

/// Context contains the minimum exponent of rounded results and the rounding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    min_exponent: Exponent,
    rm: RoundingMode,
}

impl Context {
    /// Create a new context.
    pub fn new(min_exponent: Exponent, rm: RoundingMode) -> Self {
        Context { min_exponent, rm }
    }

    /// Create a new context retaining `digits` fractional digits.
    ///
    /// # Errors
    ///
    /// - PrecisionUnsatisfiable: `digits` is greater than `MAX_PRECISION_DIGITS`.
    pub fn with_digits(digits: usize, rm: RoundingMode) -> Result<Self, Error> {
        check_digits(digits)?;
        Ok(Context {
            min_exponent: -(digits as Exponent),
            rm,
        })
    }

    /// Returns a copy of the context with the floor lowered by `guard` digits.
    ///
    /// # Errors
    ///
    /// - PrecisionUnsatisfiable: the resulting number of digits is greater than `MAX_PRECISION_DIGITS`.
    pub fn with_guard_digits(&self, guard: usize) -> Result<Self, Error> {
        check_digits(guard)?;
        let min_exponent = (self.min_exponent as i64 - guard as i64).max(Exponent::MIN as i64) as Exponent;
        if min_exponent < 0 {
            check_digits(min_exponent.unsigned_abs() as usize)?;
        }
        Ok(Context {
            min_exponent,
            rm: self.rm,
        })
    }

    /// Destructures the context and returns its parts.
    pub fn to_raw_parts(self) -> (Exponent, RoundingMode) {
        (self.min_exponent, self.rm)
    }

    /// Sets the minimum exponent of the context.
    pub fn set_min_exponent(&mut self, min_exponent: Exponent) {
        self.min_exponent = min_exponent;
    }

    /// Sets the rounding mode of the context.
    pub fn set_rounding_mode(&mut self, rm: RoundingMode) {
        self.rm = rm;
    }

    /// Returns the minimum exponent of the context.
    pub fn min_exponent(&self) -> Exponent {
        self.min_exponent
    }

    /// Returns the rounding mode of the context.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rm
    }
}

impl Default for Context {
    /// Context with the process-wide default minimum exponent and the default rounding mode.
    fn default() -> Self {
        Context {
            min_exponent: default_min_exponent(),
            rm: DEFAULT_RM,
        }
    }
}

/// Represents a type that can be used as context in computations.
///
/// ## Examples
///
/// ```
/// # use precision_decimal::Exponent;
/// # use precision_decimal::RoundingMode;
/// # use precision_decimal::ctx::Contextable;
///
/// let ctx: (Exponent, RoundingMode) = (-20, RoundingMode::ToEven);
///
/// assert_eq!(-20, ctx.min_exponent());
/// assert_eq!(20, ctx.precision_digits());
/// assert_eq!(RoundingMode::ToEven, ctx.rounding_mode());
/// ```
pub trait Contextable {
    /// Returns the minimum exponent of rounded results.
    fn min_exponent(&self) -> Exponent;

    /// Returns the rounding mode.
    fn rounding_mode(&self) -> RoundingMode;

    /// Returns the number of retained fractional digits, 0 if the minimum exponent is not negative.
    fn precision_digits(&self) -> usize {
        let e = self.min_exponent();
        if e < 0 {
            e.unsigned_abs() as usize
        } else {
            0
        }
    }
}

impl Contextable for (Exponent, RoundingMode) {
    fn min_exponent(&self) -> Exponent {
        self.0
    }

    fn rounding_mode(&self) -> RoundingMode {
        self.1
    }
}

impl Contextable for Context {
    fn min_exponent(&self) -> Exponent {
        Context::min_exponent(self)
    }

    fn rounding_mode(&self) -> RoundingMode {
        Context::rounding_mode(self)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_context() {
        let mut ctx = Context::with_digits(105, RoundingMode::FromZero).unwrap();
        assert_eq!(ctx.min_exponent(), -105);
        assert_eq!(ctx.precision_digits(), 105);

        let g = ctx.with_guard_digits(5).unwrap();
        assert_eq!(g.min_exponent(), -110);
        assert_eq!(g.rounding_mode(), RoundingMode::FromZero);

        ctx.set_min_exponent(3);
        ctx.set_rounding_mode(RoundingMode::ToEven);
        assert_eq!(ctx.precision_digits(), 0);
        assert_eq!(ctx.to_raw_parts(), (3, RoundingMode::ToEven));

        assert_eq!(
            Context::with_digits(usize::MAX, RoundingMode::ToEven).unwrap_err(),
            Error::PrecisionUnsatisfiable
        );
        assert_eq!(
            Context::with_digits(999_999, RoundingMode::ToEven).unwrap().with_guard_digits(5).unwrap_err(),
            Error::PrecisionUnsatisfiable
        );
    }

    #[test]
    fn test_default_context() {
        let saved = default_min_exponent();

        set_default_min_exponent(-12);
        let ctx = Context::default();
        set_default_min_exponent(saved);

        assert_eq!(ctx.min_exponent(), -12);
        assert_eq!(ctx.rounding_mode(), DEFAULT_RM);

        // the context keeps its value after the default changes
        assert_eq!(ctx.min_exponent(), -12);
    }
}
