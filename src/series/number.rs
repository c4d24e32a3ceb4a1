//! Numeric types the series evaluators can run on.

use core::fmt::Debug;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::common::util::decimal_digits;
use crate::ctx::Contextable;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::num::PrecisionDecimal;

/// Significant digits of the intermediate decimal used to convert a ratio to f64.
const F64_RATIO_DIGITS: usize = 20;

/// Largest integer magnitude f64 represents exactly.
const F64_EXACT_INT: i64 = 1 << 53;

/// Fractional digits `rust_decimal::Decimal` can hold.
const DECIMAL_MAX_DIGITS: Exponent = 28;

/// Arithmetic the series evaluators need.
///
/// Every operation rounds its result according to the context. Types with a fixed
/// native precision may round more coarsely than the context asks for.
pub trait SeriesNumber: Clone + PartialOrd + Debug {
    /// Converts an integer exactly, or to the nearest representable value.
    fn from_i64(v: i64) -> Self;

    /// Converts the ratio `num / den` with a single rounding.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `den` is zero.
    ///  - Overflow: the ratio does not fit the type.
    fn from_ratio<C: Contextable>(num: &BigInt, den: &BigInt, ctx: &C) -> Result<Self, Error>;

    /// Sum.
    fn add<C: Contextable>(&self, d2: &Self, ctx: &C) -> Result<Self, Error>;

    /// Difference.
    fn sub<C: Contextable>(&self, d2: &Self, ctx: &C) -> Result<Self, Error>;

    /// Product.
    fn mul<C: Contextable>(&self, d2: &Self, ctx: &C) -> Result<Self, Error>;

    /// Quotient.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    fn div<C: Contextable>(&self, d2: &Self, ctx: &C) -> Result<Self, Error>;

    /// Square root.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the number is negative.
    fn sqrt<C: Contextable>(&self, ctx: &C) -> Result<Self, Error>;

    /// Absolute value.
    fn abs(&self) -> Self;

    /// Negated value.
    fn neg(&self) -> Self;
}

//
// PrecisionDecimal
//

impl SeriesNumber for PrecisionDecimal {
    fn from_i64(v: i64) -> Self {
        PrecisionDecimal::from(v)
    }

    fn from_ratio<C: Contextable>(num: &BigInt, den: &BigInt, ctx: &C) -> Result<Self, Error> {
        PrecisionDecimal::from(num.clone()).div(
            &PrecisionDecimal::from(den.clone()),
            ctx.min_exponent(),
            ctx.rounding_mode(),
        )
    }

    fn add<C: Contextable>(&self, d2: &Self, ctx: &C) -> Result<Self, Error> {
        PrecisionDecimal::add(self, d2, ctx.min_exponent(), ctx.rounding_mode())
    }

    fn sub<C: Contextable>(&self, d2: &Self, ctx: &C) -> Result<Self, Error> {
        PrecisionDecimal::sub(self, d2, ctx.min_exponent(), ctx.rounding_mode())
    }

    fn mul<C: Contextable>(&self, d2: &Self, ctx: &C) -> Result<Self, Error> {
        PrecisionDecimal::mul(self, d2, ctx.min_exponent(), ctx.rounding_mode())
    }

    fn div<C: Contextable>(&self, d2: &Self, ctx: &C) -> Result<Self, Error> {
        PrecisionDecimal::div(self, d2, ctx.min_exponent(), ctx.rounding_mode())
    }

    fn sqrt<C: Contextable>(&self, ctx: &C) -> Result<Self, Error> {
        PrecisionDecimal::sqrt(self, ctx.precision_digits(), ctx.rounding_mode())
    }

    fn abs(&self) -> Self {
        PrecisionDecimal::abs(self)
    }

    fn neg(&self) -> Self {
        PrecisionDecimal::neg(self)
    }
}

//
// f64
//

// Returns the value as f64 if it is exactly representable.
fn exact_f64(v: &BigInt) -> Option<f64> {
    v.to_i64()
        .filter(|i| i.unsigned_abs() <= F64_EXACT_INT as u64)
        .map(|i| i as f64)
}

impl SeriesNumber for f64 {
    fn from_i64(v: i64) -> Self {
        v as f64
    }

    /// The context is ignored: the result is the nearest f64.
    fn from_ratio<C: Contextable>(num: &BigInt, den: &BigInt, _ctx: &C) -> Result<Self, Error> {
        if let (Some(n), Some(d)) = (exact_f64(num), exact_f64(den)) {
            if d == 0.0 {
                return Err(Error::DivisionByZero);
            }
            return Ok(n / d);
        }

        // quotient with F64_RATIO_DIGITS significant digits
        let e = decimal_digits(num) as i64 - decimal_digits(den) as i64 - F64_RATIO_DIGITS as i64;
        let e = e.clamp(Exponent::MIN as i64, Exponent::MAX as i64) as Exponent;

        let q = PrecisionDecimal::from(num.clone()).div(
            &PrecisionDecimal::from(den.clone()),
            e,
            RoundingMode::ToEven,
        )?;

        q.to_f64()
    }

    fn add<C: Contextable>(&self, d2: &Self, _ctx: &C) -> Result<Self, Error> {
        finite(self + d2)
    }

    fn sub<C: Contextable>(&self, d2: &Self, _ctx: &C) -> Result<Self, Error> {
        finite(self - d2)
    }

    fn mul<C: Contextable>(&self, d2: &Self, _ctx: &C) -> Result<Self, Error> {
        finite(self * d2)
    }

    fn div<C: Contextable>(&self, d2: &Self, _ctx: &C) -> Result<Self, Error> {
        if *d2 == 0.0 {
            return Err(Error::DivisionByZero);
        }
        finite(self / d2)
    }

    fn sqrt<C: Contextable>(&self, _ctx: &C) -> Result<Self, Error> {
        if *self < 0.0 {
            return Err(Error::InvalidArgument);
        }
        Ok(f64::sqrt(*self))
    }

    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    fn neg(&self) -> Self {
        -*self
    }
}

fn finite(f: f64) -> Result<f64, Error> {
    if f.is_finite() {
        Ok(f)
    } else {
        Err(Error::Overflow)
    }
}

//
// rust_decimal::Decimal
//

// Rounds `d` to the context floor, never below the native scale limit.
fn round_decimal<C: Contextable>(d: Decimal, ctx: &C) -> Result<Decimal, Error> {
    let floor = ctx.min_exponent().max(-DECIMAL_MAX_DIGITS);

    if -(d.scale() as i64) >= floor as i64 {
        return Ok(d);
    }

    PrecisionDecimal::from(d)
        .round_to_exponent(floor, ctx.rounding_mode())
        .to_decimal(ctx.rounding_mode())
}

impl SeriesNumber for Decimal {
    fn from_i64(v: i64) -> Self {
        Decimal::from(v)
    }

    fn from_ratio<C: Contextable>(num: &BigInt, den: &BigInt, ctx: &C) -> Result<Self, Error> {
        let floor = ctx.min_exponent().max(-DECIMAL_MAX_DIGITS);

        let q = PrecisionDecimal::from(num.clone()).div(
            &PrecisionDecimal::from(den.clone()),
            floor,
            ctx.rounding_mode(),
        )?;

        q.to_decimal(ctx.rounding_mode())
    }

    fn add<C: Contextable>(&self, d2: &Self, ctx: &C) -> Result<Self, Error> {
        round_decimal(self.checked_add(*d2).ok_or(Error::Overflow)?, ctx)
    }

    fn sub<C: Contextable>(&self, d2: &Self, ctx: &C) -> Result<Self, Error> {
        round_decimal(self.checked_sub(*d2).ok_or(Error::Overflow)?, ctx)
    }

    fn mul<C: Contextable>(&self, d2: &Self, ctx: &C) -> Result<Self, Error> {
        round_decimal(self.checked_mul(*d2).ok_or(Error::Overflow)?, ctx)
    }

    fn div<C: Contextable>(&self, d2: &Self, ctx: &C) -> Result<Self, Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }
        round_decimal(self.checked_div(*d2).ok_or(Error::Overflow)?, ctx)
    }

    fn sqrt<C: Contextable>(&self, ctx: &C) -> Result<Self, Error> {
        let r = MathematicalOps::sqrt(self).ok_or(Error::InvalidArgument)?;
        round_decimal(r, ctx)
    }

    fn abs(&self) -> Self {
        Decimal::abs(self)
    }

    fn neg(&self) -> Self {
        -*self
    }
}
