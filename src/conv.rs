//! Conversion utilities.

use num_bigint::BigInt;
use num_traits::One;
use num_traits::Signed;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::common::util::decimal_digits;
use crate::common::util::pow10;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::num::PrecisionDecimal;

/// The largest scale `rust_decimal::Decimal` supports.
const DECIMAL_MAX_SCALE: Exponent = 28;

/// Bits of `rust_decimal::Decimal` mantissa.
const DECIMAL_MANTISSA_BITS: u64 = 96;

macro_rules! impl_int_conv {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PrecisionDecimal {
                fn from(i: $t) -> Self {
                    PrecisionDecimal::new(BigInt::from(i), 0)
                }
            }
        )*
    };
}

impl_int_conv!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for PrecisionDecimal {
    fn from(i: BigInt) -> Self {
        PrecisionDecimal::new(i, 0)
    }
}

impl From<Decimal> for PrecisionDecimal {
    fn from(d: Decimal) -> Self {
        PrecisionDecimal::new(d.mantissa(), -(d.scale() as Exponent))
    }
}

impl TryFrom<f64> for PrecisionDecimal {
    type Error = Error;

    /// Converts `f` to the shortest decimal which converts back to `f`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `f` is NaN or infinite.
    fn try_from(f: f64) -> Result<Self, Self::Error> {
        if !f.is_finite() {
            return Err(Error::InvalidArgument);
        }

        PrecisionDecimal::parse(&format!("{:e}", f))
    }
}

impl TryFrom<f32> for PrecisionDecimal {
    type Error = Error;

    /// Converts `f` to the shortest decimal which converts back to `f`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `f` is NaN or infinite.
    fn try_from(f: f32) -> Result<Self, Self::Error> {
        if !f.is_finite() {
            return Err(Error::InvalidArgument);
        }

        PrecisionDecimal::parse(&format!("{:e}", f))
    }
}

impl PrecisionDecimal {
    /// Converts the number to the nearest f64.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the number is out of the range of f64.
    pub fn to_f64(&self) -> Result<f64, Error> {
        let f: f64 = self.format_sci().parse().map_err(|_| Error::InvalidArgument)?;
        if f.is_finite() {
            Ok(f)
        } else {
            Err(Error::Overflow)
        }
    }

    /// Converts the number to the nearest f32.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the number is out of the range of f32.
    pub fn to_f32(&self) -> Result<f32, Error> {
        let f: f32 = self.format_sci().parse().map_err(|_| Error::InvalidArgument)?;
        if f.is_finite() {
            Ok(f)
        } else {
            Err(Error::Overflow)
        }
    }

    // Integer part as BigInt.
    fn int_part(&self) -> Result<BigInt, Error> {
        let e = self.exponent();

        if e >= 0 {
            if self.is_zero() {
                return Ok(BigInt::from(0u8));
            }

            // 10^40 is beyond i128
            if e as usize + self.digits() > 40 {
                return Err(Error::Overflow);
            }

            Ok(self.mantissa() * pow10(e as usize))
        } else {
            Ok(self.trunc().into_raw_parts().0)
        }
    }

    /// Converts the integer part of the number to i64.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the integer part is out of the range of i64.
    pub fn to_i64(&self) -> Result<i64, Error> {
        self.int_part()?.to_i64().ok_or(Error::Overflow)
    }

    /// Converts the integer part of the number to i128.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the integer part is out of the range of i128.
    pub fn to_i128(&self) -> Result<i128, Error> {
        self.int_part()?.to_i128().ok_or(Error::Overflow)
    }

    /// Converts the number to `rust_decimal::Decimal`.
    /// Fractional digits that do not fit are rounded using the rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the integer part of the number does not fit in 96 bits.
    pub fn to_decimal(&self, rm: RoundingMode) -> Result<Decimal, Error> {
        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let mut n = if self.exponent() > 0 {
            if self.exponent() as usize + self.digits() > 29 {
                return Err(Error::Overflow);
            }
            PrecisionDecimal::new(self.mantissa() * pow10(self.exponent() as usize), 0)
        } else {
            self.round_to_exponent(-DECIMAL_MAX_SCALE, rm)
        };

        let limit: BigInt = (BigInt::one() << DECIMAL_MANTISSA_BITS) - 1u8;

        while n.mantissa().abs() > limit {
            if n.exponent() >= 0 {
                return Err(Error::Overflow);
            }

            // dropping digits until the mantissa fits
            let excess = decimal_digits(n.mantissa()).saturating_sub(29).max(1);
            let e = (n.exponent() + excess as Exponent).min(0);
            n = n.round_to_exponent(e, rm);
        }

        let (m, e) = n.into_raw_parts();
        let m = m.to_i128().ok_or(Error::Overflow)?;

        Decimal::try_from_i128_with_scale(m, e.unsigned_abs()).map_err(|_| Error::Overflow)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[test]
    fn test_int_conv() {
        assert_eq!(PrecisionDecimal::from(-5i8), PrecisionDecimal::new(-5, 0));
        assert_eq!(PrecisionDecimal::from(u128::MAX).to_string(), u128::MAX.to_string());
        assert_eq!(PrecisionDecimal::from(BigInt::from(42)).exponent(), 0);

        assert_eq!(PrecisionDecimal::new(-12399, -2).to_i64().unwrap(), -123);
        assert_eq!(PrecisionDecimal::new(12, 3).to_i64().unwrap(), 12000);
        assert_eq!(PrecisionDecimal::new(7, -20).to_i64().unwrap(), 0);
        assert_eq!(PrecisionDecimal::from(i64::MIN).to_i64().unwrap(), i64::MIN);
        assert_eq!(PrecisionDecimal::from(i64::MAX).add_full_prec(&PrecisionDecimal::one()).unwrap().to_i64().unwrap_err(), Error::Overflow);
        assert_eq!(PrecisionDecimal::new(1, 30).to_i128().unwrap(), 10i128.pow(30));
        assert_eq!(PrecisionDecimal::new(1, 1000).to_i128().unwrap_err(), Error::Overflow);

        for _ in 0..1000 {
            let i = random::<i64>();
            assert_eq!(PrecisionDecimal::from(i).to_i64().unwrap(), i);
            let i = random::<i128>();
            assert_eq!(PrecisionDecimal::from(i).to_i128().unwrap(), i);
        }
    }

    #[test]
    fn test_float_conv() {
        let d = PrecisionDecimal::try_from(0.1f64).unwrap();
        assert_eq!(d, PrecisionDecimal::new(1, -1));
        let d = PrecisionDecimal::try_from(-1.5e-7f64).unwrap();
        assert_eq!(d, PrecisionDecimal::new(-15, -8));
        assert!(PrecisionDecimal::try_from(0.0f64).unwrap().is_zero());

        assert_eq!(PrecisionDecimal::try_from(f64::NAN).unwrap_err(), Error::InvalidArgument);
        assert_eq!(PrecisionDecimal::try_from(f64::INFINITY).unwrap_err(), Error::InvalidArgument);
        assert_eq!(PrecisionDecimal::try_from(f32::NEG_INFINITY).unwrap_err(), Error::InvalidArgument);

        assert_eq!(PrecisionDecimal::new(1, 400).to_f64().unwrap_err(), Error::Overflow);
        assert_eq!(PrecisionDecimal::new(1, 40).to_f32().unwrap_err(), Error::Overflow);
        assert_eq!(PrecisionDecimal::new(25, -1).to_f32().unwrap(), 2.5f32);

        for _ in 0..1000 {
            let f = random::<f64>() * 1e10 - 5e9;
            let d = PrecisionDecimal::try_from(f).unwrap();
            assert_eq!(d.to_f64().unwrap(), f);

            let f = random::<f32>() - 0.5;
            let d = PrecisionDecimal::try_from(f).unwrap();
            assert_eq!(d.to_f32().unwrap(), f);
        }
    }

    #[test]
    fn test_decimal_conv() {
        let d = Decimal::new(-31415, 4);
        let n = PrecisionDecimal::from(d);
        assert_eq!(n, PrecisionDecimal::new(-31415, -4));
        assert_eq!(n.to_decimal(RoundingMode::ToEven).unwrap(), d);

        // excess fractional digits are rounded
        let n = PrecisionDecimal::one().div(&PrecisionDecimal::new(3, 0), -40, RoundingMode::ToEven).unwrap();
        let d = n.to_decimal(RoundingMode::ToEven).unwrap();
        assert_eq!(d.scale(), 28);
        assert_eq!(d, Decimal::ONE / Decimal::from(3));

        // large integer part reduces the scale
        let n = PrecisionDecimal::parse("12345678901234567890.123456789012345").unwrap();
        let d = n.to_decimal(RoundingMode::ToEven).unwrap();
        assert!(d.scale() < 15);
        assert_eq!(d.trunc(), Decimal::from(12345678901234567890u64));

        assert_eq!(PrecisionDecimal::new(5, 0).to_decimal(RoundingMode::ToEven).unwrap(), Decimal::from(5));
        assert_eq!(PrecisionDecimal::new(5, 3).to_decimal(RoundingMode::ToEven).unwrap(), Decimal::from(5000));
        assert_eq!(PrecisionDecimal::new(1, 29).to_decimal(RoundingMode::ToEven).unwrap_err(), Error::Overflow);
        assert_eq!(PrecisionDecimal::from(u128::MAX).to_decimal(RoundingMode::ToEven).unwrap_err(), Error::Overflow);
        assert_eq!(PrecisionDecimal::new(1, -40).to_decimal(RoundingMode::ToEven).unwrap(), Decimal::ZERO);

        for _ in 0..1000 {
            let d = Decimal::new(random::<i64>(), random::<u32>() % 29);
            assert_eq!(PrecisionDecimal::from(d).to_decimal(RoundingMode::None).unwrap(), d);
        }
    }
}
