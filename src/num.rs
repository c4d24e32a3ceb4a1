//! PrecisionDecimal definition and basic arithmetic, comparison, and rounding operations.

use core::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;

use crate::common::util::apply_rounding;
use crate::common::util::check_digits;
use crate::common::util::decimal_digits;
use crate::common::util::pow10;
use crate::common::util::round_quotient;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::EXPONENT_MAX;

/// A decimal number with a mantissa of an arbitrary size: the value is `mantissa × 10^exponent`.
///
/// The representation is not normalized: `10 × 10^-1` and `1 × 10^0` are distinct representations
/// of the same value. Comparison, equality, and hashing use the value.
#[derive(Debug, Clone)]
pub struct PrecisionDecimal {
    m: BigInt,
    e: Exponent,
}

impl PrecisionDecimal {
    /// Returns a new number with mantissa `m` and exponent `e`.
    pub fn new<M: Into<BigInt>>(m: M, e: Exponent) -> Self {
        PrecisionDecimal { m: m.into(), e }
    }

    /// Returns zero.
    pub fn zero() -> Self {
        PrecisionDecimal {
            m: BigInt::zero(),
            e: 0,
        }
    }

    /// Returns one.
    pub fn one() -> Self {
        PrecisionDecimal {
            m: BigInt::one(),
            e: 0,
        }
    }

    /// Returns the mantissa.
    pub fn mantissa(&self) -> &BigInt {
        &self.m
    }

    /// Returns the exponent.
    pub fn exponent(&self) -> Exponent {
        self.e
    }

    /// Decomposes the number into the mantissa and the exponent.
    pub fn into_raw_parts(self) -> (BigInt, Exponent) {
        (self.m, self.e)
    }

    /// Returns the number of decimal digits in the mantissa. Zero has no digits.
    pub fn digits(&self) -> usize {
        decimal_digits(&self.m)
    }

    /// Returns the sign of the number. Zero is positive.
    pub fn sign(&self) -> Sign {
        if self.m.is_negative() {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        self.m.is_zero()
    }

    /// Returns true if the number is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.m.is_positive()
    }

    /// Returns true if the number is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.m.is_negative()
    }

    /// Returns the negated number.
    pub fn neg(&self) -> Self {
        PrecisionDecimal {
            m: -&self.m,
            e: self.e,
        }
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        PrecisionDecimal {
            m: self.m.abs(),
            e: self.e,
        }
    }

    /// Exponent of the most significant digit. Must not be called for zero.
    fn adjusted_exponent(&self) -> i64 {
        debug_assert!(!self.m.is_zero());
        decimal_digits(&self.m) as i64 - 1 + self.e as i64
    }

    // Brings mantissas of `self` and `d2` to the smaller of the two exponents.
    fn align(&self, d2: &Self) -> Result<(BigInt, BigInt, Exponent), Error> {
        let shift = self.e as i64 - d2.e as i64;

        if shift > 0 {
            check_digits(shift as usize)?;
            let m1 = if self.m.is_zero() {
                BigInt::zero()
            } else {
                &self.m * pow10(shift as usize)
            };
            Ok((m1, d2.m.clone(), d2.e))
        } else if shift < 0 {
            check_digits(shift.unsigned_abs() as usize)?;
            let m2 = if d2.m.is_zero() {
                BigInt::zero()
            } else {
                &d2.m * pow10(shift.unsigned_abs() as usize)
            };
            Ok((self.m.clone(), m2, self.e))
        } else {
            Ok((self.m.clone(), d2.m.clone(), self.e))
        }
    }

    /// Adds `d2` to `self` without rounding.
    /// The exponent of the result is the smaller of the exponents of the operands.
    ///
    /// ## Errors
    ///
    ///  - PrecisionUnsatisfiable: aligning the operands requires a shift larger than `MAX_PRECISION_DIGITS`.
    pub fn add_full_prec(&self, d2: &Self) -> Result<Self, Error> {
        let (m1, m2, e) = self.align(d2)?;
        Ok(PrecisionDecimal { m: m1 + m2, e })
    }

    /// Subtracts `d2` from `self` without rounding.
    /// The exponent of the result is the smaller of the exponents of the operands.
    ///
    /// ## Errors
    ///
    ///  - PrecisionUnsatisfiable: aligning the operands requires a shift larger than `MAX_PRECISION_DIGITS`.
    pub fn sub_full_prec(&self, d2: &Self) -> Result<Self, Error> {
        let (m1, m2, e) = self.align(d2)?;
        Ok(PrecisionDecimal { m: m1 - m2, e })
    }

    /// Adds `d2` to `self` and rounds the result to `min_exponent` using rounding mode `rm`
    /// if the exponent of the exact sum is smaller than `min_exponent`.
    ///
    /// ## Errors
    ///
    ///  - PrecisionUnsatisfiable: aligning the operands requires a shift larger than `MAX_PRECISION_DIGITS`.
    pub fn add(&self, d2: &Self, min_exponent: Exponent, rm: RoundingMode) -> Result<Self, Error> {
        Ok(self.add_full_prec(d2)?.round_to_exponent(min_exponent, rm))
    }

    /// Subtracts `d2` from `self` and rounds the result to `min_exponent` using rounding mode `rm`
    /// if the exponent of the exact difference is smaller than `min_exponent`.
    ///
    /// ## Errors
    ///
    ///  - PrecisionUnsatisfiable: aligning the operands requires a shift larger than `MAX_PRECISION_DIGITS`.
    pub fn sub(&self, d2: &Self, min_exponent: Exponent, rm: RoundingMode) -> Result<Self, Error> {
        Ok(self.sub_full_prec(d2)?.round_to_exponent(min_exponent, rm))
    }

    /// Multiplies `self` by `d2` without rounding.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the exponent of the result is out of range.
    pub fn mul_full_prec(&self, d2: &Self) -> Result<Self, Error> {
        let e = self.e.checked_add(d2.e).ok_or(Error::Overflow)?;
        Ok(PrecisionDecimal { m: &self.m * &d2.m, e })
    }

    /// Multiplies `self` by `d2` and rounds the result to `min_exponent` using rounding mode `rm`
    /// if the exponent of the exact product is smaller than `min_exponent`.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the exponent of the result is out of range.
    pub fn mul(&self, d2: &Self, min_exponent: Exponent, rm: RoundingMode) -> Result<Self, Error> {
        Ok(self.mul_full_prec(d2)?.round_to_exponent(min_exponent, rm))
    }

    /// Divides `self` by `d2`. The result has exponent `min_exponent`,
    /// and its last digit is rounded using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    ///  - PrecisionUnsatisfiable: the quotient would need more than `MAX_PRECISION_DIGITS` digits of shift.
    pub fn div(&self, d2: &Self, min_exponent: Exponent, rm: RoundingMode) -> Result<Self, Error> {
        if d2.m.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if self.m.is_zero() {
            return Ok(PrecisionDecimal::new(0, min_exponent));
        }

        // self / d2 = (m1 / m2) * 10^(e1 - e2) = (m1 * 10^shift / m2) * 10^min_exponent
        let shift = self.e as i64 - d2.e as i64 - min_exponent as i64;

        let (num, den) = if shift >= 0 {
            check_digits(shift as usize)?;
            (&self.m * pow10(shift as usize), d2.m.clone())
        } else {
            let s = shift.unsigned_abs() as usize;
            if s > decimal_digits(&self.m) {
                // |quotient| < 0.1 of the last digit
                let negative = self.m.is_negative() != d2.m.is_negative();
                let q = apply_rounding(BigInt::zero(), Ordering::Less, negative, rm);
                return Ok(PrecisionDecimal::new(q, min_exponent));
            }
            (self.m.clone(), &d2.m * pow10(s))
        };

        let negative = num.is_negative() != den.is_negative();
        let (q, r) = num.div_rem(&den);
        let q = round_quotient(q, &r, &den, negative, rm);

        Ok(PrecisionDecimal::new(q, min_exponent))
    }

    /// Returns the reciprocal of `self` with exponent `min_exponent`, rounded using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero.
    ///  - PrecisionUnsatisfiable: the quotient would need more than `MAX_PRECISION_DIGITS` digits of shift.
    pub fn reciprocal(&self, min_exponent: Exponent, rm: RoundingMode) -> Result<Self, Error> {
        Self::one().div(self, min_exponent, rm)
    }

    /// Rounds the number to exponent `e` using rounding mode `rm`.
    /// Numbers with exponent greater than or equal to `e` are returned unchanged.
    pub fn round_to_exponent(&self, e: Exponent, rm: RoundingMode) -> Self {
        if self.e >= e {
            return self.clone();
        }

        let shift = (e as i64 - self.e as i64) as usize;
        let negative = self.m.is_negative();

        if self.m.is_zero() {
            return PrecisionDecimal::new(0, e);
        }

        if shift > decimal_digits(&self.m) {
            // all digits are discarded and they are less than half
            let q = apply_rounding(BigInt::zero(), Ordering::Less, negative, rm);
            return PrecisionDecimal::new(q, e);
        }

        let d = pow10(shift);
        let (q, r) = self.m.div_rem(&d);
        let q = round_quotient(q, &r, &d, negative, rm);

        PrecisionDecimal::new(q, e)
    }

    /// Rounds the number to `n` fractional digits using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - PrecisionUnsatisfiable: `n` is greater than `MAX_PRECISION_DIGITS`.
    pub fn round(&self, n: usize, rm: RoundingMode) -> Result<Self, Error> {
        check_digits(n)?;
        Ok(self.round_to_exponent(-(n as Exponent), rm))
    }

    /// Returns the integer part of the number.
    pub fn trunc(&self) -> Self {
        self.round_to_exponent(0, RoundingMode::None)
    }

    /// Returns the fractional part of the number.
    pub fn fract(&self) -> Self {
        if self.e >= 0 {
            return PrecisionDecimal::zero();
        }

        let shift = (-(self.e as i64)) as usize;
        if shift > decimal_digits(&self.m) {
            return self.clone();
        }

        PrecisionDecimal::new(&self.m % pow10(shift), self.e)
    }

    /// Returns true if the number has no fractional part.
    pub fn is_int(&self) -> bool {
        self.fract().is_zero()
    }

    /// Returns the same value with trailing zeroes removed from the mantissa.
    /// Zero is represented as `0 × 10^0`.
    pub fn normalize(&self) -> Self {
        if self.m.is_zero() {
            return PrecisionDecimal::zero();
        }

        let mut m = self.m.clone();
        let mut e = self.e;

        // strips 10^step if the mantissa is divisible by it and the exponent stays in range
        let strip = |m: &mut BigInt, e: &mut Exponent, step: usize| -> bool {
            if *e as i64 + step as i64 > EXPONENT_MAX as i64 {
                return false;
            }
            let (q, r) = m.div_rem(&pow10(step));
            if r.is_zero() {
                *m = q;
                *e += step as Exponent;
                true
            } else {
                false
            }
        };

        // doubling steps, then the remaining zeroes (fewer than the last step) in halving steps
        let mut step = 1;
        while strip(&mut m, &mut e, step) {
            step *= 2;
        }
        while step > 1 {
            step /= 2;
            strip(&mut m, &mut e, step);
        }

        PrecisionDecimal { m, e }
    }

    /// Compares the absolute values of `self` and `d2`.
    pub fn abs_cmp(&self, d2: &Self) -> Ordering {
        match (self.m.is_zero(), d2.m.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        let a1 = self.adjusted_exponent();
        let a2 = d2.adjusted_exponent();

        if a1 != a2 {
            return a1.cmp(&a2);
        }

        // same magnitude, hence the shift is bounded by the mantissa length
        let shift = self.e as i64 - d2.e as i64;
        if shift >= 0 {
            (self.m.abs() * pow10(shift as usize)).cmp(&d2.m.abs())
        } else {
            self.m.abs().cmp(&(d2.m.abs() * pow10(shift.unsigned_abs() as usize)))
        }
    }

    /// Returns a random normalized number with at most `max_digits` mantissa digits and
    /// an exponent in the range from `exp_from` to `exp_to` inclusive.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `max_digits` is zero, or `exp_from` is greater than `exp_to`.
    ///  - PrecisionUnsatisfiable: `max_digits` is greater than `MAX_PRECISION_DIGITS`.
    #[cfg(feature = "random")]
    pub fn random(max_digits: usize, exp_from: Exponent, exp_to: Exponent) -> Result<Self, Error> {
        use rand::Rng;

        if max_digits == 0 || exp_from > exp_to {
            return Err(Error::InvalidArgument);
        }

        check_digits(max_digits)?;

        let mut rng = rand::thread_rng();
        let n = rng.gen_range(1..=max_digits);

        // leading digit is non-zero
        let mut m = BigInt::from(rng.gen_range(1u8..10));
        let mut left = n - 1;
        while left > 0 {
            let chunk = left.min(18);
            let chunk_max = 10u64.pow(chunk as u32);
            m = m * chunk_max + rng.gen_range(0..chunk_max);
            left -= chunk;
        }

        if rng.gen::<bool>() {
            m = -m;
        }

        let e = rng.gen_range(exp_from..=exp_to);

        Ok(PrecisionDecimal { m, e })
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    fn rand_num(max_digits: usize) -> PrecisionDecimal {
        PrecisionDecimal::random(max_digits, -30, 30).unwrap()
    }

    #[test]
    fn test_add_sub() {
        // 1.5 + 0.25
        let a = PrecisionDecimal::new(15, -1);
        let b = PrecisionDecimal::new(25, -2);
        let c = a.add_full_prec(&b).unwrap();
        assert_eq!(c.mantissa(), &BigInt::from(175));
        assert_eq!(c.exponent(), -2);

        let c = a.sub_full_prec(&b).unwrap();
        assert_eq!(c.mantissa(), &BigInt::from(125));
        assert_eq!(c.exponent(), -2);

        // zero operand still takes the smaller exponent
        let c = PrecisionDecimal::zero().add_full_prec(&b).unwrap();
        assert_eq!(c.exponent(), -2);
        let c = b.add_full_prec(&PrecisionDecimal::new(0, -7)).unwrap();
        assert_eq!(c.exponent(), -7);
        assert_eq!(c, b);

        // rounded addition
        let c = a.add(&b, -1, RoundingMode::ToEven).unwrap();
        assert_eq!(c, PrecisionDecimal::new(18, -1));
        let c = a.add(&b, -1, RoundingMode::ToZero).unwrap();
        assert_eq!(c, PrecisionDecimal::new(17, -1));

        for _ in 0..1000 {
            let a = rand_num(40);
            let b = rand_num(40);

            let ab = a.add_full_prec(&b).unwrap();
            let ba = b.add_full_prec(&a).unwrap();
            assert_eq!(ab, ba);
            assert_eq!(ab.exponent(), a.exponent().min(b.exponent()));

            let d = ab.sub_full_prec(&b).unwrap();
            assert_eq!(d, a);
        }

        let far = PrecisionDecimal::new(1, EXPONENT_MAX);
        assert_eq!(
            far.add_full_prec(&PrecisionDecimal::new(1, 0)).unwrap_err(),
            Error::PrecisionUnsatisfiable
        );
    }

    #[test]
    fn test_mul() {
        let a = PrecisionDecimal::new(-15, -1);
        let b = PrecisionDecimal::new(25, -2);
        let c = a.mul_full_prec(&b).unwrap();
        assert_eq!(c.mantissa(), &BigInt::from(-375));
        assert_eq!(c.exponent(), -3);

        let c = a.mul(&b, -2, RoundingMode::FromZero).unwrap();
        assert_eq!(c, PrecisionDecimal::new(-38, -2));
        let c = a.mul(&b, -2, RoundingMode::ToEven).unwrap();
        assert_eq!(c, PrecisionDecimal::new(-38, -2));
        let c = a.mul(&b, -2, RoundingMode::Up).unwrap();
        assert_eq!(c, PrecisionDecimal::new(-37, -2));

        let big = PrecisionDecimal::new(1, EXPONENT_MAX);
        assert_eq!(big.mul_full_prec(&big).unwrap_err(), Error::Overflow);

        for _ in 0..1000 {
            let a = rand_num(40);
            let b = rand_num(40);
            assert_eq!(a.mul_full_prec(&b).unwrap(), b.mul_full_prec(&a).unwrap());
        }
    }

    #[test]
    fn test_div() {
        let one = PrecisionDecimal::one();
        let three = PrecisionDecimal::new(3, 0);

        let q = one.div(&three, -10, RoundingMode::FromZero).unwrap();
        assert_eq!(q.mantissa(), &BigInt::from(3333333333u64));
        assert_eq!(q.exponent(), -10);

        let two = PrecisionDecimal::new(2, 0);
        let q = two.div(&three, -10, RoundingMode::FromZero).unwrap();
        assert_eq!(q.mantissa(), &BigInt::from(6666666667u64));
        let q = two.div(&three, -10, RoundingMode::None).unwrap();
        assert_eq!(q.mantissa(), &BigInt::from(6666666666u64));

        // tie: 1 / 8 = 0.125
        let eight = PrecisionDecimal::new(8, 0);
        assert_eq!(one.div(&eight, -2, RoundingMode::ToEven).unwrap(), PrecisionDecimal::new(12, -2));
        assert_eq!(one.div(&eight, -2, RoundingMode::FromZero).unwrap(), PrecisionDecimal::new(13, -2));
        assert_eq!(one.neg().div(&eight, -2, RoundingMode::Up).unwrap(), PrecisionDecimal::new(-12, -2));
        assert_eq!(one.neg().div(&eight, -2, RoundingMode::Down).unwrap(), PrecisionDecimal::new(-13, -2));

        // precision above units
        let n = PrecisionDecimal::new(12345, 0);
        assert_eq!(n.div(&one, 2, RoundingMode::ToEven).unwrap(), PrecisionDecimal::new(123, 2));

        // tiny quotient
        let tiny = PrecisionDecimal::new(7, -100);
        assert!(tiny.div(&one, 0, RoundingMode::ToEven).unwrap().is_zero());

        assert_eq!(one.div(&PrecisionDecimal::new(0, -5), -10, RoundingMode::ToEven).unwrap_err(), Error::DivisionByZero);
        assert_eq!(PrecisionDecimal::zero().reciprocal(-3, RoundingMode::ToEven).unwrap_err(), Error::DivisionByZero);

        // |a - q*b| <= |b| * ulp / 2
        for _ in 0..1000 {
            let a = rand_num(40);
            let mut b = rand_num(30);
            if b.is_zero() {
                b = one.clone();
            }
            let n = (random::<u32>() % 50) as Exponent;
            let q = a.div(&b, -n, RoundingMode::ToEven).unwrap();

            let err = a.sub_full_prec(&q.mul_full_prec(&b).unwrap()).unwrap().abs();
            let bound = b.abs().mul_full_prec(&PrecisionDecimal::new(5, -n - 1)).unwrap();
            assert!(err <= bound, "{} / {} = {}", a, b, q);

            let t = a.div(&b, -n, RoundingMode::None).unwrap();
            let err = a.sub_full_prec(&t.mul_full_prec(&b).unwrap()).unwrap().abs();
            let bound = b.abs().mul_full_prec(&PrecisionDecimal::new(1, -n)).unwrap();
            assert!(err < bound);
        }
    }

    #[test]
    fn test_round() {
        let n = PrecisionDecimal::new(25, -1);
        assert_eq!(n.round(0, RoundingMode::ToEven).unwrap(), PrecisionDecimal::new(2, 0));
        assert_eq!(n.round(0, RoundingMode::FromZero).unwrap(), PrecisionDecimal::new(3, 0));
        assert_eq!(PrecisionDecimal::new(35, -1).round(0, RoundingMode::ToEven).unwrap(), PrecisionDecimal::new(4, 0));
        assert_eq!(n.neg().round(0, RoundingMode::FromZero).unwrap(), PrecisionDecimal::new(-3, 0));
        assert_eq!(n.neg().round(0, RoundingMode::ToOdd).unwrap(), PrecisionDecimal::new(-3, 0));

        // not a tie
        let n = PrecisionDecimal::new(2501, -3);
        assert_eq!(n.round(0, RoundingMode::ToEven).unwrap(), PrecisionDecimal::new(3, 0));
        assert_eq!(n.round(0, RoundingMode::ToZero).unwrap(), PrecisionDecimal::new(3, 0));
        assert_eq!(n.round(0, RoundingMode::None).unwrap(), PrecisionDecimal::new(2, 0));

        // already coarser than requested
        let n = PrecisionDecimal::new(7, 3);
        let r = n.round(5, RoundingMode::ToEven).unwrap();
        assert_eq!(r.exponent(), 3);

        // everything discarded
        let n = PrecisionDecimal::new(4999, -40);
        assert!(n.round(0, RoundingMode::FromZero).unwrap().is_zero());

        assert_eq!(n.round(usize::MAX, RoundingMode::ToEven).unwrap_err(), Error::PrecisionUnsatisfiable);

        for _ in 0..1000 {
            let x = rand_num(40);
            let d = random::<usize>() % 40;
            for rm in [RoundingMode::ToEven, RoundingMode::FromZero, RoundingMode::ToZero, RoundingMode::Up, RoundingMode::Down, RoundingMode::ToOdd, RoundingMode::None] {
                let r1 = x.round(d, rm).unwrap();
                let r2 = r1.round(d, rm).unwrap();
                assert_eq!(r1.mantissa(), r2.mantissa());
                assert_eq!(r1.exponent(), r2.exponent());
            }
        }
    }

    #[test]
    fn test_round_ties() {
        // 2.5, -2.5, 2.501, 2.499 rounded to an integer
        let nums = [
            PrecisionDecimal::new(25, -1),
            PrecisionDecimal::new(-25, -1),
            PrecisionDecimal::new(2501, -3),
            PrecisionDecimal::new(2499, -3),
        ];

        let expected = [
            (RoundingMode::None, [2, -2, 2, 2]),
            (RoundingMode::Up, [3, -2, 3, 2]),
            (RoundingMode::Down, [2, -3, 3, 2]),
            (RoundingMode::ToZero, [2, -2, 3, 2]),
            (RoundingMode::FromZero, [3, -3, 3, 2]),
            (RoundingMode::ToEven, [2, -2, 3, 2]),
            (RoundingMode::ToOdd, [3, -3, 3, 2]),
        ];

        for (rm, vals) in expected {
            for (n, v) in nums.iter().zip(vals) {
                assert_eq!(n.round(0, rm).unwrap(), PrecisionDecimal::new(v, 0), "{} {:?}", n, rm);
            }
        }
    }

    #[test]
    fn test_normalize() {
        // 1.000...0 with a long run of zeroes
        let zeroes = 200_000;
        let n = PrecisionDecimal::new(pow10(zeroes), -(zeroes as Exponent));
        assert_eq!(n.normalize().mantissa(), &BigInt::from(1));
        assert_eq!(n.normalize().exponent(), 0);

        let n = PrecisionDecimal::new(BigInt::from(-7) * pow10(12345), -20);
        let z = n.normalize();
        assert_eq!(z.mantissa(), &BigInt::from(-7));
        assert_eq!(z.exponent(), 12325);

        // exponent limit stops stripping
        let n = PrecisionDecimal::new(1000, EXPONENT_MAX - 1);
        let z = n.normalize();
        assert_eq!(z.mantissa(), &BigInt::from(100));
        assert_eq!(z.exponent(), EXPONENT_MAX);

        for _ in 0..1000 {
            let x = rand_num(30);
            let tz = random::<usize>() % 70;
            let n = PrecisionDecimal::new(x.mantissa() * pow10(tz), x.exponent() - tz as Exponent);

            // reference: one zero at a time
            let mut m = n.mantissa().clone();
            let mut e = n.exponent();
            while m.is_multiple_of(&BigInt::from(10)) {
                m /= 10u8;
                e += 1;
            }

            let z = n.normalize();
            assert_eq!(z.mantissa(), &m);
            assert_eq!(z.exponent(), e);
        }
    }

    #[test]
    fn test_parts() {
        let n = PrecisionDecimal::new(-12345, -2);
        assert_eq!(n.trunc(), PrecisionDecimal::new(-123, 0));
        assert_eq!(n.fract(), PrecisionDecimal::new(-45, -2));
        assert!(!n.is_int());
        assert!(PrecisionDecimal::new(1200, -2).is_int());

        let z = PrecisionDecimal::new(1200, -2).normalize();
        assert_eq!(z.mantissa(), &BigInt::from(12));
        assert_eq!(z.exponent(), 0);

        let z = PrecisionDecimal::new(0, -9).normalize();
        assert_eq!(z.exponent(), 0);

        assert_eq!(n.sign(), Sign::Neg);
        assert_eq!(n.abs().sign(), Sign::Pos);
        assert_eq!(n.digits(), 5);
        assert_eq!(n.neg(), PrecisionDecimal::new(12345, -2));
    }

    #[test]
    fn test_abs_cmp() {
        let a = PrecisionDecimal::new(10, -1);
        let b = PrecisionDecimal::new(-1, 0);
        assert_eq!(a.abs_cmp(&b), Ordering::Equal);
        assert_eq!(PrecisionDecimal::new(99, -2).abs_cmp(&b), Ordering::Less);
        assert_eq!(PrecisionDecimal::new(1, 1000).abs_cmp(&b), Ordering::Greater);
        assert_eq!(PrecisionDecimal::zero().abs_cmp(&PrecisionDecimal::new(0, 5)), Ordering::Equal);
    }

    #[test]
    fn test_random() {
        assert_eq!(PrecisionDecimal::random(0, 0, 0).unwrap_err(), Error::InvalidArgument);
        assert_eq!(PrecisionDecimal::random(1, 1, 0).unwrap_err(), Error::InvalidArgument);

        for _ in 0..100 {
            let n = PrecisionDecimal::random(50, -5, 5).unwrap();
            assert!(n.digits() >= 1 && n.digits() <= 50);
            assert!(n.exponent() >= -5 && n.exponent() <= 5);
        }
    }
}
