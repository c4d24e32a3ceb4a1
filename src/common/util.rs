//! Auxiliary functions.

use core::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;
use num_traits::Zero;

use crate::common::consts::TEN_POWERS;
use crate::common::consts::TEN_POWERS_CACHED;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::MAX_PRECISION_DIGITS;

/// integer logarithm base 2 of a number.
pub fn log2_ceil(mut n: usize) -> usize {
    let mut ret = 0;
    let mut sticky = 0;
    while n > 1 {
        if n & 1 != 0 {
            sticky = 1;
        }
        ret += 1;
        n >>= 1;
    }
    ret + sticky
}

/// Returns 10^n.
pub fn pow10(n: usize) -> BigInt {
    if n < TEN_POWERS_CACHED {
        TEN_POWERS[n].clone()
    } else {
        let mut ret = TEN_POWERS[TEN_POWERS_CACHED - 1].clone();
        ret *= num_traits::pow(BigInt::from(10u8), n + 1 - TEN_POWERS_CACHED);
        ret
    }
}

/// Checks that `n` digits are within the supported range.
pub fn check_digits(n: usize) -> Result<(), Error> {
    if n > MAX_PRECISION_DIGITS {
        Err(Error::PrecisionUnsatisfiable)
    } else {
        Ok(())
    }
}

/// Number of decimal digits of the magnitude of `m`. Zero has no digits.
pub fn decimal_digits(m: &BigInt) -> usize {
    if m.is_zero() {
        return 0;
    }

    let bits = m.bits() as usize;

    // 1233/4096 slightly underestimates log10(2).
    let mut n = (bits - 1) * 1233 / 4096 + 1;
    let mag = m.abs();
    while mag >= pow10(n) {
        n += 1;
    }
    while n > 1 && mag < pow10(n - 1) {
        n -= 1;
    }

    n
}

/// Rounds the quotient `q` of a truncating division given the remainder `r` and the divisor `d`.
/// `negative` is the sign of the exact quotient, which can not be derived from `q` when `q` is zero.
pub fn round_quotient(
    q: BigInt,
    r: &BigInt,
    d: &BigInt,
    negative: bool,
    rm: RoundingMode,
) -> BigInt {
    if r.is_zero() {
        return q;
    }

    let twice: BigInt = r.abs() << 1;
    apply_rounding(q, twice.cmp(&d.abs()), negative, rm)
}

/// Rounds inexact truncated value `q`.
/// `half` is the comparison of the discarded part with one half of the last retained digit.
pub fn apply_rounding(q: BigInt, half: Ordering, negative: bool, rm: RoundingMode) -> BigInt {
    let away = |q: BigInt| if negative { q - 1 } else { q + 1 };

    if rm == RoundingMode::None {
        return q;
    }

    match half {
        Ordering::Less => q,
        Ordering::Greater => away(q),
        Ordering::Equal => match rm {
            RoundingMode::None | RoundingMode::ToZero => q,
            RoundingMode::Up => {
                if negative {
                    q
                } else {
                    away(q)
                }
            }
            RoundingMode::Down => {
                if negative {
                    away(q)
                } else {
                    q
                }
            }
            RoundingMode::FromZero => away(q),
            RoundingMode::ToEven => {
                if q.is_even() {
                    q
                } else {
                    away(q)
                }
            }
            RoundingMode::ToOdd => {
                if q.is_odd() {
                    q
                } else {
                    away(q)
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[test]
    fn test_log2_ceil() {
        assert_eq!(log2_ceil(1), 0);
        assert_eq!(log2_ceil(2), 1);
        assert_eq!(log2_ceil(3), 2);
        assert_eq!(log2_ceil(1024), 10);
        assert_eq!(log2_ceil(1025), 11);
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), BigInt::from(1));
        assert_eq!(pow10(3), BigInt::from(1000));
        assert_eq!(pow10(70).to_string(), format!("1{}", "0".repeat(70)));
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(decimal_digits(&BigInt::zero()), 0);
        assert_eq!(decimal_digits(&BigInt::from(9)), 1);
        assert_eq!(decimal_digits(&BigInt::from(-10)), 2);
        assert_eq!(decimal_digits(&pow10(100)), 101);
        assert_eq!(decimal_digits(&(pow10(100) - 1)), 100);

        for _ in 0..1000 {
            let v = BigInt::from(random::<i128>());
            assert_eq!(decimal_digits(&v), v.abs().to_string().len() - usize::from(v.is_zero()));
        }
    }

    #[test]
    fn test_round_quotient() {
        let d = BigInt::from(10);

        // 25 / 10
        let q = BigInt::from(2);
        let r = BigInt::from(5);
        assert_eq!(round_quotient(q.clone(), &r, &d, false, RoundingMode::ToEven), BigInt::from(2));
        assert_eq!(round_quotient(q.clone(), &r, &d, false, RoundingMode::FromZero), BigInt::from(3));
        assert_eq!(round_quotient(q.clone(), &r, &d, false, RoundingMode::ToZero), BigInt::from(2));
        assert_eq!(round_quotient(q.clone(), &r, &d, false, RoundingMode::Up), BigInt::from(3));
        assert_eq!(round_quotient(q.clone(), &r, &d, false, RoundingMode::Down), BigInt::from(2));
        assert_eq!(round_quotient(q.clone(), &r, &d, false, RoundingMode::ToOdd), BigInt::from(3));
        assert_eq!(round_quotient(q, &r, &d, false, RoundingMode::None), BigInt::from(2));

        // -25 / 10
        let q = BigInt::from(-2);
        let r = BigInt::from(-5);
        assert_eq!(round_quotient(q.clone(), &r, &d, true, RoundingMode::Up), BigInt::from(-2));
        assert_eq!(round_quotient(q.clone(), &r, &d, true, RoundingMode::Down), BigInt::from(-3));
        assert_eq!(round_quotient(q, &r, &d, true, RoundingMode::FromZero), BigInt::from(-3));

        // -0.6 rounds to -1, -0.4 rounds to 0
        let q = BigInt::zero();
        assert_eq!(round_quotient(q.clone(), &BigInt::from(-6), &d, true, RoundingMode::ToEven), BigInt::from(-1));
        assert_eq!(round_quotient(q, &BigInt::from(-4), &d, true, RoundingMode::ToEven), BigInt::zero());
    }
}
