//! Square root.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use num_traits::Zero;

use crate::common::consts::TEN;
use crate::common::util::apply_rounding;
use crate::common::util::check_digits;
use crate::common::util::decimal_digits;
use crate::common::util::log2_ceil;
use crate::common::util::pow10;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::num::PrecisionDecimal;

// Integer square root of non-negative `n` by Newton's method.
// Returns the root and the number of iterations.
pub(crate) fn isqrt(n: &BigInt) -> (BigInt, usize) {
    if n.is_zero() {
        return (BigInt::zero(), 0);
    }

    // 2^ceil(bits/2) is not less than the root and not greater than twice the root.
    let bits = n.bits();
    let mut x: BigInt = BigInt::one() << ((bits + 1) / 2);
    let mut iters = 0;

    loop {
        let y: BigInt = (&x + n / &x) >> 1u8;
        iters += 1;
        if y >= x {
            break;
        }
        x = y;
    }

    tracing::trace!(bits, iters, bound = log2_ceil(bits as usize) + 4, "integer square root");

    (x, iters)
}

impl PrecisionDecimal {
    /// Computes the square root of a number with `digits` fractional digits.
    /// The result is rounded using the rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the number is negative.
    ///  - PrecisionUnsatisfiable: `digits`, or the scaling needed to reach it, is greater than `MAX_PRECISION_DIGITS`.
    pub fn sqrt(&self, digits: usize, rm: RoundingMode) -> Result<Self, Error> {
        if self.is_negative() {
            return Err(Error::InvalidArgument);
        }

        check_digits(digits)?;

        let e_res = -(digits as Exponent);

        if self.is_zero() {
            return Ok(PrecisionDecimal::new(0, e_res));
        }

        // one guard digit: N = value * 10^(2*(digits + 1))
        let k = self.exponent() as i64 + 2 * (digits as i64 + 1);

        let (n, mut inexact) = if k >= 0 {
            check_digits(k as usize)?;
            (self.mantissa() * pow10(k as usize), false)
        } else {
            let shift = k.unsigned_abs() as usize;
            if shift > decimal_digits(self.mantissa()) {
                (BigInt::zero(), true)
            } else {
                let (q, r) = self.mantissa().div_rem(&pow10(shift));
                (q, !r.is_zero())
            }
        };

        let (s, _) = isqrt(&n);
        if &s * &s != n {
            inexact = true;
        }

        let (q, d0) = s.div_rem(&*TEN);

        // discarded part compared to one half of the last digit
        let mut twice = d0 * 2u8;
        if inexact {
            twice += 1u8;
        }
        let half = twice.cmp(&*TEN);

        let q = apply_rounding(q, half, false, rm);

        Ok(PrecisionDecimal::new(q, e_res))
    }
}
