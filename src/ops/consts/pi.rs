//! π number

use num_bigint::BigInt;

use crate::common::consts::C10939058860032000;
use crate::common::consts::C13591409;
use crate::common::consts::C4270934400;
use crate::common::consts::C545140134;
use crate::common::util::check_digits;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::num::PrecisionDecimal;
use crate::RoundingMode;

/// Extra digits computed above the requested precision.
const GUARD_DIGITS: usize = 10;

/// Upper bound of the computation error in units of the last computed digit.
const ERROR_ULPS: u32 = 10;

/// Decimal digits contributed by one term of the series (slightly underestimated).
const DIGITS_PER_TERM: usize = 14;

fn pqr(a: u64, b: u64) -> (BigInt, BigInt, BigInt) {
    if a == b - 1 {
        let n0 = BigInt::from(6 * b - 5);
        let n1 = BigInt::from(2 * b - 1);
        let n2 = BigInt::from(6 * b - 1);

        let r = n0 * n1 * n2;

        let n1 = BigInt::from(b);
        let q = &*C10939058860032000 * &n1 * &n1 * &n1;

        let n0 = &*C13591409 + &*C545140134 * &n1;
        let mut p = &r * n0;

        if b & 1 != 0 {
            p = -p;
        }

        (p, q, r)
    } else {
        let m = (a + b) / 2;

        let (pa, qa, ra) = pqr(a, m);
        let (pb, qb, rb) = pqr(m, b);

        let r = &ra * rb;
        let q = qa * &qb;
        let p = pa * qb + pb * ra;

        (p, q, r)
    }
}

fn pqr_inc(pa: &BigInt, qa: &BigInt, ra: &BigInt, m: u64) -> (BigInt, BigInt, BigInt, u64) {
    let b = m * 2;

    let (pb, qb, rb) = pqr(m, b);

    let r = ra * rb;
    let q = qa * &qb;
    let p = pa * qb + pb * ra;

    (p, q, r, b)
}

/// Holds value of currently computed PI.
#[derive(Debug)]
pub struct PiCache {
    b: u64,
    pk: BigInt,
    qk: BigInt,
    rk: BigInt,
    val: PrecisionDecimal,
    val_digits: usize,
}

impl PiCache {
    fn calc_pi(p: &BigInt, q: &BigInt, k: usize) -> Result<PrecisionDecimal, Error> {
        // q*4270934400 / ((p + q*13591409) * sqrt(10005))
        let q0 = PrecisionDecimal::from(q * &*C4270934400);
        let p0 = PrecisionDecimal::from(p + q * &*C13591409);

        let f4 = PrecisionDecimal::from(10005u32).sqrt(k + 2, RoundingMode::None)?;
        let f5 = p0.mul_full_prec(&f4)?;

        q0.div(&f5, -(k as Exponent), RoundingMode::None)
    }

    pub fn new() -> Result<Self, Error> {
        let (p01, q01, r01) = pqr(0, 1);

        let val = Self::calc_pi(&p01, &q01, GUARD_DIGITS)?;

        Ok(PiCache {
            b: 1,
            pk: p01,
            qk: q01,
            rk: r01,
            val,
            val_digits: GUARD_DIGITS,
        })
    }

    // Rounds `val` computed with `k` digits to `digits` digits if the computation error
    // can not affect the result.
    fn try_round(
        val: &PrecisionDecimal,
        k: usize,
        digits: usize,
        rm: RoundingMode,
    ) -> Result<Option<PrecisionDecimal>, Error> {
        let e = -(digits as Exponent);
        let err = PrecisionDecimal::new(ERROR_ULPS, -(k as Exponent));

        let lo = val.sub_full_prec(&err)?.round_to_exponent(e, rm);
        let hi = val.add_full_prec(&err)?.round_to_exponent(e, rm);

        if lo == hi {
            Ok(Some(val.round_to_exponent(e, rm)))
        } else {
            Ok(None)
        }
    }

    /// Return value of PI with `digits` fractional digits.
    pub(crate) fn for_prec(&mut self, digits: usize, rm: RoundingMode) -> Result<PrecisionDecimal, Error> {
        check_digits(digits)?;

        let mut k = digits + GUARD_DIGITS;

        loop {
            if self.val_digits >= k {
                if let Some(ret) = Self::try_round(&self.val, self.val_digits, digits, rm)? {
                    return Ok(ret);
                }

                k = self.val_digits + self.val_digits / 5 + GUARD_DIGITS;
            }

            check_digits(k)?;

            let kext = (k / DIGITS_PER_TERM + 2) as u64;

            while self.b <= kext {
                let (pk, qk, rk, bb) = pqr_inc(&self.pk, &self.qk, &self.rk, self.b);
                self.pk = pk;
                self.qk = qk;
                self.rk = rk;
                self.b = bb;
            }

            tracing::debug!(terms = self.b, digits = k, "computing pi");

            self.val = Self::calc_pi(&self.pk, &self.qk, k)?;
            self.val_digits = k;
        }
    }
}
