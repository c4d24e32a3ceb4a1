//! Chudnovsky series.

use num_bigint::BigInt;
use num_traits::One;

use crate::common::consts::C13591409;
use crate::common::consts::C545140134;
use crate::common::consts::C640320_POW3;
use crate::ctx::Contextable;
use crate::defs::Error;
use crate::series::run;
use crate::series::Series;
use crate::series::SeriesNumber;
use crate::series::Termination;

struct Chudnovsky<T> {
    sum: T,
    f6k: BigInt,
    f3k: BigInt,
    fk: BigInt,
    p640320: BigInt,
}

impl<T: SeriesNumber> Series<T> for Chudnovsky<T> {
    const NAME: &'static str = "chudnovsky";

    fn init<C: Contextable>(_ctx: &C) -> Result<Self, Error> {
        Ok(Chudnovsky {
            sum: T::from_i64(0),
            f6k: BigInt::one(),
            f3k: BigInt::one(),
            fk: BigInt::one(),
            p640320: BigInt::one(),
        })
    }

    // (-1)^k (6k)!(13591409 + 545140134k) / ((3k)! (k!)^3 640320^(3k))
    fn step<C: Contextable>(&mut self, k: usize, ctx: &C) -> Result<T, Error> {
        let kb = BigInt::from(k);

        let mut num = &self.f6k * (&*C13591409 + &*C545140134 * &kb);
        if k & 1 != 0 {
            num = -num;
        }
        let den = &self.f3k * &self.fk * &self.fk * &self.fk * &self.p640320;

        let term = T::from_ratio(&num, &den, ctx)?;
        self.sum = self.sum.add(&term, ctx)?;

        let k6 = &kb * 6u8;
        for i in 1u8..=6 {
            self.f6k *= &k6 + i;
        }
        let k3 = &kb * 3u8;
        for i in 1u8..=3 {
            self.f3k *= &k3 + i;
        }
        self.fk *= kb + 1u8;
        self.p640320 *= &*C640320_POW3;

        Ok(term.abs())
    }

    // 12 * sum / (640320 * sqrt(640320))
    fn finalize<C: Contextable>(self, ctx: &C) -> Result<T, Error> {
        let c = T::from_i64(640320);
        let den = c.mul(&c.sqrt(ctx)?, ctx)?;
        self.sum.mul(&T::from_i64(12), ctx)?.div(&den, ctx)
    }
}

/// Computes 1/π as `12 / 640320^(3/2) · Σ (-1)^k (6k)!(13591409 + 545140134k) / ((3k)! (k!)^3 · 640320^(3k))`.
/// Each term is computed exactly and converted to `T` with a single rounding.
///
/// ## Errors
///
///  - InvalidArgument: the tolerance is negative.
///  - Overflow: a term does not fit the type.
pub fn chudnovsky<T: SeriesNumber, C: Contextable>(termination: &Termination<T>, ctx: &C) -> Result<T, Error> {
    run::<T, Chudnovsky<T>, C>(termination, ctx)
}
