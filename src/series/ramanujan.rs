//! Ramanujan's series.

use num_bigint::BigInt;
use num_traits::One;

use crate::common::consts::C1103;
use crate::common::consts::C26390;
use crate::common::consts::C396_POW4;
use crate::ctx::Contextable;
use crate::defs::Error;
use crate::series::run;
use crate::series::Series;
use crate::series::SeriesNumber;
use crate::series::Termination;

struct Ramanujan<T> {
    sum: T,
    // (4k)!
    f4k: BigInt,
    // k!
    fk: BigInt,
    // 396^(4k)
    p396: BigInt,
}

impl<T: SeriesNumber> Series<T> for Ramanujan<T> {
    const NAME: &'static str = "ramanujan";

    fn init<C: Contextable>(_ctx: &C) -> Result<Self, Error> {
        Ok(Ramanujan {
            sum: T::from_i64(0),
            f4k: BigInt::one(),
            fk: BigInt::one(),
            p396: BigInt::one(),
        })
    }

    // (4k)!(1103 + 26390k) / ((k!)^4 * 396^(4k))
    fn step<C: Contextable>(&mut self, k: usize, ctx: &C) -> Result<T, Error> {
        let kb = BigInt::from(k);

        let num = &self.f4k * (&*C1103 + &*C26390 * &kb);
        let fk2 = &self.fk * &self.fk;
        let den = &fk2 * &fk2 * &self.p396;

        let term = T::from_ratio(&num, &den, ctx)?;
        self.sum = self.sum.add(&term, ctx)?;

        let k4 = &kb * 4u8;
        for i in 1u8..=4 {
            self.f4k *= &k4 + i;
        }
        self.fk *= kb + 1u8;
        self.p396 *= &*C396_POW4;

        Ok(term)
    }

    // sum * 2√2 / 9801
    fn finalize<C: Contextable>(self, ctx: &C) -> Result<T, Error> {
        let sqrt8 = T::from_i64(8).sqrt(ctx)?;
        sqrt8.mul(&self.sum, ctx)?.div(&T::from_i64(9801), ctx)
    }
}

/// Computes 1/π as `2√2/9801 · Σ (4k)!(1103 + 26390k) / ((k!)^4 · 396^(4k))`.
/// Each term is computed exactly and converted to `T` with a single rounding.
///
/// ## Errors
///
///  - InvalidArgument: the tolerance is negative.
///  - Overflow: a term does not fit the type.
pub fn ramanujan<T: SeriesNumber, C: Contextable>(termination: &Termination<T>, ctx: &C) -> Result<T, Error> {
    run::<T, Ramanujan<T>, C>(termination, ctx)
}
