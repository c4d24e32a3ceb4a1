//! Machin's formula.

use num_bigint::BigInt;
use num_traits::One;

use crate::ctx::Contextable;
use crate::defs::Error;
use crate::series::run;
use crate::series::Series;
use crate::series::SeriesNumber;
use crate::series::Termination;

struct Machin<T> {
    sum: T,
    four: BigInt,
    pow5: BigInt,
    pow239: BigInt,
    mul5: BigInt,
    mul239: BigInt,
}

impl<T: SeriesNumber> Series<T> for Machin<T> {
    const NAME: &'static str = "machin";

    fn init<C: Contextable>(_ctx: &C) -> Result<Self, Error> {
        Ok(Machin {
            sum: T::from_i64(0),
            four: BigInt::from(4u8),
            pow5: BigInt::from(5u8),
            pow239: BigInt::from(239u8),
            mul5: BigInt::from(5u8 * 5),
            mul239: BigInt::from(239u32 * 239),
        })
    }

    // 4/((2k+1)*5^(2k+1)) - 1/((2k+1)*239^(2k+1)) with alternating sign
    fn step<C: Contextable>(&mut self, k: usize, ctx: &C) -> Result<T, Error> {
        let n = BigInt::from(k) * 2u8 + 1u8;

        let t1 = T::from_ratio(&self.four, &(&n * &self.pow5), ctx)?;
        let t2 = T::from_ratio(&BigInt::one(), &(&n * &self.pow239), ctx)?;
        let term = t1.sub(&t2, ctx)?;

        self.sum = if k & 1 == 0 {
            self.sum.add(&term, ctx)?
        } else {
            self.sum.sub(&term, ctx)?
        };

        self.pow5 *= &self.mul5;
        self.pow239 *= &self.mul239;

        Ok(term)
    }

    fn finalize<C: Contextable>(self, _ctx: &C) -> Result<T, Error> {
        Ok(self.sum)
    }
}

/// Computes π/4 as `4·arctan(1/5) - arctan(1/239)`, summing both arctangent series term by term.
/// The term `k` is `4/((2k+1)·5^(2k+1)) - 1/((2k+1)·239^(2k+1))`.
///
/// ## Errors
///
///  - InvalidArgument: the tolerance is negative.
pub fn machin<T: SeriesNumber, C: Contextable>(termination: &Termination<T>, ctx: &C) -> Result<T, Error> {
    run::<T, Machin<T>, C>(termination, ctx)
}
