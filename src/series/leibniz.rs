//! Leibniz series.

use crate::ctx::Contextable;
use crate::defs::Error;
use crate::series::run;
use crate::series::Series;
use crate::series::SeriesNumber;
use crate::series::Termination;

struct Leibniz<T> {
    sum: T,
}

impl<T: SeriesNumber> Series<T> for Leibniz<T> {
    const NAME: &'static str = "leibniz";

    fn init<C: Contextable>(_ctx: &C) -> Result<Self, Error> {
        Ok(Leibniz { sum: T::from_i64(0) })
    }

    fn step<C: Contextable>(&mut self, k: usize, ctx: &C) -> Result<T, Error> {
        let n = i64::try_from(k)
            .ok()
            .and_then(|k| k.checked_mul(2))
            .and_then(|k| k.checked_add(1))
            .ok_or(Error::Overflow)?;

        let term = T::from_i64(1).div(&T::from_i64(n), ctx)?;

        self.sum = if k & 1 == 0 {
            self.sum.add(&term, ctx)?
        } else {
            self.sum.sub(&term, ctx)?
        };

        Ok(term)
    }

    fn finalize<C: Contextable>(self, _ctx: &C) -> Result<T, Error> {
        Ok(self.sum)
    }
}

/// Computes π/4 as `1 - 1/3 + 1/5 - 1/7 + ...`.
/// The magnitude of a term is `1/(2k+1)`.
///
/// ## Errors
///
///  - InvalidArgument: the tolerance is negative.
///  - Overflow: the term index is out of the range of the type.
pub fn leibniz<T: SeriesNumber, C: Contextable>(termination: &Termination<T>, ctx: &C) -> Result<T, Error> {
    run::<T, Leibniz<T>, C>(termination, ctx)
}
