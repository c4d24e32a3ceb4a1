//! Gauss–Legendre algorithm.

use crate::ctx::Contextable;
use crate::defs::Error;
use crate::series::run;
use crate::series::Series;
use crate::series::SeriesNumber;
use crate::series::Termination;

struct GaussLegendre<T> {
    a: T,
    b: T,
    t: T,
    p: T,
    two: T,
}

impl<T: SeriesNumber> Series<T> for GaussLegendre<T> {
    const NAME: &'static str = "gauss-legendre";

    // a = 1, b = 1/sqrt(2), t = 1/4, p = 1
    fn init<C: Contextable>(ctx: &C) -> Result<Self, Error> {
        let one = T::from_i64(1);
        let two = T::from_i64(2);
        let b = one.div(&two.sqrt(ctx)?, ctx)?;
        let t = one.div(&T::from_i64(4), ctx)?;

        Ok(GaussLegendre {
            a: one.clone(),
            b,
            t,
            p: one,
            two,
        })
    }

    fn step<C: Contextable>(&mut self, _k: usize, ctx: &C) -> Result<T, Error> {
        let a1 = self.a.add(&self.b, ctx)?.div(&self.two, ctx)?;
        let b1 = self.a.mul(&self.b, ctx)?.sqrt(ctx)?;

        let d = self.a.sub(&a1, ctx)?;
        let pd2 = self.p.mul(&d.mul(&d, ctx)?, ctx)?;
        self.t = self.t.sub(&pd2, ctx)?;
        self.p = self.p.mul(&self.two, ctx)?;

        self.a = a1;
        self.b = b1;

        Ok(self.a.sub(&self.b, ctx)?.abs())
    }

    // (a + b)^2 / (4t)
    fn finalize<C: Contextable>(self, ctx: &C) -> Result<T, Error> {
        let s = self.a.add(&self.b, ctx)?;
        let num = s.mul(&s, ctx)?;
        let den = self.t.mul(&T::from_i64(4), ctx)?;
        num.div(&den, ctx)
    }
}

/// Computes π with the Gauss–Legendre algorithm. One term is one round of the iteration,
/// the magnitude of a round is `|a - b|` after the round.
/// The number of correct digits roughly doubles every round: 6 rounds give 100 digits.
///
/// ## Errors
///
///  - InvalidArgument: the tolerance is negative.
pub fn gauss_legendre<T: SeriesNumber, C: Contextable>(termination: &Termination<T>, ctx: &C) -> Result<T, Error> {
    run::<T, GaussLegendre<T>, C>(termination, ctx)
}
