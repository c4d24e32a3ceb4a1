//! Wallis product.

use crate::ctx::Contextable;
use crate::defs::Error;
use crate::series::run;
use crate::series::Series;
use crate::series::SeriesNumber;
use crate::series::Termination;

struct Wallis<T> {
    prod: T,
}

impl<T: SeriesNumber> Series<T> for Wallis<T> {
    const NAME: &'static str = "wallis";

    fn init<C: Contextable>(_ctx: &C) -> Result<Self, Error> {
        Ok(Wallis { prod: T::from_i64(1) })
    }

    // round k multiplies by (2j/(2j-1)) * (2j/(2j+1)) = 4j^2 / (4j^2 - 1), j = k + 1
    fn step<C: Contextable>(&mut self, k: usize, ctx: &C) -> Result<T, Error> {
        let num = i64::try_from(k)
            .ok()
            .and_then(|k| k.checked_add(1))
            .and_then(|j| j.checked_mul(j))
            .and_then(|j2| j2.checked_mul(4))
            .ok_or(Error::Overflow)?;

        let den = T::from_i64(num - 1);

        self.prod = self.prod.mul(&T::from_i64(num), ctx)?.div(&den, ctx)?;

        // distance of the round factor from 1
        T::from_i64(1).div(&den, ctx)
    }

    fn finalize<C: Contextable>(self, _ctx: &C) -> Result<T, Error> {
        Ok(self.prod)
    }
}

/// Computes π/2 as the product `(2/1 * 2/3) * (4/3 * 4/5) * (6/5 * 6/7) * ...`.
/// Each round multiplies and divides the running product, rounding twice.
/// The magnitude of a round is the distance of its factor from 1, i.e. `1/(4j^2 - 1)`.
///
/// ## Errors
///
///  - InvalidArgument: the tolerance is negative.
///  - Overflow: the round index is out of the range of the type.
pub fn wallis<T: SeriesNumber, C: Contextable>(termination: &Termination<T>, ctx: &C) -> Result<T, Error> {
    run::<T, Wallis<T>, C>(termination, ctx)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ctx::Context;
    use crate::num::PrecisionDecimal;
    use crate::RoundingMode;
    use rust_decimal::Decimal;

    #[test]
    fn test_wallis() {
        let ctx = Context::new(-20, RoundingMode::ToEven);

        // 4/3 * 16/15 = 64/45
        let v = wallis::<PrecisionDecimal, _>(&Termination::Terms(2), &ctx).unwrap();
        assert_eq!(v.to_string(), "1.42222222222222222222");

        let v = wallis::<f64, _>(&Termination::Terms(1_000_000), &ctx).unwrap();
        assert!((v * 2.0 - core::f64::consts::PI).abs() < 1e-5);

        // decimal types: tolerance based checks only
        let t = Termination::Tolerance {
            tolerance: Decimal::new(1, 5),
            max_terms: 1_000_000,
        };
        let v = wallis::<Decimal, _>(&t, &ctx).unwrap();
        let err = (v * Decimal::from(2) - Decimal::PI).abs();
        assert!(err < Decimal::new(1, 2));

        let t = Termination::Tolerance {
            tolerance: PrecisionDecimal::new(1, -5),
            max_terms: 1_000_000,
        };
        let v = wallis::<PrecisionDecimal, _>(&t, &ctx).unwrap();
        assert!(v > PrecisionDecimal::new(156, -2));
        assert!(v < PrecisionDecimal::new(158, -2));
    }
}
