//! Integer power.

use crate::common::util::check_digits;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::num::PrecisionDecimal;

impl PrecisionDecimal {
    /// Computes `self` raised to the integer power `n` without rounding.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the exponent of the result is out of range.
    ///  - PrecisionUnsatisfiable: the mantissa of the result would have more than `MAX_PRECISION_DIGITS` digits.
    pub fn powi(&self, n: u32) -> Result<Self, Error> {
        if n == 0 {
            return Ok(PrecisionDecimal::one());
        }

        if self.is_zero() {
            return Ok(PrecisionDecimal::zero());
        }

        let e = (self.exponent() as i64) * (n as i64);
        if e < Exponent::MIN as i64 || e > Exponent::MAX as i64 {
            return Err(Error::Overflow);
        }

        check_digits(self.digits().saturating_mul(n as usize))?;

        let m = num_traits::pow(self.mantissa().clone(), n as usize);

        Ok(PrecisionDecimal::new(m, e as Exponent))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[test]
    fn test_powi() {
        let n = PrecisionDecimal::new(-15, -1);
        assert_eq!(n.powi(0).unwrap(), PrecisionDecimal::one());
        assert_eq!(n.powi(1).unwrap(), n);
        assert_eq!(n.powi(2).unwrap(), PrecisionDecimal::new(225, -2));
        assert_eq!(n.powi(3).unwrap(), PrecisionDecimal::new(-3375, -3));
        assert!(PrecisionDecimal::new(0, -3).powi(7).unwrap().is_zero());

        assert_eq!(PrecisionDecimal::new(1, 1 << 20).powi(1 << 12).unwrap_err(), Error::Overflow);
        assert_eq!(PrecisionDecimal::new(123, 0).powi(1_000_000).unwrap_err(), Error::PrecisionUnsatisfiable);

        for _ in 0..100 {
            let x = PrecisionDecimal::random(20, -10, 10).unwrap();
            let k = random::<u32>() % 10;
            let mut p = PrecisionDecimal::one();
            for _ in 0..k {
                p = p.mul_full_prec(&x).unwrap();
            }
            assert_eq!(x.powi(k).unwrap(), p);
        }
    }
}
