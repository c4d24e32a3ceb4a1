//! Standard library traits for `PrecisionDecimal`.
//!
//! Arithmetic operators return `Result<PrecisionDecimal, Error>`. `+`, `-` and `*` are exact,
//! while `/` rounds using the process-wide default context (see [`Context::default`]).

use core::cmp::Ordering;
use core::hash::Hash;
use core::hash::Hasher;
use core::ops::Add;
use core::ops::Div;
use core::ops::Mul;
use core::ops::Neg;
use core::ops::Sub;

use num_bigint::Sign as BigSign;

use crate::ctx::Context;
use crate::defs::Error;
use crate::num::PrecisionDecimal;

fn div_default_ctx(d1: &PrecisionDecimal, d2: &PrecisionDecimal) -> Result<PrecisionDecimal, Error> {
    let ctx = Context::default();
    d1.div(d2, ctx.min_exponent(), ctx.rounding_mode())
}

macro_rules! impl_arith_op {
    ($op_trait:ident, $op_fn:ident, $impl_fn:path) => {
        impl $op_trait<&PrecisionDecimal> for &PrecisionDecimal {
            type Output = Result<PrecisionDecimal, Error>;
            fn $op_fn(self, rhs: &PrecisionDecimal) -> Self::Output {
                $impl_fn(self, rhs)
            }
        }

        impl $op_trait<PrecisionDecimal> for &PrecisionDecimal {
            type Output = Result<PrecisionDecimal, Error>;
            fn $op_fn(self, rhs: PrecisionDecimal) -> Self::Output {
                $impl_fn(self, &rhs)
            }
        }

        impl $op_trait<&PrecisionDecimal> for PrecisionDecimal {
            type Output = Result<PrecisionDecimal, Error>;
            fn $op_fn(self, rhs: &PrecisionDecimal) -> Self::Output {
                $impl_fn(&self, rhs)
            }
        }

        impl $op_trait<PrecisionDecimal> for PrecisionDecimal {
            type Output = Result<PrecisionDecimal, Error>;
            fn $op_fn(self, rhs: PrecisionDecimal) -> Self::Output {
                $impl_fn(&self, &rhs)
            }
        }
    };
}

impl_arith_op!(Add, add, PrecisionDecimal::add_full_prec);
impl_arith_op!(Sub, sub, PrecisionDecimal::sub_full_prec);
impl_arith_op!(Mul, mul, PrecisionDecimal::mul_full_prec);
impl_arith_op!(Div, div, div_default_ctx);

impl Neg for PrecisionDecimal {
    type Output = PrecisionDecimal;
    fn neg(self) -> Self::Output {
        PrecisionDecimal::neg(&self)
    }
}

impl Neg for &PrecisionDecimal {
    type Output = PrecisionDecimal;
    fn neg(self) -> Self::Output {
        PrecisionDecimal::neg(self)
    }
}

//
// ordering traits
//

impl Ord for PrecisionDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let s1 = self.mantissa().sign();
        let s2 = other.mantissa().sign();

        match s1.cmp(&s2) {
            Ordering::Equal => match s1 {
                BigSign::Plus => self.abs_cmp(other),
                BigSign::Minus => self.abs_cmp(other).reverse(),
                BigSign::NoSign => Ordering::Equal,
            },
            ord => ord,
        }
    }
}

impl PartialOrd for PrecisionDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PrecisionDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PrecisionDecimal {}

impl Hash for PrecisionDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let n = self.normalize();
        n.mantissa().hash(state);
        n.exponent().hash(state);
    }
}

impl Default for PrecisionDecimal {
    fn default() -> Self {
        PrecisionDecimal::zero()
    }
}
