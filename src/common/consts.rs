//! Static constants.

use lazy_static::lazy_static;
use num_bigint::BigInt;

/// Number of cached powers of ten.
pub(crate) const TEN_POWERS_CACHED: usize = 64;

lazy_static! {

    /// 10^0, 10^1, ..., 10^63
    pub(crate) static ref TEN_POWERS: Vec<BigInt> = {
        let mut powers = Vec::with_capacity(TEN_POWERS_CACHED);
        let mut p = BigInt::from(1u8);
        for _ in 0..TEN_POWERS_CACHED {
            powers.push(p.clone());
            p *= 10u8;
        }
        powers
    };

    /// 10
    pub(crate) static ref TEN: BigInt = BigInt::from(10u8);

    /// Ramanujan series: constant part of the numerator polynomial.
    pub(crate) static ref C1103: BigInt = BigInt::from(1103u32);

    /// Ramanujan series: linear coefficient of the numerator polynomial.
    pub(crate) static ref C26390: BigInt = BigInt::from(26390u32);

    /// Ramanujan series: 396^4.
    pub(crate) static ref C396_POW4: BigInt = BigInt::from(396u32).pow(4);

    /// Chudnovsky series: constant part of the numerator polynomial.
    pub(crate) static ref C13591409: BigInt = BigInt::from(13591409u32);

    /// Chudnovsky series: linear coefficient of the numerator polynomial.
    pub(crate) static ref C545140134: BigInt = BigInt::from(545140134u32);

    /// Chudnovsky series: 640320^3.
    pub(crate) static ref C640320_POW3: BigInt = BigInt::from(640320u32).pow(3);

    /// Chudnovsky binary splitting: 640320^3 / 24.
    pub(crate) static ref C10939058860032000: BigInt = BigInt::from(10939058860032000u64);

    /// Chudnovsky binary splitting: 426880 * 10005.
    pub(crate) static ref C4270934400: BigInt = BigInt::from(4270934400u64);
}
