//! Reference values shared by the integration tests.

use precision_decimal::Context;
use precision_decimal::PrecisionDecimal;
use precision_decimal::RoundingMode;

/// π with 100 fractional digits rounded to even.
pub const PI_100: &str = "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170680";

/// π with 110 fractional digits truncated.
pub const PI_110: &str =
    "3.14159265358979323846264338327950288419716939937510582097494459230781640628620899862803482534211706798214808651";

/// Context retaining `digits` fractional digits.
pub fn eval_ctx(digits: usize) -> Context {
    Context::with_digits(digits, RoundingMode::ToEven).unwrap()
}

/// Asserts that `v` rounded to 100 digits is the reference value.
pub fn assert_pi_100(v: &PrecisionDecimal, name: &str) {
    let r = v.round(100, RoundingMode::ToEven).unwrap();
    assert_eq!(r.to_string(), PI_100, "{}", name);
}
