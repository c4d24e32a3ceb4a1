//! Precision-decimal is a library of arbitrary precision decimal numbers and series evaluators of π.
//!
//! ## Introduction
//!
//! **Numbers**
//!
//! The number is defined by the data type `PrecisionDecimal`: an arbitrary size integer mantissa and a decimal exponent,
//! the value being `mantissa × 10^exponent`. The representation is not normalized, so the number keeps
//! the digits it was created or computed with. Comparison and hashing use the value.
//!
//! Addition, subtraction, and multiplication are exact. Their rounded variants, division, and square root take
//! the minimum exponent of the result (or a number of fractional digits) and a rounding mode as arguments.
//! The last digit of the result is correctly rounded: the result is equal to the exact result rounded
//! using the rounding mode.
//!
//! The minimum exponent is normally passed explicitly, or through a `Context`.
//! The process-wide default minimum exponent is read only by `Context::default()` and by the `/` operator.
//!
//! **Error handling**
//!
//! All fallible operations return `Result` with `Error` describing the failure.
//! Operators `+`, `-`, `*`, `/` return `Result<PrecisionDecimal, Error>` as well.
//!
//! **Series**
//!
//! The module `series` contains the Gauss–Legendre, Leibniz, Wallis, Machin, Ramanujan, and Chudnovsky
//! evaluators. They are generic over the number type, and can run on `PrecisionDecimal`, `f64`, or `rust_decimal::Decimal`.
//!
//! **Constants**
//!
//! The value of π is computed lazily by binary splitting and then cached in the constants cache `Consts`.
//!
//! ## Examples
//!
//! ```
//! use precision_decimal::Consts;
//! use precision_decimal::RoundingMode;
//! use precision_decimal::series::Algorithm;
//!
//! // Compute pi with 100 fractional digits rounded to even using Machin's formula.
//! let pi = Algorithm::Machin.pi(100, RoundingMode::ToEven).expect("Pi computed");
//!
//! // Use library's constant for verifying the result.
//! let mut cc = Consts::new().expect("Constants cache initialized");
//! let pi_lib = cc.pi(100, RoundingMode::ToEven).expect("Pi computed");
//!
//! assert_eq!(pi, pi_lib);
//!
//! println!("{}", pi);
//!
//! // output: 3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170680
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::module_inception)]

mod common;
mod conv;
pub mod ctx;
mod defs;
mod ext;
mod num;
mod ops;
mod parser;
pub mod series;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::ctx::Context;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;
pub use crate::num::PrecisionDecimal;
pub use crate::ops::consts::Consts;

pub use crate::defs::DEFAULT_MIN_EXPONENT;
pub use crate::defs::DEFAULT_RM;
pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;
pub use crate::defs::MAX_PRECISION_DIGITS;
