//! Series evaluators of π.
//!
//! Every evaluator is generic over [`SeriesNumber`] and takes a [`Termination`] rule and a context.
//! The evaluators return the quantity their series converges to:
//!
//! | Evaluator                 | Result |
//! |:--------------------------|-------:|
//! | [`gauss_legendre`]        |      π |
//! | [`leibniz`]               |    π/4 |
//! | [`wallis`]                |    π/2 |
//! | [`machin`]                |    π/4 |
//! | [`ramanujan`]             |    1/π |
//! | [`chudnovsky`]            |    1/π |
//!
//! [`Algorithm::pi`] runs an evaluator on [`PrecisionDecimal`] and returns π rounded to the requested number of digits.

mod chudnovsky;
mod gauss_legendre;
mod leibniz;
mod machin;
mod number;
mod ramanujan;
mod wallis;

use core::fmt::Debug;

pub use crate::series::chudnovsky::chudnovsky;
pub use crate::series::gauss_legendre::gauss_legendre;
pub use crate::series::leibniz::leibniz;
pub use crate::series::machin::machin;
pub use crate::series::number::SeriesNumber;
pub use crate::series::ramanujan::ramanujan;
pub use crate::series::wallis::wallis;

use crate::common::util::check_digits;
use crate::common::util::log2_ceil;
use crate::ctx::Context;
use crate::ctx::Contextable;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::PrecisionDecimal;

/// Guard digits every evaluation carries above the requested precision.
const BASE_GUARD_DIGITS: usize = 10;

/// The largest number of digits slowly converging series are evaluated for.
pub const SLOW_SERIES_MAX_DIGITS: usize = 4;

/// Defines when a series evaluation stops.
#[derive(Debug, Clone, PartialEq)]
pub enum Termination<T> {
    /// Stop after the given number of terms (rounds for Gauss–Legendre).
    Terms(usize),

    /// Stop after the first term whose magnitude is less than `tolerance`,
    /// or after `max_terms` terms, whichever comes first.
    Tolerance {
        /// Term magnitude below which the evaluation stops.
        tolerance: T,

        /// Safety cap on the number of terms.
        max_terms: usize,
    },
}

impl<T: SeriesNumber> Termination<T> {
    fn validate(&self) -> Result<(), Error> {
        match self {
            Termination::Terms(_) => Ok(()),
            Termination::Tolerance { tolerance, .. } => {
                if *tolerance < T::from_i64(0) {
                    Err(Error::InvalidArgument)
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Incremental state of a series evaluation.
pub(crate) trait Series<T: SeriesNumber>: Sized {
    /// Name used in logs.
    const NAME: &'static str;

    /// Creates the initial state.
    fn init<C: Contextable>(ctx: &C) -> Result<Self, Error>;

    /// Accumulates term `k` and returns its magnitude.
    fn step<C: Contextable>(&mut self, k: usize, ctx: &C) -> Result<T, Error>;

    /// Computes the value from the accumulated state.
    fn finalize<C: Contextable>(self, ctx: &C) -> Result<T, Error>;
}

enum State<S> {
    Init,
    Accumulate { series: S, k: usize },
    Finalize { series: S, k: usize },
}

/// Drives a series evaluation. Termination checks happen after a full term is accumulated.
pub(crate) fn run<T, S, C>(termination: &Termination<T>, ctx: &C) -> Result<T, Error>
where
    T: SeriesNumber,
    S: Series<T>,
    C: Contextable,
{
    termination.validate()?;

    tracing::debug!(series = S::NAME, ?termination, min_exponent = ctx.min_exponent(), "evaluation started");

    let mut state = State::Init;

    loop {
        state = match state {
            State::Init => State::Accumulate {
                series: S::init(ctx)?,
                k: 0,
            },
            State::Accumulate { mut series, k } => match termination {
                Termination::Terms(n) if k >= *n => State::Finalize { series, k },
                Termination::Tolerance { max_terms, .. } if k >= *max_terms => {
                    tracing::warn!(series = S::NAME, max_terms = *max_terms, "tolerance not reached");
                    State::Finalize { series, k }
                }
                _ => {
                    let term = series.step(k, ctx)?;
                    match termination {
                        Termination::Tolerance { tolerance, .. } if term.abs() < *tolerance => {
                            State::Finalize { series, k: k + 1 }
                        }
                        _ => State::Accumulate { series, k: k + 1 },
                    }
                }
            },
            State::Finalize { series, k } => {
                let val = series.finalize(ctx)?;
                tracing::debug!(series = S::NAME, terms = k, ?val, "evaluation finished");
                return Ok(val);
            }
        }
    }
}

/// π evaluation algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Gauss–Legendre arithmetic-geometric mean iteration.
    GaussLegendre,

    /// Leibniz series for π/4.
    Leibniz,

    /// Wallis product for π/2.
    Wallis,

    /// Machin's arctangent formula.
    Machin,

    /// Ramanujan's series for 1/π.
    Ramanujan,

    /// Chudnovsky series for 1/π.
    Chudnovsky,
}

impl Algorithm {
    /// All algorithms.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::GaussLegendre,
        Algorithm::Leibniz,
        Algorithm::Wallis,
        Algorithm::Machin,
        Algorithm::Ramanujan,
        Algorithm::Chudnovsky,
    ];

    /// Returns the name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::GaussLegendre => "gauss-legendre",
            Algorithm::Leibniz => "leibniz",
            Algorithm::Wallis => "wallis",
            Algorithm::Machin => "machin",
            Algorithm::Ramanujan => "ramanujan",
            Algorithm::Chudnovsky => "chudnovsky",
        }
    }

    /// Returns the number of terms (rounds for Gauss–Legendre) needed for `digits` correct digits of π.
    ///
    /// ## Errors
    ///
    ///  - PrecisionUnsatisfiable: `digits` is greater than `MAX_PRECISION_DIGITS`, or greater
    ///    than `SLOW_SERIES_MAX_DIGITS` for Leibniz and Wallis.
    pub fn terms_for_digits(&self, digits: usize) -> Result<usize, Error> {
        check_digits(digits)?;

        let d = digits + BASE_GUARD_DIGITS;

        let terms = match self {
            // the number of correct digits roughly doubles each round
            Algorithm::GaussLegendre => log2_ceil(d / 3 + 1) + 1,
            Algorithm::Leibniz | Algorithm::Wallis => {
                if digits > SLOW_SERIES_MAX_DIGITS {
                    return Err(Error::PrecisionUnsatisfiable);
                }
                // the error is close to 1/terms
                10usize.pow(digits as u32 + 2)
            }
            // log10(25) digits per term
            Algorithm::Machin => d * 5 / 7 + 2,
            Algorithm::Ramanujan => d / 7 + 2,
            Algorithm::Chudnovsky => d / 14 + 2,
        };

        Ok(terms)
    }

    // Extra digits covering the rounding errors accumulated over `terms` terms.
    fn guard_digits(&self, terms: usize) -> usize {
        match self {
            Algorithm::Leibniz | Algorithm::Wallis => {
                let mut g = BASE_GUARD_DIGITS;
                let mut n = terms;
                while n > 0 {
                    g += 1;
                    n /= 10;
                }
                g
            }
            _ => BASE_GUARD_DIGITS,
        }
    }

    /// Computes π with `digits` fractional digits rounded using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - PrecisionUnsatisfiable: `digits` is greater than `MAX_PRECISION_DIGITS`, or greater
    ///    than `SLOW_SERIES_MAX_DIGITS` for Leibniz and Wallis.
    pub fn pi(&self, digits: usize, rm: RoundingMode) -> Result<PrecisionDecimal, Error> {
        let terms = self.terms_for_digits(digits)?;
        let guard = self.guard_digits(terms);

        let ctx = Context::with_digits(digits, RoundingMode::ToEven)?.with_guard_digits(guard)?;
        let termination: Termination<PrecisionDecimal> = Termination::Terms(terms);

        tracing::debug!(algorithm = self.name(), digits, terms, guard, "computing pi");

        let val = match self {
            Algorithm::GaussLegendre => gauss_legendre(&termination, &ctx)?,
            Algorithm::Leibniz => leibniz(&termination, &ctx)?.mul_full_prec(&PrecisionDecimal::from(4u8))?,
            Algorithm::Wallis => wallis(&termination, &ctx)?.mul_full_prec(&PrecisionDecimal::from(2u8))?,
            Algorithm::Machin => machin(&termination, &ctx)?.mul_full_prec(&PrecisionDecimal::from(4u8))?,
            Algorithm::Ramanujan => {
                ramanujan(&termination, &ctx)?.reciprocal(ctx.min_exponent(), ctx.rounding_mode())?
            }
            Algorithm::Chudnovsky => {
                chudnovsky(&termination, &ctx)?.reciprocal(ctx.min_exponent(), ctx.rounding_mode())?
            }
        };

        val.round(digits, rm)
    }
}
