mod pi;

use crate::num::PrecisionDecimal;
use crate::ops::consts::pi::PiCache;
use crate::Error;
use crate::RoundingMode;

/// Constants cache contains arbitrary-precision mathematical constants.
#[derive(Debug)]
pub struct Consts {
    pi: PiCache,
}

/// In an ideal situation, the `Consts` structure is initialized with `Consts::new` only once,
/// and then used where needed.
impl Consts {
    /// Initializes the constants cache.
    ///
    /// ## Errors
    ///
    ///  - PrecisionUnsatisfiable: the initial value could not be computed.
    pub fn new() -> Result<Self, Error> {
        Ok(Consts { pi: PiCache::new()? })
    }

    /// Returns the value of the pi number with `digits` fractional digits using rounding mode `rm`.
    /// The value is computed once for the largest requested precision and then reused.
    ///
    /// ## Errors
    ///
    ///  - PrecisionUnsatisfiable: `digits` is greater than `MAX_PRECISION_DIGITS`.
    pub fn pi(&mut self, digits: usize, rm: RoundingMode) -> Result<PrecisionDecimal, Error> {
        self.pi.for_prec(digits, rm)
    }
}
