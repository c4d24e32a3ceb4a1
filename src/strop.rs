//! PrecisionDecimal formatting and parsing.

use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::LowerExp;
use core::str::FromStr;

use num_traits::Signed;

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::DEFAULT_RM;
use crate::defs::MAX_PRECISION_DIGITS;
use crate::num::PrecisionDecimal;

impl PrecisionDecimal {
    /// Parses the number from the string `s` of the form `[+-]digits[.digits][e[+-]digits]`.
    /// The exponent of the result is the exponent written in `s` minus the number of fractional digits,
    /// so `"1.50"` is parsed as `150 × 10^-2`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: failed to parse input.
    ///  - Overflow: the resulting exponent is out of range.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let ps = crate::parser::parse(s)?;
        let (m, e) = ps.raw_parts()?;
        Ok(PrecisionDecimal::new(m, e))
    }

    // Digits of the absolute value in fixed-point notation with at least `min_frac` fractional digits.
    // Falls back to scientific notation when more than `MAX_PRECISION_DIGITS` zeroes would be written.
    fn fixed_body(&self, min_frac: usize) -> String {
        let e = self.exponent();

        let zeroes = if e < 0 || self.is_zero() { e.min(0) } else { e };
        if zeroes.unsigned_abs() as usize > MAX_PRECISION_DIGITS {
            return self.sci_body();
        }

        let digits = self.mantissa().abs().to_string();

        let mut s = String::with_capacity(digits.len() + min_frac + 2);
        let frac_len;

        if e >= 0 {
            s.push_str(&digits);
            if !self.is_zero() {
                s.extend(core::iter::repeat('0').take(e as usize));
            }
            frac_len = 0;
        } else {
            frac_len = e.unsigned_abs() as usize;
            if digits.len() <= frac_len {
                s.push_str("0.");
                s.extend(core::iter::repeat('0').take(frac_len - digits.len()));
                s.push_str(&digits);
            } else {
                let (int_part, frac_part) = digits.split_at(digits.len() - frac_len);
                s.push_str(int_part);
                s.push('.');
                s.push_str(frac_part);
            }
        }

        if min_frac > frac_len {
            if frac_len == 0 {
                s.push('.');
            }
            s.extend(core::iter::repeat('0').take(min_frac - frac_len));
        }

        s
    }

    // Digits of the absolute value in scientific notation.
    fn sci_body(&self) -> String {
        if self.is_zero() {
            return String::from("0e0");
        }

        let digits = self.mantissa().abs().to_string();
        let adj = digits.len() as i64 - 1 + self.exponent() as i64;

        let mut s = String::with_capacity(digits.len() + 24);
        let (lead, rest) = digits.split_at(1);
        s.push_str(lead);

        let rest = rest.trim_end_matches('0');
        if !rest.is_empty() {
            s.push('.');
            s.push_str(rest);
        }

        s.push('e');
        s.push_str(&adj.to_string());
        s
    }

    /// Formats the number in fixed-point notation: every digit implied by the mantissa and the exponent
    /// is printed, the sign is printed only for negative numbers, and the decimal point is printed only
    /// if the exponent is negative.
    /// Numbers whose exponent magnitude is greater than `MAX_PRECISION_DIGITS` are printed
    /// in scientific notation instead.
    pub fn format_fixed(&self) -> String {
        let body = self.fixed_body(0);
        if self.is_negative() {
            let mut s = String::with_capacity(body.len() + 1);
            s.push('-');
            s.push_str(&body);
            s
        } else {
            body
        }
    }

    /// Formats the number in scientific notation, e.g. `-1.25e-3`.
    /// Trailing zeroes of the mantissa are not printed.
    pub fn format_sci(&self) -> String {
        let body = self.sci_body();
        if self.is_negative() {
            let mut s = String::with_capacity(body.len() + 1);
            s.push('-');
            s.push_str(&body);
            s
        } else {
            body
        }
    }
}

impl Display for PrecisionDecimal {
    /// Fixed-point notation. With a precision, e.g. `{:.5}`, the number is rounded
    /// using the default rounding mode and printed with exactly that many fractional digits.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let body = match f.precision() {
            Some(p) => {
                let p = p.min(Exponent::MAX as usize);
                let n = self.round_to_exponent(-(p as Exponent), DEFAULT_RM);
                n.fixed_body(p)
            }
            None => self.fixed_body(0),
        };

        f.pad_integral(!self.is_negative(), "", &body)
    }
}

impl LowerExp for PrecisionDecimal {
    /// Scientific notation. With a precision, e.g. `{:.3e}`, the mantissa is rounded
    /// to that many digits after the leading digit using the default rounding mode.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let body = match f.precision() {
            Some(p) if !self.is_zero() => {
                let digits = self.digits();
                if digits > p + 1 {
                    let shift = (digits - p - 1) as i64;
                    let e = (self.exponent() as i64 + shift).min(Exponent::MAX as i64) as Exponent;
                    self.round_to_exponent(e, DEFAULT_RM).sci_body()
                } else {
                    self.sci_body()
                }
            }
            _ => self.sci_body(),
        };

        f.pad_integral(!self.is_negative(), "", &body)
    }
}

impl FromStr for PrecisionDecimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrecisionDecimal::parse(s)
    }
}
