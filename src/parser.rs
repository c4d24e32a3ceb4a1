//! Parser parses decimal numbers in fixed-point or scientific format.

use core::str::Chars;

use num_bigint::BigInt;

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;

pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    mantissa_digits: String,
    frac_len: usize,
    e: i64,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            mantissa_digits: String::with_capacity(s.len()),
            frac_len: 0,
            e: 0,
        }
    }

    // Returns next character of a string in lower case,
    // or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    #[allow(dead_code)]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the signed mantissa and the exponent.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the exponent is out of range.
    pub fn raw_parts(&self) -> Result<(BigInt, Exponent), Error> {
        // digits were validated by the parser
        let mut m = BigInt::parse_bytes(self.mantissa_digits.as_bytes(), 10)
            .ok_or(Error::InvalidArgument)?;

        if self.sign.is_negative() {
            m = -m;
        }

        let e = self.e - self.frac_len as i64;
        if e < EXPONENT_MIN as i64 || e > EXPONENT_MAX as i64 {
            return Err(Error::Overflow);
        }

        Ok((m, e as Exponent))
    }
}

/// Parse a decimal number of the form `[+-]digits[.digits][e[+-]digits]`.
/// Either the integer or the fractional part may be omitted, but not both.
pub fn parse(s: &str) -> Result<ParserState<'_>, Error> {
    let mut parser_state = ParserState::new(s);
    let ch = parser_state.next_char();

    // sign
    if let Some(c) = ch {
        match c {
            '+' => {
                parser_state.next_char();
            }
            '-' => {
                parser_state.sign = Sign::Neg;
                parser_state.next_char();
            }
            _ => {}
        };
    }

    let int_len = parse_digits(&mut parser_state);

    let mut frac_len = 0;
    if Some('.') == parser_state.cur_char() {
        parser_state.next_char();
        frac_len = parse_digits(&mut parser_state);
    }

    if int_len + frac_len == 0 {
        return Err(Error::InvalidArgument);
    }

    parser_state.frac_len = frac_len;

    if Some('e') == parser_state.cur_char() {
        parser_state.next_char();
        parse_exp(&mut parser_state)?;
    }

    if parser_state.cur_char().is_some() {
        return Err(Error::InvalidArgument);
    }

    Ok(parser_state)
}

fn parse_digits(parser_state: &mut ParserState) -> usize {
    let mut ch = parser_state.cur_char();
    let mut len = 0;

    while let Some(c) = ch {
        if c.is_ascii_digit() {
            parser_state.mantissa_digits.push(c);
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    len
}

fn parse_exp(parser_state: &mut ParserState) -> Result<(), Error> {
    let mut neg = false;
    let mut ch = parser_state.cur_char();
    if let Some(c) = ch {
        match c {
            '+' => {
                ch = parser_state.next_char();
            }
            '-' => {
                neg = true;
                ch = parser_state.next_char();
            }
            _ => {}
        };
    }

    let mut len = 0;
    while let Some(c) = ch {
        if let Some(digit) = c.to_digit(10) {
            parser_state.e = parser_state.e.saturating_mul(10).saturating_add(digit as i64);
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    if len == 0 {
        return Err(Error::InvalidArgument);
    }

    if neg {
        parser_state.e = -parser_state.e;
    }

    Ok(())
}
