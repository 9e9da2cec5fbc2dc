use crate::error::PaymentError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Largest number of digits a `Decimal` holds after the decimal point.
const MAX_SCALE: i64 = 28;
/// Largest number of digits a `Decimal` holds before the decimal point.
const MAX_INTEGER_DIGITS: i64 = 29;

/// A payment amount as entered at the prompt.
///
/// No sign or range rules are applied; the simulated gateways accept whatever
/// was typed as long as it reads as a number and fits a `Decimal` exactly.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = PaymentError;

    /// Accepts plain decimals (`19.99`, `-3`, `.5`, `1_000`) and scientific
    /// notation (`1e3`, `0.1e-3`), ignoring surrounding whitespace.
    ///
    /// Text that is not a number is `InvalidAmount`. A number that a
    /// `Decimal` cannot hold without rounding (too large, or more than 28
    /// decimal places) is `AmountOutOfRange`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal =
            NumericLiteral::parse(s.trim()).ok_or_else(|| PaymentError::InvalidAmount {
                input: s.to_string(),
            })?;

        literal
            .to_decimal()
            .map(Self)
            .ok_or_else(|| PaymentError::AmountOutOfRange {
                input: s.to_string(),
            })
    }
}

/// Renders like a float literal: trailing zeros dropped, whole amounts keep a
/// single `.0` (`5.00` -> `5.0`), and values below `1e-4` or from `1e16` up
/// switch to exponent form (`1e+16`, `1.5e-05`). The sign of zero is kept.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_sign_negative() {
            f.write_str("-")?;
        }

        let digits = self.0.mantissa().unsigned_abs().to_string();
        let significant = digits.trim_end_matches('0');
        if significant.is_empty() {
            return f.write_str("0.0");
        }

        // Power of ten of the leading digit
        let exponent = digits.len() as i64 - 1 - i64::from(self.0.scale());

        if !(-4..16).contains(&exponent) {
            let (lead, rest) = significant.split_at(1);
            f.write_str(lead)?;
            if !rest.is_empty() {
                write!(f, ".{rest}")?;
            }
            let sign = if exponent < 0 { '-' } else { '+' };
            return write!(f, "e{sign}{:02}", exponent.abs());
        }

        if exponent < 0 {
            let zeros = "0".repeat((-exponent - 1) as usize);
            return write!(f, "0.{zeros}{significant}");
        }

        let integer_len = (exponent + 1) as usize;
        if significant.len() <= integer_len {
            let zeros = "0".repeat(integer_len - significant.len());
            write!(f, "{significant}{zeros}.0")
        } else {
            let (integer, fraction) = significant.split_at(integer_len);
            write!(f, "{integer}.{fraction}")
        }
    }
}

/// A syntactically valid number, split into its digits and the position of
/// the decimal point within them.
#[derive(Debug, PartialEq)]
struct NumericLiteral {
    negative: bool,
    digits: String,
    point: i64,
}

impl NumericLiteral {
    /// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`, where a
    /// single `_` may separate two digits.
    fn parse(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        let mut pos = 0;

        let negative = take_sign(bytes, &mut pos);
        let integer = take_digits(bytes, &mut pos);
        let mut fraction = String::new();
        if bytes.get(pos) == Some(&b'.') {
            pos += 1;
            fraction = take_digits(bytes, &mut pos);
        }
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        let mut exponent: i64 = 0;
        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            pos += 1;
            let exponent_negative = take_sign(bytes, &mut pos);
            let exponent_digits = take_digits(bytes, &mut pos);
            if exponent_digits.is_empty() {
                return None;
            }
            // Saturate: anything this large is out of range either way
            let magnitude = exponent_digits.parse::<i64>().unwrap_or(i64::MAX);
            exponent = if exponent_negative { -magnitude } else { magnitude };
        }

        if pos != bytes.len() {
            return None;
        }

        Some(Self {
            negative,
            point: (integer.len() as i64).saturating_add(exponent),
            digits: integer + &fraction,
        })
    }

    /// The exact `Decimal` for this literal, or `None` if it would need
    /// rounding to fit.
    fn to_decimal(&self) -> Option<Decimal> {
        let trimmed = self.digits.trim_start_matches('0');
        let point = self
            .point
            .saturating_sub((self.digits.len() - trimmed.len()) as i64);
        let significant = trimmed.trim_end_matches('0');

        if significant.is_empty() {
            let mut zero = Decimal::ZERO;
            zero.set_sign_negative(self.negative);
            return Some(zero);
        }

        let len = significant.len() as i64;
        if point > MAX_INTEGER_DIGITS || len - point > MAX_SCALE {
            return None;
        }

        let plain = if point <= 0 {
            format!("0.{}{significant}", "0".repeat((-point) as usize))
        } else if point >= len {
            format!("{significant}{}", "0".repeat((point - len) as usize))
        } else {
            let (integer, fraction) = significant.split_at(point as usize);
            format!("{integer}.{fraction}")
        };

        let value = Decimal::from_str_exact(&plain).ok()?;
        Some(if self.negative { -value } else { value })
    }
}

fn take_sign(bytes: &[u8], pos: &mut usize) -> bool {
    match bytes.get(*pos) {
        Some(b'-') => {
            *pos += 1;
            true
        }
        Some(b'+') => {
            *pos += 1;
            false
        }
        _ => false,
    }
}

fn take_digits(bytes: &[u8], pos: &mut usize) -> String {
    let mut digits = String::new();
    while let Some(&byte) = bytes.get(*pos) {
        if byte.is_ascii_digit() {
            digits.push(char::from(byte));
        } else if byte != b'_'
            || digits.is_empty()
            || !bytes.get(*pos + 1).is_some_and(u8::is_ascii_digit)
        {
            break;
        }
        *pos += 1;
    }
    digits
}
