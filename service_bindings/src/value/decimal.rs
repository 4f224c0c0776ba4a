//! Arbitrary-precision decimal numbers.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use thiserror::Error;

/// Largest scale rendered in plain notation; larger scales use an exponent.
const PLAIN_SCALE_LIMIT: i64 = 40;

/// Any non-zero value scaled up by more than this many digits exceeds `i64`.
const I64_DIGITS: u32 = 19;

/// Decimal number `unscaled × 10^-scale` with unbounded digits.
///
/// The representation is exact: parsing and printing never round, and the
/// scale a value was written with is kept, so `13.370` renders as written.
/// Equality compares numeric values.
///
/// # Examples
///
/// ```
/// use service_bindings::Decimal;
///
/// let price: Decimal = "13.370".parse()?;
/// assert_eq!(price.unscaled().to_string(), "13370");
/// assert_eq!(price.scale(), 3);
/// assert_eq!(price.to_string(), "13.370");
/// assert_eq!(price.to_i64_saturating(), 13);
///
/// let wide: Decimal = "0.12345678901234567890123456789012345678901".parse()?;
/// assert_eq!(wide.to_string(), "0.12345678901234567890123456789012345678901");
/// # Ok::<_, service_bindings::ParseDecimalError>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Decimal(BigDecimal);

/// Failure to parse a [`Decimal`] from text.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum ParseDecimalError {
    /// The input contains no digits.
    #[error("decimal literal has no digits")]
    Empty,
    /// The input contains something other than digits, one point and an exponent.
    #[error("invalid character in decimal literal '{0}'")]
    InvalidLiteral(String),
    /// The exponent does not fit the representation.
    #[error("decimal literal '{0}' is out of range")]
    OutOfRange(String),
}

impl Decimal {
    /// Create a decimal from its unscaled value and scale.
    #[must_use]
    pub fn new(unscaled: impl Into<BigInt>, scale: i64) -> Self {
        Self(BigDecimal::new(unscaled.into(), scale))
    }

    /// Returns the unscaled digits.
    #[must_use]
    pub fn unscaled(&self) -> BigInt {
        self.0.as_bigint_and_exponent().0
    }

    /// Returns the power of ten the unscaled value is divided by.
    #[must_use]
    pub fn scale(&self) -> i64 {
        self.0.as_bigint_and_exponent().1
    }

    /// Borrows the underlying [`BigDecimal`].
    #[must_use]
    pub const fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Converts to the nearest `f64`.
    ///
    /// Values below the smallest subnormal become `0.0`; values beyond the
    /// largest finite `f64` become infinite.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let (unscaled, scale) = self.0.as_bigint_and_exponent();
        format!("{unscaled}e{}", -i128::from(scale))
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// Truncates toward zero and clamps to the `i64` range.
    #[must_use]
    pub fn to_i64_saturating(&self) -> i64 {
        let (unscaled, scale) = self.0.as_bigint_and_exponent();
        let saturated = if unscaled.sign() == Sign::Minus {
            i64::MIN
        } else {
            i64::MAX
        };
        let truncated = if scale >= 0 {
            // 10^scale exceeds the magnitude once scale reaches its bit length.
            match u32::try_from(scale) {
                Ok(power) if u64::from(power) < unscaled.bits() => {
                    unscaled / BigInt::from(10).pow(power)
                }
                _ => return 0,
            }
        } else if unscaled.sign() == Sign::NoSign {
            return 0;
        } else {
            match u32::try_from(scale.unsigned_abs()) {
                Ok(power) if power <= I64_DIGITS => unscaled * BigInt::from(10).pow(power),
                _ => return saturated,
            }
        };
        i64::try_from(&truncated).unwrap_or(saturated)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self::new(value, 0)
    }
}

impl From<BigDecimal> for Decimal {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl From<Decimal> for BigDecimal {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (negative, body) = trimmed.strip_prefix('-').map_or_else(
            || (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
            |rest| (true, rest),
        );
        let (mantissa, exponent_text) = body
            .split_once(['e', 'E'])
            .map_or((body, None), |(digits, exponent)| (digits, Some(exponent)));
        let (integral, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if integral.is_empty() && fraction.is_empty() {
            return Err(ParseDecimalError::Empty);
        }
        if !integral
            .chars()
            .chain(fraction.chars())
            .all(|c| c.is_ascii_digit())
        {
            return Err(ParseDecimalError::InvalidLiteral(input.to_owned()));
        }

        let invalid = || ParseDecimalError::InvalidLiteral(input.to_owned());
        let out_of_range = || ParseDecimalError::OutOfRange(input.to_owned());
        let magnitude: BigInt = format!("{integral}{fraction}")
            .parse()
            .map_err(|_| invalid())?;
        let exponent = exponent_text
            .map_or(Ok(0), str::parse::<i64>)
            .map_err(|err| match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
                _ => invalid(),
            })?;
        let scale = i64::try_from(fraction.len())
            .ok()
            .and_then(|fraction_digits| fraction_digits.checked_sub(exponent))
            .ok_or_else(out_of_range)?;

        Ok(Self::new(if negative { -magnitude } else { magnitude }, scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (unscaled, scale) = self.0.as_bigint_and_exponent();
        if scale == 0 {
            return write!(f, "{unscaled}");
        }
        if !(0..=PLAIN_SCALE_LIMIT).contains(&scale) {
            return write!(f, "{unscaled}E{}", -i128::from(scale));
        }

        let digits = unscaled.magnitude().to_string();
        let fraction_len = usize::try_from(scale).map_err(|_| fmt::Error)?;
        let padded = format!("{digits:0>width$}", width = fraction_len + 1);
        let (integral, fraction) = padded.split_at(padded.len() - fraction_len);
        let sign = if unscaled.sign() == Sign::Minus { "-" } else { "" };
        write!(f, "{sign}{integral}.{fraction}")
    }
}
