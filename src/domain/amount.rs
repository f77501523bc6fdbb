use std::fmt;
use std::ops::{Add, Sub};

use super::error::DomainError;

/// Trait for monetary amounts carrying exactly four fractional decimal digits
pub trait AmountType:
    Copy + Ord + Add<Output = Self> + Sub<Output = Self> + Default + Send + Sync + fmt::Debug
{
    /// Convert from a floating value, rounding to 4 decimal places
    /// (round half away from zero)
    fn from_f64(value: f64) -> Result<Self, DomainError>;

    /// Convert back to a floating value
    fn to_f64(&self) -> f64;

    /// Parse from a decimal string (e.g. "1000.5", at most 4 fractional digits)
    fn from_decimal_str(s: &str) -> Result<Self, DomainError>;

    /// Format as a decimal string with 4 fractional digits
    fn to_decimal_string(&self) -> String;

    /// Checked addition, None on overflow
    fn checked_add(&self, other: Self) -> Option<Self>;

    /// Checked subtraction, None on underflow
    fn checked_sub(&self, other: Self) -> Option<Self>;

    /// Zero value
    fn zero() -> Self;

    /// Strictly greater than zero
    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }
}

/// Fixed-point amount stored as an i64 scaled by 10,000.
///
/// Every representable value is an exact multiple of 0.0001, so the
/// round-then-combine-then-round rule for balance mutations holds by
/// construction: the only lossy step is `from_f64`, which performs the
/// `round(x * 10000) / 10000` rounding once, and scaled-integer arithmetic
/// keeps every result on the 4-decimal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct FixedPoint(i64);

impl FixedPoint {
    const SCALE: i64 = 10_000;

    /// Create from a raw scaled value (1 unit = 0.0001)
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw scaled value
    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl AmountType for FixedPoint {
    fn from_f64(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::InvalidAmount);
        }

        let scaled = (value * Self::SCALE as f64).round();
        if scaled < i64::MIN as f64 || scaled > i64::MAX as f64 {
            return Err(DomainError::Overflow);
        }

        Ok(Self(scaled as i64))
    }

    fn to_f64(&self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();

        let (is_negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let (integer_part, decimal_part) = match s.split_once('.') {
            None => (s, ""),
            Some((int, dec)) if !dec.contains('.') => (int, dec),
            Some(_) => return Err(DomainError::InvalidAmount),
        };

        if decimal_part.len() > 4 {
            return Err(DomainError::InvalidAmount);
        }

        let integer: i64 = integer_part
            .parse()
            .map_err(|_| DomainError::InvalidAmount)?;

        // Pad the fractional digits out to the full scale
        let decimal_str = format!("{:0<4}", decimal_part);
        let decimal: i64 = decimal_str
            .parse()
            .map_err(|_| DomainError::InvalidAmount)?;

        let scaled = integer
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(decimal))
            .ok_or(DomainError::Overflow)?;

        Ok(Self(if is_negative { -scaled } else { scaled }))
    }

    fn to_decimal_string(&self) -> String {
        let abs_value = self.0.abs();
        let integer_part = abs_value / Self::SCALE;
        let decimal_part = abs_value % Self::SCALE;

        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:04}", sign, integer_part, decimal_part)
    }

    fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    fn checked_sub(&self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    fn zero() -> Self {
        Self(0)
    }
}

impl Add for FixedPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for FixedPoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}
