//! Money type for representing currency amounts
//!
//! Amounts are whole units of the smallest currency unit (Rupiah has no
//! minor unit in practice), stored as i64. Entry amounts are never negative;
//! the signed representation exists for balances.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Default currency symbol used by `Display`
pub const DEFAULT_SYMBOL: &str = "Rp";

/// Default digit group separator used by `Display`
pub const DEFAULT_SEPARATOR: &str = ".";

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use cashio::models::Money;
    /// let amount = Money::from_units(150_000);
    /// assert_eq!(amount.units(), 150_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Round a user-supplied amount, accepting it only if the result is positive
    ///
    /// Returns `None` for NaN, infinities, zero, negatives and anything that
    /// rounds down to zero.
    pub fn positive_rounded(value: f64) -> Option<Self> {
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        let rounded = Self::clamp_round(value);
        rounded.is_positive().then_some(rounded)
    }

    /// Coerce a loosely-typed number into a non-negative amount
    ///
    /// Non-finite and negative values become zero.
    pub fn coerce(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::zero();
        }
        Self::clamp_round(value)
    }

    fn clamp_round(value: f64) -> Self {
        let rounded = value.round();
        if rounded >= i64::MAX as f64 {
            Self(i64::MAX)
        } else {
            Self(rounded as i64)
        }
    }

    /// Format with a currency symbol and digit group separator
    ///
    /// # Examples
    /// ```
    /// use cashio::models::Money;
    /// assert_eq!(Money::from_units(1_500_000).format_with("Rp", "."), "Rp 1.500.000");
    /// assert_eq!(Money::from_units(-2500).format_with("Rp", ","), "-Rp 2,500");
    /// ```
    pub fn format_with(&self, symbol: &str, separator: &str) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(separator);
            }
            grouped.push(ch);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        if symbol.is_empty() {
            format!("{}{}", sign, grouped)
        } else {
            format!("{}{} {}", sign, symbol, grouped)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(DEFAULT_SYMBOL, DEFAULT_SEPARATOR))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(150000)), "Rp 150.000");
        assert_eq!(format!("{}", Money::from_units(0)), "Rp 0");
        assert_eq!(format!("{}", Money::from_units(999)), "Rp 999");
        assert_eq!(format!("{}", Money::from_units(-1000)), "-Rp 1.000");
    }

    #[test]
    fn test_format_without_symbol() {
        assert_eq!(Money::from_units(1234567).format_with("", ","), "1,234,567");
    }

    #[test]
    fn test_positive_rounded() {
        assert_eq!(Money::positive_rounded(100.0), Some(Money::from_units(100)));
        assert_eq!(Money::positive_rounded(1500.5), Some(Money::from_units(1501)));
        assert_eq!(Money::positive_rounded(0.0), None);
        assert_eq!(Money::positive_rounded(-5.0), None);
        assert_eq!(Money::positive_rounded(0.3), None);
        assert_eq!(Money::positive_rounded(f64::NAN), None);
        assert_eq!(Money::positive_rounded(f64::INFINITY), None);
    }

    #[test]
    fn test_coerce() {
        assert_eq!(Money::coerce(150000.0), Money::from_units(150000));
        assert_eq!(Money::coerce(12.4), Money::from_units(12));
        assert_eq!(Money::coerce(-3.0), Money::zero());
        assert_eq!(Money::coerce(f64::NAN), Money::zero());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1000);
        let b = Money::from_units(1500);

        assert_eq!((a + b).units(), 2500);
        assert_eq!((a - b).units(), -500);
        assert_eq!((-a).units(), -1000);
        assert_eq!(vec![a, b].into_iter().sum::<Money>().units(), 2500);
    }

    #[test]
    fn test_sum_saturates() {
        let total: Money = vec![Money::from_units(i64::MAX), Money::from_units(1)]
            .into_iter()
            .sum();
        assert_eq!(total.units(), i64::MAX);
    }
}
