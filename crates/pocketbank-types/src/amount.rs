//! Monetary amounts in integer minor units
//!
//! PocketBank stores balances as cents in an `i64` so that the two-decimal
//! rule holds structurally and arithmetic never drifts the way binary
//! floating point does. Decimal-capable inputs cross the API boundary as
//! `rust_decimal::Decimal` and are converted exactly.

use crate::{PocketBankError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places carried by a minor-unit amount
pub const AMOUNT_DECIMALS: u32 = 2;

/// Minor units per whole currency unit
pub const MINOR_UNITS_PER_UNIT: i64 = 100;

/// Check whether a decimal value is a usable monetary amount
///
/// Valid amounts are strictly positive and carry at most 2 digits after the
/// decimal separator in canonical form: `200.10` normalizes to one
/// fractional digit and passes, `200.001` does not. The check runs on the
/// decimal representation, never on a binary-float bit pattern.
pub fn is_amount_valid(amount: Decimal) -> bool {
    amount > Decimal::ZERO && amount.normalize().scale() <= AMOUNT_DECIMALS
}

/// A monetary amount in minor units (cents)
///
/// The raw value is the number of cents. Amounts held by an account are
/// never negative; the signed representation exists so differences and
/// serde-roundtripped values stay well-defined.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Amount(pub i64);

impl Amount {
    /// Create a zero amount
    pub fn zero() -> Self {
        Self(0)
    }

    /// Create an amount from a raw cent count
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from a decimal value, enforcing the validity rule
    ///
    /// Fails with `InvalidAmount` if the value is non-positive or carries
    /// more than 2 decimal places, and with `AmountOverflow` if the cent
    /// count does not fit the minor-unit range.
    pub fn from_decimal(amount: Decimal) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(PocketBankError::invalid_amount(
                amount,
                "amount must be positive",
            ));
        }
        if amount.normalize().scale() > AMOUNT_DECIMALS {
            return Err(PocketBankError::invalid_amount(
                amount,
                "more than 2 decimal places",
            ));
        }
        let cents = amount
            .checked_mul(Decimal::from(MINOR_UNITS_PER_UNIT))
            .and_then(|cents| cents.to_i64())
            .ok_or(PocketBankError::AmountOverflow)?;
        Ok(Self(cents))
    }

    /// Get the raw cent count
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Get the decimal value (e.g. 20001 cents -> 200.01)
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, AMOUNT_DECIMALS)
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_validity() {
        assert!(is_amount_valid(Decimal::from(200)));
        assert!(is_amount_valid(Decimal::new(20011, 2))); // 200.11
        assert!(is_amount_valid(Decimal::new(1, 2))); // 0.01

        assert!(!is_amount_valid(Decimal::new(200001, 3))); // 200.001
        assert!(!is_amount_valid(Decimal::from(-200)));
        assert!(!is_amount_valid(Decimal::ZERO));
        assert!(!is_amount_valid(Decimal::new(2003333, 4))); // 200.3333
    }

    #[test]
    fn test_amount_validity_canonicalizes_trailing_zeros() {
        // 200.10 and 0.010 both normalize to <= 2 fractional digits
        assert!(is_amount_valid(Decimal::new(20010, 2)));
        assert!(is_amount_valid(Decimal::new(10, 3)));
    }

    #[test]
    fn test_from_decimal_cents_mapping() {
        let amount = Amount::from_decimal(Decimal::new(20001, 2)).unwrap();
        assert_eq!(amount.cents(), 20001);

        let amount = Amount::from_decimal(Decimal::from(200)).unwrap();
        assert_eq!(amount.cents(), 20000);
        assert_eq!(amount.to_decimal(), Decimal::from(200));

        let amount = Amount::from_decimal(Decimal::new(1, 2)).unwrap();
        assert_eq!(amount.cents(), 1);
    }

    #[test]
    fn test_from_decimal_rejects_invalid() {
        assert!(matches!(
            Amount::from_decimal(Decimal::ZERO),
            Err(PocketBankError::InvalidAmount { .. })
        ));
        assert!(matches!(
            Amount::from_decimal(Decimal::from(-100)),
            Err(PocketBankError::InvalidAmount { .. })
        ));
        assert!(matches!(
            Amount::from_decimal(Decimal::new(100001, 3)),
            Err(PocketBankError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Amount::from_cents(20000);
        let b = Amount::from_cents(10000);

        assert_eq!(a.checked_add(b), Some(Amount::from_cents(30000)));
        assert_eq!(a.checked_sub(b), Some(Amount::from_cents(10000)));
        assert_eq!(b.checked_sub(b), Some(Amount::zero()));
        assert_eq!(Amount::from_cents(i64::MAX).checked_add(b), None);
    }

    #[test]
    fn test_amount_ordering() {
        assert!(Amount::from_cents(20001) > Amount::from_cents(20000));
        assert!(Amount::zero() < Amount::from_cents(1));
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::from_cents(20001).to_string(), "200.01");
        assert_eq!(Amount::from_cents(20000).to_string(), "200.00");
        assert_eq!(Amount::zero().to_string(), "0.00");
    }

    #[test]
    fn test_amount_serde_roundtrip() {
        let amount = Amount::from_cents(20001);
        let json = serde_json::to_string(&amount).unwrap();
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, back);
    }
}
