//! Error types for PocketBank
//!
//! All errors are raised synchronously at the violated precondition and
//! reported to the immediate caller; nothing is logged, retried, or
//! suppressed internally.

use crate::Amount;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for PocketBank operations
pub type Result<T> = std::result::Result<T, PocketBankError>;

/// PocketBank error types
#[derive(Debug, Clone, Error)]
pub enum PocketBankError {
    /// Amount is non-positive or carries more than 2 decimal places
    #[error("Invalid amount {amount}: {reason}")]
    InvalidAmount { amount: Decimal, reason: String },

    /// Email address failed the structural validity rule
    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },

    /// Requested amount exceeds the current balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Amount,
        available: Amount,
    },

    /// Transfer target is absent
    #[error("Transfer receiver is absent")]
    InvalidReceiver,

    /// Minor-unit arithmetic exceeded the representable range
    #[error("Amount overflow during arithmetic operation")]
    AmountOverflow,
}

impl PocketBankError {
    /// Create an invalid amount error
    pub fn invalid_amount(amount: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            amount,
            reason: reason.into(),
        }
    }

    /// Create an invalid email error
    pub fn invalid_email(email: impl Into<String>) -> Self {
        Self::InvalidEmail {
            email: email.into(),
        }
    }

    /// Check if this is a recoverable business rejection rather than a
    /// contract violation
    ///
    /// Insufficient funds is the one condition a caller is expected to catch
    /// and retry with a smaller amount; the other kinds reject the input
    /// itself.
    pub fn is_business_rejection(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }

    /// Get an error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::InvalidEmail { .. } => "INVALID_EMAIL",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::InvalidReceiver => "INVALID_RECEIVER",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
        }
    }
}
