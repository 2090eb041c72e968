//! Account implementation

use chrono::{DateTime, Utc};
use pocketbank_types::{AccountId, Amount, EmailAddress, PocketBankError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single bank account
///
/// Holds a validated email and a balance in minor units. The balance is
/// positive at construction and can only reach exactly zero through a
/// withdrawal or transfer; it is never negative and never carries more than
/// 2 decimal places. The email never changes after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID
    id: AccountId,
    /// Owner email, validated at construction
    email: EmailAddress,
    /// Balance in minor units
    balance: Amount,
    /// When created
    created_at: DateTime<Utc>,
}

impl Account {
    /// Open a new account
    ///
    /// Fails with `InvalidEmail` or `InvalidAmount` if either input is
    /// rejected by its validity rule. On success the account holds exactly
    /// the given email and balance.
    pub fn new(email: &str, starting_balance: Decimal) -> Result<Self> {
        let email = EmailAddress::parse(email)?;
        let balance = Amount::from_decimal(starting_balance)?;
        let account = Self {
            id: AccountId::new(),
            email,
            balance,
            created_at: Utc::now(),
        };
        tracing::debug!(account = %account.id, balance = %account.balance, "account opened");
        Ok(account)
    }

    /// Get the account ID
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Get the owner email
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Get the current balance
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Get the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Deposit an amount into the account
    ///
    /// Returns the new balance. There is no upper bound on the balance short
    /// of the minor-unit range itself.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Amount> {
        let amount = Amount::from_decimal(amount)?;
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(PocketBankError::AmountOverflow)?;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "deposit applied");
        Ok(self.balance)
    }

    /// Withdraw an amount from the account
    ///
    /// Fails with `InsufficientFunds` if the amount exceeds the balance.
    /// Withdrawing exactly the full balance is permitted and leaves the
    /// balance at zero. Returns the new balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Amount> {
        let amount = Amount::from_decimal(amount)?;
        if amount > self.balance {
            return Err(PocketBankError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(PocketBankError::AmountOverflow)?;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "withdrawal applied");
        Ok(self.balance)
    }

    /// Transfer an amount to another account
    ///
    /// Fails with `InvalidReceiver` if the receiver is absent and with
    /// `InsufficientFunds` if the amount exceeds the sender's balance. Both
    /// new balances are computed before either account is written, so every
    /// failure leaves both accounts untouched. Returns the sender's new
    /// balance.
    pub fn transfer(&mut self, amount: Decimal, receiver: Option<&mut Account>) -> Result<Amount> {
        let amount = Amount::from_decimal(amount)?;
        let receiver = receiver.ok_or(PocketBankError::InvalidReceiver)?;
        if amount > self.balance {
            return Err(PocketBankError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        let sender_balance = self
            .balance
            .checked_sub(amount)
            .ok_or(PocketBankError::AmountOverflow)?;
        let receiver_balance = receiver
            .balance
            .checked_add(amount)
            .ok_or(PocketBankError::AmountOverflow)?;
        self.balance = sender_balance;
        receiver.balance = receiver_balance;
        tracing::debug!(
            from = %self.id,
            to = %receiver.id,
            %amount,
            balance = %self.balance,
            "transfer applied"
        );
        Ok(self.balance)
    }
}
