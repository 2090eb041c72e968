//! PocketBank Account - the single-account banking entity
//!
//! This crate implements the account entity:
//! - Construction with a validated email and starting balance
//! - Deposit and withdrawal with amount validation
//! - All-or-nothing transfer between two accounts
//!
//! The validity predicates are re-exported so callers can check inputs
//! without holding an account.

pub mod account;

pub use account::*;

pub use pocketbank_types::{is_amount_valid, is_email_valid};
