//! PocketBank Types - Canonical domain types for account banking
//!
//! This crate contains all foundational types for PocketBank with zero
//! dependencies on other pocketbank crates. It defines:
//!
//! - Identity types (AccountId)
//! - Monetary amounts in integer minor units, with the amount-validity rule
//! - Validated email addresses, with the email-validity rule
//! - Error types
//!
//! # Invariants
//!
//! 1. Amounts are positive and carry at most 2 decimal places
//! 2. Balances are held in minor units, never in binary floating point
//! 3. Failure is explicit: every violated precondition returns an error

pub mod identity;
pub mod amount;
pub mod email;
pub mod error;

pub use identity::*;
pub use amount::*;
pub use email::*;
pub use error::*;

/// Version of the PocketBank types schema
pub const TYPES_VERSION: &str = "0.1.0";
