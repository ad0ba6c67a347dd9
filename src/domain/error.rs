//! Domain-level errors (no external dependencies)

use rust_decimal::Decimal;
use thiserror::Error;

/// Domain errors represent business rule violations.
/// These are independent of configuration and terminal concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("negative deposit amount for {depositor}: {amount}")]
    NegativeAmount { depositor: String, amount: Decimal },

    #[error("deposit for {depositor} added before any branch")]
    NoBranch { depositor: String },

    #[error("projection over {months} months exceeds the currency range")]
    ProjectionOverflow { months: u32 },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
