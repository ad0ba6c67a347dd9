//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod entities;
pub mod error;
pub mod money;

pub use builder::BankBuilder;
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use money::{format_currency, round_currency, ANNUAL_RATE};
