//! Application layer: queries, input parsing and seed data
//!
//! This layer orchestrates domain logic; it performs no terminal I/O.

pub mod error;
pub mod input;
pub mod seed;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use input::{parse_answer, Answer, Category};
pub use seed::{seed_bank, DEMO_BANK_NAME, DEMO_BANK_PROMPT_NAME};
