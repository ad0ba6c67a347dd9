//! demobank: an in-memory bank of branches and depositors
//!
//! Layers, leaf first:
//! - [`domain`]: deposits, branches, the bank, currency arithmetic
//! - [`application`]: the query service, input parsing, seed data
//! - [`config`]: layered settings
//! - [`cli`]: argument parsing, the interactive shell, rendering

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::services::{QueryService, SearchOutcome};
pub use domain::{Bank, Branch, Deposit, DepositKind};
