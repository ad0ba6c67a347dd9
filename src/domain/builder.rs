//! Bank builder: the single place where branches and deposits are populated.

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::entities::{Bank, Branch, Deposit, DepositKind};
use crate::domain::error::{DomainError, DomainResult};

/// Populates a bank branch by branch.
///
/// Deposits always land in the most recently opened branch. The builder is
/// consumed by [`BankBuilder::build`]; the resulting [`Bank`] is read-only.
#[derive(Debug)]
pub struct BankBuilder {
    name: String,
    branches: Vec<Branch>,
}

impl BankBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            branches: Vec::new(),
        }
    }

    /// Open a new branch; subsequent deposits go into it.
    pub fn branch(&mut self, name: impl Into<String>) -> &mut Self {
        let branch = Branch::new(name);
        debug!("branch: {}", branch.name());
        self.branches.push(branch);
        self
    }

    /// Add a deposit to the current branch.
    pub fn deposit(
        &mut self,
        kind: DepositKind,
        depositor_name: impl Into<String>,
        amount: Decimal,
    ) -> DomainResult<&mut Self> {
        let deposit = Deposit::new(kind, depositor_name, amount)?;
        let Some(branch) = self.branches.last_mut() else {
            return Err(DomainError::NoBranch {
                depositor: deposit.depositor_name().to_string(),
            });
        };
        branch.push(deposit);
        Ok(self)
    }

    pub fn long_term(
        &mut self,
        depositor_name: impl Into<String>,
        amount: Decimal,
    ) -> DomainResult<&mut Self> {
        self.deposit(DepositKind::LongTerm, depositor_name, amount)
    }

    pub fn demand(
        &mut self,
        depositor_name: impl Into<String>,
        amount: Decimal,
    ) -> DomainResult<&mut Self> {
        self.deposit(DepositKind::Demand, depositor_name, amount)
    }

    pub fn build(self) -> Bank {
        debug!(
            "build: bank={} branches={}",
            self.name,
            self.branches.len()
        );
        Bank::from_parts(self.name, self.branches)
    }
}
