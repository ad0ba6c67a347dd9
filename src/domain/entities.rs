//! Domain entities: deposits, branches and the bank

use rust_decimal::Decimal;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::money::{monthly_compound_factor, ANNUAL_RATE};

/// Accrual rule attached to a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepositKind {
    /// Fixed-rate interest, compounded monthly
    LongTerm,
    /// No accrual, the balance stays at the principal
    Demand,
}

/// A single depositor's holding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deposit {
    depositor_name: String,
    amount: Decimal,
    kind: DepositKind,
}

impl Deposit {
    /// Create a deposit, rejecting negative principals.
    pub fn new(
        kind: DepositKind,
        depositor_name: impl Into<String>,
        amount: Decimal,
    ) -> DomainResult<Self> {
        let depositor_name = depositor_name.into();
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::NegativeAmount {
                depositor: depositor_name,
                amount,
            });
        }
        Ok(Self {
            depositor_name,
            amount,
            kind,
        })
    }

    pub fn long_term(depositor_name: impl Into<String>, amount: Decimal) -> DomainResult<Self> {
        Self::new(DepositKind::LongTerm, depositor_name, amount)
    }

    pub fn demand(depositor_name: impl Into<String>, amount: Decimal) -> DomainResult<Self> {
        Self::new(DepositKind::Demand, depositor_name, amount)
    }

    pub fn depositor_name(&self) -> &str {
        &self.depositor_name
    }

    /// Principal.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> DepositKind {
        self.kind
    }

    /// Balance after `months` of accrual, unrounded.
    ///
    /// Long-term: `amount * (1 + 0.05/12)^months`. Demand: `amount`.
    pub fn calculate_total_amount(&self, months: u32) -> DomainResult<Decimal> {
        match self.kind {
            DepositKind::Demand => Ok(self.amount),
            DepositKind::LongTerm => monthly_compound_factor(ANNUAL_RATE, months)
                .and_then(|factor| self.amount.checked_mul(factor))
                .ok_or(DomainError::ProjectionOverflow { months }),
        }
    }
}

/// Organizational unit owning an ordered set of deposits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    name: String,
    deposits: Vec<Deposit>,
}

impl Branch {
    /// Create an empty branch.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deposits: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn deposits(&self) -> &[Deposit] {
        &self.deposits
    }

    /// Sum of principals, recomputed on every call. Zero for an empty branch.
    pub fn total_deposits(&self) -> Decimal {
        self.deposits
            .iter()
            .fold(Decimal::ZERO, |total, deposit| total + deposit.amount)
    }

    pub(crate) fn push(&mut self, deposit: Deposit) {
        self.deposits.push(deposit);
    }
}

/// The bank: named, owning its branches.
///
/// There is no separate list of all deposits. [`Bank::deposits`] walks the
/// branches, so the flattened view cannot drift from branch contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    name: String,
    branches: Vec<Branch>,
}

impl Bank {
    pub(crate) fn from_parts(name: String, branches: Vec<Branch>) -> Self {
        Self { name, branches }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Every deposit, in branch order then deposit order.
    pub fn deposits(&self) -> impl Iterator<Item = &Deposit> + '_ {
        self.branches.iter().flat_map(|branch| branch.deposits.iter())
    }

    /// Every deposit paired with its owning branch, in the same order as [`Bank::deposits`].
    pub fn deposits_with_branch(&self) -> impl Iterator<Item = (&Branch, &Deposit)> + '_ {
        self.branches
            .iter()
            .flat_map(|branch| branch.deposits.iter().map(move |deposit| (branch, deposit)))
    }

    pub fn deposit_count(&self) -> usize {
        self.branches.iter().map(|branch| branch.deposits.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn given_negative_amount_when_creating_deposit_then_rejects() {
        let result = Deposit::demand("Иван Иванов", dec!(-1));
        assert_eq!(
            result,
            Err(DomainError::NegativeAmount {
                depositor: "Иван Иванов".into(),
                amount: dec!(-1),
            })
        );
    }

    #[test]
    fn given_zero_amount_when_creating_deposit_then_accepts() {
        let deposit = Deposit::long_term("Иван Иванов", dec!(0)).unwrap();
        assert_eq!(deposit.calculate_total_amount(120).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn given_long_term_deposit_when_overflowing_then_reports_months() {
        let deposit = Deposit::long_term("Иван Иванов", dec!(1000000)).unwrap();
        assert_eq!(
            deposit.calculate_total_amount(u32::MAX),
            Err(DomainError::ProjectionOverflow { months: u32::MAX })
        );
    }

    #[test]
    fn given_pushed_deposits_when_summing_then_order_preserved() {
        let mut branch = Branch::new("Главный филиал");
        branch.push(Deposit::long_term("a", dec!(1.10)).unwrap());
        branch.push(Deposit::demand("b", dec!(2.20)).unwrap());

        let names: Vec<_> = branch.deposits().iter().map(Deposit::depositor_name).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(branch.total_deposits(), dec!(3.30));
    }
}
