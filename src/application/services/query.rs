//! Query service
//!
//! The three lookups over a bank (summary, branch search, depositor search)
//! and the category dispatcher in front of them. Searches are case-insensitive
//! substring matches on a trimmed, lowercased term. An empty result is the
//! "not found" outcome, never an error.

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::application::input::{contains_term, normalize, Category};
use crate::application::ApplicationResult;
use crate::domain::Bank;

/// Horizon used for depositor projections unless configured otherwise.
pub const PROJECTION_MONTHS: u32 = 12;

/// A branch name with the sum of its deposits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTotal {
    pub name: String,
    pub total: Decimal,
}

/// Bank-wide overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankSummary {
    pub name: String,
    pub branch_count: usize,
    pub branches: Vec<BranchTotal>,
    pub total_deposit_count: usize,
}

/// One deposit whose depositor matched the search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositorMatch {
    pub depositor_name: String,
    pub branch_name: String,
    pub amount: Decimal,
    /// Balance after the projection horizon, unrounded
    pub projected_total: Decimal,
}

/// Result of [`search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    BankSummary(BankSummary),
    Branches(Vec<BranchTotal>),
    Depositors(Vec<DepositorMatch>),
    /// The category matched none of `банк`, `филиал`, `вклад`; holds the normalized input
    InvalidCategory(String),
}

impl SearchOutcome {
    /// A well-formed search that matched nothing.
    pub fn is_not_found(&self) -> bool {
        match self {
            SearchOutcome::Branches(found) => found.is_empty(),
            SearchOutcome::Depositors(found) => found.is_empty(),
            SearchOutcome::BankSummary(_) | SearchOutcome::InvalidCategory(_) => false,
        }
    }
}

pub fn bank_summary(bank: &Bank) -> BankSummary {
    BankSummary {
        name: bank.name().to_string(),
        branch_count: bank.branches().len(),
        branches: bank
            .branches()
            .iter()
            .map(|branch| BranchTotal {
                name: branch.name().to_string(),
                total: branch.total_deposits(),
            })
            .collect(),
        total_deposit_count: bank.deposit_count(),
    }
}

/// Branches whose name contains `term`, in branch order.
pub fn search_branches(bank: &Bank, term: &str) -> Vec<BranchTotal> {
    let term = normalize(term);
    bank.branches()
        .iter()
        .filter(|branch| contains_term(branch.name(), &term))
        .map(|branch| BranchTotal {
            name: branch.name().to_string(),
            total: branch.total_deposits(),
        })
        .collect()
}

/// Deposits whose depositor name contains `term`, with their owning branch and
/// the projected balance after `months`.
///
/// Ordered by branch, then by position within the branch. A name present in
/// several branches yields one row per deposit.
pub fn search_depositors(
    bank: &Bank,
    term: &str,
    months: u32,
) -> ApplicationResult<Vec<DepositorMatch>> {
    let term = normalize(term);
    bank.deposits_with_branch()
        .filter(|(_, deposit)| contains_term(deposit.depositor_name(), &term))
        .map(|(branch, deposit)| -> ApplicationResult<DepositorMatch> {
            Ok(DepositorMatch {
                depositor_name: deposit.depositor_name().to_string(),
                branch_name: branch.name().to_string(),
                amount: deposit.amount(),
                projected_total: deposit.calculate_total_amount(months)?,
            })
        })
        .collect()
}

/// Dispatch on a raw category string.
///
/// A missing term on branch or depositor search is the empty string, which
/// matches every entity.
pub fn search(
    bank: &Bank,
    category: &str,
    term: Option<&str>,
    months: u32,
) -> ApplicationResult<SearchOutcome> {
    let term = term.unwrap_or_default();
    let outcome = match Category::parse(category) {
        Some(Category::Bank) => SearchOutcome::BankSummary(bank_summary(bank)),
        Some(Category::Branch) => SearchOutcome::Branches(search_branches(bank, term)),
        Some(Category::Deposit) => {
            SearchOutcome::Depositors(search_depositors(bank, term, months)?)
        }
        None => SearchOutcome::InvalidCategory(normalize(category)),
    };
    Ok(outcome)
}

/// Read-only query front end over a seeded bank.
#[derive(Debug, Clone)]
pub struct QueryService {
    bank: Bank,
    projection_months: u32,
}

impl QueryService {
    pub fn new(bank: Bank) -> Self {
        Self::with_projection(bank, PROJECTION_MONTHS)
    }

    pub fn with_projection(bank: Bank, projection_months: u32) -> Self {
        Self {
            bank,
            projection_months,
        }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn projection_months(&self) -> u32 {
        self.projection_months
    }

    #[instrument(skip(self))]
    pub fn bank_summary(&self) -> BankSummary {
        bank_summary(&self.bank)
    }

    #[instrument(skip(self))]
    pub fn search_branches(&self, term: &str) -> Vec<BranchTotal> {
        let found = search_branches(&self.bank, term);
        debug!("search_branches: {} match(es)", found.len());
        found
    }

    #[instrument(skip(self))]
    pub fn search_depositors(&self, term: &str) -> ApplicationResult<Vec<DepositorMatch>> {
        let found = search_depositors(&self.bank, term, self.projection_months)?;
        debug!("search_depositors: {} match(es)", found.len());
        Ok(found)
    }

    #[instrument(skip(self))]
    pub fn search(&self, category: &str, term: Option<&str>) -> ApplicationResult<SearchOutcome> {
        search(&self.bank, category, term, self.projection_months)
    }
}
