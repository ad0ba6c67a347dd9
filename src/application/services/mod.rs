//! Application services

pub mod query;

pub use query::{
    bank_summary, search, search_branches, search_depositors, BankSummary, BranchTotal,
    DepositorMatch, QueryService, SearchOutcome, PROJECTION_MONTHS,
};
