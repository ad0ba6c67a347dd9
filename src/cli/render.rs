//! Text rendering of query results and the shell's fixed messages

use crate::application::services::{BankSummary, BranchTotal, DepositorMatch, SearchOutcome};
use crate::application::Category;
use crate::domain::format_currency;

pub const CATEGORY_PROMPT: &str = "Введите категорию для поиска (Банк, Филиал, Вклад):";
pub const BRANCH_PROMPT: &str = "Введите название филиала для поиска:";
pub const DEPOSITOR_PROMPT: &str = "Введите ФИО вкладчика для поиска:";
pub const BRANCH_NOT_FOUND: &str = "Филиал не найден.";
pub const DEPOSITOR_NOT_FOUND: &str = "Вкладчик не найден.";
pub const INVALID_CATEGORY: &str = "Неверное название категории.";
pub const MALFORMED_ANSWER: &str = "Некорректный ввод. Пожалуйста, введите 'y' или 'n'.";
pub const FAREWELL: &str = "До свидания!";

/// `bank_label` is the name in the case Russian takes after "в".
pub fn continue_prompt(bank_label: &str) -> String {
    format!("Хотите выполнить поиск в '{}'? (y/n)", bank_label)
}

/// Prompt for the search term; the bank summary takes none.
pub fn term_prompt(category: Category) -> Option<&'static str> {
    match category {
        Category::Bank => None,
        Category::Branch => Some(BRANCH_PROMPT),
        Category::Deposit => Some(DEPOSITOR_PROMPT),
    }
}

/// Russian plural of "month" for a count: месяц, месяца, месяцев.
pub fn months_word(months: u32) -> &'static str {
    match (months % 10, months % 100) {
        (1, n) if n != 11 => "месяц",
        (2..=4, n) if !(12..=14).contains(&n) => "месяца",
        _ => "месяцев",
    }
}

pub fn bank_summary_lines(summary: &BankSummary, symbol: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(summary.branches.len() + 3);
    lines.push(format!("Банк: {}", summary.name));
    lines.push(format!("Количество филиалов: {}", summary.branch_count));
    for branch in &summary.branches {
        lines.push(format!(
            "{}: Общая сумма вкладов: {}",
            branch.name,
            format_currency(branch.total, symbol)
        ));
    }
    lines.push(format!(
        "Общее количество вкладов: {}",
        summary.total_deposit_count
    ));
    lines
}

pub fn branch_line(branch: &BranchTotal, symbol: &str) -> String {
    format!(
        "Филиал: {}, Общая сумма вкладов: {}",
        branch.name,
        format_currency(branch.total, symbol)
    )
}

pub fn depositor_line(found: &DepositorMatch, months: u32, symbol: &str) -> String {
    format!(
        "Вкладчик: {}, Филиал: {}, Сумма вклада: {}, Рассчитанная сумма за {} {}: {}",
        found.depositor_name,
        found.branch_name,
        format_currency(found.amount, symbol),
        months,
        months_word(months),
        format_currency(found.projected_total, symbol)
    )
}

/// Lines for any search outcome, including the not-found and invalid-category messages.
pub fn outcome_lines(outcome: &SearchOutcome, months: u32, symbol: &str) -> Vec<String> {
    match outcome {
        SearchOutcome::BankSummary(summary) => bank_summary_lines(summary, symbol),
        SearchOutcome::Branches(found) if found.is_empty() => vec![BRANCH_NOT_FOUND.into()],
        SearchOutcome::Branches(found) => {
            found.iter().map(|b| branch_line(b, symbol)).collect()
        }
        SearchOutcome::Depositors(found) if found.is_empty() => {
            vec![DEPOSITOR_NOT_FOUND.into()]
        }
        SearchOutcome::Depositors(found) => found
            .iter()
            .map(|d| depositor_line(d, months, symbol))
            .collect(),
        SearchOutcome::InvalidCategory(_) => vec![INVALID_CATEGORY.into()],
    }
}
