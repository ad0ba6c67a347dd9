//! Demo data loaded at startup

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::{Bank, BankBuilder};

/// Default bank name.
pub const DEMO_BANK_NAME: &str = "Демо Банк";

/// Default bank name as it reads after "в" in the yes/no prompt.
pub const DEMO_BANK_PROMPT_NAME: &str = "Демо Банке";

const MAIN_BRANCH: (&str, &[(&str, i64)]) = (
    "Главный филиал",
    &[
        ("Иван Иванов", 500_000),
        ("Петр Петров", 600_000),
        ("Светлана Иванова", 550_000),
        ("Ольга Петрова", 580_000),
        ("Александр Смирнов", 620_000),
    ],
);

const NORTH_BRANCH: (&str, &[(&str, i64)]) = (
    "Северный филиал",
    &[
        ("Мария Сидорова", 700_000),
        ("Николай Николаев", 720_000),
        ("Елена Макарова", 710_000),
        ("Дмитрий Орлов", 690_000),
        ("Ирина Жукова", 680_000),
    ],
);

/// Build the demo bank: two branches, five long-term deposits each.
#[instrument]
pub fn seed_bank(name: &str) -> ApplicationResult<Bank> {
    let mut builder = BankBuilder::new(name);
    for (branch, deposits) in [MAIN_BRANCH, NORTH_BRANCH] {
        builder.branch(branch);
        for &(depositor, amount) in deposits {
            builder.long_term(depositor, Decimal::from(amount))?;
        }
    }
    let bank = builder.build();
    debug!("seeded {} deposits", bank.deposit_count());
    Ok(bank)
}
