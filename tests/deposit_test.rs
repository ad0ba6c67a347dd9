//! Tests for deposit accrual and branch/bank aggregates

use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use demobank::domain::{round_currency, BankBuilder, Branch, Deposit, DepositKind};
use demobank::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[rstest]
#[case(DepositKind::LongTerm)]
#[case(DepositKind::Demand)]
fn given_any_deposit_when_zero_months_then_total_is_principal(#[case] kind: DepositKind) {
    let deposit = Deposit::new(kind, "Иван Иванов", dec!(500000)).unwrap();
    assert_eq!(deposit.calculate_total_amount(0).unwrap(), dec!(500000));
}

#[rstest]
#[case(1)]
#[case(12)]
#[case(120)]
#[case(1200)]
fn given_demand_deposit_when_projecting_then_total_never_changes(#[case] months: u32) {
    let deposit = Deposit::demand("Мария Сидорова", dec!(700000.55)).unwrap();
    assert_eq!(deposit.calculate_total_amount(months).unwrap(), dec!(700000.55));
}

#[rstest]
#[case(dec!(500000), dec!(525580.95))]
#[case(dec!(600000), dec!(630697.14))]
#[case(dec!(550000), dec!(578139.04))]
#[case(dec!(700000), dec!(735813.33))]
fn given_long_term_deposit_when_projecting_year_then_compounds_monthly(
    #[case] principal: Decimal,
    #[case] expected: Decimal,
) {
    let deposit = Deposit::long_term("x", principal).unwrap();
    let total = deposit.calculate_total_amount(12).unwrap();
    assert_eq!(round_currency(total), expected);
}

#[test]
fn given_long_term_deposit_when_projecting_then_grows_with_time() {
    let deposit = Deposit::long_term("x", dec!(1000)).unwrap();
    let one = deposit.calculate_total_amount(1).unwrap();
    let two = deposit.calculate_total_amount(2).unwrap();
    // 1000 * (1 + 0.05/12)
    assert_eq!(round_currency(one), dec!(1004.17));
    assert!(two > one);
}

#[test]
fn given_projection_when_computed_then_not_rounded_early() {
    let deposit = Deposit::long_term("x", dec!(600000)).unwrap();
    let total = deposit.calculate_total_amount(12).unwrap();
    assert!(total.scale() > 2);
}

#[test]
fn given_empty_branch_when_summing_then_total_is_zero() {
    assert_eq!(Branch::new("Пустой филиал").total_deposits(), Decimal::ZERO);
}

#[test]
fn given_mixed_branch_when_summing_then_adds_principals() {
    let mut builder = BankBuilder::new("b");
    builder.branch("f");
    builder.long_term("a", dec!(100.10)).unwrap();
    builder.demand("b", dec!(0.01)).unwrap();
    builder.long_term("c", dec!(99.89)).unwrap();
    let bank = builder.build();

    assert_eq!(bank.branches()[0].total_deposits(), dec!(200.00));
}

#[test]
fn given_bank_when_flattening_then_concatenates_branches_in_order() {
    let mut builder = BankBuilder::new("b");
    builder.branch("first");
    builder.demand("a", dec!(1)).unwrap();
    builder.demand("b", dec!(2)).unwrap();
    builder.branch("empty");
    builder.branch("last");
    builder.long_term("c", dec!(3)).unwrap();
    let bank = builder.build();

    let flattened: Vec<_> = bank.deposits().collect();
    let concatenated: Vec<_> = bank
        .branches()
        .iter()
        .flat_map(|branch| branch.deposits())
        .collect();
    assert_eq!(flattened, concatenated);

    let per_branch: usize = bank.branches().iter().map(|b| b.deposits().len()).sum();
    assert_eq!(bank.deposit_count(), per_branch);
    assert_eq!(bank.deposit_count(), 3);

    let owners: Vec<_> = bank
        .deposits_with_branch()
        .map(|(branch, deposit)| (branch.name(), deposit.depositor_name()))
        .collect();
    assert_eq!(owners, [("first", "a"), ("first", "b"), ("last", "c")]);
}
