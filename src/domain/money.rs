//! Currency arithmetic: the accrual rate, monthly compounding and display formatting.
//!
//! Calculations stay at full `Decimal` precision. Rounding to the minor unit
//! happens only in [`round_currency`] / [`format_currency`], i.e. at display time.

use itertools::Itertools;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

/// Nominal annual rate for long-term deposits.
pub const ANNUAL_RATE: Decimal = dec!(0.05);

/// Compounding periods per year.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Digits after the decimal point in the displayed currency.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Growth factor `(1 + rate/12)^months`, or `None` if it leaves the `Decimal` range.
pub fn monthly_compound_factor(annual_rate: Decimal, months: u32) -> Option<Decimal> {
    let monthly = annual_rate.checked_div(MONTHS_PER_YEAR)?;
    (Decimal::ONE + monthly).checked_powu(u64::from(months))
}

/// Round to the minor currency unit, half away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount the way rubles are written: `630 697,14 ₽`.
///
/// Thousands are grouped with a space, the decimal separator is a comma,
/// and the symbol trails after a space. An empty symbol drops the suffix.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = round_currency(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let text = format!("{:.2}", rounded.abs());
    let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(units));
    out.push(',');
    out.push_str(cents);
    if !symbol.is_empty() {
        out.push(' ');
        out.push_str(symbol);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    chars
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .join(" ")
}
