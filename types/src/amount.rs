//! Monetary amounts.
//!
//! Amounts are signed 64-bit counts of the smallest unit, so that fee and
//! reward arithmetic can be checked against a negative result instead of
//! wrapping.

/// Amount in the smallest indivisible unit.
pub type Amount = i64;

/// One whole coin.
pub const COIN: Amount = 100_000_000;

/// One hundredth of a coin. Reward rates are expressed in cents per coin-year.
pub const CENT: Amount = 1_000_000;

/// Upper bound for any single amount; not the total supply.
pub const MAX_MONEY: Amount = 21_000_000 * COIN;

/// Whether `value` is a valid amount for an output or a reward.
pub fn money_range(value: Amount) -> bool {
    (0..=MAX_MONEY).contains(&value)
}

/// Render an amount as a fixed-point decimal string (`"6.00000000"`).
pub fn format_amount(value: Amount) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    let coin = COIN as u64;
    format!("{}{}.{:08}", sign, abs / coin, abs % coin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_range_bounds() {
        assert!(money_range(0));
        assert!(money_range(MAX_MONEY));
        assert!(!money_range(-1));
        assert!(!money_range(MAX_MONEY + 1));
    }

    #[test]
    fn format_whole_and_fractional() {
        assert_eq!(format_amount(6 * COIN), "6.00000000");
        assert_eq!(format_amount(2 * CENT), "0.02000000");
        assert_eq!(format_amount(-COIN / 2), "-0.50000000");
        assert_eq!(format_amount(i64::MIN), "-92233720368.54775808");
    }
}
