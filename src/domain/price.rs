// src/domain/price.rs

const MILLION: u64 = 1_000_000;
const TENTH_OF_MILLION: u64 = MILLION / 10;

/// Formats a whole-unit price in millions with one decimal place,
/// e.g. `12_500_000` -> `"12.5 million RUB"`.
///
/// Rounds half up on the exact integer value, so `12_550_000` gives `"12.6"`
/// and `12_549_999` gives `"12.5"`.
pub fn format_price(price: u64, currency: &str) -> String {
    let round_up = price % TENTH_OF_MILLION >= TENTH_OF_MILLION / 2;
    let tenths = price / TENTH_OF_MILLION + u64::from(round_up);
    format!("{}.{} million {currency}", tenths / 10, tenths % 10)
}
