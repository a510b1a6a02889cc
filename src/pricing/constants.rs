/// Platform fee charged on savings, in percent.
pub const DEFAULT_FEE_PERCENT: f64 = 5.0;

/// Decimal places for money values in output.
pub const MONEY_DECIMALS: u32 = 2;

/// Decimal places for the savings percentage in output.
pub const PERCENT_DECIMALS: u32 = 1;

/// Jaro-Winkler score at which two distinct item keys are reported as
/// probably naming the same thing.
pub const SIMILAR_NAME_THRESHOLD: f64 = 0.92;

/// Session tag appended to generated checkout links.
pub const DEFAULT_CHECKOUT_SESSION: &str = "pricepilot";

/// Round a value to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round a money value to cents.
#[inline]
pub fn round_money(value: f64) -> f64 {
    round_to(value, MONEY_DECIMALS)
}

/// Display symbol for a currency code; unknown codes are shown as-is.
pub fn currency_symbol(currency: &str) -> &str {
    match currency {
        "ILS" => "₪",
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        other => other,
    }
}
