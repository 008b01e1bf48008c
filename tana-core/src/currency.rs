/// Fixed exchange rates with USD as the base currency. A real deployment
/// would pull these from an FX feed; the table mirrors the rates the
/// booking flow was built against.
const EXCHANGE_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("ETB", 140.50),
];

/// Rate for a currency code. Unknown codes fall back to 1 (treated as USD).
pub fn rate(code: &str) -> f64 {
    match EXCHANGE_RATES.iter().find(|(c, _)| *c == code) {
        Some((_, rate)) => *rate,
        None => {
            tracing::debug!(code, "unknown currency code, using USD rate");
            1.0
        }
    }
}

/// Convert a USD amount to the target currency, rounded to 2 decimals.
pub fn convert(amount_usd: f64, target: &str) -> f64 {
    round2(amount_usd * rate(target))
}

/// Round to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Display symbol for a currency code, defaulting to "$".
pub fn symbol(code: &str) -> &'static str {
    match code {
        "EUR" => "€",
        "GBP" => "£",
        _ => "$",
    }
}
