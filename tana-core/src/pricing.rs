use serde::Serialize;

use crate::currency;

/// How a promo code reduces the pre-discount total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromoKind {
    /// Fraction of the base price (0.10 = 10% off).
    Percentage(f64),
    /// Fixed USD amount off.
    Flat(f64),
}

pub struct PromoCode {
    pub code: &'static str,
    pub kind: PromoKind,
}

/// The fixed promo table. At most one code applies to a quote.
pub const PROMO_CODES: &[PromoCode] = &[
    PromoCode {
        code: "SAVE10",
        kind: PromoKind::Percentage(0.10),
    },
    PromoCode {
        code: "FLAT5",
        kind: PromoKind::Flat(5.0),
    },
];

fn find_promo(code: &str) -> Option<&'static PromoCode> {
    PROMO_CODES.iter().find(|p| p.code.eq_ignore_ascii_case(code))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoStatus {
    /// No code was supplied.
    None,
    /// A known code was recognized and its discount applied.
    Applied,
    /// The supplied code is not in the promo table; discount is zero.
    Invalid,
}

/// A priced booking total. All arithmetic happens in USD; conversion to the
/// display currency happens exactly once, on the way out.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Pre-discount total in USD (per-seat price times passenger count).
    #[serde(rename = "basePriceUSD")]
    pub base_price_usd: f64,
    /// Discount in USD, the canonical figure a caller can re-apply.
    #[serde(rename = "discountUSD")]
    pub discount_usd: f64,
    /// Discount converted to the display currency.
    pub discount: f64,
    /// Final total in the display currency, floored at zero.
    pub total: f64,
    pub currency: String,
    pub promo_status: PromoStatus,
    /// The applied code in canonical (uppercase) form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
}

/// Quote a booking total from the per-seat USD fare.
///
/// Quotes are pure: re-quoting with a different code replaces the previous
/// discount rather than stacking on top of it.
pub fn quote(
    per_seat_usd: f64,
    passenger_count: u32,
    promo_code: Option<&str>,
    currency: &str,
) -> PriceQuote {
    let base = currency::round2(per_seat_usd * passenger_count as f64);

    let requested = promo_code.map(str::trim).filter(|c| !c.is_empty());
    let (discount_usd, promo_status, applied) = match requested {
        None => (0.0, PromoStatus::None, None),
        Some(code) => match find_promo(code) {
            Some(promo) => {
                let discount = match promo.kind {
                    PromoKind::Percentage(fraction) => base * fraction,
                    PromoKind::Flat(amount) => amount,
                };
                (
                    currency::round2(discount),
                    PromoStatus::Applied,
                    Some(promo.code.to_string()),
                )
            }
            None => (0.0, PromoStatus::Invalid, None),
        },
    };

    // Flat codes can exceed a tiny base; never quote a negative total.
    let total_usd = (base - discount_usd).max(0.0);

    PriceQuote {
        base_price_usd: base,
        discount_usd,
        discount: currency::convert(discount_usd, currency),
        total: currency::convert(total_usd, currency),
        currency: currency.to_string(),
        promo_status,
        promo_code: applied,
    }
}
