//! fr-CA display formatting for amounts and rates.
//!
//! Presentation only: this is the single place values are rounded, so the
//! calculators themselves never lose precision mid-computation.

use rust_decimal::{Decimal, RoundingStrategy};

const GROUP_SEPARATOR: char = '\u{00A0}';

/// Formats an amount as Canadian-French currency, e.g. `1 234,56 $`.
///
/// Rounds half-up to two decimal places, or to whole dollars when
/// `include_cents` is false. Thousands are grouped with a non-breaking space
/// and the dollar sign trails the number, per fr-CA convention.
pub fn format_currency(
    amount: Decimal,
    include_cents: bool,
) -> String {
    let places: u32 = if include_cents { 2 } else { 0 };
    let rounded =
        amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;

    let digits = format!("{:.*}", places as usize, rounded.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + 6);
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out.push(GROUP_SEPARATOR);
    out.push('$');
    out
}

/// Formats a percentage value (already scaled to percent), e.g. `14.98%`.
pub fn format_percentage(
    value: Decimal,
    decimals: usize,
) -> String {
    let rounded =
        value.round_dp_with_strategy(decimals as u32, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}%", decimals, rounded)
}

/// Formats a decimal-fraction rate as a percentage, e.g. `0.15` → `15.00%`.
pub fn format_rate(
    rate: Decimal,
    decimals: usize,
) -> String {
    format_percentage(rate * Decimal::ONE_HUNDRED, decimals)
}

/// Human-readable range label for a bracket, e.g. `58 900 $ - 294 600 $`,
/// or `2 357 000 $ et plus` for the unbounded top bracket.
pub fn bracket_label(
    lower_bound: Decimal,
    upper_bound: Option<Decimal>,
) -> String {
    match upper_bound {
        Some(upper) => format!(
            "{} - {}",
            format_currency(lower_bound, false),
            format_currency(upper, false)
        ),
        None => format!("{} et plus", format_currency(lower_bound, false)),
    }
}
