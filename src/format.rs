use crate::locale::NumberLocale;
use rust_decimal::{Decimal, RoundingStrategy};

/// Full locale rendering: exactly two fractional digits, thousands grouped.
///
/// This is what an unfocused field shows (`1.234,56` under es-ES).
pub fn format_display(value: Decimal, locale: &NumberLocale) -> String {
    let fixed = two_decimals(value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    let grouped = group_thousands(int_part, locale.group_separator);

    format!("{sign}{grouped}{}{frac_part}", locale.decimal_separator)
}

/// Edit rendering: two fractional digits, locale decimal separator, no
/// grouping. A focused field shows this so edits are not fighting grouping
/// punctuation (`1234,56` under es-ES).
pub fn format_edit(value: Decimal, locale: &NumberLocale) -> String {
    let mut out = String::new();
    for ch in two_decimals(value).chars() {
        if ch == '.' {
            out.push(locale.decimal_separator);
        } else {
            out.push(ch);
        }
    }
    out
}

/// Placeholder shown by an empty field: the locale rendering of zero.
pub fn placeholder(locale: &NumberLocale) -> String {
    format_display(Decimal::ZERO, locale)
}

// Rounding to scale 2 first means the precision formatter below only ever
// pads with zeros, it never has to round again.
fn two_decimals(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

fn group_thousands(int_part: &str, separator: char) -> String {
    let len = int_part.len();
    if len <= 3 {
        return int_part.to_string();
    }

    let mut out = String::with_capacity(len + len / 3);
    let mut first_group = len % 3;
    if first_group == 0 {
        first_group = 3;
    }

    out.push_str(&int_part[..first_group]);
    let mut idx = first_group;
    while idx < len {
        out.push(separator);
        out.push_str(&int_part[idx..idx + 3]);
        idx += 3;
    }

    out
}

// -----------------------------------------------------------------------------
// Testes
// -----------------------------------------------------------------------------
