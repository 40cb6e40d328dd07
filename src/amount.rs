use crate::locale::NumberLocale;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Filter raw keystrokes down to the characters a currency amount may contain.
///
/// Single left-to-right pass: ASCII digits survive, the locale decimal
/// separator survives only on its first occurrence (later ones are deleted,
/// not treated as boundaries), everything else is dropped. The fractional
/// part is then truncated to at most two characters, never rounded.
///
/// Intermediate edit states come out verbatim: a lone separator or a string
/// ending in the separator is a valid sanitized result.
pub fn sanitize(raw: &str, locale: &NumberLocale) -> String {
    let decimal = locale.decimal_separator;

    let mut filtered = String::with_capacity(raw.len());
    let mut seen_decimal = false;
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            filtered.push(ch);
        } else if ch == decimal && !seen_decimal {
            seen_decimal = true;
            filtered.push(ch);
        }
    }

    match filtered.split_once(decimal) {
        None => filtered,
        Some((int_part, fraction)) => {
            // The pass above leaves at most one separator; re-collapsing any
            // residual segments keeps the total at one even if it regresses.
            let fraction: String = fraction
                .chars()
                .filter(|ch| *ch != decimal)
                .take(2)
                .collect();

            let mut out = String::with_capacity(int_part.len() + fraction.len() + 1);
            out.push_str(int_part);
            out.push(decimal);
            out.push_str(&fraction);
            out
        }
    }
}

/// Parse display text into a decimal amount.
///
/// Empty or whitespace-only text is "no value". Otherwise every group
/// separator is removed, the decimal separator becomes `.` and the result is
/// parsed as a plain decimal numeral; anything unparsable after that is also
/// "no value" rather than an error.
///
/// Parsing is lenient the way mid-edit text requires: a trailing decimal
/// point is ignored (`"12,"` is twelve) and a leading one gets an implicit
/// integer zero (`",5"` is a half).
pub fn parse_amount(text: &str, locale: &NumberLocale) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        if ch == locale.group_separator {
            continue;
        }
        if ch == locale.decimal_separator {
            normalized.push('.');
        } else {
            normalized.push(ch);
        }
    }

    if normalized.ends_with('.') {
        normalized.pop();
    }
    if normalized.starts_with('.') {
        normalized.insert(0, '0');
    }
    if normalized.is_empty() {
        return None;
    }

    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{EN_US, ES_ES};
    use rstest::rstest;

    #[rstest]
    #[case("1234,56", "1234,56")] // já limpo
    #[case("12,3,45", "12,34")] // segundo separador removido, depois truncado
    #[case("12,3456", "12,34")] // fração truncada, não arredondada
    #[case("1.234,56", "1234,56")] // separador de milhar descartado, decimal mantido
    #[case("abc12,5x", "12,5")]
    #[case(",", ",")]
    #[case("12,", "12,")]
    #[case("€ 1234", "1234")]
    #[case("", "")]
    #[case("---", "")]
    fn test_sanitize_es_es(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(sanitize(raw, &ES_ES), expected);
    }

    #[rstest]
    #[case("1234.56", "1234.56")]
    #[case("12.3.45", "12.34")]
    #[case("12.3456", "12.34")]
    #[case("$1,234.56", "1234.56")] // vírgula descartada, não é o separador decimal
    fn test_sanitize_en_us(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(sanitize(raw, &EN_US), expected);
    }

    #[rstest]
    #[case("1.234,56", "1234.56")]
    #[case("1234,56", "1234.56")]
    #[case("12,", "12")]
    #[case(",5", "0.5")]
    #[case("0,00", "0.00")]
    #[case("7", "7")]
    fn test_parse_amount_es_es(#[case] text: &str, #[case] expected: &str) {
        let parsed = parse_amount(text, &ES_ES);
        assert_eq!(parsed, Some(Decimal::from_str(expected).unwrap()));
    }

    #[rstest]
    #[case("1,234.56", "1234.56")]
    #[case("1234.56", "1234.56")]
    #[case("-50.00", "-50.00")]
    fn test_parse_amount_en_us(#[case] text: &str, #[case] expected: &str) {
        let parsed = parse_amount(text, &EN_US);
        assert_eq!(parsed, Some(Decimal::from_str(expected).unwrap()));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case(",")]
    #[case("garbage")]
    #[case("1,2,3")] // sobrou mais de um ponto decimal após a normalização
    fn test_parse_amount_no_value(#[case] text: &str) {
        assert_eq!(parse_amount(text, &ES_ES), None);
    }

    #[test]
    fn test_sanitize_then_parse() {
        let sanitized = sanitize("1x2,3,45", &ES_ES);
        assert_eq!(sanitized, "12,34");
        let parsed = parse_amount(&sanitized, &ES_ES);
        assert_eq!(parsed, Some(Decimal::from_str("12.34").unwrap()));
    }
}
