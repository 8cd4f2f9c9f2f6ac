// src/common/currency.rs
//
// Normalização de salário: o frontend digita livre, aqui viram duas funções
// puras. `format_currency` trata a entrada como centavos inteiros e monta a
// string de exibição; `sanitize_salary` desfaz a formatação e devolve a
// string numérica canônica que vai para o banco.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Formata uma entrada crua como moeda em dólar (agrupamento en-US).
/// Tudo que não for dígito é descartado; o que sobra é lido como centavos.
/// `"12345"` -> `"$123.45"`, `""` -> `"$0.00"`.
pub fn format_currency(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let cents: u128 = digits.parse().unwrap_or(0);

    let dollars = cents / 100;
    let fraction = cents % 100;

    format!("${}.{:02}", group_thousands(dollars), fraction)
}

/// Remove símbolos de moeda e separadores de milhar, e colapsa múltiplos
/// pontos decimais em um só (tudo depois do primeiro ponto vira fração).
/// `"$1,234.56"` -> `"1234.56"`, `"1.2.3.4"` -> `"1.234"`.
pub fn sanitize_salary(formatted: &str) -> String {
    let cleaned: String = formatted
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .filter(|c| *c != ',')
        .collect();

    let parts: Vec<&str> = cleaned.split('.').collect();
    if parts.len() > 2 {
        // Só o primeiro ponto sobrevive; o resto vira fração.
        format!("{}.{}", parts[0], parts[1..].concat())
    } else {
        cleaned
    }
}

/// Converte a string já sanitizada em `Decimal` para persistência.
pub fn parse_salary(sanitized: &str) -> Option<Decimal> {
    if sanitized.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(sanitized).ok()
}

fn group_thousands(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000) as u16);
        value /= 1000;
    }
    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(g) = groups.pop() {
        out.push_str(&format!(",{:03}", g));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_treats_digits_as_cents() {
        assert_eq!(format_currency("12345"), "$123.45");
    }

    #[test]
    fn format_empty_is_zero() {
        assert_eq!(format_currency(""), "$0.00");
    }

    #[test]
    fn format_ignores_non_digits() {
        assert_eq!(format_currency("$1,234.56"), "$1,234.56");
        assert_eq!(format_currency("abc9x9"), "$0.99");
    }

    #[test]
    fn format_groups_thousands() {
        assert_eq!(format_currency("123456789"), "$1,234,567.89");
    }

    #[test]
    fn sanitize_strips_symbols_and_separators() {
        assert_eq!(sanitize_salary("$1,234.56"), "1234.56");
    }

    #[test]
    fn sanitize_collapses_extra_dots() {
        assert_eq!(sanitize_salary("1.2.3.4"), "1.234");
    }

    #[test]
    fn sanitize_empty_is_empty() {
        assert_eq!(sanitize_salary(""), "");
    }

    // `sanitize(format(x))` precisa ser estável no valor em centavos.
    #[test]
    fn round_trip_is_cents_accurate() {
        for raw in ["0", "1", "99", "100", "12345", "999999999"] {
            let formatted = format_currency(raw);
            let sanitized = sanitize_salary(&formatted);
            let again = format_currency(&sanitized.replace('.', ""));
            assert_eq!(formatted, again, "raw = {raw}");
        }
    }

    #[test]
    fn parse_salary_handles_empty_and_decimal() {
        assert_eq!(parse_salary(""), Some(Decimal::ZERO));
        assert_eq!(parse_salary("1234.56"), Decimal::from_str("1234.56").ok());
        assert_eq!(parse_salary("not a number"), None);
    }
}
