//! Currency symbols and money formatting

use crate::config::DisplayContext;
use crate::models::Money;

/// Display symbol for an ISO currency code, falling back to the code itself
pub fn currency_symbol(code: &str) -> String {
    let code = code.trim().to_uppercase();
    let symbol = match code.as_str() {
        "EUR" => "€",
        "USD" | "CAD" | "AUD" => "$",
        "GBP" => "£",
        "JPY" => "¥",
        "CHF" => "CHF ",
        "XOF" | "XAF" => "FCFA ",
        "MAD" => "MAD ",
        _ => return format!("{} ", code),
    };
    symbol.to_string()
}

/// Format an amount with the context's currency symbol and two decimals
pub fn format_money(amount: Money, ctx: &DisplayContext) -> String {
    amount.format_with_symbol(&currency_symbol(&ctx.currency_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(code: &str) -> DisplayContext {
        DisplayContext {
            currency_code: code.to_string(),
            ..DisplayContext::default()
        }
    }

    #[test]
    fn test_known_symbols() {
        assert_eq!(currency_symbol("eur"), "€");
        assert_eq!(currency_symbol("USD"), "$");
        assert_eq!(currency_symbol("GBP"), "£");
        assert_eq!(currency_symbol("XOF"), "FCFA ");
    }

    #[test]
    fn test_unknown_code_falls_back() {
        assert_eq!(currency_symbol("sek"), "SEK ");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Money::from_cents(123456), &ctx("EUR")), "€1234.56");
        assert_eq!(format_money(Money::from_cents(-50), &ctx("CHF")), "-CHF 0.50");
        assert_eq!(format_money(Money::parse("0.005").unwrap(), &ctx("USD")), "$0.01");
    }
}
