/// Add thousands separators to a whole number of currency units
fn group_thousands(units: i64) -> String {
    let digits = units.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value with two decimals, e.g. `$1,234.50`
pub fn format_currency(value: f64, symbol: &str) -> String {
    let total_cents = (value.abs() * 100.0).round() as i64;
    let units = total_cents / 100;
    let cents = total_cents % 100;
    let sign = if value < 0.0 && total_cents > 0 { "-" } else { "" };

    format!("{}{}{}.{:02}", sign, symbol, group_thousands(units), cents)
}

/// Format a currency value in compact form (e.g., $2.1M, $450K, $50)
pub fn format_compact_currency(value: f64, symbol: &str) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}{}{:.1}M", sign, symbol, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}{}{:.0}K", sign, symbol, abs_value / 1_000.0)
    } else {
        format!("{}{}{:.0}", sign, symbol, abs_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(14.44, "$"), "$14.44");
        assert_eq!(format_currency(1234.5, "$"), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0, "€"), "€1,000,000.00");
        assert_eq!(format_currency(-2.5, "$"), "-$2.50");
    }

    #[test]
    fn test_format_currency_carries_rounded_cents() {
        assert_eq!(format_currency(9.999, "$"), "$10.00");
    }

    #[test]
    fn test_format_compact_currency() {
        assert_eq!(format_compact_currency(50.0, "$"), "$50");
        assert_eq!(format_compact_currency(450_000.0, "$"), "$450K");
        assert_eq!(format_compact_currency(2_100_000.0, "$"), "$2.1M");
    }
}
