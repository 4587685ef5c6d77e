//! Number formatting for tables (es-AR: `.` thousands, `,` decimals)

/// Formats with a thousands separator and the given number of decimals:
/// `1234.567` with 2 decimals gives `1.234,57`
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.insert(0, '-');
    }

    match decimal_part {
        Some(d) => format!("{},{}", result, d),
        None => result,
    }
}

/// Money with two decimals, e.g. `1.234.567,89`
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Integer with thousands separator
pub fn format_integer(value: i64) -> String {
    format_number_with_decimals(value as f64, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234567.891), "1.234.567,89");
        assert_eq!(format_money(0.01), "0,01");
        assert_eq!(format_money(999.0), "999,00");
    }

    #[test]
    fn test_negative_values_keep_sign() {
        assert_eq!(format_money(-1500.5), "-1.500,50");
        assert_eq!(format_money(-0.001), "0,00");
    }

    #[test]
    fn test_format_integer() {
        assert_eq!(format_integer(1000), "1.000");
        assert_eq!(format_integer(12), "12");
    }
}
