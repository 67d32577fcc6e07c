//! Number formatting for chart labels.

use crate::constants::chart::MILLIONS_THRESHOLD;

/// Formats a value as whole thousands, truncating toward zero.
///
/// # Example
/// ```
/// use goalscope::charts::formatting::thousands_formatter;
///
/// assert_eq!(thousands_formatter(25_900.0), "25k");
/// ```
pub fn thousands_formatter(value: f64) -> String {
    format!("{}k", (value / 1000.0).trunc() as i64)
}

/// Formats a value in millions with a fixed number of decimals.
///
/// # Example
/// ```
/// use goalscope::charts::formatting::millions_formatter;
///
/// assert_eq!(millions_formatter(2_345_678.0, 1), "2.3M");
/// assert_eq!(millions_formatter(2_345_678.0, 0), "2M");
/// ```
pub fn millions_formatter(value: f64, decimals: usize) -> String {
    format!("{:.*}M", decimals, value * 1e-6)
}

/// Share of `total` as a percentage with one decimal, `0.0%` for a zero total
pub fn format_percentage(value: f64, total: f64) -> String {
    if total == 0.0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", 100.0 * value / total)
}

/// Plain value: integers without a fraction, other values as is
pub fn format_plain(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Annotation lines for a vertical bar: the value (abbreviated to millions
/// above one million) and, when a total is given, its share on a second line.
pub fn value_label_lines(value: f64, total: Option<f64>) -> Vec<String> {
    let abbreviated = value > MILLIONS_THRESHOLD;
    match total {
        Some(total) => {
            let value_text = if abbreviated {
                millions_formatter(value, 1)
            } else {
                format!("{}", value.trunc() as i64)
            };
            vec![value_text, format!("({})", format_percentage(value, total))]
        }
        None if abbreviated => vec![millions_formatter(value, 1)],
        None => vec![format_plain(value)],
    }
}

/// Formats a number with `'` between thousands groups.
///
/// With `decimals == 0` the value is rounded to an integer. Otherwise it is
/// rounded to `decimals` places and trailing zeros are dropped, keeping at
/// least one decimal.
///
/// # Example
/// ```
/// use goalscope::charts::formatting::format_grouped;
///
/// assert_eq!(format_grouped(1_234_567.4, 0), "1'234'567");
/// assert_eq!(format_grouped(1_234.5, 2), "1'234.5");
/// assert_eq!(format_grouped(1_234.0, 2), "1'234.0");
/// ```
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = if decimals == 0 {
        format!("{value:.0}")
    } else {
        let fixed = format!("{value:.decimals$}");
        let trimmed = fixed.trim_end_matches('0');
        if trimmed.ends_with('.') {
            format!("{trimmed}0")
        } else {
            trimmed.to_string()
        }
    };

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push('\'');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_formatter_truncates() {
        assert_eq!(thousands_formatter(999.0), "0k");
        assert_eq!(thousands_formatter(1_000.0), "1k");
        assert_eq!(thousands_formatter(1_999.9), "1k");
        assert_eq!(thousands_formatter(-2_500.0), "-2k");
    }

    #[test]
    fn test_millions_formatter() {
        assert_eq!(millions_formatter(1_500_000.0, 0), "2M");
        assert_eq!(millions_formatter(1_250_000.0, 2), "1.25M");
        assert_eq!(millions_formatter(0.0, 1), "0.0M");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(1.0, 3.0), "33.3%");
        assert_eq!(format_percentage(5.0, 5.0), "100.0%");
        assert_eq!(format_percentage(0.0, 0.0), "0.0%");
    }

    #[test]
    fn test_value_labels_with_percent() {
        assert_eq!(
            value_label_lines(25.0, Some(100.0)),
            vec!["25".to_string(), "(25.0%)".to_string()]
        );
        assert_eq!(
            value_label_lines(2_500_000.0, Some(10_000_000.0)),
            vec!["2.5M".to_string(), "(25.0%)".to_string()]
        );
    }

    #[test]
    fn test_value_labels_without_percent() {
        assert_eq!(value_label_lines(42.0, None), vec!["42".to_string()]);
        assert_eq!(value_label_lines(4.5, None), vec!["4.5".to_string()]);
        // Exactly one million is not abbreviated
        assert_eq!(value_label_lines(1_000_000.0, None), vec!["1000000".to_string()]);
        assert_eq!(value_label_lines(1_000_001.0, None), vec!["1.0M".to_string()]);
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0, 0), "0");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(1_000.0, 0), "1'000");
        assert_eq!(format_grouped(123_456.6, 0), "123'457");
        assert_eq!(format_grouped(-1_234_567.0, 0), "-1'234'567");
        assert_eq!(format_grouped(1_234.567, 2), "1'234.57");
        assert_eq!(format_grouped(0.5, 3), "0.5");
    }
}
