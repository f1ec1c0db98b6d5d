//! Formatting helpers for presenting portfolio values.

use time::{macros::format_description, Date};

/// Two decimals with thousands separators, e.g. `182,345.12`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Signed change, compacted to thousands from 1k up: `+1.2k`, `-3.4k`, `+12.5`.
pub fn format_change(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1000.0 {
        let sign = if value > 0.0 { '+' } else { '-' };
        format!("{sign}{:.1}k", abs / 1000.0)
    } else if value > 0.0 {
        format!("+{value:.1}")
    } else {
        format!("{value:.1}")
    }
}

/// Axis label in thousands, e.g. `182.35K`.
pub fn format_axis_value(value: f64) -> String {
    format!("{:.2}K", value / 1000.0)
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn format_score(score: u8) -> String {
    format!("{score}%")
}

/// Tooltip date, e.g. `Oct 19, 2026`.
pub fn format_date(date: Date) -> String {
    date.format(&format_description!(
        "[month repr:short] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn numbers_are_grouped() {
        assert_eq!(format_number(182345.123), "182,345.12");
        assert_eq!(format_number(999.5), "999.50");
        assert_eq!(format_number(1_000_000.0), "1,000,000.00");
        assert_eq!(format_number(-1234.5), "-1,234.50");
        assert_eq!(format_number(0.0), "0.00");
    }

    #[test]
    fn changes_are_compacted() {
        assert_eq!(format_change(1234.0), "+1.2k");
        assert_eq!(format_change(-3456.0), "-3.5k");
        assert_eq!(format_change(12.46), "+12.5");
        assert_eq!(format_change(-8.0), "-8.0");
    }

    #[test]
    fn axis_values_in_thousands() {
        assert_eq!(format_axis_value(182_346.0), "182.35K");
    }

    #[test]
    fn dates_are_short() {
        assert_eq!(format_date(date!(2026 - 10 - 19)), "Oct 19, 2026");
        assert_eq!(format_date(date!(2026 - 03 - 05)), "Mar 5, 2026");
    }
}
