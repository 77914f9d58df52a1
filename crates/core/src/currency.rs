//! Currency rendering for console and SMS output.
//!
//! Display only. Deal comparisons are always performed on the raw numeric
//! total, never on the formatted string.

/// Format a peso total as `$N,NNN.NN`.
pub fn format_mxn(total: f64) -> String {
    let cents = (total.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if total < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_whole_amounts() {
        assert_eq!(format_mxn(5000.0), "$5,000.00");
        assert_eq!(format_mxn(3500.0), "$3,500.00");
        assert_eq!(format_mxn(0.0), "$0.00");
        assert_eq!(format_mxn(999.0), "$999.00");
        assert_eq!(format_mxn(1_234_567.0), "$1,234,567.00");
    }

    #[test]
    fn test_format_fractional_amounts() {
        assert_eq!(format_mxn(4999.5), "$4,999.50");
        assert_eq!(format_mxn(0.99), "$0.99");
        assert_eq!(format_mxn(1000.005), "$1,000.01");
    }
}
