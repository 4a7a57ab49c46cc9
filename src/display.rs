//! Currency and percentage formatting for text output

/// Currency symbol prefixed to amounts
pub const CURRENCY_SYMBOL: &str = "₹";

/// Whole-rupee amount with thousands separators, e.g. `₹1,234,567`
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}{}", CURRENCY_SYMBOL, amount);
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}{}{}", sign, CURRENCY_SYMBOL, group_thousands(&digits))
}

/// Percentage with a fixed number of decimals, e.g. `60.0%`
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// Text progress bar for a 0-100 percentage
pub fn progress_bar(percent: f64, width: usize) -> String {
    let fraction = (percent / 100.0).max(0.0).min(1.0);
    let filled = (fraction * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(999.4), "₹999");
        assert_eq!(format_currency(120_000.0), "₹120,000");
        assert_eq!(format_currency(1_234_567.89), "₹1,234,568");
        assert_eq!(format_currency(-56_000.0), "-₹56,000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(60.0, 1), "60.0%");
        assert_eq!(format_percent(33.333, 0), "33%");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(50.0, 10), "[#####-----]");
        assert_eq!(progress_bar(150.0, 4), "[####]");
        assert_eq!(progress_bar(-3.0, 4), "[----]");
    }
}
