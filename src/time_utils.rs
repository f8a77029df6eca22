/// Format a countdown in whole seconds as `h:mm:ss`, or `m:ss` under an hour.
pub fn format_countdown(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Format a USD price for the board. Absent or invalid data renders as the
/// `$0.00` placeholder instead of blocking rendering.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() || price <= 0.0 {
        return "$0.00".to_string();
    }
    let cents = (price * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}.{:02}", grouped, frac)
}

/// Signed percentage, two decimals.
pub fn format_percent(percent: f64) -> String {
    format!("{:+.2}%", percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_formats() {
        assert_eq!(format_countdown(0), "0:00");
        assert_eq!(format_countdown(59), "0:59");
        assert_eq!(format_countdown(900), "15:00");
        assert_eq!(format_countdown(3600), "1:00:00");
        assert_eq!(format_countdown(86400), "24:00:00");
        assert_eq!(format_countdown(3725), "1:02:05");
    }

    #[test]
    fn price_formats_with_separators() {
        assert_eq!(format_price(67000.5), "$67,000.50");
        assert_eq!(format_price(999.99), "$999.99");
        assert_eq!(format_price(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn invalid_price_renders_placeholder() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(-5.0), "$0.00");
        assert_eq!(format_price(f64::NAN), "$0.00");
    }

    #[test]
    fn percent_is_signed() {
        assert_eq!(format_percent(1.234), "+1.23%");
        assert_eq!(format_percent(-0.5), "-0.50%");
    }
}
