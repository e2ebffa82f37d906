/// Render `amount` as dollars with two decimals and thousands separators.
///
/// ```rust
/// assert_eq!(loancalc::format_currency(1234567.891), "$1,234,567.89");
/// assert_eq!(loancalc::format_currency(-42.0), "-$42.00");
/// ```
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let formatted = format!("{:.2}", amount.abs());
    let (whole, fraction) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    // Amounts that round to zero carry no sign
    let is_zero = formatted.bytes().all(|byte| matches!(byte, b'0' | b'.'));
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    format!("{sign}${grouped}.{fraction}")
}
