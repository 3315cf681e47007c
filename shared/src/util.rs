//! Display helpers for monetary amounts

/// Format an amount as a currency string
///
/// # Examples
///
/// ```
/// use shared::util::format_currency;
///
/// assert_eq!(format_currency(12.5), "$12.50");
/// assert_eq!(format_currency(0.0), "$0.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}
