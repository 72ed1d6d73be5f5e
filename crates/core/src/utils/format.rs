use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const MILLION: Decimal = dec!(1_000_000);
const THOUSAND: Decimal = dec!(1_000);

/// Format a metric for display with optional prefix/suffix and compact
/// thousand/million scaling.
///
/// Values at or above one million render as `M`, at or above one thousand
/// as `K`, everything else unscaled. `decimal_places` controls the rendered
/// precision after scaling.
///
/// # Arguments
/// * `number` - The value to format
/// * `prefix` - String prefix (e.g., `$`)
/// * `suffix` - String suffix (e.g., `%`)
/// * `decimal_places` - Digits to keep after the decimal point
pub fn format_number(number: Decimal, prefix: &str, suffix: &str, decimal_places: u32) -> String {
    let magnitude = number.abs();
    let (scaled, unit) = if magnitude >= MILLION {
        (number / MILLION, "M")
    } else if magnitude >= THOUSAND {
        (number / THOUSAND, "K")
    } else {
        (number, "")
    };
    let mut rounded = scaled.round_dp(decimal_places);
    rounded.rescale(decimal_places);
    format!("{prefix}{rounded}{unit}{suffix}")
}
