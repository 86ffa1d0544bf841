//! Price display
//!
//! Prices are plain numbers of Rand. They render with comma thousands
//! grouping and at most three fraction digits, trailing zeros dropped.

/// Currency marker placed before every price
pub const CURRENCY_PREFIX: &str = "R";

/// Format a price for display, e.g. `15000.0` -> `R15,000`.
///
/// No validation: negative prices keep their minus sign after the prefix.
pub fn format_price(price: f64) -> String {
    let mut out = String::from(CURRENCY_PREFIX);

    if price.is_nan() {
        out.push_str("NaN");
        return out;
    }
    if price.is_infinite() {
        if price < 0.0 {
            out.push('-');
        }
        out.push('∞');
        return out;
    }

    // Split before scaling so magnitudes beyond u64 keep every digit
    let abs = price.abs();
    let mut whole = abs.trunc();
    let mut frac = ((abs - whole) * 1000.0).round() as u32;
    if frac == 1000 {
        whole += 1.0;
        frac = 0;
    }

    if price < 0.0 && (whole != 0.0 || frac != 0) {
        out.push('-');
    }
    out.push_str(&group_thousands(&format!("{:.0}", whole)));

    if frac != 0 {
        let digits = format!("{:03}", frac);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }

    out
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
