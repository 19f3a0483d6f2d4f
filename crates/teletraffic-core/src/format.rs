//! Display formatting for calculation results.

/// Rounds `value` half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round() / scale
}

/// Erlangs with three decimals, after rounding to four.
pub fn format_erlangs(erlangs: f64) -> String {
    format!("{:.3}", round_to(erlangs, 4))
}

/// Probability as a percentage with two decimals, e.g. `0.0123` -> `1.23%`.
pub fn format_percentage(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Kbps rounded to two decimals with comma-grouped thousands.
pub fn format_kbps(kbps: f64) -> String {
    group_thousands(&format!("{:.2}", round_to(kbps, 2)))
}

/// Inserts commas every three digits into the integer part of a decimal string.
pub fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(number.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
