//! Form input parsing
//!
//! Calculator fields arrive as raw text. Blank, non-numeric and zero
//! values all count as "absent", which every calculator turns into a
//! zero result instead of an error.

use super::odds::AmericanOdds;

/// Parse an American odds field ("+150", "-110", " 200 ")
///
/// Zero is treated as absent, same as a blank field. At most one sign is
/// accepted, so "+-110" and "++150" are absent too.
pub fn parse_odds(raw: &str) -> Option<AmericanOdds> {
    let trimmed = raw.trim();
    let digits = match trimmed.strip_prefix('+') {
        Some(rest) if rest.starts_with(['+', '-']) => return None,
        Some(rest) => rest,
        None => trimmed,
    };
    let value: i32 = digits.parse().ok()?;
    AmericanOdds::new(value)
}

/// Parse a monetary amount (stake or bankroll)
///
/// Accepts a leading currency sign and thousands separators. Zero,
/// negative and non-finite values are absent.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let value: f64 = cleaned.parse().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Parse a win probability given in percent
///
/// A trailing '%' is allowed. Values outside (0, 100] are absent.
pub fn parse_percent(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let value: f64 = digits.parse().ok()?;
    if value.is_finite() && value > 0.0 && value <= 100.0 {
        Some(value)
    } else {
        None
    }
}

/// Parse a signed decimal field such as a spread line or a score
///
/// Unlike amounts, zero is a legitimate value here (a pick'em line).
pub fn parse_signed(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let value: f64 = digits.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Parse every parlay leg, dropping blank and invalid entries
///
/// Insertion order is kept.
pub fn parse_legs<S: AsRef<str>>(raw: &[S]) -> Vec<AmericanOdds> {
    raw.iter().filter_map(|leg| parse_odds(leg.as_ref())).collect()
}
