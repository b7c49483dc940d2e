//! Parlay payout
//!
//! A parlay wins only if every leg wins, so the combined price is the
//! product of the legs' decimal odds.

use super::odds::{decimal_to_american, AmericanOdds};
use serde::{Deserialize, Serialize};

/// Minimum legs for a parlay to be priced
pub const MIN_LEGS: usize = 2;

/// Parlay pricing result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParlayResult {
    pub legs: usize,
    pub combined_decimal: f64,
    /// American quote equivalent to the combined price
    pub combined_american: Option<AmericanOdds>,
    pub payout: f64,
    pub profit: f64,
}

/// Price a parlay
///
/// Returns `None` when fewer than two legs are given or the stake is not
/// positive. Leg order does not matter.
pub fn evaluate_parlay(legs: &[AmericanOdds], stake: f64) -> Option<ParlayResult> {
    if legs.len() < MIN_LEGS || !(stake > 0.0) {
        return None;
    }

    let combined_decimal: f64 = legs.iter().map(|leg| leg.decimal()).product();
    let payout = stake * combined_decimal;

    Some(ParlayResult {
        legs: legs.len(),
        combined_decimal,
        combined_american: decimal_to_american(combined_decimal),
        payout,
        profit: payout - stake,
    })
}

/// Price a parlay, all-zero when the input is insufficient
///
/// # Examples
/// ```
/// use picks::core::odds::AmericanOdds;
/// use picks::core::parlay::calculate_parlay;
/// let leg = AmericanOdds::new(-110).unwrap();
/// let result = calculate_parlay(&[leg, leg], 100.0);
/// assert!((result.payout - 364.46).abs() < 0.01);
///
/// let single = calculate_parlay(&[leg], 100.0);
/// assert_eq!(single.payout, 0.0);
/// ```
pub fn calculate_parlay(legs: &[AmericanOdds], stake: f64) -> ParlayResult {
    evaluate_parlay(legs, stake).unwrap_or_default()
}
