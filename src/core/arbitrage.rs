//! Two-way arbitrage
//!
//! Backs both sides of an event with one total stake:
//!     bet1 = stake / (1 + d2 / (d1 - 1))
//!     bet2 = stake - bet1
//!     profit = min(bet1 * d1, bet2 * d2) - stake
//!
//! An arbitrage exists when that worst-case profit is positive, i.e. the
//! two implied probabilities sum to less than 100%.

use super::odds::AmericanOdds;
use serde::{Deserialize, Serialize};

/// Stake split across two opposing outcomes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArbitrageResult {
    pub bet1: f64,
    pub bet2: f64,
    pub payout1: f64,
    pub payout2: f64,
    /// Guaranteed profit (worst of the two payouts minus stake)
    pub profit: f64,
    pub profit_pct: f64,
    /// Sum of both sides' implied probabilities, in percent
    pub total_implied: f64,
    pub is_arb: bool,
}

/// Split a stake across two quotes, `None` if the stake is not positive
pub fn evaluate_arbitrage(
    odds1: AmericanOdds,
    odds2: AmericanOdds,
    stake: f64,
) -> Option<ArbitrageResult> {
    if !(stake > 0.0) {
        return None;
    }

    let d1 = odds1.decimal();
    let d2 = odds2.decimal();

    let bet1 = stake / (1.0 + d2 / (d1 - 1.0));
    let bet2 = stake - bet1;

    let payout1 = bet1 * d1;
    let payout2 = bet2 * d2;
    let profit = payout1.min(payout2) - stake;

    Some(ArbitrageResult {
        bet1,
        bet2,
        payout1,
        payout2,
        profit,
        profit_pct: profit / stake * 100.0,
        total_implied: (1.0 / d1 + 1.0 / d2) * 100.0,
        is_arb: profit > 0.0,
    })
}

/// Arbitrage calculator with the zero-result fallback
///
/// Missing quotes or stake give an all-zero result with `is_arb = false`.
pub fn calculate_arbitrage(
    odds1: Option<AmericanOdds>,
    odds2: Option<AmericanOdds>,
    stake: f64,
) -> ArbitrageResult {
    match (odds1, odds2) {
        (Some(o1), Some(o2)) => evaluate_arbitrage(o1, o2, stake).unwrap_or_default(),
        _ => ArbitrageResult::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odds(v: i32) -> AmericanOdds {
        AmericanOdds::new(v).unwrap()
    }

    #[test]
    fn test_arbitrage_exists() {
        let result = calculate_arbitrage(Some(odds(150)), Some(odds(-120)), 1000.0);
        assert!(result.is_arb);
        assert!(result.profit > 0.0);
        assert!((result.bet1 - 450.0).abs() < 1e-6);
        assert!((result.bet2 - 550.0).abs() < 1e-6);
        assert!((result.bet1 + result.bet2 - 1000.0).abs() < 1e-9);
        assert!((result.total_implied - 94.545_45).abs() < 1e-3);
    }

    #[test]
    fn test_no_arbitrage_with_juice() {
        let result = calculate_arbitrage(Some(odds(-110)), Some(odds(-110)), 1000.0);
        assert!(!result.is_arb);
        assert!(result.profit < 0.0);
        assert!(result.total_implied > 100.0);
    }

    #[test]
    fn test_missing_inputs() {
        assert_eq!(
            calculate_arbitrage(None, Some(odds(-120)), 1000.0),
            ArbitrageResult::default()
        );
        assert_eq!(
            calculate_arbitrage(Some(odds(150)), None, 1000.0),
            ArbitrageResult::default()
        );
        let zero_stake = calculate_arbitrage(Some(odds(150)), Some(odds(-120)), 0.0);
        assert_eq!(zero_stake, ArbitrageResult::default());
        assert!(!zero_stake.is_arb);
    }
}
