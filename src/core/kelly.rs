//! Kelly Criterion Bet Sizing
//!
//! Bankroll fraction to wager given a perceived edge.
//!
//! The Kelly criterion formula:
//!     f* = (b*p - q) / b = (p*odds - 1) / (odds - 1)
//!
//! Where:
//!     f* = fraction of bankroll to bet
//!     b = odds - 1 (net odds)
//!     p = probability of winning
//!     q = 1 - p (probability of losing)
//!     odds = decimal odds (e.g., 3.0 for a +200 quote)
//!
//! A negative f* means there is no edge. It is reported as 0, never as a
//! recommendation to lay the bet.

use super::odds::AmericanOdds;
use serde::{Deserialize, Serialize};

/// Kelly sizing recommendation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KellyResult {
    pub raw_fraction: f64, // Unclamped full Kelly
    pub fraction: f64,     // Floored at 0, multiplier applied
    pub percent: f64,      // fraction * 100
    pub stake: f64,
}

impl KellyResult {
    pub fn has_edge(&self) -> bool {
        self.raw_fraction > 0.0
    }
}

/// Calculate Kelly fraction for a single bet
///
/// # Arguments
/// * `probability` - Estimated probability of winning (0-1)
/// * `odds` - Decimal odds
///
/// # Returns
/// Kelly fraction (negative if there is no edge)
///
/// # Examples
/// ```
/// use picks::core::kelly::calculate_kelly_fraction;
/// let kelly = calculate_kelly_fraction(0.40, 3.0);
/// assert!((kelly - 0.10).abs() < 1e-9);
/// ```
pub fn calculate_kelly_fraction(probability: f64, odds: f64) -> f64 {
    if odds <= 1.0 {
        return 0.0;
    }

    let b = odds - 1.0;
    (b * probability - (1.0 - probability)) / b
}

/// Kelly stake sizer
///
/// Supports:
/// - Full Kelly (multiplier 1.0, the default)
/// - Fractional Kelly (0.5 = half Kelly, 0.25 = quarter Kelly)
#[derive(Debug, Clone)]
pub struct KellySizer {
    pub multiplier: f64,
}

impl KellySizer {
    /// Create a sizer using a fraction of full Kelly
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    pub fn full() -> Self {
        Self::new(1.0)
    }

    pub fn half() -> Self {
        Self::new(0.5)
    }

    pub fn quarter() -> Self {
        Self::new(0.25)
    }

    /// Size a bet, `None` unless probability and bankroll are positive
    pub fn evaluate(
        &self,
        odds: AmericanOdds,
        probability: f64,
        bankroll: f64,
    ) -> Option<KellyResult> {
        if !(probability > 0.0) || !(bankroll > 0.0) {
            return None;
        }

        let raw_fraction = calculate_kelly_fraction(probability / 100.0, odds.decimal());
        let fraction = raw_fraction.max(0.0) * self.multiplier.max(0.0);

        Some(KellyResult {
            raw_fraction,
            fraction,
            percent: fraction * 100.0,
            stake: fraction * bankroll,
        })
    }

    /// Size a bet with the zero-result fallback for missing input
    pub fn size(&self, odds: Option<AmericanOdds>, probability: f64, bankroll: f64) -> KellyResult {
        odds.and_then(|o| self.evaluate(o, probability, bankroll))
            .unwrap_or_default()
    }
}

impl Default for KellySizer {
    fn default() -> Self {
        Self::full()
    }
}

/// Full-Kelly sizing for an American quote
///
/// # Examples
/// ```
/// use picks::core::kelly::calculate_kelly;
/// use picks::core::odds::AmericanOdds;
/// let result = calculate_kelly(AmericanOdds::new(200), 40.0, 10_000.0);
/// assert!((result.stake - 1000.0).abs() < 1e-6);
/// assert!((result.percent - 10.0).abs() < 1e-9);
/// ```
pub fn calculate_kelly(odds: Option<AmericanOdds>, probability: f64, bankroll: f64) -> KellyResult {
    KellySizer::full().size(odds, probability, bankroll)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odds(v: i32) -> AmericanOdds {
        AmericanOdds::new(v).unwrap()
    }

    #[test]
    fn test_kelly_fraction_positive_edge() {
        // p * odds = 0.25 * 5.0 = 1.25
        let kelly = calculate_kelly_fraction(0.25, 5.0);
        assert!((kelly - 0.0625).abs() < 0.0001);
    }

    #[test]
    fn test_kelly_fraction_negative_edge() {
        let kelly = calculate_kelly_fraction(0.10, 5.0);
        assert!(kelly < 0.0);
    }

    #[test]
    fn test_kelly_fraction_no_payout() {
        assert_eq!(calculate_kelly_fraction(0.25, 1.0), 0.0);
    }

    #[test]
    fn test_kelly_plus_200() {
        // d = 3.0, b = 2.0, f = (2*0.4 - 0.6)/2 = 0.1
        let result = calculate_kelly(Some(odds(200)), 40.0, 10_000.0);
        assert!((result.raw_fraction - 0.1).abs() < 1e-9);
        assert!((result.fraction - 0.1).abs() < 1e-9);
        assert!((result.percent - 10.0).abs() < 1e-9);
        assert!((result.stake - 1000.0).abs() < 1e-6);
        assert!(result.has_edge());
    }

    #[test]
    fn test_negative_kelly_floored() {
        // 30% on +200 has no edge: f = (0.6 - 0.7)/2 = -0.05
        let result = calculate_kelly(Some(odds(200)), 30.0, 10_000.0);
        assert!(result.raw_fraction < 0.0);
        assert_eq!(result.fraction, 0.0);
        assert_eq!(result.percent, 0.0);
        assert_eq!(result.stake, 0.0);
        assert!(!result.has_edge());
    }

    #[test]
    fn test_fractional_kelly() {
        let full = KellySizer::full().size(Some(odds(200)), 40.0, 10_000.0);
        let half = KellySizer::half().size(Some(odds(200)), 40.0, 10_000.0);
        let quarter = KellySizer::quarter().size(Some(odds(200)), 40.0, 10_000.0);
        assert!((half.stake - full.stake / 2.0).abs() < 1e-6);
        assert!((quarter.stake - full.stake / 4.0).abs() < 1e-6);
        // Raw fraction is reported unscaled
        assert!((quarter.raw_fraction - full.raw_fraction).abs() < 1e-12);
    }

    #[test]
    fn test_missing_inputs() {
        let zero = KellyResult::default();
        assert_eq!(calculate_kelly(None, 40.0, 10_000.0), zero);
        assert_eq!(calculate_kelly(Some(odds(200)), 0.0, 10_000.0), zero);
        assert_eq!(calculate_kelly(Some(odds(200)), 40.0, 0.0), zero);
    }

    #[test]
    fn test_default_is_full_kelly() {
        assert!((KellySizer::default().multiplier - 1.0).abs() < 1e-12);
    }
}
