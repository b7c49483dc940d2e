//! Expected value of a single wager
//!
//! ```text
//!     win = stake * (d - 1)
//!     EV  = p * win - (1 - p) * stake
//!     ROI = EV / stake * 100
//! ```
//!
//! Where p is the bettor's estimated win probability (percent / 100).

use super::odds::AmericanOdds;
use serde::{Deserialize, Serialize};

/// Expected value estimate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpectedValue {
    pub win_amount: f64,
    pub ev: f64,
    pub roi: f64,
    /// Break-even probability of the quote, percent
    pub implied_probability: f64,
    /// Estimated minus implied probability, percentage points
    pub edge: f64,
}

impl ExpectedValue {
    pub fn is_positive(&self) -> bool {
        self.ev > 0.0
    }
}

/// Compute EV, `None` unless probability and stake are both positive
pub fn evaluate_expected_value(
    odds: AmericanOdds,
    probability: f64,
    stake: f64,
) -> Option<ExpectedValue> {
    if !(probability > 0.0) || !(stake > 0.0) {
        return None;
    }

    let d = odds.decimal();
    let p = probability / 100.0;
    let win_amount = stake * (d - 1.0);
    let ev = p * win_amount - (1.0 - p) * stake;
    let implied_probability = odds.implied_probability();

    Some(ExpectedValue {
        win_amount,
        ev,
        roi: ev / stake * 100.0,
        implied_probability,
        edge: probability - implied_probability,
    })
}

/// EV calculator, zero EV and ROI when any input is missing
///
/// # Examples
/// ```
/// use picks::core::ev::calculate_expected_value;
/// use picks::core::odds::AmericanOdds;
/// let ev = calculate_expected_value(AmericanOdds::new(100), 55.0, 100.0);
/// assert!((ev.ev - 10.0).abs() < 1e-9);
/// assert!((ev.roi - 10.0).abs() < 1e-9);
/// ```
pub fn calculate_expected_value(
    odds: Option<AmericanOdds>,
    probability: f64,
    stake: f64,
) -> ExpectedValue {
    odds.and_then(|o| evaluate_expected_value(o, probability, stake))
        .unwrap_or_default()
}
