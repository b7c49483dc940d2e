//! Odds Conversion
//!
//! American odds are the quoting convention every calculator accepts. All
//! of them reduce a quote to decimal odds first:
//!
//! ```text
//!     a > 0:  d = a / 100 + 1
//!     a < 0:  d = 100 / |a| + 1
//! ```
//!
//! Where:
//!     a = American odds (+150 pays 150 per 100 staked, -110 needs 110 to win 100)
//!     d = decimal odds (total return per unit staked, stake included)
//!
//! A quote of 0 has no meaning, so `AmericanOdds` cannot hold one.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Returned when a zero quote is turned into `AmericanOdds`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("American odds cannot be zero")]
pub struct ZeroOdds;

/// A nonzero American odds quote
///
/// Values inside (-100, 100) are not quoted by books but are accepted,
/// they still convert to decimal odds above 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AmericanOdds(i32);

impl AmericanOdds {
    /// Create a quote, `None` for zero
    pub fn new(value: i32) -> Option<Self> {
        Self::try_from(value).ok()
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Decimal odds for this quote, always > 1
    ///
    /// # Examples
    /// ```
    /// use picks::core::odds::AmericanOdds;
    /// let even = AmericanOdds::new(100).unwrap();
    /// assert_eq!(even.decimal(), 2.0);
    /// let fav = AmericanOdds::new(-200).unwrap();
    /// assert_eq!(fav.decimal(), 1.5);
    /// ```
    pub fn decimal(self) -> f64 {
        let a = self.0 as f64;
        if self.0 > 0 {
            a / 100.0 + 1.0
        } else {
            100.0 / a.abs() + 1.0
        }
    }

    /// Break-even win rate in percent
    pub fn implied_probability(self) -> f64 {
        implied_probability(self)
    }

    /// Net odds as a reduced fraction, e.g. +150 -> (3, 2), -110 -> (10, 11)
    pub fn fractional(self) -> (u32, u32) {
        let abs = self.0.unsigned_abs();
        let (num, den) = if self.0 > 0 { (abs, 100) } else { (100, abs) };
        let g = gcd(num, den);
        (num / g, den / g)
    }
}

impl TryFrom<i32> for AmericanOdds {
    type Error = ZeroOdds;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(ZeroOdds)
        } else {
            Ok(Self(value))
        }
    }
}

impl From<AmericanOdds> for i32 {
    fn from(odds: AmericanOdds) -> Self {
        odds.0
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Implied probability (percent) of a quote
///
/// This is the win rate at which a bet at this price breaks even.
///
/// # Examples
/// ```
/// use picks::core::odds::{implied_probability, AmericanOdds};
/// let p = implied_probability(AmericanOdds::new(-110).unwrap());
/// assert!((p - 52.38).abs() < 0.01);
/// ```
pub fn implied_probability(odds: AmericanOdds) -> f64 {
    (1.0 / odds.decimal()) * 100.0
}

/// Convert decimal odds back to the nearest American quote
///
/// Returns `None` for decimal odds at or below 1 (no payout) and for
/// prices too short to express as an `i32` quote.
pub fn decimal_to_american(decimal: f64) -> Option<AmericanOdds> {
    if !decimal.is_finite() || decimal <= 1.0 {
        return None;
    }

    let american = if decimal >= 2.0 {
        ((decimal - 1.0) * 100.0).round()
    } else {
        (-100.0 / (decimal - 1.0)).round()
    };

    if american.abs() > i32::MAX as f64 {
        return None;
    }

    AmericanOdds::new(american as i32)
}

/// Fair American odds for a win probability given in percent
pub fn probability_to_american(probability: f64) -> Option<AmericanOdds> {
    if !(probability > 0.0 && probability < 100.0) {
        return None;
    }
    decimal_to_american(100.0 / probability)
}

/// One quote rendered in every format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsConversion {
    pub american: AmericanOdds,
    pub decimal: f64,
    pub fractional: String,
    pub implied_probability: f64,
}

/// Odds converter
pub fn convert(odds: AmericanOdds) -> OddsConversion {
    let (num, den) = odds.fractional();
    OddsConversion {
        american: odds,
        decimal: odds.decimal(),
        fractional: format!("{}/{}", num, den),
        implied_probability: implied_probability(odds),
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odds(v: i32) -> AmericanOdds {
        AmericanOdds::new(v).unwrap()
    }

    #[test]
    fn test_zero_odds_rejected() {
        assert!(AmericanOdds::new(0).is_none());
        assert_eq!(AmericanOdds::try_from(0), Err(ZeroOdds));
    }

    #[test]
    fn test_even_odds_symmetry() {
        assert_eq!(odds(100).decimal(), 2.0);
        assert_eq!(odds(-100).decimal(), 2.0);
    }

    #[test]
    fn test_decimal_underdog_and_favorite() {
        assert!((odds(150).decimal() - 2.5).abs() < 1e-12);
        assert!((odds(-120).decimal() - 1.833_333).abs() < 1e-6);
        assert!((odds(-110).decimal() - 1.909_091).abs() < 1e-6);
    }

    #[test]
    fn test_decimal_always_above_one() {
        for v in [-100_000, -5_000, -101, -100, -50, -1, 1, 50, 99, 100, 250, 100_000] {
            assert!(odds(v).decimal() > 1.0, "decimal({}) should exceed 1", v);
        }
    }

    #[test]
    fn test_sub_hundred_quotes_accepted() {
        // Not quoted in practice, still converts
        assert!((odds(50).decimal() - 1.5).abs() < 1e-12);
        assert!((odds(-50).decimal() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_implied_probability() {
        assert!((implied_probability(odds(-110)) - 52.380_952).abs() < 1e-4);
        assert!((implied_probability(odds(100)) - 50.0).abs() < 1e-12);
        assert!((implied_probability(odds(300)) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_fractional() {
        assert_eq!(odds(150).fractional(), (3, 2));
        assert_eq!(odds(-110).fractional(), (10, 11));
        assert_eq!(odds(100).fractional(), (1, 1));
        assert_eq!(odds(-200).fractional(), (1, 2));
    }

    #[test]
    fn test_decimal_to_american() {
        assert_eq!(decimal_to_american(2.5), Some(odds(150)));
        assert_eq!(decimal_to_american(2.0), Some(odds(100)));
        assert_eq!(decimal_to_american(1.5), Some(odds(-200)));
        assert_eq!(decimal_to_american(1.909_090_9), Some(odds(-110)));
        assert_eq!(decimal_to_american(1.0), None);
        assert_eq!(decimal_to_american(0.5), None);
        assert_eq!(decimal_to_american(f64::NAN), None);
    }

    #[test]
    fn test_probability_to_american() {
        assert_eq!(probability_to_american(50.0), Some(odds(100)));
        assert_eq!(probability_to_american(25.0), Some(odds(300)));
        assert_eq!(probability_to_american(75.0), Some(odds(-300)));
        assert_eq!(probability_to_american(0.0), None);
        assert_eq!(probability_to_american(100.0), None);
    }

    #[test]
    fn test_convert() {
        let c = convert(odds(-110));
        assert_eq!(c.american.value(), -110);
        assert_eq!(c.fractional, "10/11");
        assert!((c.implied_probability - 52.38).abs() < 0.01);
    }

    #[test]
    fn test_display() {
        assert_eq!(odds(150).to_string(), "+150");
        assert_eq!(odds(-110).to_string(), "-110");
    }

    #[test]
    fn test_serde_rejects_zero() {
        assert!(serde_json::from_str::<AmericanOdds>("0").is_err());
        let parsed: AmericanOdds = serde_json::from_str("-110").unwrap();
        assert_eq!(parsed, odds(-110));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "-110");
    }
}
