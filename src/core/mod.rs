//! Betting math: odds conversion and the calculators built on it

pub mod arbitrage;
pub mod ev;
pub mod input;
pub mod kelly;
pub mod odds;
pub mod parlay;
pub mod spread;

// Re-export commonly used types
pub use arbitrage::{calculate_arbitrage, ArbitrageResult};
pub use ev::{calculate_expected_value, ExpectedValue};
pub use kelly::{calculate_kelly, calculate_kelly_fraction, KellyResult, KellySizer};
pub use odds::{convert, implied_probability, AmericanOdds, OddsConversion};
pub use parlay::{calculate_parlay, ParlayResult};
pub use spread::{calculate_spread, FinalScore, SpreadOutcome, SpreadResult};
