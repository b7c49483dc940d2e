//! Picks - betting calculators for a sports picks site
//!
//! This library provides:
//! - American/decimal/fractional odds conversion and implied probability
//! - Parlay, arbitrage, expected value, Kelly and point spread calculators
//! - Calculator forms that turn raw user input into results
//! - Locale dictionaries with completeness verification
//! - A thin client for a generative-language API (`generate` feature)
//!
//! # Example
//!
//! ```
//! use picks::core::kelly::KellySizer;
//! use picks::core::odds::AmericanOdds;
//! use picks::core::parlay::calculate_parlay;
//!
//! let leg = AmericanOdds::new(-110).unwrap();
//! let parlay = calculate_parlay(&[leg, leg], 100.0);
//! println!("Parlay pays {:.2}", parlay.payout);
//!
//! let sizing = KellySizer::quarter().size(AmericanOdds::new(200), 40.0, 10_000.0);
//! println!("Recommended stake: {:.2}", sizing.stake);
//! ```

pub mod calculators;
pub mod core;
pub mod error;
pub mod translations;

// Generation client (only available with generate feature)
#[cfg(feature = "generate")]
pub mod generate;

// Re-export commonly used types
pub use calculators::{CalculatorDesk, CalculatorKind};
pub use self::core::{
    AmericanOdds, ArbitrageResult, ExpectedValue, KellyResult, OddsConversion, ParlayResult,
    SpreadOutcome, SpreadResult,
};
pub use error::TranslationError;
pub use translations::{Lookup, Translations};
