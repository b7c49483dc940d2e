//! Calculator forms
//!
//! Each form holds the raw text a user typed into one calculator. Results
//! are recomputed from scratch on every call; nothing is cached between
//! edits. `evaluate` reports insufficient input as `None`, `compute`
//! turns that into the zero result the site displays.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::arbitrage::{evaluate_arbitrage, ArbitrageResult};
use crate::core::ev::{evaluate_expected_value, ExpectedValue};
use crate::core::input::{parse_amount, parse_legs, parse_odds, parse_percent, parse_signed};
use crate::core::kelly::{KellyResult, KellySizer};
use crate::core::odds::{convert, OddsConversion};
use crate::core::parlay::{evaluate_parlay, ParlayResult, MIN_LEGS};
use crate::core::spread::{calculate_spread, FinalScore, SpreadResult};

/// Calculators offered on the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    Converter,
    Parlay,
    Arbitrage,
    ExpectedValue,
    ImpliedProbability,
    Kelly,
    Spread,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 7] = [
        CalculatorKind::Converter,
        CalculatorKind::Parlay,
        CalculatorKind::Arbitrage,
        CalculatorKind::ExpectedValue,
        CalculatorKind::ImpliedProbability,
        CalculatorKind::Kelly,
        CalculatorKind::Spread,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CalculatorKind::Converter => "Odds Converter",
            CalculatorKind::Parlay => "Parlay Calculator",
            CalculatorKind::Arbitrage => "Arbitrage Calculator",
            CalculatorKind::ExpectedValue => "Expected Value",
            CalculatorKind::ImpliedProbability => "Implied Probability",
            CalculatorKind::Kelly => "Kelly Criterion",
            CalculatorKind::Spread => "Point Spread",
        }
    }
}

/// Odds converter input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConverterForm {
    pub odds: String,
}

impl ConverterForm {
    pub fn evaluate(&self) -> Option<OddsConversion> {
        parse_odds(&self.odds).map(convert)
    }
}

/// Parlay input, one text field per leg
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParlayForm {
    pub legs: Vec<String>,
    pub stake: String,
}

impl Default for ParlayForm {
    fn default() -> Self {
        Self {
            legs: vec![String::new(); MIN_LEGS],
            stake: String::new(),
        }
    }
}

impl ParlayForm {
    pub fn add_leg(&mut self) {
        self.legs.push(String::new());
    }

    /// Remove a leg row; the form never drops below two rows
    pub fn remove_leg(&mut self, index: usize) -> bool {
        if self.legs.len() <= MIN_LEGS || index >= self.legs.len() {
            return false;
        }
        self.legs.remove(index);
        true
    }

    pub fn evaluate(&self) -> Option<ParlayResult> {
        let legs = parse_legs(&self.legs);
        if legs.len() < self.legs.len() {
            debug!(
                "Ignoring {} blank or invalid parlay legs",
                self.legs.len() - legs.len()
            );
        }
        let stake = parse_amount(&self.stake)?;
        evaluate_parlay(&legs, stake)
    }

    pub fn compute(&self) -> ParlayResult {
        self.evaluate().unwrap_or_default()
    }
}

/// Two-way arbitrage input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArbitrageForm {
    pub bet1_odds: String,
    pub bet2_odds: String,
    pub stake: String,
}

impl ArbitrageForm {
    pub fn evaluate(&self) -> Option<ArbitrageResult> {
        let odds1 = parse_odds(&self.bet1_odds)?;
        let odds2 = parse_odds(&self.bet2_odds)?;
        let stake = parse_amount(&self.stake)?;
        evaluate_arbitrage(odds1, odds2, stake)
    }

    pub fn compute(&self) -> ArbitrageResult {
        self.evaluate().unwrap_or_default()
    }
}

/// Expected value input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedValueForm {
    pub odds: String,
    pub probability: String,
    pub stake: String,
}

impl ExpectedValueForm {
    pub fn evaluate(&self) -> Option<ExpectedValue> {
        let odds = parse_odds(&self.odds)?;
        let probability = parse_percent(&self.probability)?;
        let stake = parse_amount(&self.stake)?;
        evaluate_expected_value(odds, probability, stake)
    }

    pub fn compute(&self) -> ExpectedValue {
        self.evaluate().unwrap_or_default()
    }
}

/// Implied probability input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImpliedProbabilityForm {
    pub odds: String,
}

impl ImpliedProbabilityForm {
    /// Break-even probability in percent
    pub fn evaluate(&self) -> Option<f64> {
        parse_odds(&self.odds).map(|o| o.implied_probability())
    }

    pub fn compute(&self) -> f64 {
        self.evaluate().unwrap_or(0.0)
    }
}

/// Kelly criterion input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KellyForm {
    pub odds: String,
    pub probability: String,
    pub bankroll: String,
    /// 1.0 = full Kelly
    pub multiplier: f64,
}

impl Default for KellyForm {
    fn default() -> Self {
        Self {
            odds: String::new(),
            probability: String::new(),
            bankroll: String::new(),
            multiplier: KellySizer::default().multiplier,
        }
    }
}

impl KellyForm {
    pub fn evaluate(&self) -> Option<KellyResult> {
        let odds = parse_odds(&self.odds)?;
        let probability = parse_percent(&self.probability)?;
        let bankroll = parse_amount(&self.bankroll)?;
        KellySizer::new(self.multiplier).evaluate(odds, probability, bankroll)
    }

    pub fn compute(&self) -> KellyResult {
        self.evaluate().unwrap_or_default()
    }
}

/// Point spread input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpreadForm {
    pub spread: String,
    pub team_score: String,
    pub opponent_score: String,
    pub odds: String,
    pub stake: String,
}

impl SpreadForm {
    /// `None` until the line and both scores are filled in
    pub fn evaluate(&self) -> Option<SpreadResult> {
        let spread = parse_signed(&self.spread)?;
        let score = FinalScore {
            team: parse_signed(&self.team_score)?,
            opponent: parse_signed(&self.opponent_score)?,
        };
        let stake = parse_amount(&self.stake).unwrap_or(0.0);
        Some(calculate_spread(spread, score, parse_odds(&self.odds), stake))
    }

    pub fn compute(&self) -> SpreadResult {
        self.evaluate().unwrap_or_default()
    }
}

/// Every calculator's input state, owned by one interactive session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorDesk {
    pub converter: ConverterForm,
    pub parlay: ParlayForm,
    pub arbitrage: ArbitrageForm,
    pub expected_value: ExpectedValueForm,
    pub implied: ImpliedProbabilityForm,
    pub kelly: KellyForm,
    pub spread: SpreadForm,
}

impl CalculatorDesk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute one calculator from its current inputs as JSON
    pub fn result_json(&self, kind: CalculatorKind) -> serde_json::Value {
        let value = match kind {
            CalculatorKind::Converter => serde_json::to_value(self.converter.evaluate()),
            CalculatorKind::Parlay => serde_json::to_value(self.parlay.compute()),
            CalculatorKind::Arbitrage => serde_json::to_value(self.arbitrage.compute()),
            CalculatorKind::ExpectedValue => serde_json::to_value(self.expected_value.compute()),
            CalculatorKind::ImpliedProbability => serde_json::to_value(self.implied.compute()),
            CalculatorKind::Kelly => serde_json::to_value(self.kelly.compute()),
            CalculatorKind::Spread => serde_json::to_value(self.spread.compute()),
        };
        value.unwrap_or(serde_json::Value::Null)
    }

    /// Clear one calculator's inputs
    pub fn reset(&mut self, kind: CalculatorKind) {
        match kind {
            CalculatorKind::Converter => self.converter = ConverterForm::default(),
            CalculatorKind::Parlay => self.parlay = ParlayForm::default(),
            CalculatorKind::Arbitrage => self.arbitrage = ArbitrageForm::default(),
            CalculatorKind::ExpectedValue => self.expected_value = ExpectedValueForm::default(),
            CalculatorKind::ImpliedProbability => self.implied = ImpliedProbabilityForm::default(),
            CalculatorKind::Kelly => self.kelly = KellyForm::default(),
            CalculatorKind::Spread => self.spread = SpreadForm::default(),
        }
    }
}
