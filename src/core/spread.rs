//! Point spread settlement
//!
//! The spread line is added to the backed team's score before comparing
//! with the opponent: a -3.5 favorite has to win by 4 or more to cover.

use super::odds::AmericanOdds;
use serde::{Deserialize, Serialize};

/// How a spread bet graded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadOutcome {
    Cover,
    #[default]
    Push,
    Loss,
}

/// Final score of the game from the backed team's side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalScore {
    pub team: f64,
    pub opponent: f64,
}

/// Spread bet settlement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpreadResult {
    /// team + spread - opponent
    pub adjusted_margin: f64,
    pub outcome: SpreadOutcome,
    pub payout: f64,
    pub profit: f64,
    /// Cover rate needed to break even at these odds, percent
    pub break_even_rate: f64,
}

/// Grade the margin against the line
pub fn grade(spread: f64, score: FinalScore) -> (f64, SpreadOutcome) {
    let adjusted = score.team + spread - score.opponent;
    let outcome = if adjusted > 0.0 {
        SpreadOutcome::Cover
    } else if adjusted < 0.0 {
        SpreadOutcome::Loss
    } else {
        SpreadOutcome::Push
    };
    (adjusted, outcome)
}

/// Settle a spread bet
///
/// A push refunds the stake. Without odds or a positive stake the payout
/// and profit are zero but the graded outcome is still reported. The
/// break-even rate depends only on the odds.
pub fn calculate_spread(
    spread: f64,
    score: FinalScore,
    odds: Option<AmericanOdds>,
    stake: f64,
) -> SpreadResult {
    let (adjusted_margin, outcome) = grade(spread, score);
    let break_even_rate = odds.map(AmericanOdds::implied_probability).unwrap_or(0.0);

    let Some(odds) = odds.filter(|_| stake > 0.0) else {
        return SpreadResult {
            adjusted_margin,
            outcome,
            break_even_rate,
            ..SpreadResult::default()
        };
    };

    let payout = match outcome {
        SpreadOutcome::Cover => stake * odds.decimal(),
        SpreadOutcome::Push => stake,
        SpreadOutcome::Loss => 0.0,
    };

    SpreadResult {
        adjusted_margin,
        outcome,
        payout,
        profit: payout - stake,
        break_even_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odds(v: i32) -> Option<AmericanOdds> {
        AmericanOdds::new(v)
    }

    fn score(team: f64, opponent: f64) -> FinalScore {
        FinalScore { team, opponent }
    }

    #[test]
    fn test_favorite_covers() {
        let result = calculate_spread(-3.5, score(27.0, 20.0), odds(-110), 110.0);
        assert_eq!(result.outcome, SpreadOutcome::Cover);
        assert!((result.adjusted_margin - 3.5).abs() < 1e-12);
        assert!((result.payout - 210.0).abs() < 1e-9);
        assert!((result.profit - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_favorite_fails_to_cover() {
        let result = calculate_spread(-3.5, score(24.0, 21.0), odds(-110), 110.0);
        assert_eq!(result.outcome, SpreadOutcome::Loss);
        assert_eq!(result.payout, 0.0);
        assert!((result.profit + 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_push_refunds_stake() {
        let result = calculate_spread(-3.0, score(24.0, 21.0), odds(-110), 110.0);
        assert_eq!(result.outcome, SpreadOutcome::Push);
        assert!((result.payout - 110.0).abs() < 1e-9);
        assert_eq!(result.profit, 0.0);
    }

    #[test]
    fn test_underdog_covers_in_loss() {
        let result = calculate_spread(7.5, score(17.0, 24.0), odds(100), 50.0);
        assert_eq!(result.outcome, SpreadOutcome::Cover);
        assert!((result.payout - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_money_inputs_still_grade() {
        let result = calculate_spread(-3.5, score(27.0, 20.0), None, 110.0);
        assert_eq!(result.outcome, SpreadOutcome::Cover);
        assert_eq!(result.payout, 0.0);
        assert_eq!(result.profit, 0.0);

        assert_eq!(result.break_even_rate, 0.0);

        let result = calculate_spread(-3.5, score(27.0, 20.0), odds(-110), 0.0);
        assert_eq!(result.payout, 0.0);
    }

    #[test]
    fn test_break_even_rate_without_stake() {
        let result = calculate_spread(-3.5, score(27.0, 20.0), odds(-110), 0.0);
        assert_eq!(result.outcome, SpreadOutcome::Cover);
        assert_eq!(result.profit, 0.0);
        assert!((result.break_even_rate - 52.38).abs() < 0.01);
    }

    #[test]
    fn test_break_even_rate() {
        let result = calculate_spread(-1.0, score(10.0, 3.0), odds(-110), 100.0);
        assert!((result.break_even_rate - 52.38).abs() < 0.01);
    }
}
