//! Cross-calculator properties

use picks::calculators::{ArbitrageForm, KellyForm, ParlayForm};
use picks::core::arbitrage::calculate_arbitrage;
use picks::core::ev::calculate_expected_value;
use picks::core::kelly::calculate_kelly;
use picks::core::odds::{implied_probability, AmericanOdds};
use picks::core::parlay::calculate_parlay;
use picks::ParlayResult;

fn odds(v: i32) -> AmericanOdds {
    AmericanOdds::new(v).unwrap()
}

#[test]
fn decimal_odds_exceed_one_for_every_quote() {
    for v in (-2000..=2000).filter(|v| *v != 0) {
        let d = odds(v).decimal();
        assert!(d > 1.0, "decimal({}) = {}", v, d);
    }
    assert!(odds(i32::MAX).decimal() > 1.0);
    assert!(odds(i32::MIN + 1).decimal() > 1.0);
}

#[test]
fn even_money_is_two() {
    assert_eq!(odds(100).decimal(), 2.0);
    assert_eq!(odds(-100).decimal(), 2.0);
}

#[test]
fn standard_two_leg_parlay() {
    let result = calculate_parlay(&[odds(-110), odds(-110)], 100.0);
    assert!((result.combined_decimal - 3.6446).abs() < 1e-4);
    assert!((result.payout - 364.46).abs() < 0.01);
    assert!((result.profit - 264.46).abs() < 0.01);
}

#[test]
fn arbitrage_between_plus_150_and_minus_120() {
    let implied_sum = 1.0 / odds(150).decimal() + 1.0 / odds(-120).decimal();
    assert!(implied_sum < 1.0);

    let result = calculate_arbitrage(Some(odds(150)), Some(odds(-120)), 1000.0);
    assert!(result.is_arb);
    assert!(result.profit > 0.0);
}

#[test]
fn kelly_plus_200_at_40_percent() {
    let result = calculate_kelly(Some(odds(200)), 40.0, 10_000.0);
    assert!((result.fraction - 0.1).abs() < 1e-9);
    assert!((result.percent - 10.0).abs() < 1e-9);
    assert!((result.stake - 1000.0).abs() < 1e-6);
}

#[test]
fn implied_probability_of_minus_110() {
    assert!((implied_probability(odds(-110)) - 52.38).abs() < 0.005);
}

#[test]
fn recomputation_is_bit_identical() {
    let legs = [odds(-110), odds(250), odds(-300)];
    let a = calculate_parlay(&legs, 37.5);
    let b = calculate_parlay(&legs, 37.5);
    assert_eq!(a.payout.to_bits(), b.payout.to_bits());

    let a = calculate_expected_value(Some(odds(-135)), 58.3, 120.0);
    let b = calculate_expected_value(Some(odds(-135)), 58.3, 120.0);
    assert_eq!(a.ev.to_bits(), b.ev.to_bits());
    assert_eq!(a.roi.to_bits(), b.roi.to_bits());

    let form = ArbitrageForm {
        bet1_odds: "+150".into(),
        bet2_odds: "-120".into(),
        stake: "1000".into(),
    };
    assert_eq!(form.compute(), form.compute());

    let form = KellyForm {
        odds: "+200".into(),
        probability: "40".into(),
        bankroll: "10000".into(),
        ..KellyForm::default()
    };
    assert_eq!(form.compute(), form.compute());
}

#[test]
fn parlay_with_fewer_than_two_valid_legs_is_zero() {
    for legs in [vec![], vec!["-110".to_string()], vec!["-110".into(), "x".into()]] {
        let form = ParlayForm {
            legs,
            stake: "100".into(),
        };
        assert_eq!(form.compute(), ParlayResult::default());
    }
}
