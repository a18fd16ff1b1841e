use hog_ai::always_roll::always_roll;
use hog_ai::harness::{
    ExperimentConfig, ExperimentToggles, average_win_rate, make_averaged, max_scoring_num_rolls,
    run_experiments, winner,
};
use hog_ai::{ExperimentError, Strategy, create_strategy};
use hog_engine::dice::{DiceBox, DiceKind, SeededDice, TestDice};
use hog_engine::rules::Rules;
use hog_engine::turn::{roll_dice, take_turn};

#[test]
fn averaged_roll_dice_matches_scripted_sequence() {
    let mut dice = TestDice::new([3, 1, 5, 6]).unwrap();
    let average = make_averaged(|n| roll_dice(n, &mut dice), 1000)(2).unwrap();
    assert_eq!(average, 5.5);
}

#[test]
fn averaged_take_turn_includes_prime_bump() {
    // 5 + 6 = 11 is bumped to 13
    let mut dice = TestDice::new([3, 1, 5, 6]).unwrap();
    let average = make_averaged(|n| take_turn(n, 0, 100, &mut dice), 1000)(2).unwrap();
    assert_eq!(average, 6.5);
}

#[test]
fn max_scoring_num_rolls_stays_in_range() {
    for seed in 0..5 {
        let mut six = SeededDice::new(DiceKind::SixSided, seed);
        let mut four = SeededDice::new(DiceKind::FourSided, seed);
        let six_best = max_scoring_num_rolls(&mut six, 200).unwrap();
        let four_best = max_scoring_num_rolls(&mut four, 200).unwrap();
        assert!((1..=10).contains(&six_best));
        assert!((1..=10).contains(&four_best));
    }
}

#[test]
fn six_sided_dice_favour_several_rolls() {
    // expected score peaks around six dice for fair six-sided dice
    let mut six = SeededDice::new(DiceKind::SixSided, 11);
    let best = max_scoring_num_rolls(&mut six, 5000).unwrap();
    assert!((4..=8).contains(&best), "best was {best}");
}

#[test]
fn winner_is_player_zero_when_ahead() {
    let five = always_roll(5);
    let mut dice = DiceBox::uniform(TestDice::new([4]).unwrap());
    // player 0 reaches 100 first with 20 points a turn
    assert_eq!(winner(&five, &five, Rules::default(), &mut dice), Ok(0));
}

#[test]
fn mirror_match_is_roughly_even() {
    let five = always_roll(5);
    let mut dice = DiceBox::seeded(99);
    let rate = average_win_rate(&five, &five, Rules::default(), &mut dice, 1000).unwrap();
    assert!((rate - 0.5).abs() < 0.1, "rate was {rate}");
}

#[test]
fn win_rate_is_a_probability() {
    let final_strategy = create_strategy("final").unwrap();
    let baseline = create_strategy("always_roll(5)").unwrap();
    let mut dice = DiceBox::seeded(5);
    let rate = average_win_rate(
        final_strategy.as_ref(),
        baseline.as_ref(),
        Rules::default(),
        &mut dice,
        200,
    )
    .unwrap();
    assert!((0.0..=1.0).contains(&rate));
}

#[test]
fn closures_compete_with_named_strategies() {
    let timid = |_: u32, _: u32| 1;
    assert_eq!(timid.name(), "custom");
    let mut dice = DiceBox::seeded(8);
    let rate = average_win_rate(&timid, &always_roll(6), Rules::default(), &mut dice, 300).unwrap();
    assert!(rate < 0.5, "rolling one die should lose, rate was {rate}");
}

#[test]
fn default_experiments_report_swap_only() {
    let mut dice = DiceBox::seeded(1);
    let config = ExperimentConfig {
        num_samples: 50,
        ..ExperimentConfig::default()
    };
    let report = run_experiments(&config, &mut dice).unwrap();
    assert_eq!(report.baseline, "always_roll(5)");
    assert!(report.max_scoring_num_rolls.is_none());
    assert_eq!(report.win_rates.len(), 1);
    assert_eq!(report.win_rates[0].strategy, "swap_strategy");
}

#[test]
fn all_experiments_run_in_order() {
    let mut dice = DiceBox::seeded(3);
    let config = ExperimentConfig {
        num_samples: 20,
        toggles: ExperimentToggles::all(),
        ..ExperimentConfig::default()
    };
    let report = run_experiments(&config, &mut dice).unwrap();
    let names: Vec<&str> = report.win_rates.iter().map(|w| w.strategy.as_str()).collect();
    assert_eq!(
        names,
        vec!["always_roll(8)", "bacon_strategy", "swap_strategy", "final_strategy"]
    );
    let rolls = report.max_scoring_num_rolls.unwrap();
    assert!((1..=10).contains(&rolls.six_sided));
    assert!((1..=10).contains(&rolls.four_sided));
}

#[test]
fn experiments_are_reproducible_from_a_seed() {
    let config = ExperimentConfig {
        num_samples: 30,
        toggles: ExperimentToggles::all(),
        ..ExperimentConfig::default()
    };
    let a = run_experiments(&config, &mut DiceBox::seeded(77)).unwrap();
    let b = run_experiments(&config, &mut DiceBox::seeded(77)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unknown_baseline_is_rejected() {
    let config = ExperimentConfig {
        baseline: "coin_flip".into(),
        ..ExperimentConfig::default()
    };
    assert_eq!(
        run_experiments(&config, &mut DiceBox::seeded(1)),
        Err(ExperimentError::UnknownStrategy("coin_flip".into()))
    );
}

#[test]
fn zero_samples_are_rejected() {
    let config = ExperimentConfig {
        num_samples: 0,
        ..ExperimentConfig::default()
    };
    assert_eq!(
        run_experiments(&config, &mut DiceBox::seeded(1)),
        Err(ExperimentError::NoSamples)
    );
}
