use hog_engine::dice::{DiceBox, TestDice};
use hog_engine::game::{play, Game};
use hog_engine::rules::{Rules, GOAL_SCORE};

fn always(n: u32) -> impl Fn(u32, u32) -> u32 {
    move |_, _| n
}

#[test]
fn always_five_without_ones_reaches_goal() {
    let five = always(5);
    // five fours are 20 points each turn, never prime
    let mut dice = DiceBox::uniform(TestDice::new([4]).unwrap());
    let (score0, score1) = play(&five, &five, &mut dice).unwrap();
    assert_eq!((score0, score1), (100, 80));
    assert!(score0 >= GOAL_SCORE);
    assert!(score1 < GOAL_SCORE);
}

#[test]
fn mixed_never_one_sequence_terminates() {
    let five = always(5);
    let mut dice = DiceBox::uniform(TestDice::new([2, 3, 4, 5, 6]).unwrap());
    let (score0, score1) = play(&five, &five, &mut dice).unwrap();
    assert!(score0 >= GOAL_SCORE || score1 >= GOAL_SCORE);
}

#[test]
fn swine_swap_exchanges_scores() {
    let one = always(1);
    // a single 3 is prime, so every turn scores 5
    let mut dice = DiceBox::uniform(TestDice::new([3]).unwrap());
    let record = Game::new(&one, &one)
        .with_scores(14, 91)
        .play_recorded(&mut dice)
        .unwrap();

    let first = record.turns[0];
    assert!(first.swapped);
    assert_eq!(first.scores, [91, 19]);
    assert_eq!(record.swaps(), 1);
    assert_eq!(record.final_scores, [101, 29]);
}

#[test]
fn scores_are_reported_in_player_order() {
    let one = always(1);
    let mut dice = DiceBox::uniform(TestDice::new([3]).unwrap());
    let scores = Game::new(&one, &one)
        .with_scores(14, 91)
        .play(&mut dice)
        .unwrap();
    assert_eq!(scores, (101, 29));
}

#[test]
fn game_already_over_returns_start_scores() {
    let one = always(1);
    let mut dice = DiceBox::uniform(TestDice::new([3]).unwrap());
    let scores = Game::new(&one, &one)
        .with_scores(100, 100)
        .play(&mut dice)
        .unwrap();
    assert_eq!(scores, (100, 100));
}

#[test]
fn hog_wild_draws_from_four_sided_dice() {
    let two = always(2);
    // scores sum to 7, so the four-sided source is used
    let mut dice = DiceBox::new(|| 6, || 2);
    let mut game = Game::new(&two, &two).with_scores(3, 4);
    let turn = game.play_turn(&mut dice).unwrap();
    assert_eq!(turn.dice, Some(hog_engine::dice::DiceKind::FourSided));
    assert_eq!(turn.gain, 4);
    assert_eq!(game.scores(), (7, 4));
}

#[test]
fn seeded_games_are_reproducible() {
    let four = always(4);
    let six = always(6);
    let a = Game::new(&four, &six)
        .play_recorded(&mut DiceBox::seeded(2024))
        .unwrap();
    let b = Game::new(&four, &six)
        .play_recorded(&mut DiceBox::seeded(2024))
        .unwrap();
    assert_eq!(a, b);
    assert!(a.final_scores.iter().any(|&s| s >= GOAL_SCORE));
}

#[test]
fn lower_goal_ends_sooner() {
    let five = always(5);
    let mut dice = DiceBox::uniform(TestDice::new([4]).unwrap());
    let rules = Rules {
        goal: 30,
        ..Rules::default()
    };
    let scores = Game::new(&five, &five)
        .with_rules(rules)
        .play(&mut dice)
        .unwrap();
    assert_eq!(scores, (40, 20));
}

#[test]
fn game_record_serializes_to_json() {
    let five = always(5);
    let mut dice = DiceBox::uniform(TestDice::new([4]).unwrap());
    let record = Game::new(&five, &five).play_recorded(&mut dice).unwrap();
    let json = serde_json::to_string(&record).expect("serialize");
    assert!(json.contains("\"four_sided\""));
    let back: hog_engine::logger::GameRecord = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(record, back);
}
