use crate::dice::DiceBox;
use crate::errors::GameError;
use crate::logger::{GameRecord, TurnRecord};
use crate::player::Strategy;
use crate::rules::{is_swap, other, select_dice, Rules};
use crate::turn::take_turn;

/// A game of Hog between two strategies.
///
/// Player 0 moves first. Scores are reported in player order even after
/// Swine Swap has exchanged them.
///
/// # Examples
///
/// ```
/// use hog_engine::dice::{DiceBox, TestDice};
/// use hog_engine::game::Game;
/// use hog_engine::rules::Rules;
///
/// let five = |_: u32, _: u32| 5;
/// let mut dice = DiceBox::uniform(TestDice::new([4]).unwrap());
///
/// let scores = Game::new(&five, &five)
///     .with_rules(Rules { goal: 50, ..Rules::default() })
///     .play(&mut dice)
///     .unwrap();
/// assert_eq!(scores, (60, 40));
/// ```
pub struct Game<'a> {
    strategies: [&'a dyn Strategy; 2],
    scores: [u32; 2],
    rules: Rules,
    /// Index of the player about to move (0 or 1)
    current: usize,
}

impl<'a> Game<'a> {
    pub fn new(strategy0: &'a dyn Strategy, strategy1: &'a dyn Strategy) -> Self {
        Self {
            strategies: [strategy0, strategy1],
            scores: [0, 0],
            rules: Rules::default(),
            current: 0,
        }
    }

    pub fn with_scores(mut self, score0: u32, score1: u32) -> Self {
        self.scores = [score0, score1];
        self
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.scores[0], self.scores[1])
    }

    pub fn current_player(&self) -> usize {
        self.current
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn is_over(&self) -> bool {
        self.scores.iter().any(|&s| s >= self.rules.goal)
    }

    /// Plays one turn for the current player and hands the move to the other.
    pub fn play_turn(&mut self, dice: &mut DiceBox) -> Result<TurnRecord, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver {
                score: self.scores[0].max(self.scores[1]),
                goal: self.rules.goal,
            });
        }
        let player = self.current;
        let opponent = other(player)?;
        let score = self.scores[player];
        let opponent_score = self.scores[opponent];

        let num_rolls = self.strategies[player].num_rolls(score, opponent_score);
        let kind = select_dice(score, opponent_score);
        let gain = take_turn(num_rolls, opponent_score, self.rules.goal, dice.select(kind))?;

        // Piggy Back only rewards the opponent for a bust, never for Free Bacon
        let opponent_gain = if self.rules.piggy_back && num_rolls > 0 && gain == 0 {
            num_rolls
        } else {
            0
        };
        self.scores[player] += gain;
        self.scores[opponent] += opponent_gain;

        let swapped = is_swap(self.scores[0], self.scores[1]);
        if swapped {
            self.scores.swap(0, 1);
        }
        self.current = opponent;

        tracing::debug!(
            player,
            num_rolls,
            gain,
            opponent_gain,
            swapped,
            score0 = self.scores[0],
            score1 = self.scores[1],
            "turn resolved"
        );

        Ok(TurnRecord {
            player,
            num_rolls,
            dice: (num_rolls > 0).then_some(kind),
            gain,
            opponent_gain,
            swapped,
            scores: self.scores,
        })
    }

    /// Plays until a player reaches the goal and returns the final scores.
    ///
    /// With fair dice a game ends with probability 1, but nothing bounds the
    /// number of turns. Scripted dice that only roll 1s, played by strategies
    /// that never take Free Bacon, loop forever unless `piggy_back` is on.
    pub fn play(mut self, dice: &mut DiceBox) -> Result<(u32, u32), GameError> {
        while !self.is_over() {
            self.play_turn(dice)?;
        }
        tracing::debug!(
            score0 = self.scores[0],
            score1 = self.scores[1],
            "game finished"
        );
        Ok(self.scores())
    }

    /// Like [`Game::play`], keeping the history of every turn.
    pub fn play_recorded(mut self, dice: &mut DiceBox) -> Result<GameRecord, GameError> {
        let mut record = GameRecord::new(self.rules.goal, self.scores);
        while !self.is_over() {
            let turn = self.play_turn(dice)?;
            record.push(turn);
        }
        Ok(record)
    }
}

/// Plays a game from 0-0 to the standard goal of 100.
pub fn play(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    dice: &mut DiceBox,
) -> Result<(u32, u32), GameError> {
    Game::new(strategy0, strategy1).play(dice)
}
