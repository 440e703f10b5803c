//! Difficulty tiers for the computer opponent.

use crate::selector::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// How the opponent picks a move on a given turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// Walk the heuristic chain (win, block, anti-trap, center, side, random).
    Heuristic,
    /// Pick any empty cell uniformly at random.
    Random,
}

/// Opponent difficulty.
///
/// Difficulty only gates which strategy is used on a turn; the heuristic
/// chain itself is the same for every tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Plays a random cell 30% of the time.
    #[default]
    Easy,
    /// Plays the heuristic chain 70% of the time.
    Medium,
    /// Always plays the heuristic chain.
    Hard,
}

impl Difficulty {
    /// Probability that a turn uses the heuristic chain.
    pub fn heuristic_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Medium => 0.7,
            Difficulty::Hard => 1.0,
        }
    }

    /// Rolls for this turn's strategy.
    ///
    /// Easy goes random below 0.3, Medium goes heuristic below 0.7, and Hard
    /// never rolls.
    #[instrument(skip(source))]
    pub fn choose_strategy<R: RandomSource + ?Sized>(self, source: &mut R) -> Strategy {
        let strategy = match self {
            Difficulty::Easy => {
                if source.roll() < 0.3 {
                    Strategy::Random
                } else {
                    Strategy::Heuristic
                }
            }
            Difficulty::Medium => {
                if source.roll() < 0.7 {
                    Strategy::Heuristic
                } else {
                    Strategy::Random
                }
            }
            Difficulty::Hard => Strategy::Heuristic,
        };
        trace!(%strategy, "Strategy chosen");
        strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    struct FixedRoll(f64);

    impl RandomSource for FixedRoll {
        fn roll(&mut self) -> f64 {
            self.0
        }

        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_easy_gate() {
        assert_eq!(
            Difficulty::Easy.choose_strategy(&mut FixedRoll(0.29)),
            Strategy::Random
        );
        assert_eq!(
            Difficulty::Easy.choose_strategy(&mut FixedRoll(0.3)),
            Strategy::Heuristic
        );
    }

    #[test]
    fn test_medium_gate() {
        assert_eq!(
            Difficulty::Medium.choose_strategy(&mut FixedRoll(0.69)),
            Strategy::Heuristic
        );
        assert_eq!(
            Difficulty::Medium.choose_strategy(&mut FixedRoll(0.7)),
            Strategy::Random
        );
    }

    #[test]
    fn test_hard_always_heuristic() {
        assert_eq!(
            Difficulty::Hard.choose_strategy(&mut FixedRoll(0.0)),
            Strategy::Heuristic
        );
        assert_eq!(
            Difficulty::Hard.choose_strategy(&mut FixedRoll(0.99)),
            Strategy::Heuristic
        );
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(Difficulty::from_str("hard").unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::from_str("Medium").unwrap(), Difficulty::Medium);
        assert!(Difficulty::from_str("nightmare").is_err());
        assert_eq!(Difficulty::Easy.to_string(), "easy");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
