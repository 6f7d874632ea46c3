use super::error::HandError;
use super::evaluator::Evaluator;
use super::hand::Hand;
use super::outcome::Outcome;
use super::ranking::Ranking;

/// A hand together with its evaluated [`Ranking`].
///
/// The ranking is computed once, on construction, and never changes.
/// Comparison is strict: a hand only wins when its ranking is greater, so
/// an exact tie is a loss from either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Strength {
    hand: Hand,
    ranking: Ranking,
}

impl Strength {
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn compare_with(&self, other: &Self) -> Outcome {
        let outcome = Outcome::from(self.ranking > other.ranking);
        log::debug!("{} vs {} => {}", self.hand, other.hand, outcome);
        outcome
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        let ranking = Evaluator::from(&hand).find_ranking();
        Self { hand, ranking }
    }
}

/// str decoding
impl TryFrom<&str> for Strength {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Hand::try_from(s).map(Self::from)
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}  {}", self.hand, self.ranking)
    }
}
