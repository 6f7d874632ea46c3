use super::card::Card;
use super::error::HandError;
use super::suit::Suit;

/// Exactly five cards, kept in the order they were dealt.
///
/// Unlike a set of cards this keeps duplicates: nothing here checks that the
/// five cards could come from a single deck, so `"AC AH AS AS KS"` is four
/// aces and a king.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hand([Card; 5]);

impl Hand {
    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }
    /// True iff all five cards share one suit.
    pub fn is_flush(&self) -> bool {
        let suit = self.0[0].suit();
        self.suits().all(|s| s == suit)
    }
    fn suits(&self) -> impl Iterator<Item = Suit> + '_ {
        self.0.iter().map(Card::suit)
    }
}

/// [Card; 5] isomorphism
impl From<[Card; 5]> for Hand {
    fn from(cards: [Card; 5]) -> Self {
        Self(cards)
    }
}
impl From<Hand> for [Card; 5] {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// str decoding
/// whitespace-separated tokens, one per card
impl TryFrom<&str> for Hand {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = s
            .split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()?;
        <[Card; 5]>::try_from(cards)
            .map(Self)
            .map_err(|cards| HandError::Cardinality(cards.len()))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "{} {} {} {} {}", a, b, c, d, e)
    }
}
