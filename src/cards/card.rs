use super::error::CardError;
use super::rank::Rank;
use super::suit::Suit;

/// A playing card as a `(Rank, Suit)` pair.
///
/// Cards have no identity beyond their value. Two tokens naming the same
/// card decode to equal cards, and nothing stops a hand from holding both.
///
/// # Parsing
///
/// Cards parse from two-character tokens, rank then suit, like `"As"` or
/// `"TC"`. Rank characters are upper case; suit characters are not
/// case-sensitive.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(c: Card) -> Self {
        (c.rank, c.suit)
    }
}

/// str decoding
impl TryFrom<&str> for Card {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => Ok(Self::from((Rank::try_from(r)?, Suit::try_from(u)?))),
            _ => Err(CardError::Length(s.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_token() {
        let card = Card::try_from("TC").unwrap();
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::C);
        assert_eq!(card, Card::try_from("Tc").unwrap());
    }

    #[test]
    fn display_roundtrip() {
        let card = Card::from((Rank::Ace, Suit::S));
        assert_eq!(card.to_string(), "As");
        assert_eq!(Card::try_from(card.to_string().as_str()), Ok(card));
    }

    #[test]
    fn malformed_tokens() {
        assert_eq!(Card::try_from("A"), Err(CardError::Length("A".into())));
        assert_eq!(Card::try_from("10H"), Err(CardError::Length("10H".into())));
        assert_eq!(Card::try_from(""), Err(CardError::Length("".into())));
        assert_eq!(Card::try_from("1H"), Err(CardError::Rank('1')));
        assert_eq!(Card::try_from("AX"), Err(CardError::Suit('X')));
    }

    #[test]
    fn equal_cards_compare_equal() {
        assert_eq!(Card::try_from("AS"), Card::try_from("AS"));
    }
}
