use super::error::CardError;

/// Rank characters indexed by rank value. Positions 0 and 1 are placeholders.
const RANKS: &str = "--23456789TJQKA";

/// Card rank, valued 2 through 14 (ace high).
///
/// [`Rank::LowAce`] never comes out of a card token. It only appears in a
/// wheel straight (A-2-3-4-5), where the ace is rewritten to play low so that
/// run detection and high-card comparison need no special case.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rank {
    LowAce = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All decodable ranks, highest first.
    pub const fn all() -> [Rank; 13] {
        [
            Rank::Ace,
            Rank::King,
            Rank::Queen,
            Rank::Jack,
            Rank::Ten,
            Rank::Nine,
            Rank::Eight,
            Rank::Seven,
            Rank::Six,
            Rank::Five,
            Rank::Four,
            Rank::Three,
            Rank::Two,
        ]
    }
}

/// u8 isomorphism
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}
impl TryFrom<u8> for Rank {
    type Error = u8;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Rank::LowAce),
            2 => Ok(Rank::Two),
            3 => Ok(Rank::Three),
            4 => Ok(Rank::Four),
            5 => Ok(Rank::Five),
            6 => Ok(Rank::Six),
            7 => Ok(Rank::Seven),
            8 => Ok(Rank::Eight),
            9 => Ok(Rank::Nine),
            10 => Ok(Rank::Ten),
            11 => Ok(Rank::Jack),
            12 => Ok(Rank::Queen),
            13 => Ok(Rank::King),
            14 => Ok(Rank::Ace),
            n => Err(n),
        }
    }
}

/// char decoding
/// position in "--23456789TJQKA" is the rank value
impl TryFrom<char> for Rank {
    type Error = CardError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        RANKS
            .char_indices()
            .skip(2)
            .find(|&(_, r)| r == c)
            .map(|(i, _)| i as u8)
            .and_then(|n| Rank::try_from(n).ok())
            .ok_or(CardError::Rank(c))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::LowAce | Rank::Ace => "A",
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
            }
        )
    }
}
