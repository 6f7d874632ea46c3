use thiserror::Error;

/// A card token that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("card token {0:?} must be exactly 2 characters")]
    Length(String),
    #[error("unknown rank character {0:?}")]
    Rank(char),
    #[error("unknown suit character {0:?}")]
    Suit(char),
}

/// A hand string that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("malformed card: {0}")]
    Card(#[from] CardError),
    #[error("a hand holds exactly 5 cards, found {0}")]
    Cardinality(usize),
}
