use super::rank::Rank;
use super::ranks::Ranks;

/// A five-card hand's ranking key.
///
/// Variants are declared weakest first and each carries its own tie-break
/// payload, so the derived `Ord` compares category first and then the
/// payload left to right. Two hands with equal keys are an exact tie.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Ranking {
    HighCard(Ranks),                // all five ranks
    OnePair(Rank, Ranks),           // pair, then all five ranks
    TwoPair(Rank, Rank, Ranks),     // high pair, low pair, then all five ranks
    ThreeOAK(Rank, Ranks),          // triple, then all five ranks
    Straight(Rank),                 // high card of the run
    Flush(Ranks),                   // all five ranks
    FullHouse(Rank, Rank),          // triple, pair
    FourOAK(Rank, Rank),            // quad, kicker
    StraightFlush(Rank),            // high card of the run
    RoyalFlush,
}

impl Ranking {
    /// Category strength, 0 (high card) through 9 (royal flush).
    pub fn category(&self) -> u8 {
        match self {
            Ranking::HighCard(..) => 0,
            Ranking::OnePair(..) => 1,
            Ranking::TwoPair(..) => 2,
            Ranking::ThreeOAK(..) => 3,
            Ranking::Straight(..) => 4,
            Ranking::Flush(..) => 5,
            Ranking::FullHouse(..) => 6,
            Ranking::FourOAK(..) => 7,
            Ranking::StraightFlush(..) => 8,
            Ranking::RoyalFlush => 9,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Ranking::HighCard(..) => "HighCard",
            Ranking::OnePair(..) => "OnePair",
            Ranking::TwoPair(..) => "TwoPair",
            Ranking::ThreeOAK(..) => "ThreeOfAKind",
            Ranking::Straight(..) => "Straight",
            Ranking::Flush(..) => "Flush",
            Ranking::FullHouse(..) => "FullHouse",
            Ranking::FourOAK(..) => "FourOfAKind",
            Ranking::StraightFlush(..) => "StraightFlush",
            Ranking::RoyalFlush => "RoyalFlush",
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = self.name();
        match self {
            Ranking::RoyalFlush => write!(f, "{:<14}", name),
            Ranking::Straight(r) | Ranking::StraightFlush(r) => write!(f, "{:<14}{}", name, r),
            Ranking::FullHouse(r1, r2) | Ranking::FourOAK(r1, r2) => {
                write!(f, "{:<14}{}{}", name, r1, r2)
            }
            Ranking::OnePair(r, ranks) | Ranking::ThreeOAK(r, ranks) => {
                write!(f, "{:<14}{} {}", name, r, ranks)
            }
            Ranking::TwoPair(hi, lo, ranks) => write!(f, "{:<14}{}{} {}", name, hi, lo, ranks),
            Ranking::HighCard(ranks) | Ranking::Flush(ranks) => write!(f, "{:<14}{}", name, ranks),
        }
    }
}
