use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;

/// The wheel as it sorts: A 5 4 3 2.
const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];
/// The wheel with its ace playing low.
const WHEEL_LOW: [Rank; 5] = [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::LowAce];
/// Ace-high straight.
const BROADWAY: [Rank; 5] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];

/// The five ranks of a [`Hand`], highest first.
///
/// The only way to build one is from a Hand, which is where the wheel is
/// normalized: A-5-4-3-2 becomes 5-4-3-2-A(low). Every detector downstream
/// reads the normalized sequence, so a wheel is a run like any other and
/// its high card is the five.
///
/// Ordering is lexicographic over the sequence, which is exactly the
/// kicker comparison for flushes and high cards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ranks([Rank; 5]);

impl Ranks {
    /// True iff each rank is one below the rank before it.
    pub fn is_straight(&self) -> bool {
        self.0.windows(2).all(|w| u8::from(w[0]) == u8::from(w[1]) + 1)
    }
    /// True iff the ranks are exactly A K Q J T.
    pub fn is_royal(&self) -> bool {
        self.0 == BROADWAY
    }
    /// Highest rank in the sequence.
    pub fn high(&self) -> Rank {
        self.0[0]
    }
    /// Highest rank appearing exactly `n` times.
    pub fn kind(&self, n: usize) -> Option<Rank> {
        self.iter().find(|&r| self.count(r) == n)
    }
    /// The highest and lowest of two distinct pairs, in that order.
    pub fn two_pair(&self) -> Option<(Rank, Rank)> {
        let mut pairs = self.iter().filter(|&r| self.count(r) == 2);
        let hi = pairs.next()?;
        let lo = pairs.last()?;
        if hi != lo { Some((hi, lo)) } else { None }
    }

    fn count(&self, rank: Rank) -> usize {
        self.0.iter().filter(|&&r| r == rank).count()
    }
    fn iter(&self) -> impl Iterator<Item = Rank> + '_ {
        self.0.iter().copied()
    }
}

impl From<&Hand> for Ranks {
    fn from(hand: &Hand) -> Self {
        let mut ranks = <[Card; 5]>::from(*hand).map(|c| c.rank());
        ranks.sort_by(|a, b| b.cmp(a));
        match ranks {
            WHEEL => Self(WHEEL_LOW),
            ranks => Self(ranks),
        }
    }
}
impl From<Ranks> for [Rank; 5] {
    fn from(r: Ranks) -> Self {
        r.0
    }
}
impl From<Ranks> for [u8; 5] {
    fn from(r: Ranks) -> Self {
        r.0.map(u8::from)
    }
}

impl std::fmt::Display for Ranks {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "{}{}{}{}{}", a, b, c, d, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(s: &str) -> Ranks {
        Ranks::from(&Hand::try_from(s).unwrap())
    }
    fn values(s: &str) -> [u8; 5] {
        <[u8; 5]>::from(ranks(s))
    }

    #[test]
    fn sorted_descending() {
        assert_eq!(values("TC TH 5C 5H KH"), [13, 10, 10, 5, 5]);
    }

    #[test]
    fn wheel_is_normalized_in_any_order() {
        assert_eq!(values("AS 2H 3D 4C 5S"), [5, 4, 3, 2, 1]);
        assert_eq!(values("3D 5S AS 4C 2H"), [5, 4, 3, 2, 1]);
        assert!(ranks("3D 5S AS 4C 2H").is_straight());
        assert_eq!(ranks("3D 5S AS 4C 2H").high(), Rank::Five);
    }

    #[test]
    fn high_is_top_of_sequence() {
        assert_eq!(ranks("7H 8H 9H TH JH").high(), Rank::Jack);
        assert_eq!(ranks("2C KD 2H 5S 9C").high(), Rank::King);
        assert_eq!(ranks("AS AH AD AC KS").high(), Rank::Ace);
    }

    #[test]
    fn other_aces_stay_high() {
        assert_eq!(values("AS 2H 3D 4C 6S"), [14, 6, 4, 3, 2]);
        assert_eq!(values("AS KH QD JC TS"), [14, 13, 12, 11, 10]);
    }

    #[test]
    fn straight() {
        assert!(ranks("2C 3H 4C 5H 6C").is_straight());
        assert!(ranks("TC JH QC KH AC").is_straight());
    }

    #[test]
    fn not_straight() {
        assert!(!ranks("2C 3H 4C 7H 8C").is_straight());
        assert!(!ranks("2C 2H 3C 4H 5C").is_straight());
        assert!(!ranks("QC KH AC 2H 3C").is_straight());
    }

    #[test]
    fn royal() {
        assert!(ranks("TC QC KC AC JC").is_royal());
        assert!(!ranks("9C TC JC QC KC").is_royal());
    }

    #[test]
    fn four_of_a_kind() {
        assert_eq!(ranks("2C 2H 2C 2S 6C").kind(4), Some(Rank::Two));
        assert_eq!(ranks("2C 2H 2C 2S 6C").kind(1), Some(Rank::Six));
    }

    #[test]
    fn three_of_a_kind() {
        assert_eq!(ranks("5C 2H 5C 5S 6C").kind(3), Some(Rank::Five));
        assert_eq!(ranks("5C 2H 5C 5S 6C").kind(2), None);
    }

    #[test]
    fn kind_is_exact() {
        let full = ranks("KC KH KS 4H 4D");
        assert_eq!(full.kind(3), Some(Rank::King));
        assert_eq!(full.kind(2), Some(Rank::Four));
        assert_eq!(full.kind(4), None);
        assert_eq!(full.kind(1), None);
    }

    #[test]
    fn kind_prefers_highest() {
        assert_eq!(ranks("9C 9H 5C 5H AC").kind(2), Some(Rank::Nine));
        assert_eq!(ranks("9C 8H 5C 3H AC").kind(1), Some(Rank::Ace));
    }

    #[test]
    fn two_pair() {
        let pairs = ranks("5C 2H 5C 2S 6C").two_pair();
        assert_eq!(pairs, Some((Rank::Five, Rank::Two)));
        assert_eq!(pairs.map(|(hi, lo)| (u8::from(lo), u8::from(hi))), Some((2, 5)));
    }

    #[test]
    fn one_pair_is_not_two_pair() {
        assert_eq!(ranks("5C 2H 5C 3S 6C").two_pair(), None);
        assert_eq!(ranks("5C 5H 5D 2S 2C").two_pair(), None);
        assert_eq!(ranks("AC KH QD 3S 2C").two_pair(), None);
    }

    #[test]
    fn display() {
        assert_eq!(ranks("TC TH 5C 5H KH").to_string(), "KTT55");
        assert_eq!(ranks("AS 2H 3D 4C 5S").to_string(), "5432A");
    }
}
