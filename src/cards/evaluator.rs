use super::hand::Hand;
use super::ranking::Ranking;
use super::ranks::Ranks;

/// Classifies a five-card hand into its [`Ranking`].
///
/// Holds the normalized [`Ranks`] and the flush flag of one Hand, and tries
/// each category from strongest to weakest. The first match wins, so a
/// straight that is also a flush never shows up as either alone.
pub struct Evaluator {
    ranks: Ranks,
    flush: bool,
}

impl From<&Hand> for Evaluator {
    fn from(hand: &Hand) -> Self {
        Self {
            ranks: Ranks::from(hand),
            flush: hand.is_flush(),
        }
    }
}

impl Evaluator {
    pub fn ranks(&self) -> Ranks {
        self.ranks
    }
    pub fn royal_flush(&self) -> bool {
        self.straight_flush() && self.ranks.is_royal()
    }
    pub fn straight_flush(&self) -> bool {
        self.ranks.is_straight() && self.flush
    }

    pub fn find_ranking(&self) -> Ranking {
        let ranking = None
            .or_else(|| self.find_royal_flush())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or(Ranking::HighCard(self.ranks));
        log::trace!("{} => {}", self.ranks, ranking);
        ranking
    }

    ///

    fn find_royal_flush(&self) -> Option<Ranking> {
        self.royal_flush().then_some(Ranking::RoyalFlush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.straight_flush()
            .then(|| Ranking::StraightFlush(self.ranks.high()))
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.ranks
            .kind(4)
            .zip(self.ranks.kind(1))
            .map(|(quad, kick)| Ranking::FourOAK(quad, kick))
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.ranks
            .kind(3)
            .zip(self.ranks.kind(2))
            .map(|(triple, paired)| Ranking::FullHouse(triple, paired))
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.flush.then_some(Ranking::Flush(self.ranks))
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.ranks
            .is_straight()
            .then(|| Ranking::Straight(self.ranks.high()))
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.ranks
            .kind(3)
            .map(|triple| Ranking::ThreeOAK(triple, self.ranks))
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.ranks
            .two_pair()
            .map(|(hi, lo)| Ranking::TwoPair(hi, lo, self.ranks))
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.ranks
            .kind(2)
            .map(|pair| Ranking::OnePair(pair, self.ranks))
    }
}
