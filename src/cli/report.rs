use crate::cards::Outcome;
use crate::cards::Ranking;
use crate::cards::Strength;
use serde::Serialize;

/// One evaluated hand, as printed by `rank` and inside a [`Verdict`].
#[derive(Debug, Serialize)]
pub struct Entry {
    pub hand: String,
    pub category: u8,
    pub name: &'static str,
    pub ranking: Ranking,
}

impl From<&Strength> for Entry {
    fn from(s: &Strength) -> Self {
        Self {
            hand: s.hand().to_string(),
            category: s.ranking().category(),
            name: s.ranking().name(),
            ranking: s.ranking(),
        }
    }
}

/// A decided showdown, as printed by `compare`.
#[derive(Debug, Serialize)]
pub struct Verdict {
    pub hand: Entry,
    pub other: Entry,
    pub outcome: Outcome,
}

impl From<(&Strength, &Strength)> for Verdict {
    fn from((hand, other): (&Strength, &Strength)) -> Self {
        Self {
            hand: Entry::from(hand),
            other: Entry::from(other),
            outcome: hand.compare_with(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_json() {
        let hand = Strength::try_from("TS JS QS KS AS").unwrap();
        let other = Strength::try_from("AC AH AS AS KS").unwrap();
        let json = serde_json::to_value(Verdict::from((&hand, &other))).unwrap();
        assert_eq!(json["outcome"], "WIN");
        assert_eq!(json["hand"]["category"], 9);
        assert_eq!(json["hand"]["name"], "RoyalFlush");
        assert_eq!(json["other"]["category"], 7);
        assert_eq!(json["other"]["hand"], "Ac Ah As As Ks");
    }
}
