/// Result of a head-to-head showdown, from the point of view of the hand
/// doing the comparing. There is no tie: a hand that does not strictly
/// win loses.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Outcome {
    Win,
    Loss,
}

/// bool isomorphism
/// true iff strictly better
impl From<bool> for Outcome {
    fn from(better: bool) -> Self {
        if better { Outcome::Win } else { Outcome::Loss }
    }
}
impl From<Outcome> for bool {
    fn from(o: Outcome) -> Self {
        o == Outcome::Win
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "WIN"),
            Outcome::Loss => write!(f, "LOSS"),
        }
    }
}
