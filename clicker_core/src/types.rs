//! Core types: ladder tiers, divisions, positions, item identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten ladder tiers, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Rank {
    /// All ranks in climbing order
    pub fn all() -> &'static [Rank] {
        &[
            Rank::Iron,
            Rank::Bronze,
            Rank::Silver,
            Rank::Gold,
            Rank::Platinum,
            Rank::Emerald,
            Rank::Diamond,
            Rank::Master,
            Rank::Grandmaster,
            Rank::Challenger,
        ]
    }

    /// Zero-based position in the climbing order
    pub fn index(self) -> usize {
        Rank::all().iter().position(|r| *r == self).unwrap_or(0)
    }

    /// The next rank up, if any
    pub fn next(self) -> Option<Rank> {
        Rank::all().get(self.index() + 1).copied()
    }

    /// The next rank down, if any
    pub fn previous(self) -> Option<Rank> {
        self.index().checked_sub(1).and_then(|i| Rank::all().get(i).copied())
    }

    /// Whether this rank is split into four divisions.
    /// The top three tiers are a single open pool.
    pub fn has_divisions(self) -> bool {
        !matches!(self, Rank::Master | Rank::Grandmaster | Rank::Challenger)
    }

    /// Opponent difficulty multiplier, monotonically increasing with rank.
    /// Divides win chance and score gains, feeds score losses.
    pub fn difficulty_multiplier(self) -> f64 {
        match self {
            Rank::Iron => 1.0,
            Rank::Bronze => 1.2,
            Rank::Silver => 1.4,
            Rank::Gold => 1.6,
            Rank::Platinum => 1.8,
            Rank::Emerald => 2.0,
            Rank::Diamond => 2.2,
            Rank::Master => 2.5,
            Rank::Grandmaster => 2.8,
            Rank::Challenger => 3.0,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::Iron => "Iron",
            Rank::Bronze => "Bronze",
            Rank::Silver => "Silver",
            Rank::Gold => "Gold",
            Rank::Platinum => "Platinum",
            Rank::Emerald => "Emerald",
            Rank::Diamond => "Diamond",
            Rank::Master => "Master",
            Rank::Grandmaster => "Grandmaster",
            Rank::Challenger => "Challenger",
        };
        write!(f, "{}", name)
    }
}

/// Sub-tier within a divisioned rank, worst (IV) to best (I)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Division {
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "1")]
    One,
}

impl Division {
    /// All divisions, worst to best
    pub fn all() -> &'static [Division] {
        &[Division::Four, Division::Three, Division::Two, Division::One]
    }

    /// Zero-based position, worst to best
    pub fn index(self) -> usize {
        Division::all().iter().position(|d| *d == self).unwrap_or(0)
    }

    /// One step toward division I, if not already there
    pub fn advanced(self) -> Option<Division> {
        Division::all().get(self.index() + 1).copied()
    }

    /// One step toward division IV, if not already there
    pub fn retreated(self) -> Option<Division> {
        self.index().checked_sub(1).and_then(|i| Division::all().get(i).copied())
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeral = match self {
            Division::Four => "IV",
            Division::Three => "III",
            Division::Two => "II",
            Division::One => "I",
        };
        write!(f, "{}", numeral)
    }
}

/// A position on the ladder: rank, optional division, and progress score.
///
/// Score lives in `[0, 100)` for divisioned ranks and is unbounded upward
/// at the top of the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankPosition {
    pub rank: Rank,
    pub division: Option<Division>,
    pub score: i64,
}

impl RankPosition {
    /// Create a position, taking the division as given
    pub fn new(rank: Rank, division: Option<Division>, score: i64) -> Self {
        RankPosition { rank, division, score }
    }

    /// The absolute floor of the ladder: Iron IV, score 0
    pub fn floor() -> Self {
        RankPosition::new(Rank::Iron, Some(Division::Four), 0)
    }

    /// A rank/division pairing is legal iff the division is present exactly
    /// when the rank is divisioned. Violations are programmer errors, not
    /// runtime conditions.
    pub fn is_valid(&self) -> bool {
        self.division.is_some() == self.rank.has_divisions()
    }

    /// Total climb value for ordering positions: each rank spans 400 points,
    /// each division 100, plus current score.
    pub fn ladder_value(&self) -> i64 {
        let division_value = match self.division {
            Some(d) => d.index() as i64 * 100,
            None => 0,
        };
        self.rank.index() as i64 * 400 + division_value + self.score
    }
}

impl Default for RankPosition {
    fn default() -> Self {
        RankPosition::floor()
    }
}

impl fmt::Display for RankPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.division {
            Some(d) => write!(f, "{} {} ({} pts)", self.rank, d, self.score),
            None => write!(f, "{} ({} pts)", self.rank, self.score),
        }
    }
}

/// Identifier for a catalog item
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert_eq!(Rank::all().len(), 10);
        assert_eq!(Rank::Iron.next(), Some(Rank::Bronze));
        assert_eq!(Rank::Challenger.next(), None);
        assert_eq!(Rank::Iron.previous(), None);
        assert_eq!(Rank::Master.previous(), Some(Rank::Diamond));
    }

    #[test]
    fn test_difficulty_monotonic() {
        let mut last = 0.0;
        for rank in Rank::all() {
            let mult = rank.difficulty_multiplier();
            assert!(mult > last, "{} multiplier not increasing", rank);
            last = mult;
        }
    }

    #[test]
    fn test_division_steps() {
        assert_eq!(Division::Four.advanced(), Some(Division::Three));
        assert_eq!(Division::One.advanced(), None);
        assert_eq!(Division::One.retreated(), Some(Division::Two));
        assert_eq!(Division::Four.retreated(), None);
    }

    #[test]
    fn test_divisionless_tiers() {
        assert!(Rank::Diamond.has_divisions());
        assert!(!Rank::Master.has_divisions());
        assert!(!Rank::Grandmaster.has_divisions());
        assert!(!Rank::Challenger.has_divisions());
    }

    #[test]
    fn test_position_validity() {
        assert!(RankPosition::floor().is_valid());
        assert!(RankPosition::new(Rank::Master, None, 50).is_valid());
        assert!(!RankPosition::new(Rank::Master, Some(Division::One), 0).is_valid());
        assert!(!RankPosition::new(Rank::Gold, None, 0).is_valid());
    }

    #[test]
    fn test_ladder_value_ordering() {
        let low = RankPosition::new(Rank::Silver, Some(Division::Two), 40);
        let high = RankPosition::new(Rank::Gold, Some(Division::Four), 0);
        assert!(high.ladder_value() > low.ladder_value());

        let master = RankPosition::new(Rank::Master, None, 0);
        let diamond_one = RankPosition::new(Rank::Diamond, Some(Division::One), 99);
        assert!(master.ladder_value() > diamond_one.ladder_value());
    }

    #[test]
    fn test_rank_serde_names() {
        let json = serde_json::to_string(&Rank::Grandmaster).unwrap();
        assert_eq!(json, "\"GRANDMASTER\"");
        let division = serde_json::to_string(&Division::Four).unwrap();
        assert_eq!(division, "\"4\"");
    }
}
