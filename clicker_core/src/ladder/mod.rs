//! Rank ladder state machine
//!
//! Applies a signed score delta to a ladder position and resolves the
//! resulting promotion or demotion. The machine is cyclic in both
//! directions: bounded below at Iron IV / 0 and unbounded above at
//! Challenger, where score simply keeps accumulating.

use crate::config::LadderConstants;
use crate::types::{Division, Rank, RankPosition};

/// Apply a score delta and resolve at most one promotion or demotion.
///
/// Overflow past a threshold does not carry over: landing scores are reset
/// to 0 on promotion and to the configured soft landing on demotion.
/// The input position must satisfy [`RankPosition::is_valid`]; an illegal
/// rank/division pairing is a programmer error, not a runtime condition.
pub fn apply_score_delta(
    position: &RankPosition,
    delta: i64,
    cfg: &LadderConstants,
) -> RankPosition {
    debug_assert!(position.is_valid(), "illegal ladder position {:?}", position);

    let score = position.score + delta;

    match position.division {
        Some(division) => resolve_divisioned(position.rank, division, score, cfg),
        None => resolve_open_pool(position.rank, score, cfg),
    }
}

/// Promotion/demotion rules for Iron through Diamond
fn resolve_divisioned(
    rank: Rank,
    division: Division,
    score: i64,
    cfg: &LadderConstants,
) -> RankPosition {
    if score >= cfg.promotion_score {
        return match division.advanced() {
            // Interior division step: IV -> III -> II -> I
            Some(next) => RankPosition::new(rank, Some(next), 0),
            // Division I: promote out of the rank
            None => match rank.next() {
                Some(next_rank) if next_rank.has_divisions() => {
                    RankPosition::new(next_rank, Some(Division::Four), 0)
                }
                Some(next_rank) => RankPosition::new(next_rank, None, 0),
                // No rank above a divisioned rank is unreachable, but hold
                // at the threshold rather than invent a state.
                None => RankPosition::new(rank, Some(division), cfg.promotion_score - 1),
            },
        };
    }

    if score < 0 {
        return match division.retreated() {
            // Interior division step down, soft landing
            Some(lower) => RankPosition::new(rank, Some(lower), cfg.demotion_landing),
            // Division IV: demote out of the rank
            None => match rank.previous() {
                Some(prev_rank) => {
                    RankPosition::new(prev_rank, Some(Division::One), cfg.demotion_landing)
                }
                // Absolute floor: Iron IV holds at score 0
                None => RankPosition::new(rank, Some(division), 0),
            },
        };
    }

    RankPosition::new(rank, Some(division), score)
}

/// Promotion/demotion rules for the divisionless top tiers
fn resolve_open_pool(rank: Rank, score: i64, cfg: &LadderConstants) -> RankPosition {
    if score < 0 {
        // Demote into the rank below; only Master crosses back into
        // divisioned territory.
        let prev_rank = match rank.previous() {
            Some(prev) => prev,
            None => return RankPosition::new(rank, None, 0),
        };
        let division = if prev_rank.has_divisions() {
            Some(Division::One)
        } else {
            None
        };
        return RankPosition::new(prev_rank, division, cfg.demotion_landing);
    }

    match rank {
        Rank::Master if score >= cfg.master_promotion => {
            RankPosition::new(Rank::Grandmaster, None, 0)
        }
        Rank::Grandmaster if score >= cfg.grandmaster_promotion => {
            RankPosition::new(Rank::Challenger, None, 0)
        }
        // Challenger (and sub-threshold Master/Grandmaster) just accumulate
        _ => RankPosition::new(rank, None, score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> LadderConstants {
        LadderConstants::default()
    }

    fn pos(rank: Rank, division: Option<Division>, score: i64) -> RankPosition {
        RankPosition::new(rank, division, score)
    }

    #[test]
    fn test_interior_gain_keeps_position() {
        let next = apply_score_delta(&pos(Rank::Silver, Some(Division::Two), 40), 25, &cfg());
        assert_eq!(next, pos(Rank::Silver, Some(Division::Two), 65));
    }

    #[test]
    fn test_division_promotion() {
        let next = apply_score_delta(&pos(Rank::Silver, Some(Division::Three), 90), 15, &cfg());
        assert_eq!(next, pos(Rank::Silver, Some(Division::Two), 0));
    }

    #[test]
    fn test_rank_promotion_enters_division_four() {
        let next = apply_score_delta(&pos(Rank::Silver, Some(Division::One), 95), 20, &cfg());
        assert_eq!(next, pos(Rank::Gold, Some(Division::Four), 0));
    }

    #[test]
    fn test_diamond_one_promotes_to_master_without_division() {
        let next = apply_score_delta(&pos(Rank::Diamond, Some(Division::One), 99), 1, &cfg());
        assert_eq!(next, pos(Rank::Master, None, 0));
    }

    #[test]
    fn test_division_demotion_soft_landing() {
        let next = apply_score_delta(&pos(Rank::Gold, Some(Division::Two), 10), -30, &cfg());
        assert_eq!(next, pos(Rank::Gold, Some(Division::Three), 75));
    }

    #[test]
    fn test_rank_demotion_lands_in_division_one() {
        let next = apply_score_delta(&pos(Rank::Gold, Some(Division::Four), 5), -10, &cfg());
        assert_eq!(next, pos(Rank::Silver, Some(Division::One), 75));
    }

    #[test]
    fn test_floor_never_demotes_below_iron_four() {
        let next = apply_score_delta(&pos(Rank::Iron, Some(Division::Four), 3), -500, &cfg());
        assert_eq!(next, pos(Rank::Iron, Some(Division::Four), 0));
    }

    #[test]
    fn test_master_promotes_at_two_hundred() {
        let held = apply_score_delta(&pos(Rank::Master, None, 150), 40, &cfg());
        assert_eq!(held, pos(Rank::Master, None, 190));

        let promoted = apply_score_delta(&pos(Rank::Master, None, 190), 30, &cfg());
        assert_eq!(promoted, pos(Rank::Grandmaster, None, 0));
    }

    #[test]
    fn test_grandmaster_promotes_at_five_hundred() {
        let promoted = apply_score_delta(&pos(Rank::Grandmaster, None, 480), 25, &cfg());
        assert_eq!(promoted, pos(Rank::Challenger, None, 0));
    }

    #[test]
    fn test_master_demotes_into_diamond_one() {
        let next = apply_score_delta(&pos(Rank::Master, None, 10), -15, &cfg());
        assert_eq!(next, pos(Rank::Diamond, Some(Division::One), 75));
    }

    #[test]
    fn test_grandmaster_demotes_to_master() {
        let next = apply_score_delta(&pos(Rank::Grandmaster, None, 4), -20, &cfg());
        assert_eq!(next, pos(Rank::Master, None, 75));
    }

    #[test]
    fn test_challenger_demotes_to_grandmaster() {
        let next = apply_score_delta(&pos(Rank::Challenger, None, 12), -40, &cfg());
        assert_eq!(next, pos(Rank::Grandmaster, None, 75));
    }

    #[test]
    fn test_challenger_score_unbounded() {
        let mut position = pos(Rank::Challenger, None, 0);
        for _ in 0..100 {
            position = apply_score_delta(&position, 250, &cfg());
            assert_eq!(position.rank, Rank::Challenger);
            assert_eq!(position.division, None);
        }
        assert_eq!(position.score, 25_000);
    }

    #[test]
    fn test_promotion_demotion_round_trip_stays_adjacent() {
        // +100 then -100 from an interior division must land within one
        // division of the start.
        let start = pos(Rank::Platinum, Some(Division::Three), 50);
        let up = apply_score_delta(&start, 100, &cfg());
        let back = apply_score_delta(&up, -100, &cfg());

        assert_eq!(back.rank, Rank::Platinum);
        let start_idx = Division::Three.index() as i32;
        let back_idx = back.division.unwrap().index() as i32;
        assert!((start_idx - back_idx).abs() <= 1);
        assert!((0..100).contains(&back.score));
    }

    #[test]
    fn test_every_transition_preserves_validity() {
        for rank in Rank::all() {
            let divisions: Vec<Option<Division>> = if rank.has_divisions() {
                Division::all().iter().map(|d| Some(*d)).collect()
            } else {
                vec![None]
            };
            for division in divisions {
                for score in [0, 50, 99] {
                    for delta in [-250, -100, -1, 0, 1, 100, 600] {
                        let next =
                            apply_score_delta(&pos(*rank, division, score), delta, &cfg());
                        assert!(next.is_valid(), "invalid from {:?} {:?}", rank, division);
                        assert!(next.score >= 0);
                    }
                }
            }
        }
    }
}
