//! ProgressionEngine - one match event, end to end
//!
//! Aggregates stats, rolls the outcome, applies the reward formulas and
//! the ladder transition, and returns a new state snapshot. The RNG is
//! injected so whole sessions replay deterministically.

use crate::config::GameConstants;
use crate::economy::{currency_gain, score_gain, score_loss, win_chance};
use crate::ladder::apply_score_delta;
use crate::stats::{aggregate, inventory_value};
use crate::state::GameState;
use rand::Rng;

/// What one processed match did
#[derive(Debug, Clone, PartialEq)]
pub struct ActionReport {
    pub win: bool,
    /// Critical wins double the score gain
    pub crit: bool,
    /// The probability the outcome was rolled against
    pub win_chance: f64,
    pub score_delta: i64,
    pub currency_delta: i64,
    pub promoted: bool,
    pub demoted: bool,
}

/// Drives match resolution against a set of tuned constants
pub struct ProgressionEngine {
    constants: GameConstants,
}

impl ProgressionEngine {
    pub fn new(constants: GameConstants) -> Self {
        ProgressionEngine { constants }
    }

    /// Engine with the default tuning
    pub fn with_defaults() -> Self {
        ProgressionEngine::new(GameConstants::default())
    }

    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    /// Process one match: roll the outcome, move score and currency, walk
    /// the ladder, and record histories. The input snapshot is untouched;
    /// the new state and a report of what happened are returned.
    pub fn process_action(&self, state: &GameState, rng: &mut impl Rng) -> (GameState, ActionReport) {
        let stats = aggregate(&state.inventory);
        let value = inventory_value(&state.inventory);
        let position = state.player.position;

        let chance = win_chance(
            &stats,
            value,
            state.player.champions_owned,
            position.rank,
            position.score,
            &self.constants,
        );

        // Crit needs attack damage on board; the crit stat is percent-scale.
        let crit_chance = if stats.attack_damage > 0.0 {
            (stats.crit_chance / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let crit = rng.gen::<f64>() < crit_chance;
        let win = rng.gen::<f64>() < chance;

        let score_delta = if win {
            let gain = score_gain(
                &stats,
                position.rank,
                position.score,
                state.base_score_per_action,
                &self.constants,
            );
            if crit {
                gain * 2
            } else {
                gain
            }
        } else {
            -score_loss(&stats, position.rank, position.score, &self.constants)
        };

        let currency_delta = if win {
            currency_gain(
                &stats,
                position.rank,
                position.score,
                state.base_currency_per_action,
                &self.constants,
            )
        } else {
            0
        };

        let new_position = apply_score_delta(&position, score_delta, &self.constants.ladder);

        let mut next = state.clone();
        next.player
            .record_match(position.rank, position.division, score_delta);
        next.player.position = new_position;
        next.player.currency += currency_delta as u64;
        next.player.last_score_delta = score_delta;
        next.player.last_currency_delta = currency_delta;
        if win {
            next.player.wins += 1;
        } else {
            next.player.losses += 1;
        }

        let report = ActionReport {
            win,
            crit: crit && win,
            win_chance: chance,
            score_delta,
            currency_delta,
            promoted: new_position.rank > position.rank
                || (new_position.rank == position.rank
                    && new_position.division > position.division),
            demoted: new_position.rank < position.rank
                || (new_position.rank == position.rank
                    && new_position.division < position.division),
        };

        (next, report)
    }
}
