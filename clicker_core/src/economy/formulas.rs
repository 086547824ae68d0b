//! Outcome and reward formulas
//!
//! Each stat influences play through exactly one lever: utility stats raise
//! win odds, offensive stats raise score gains, defensive stats soften score
//! losses, and mobility raises currency winnings. The shop's stat taxonomy
//! therefore maps one-to-one onto these functions.

use crate::config::GameConstants;
use crate::stats::StatVector;
use crate::types::Rank;

/// Score units for the slow-moving pressure terms in gain/loss/currency
const PRESSURE_SCORE_UNIT: f64 = 10_000.0;
/// Score units for the fast-moving pressure term in win chance
const WIN_SCORE_UNIT: f64 = 100.0;

fn clamped_score(score: i64) -> f64 {
    score.max(0) as f64
}

/// Probability of winning the next match, clamped to the configured band.
///
/// Utility stats, total inventory value, and owned champions push the odds
/// up; rank difficulty and accumulated score push them back down.
pub fn win_chance(
    stats: &StatVector,
    inventory_value: u64,
    champion_count: u32,
    rank: Rank,
    score: i64,
    cfg: &GameConstants,
) -> f64 {
    let wc = &cfg.win_chance;
    let eff = &cfg.efficiency;

    let stat_bonus = (stats.ability_power * eff.ability_power
        + stats.ability_haste * eff.ability_haste
        + stats.mana * eff.mana
        + stats.mana_regen * eff.mana_regen
        + stats.magic_pen * eff.magic_pen)
        * wc.stat_scale;

    let difficulty = rank.difficulty_multiplier();
    let top_difficulty = Rank::Challenger.difficulty_multiplier();

    // Full value contribution requires proportionally more inventory the
    // higher the rank.
    let gold_target = wc.value_gold_target * (difficulty / top_difficulty);
    let value_bonus = ((inventory_value as f64 / gold_target) * wc.value_cap).min(wc.value_cap);

    let champion_bonus = champion_count as f64 / wc.champion_divisor;

    let pressure = difficulty + (clamped_score(score) / WIN_SCORE_UNIT) * wc.score_scaling;
    let raw = (wc.base + stat_bonus + value_bonus + champion_bonus) / pressure;

    raw.clamp(wc.min, wc.max)
}

/// Score gained on a win. Offensive stats raise it, rank difficulty and
/// accumulated score suppress it. Never below the configured minimum.
pub fn score_gain(stats: &StatVector, rank: Rank, score: i64, base: i64, cfg: &GameConstants) -> i64 {
    let eff = &cfg.efficiency;

    let stat_bonus = (stats.attack_damage * eff.attack_damage
        + stats.lethality * eff.lethality
        + stats.armor_pen * eff.armor_pen
        + stats.attack_speed * eff.attack_speed
        + stats.crit_chance * eff.crit_chance
        + stats.lifesteal * eff.lifesteal)
        / 100.0;

    let pressure = (rank.difficulty_multiplier()
        + (clamped_score(score) / PRESSURE_SCORE_UNIT) * cfg.score.gain_scaling)
        .powf(cfg.score.pressure_exponent);

    let gain = ((base as f64 + stat_bonus) / pressure).round() as i64;
    gain.max(cfg.score.min_gain)
}

/// Score lost on a defeat. Defensive stats mitigate it, rank pressure grows
/// it. Never zero or negative.
pub fn score_loss(stats: &StatVector, rank: Rank, score: i64, cfg: &GameConstants) -> i64 {
    let eff = &cfg.efficiency;

    let mitigation = (stats.armor * eff.armor
        + stats.magic_resist * eff.magic_resist
        + stats.health * eff.health)
        / 100.0;

    let pressure = (rank.difficulty_multiplier() + clamped_score(score) / PRESSURE_SCORE_UNIT)
        .powf(cfg.score.pressure_exponent);

    let loss = (cfg.score.base_loss + pressure - mitigation).round() as i64;
    loss.max(cfg.score.min_loss)
}

/// Currency won on a victory. Mobility stats raise it, rank pressure chips
/// away at it, and it never drops below the configured minimum.
pub fn currency_gain(
    stats: &StatVector,
    rank: Rank,
    score: i64,
    base: i64,
    cfg: &GameConstants,
) -> i64 {
    let cc = &cfg.currency;

    let speed_bonus = stats.move_speed * cc.flat_speed_weight
        + stats.move_speed_percent * cc.percent_speed_weight;
    let raw = base as f64 * (1.0 + speed_bonus / cc.speed_divisor);

    let penalty = (rank.difficulty_multiplier() - 1.0) * cc.pressure_scale
        + clamped_score(score) / PRESSURE_SCORE_UNIT;

    ((raw - penalty).round() as i64).max(cc.minimum)
}
