//! Tunable game constants

use crate::economy::StatEfficiency;
use serde::{Deserialize, Serialize};

/// Tunable game constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConstants {
    pub win_chance: WinChanceConstants,
    pub score: ScoreConstants,
    pub currency: CurrencyConstants,
    pub ladder: LadderConstants,
    pub trade: TradeConstants,
    pub efficiency: StatEfficiency,
}

impl Default for GameConstants {
    fn default() -> Self {
        GameConstants {
            win_chance: WinChanceConstants::default(),
            score: ScoreConstants::default(),
            currency: CurrencyConstants::default(),
            ladder: LadderConstants::default(),
            trade: TradeConstants::default(),
            efficiency: StatEfficiency::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinChanceConstants {
    /// Baseline probability before stats and pressure
    #[serde(default = "default_base_chance")]
    pub base: f64,
    /// Lower clamp - there is always some chance to win
    #[serde(default = "default_min_chance")]
    pub min: f64,
    /// Upper clamp - there is always some chance to lose
    #[serde(default = "default_max_chance")]
    pub max: f64,
    /// Scale applied to the weighted utility-stat sum
    #[serde(default = "default_stat_scale")]
    pub stat_scale: f64,
    /// Cap on the inventory-value contribution
    #[serde(default = "default_value_cap")]
    pub value_cap: f64,
    /// Inventory value that earns the full contribution at the top rank
    #[serde(default = "default_value_gold_target")]
    pub value_gold_target: f64,
    /// Owned collectibles needed for +1.0 before pressure division
    #[serde(default = "default_champion_divisor")]
    pub champion_divisor: f64,
    /// Weight of score/100 in the pressure denominator
    #[serde(default = "default_win_score_scaling")]
    pub score_scaling: f64,
}

impl Default for WinChanceConstants {
    fn default() -> Self {
        WinChanceConstants {
            base: 0.5,
            min: 0.05,
            max: 0.95,
            stat_scale: 0.0001,
            value_cap: 0.25,
            value_gold_target: 15_000.0,
            champion_divisor: 150.0,
            score_scaling: 0.2,
        }
    }
}

fn default_base_chance() -> f64 {
    0.5
}
fn default_min_chance() -> f64 {
    0.05
}
fn default_max_chance() -> f64 {
    0.95
}
fn default_stat_scale() -> f64 {
    0.0001
}
fn default_value_cap() -> f64 {
    0.25
}
fn default_value_gold_target() -> f64 {
    15_000.0
}
fn default_champion_divisor() -> f64 {
    150.0
}
fn default_win_score_scaling() -> f64 {
    0.2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreConstants {
    /// Base score lost on a defeat, before rank pressure and mitigation
    #[serde(default = "default_base_loss")]
    pub base_loss: f64,
    /// Exponent applied to the rank pressure term
    #[serde(default = "default_pressure_exponent")]
    pub pressure_exponent: f64,
    /// Weight of score/10000 in the gain pressure term
    #[serde(default = "default_gain_scaling")]
    pub gain_scaling: f64,
    /// Gains never drop below this
    #[serde(default = "default_min_gain")]
    pub min_gain: i64,
    /// Losses never drop below this
    #[serde(default = "default_min_loss")]
    pub min_loss: i64,
}

impl Default for ScoreConstants {
    fn default() -> Self {
        ScoreConstants {
            base_loss: 19.0,
            pressure_exponent: 1.1,
            gain_scaling: 0.3,
            min_gain: 1,
            min_loss: 1,
        }
    }
}

fn default_base_loss() -> f64 {
    19.0
}
fn default_pressure_exponent() -> f64 {
    1.1
}
fn default_gain_scaling() -> f64 {
    0.3
}
fn default_min_gain() -> i64 {
    1
}
fn default_min_loss() -> i64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConstants {
    /// Winnings never drop below this
    #[serde(default = "default_min_currency")]
    pub minimum: i64,
    /// Weight of flat move speed in the mobility bonus
    #[serde(default = "default_flat_speed_weight")]
    pub flat_speed_weight: f64,
    /// Weight of percent move speed in the mobility bonus
    #[serde(default = "default_percent_speed_weight")]
    pub percent_speed_weight: f64,
    /// Divisor turning the mobility bonus into a multiplier
    #[serde(default = "default_speed_divisor")]
    pub speed_divisor: f64,
    /// Scale of the rank-pressure penalty subtracted from winnings
    #[serde(default = "default_pressure_scale")]
    pub pressure_scale: f64,
}

impl Default for CurrencyConstants {
    fn default() -> Self {
        CurrencyConstants {
            minimum: 10,
            flat_speed_weight: 0.2,
            percent_speed_weight: 4.0,
            speed_divisor: 50.0,
            pressure_scale: 2.0,
        }
    }
}

fn default_min_currency() -> i64 {
    10
}
fn default_flat_speed_weight() -> f64 {
    0.2
}
fn default_percent_speed_weight() -> f64 {
    4.0
}
fn default_speed_divisor() -> f64 {
    50.0
}
fn default_pressure_scale() -> f64 {
    2.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderConstants {
    /// Score that promotes out of a division
    #[serde(default = "default_promotion_score")]
    pub promotion_score: i64,
    /// Score after landing in a lower division or rank
    #[serde(default = "default_demotion_landing")]
    pub demotion_landing: i64,
    /// Score that promotes out of Master
    #[serde(default = "default_master_promotion")]
    pub master_promotion: i64,
    /// Score that promotes out of Grandmaster
    #[serde(default = "default_grandmaster_promotion")]
    pub grandmaster_promotion: i64,
}

impl Default for LadderConstants {
    fn default() -> Self {
        LadderConstants {
            promotion_score: 100,
            demotion_landing: 75,
            master_promotion: 200,
            grandmaster_promotion: 500,
        }
    }
}

fn default_promotion_score() -> i64 {
    100
}
fn default_demotion_landing() -> i64 {
    75
}
fn default_master_promotion() -> i64 {
    200
}
fn default_grandmaster_promotion() -> i64 {
    500
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeConstants {
    /// Fraction of face cost credited per unit sold
    #[serde(default = "default_sell_ratio")]
    pub sell_ratio: f64,
}

impl Default for TradeConstants {
    fn default() -> Self {
        TradeConstants { sell_ratio: 0.7 }
    }
}

fn default_sell_ratio() -> f64 {
    0.7
}
