//! Per-stat gold value weights
//!
//! Each weight is the currency price of one point of the stat, derived from
//! the cheapest basic item granting it (e.g. 350 currency buys 10 attack
//! damage, so one point is worth 35). The formulas use these weights to turn
//! heterogeneous stat bundles into comparable bonuses.

use serde::{Deserialize, Serialize};

/// Gold value of a single point of each stat
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatEfficiency {
    pub attack_damage: f64,
    pub ability_power: f64,
    pub ability_haste: f64,
    pub armor: f64,
    pub armor_pen: f64,
    pub attack_speed: f64,
    pub crit_chance: f64,
    pub health: f64,
    pub health_regen: f64,
    pub lethality: f64,
    pub lifesteal: f64,
    pub magic_pen: f64,
    pub magic_pen_percent: f64,
    pub magic_resist: f64,
    pub mana: f64,
    pub mana_regen: f64,
    pub move_speed: f64,
}

impl Default for StatEfficiency {
    fn default() -> Self {
        StatEfficiency {
            attack_damage: 35.0,
            ability_power: 20.0,
            ability_haste: 50.0,
            armor: 20.0,
            armor_pen: 35.0,
            attack_speed: 25.0,
            crit_chance: 40.0,
            health: 2.67,
            health_regen: 3.0,
            lethality: 35.0,
            lifesteal: 55.0,
            magic_pen: 35.0,
            magic_pen_percent: 50.0,
            magic_resist: 20.0,
            mana: 1.0,
            mana_regen: 4.0,
            move_speed: 12.0,
        }
    }
}
