//! StatVector - the fixed-shape bundle of combat and economy attributes

use serde::{Deserialize, Serialize};

/// Aggregated numeric attributes granted by owned items.
///
/// Every field is present and defaults to zero; absent fields in catalog
/// data deserialize to zero, never to a missing key. Percent-scale fields
/// (crit chance, attack speed, penetration percent, move speed percent)
/// store whole percentage points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatVector {
    // === Offense ===
    pub attack_damage: f64,
    pub ability_power: f64,
    pub attack_speed: f64,
    pub crit_chance: f64,
    pub lethality: f64,
    pub armor_pen: f64,
    pub magic_pen: f64,
    pub magic_pen_percent: f64,

    // === Defense ===
    pub armor: f64,
    pub magic_resist: f64,
    pub health: f64,
    pub health_regen: f64,
    pub tenacity: f64,

    // === Resources ===
    pub mana: f64,
    pub mana_regen: f64,
    pub ability_haste: f64,

    // === Utility ===
    pub move_speed: f64,
    pub move_speed_percent: f64,
    pub heal_shield_power: f64,
    pub lifesteal: f64,
    pub omnivamp: f64,
}

impl StatVector {
    /// An all-zero vector
    pub fn zero() -> Self {
        StatVector::default()
    }

    /// Add `other * factor` into this vector, field by field.
    /// Used by aggregation to fold in a stack of `factor` copies of an item.
    pub fn add_scaled(&mut self, other: &StatVector, factor: f64) {
        self.attack_damage += other.attack_damage * factor;
        self.ability_power += other.ability_power * factor;
        self.attack_speed += other.attack_speed * factor;
        self.crit_chance += other.crit_chance * factor;
        self.lethality += other.lethality * factor;
        self.armor_pen += other.armor_pen * factor;
        self.magic_pen += other.magic_pen * factor;
        self.magic_pen_percent += other.magic_pen_percent * factor;
        self.armor += other.armor * factor;
        self.magic_resist += other.magic_resist * factor;
        self.health += other.health * factor;
        self.health_regen += other.health_regen * factor;
        self.tenacity += other.tenacity * factor;
        self.mana += other.mana * factor;
        self.mana_regen += other.mana_regen * factor;
        self.ability_haste += other.ability_haste * factor;
        self.move_speed += other.move_speed * factor;
        self.move_speed_percent += other.move_speed_percent * factor;
        self.heal_shield_power += other.heal_shield_power * factor;
        self.lifesteal += other.lifesteal * factor;
        self.omnivamp += other.omnivamp * factor;
    }

    /// Whether every field of `other` is within `epsilon` of this vector
    pub fn approx_eq(&self, other: &StatVector, epsilon: f64) -> bool {
        let pairs = [
            (self.attack_damage, other.attack_damage),
            (self.ability_power, other.ability_power),
            (self.attack_speed, other.attack_speed),
            (self.crit_chance, other.crit_chance),
            (self.lethality, other.lethality),
            (self.armor_pen, other.armor_pen),
            (self.magic_pen, other.magic_pen),
            (self.magic_pen_percent, other.magic_pen_percent),
            (self.armor, other.armor),
            (self.magic_resist, other.magic_resist),
            (self.health, other.health),
            (self.health_regen, other.health_regen),
            (self.tenacity, other.tenacity),
            (self.mana, other.mana),
            (self.mana_regen, other.mana_regen),
            (self.ability_haste, other.ability_haste),
            (self.move_speed, other.move_speed),
            (self.move_speed_percent, other.move_speed_percent),
            (self.heal_shield_power, other.heal_shield_power),
            (self.lifesteal, other.lifesteal),
            (self.omnivamp, other.omnivamp),
        ];
        pairs.iter().all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let stats = StatVector::default();
        assert!((stats.attack_damage).abs() < f64::EPSILON);
        assert!((stats.omnivamp).abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_scaled() {
        let mut total = StatVector::zero();
        let item = StatVector {
            attack_damage: 10.0,
            health: 150.0,
            ..StatVector::default()
        };
        total.add_scaled(&item, 3.0);
        assert!((total.attack_damage - 30.0).abs() < f64::EPSILON);
        assert!((total.health - 450.0).abs() < f64::EPSILON);
        assert!((total.mana).abs() < f64::EPSILON);
    }

    #[test]
    fn test_absent_fields_deserialize_to_zero() {
        let stats: StatVector = serde_json::from_str(r#"{"attackDamage": 25}"#).unwrap();
        assert!((stats.attack_damage - 25.0).abs() < f64::EPSILON);
        assert!((stats.armor).abs() < f64::EPSILON);
    }
}
