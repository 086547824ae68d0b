//! Inventory ledger - purchases with component discounts, partial-stack
//! sales, and upgrade discovery
//!
//! Every operation takes a state snapshot and returns a new one; a rejected
//! transaction leaves the input untouched.

use crate::catalog::{Catalog, InventoryEntry, Inventory, Item};
use crate::config::TradeConstants;
use crate::state::GameState;
use crate::types::ItemId;
use std::collections::BTreeMap;
use thiserror::Error;

/// Transaction rejection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient funds: need {required}, have {available}")]
    InsufficientFunds { required: u64, available: u64 },
    #[error("item {0} is not in the inventory")]
    UnknownItem(ItemId),
    #[error("invalid quantity {requested} (owned {owned})")]
    InvalidQuantity { requested: u32, owned: u32 },
}

/// How many of each component one unit of the recipe requires.
/// Duplicate ids in the component list mean the recipe needs that
/// component more than once.
fn required_components(item: &Item) -> BTreeMap<&ItemId, u32> {
    let mut required = BTreeMap::new();
    for id in &item.components {
        *required.entry(id).or_insert(0) += 1;
    }
    required
}

/// Unit cost after crediting owned components.
///
/// Each required component credits `min(owned, required) * its cost`;
/// components the player does not own contribute no discount, so a missing
/// component simply means paying closer to face cost. Never below zero.
pub fn discounted_unit_cost(item: &Item, inventory: &Inventory) -> u64 {
    let mut discount = 0u64;
    for (id, required) in required_components(item) {
        if let Some(entry) = inventory.get(id) {
            let usable = entry.count.min(required) as u64;
            discount += usable * entry.item.cost;
        }
    }
    item.cost.saturating_sub(discount)
}

/// Buy `quantity` units of an item.
///
/// The discounted unit cost is locked in before components are consumed;
/// consumption is capped at the owned stack so counts never go negative.
/// Insufficient funds reject the purchase with the state unchanged.
pub fn purchase(state: &GameState, item: &Item, quantity: u32) -> Result<GameState, LedgerError> {
    if quantity == 0 {
        return Err(LedgerError::InvalidQuantity { requested: 0, owned: 0 });
    }

    let unit_cost = discounted_unit_cost(item, &state.inventory);
    let total_cost = unit_cost * quantity as u64;

    if state.player.currency < total_cost {
        return Err(LedgerError::InsufficientFunds {
            required: total_cost,
            available: state.player.currency,
        });
    }

    let mut next = state.clone();

    for (id, per_unit) in required_components(item) {
        let mut drained = false;
        if let Some(entry) = next.inventory.get_mut(id) {
            let consumed = entry.count.min(per_unit * quantity);
            entry.count -= consumed;
            drained = entry.count == 0;
        }
        if drained {
            next.inventory.remove(id);
        }
    }

    match next.inventory.get_mut(&item.id) {
        Some(entry) => entry.count += quantity,
        None => {
            next.inventory
                .insert(item.id.clone(), InventoryEntry::new(item.clone(), quantity));
        }
    }

    next.player.currency -= total_cost;
    next.player.last_currency_delta = -(total_cost as i64);
    Ok(next)
}

/// Sell `count` units from an owned stack at 70% of face cost per unit.
///
/// Selling more than the owned count is a caller error and is rejected
/// outright rather than clamped; the stack is removed once it reaches zero.
pub fn sell(
    state: &GameState,
    id: &ItemId,
    count: u32,
    cfg: &TradeConstants,
) -> Result<GameState, LedgerError> {
    let entry = state
        .inventory
        .get(id)
        .ok_or_else(|| LedgerError::UnknownItem(id.clone()))?;

    if count == 0 || count > entry.count {
        return Err(LedgerError::InvalidQuantity {
            requested: count,
            owned: entry.count,
        });
    }

    let unit_credit = (entry.item.cost as f64 * cfg.sell_ratio).floor() as u64;
    let credit = unit_credit * count as u64;

    let mut next = state.clone();
    let remaining = {
        let entry = next.inventory.get_mut(id).expect("stack checked above");
        entry.count -= count;
        entry.count
    };
    if remaining == 0 {
        next.inventory.remove(id);
    }

    next.player.currency += credit;
    next.player.last_currency_delta = credit as i64;
    Ok(next)
}

/// Catalog items buildable from something already owned: their component
/// list intersects the owned ids and the item itself is not yet owned.
pub fn available_upgrades<'a>(catalog: &'a Catalog, inventory: &Inventory) -> Vec<&'a Item> {
    catalog
        .items()
        .iter()
        .filter(|item| {
            item.is_recipe()
                && !inventory.contains_key(&item.id)
                && item.components.iter().any(|c| inventory.contains_key(c))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatVector;

    fn item(id: &str, cost: u64, components: &[&str]) -> Item {
        Item {
            id: ItemId::from(id),
            name: id.to_string(),
            cost,
            stats: StatVector::default(),
            components: components.iter().map(|c| ItemId::from(*c)).collect(),
        }
    }

    fn state_with(currency: u64, stacks: &[(Item, u32)]) -> GameState {
        let mut state = GameState::default();
        state.player.currency = currency;
        for (item, count) in stacks {
            state
                .inventory
                .insert(item.id.clone(), InventoryEntry::new(item.clone(), *count));
        }
        state
    }

    #[test]
    fn test_discount_credits_owned_component() {
        // Cost 100 with one owned component costing 40 discounts to 60
        let component = item("comp", 40, &[]);
        let recipe = item("recipe", 100, &["comp"]);
        let state = state_with(1000, &[(component, 1)]);

        assert_eq!(discounted_unit_cost(&recipe, &state.inventory), 60);
    }

    #[test]
    fn test_purchase_consumes_capped_components() {
        // Buying 2 units with 1 owned component: 60 * 2 = 120 total,
        // one component consumed.
        let component = item("comp", 40, &[]);
        let recipe = item("recipe", 100, &["comp"]);
        let state = state_with(1000, &[(component, 1)]);

        let next = purchase(&state, &recipe, 2).unwrap();
        assert_eq!(next.player.currency, 880);
        assert_eq!(next.player.last_currency_delta, -120);
        assert!(!next.inventory.contains_key(&ItemId::from("comp")));
        assert_eq!(next.inventory[&ItemId::from("recipe")].count, 2);
    }

    #[test]
    fn test_missing_component_means_no_discount() {
        let recipe = item("recipe", 100, &["comp"]);
        let state = state_with(1000, &[]);

        assert_eq!(discounted_unit_cost(&recipe, &state.inventory), 100);
        let next = purchase(&state, &recipe, 1).unwrap();
        assert_eq!(next.player.currency, 900);
    }

    #[test]
    fn test_duplicate_components_count_twice() {
        let sword = item("sword", 350, &[]);
        let recipe = item("dirk", 1000, &["sword", "sword"]);
        let state = state_with(5000, &[(sword, 2)]);

        assert_eq!(discounted_unit_cost(&recipe, &state.inventory), 300);
        let next = purchase(&state, &recipe, 1).unwrap();
        assert_eq!(next.player.currency, 4700);
        assert!(!next.inventory.contains_key(&ItemId::from("sword")));
    }

    #[test]
    fn test_discount_never_goes_below_zero() {
        let gem = item("gem", 900, &[]);
        let trinket = item("trinket", 500, &["gem"]);
        let state = state_with(100, &[(gem, 1)]);

        assert_eq!(discounted_unit_cost(&trinket, &state.inventory), 0);
        let next = purchase(&state, &trinket, 1).unwrap();
        assert_eq!(next.player.currency, 100);
    }

    #[test]
    fn test_insufficient_funds_leaves_state_unchanged() {
        let blade = item("blade", 3000, &[]);
        let state = state_with(250, &[]);

        let err = purchase(&state, &blade, 1).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientFunds { required: 3000, available: 250 }
        );
        // Caller keeps the original snapshot; nothing was moved.
        assert_eq!(state.player.currency, 250);
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn test_purchase_stacks_existing_entry() {
        let potion = item("potion", 50, &[]);
        let state = state_with(500, &[(potion.clone(), 3)]);

        let next = purchase(&state, &potion, 2).unwrap();
        assert_eq!(next.inventory[&ItemId::from("potion")].count, 5);
        assert_eq!(next.player.currency, 400);
    }

    #[test]
    fn test_zero_quantity_purchase_rejected() {
        let potion = item("potion", 50, &[]);
        let state = state_with(500, &[]);
        assert!(matches!(
            purchase(&state, &potion, 0),
            Err(LedgerError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_sell_partial_stack() {
        // Selling 3 of a 5-stack at cost 50 credits floor(50 * 0.7) * 3 = 105
        let potion = item("potion", 50, &[]);
        let state = state_with(0, &[(potion, 5)]);

        let next = sell(&state, &ItemId::from("potion"), 3, &TradeConstants::default()).unwrap();
        assert_eq!(next.player.currency, 105);
        assert_eq!(next.player.last_currency_delta, 105);
        assert_eq!(next.inventory[&ItemId::from("potion")].count, 2);
    }

    #[test]
    fn test_sell_full_stack_removes_entry() {
        let potion = item("potion", 50, &[]);
        let state = state_with(0, &[(potion, 2)]);

        let next = sell(&state, &ItemId::from("potion"), 2, &TradeConstants::default()).unwrap();
        assert!(!next.inventory.contains_key(&ItemId::from("potion")));
        assert_eq!(next.player.currency, 70);
    }

    #[test]
    fn test_sell_rejects_overdraw_and_unknown() {
        let potion = item("potion", 50, &[]);
        let state = state_with(0, &[(potion, 2)]);
        let trade = TradeConstants::default();

        assert_eq!(
            sell(&state, &ItemId::from("potion"), 3, &trade).unwrap_err(),
            LedgerError::InvalidQuantity { requested: 3, owned: 2 }
        );
        assert_eq!(
            sell(&state, &ItemId::from("ghost"), 1, &trade).unwrap_err(),
            LedgerError::UnknownItem(ItemId::from("ghost"))
        );
    }

    #[test]
    fn test_sale_price_ignores_discounts() {
        // Sale credit comes from face cost, not the discounted build cost
        let component = item("comp", 40, &[]);
        let recipe = item("recipe", 100, &["comp"]);
        let state = state_with(1000, &[(component, 1)]);

        let bought = purchase(&state, &recipe, 1).unwrap();
        let sold = sell(&bought, &ItemId::from("recipe"), 1, &TradeConstants::default()).unwrap();
        // Paid 60, credited floor(100 * 0.7) = 70
        assert_eq!(sold.player.currency, 1000 - 60 + 70);
    }

    #[test]
    fn test_available_upgrades() {
        let sword = item("sword", 350, &[]);
        let dirk = item("dirk", 1000, &["sword", "sword"]);
        let staff = item("staff", 1200, &["rod"]);
        let owned_recipe = item("axe", 900, &["sword"]);
        let catalog = Catalog::new(vec![
            sword.clone(),
            dirk.clone(),
            staff.clone(),
            owned_recipe.clone(),
        ]);

        let state = state_with(0, &[(sword, 1), (owned_recipe, 1)]);
        let upgrades = available_upgrades(&catalog, &state.inventory);

        let ids: Vec<&ItemId> = upgrades.iter().map(|i| &i.id).collect();
        // dirk builds from an owned sword; staff needs an unowned rod;
        // axe is already owned.
        assert_eq!(ids, vec![&ItemId::from("dirk")]);
    }
}
