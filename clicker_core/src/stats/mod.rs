//! Stat aggregation - derive one StatVector from the whole inventory

mod vector;

pub use vector::StatVector;

use crate::catalog::Inventory;

/// Sum the stat contributions of every stack in the inventory.
///
/// Pure fold over a map, so the result is independent of insertion order,
/// and a stack of N counts exactly as N single copies.
pub fn aggregate(inventory: &Inventory) -> StatVector {
    let mut total = StatVector::zero();
    for entry in inventory.values() {
        total.add_scaled(&entry.item.stats, entry.count as f64);
    }
    total
}

/// Total face value of the inventory, in currency
pub fn inventory_value(inventory: &Inventory) -> u64 {
    inventory.values().map(|entry| entry.stack_value()).sum()
}
