//! Item catalog - the read-only list of purchasable items and recipes
//!
//! The catalog is authoritative external input. Beyond the component
//! discount rule the engine never validates its cross-references.

use crate::stats::StatVector;
use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Catalog loading error
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// A purchasable item: identity, price, stat bundle, and the component
/// items consumed (with cost credit) when it is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Face cost in currency, before any component discount
    pub cost: u64,
    #[serde(default)]
    pub stats: StatVector,
    /// Crafting prerequisites; duplicates mean the recipe needs that
    /// component more than once
    #[serde(default)]
    pub components: Vec<ItemId>,
}

impl Item {
    /// Whether this item is built from components
    pub fn is_recipe(&self) -> bool {
        !self.components.is_empty()
    }
}

/// An owned stack of a single item. `count` is always at least 1; a stack
/// that reaches zero is removed from the inventory entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub item: Item,
    pub count: u32,
}

impl InventoryEntry {
    pub fn new(item: Item, count: u32) -> Self {
        InventoryEntry { item, count }
    }

    /// Face value of the whole stack
    pub fn stack_value(&self) -> u64 {
        self.item.cost * self.count as u64
    }
}

/// The player's inventory: one entry per item id, counts absorb duplicates
pub type Inventory = BTreeMap<ItemId, InventoryEntry>;

/// The full item catalog, in feed order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from an already-loaded item list
    pub fn new(items: Vec<Item>) -> Self {
        Catalog { items }
    }

    /// Parse a catalog from a JSON array of items
    pub fn parse(json: &str) -> Result<Catalog, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Ok(Catalog { items })
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
        let content = fs::read_to_string(path)?;
        Catalog::parse(&content)
    }

    /// Look up an item by id
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// All items in feed order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
