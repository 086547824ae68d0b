//! Prelude module for convenient imports
//!
//! ```rust
//! use clicker_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Division, ItemId, Rank, RankPosition};

// Stats
pub use crate::stats::{aggregate, inventory_value, StatVector};

// Catalog and inventory
pub use crate::catalog::{Catalog, Inventory, InventoryEntry, Item};

// Economy
pub use crate::economy::{currency_gain, score_gain, score_loss, win_chance};

// Ladder
pub use crate::ladder::apply_score_delta;

// Ledger
pub use crate::ledger::{available_upgrades, purchase, sell, LedgerError};

// Engine
pub use crate::engine::{ActionReport, ProgressionEngine};

// State and persistence
pub use crate::state::{GameState, GameStateStore, PlayerState};

// Config
pub use crate::config::GameConstants;
