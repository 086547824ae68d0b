//! clicker_core - Progression engine for the ranked-ladder clicker
//!
//! This library provides:
//! - StatVector aggregation: derived stats from the owned-item inventory
//! - Economy formulas: win chance, score gain/loss, currency winnings
//! - RankLadder: the promotion/demotion state machine over ten tiers
//! - InventoryLedger: purchases with component discounts, partial sales
//! - ProgressionEngine: one match event resolved into a new game state
//!
//! Everything is synchronous and snapshot-in/snapshot-out: operations take
//! a `GameState`, never mutate it, and return the next one. Persistence,
//! catalogs, and the leaderboard transport sit behind ports at the edges.

pub mod catalog;
pub mod config;
pub mod economy;
pub mod engine;
pub mod ladder;
pub mod ledger;
pub mod prelude;
pub mod stats;
pub mod state;
pub mod telemetry;
pub mod types;

// Re-export core types for convenience
pub use catalog::{Catalog, CatalogError, Inventory, InventoryEntry, Item};
pub use config::{ConfigError, GameConstants, LadderConstants, TradeConstants};
pub use economy::{currency_gain, score_gain, score_loss, win_chance, StatEfficiency};
pub use engine::{ActionReport, ProgressionEngine};
pub use ladder::apply_score_delta;
pub use ledger::{available_upgrades, discounted_unit_cost, purchase, sell, LedgerError};
pub use stats::{aggregate, inventory_value, StatVector};
pub use state::{
    from_json, to_json, FileStateStore, GameState, GameStateStore, MemoryStateStore, PlayerState,
    StateError,
};
pub use telemetry::{LeaderboardSink, MemorySink, PlayerSnapshot, SnapshotThrottle};
pub use types::{Division, ItemId, Rank, RankPosition};
