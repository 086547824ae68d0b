//! Game state - the player record, inventory, and persistence shape

mod store;

pub use store::{FileStateStore, GameStateStore, MemoryStateStore};

use crate::catalog::Inventory;
use crate::types::{Division, Rank, RankPosition};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bounded histories keep only this many most-recent entries
pub const HISTORY_LIMIT: usize = 100;

/// State persistence error
#[derive(Error, Debug)]
pub enum StateError {
    #[error("failed to access save file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("failed to encode game state: {0}")]
    EncodeError(#[from] serde_json::Error),
}

/// Everything tracked about the local player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerState {
    pub username: String,
    pub position: RankPosition,
    pub currency: u64,
    pub wins: u32,
    pub losses: u32,
    pub last_score_delta: i64,
    pub last_currency_delta: i64,
    /// Signed score deltas of the most recent matches
    pub score_history: Vec<i64>,
    /// Rank held going into each of the most recent matches
    pub rank_history: Vec<Rank>,
    /// Division held going into each of the most recent matches
    pub division_history: Vec<Option<Division>>,
    /// Owned collectible champions; feeds the win-chance bonus
    pub champions_owned: u32,
}

impl PlayerState {
    /// Fresh player at the bottom of the ladder
    pub fn new(username: impl Into<String>) -> Self {
        PlayerState {
            username: username.into(),
            ..PlayerState::default()
        }
    }

    /// Record one match into the bounded histories: the position held going
    /// in, and the signed score delta that came out.
    pub fn record_match(&mut self, rank: Rank, division: Option<Division>, score_delta: i64) {
        push_bounded(&mut self.rank_history, rank);
        push_bounded(&mut self.division_history, division);
        push_bounded(&mut self.score_history, score_delta);
    }

    /// Matches played so far
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState {
            username: String::new(),
            position: RankPosition::floor(),
            currency: 500,
            wins: 0,
            losses: 0,
            last_score_delta: 0,
            last_currency_delta: 0,
            score_history: Vec::new(),
            rank_history: Vec::new(),
            division_history: Vec::new(),
            champions_owned: 0,
        }
    }
}

fn push_bounded<T>(history: &mut Vec<T>, value: T) {
    history.push(value);
    if history.len() > HISTORY_LIMIT {
        let excess = history.len() - HISTORY_LIMIT;
        history.drain(..excess);
    }
}

/// The complete game state. Created once with defaults, mutated only
/// through the engine and ledger operations, persisted after every
/// mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    pub player: PlayerState,
    pub inventory: Inventory,
    /// Base currency won per victorious match, before mobility bonuses
    pub base_currency_per_action: i64,
    /// Base score gained per victorious match, before stat bonuses
    pub base_score_per_action: i64,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            player: PlayerState::default(),
            inventory: Inventory::new(),
            base_currency_per_action: 10,
            base_score_per_action: 20,
        }
    }
}

impl GameState {
    /// Fresh state for a named player
    pub fn new(username: impl Into<String>) -> Self {
        GameState {
            player: PlayerState::new(username),
            ..GameState::default()
        }
    }
}

/// Serialize a state to its JSON persistence blob
pub fn to_json(state: &GameState) -> Result<String, StateError> {
    Ok(serde_json::to_string(state)?)
}

/// Deserialize a persistence blob, falling back to the initial state when
/// the blob is malformed. A corrupted save never crashes the caller.
pub fn from_json(blob: &str) -> GameState {
    serde_json::from_str(blob).unwrap_or_default()
}
