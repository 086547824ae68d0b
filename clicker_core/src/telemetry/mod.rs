//! Leaderboard telemetry - outbound snapshots of the local player and the
//! inbound list of other players, display-only
//!
//! The transport behind the sink is somebody else's problem; the engine
//! only defines the snapshot shape, the publish/receive seam, and the
//! publish throttle. Inbound snapshots are never fed back into the local
//! game state.

use crate::state::GameState;
use crate::types::{Division, ItemId, Rank};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Telemetry channel failure
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("leaderboard channel unavailable: {0}")]
    Unavailable(String),
}

/// One player's public ladder summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub username: String,
    pub rank: Rank,
    pub division: Option<Division>,
    pub score: i64,
    pub wins: u32,
    pub losses: u32,
    pub currency: u64,
    /// Ids of the highest-value owned stacks, most valuable first
    pub top_owned_items: Vec<ItemId>,
}

impl PlayerSnapshot {
    /// Capture the local player's current summary, keeping the `top_n`
    /// most valuable stacks.
    pub fn capture(state: &GameState, top_n: usize) -> Self {
        let mut stacks: Vec<_> = state.inventory.values().collect();
        stacks.sort_by(|a, b| b.stack_value().cmp(&a.stack_value()));

        PlayerSnapshot {
            username: state.player.username.clone(),
            rank: state.player.position.rank,
            division: state.player.position.division,
            score: state.player.position.score,
            wins: state.player.wins,
            losses: state.player.losses,
            currency: state.player.currency,
            top_owned_items: stacks
                .into_iter()
                .take(top_n)
                .map(|entry| entry.item.id.clone())
                .collect(),
        }
    }

    /// Climb value used to order leaderboard rows
    pub fn ladder_value(&self) -> i64 {
        let division_value = match self.division {
            Some(d) => d.index() as i64 * 100,
            None => 0,
        };
        self.rank.index() as i64 * 400 + division_value + self.score
    }
}

/// One-way channel to the shared leaderboard
pub trait LeaderboardSink {
    /// Push the local player's summary
    fn publish(&mut self, snapshot: &PlayerSnapshot) -> Result<(), TelemetryError>;

    /// The most recent summaries of all known players, best first
    fn latest(&self) -> Vec<PlayerSnapshot>;
}

/// In-memory sink for tests and headless drivers: keeps the newest
/// snapshot per username.
#[derive(Debug, Default)]
pub struct MemorySink {
    players: Vec<PlayerSnapshot>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }
}

impl LeaderboardSink for MemorySink {
    fn publish(&mut self, snapshot: &PlayerSnapshot) -> Result<(), TelemetryError> {
        match self
            .players
            .iter_mut()
            .find(|p| p.username == snapshot.username)
        {
            Some(existing) => *existing = snapshot.clone(),
            None => self.players.push(snapshot.clone()),
        }
        Ok(())
    }

    fn latest(&self) -> Vec<PlayerSnapshot> {
        let mut players = self.players.clone();
        players.sort_by_key(|p| std::cmp::Reverse(p.ladder_value()));
        players
    }
}

/// Rate limit for snapshot publishes. Clocked by caller-supplied instants
/// so tests control time.
#[derive(Debug)]
pub struct SnapshotThrottle {
    min_interval: Duration,
    last_publish: Option<Instant>,
}

impl SnapshotThrottle {
    pub fn new(min_interval: Duration) -> Self {
        SnapshotThrottle { min_interval, last_publish: None }
    }

    /// Whether a publish is allowed at `now`; if so, the throttle arms
    /// itself for the next interval.
    pub fn try_publish(&mut self, now: Instant) -> bool {
        let ready = match self.last_publish {
            Some(last) => now.duration_since(last) >= self.min_interval,
            None => true,
        };
        if ready {
            self.last_publish = Some(now);
        }
        ready
    }
}
