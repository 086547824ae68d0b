//! GameStateStore - the persistence port
//!
//! The engine never touches storage directly; callers load a snapshot,
//! run operations on it, and save the result through this port.

use super::{from_json, to_json, GameState, StateError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

/// Load/save boundary for the opaque game-state blob
pub trait GameStateStore {
    /// Load the saved state, or the initial state when nothing valid is
    /// stored. Never fails: a missing or corrupted save means a fresh game.
    fn load(&self) -> GameState;

    /// Persist a snapshot
    fn save(&self, state: &GameState) -> Result<(), StateError>;

    /// Discard any saved state, returning the game to its defaults
    fn reset(&self) -> Result<(), StateError>;
}

/// File-backed store keeping the state as a single JSON document
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStateStore { path: path.into() }
    }
}

impl GameStateStore for FileStateStore {
    fn load(&self) -> GameState {
        match fs::read_to_string(&self.path) {
            Ok(blob) => from_json(&blob),
            Err(_) => GameState::default(),
        }
    }

    fn save(&self, state: &GameState) -> Result<(), StateError> {
        fs::write(&self.path, to_json(state)?)?;
        Ok(())
    }

    fn reset(&self) -> Result<(), StateError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store for tests and headless drivers
#[derive(Default)]
pub struct MemoryStateStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        MemoryStateStore::default()
    }
}

impl GameStateStore for MemoryStateStore {
    fn load(&self) -> GameState {
        match self.slot.lock().unwrap().as_deref() {
            Some(blob) => from_json(blob),
            None => GameState::default(),
        }
    }

    fn save(&self, state: &GameState) -> Result<(), StateError> {
        let blob = to_json(state)?;
        *self.slot.lock().unwrap() = Some(blob);
        Ok(())
    }

    fn reset(&self) -> Result<(), StateError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}
