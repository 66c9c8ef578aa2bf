//! Process-wide game storage.

use crate::games::tictactoe::{Game, GameId};
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Store lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum StoreError {
    /// No game with the given identifier.
    #[display("game {id} not found")]
    NotFound {
        /// The identifier that was looked up.
        id: GameId,
    },
}

/// Owns every [`Game`] in the process.
///
/// Cloning is cheap and yields a handle to the same table. All access goes
/// through one reader/writer lock: lookups share it, creation and moves take
/// it exclusively.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    games: Arc<RwLock<HashMap<GameId, Game>>>,
}

impl GameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game store");
        Self::default()
    }

    // Writers never leave a record half-updated, so a poisoned lock still
    // guards a consistent table.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<GameId, Game>> {
        self.games.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<GameId, Game>> {
        self.games.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates a new game under a fresh identifier and returns a copy of it.
    #[instrument(skip(self))]
    pub fn create(&self) -> Game {
        let mut games = self.write();

        let mut id = Uuid::new_v4().to_string();
        while games.contains_key(&id) {
            warn!(game_id = %id, "Generated identifier already in use, regenerating");
            id = Uuid::new_v4().to_string();
        }

        let game = Game::new(id.clone());
        games.insert(id.clone(), game.clone());

        info!(game_id = %id, total = games.len(), "Created new game");
        game
    }

    /// Gets a copy of the game with the given identifier.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Result<Game, StoreError> {
        let games = self.read();
        games.get(id).cloned().ok_or_else(|| {
            debug!(game_id = id, "Game not found");
            StoreError::NotFound { id: id.to_string() }
        })
    }

    /// Applies `transition` to the stored game while holding the write lock.
    ///
    /// The transition sees the current record and returns its replacement.
    /// The replacement is stored only if the transition succeeds, so a
    /// rejected transition leaves the record untouched. Concurrent updates
    /// of the same game are serialized.
    #[instrument(skip(self, transition))]
    pub fn update<F, E>(&self, id: &str, transition: F) -> Result<Game, E>
    where
        F: FnOnce(&Game) -> Result<Game, E>,
        E: From<StoreError>,
    {
        let mut games = self.write();

        let current = games.get_mut(id).ok_or_else(|| {
            debug!(game_id = id, "Game not found for update");
            StoreError::NotFound { id: id.to_string() }
        })?;

        let next = transition(&*current)?;
        *current = next.clone();

        debug!(game_id = id, "Game updated");
        Ok(next)
    }

    /// Number of stored games.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no games have been created yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
