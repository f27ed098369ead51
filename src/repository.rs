//! Tournament storage collaborator.
//!
//! The engine works on one tournament snapshot at a time. A repository hands
//! out snapshots, serializes mutations per tournament and only commits a
//! mutation that succeeded.

use crate::error::{Result, TournamentError};
use crate::models::{MatchupId, Tournament, TournamentId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Storage for tournaments.
pub trait TournamentRepository: Send + Sync {
    /// Store a new tournament. Fails if the id is already taken.
    fn insert(&self, tournament: Tournament) -> Result<()>;

    /// Snapshot of a stored tournament.
    fn load(&self, id: TournamentId) -> Result<Tournament>;

    /// Run `op` on a tournament while holding its lock.
    ///
    /// `op` sees a private copy; the copy replaces the stored tournament only
    /// when `op` returns `Ok`.
    fn update<T, F>(&self, id: TournamentId, op: F) -> Result<T>
    where
        F: FnOnce(&mut Tournament) -> Result<T>;

    /// Tournament owning the matchup.
    fn locate_matchup(&self, matchup: MatchupId) -> Result<TournamentId>;

    fn ids(&self) -> Vec<TournamentId>;
}

type Slot = Arc<Mutex<Tournament>>;

/// In-memory repository: one mutex per tournament.
#[derive(Default)]
pub struct InMemoryRepository {
    tournaments: RwLock<HashMap<TournamentId, Slot>>,
    matchups: RwLock<HashMap<MatchupId, TournamentId>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, id: TournamentId) -> Result<Slot> {
        self.tournaments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or(TournamentError::TournamentNotFound(id))
    }

    fn index_matchups(&self, tournament: &Tournament) {
        let mut index = self.matchups.write().unwrap_or_else(PoisonError::into_inner);
        for m in tournament.rounds.iter().flat_map(|r| r.matchups()) {
            index.insert(m.id, tournament.id);
        }
    }
}

impl TournamentRepository for InMemoryRepository {
    fn insert(&self, tournament: Tournament) -> Result<()> {
        let mut map = self.tournaments.write().unwrap_or_else(PoisonError::into_inner);
        if map.contains_key(&tournament.id) {
            return Err(TournamentError::AlreadyExists(tournament.id));
        }
        self.index_matchups(&tournament);
        map.insert(tournament.id, Arc::new(Mutex::new(tournament)));
        Ok(())
    }

    fn load(&self, id: TournamentId) -> Result<Tournament> {
        let slot = self.slot(id)?;
        let guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn update<T, F>(&self, id: TournamentId, op: F) -> Result<T>
    where
        F: FnOnce(&mut Tournament) -> Result<T>,
    {
        let slot = self.slot(id)?;
        let mut guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
        let mut snapshot = guard.clone();
        let value = op(&mut snapshot)?;
        self.index_matchups(&snapshot);
        *guard = snapshot;
        Ok(value)
    }

    fn locate_matchup(&self, matchup: MatchupId) -> Result<TournamentId> {
        self.matchups
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&matchup)
            .copied()
            .ok_or(TournamentError::MatchupNotFound(matchup))
    }

    fn ids(&self) -> Vec<TournamentId> {
        self.tournaments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect()
    }
}
