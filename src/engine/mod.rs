//! Tournament engine.
//!
//! Owns the [`TournamentState`] and routes every mutation through a
//! method that checks its preconditions first. A rejected operation
//! returns an [`EngineError`] and leaves the state untouched.
//!
//! Lifecycle: `NotStarted -> InRound -> RoundComplete -> InRound -> ...`,
//! back to `NotStarted` only through [`TournamentEngine::reset`].

pub mod pairing;
pub mod scoring;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, info};

use crate::calculate::compute_standings;
use crate::models::{
    GameResult, Pairing, Player, PlayerId, RoundPhase, RoundRecord, TournamentState,
};

pub use pairing::generate_round_pairings;

/// Minimum roster size needed to start.
pub const DEFAULT_MIN_PLAYERS: usize = 2;

/// Rejected engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Cannot {action} after the tournament has started.")]
    AlreadyStarted { action: &'static str },

    #[error("Player name already exists: {0}")]
    DuplicateName(String),

    #[error("Add at least {required} players to start (have {actual}).")]
    NotEnoughPlayers { required: usize, actual: usize },

    #[error("The tournament has not started.")]
    NotStarted,

    #[error("Set all board results before completing the round ({missing} missing).")]
    ResultsIncomplete { missing: usize },

    #[error("Complete the current round before generating the next one.")]
    RoundInProgress,

    #[error("There is no round in progress.")]
    NoActiveRound,

    #[error("Pairing {index} does not exist (round has {len} pairings).")]
    PairingOutOfRange { index: usize, len: usize },

    #[error("Pairing {0} is a bye and takes no result.")]
    NotABoard(usize),
}

impl EngineError {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::AlreadyStarted { .. } => "ALREADY_STARTED",
            EngineError::DuplicateName(_) => "DUPLICATE_NAME",
            EngineError::NotEnoughPlayers { .. } => "NOT_ENOUGH_PLAYERS",
            EngineError::NotStarted => "NOT_STARTED",
            EngineError::ResultsIncomplete { .. } => "RESULTS_INCOMPLETE",
            EngineError::RoundInProgress => "ROUND_IN_PROGRESS",
            EngineError::NoActiveRound => "NO_ACTIVE_ROUND",
            EngineError::PairingOutOfRange { .. } => "PAIRING_OUT_OF_RANGE",
            EngineError::NotABoard(_) => "NOT_A_BOARD",
        }
    }
}

/// One tournament session.
#[derive(Clone)]
pub struct TournamentEngine {
    state: TournamentState,
    rng: StdRng,
    min_players: usize,
}

impl Default for TournamentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TournamentEngine {
    /// Fresh engine with an entropy-seeded shuffle.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Fresh engine with a deterministic shuffle.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            state: TournamentState::default(),
            rng,
            min_players: DEFAULT_MIN_PLAYERS,
        }
    }

    /// Restore an engine from a persisted snapshot.
    pub fn from_state(state: TournamentState, rng: StdRng) -> Self {
        Self {
            state,
            rng,
            min_players: DEFAULT_MIN_PLAYERS,
        }
    }

    /// Restore an engine whose shuffle is fixed by `seed` and the saved round.
    ///
    /// Each round draws from its own stream, so a process that reloads the
    /// snapshot before every command still gets a fresh order per round.
    pub fn resume_seeded(state: TournamentState, seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed.wrapping_add(u64::from(state.round)));
        Self::from_state(state, rng)
    }

    /// Raise the roster size required to start. Values below two are ignored.
    pub fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = min_players.max(DEFAULT_MIN_PLAYERS);
        self
    }

    pub fn state(&self) -> &TournamentState {
        &self.state
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    /// Find a player by name, ignoring case.
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        let name = name.trim();
        self.state.players.iter().find(|p| p.has_name(name))
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase()
    }

    pub fn min_players(&self) -> usize {
        self.min_players
    }

    pub fn can_start(&self) -> bool {
        !self.state.started && self.state.players.len() >= self.min_players
    }

    pub fn can_complete_round(&self) -> bool {
        self.state.started && self.state.active_pairings.iter().any(Pairing::is_board)
    }

    pub fn can_start_next_round(&self) -> bool {
        self.state.started && self.state.active_pairings.is_empty()
    }

    /// Add a player to the roster.
    ///
    /// Returns `Ok(None)` when the trimmed name is empty.
    pub fn add_player(&mut self, name: &str) -> Result<Option<PlayerId>, EngineError> {
        if self.state.started {
            return Err(EngineError::AlreadyStarted { action: "add players" });
        }

        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        if self.state.players.iter().any(|p| p.has_name(name)) {
            return Err(EngineError::DuplicateName(name.to_string()));
        }

        let player = Player::new(name.to_string());
        let id = player.id.clone();
        debug!(%id, name, "Added player");
        self.state.players.push(player);
        Ok(Some(id))
    }

    /// Remove a player. Unknown ids are ignored.
    pub fn remove_player(&mut self, id: &PlayerId) -> Result<Option<Player>, EngineError> {
        if self.state.started {
            return Err(EngineError::AlreadyStarted { action: "remove players" });
        }

        let removed = self
            .state
            .players
            .iter()
            .position(|p| &p.id == id)
            .map(|idx| self.state.players.remove(idx));

        if let Some(ref player) = removed {
            debug!(%id, name = %player.name, "Removed player");
        }
        Ok(removed)
    }

    /// Clear everything back to a fresh, unstarted tournament.
    pub fn reset(&mut self) {
        self.state = TournamentState::default();
        info!("Tournament reset");
    }

    /// Start round 1.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.state.started {
            return Err(EngineError::AlreadyStarted { action: "start again" });
        }
        if self.state.players.len() < self.min_players {
            return Err(EngineError::NotEnoughPlayers {
                required: self.min_players,
                actual: self.state.players.len(),
            });
        }

        self.state.started = true;
        self.state.round = 1;
        self.state.color_switch = 1;
        self.state.active_pairings = self.generate_round_pairings();

        info!(
            players = self.state.players.len(),
            boards = self.board_count(),
            "Tournament started"
        );
        Ok(())
    }

    /// Fresh pairings for the current roster and color-parity counter.
    pub fn generate_round_pairings(&mut self) -> Vec<Pairing> {
        generate_round_pairings(&self.state.players, self.state.color_switch, &mut self.rng)
    }

    /// Record (or clear) the pending result of an active board.
    pub fn set_pairing_result(
        &mut self,
        index: usize,
        result: Option<GameResult>,
    ) -> Result<(), EngineError> {
        if !self.state.started {
            return Err(EngineError::NotStarted);
        }

        let len = self.state.active_pairings.len();
        let pairing = self
            .state
            .active_pairings
            .get_mut(index)
            .ok_or(EngineError::PairingOutOfRange { index, len })?;

        match pairing {
            Pairing::Board {
                board,
                result: slot,
                ..
            } => {
                *slot = result;
                debug!(board = *board, result = ?result, "Result set");
                Ok(())
            }
            Pairing::Bye { .. } => Err(EngineError::NotABoard(index)),
        }
    }

    /// Score the active round and archive it into history.
    pub fn complete_round(&mut self) -> Result<RoundRecord, EngineError> {
        if !self.state.started {
            return Err(EngineError::NotStarted);
        }
        if self.state.active_pairings.is_empty() {
            return Err(EngineError::NoActiveRound);
        }

        let missing = self
            .state
            .active_pairings
            .iter()
            .filter(|p| p.is_pending())
            .count();
        if missing > 0 {
            return Err(EngineError::ResultsIncomplete { missing });
        }

        let pairings = std::mem::take(&mut self.state.active_pairings);
        scoring::settle_round(&mut self.state, &pairings);

        let record = RoundRecord::new(self.state.round, self.state.color_switch, pairings);
        info!(
            round = record.round,
            boards = record.board_count(),
            byes = record.bye_count(),
            "Round completed"
        );
        self.state.history.push(record.clone());
        Ok(record)
    }

    /// Advance to the next round and pair it.
    pub fn next_round(&mut self) -> Result<(), EngineError> {
        if !self.state.started {
            return Err(EngineError::NotStarted);
        }
        if !self.state.active_pairings.is_empty() {
            return Err(EngineError::RoundInProgress);
        }

        self.state.round += 1;
        self.state.color_switch += 1;
        self.state.active_pairings = self.generate_round_pairings();

        info!(
            round = self.state.round,
            color_switch = self.state.color_switch,
            "Round paired"
        );
        Ok(())
    }

    /// Players ranked by points, wins, then name.
    pub fn standings(&self) -> Vec<&Player> {
        compute_standings(&self.state.players)
    }

    fn board_count(&self) -> usize {
        self.state
            .active_pairings
            .iter()
            .filter(|p| p.is_board())
            .count()
    }
}
