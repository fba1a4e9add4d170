use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Lost
/// - Playing -> Won
/// - any -> Playing (restart)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Moves are accepted
    Playing,
    /// A mine was revealed
    Lost,
    /// Every safe cell was revealed
    Won,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Represents a game from start to finish, and every game after it.
///
/// The session is the only owner of its board. Moves on a finished game are
/// ignored until [`Session::restart`] swaps in a freshly generated board.
#[derive(Clone, Debug)]
pub struct Session<G = RandomBoardGenerator> {
    config: GameConfig,
    generator: G,
    board: Board,
    state: GameState,
    triggered_mine: Option<Coord2>,
    version: u64,
}

impl Session<RandomBoardGenerator> {
    /// Start a game on a randomly seeded board.
    pub fn new(rows: Coord, cols: Coord, density: f64) -> Result<Self> {
        let config = GameConfig::new(rows, cols, density)?;
        Self::with_generator(config, RandomBoardGenerator::from_random_seed())
    }

    /// Start a game whose boards, including those after restarts, are
    /// reproducible from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomBoardGenerator::new(seed))
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }
}

impl<G: BoardGenerator> Session<G> {
    pub fn with_generator(config: GameConfig, mut generator: G) -> Result<Self> {
        let board = generator.generate(&config)?;
        log::debug!(
            "Session started on {}x{} board with {} mines",
            config.rows(),
            config.cols(),
            config.mine_count()
        );
        Ok(Self {
            config,
            generator,
            board,
            state: GameState::Playing,
            triggered_mine: None,
            version: 0,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    /// Bumped on every change to the board or state.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn mines_left(&self) -> i64 {
        self.board.mines_left()
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if self.state.is_finished() {
            log::debug!("Ignoring reveal at {:?}, game is {:?}", coords, self.state);
            return Ok(RevealOutcome::NoOp);
        }

        let outcome = self.board.reveal(coords)?;
        match outcome {
            RevealOutcome::NoOp => {}
            RevealOutcome::HitMine => {
                self.triggered_mine = Some(coords);
                self.end_game(GameState::Lost);
            }
            RevealOutcome::Revealed => {
                if self.board.all_safe_revealed() {
                    self.end_game(GameState::Won);
                }
            }
        }
        if outcome.has_update() {
            self.version += 1;
        }

        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if self.state.is_finished() {
            log::debug!("Ignoring flag at {:?}, game is {:?}", coords, self.state);
            return Ok(MarkOutcome::NoChange);
        }

        let outcome = self.board.toggle_flag(coords)?;
        if outcome.has_update() {
            self.version += 1;
        }

        Ok(outcome)
    }

    /// Discard the current board and deal a new one with the same configuration.
    pub fn restart(&mut self) -> Result<()> {
        let board = self.generator.generate(&self.config)?;
        log::debug!("Restarting, previous game was {:?}", self.state);

        self.board = board;
        self.state = GameState::Playing;
        self.triggered_mine = None;
        self.version += 1;

        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(self)
    }

    fn end_game(&mut self, state: GameState) {
        if self.state.is_finished() {
            return;
        }

        log::debug!("Game ended: {:?}", state);
        self.state = state;
    }
}
