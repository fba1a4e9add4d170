use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Places exactly the configured number of mines, drawn uniformly without
/// replacement.
///
/// The RNG keeps advancing between calls, so restarts get new layouts while a
/// given seed always replays the same sequence of boards.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_random_seed() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, config: &GameConfig) -> Result<Board> {
        let (rows, cols) = config.size();
        let total_cells = usize::from(rows) * usize::from(cols);
        let mines = config.mine_count() as usize;

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        for place in index::sample(&mut self.rng, total_cells, mines) {
            mine_mask[from_linear_index(place, cols).to_nd_index()] = true;
        }

        let board = Board::from_mine_mask(mine_mask)?;

        // double check mine count
        if board.mine_count() != config.mine_count() {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                config.mine_count()
            );
            return Err(GameError::InvalidConfiguration);
        }

        log::debug!(
            "Generated {}x{} board with {} mines",
            rows,
            cols,
            board.mine_count()
        );
        Ok(board)
    }
}
