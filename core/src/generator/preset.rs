use super::*;

/// Always produces the same hand-placed layout, useful for replays and
/// scripted scenarios.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetBoardGenerator {
    mines: Vec<Coord2>,
}

impl PresetBoardGenerator {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }
}

impl BoardGenerator for PresetBoardGenerator {
    fn generate(&mut self, config: &GameConfig) -> Result<Board> {
        let board = Board::from_mine_coords(config.size(), &self.mines)?;

        if board.mine_count() != config.mine_count() {
            log::warn!(
                "Preset layout has {} mines but the configuration asks for {}",
                board.mine_count(),
                config.mine_count()
            );
            return Err(GameError::InvalidConfiguration);
        }

        Ok(board)
    }
}
