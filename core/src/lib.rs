use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use neighbors::*;
pub use session::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod neighbors;
mod session;
mod snapshot;
#[cfg(test)]
mod testing;
mod types;

/// Board height used when nothing else is requested.
pub const DEFAULT_ROWS: Coord = 5;

/// Board width used when nothing else is requested.
pub const DEFAULT_COLS: Coord = 6;

/// Fraction of cells that are mines when nothing else is requested.
pub const DEFAULT_DENSITY: f64 = 0.1;

/// Validated generation parameters, kept by a [`Session`] so it can restart.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigParams", into = "ConfigParams")]
pub struct GameConfig {
    size: Coord2,
    density: f64,
    mines: CellCount,
}

impl GameConfig {
    /// Checks that `density` yields at least one mine and at least one safe cell.
    ///
    /// The mine count is `floor(rows * cols * density)`.
    pub fn new(rows: Coord, cols: Coord, density: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&density) {
            log::warn!("Rejected mine density {}, must be within [0, 1)", density);
            return Err(GameError::InvalidConfiguration);
        }

        let total_cells = mult(rows, cols);
        let mines = (f64::from(total_cells) * density).floor() as CellCount;
        if mines == 0 || mines >= total_cells {
            log::warn!(
                "Rejected {}x{} board with density {}, it would have {} mines",
                rows,
                cols,
                density,
                mines
            );
            return Err(GameError::InvalidConfiguration);
        }

        Ok(Self::new_unchecked((rows, cols), density, mines))
    }

    const fn new_unchecked(size: Coord2, density: f64, mines: CellCount) -> Self {
        Self {
            size,
            density,
            mines,
        }
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn density(&self) -> f64 {
        self.density
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        // 5 * 6 * 0.1 = 3 mines
        Self::new_unchecked((DEFAULT_ROWS, DEFAULT_COLS), DEFAULT_DENSITY, 3)
    }
}

/// Serialized form of [`GameConfig`], the mine count is always recomputed.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
struct ConfigParams {
    rows: Coord,
    cols: Coord,
    density: f64,
}

impl From<GameConfig> for ConfigParams {
    fn from(config: GameConfig) -> Self {
        Self {
            rows: config.rows(),
            cols: config.cols(),
            density: config.density(),
        }
    }
}

impl TryFrom<ConfigParams> for GameConfig {
    type Error = GameError;

    fn try_from(params: ConfigParams) -> Result<Self> {
        Self::new(params.rows, params.cols, params.density)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoOp,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoOp => false,
            Revealed => true,
            HitMine => true,
        }
    }
}
