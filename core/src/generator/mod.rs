use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Produces a fresh board for a validated configuration. A session keeps its
/// generator around and calls it again on every restart.
pub trait BoardGenerator {
    fn generate(&mut self, config: &GameConfig) -> Result<Board>;
}
