use crate::*;
pub use random::*;

mod random;

/// Produces the initial board for a game session.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Board;
}
