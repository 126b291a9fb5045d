use crate::*;
pub use shuffled::*;

mod shuffled;

/// Strategy for placing mines before the first cell is opened.
///
/// Implementations must leave `first` free of mines so the opening reveal
/// can never lose the game.
pub trait MineLayoutGenerator {
    fn generate(self, config: GameConfig, first: Coord2) -> Result<MineLayout>;
}
