use alloc::vec::Vec;

use super::*;

/// Seeded Fisher-Yates placement: shuffle every position except the first
/// click and take the leading `mines` entries. Terminates for any mine
/// density, where rejection sampling degenerates near-full boards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShuffledGenerator {
    seed: u64,
}

impl ShuffledGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineLayoutGenerator for ShuffledGenerator {
    fn generate(self, config: GameConfig, first: Coord2) -> Result<MineLayout> {
        use rand::prelude::*;

        let (width, height) = config.size;
        if first.0 >= width || first.1 >= height {
            return Err(GameError::OutOfRange);
        }
        if !config.is_playable() {
            log::warn!(
                "cannot place {} mines on a {}x{} board and keep the first cell safe",
                config.mines,
                width,
                height
            );
            return Err(GameError::TooManyMines);
        }

        let mut candidates: Vec<Coord2> = (0..width)
            .flat_map(|x| (0..height).map(move |y| (x, y)))
            .filter(|&pos| pos != first)
            .collect();

        // is_playable guarantees candidates.len() >= config.mines
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let (mines, _) = candidates.partial_shuffle(&mut rng, config.mines.into());

        MineLayout::from_mine_coords(config.size, mines)
    }
}
