#![no_std]

extern crate alloc;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use minefield::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod minefield;
mod types;

/// Board dimensions and mine count for one game.
///
/// The three classic difficulty presets are provided as constants, but they
/// are plain data: the presentation layer owns the selection and may pass any
/// other configuration into [`Minefield::create`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const EASY: Self = Self::new((9, 9), 10);
    pub const MEDIUM: Self = Self::new((16, 14), 40);
    pub const HARD: Self = Self::new((30, 16), 99);

    pub const fn new(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Looks up a difficulty preset by its conventional label.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "EASY" => Some(Self::EASY),
            "MEDIUM" => Some(Self::MEDIUM),
            "HARD" => Some(Self::HARD),
            _ => None,
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// A configuration is playable when at least one cell stays free of
    /// mines, so placement can always exclude the first revealed position.
    pub const fn is_playable(&self) -> bool {
        self.mines < self.total_cells()
    }
}

/// Immutable mine placement: which cells of the board hold mines.
///
/// Layouts come out of a [`MineLayoutGenerator`] in normal play; tests and
/// custom generators build them directly with [`MineLayout::from_mine_coords`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfRange);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mine_mask.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len().try_into().unwrap()
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask[coords.to_nd_index()]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        moore_neighbors(coords, self.size())
            .filter(|&pos| self.contains_mine(pos))
            .count()
            .try_into()
            .unwrap()
    }

    /// Expands the mask into the per-cell truth grid of mines and counts.
    pub(crate) fn into_ground(self) -> Array2<GroundCell> {
        let size = self.size();
        Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            let pos = (x as Coord, y as Coord);
            if self.contains_mine(pos) {
                GroundCell::Mine
            } else {
                GroundCell::Clear(self.adjacent_mine_count(pos))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_classic_difficulties() {
        assert_eq!(GameConfig::preset("EASY"), Some(GameConfig::new((9, 9), 10)));
        assert_eq!(
            GameConfig::preset("MEDIUM"),
            Some(GameConfig::new((16, 14), 40))
        );
        assert_eq!(
            GameConfig::preset("HARD"),
            Some(GameConfig::new((30, 16), 99))
        );
        assert_eq!(GameConfig::preset("NIGHTMARE"), None);
    }

    #[test]
    fn playability_requires_one_free_cell() {
        assert!(GameConfig::new((2, 2), 3).is_playable());
        assert!(!GameConfig::new((2, 2), 4).is_playable());
        assert!(GameConfig::new((1, 1), 0).is_playable());
    }

    #[test]
    fn layout_rejects_out_of_range_mines() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::OutOfRange)
        );
    }

    #[test]
    fn layout_counts_distinct_mines_once() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (0, 0), (2, 2)]).unwrap();
        assert_eq!(layout.mine_count(), 2);
        assert!(layout.contains_mine((0, 0)));
        assert!(!layout.contains_mine((1, 1)));
    }

    #[test]
    fn adjacency_counts_clip_at_edges() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (1, 0)]).unwrap();
        assert_eq!(layout.adjacent_mine_count((0, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((2, 0)), 1);
        assert_eq!(layout.adjacent_mine_count((2, 2)), 0);
        // a mine cell also carries a count of its own neighbors
        assert_eq!(layout.adjacent_mine_count((0, 0)), 1);
    }

    #[test]
    fn ground_grid_mirrors_mask_and_counts() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(1, 1)]).unwrap();
        let ground = layout.into_ground();
        assert_eq!(ground[(1, 1)], GroundCell::Mine);
        assert_eq!(ground[(0, 0)], GroundCell::Clear(1));
        assert_eq!(ground[(1, 0)], GroundCell::Clear(1));
        assert_eq!(ground[(0, 1)], GroundCell::Clear(1));
    }
}
