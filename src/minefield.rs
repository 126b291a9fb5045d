use alloc::collections::VecDeque;
use alloc::string::String;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Whether the game is still accepting moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game of minesweeper.
///
/// A `Minefield` is a value: [`reveal`](Self::reveal) and
/// [`flag`](Self::flag) leave `self` untouched and return the successor
/// state. A UI that re-renders from the returned value can never observe a
/// half-applied move, and rapid repeated gestures serialize trivially by
/// always acting on the most recent value.
///
/// The game is won by flagging all mines with no spare flags, never by
/// opening every safe cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    config: GameConfig,
    ground: Array2<GroundCell>,
    view: Array2<ViewCell>,
    flag_count: CellCount,
    state: GameState,
}

impl Minefield {
    /// Starts a game: places mines away from `first`, precomputes every
    /// adjacency count, and opens `first` before returning, so the caller
    /// always receives a board with the opening region already revealed.
    pub fn create(config: GameConfig, first: Coord2, seed: u64) -> Result<Self> {
        let layout = ShuffledGenerator::new(seed).generate(config, first)?;
        Self::with_layout(layout, first)
    }

    /// Starts a game from an explicit mine placement, for callers that bring
    /// their own [`MineLayoutGenerator`] and for deterministic tests.
    pub fn with_layout(layout: MineLayout, first: Coord2) -> Result<Self> {
        let size = layout.size();
        if first.0 >= size.0 || first.1 >= size.1 {
            return Err(GameError::OutOfRange);
        }
        if layout.mine_count() >= layout.total_cells() {
            return Err(GameError::TooManyMines);
        }
        if layout.contains_mine(first) {
            return Err(GameError::MineAtFirstReveal);
        }

        let config = GameConfig::new(size, layout.mine_count());
        let field = Self {
            config,
            ground: layout.into_ground(),
            view: Array2::default(size.to_nd_index()),
            flag_count: 0,
            state: GameState::Playing,
        };
        log::debug!(
            "new {}x{} minefield with {} mines, opening {:?}",
            size.0,
            size.1,
            config.mines,
            first
        );
        field.reveal(first)
    }

    pub const fn state(&self) -> GameState {
        self.state
    }

    pub const fn config(&self) -> GameConfig {
        self.config
    }

    pub const fn size(&self) -> Coord2 {
        self.config.size
    }

    pub const fn width(&self) -> Coord {
        self.config.size.0
    }

    pub const fn height(&self) -> Coord {
        self.config.size.1
    }

    pub const fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub const fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Mines minus flags, the usual counter display. Negative when the
    /// player has placed more flags than there are mines.
    pub const fn mines_left(&self) -> i32 {
        self.config.mines as i32 - self.flag_count as i32
    }

    /// The player-visible grid, indexed by `[x, y]`.
    pub fn view(&self) -> &Array2<ViewCell> {
        &self.view
    }

    pub fn view_cell(&self, pos: Coord2) -> Result<ViewCell> {
        let pos = self.checked_pos(pos)?;
        Ok(self.view[pos.to_nd_index()])
    }

    /// Opens a cell, flood-filling through zero-count regions.
    ///
    /// Opening a mine loses the game and marks that one cell as the blast
    /// site. Flagged and already-open cells are left untouched, and any call
    /// after the game has finished returns the state unchanged.
    pub fn reveal(&self, pos: Coord2) -> Result<Self> {
        let pos = self.checked_pos(pos)?;
        let mut next = self.clone();
        if !self.state.is_finished() {
            next.open_cell(pos);
        }
        Ok(next)
    }

    /// Places or removes a flag on an unopened cell.
    ///
    /// Flagging the last unflagged mine with no spare flags wins the game;
    /// flags sitting on safe cells count toward [`flag_count`](Self::flag_count)
    /// but never toward the win. Open cells and finished games are left
    /// unchanged.
    pub fn flag(&self, pos: Coord2) -> Result<Self> {
        let pos = self.checked_pos(pos)?;
        let mut next = self.clone();
        if self.state.is_finished() {
            return Ok(next);
        }

        match next.view[pos.to_nd_index()] {
            ViewCell::Hidden => {
                next.view[pos.to_nd_index()] = ViewCell::Flagged;
                next.flag_count += 1;
                if next.all_mines_flagged() {
                    next.state = GameState::Won;
                    log::debug!("all {} mines flagged, game won", next.config.mines);
                }
            }
            ViewCell::Flagged => {
                next.view[pos.to_nd_index()] = ViewCell::Hidden;
                next.flag_count -= 1;
            }
            ViewCell::Open(_) | ViewCell::Mine => {}
        }

        Ok(next)
    }

    /// Text dump of the visible grid, one row per line.
    pub fn render_view(&self) -> String {
        let (width, height) = self.config.size;
        let mut out = String::with_capacity((usize::from(width) + 1) * usize::from(height));
        for y in 0..height {
            for x in 0..width {
                out.push(self.view[(x, y).to_nd_index()].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn open_cell(&mut self, pos: Coord2) {
        if self.view[pos.to_nd_index()] != ViewCell::Hidden {
            return;
        }

        match self.ground[pos.to_nd_index()] {
            GroundCell::Mine => {
                self.view[pos.to_nd_index()] = ViewCell::Mine;
                self.state = GameState::Lost;
                log::debug!("mine hit at {:?}, game lost", pos);
            }
            GroundCell::Clear(count) => {
                self.view[pos.to_nd_index()] = ViewCell::Open(count);
                if count == 0 {
                    self.flood_from(pos);
                }
            }
        }
    }

    /// Worklist flood fill from a freshly opened zero-count cell. Each cell
    /// enters the queue only while hidden, so the loop is bounded by the
    /// grid size.
    fn flood_from(&mut self, start: Coord2) {
        let mut to_visit: VecDeque<Coord2> = self
            .neighbors(start)
            .filter(|&pos| self.view[pos.to_nd_index()] == ViewCell::Hidden)
            .collect();

        while let Some(pos) = to_visit.pop_front() {
            // opened through an earlier queue entry, or flagged meanwhile
            if self.view[pos.to_nd_index()] != ViewCell::Hidden {
                continue;
            }

            // neighbors of a zero-count cell are never mines
            let GroundCell::Clear(count) = self.ground[pos.to_nd_index()] else {
                continue;
            };
            self.view[pos.to_nd_index()] = ViewCell::Open(count);
            log::trace!("flood opened {:?}, adjacent mines: {}", pos, count);

            if count == 0 {
                to_visit.extend(
                    self.neighbors(pos)
                        .filter(|&next| self.view[next.to_nd_index()] == ViewCell::Hidden),
                );
            }
        }
    }

    fn all_mines_flagged(&self) -> bool {
        self.flag_count == self.config.mines
            && self
                .ground
                .iter()
                .zip(self.view.iter())
                .all(|(&ground, &view)| !ground.is_mine() || view == ViewCell::Flagged)
    }

    fn neighbors(&self, pos: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        moore_neighbors(pos, self.config.size)
    }

    fn checked_pos(&self, pos: Coord2) -> Result<Coord2> {
        let (width, height) = self.config.size;
        if pos.0 < width && pos.1 < height {
            Ok(pos)
        } else {
            Err(GameError::OutOfRange)
        }
    }
}
