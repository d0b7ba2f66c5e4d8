use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::ops::Index;

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod types;

/// How many scramble moves the generator applies to the all-dark board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveBudget {
    /// Draw the move count uniformly from `1..=rows*cols`.
    Random,
    /// Apply exactly this many moves.
    Exact(u32),
}

impl MoveBudget {
    /// Raw encoding used at the presentation boundary: `-1` means random.
    pub fn from_raw(raw: i32) -> Result<Self> {
        match raw {
            -1 => Ok(Self::Random),
            n if n >= 0 => Ok(Self::Exact(n as u32)),
            _ => Err(GameError::InvalidArgument(
                "target moves must be -1 or a non-negative integer",
            )),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub target_moves: MoveBudget,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, target_moves: MoveBudget) -> Self {
        Self { size, target_moves }
    }

    pub fn new((rows, cols): Coord2, target_moves: i32) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidArgument(
                "board dimensions must be positive",
            ));
        }
        Ok(Self::new_unchecked(
            (rows, cols),
            MoveBudget::from_raw(target_moves)?,
        ))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// The rows x cols matrix of lit/unlit cell states.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<bool>,
}

impl Board {
    /// The all-unlit board, the starting point for generation.
    pub fn all_dark(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    pub fn from_cells(cells: Array2<bool>) -> Self {
        Self { cells }
    }

    pub fn from_lit_coords(size: Coord2, lit_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::all_dark(size);

        for &coords in lit_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidArgument("lit cell out of bounds"));
            }
            board.cells[coords.to_nd_index()] = true;
        }

        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn lit_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|&&lit| lit)
            .count()
            .try_into()
            .unwrap()
    }

    /// The win condition: every cell lit. A pure function of the board,
    /// independent of move history.
    pub fn is_all_lit(&self) -> bool {
        self.cells.iter().all(|&lit| lit)
    }

    pub fn is_all_dark(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    pub fn contains(&self, (row, col): (i32, i32)) -> bool {
        let (rows, cols) = self.size();
        (0..i32::from(rows)).contains(&row) && (0..i32::from(cols)).contains(&col)
    }

    /// Inverts the target cell and its in-bounds orthogonal neighbors.
    /// Self-inverse, and toggles at distinct coordinates commute.
    pub fn toggle(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()] ^= true;
        for pos in self.cells.iter_neighbors(coords) {
            self.cells[pos.to_nd_index()] ^= true;
        }
    }

    /// Applies a player move to a fresh copy of the board. Total over all
    /// integer coordinates: out-of-bounds moves return an unmodified copy.
    pub fn apply_move(&self, (row, col): (i32, i32)) -> Board {
        let mut next = self.clone();
        if self.contains((row, col)) {
            next.toggle((row as Coord, col as Coord));
        }
        next
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

/// Outcome of a player move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    NoChange,
    Toggled,
    Won,
}

impl ToggleOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub const fn has_update(self) -> bool {
        use ToggleOutcome::*;
        match self {
            NoChange => false,
            Toggled => true,
            Won => true,
        }
    }
}
