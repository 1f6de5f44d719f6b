//! Random food placement on free cells.

use std::collections::HashSet;

use rand::Rng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::game::{Board, Cell};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("no free cell left on a board of {cells} cells")]
    BoardFull { cells: usize },
}

/// The single piece of food on the board and the random source used to place it.
#[derive(Debug)]
pub struct Food<R = StdRng> {
    position: Cell,
    rng: R,
}

impl<R: Rng> Food<R> {
    /// Creates unplaced food at the origin; call [`Food::place`] before use.
    pub fn new(rng: R) -> Self {
        Food {
            position: Cell::new(0, 0),
            rng,
        }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    #[cfg(test)]
    pub fn set_position(&mut self, cell: Cell) {
        self.position = cell;
    }

    /// Moves the food to a uniformly random grid cell not in `occupied`.
    ///
    /// Fails with [`PlacementError::BoardFull`] when the occupied cells cover
    /// the whole board, instead of sampling forever.
    pub fn place<'a>(
        &mut self,
        occupied: impl IntoIterator<Item = &'a Cell>,
        board: &Board,
    ) -> Result<Cell, PlacementError> {
        let occupied: HashSet<Cell> = occupied.into_iter().copied().collect();
        let cells = board.cell_count();
        let blocked = occupied
            .iter()
            .filter(|cell| board.contains(**cell))
            .count();
        if blocked >= cells {
            return Err(PlacementError::BoardFull { cells });
        }

        let g = board.grid_size;
        loop {
            let candidate = Cell::new(
                self.rng.random_range(0..board.columns()) * g,
                self.rng.random_range(0..board.rows()) * g,
            );
            if !occupied.contains(&candidate) {
                self.position = candidate;
                return Ok(candidate);
            }
        }
    }
}
