//! Grid coordinates, headings and the board they live on.

use bevy::prelude::*;

/// A grid-aligned position in board pixels.
///
/// Both axes are multiples of the board's grid size. The values are signed
/// because a head may step one cell past the left or top edge before the
/// round's bounds check rejects it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// The neighbouring cell one grid step towards `direction`.
    pub fn step(self, direction: Direction, grid_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x + dx * grid_size,
            y: self.y + dy * grid_size,
        }
    }
}

/// Heading of the snake. Screen coordinates: y grows downwards.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit offset of one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// Board dimensions in pixels together with the cell size.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub grid_size: i32,
}

impl Board {
    pub const fn new(width: i32, height: i32, grid_size: i32) -> Self {
        Board {
            width,
            height,
            grid_size,
        }
    }

    /// Number of cell columns a grid-aligned coordinate can take.
    pub fn columns(&self) -> i32 {
        (self.width - self.grid_size) / self.grid_size + 1
    }

    pub fn rows(&self) -> i32 {
        (self.height - self.grid_size) / self.grid_size + 1
    }

    pub fn cell_count(&self) -> usize {
        self.columns().max(0) as usize * self.rows().max(0) as usize
    }

    /// Whether `cell` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Wraps each axis independently: past the far edge goes to 0, before the
    /// near edge goes to the last cell.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell {
            x: wrap_axis(cell.x, self.width, self.grid_size),
            y: wrap_axis(cell.y, self.height, self.grid_size),
        }
    }

    /// World-space translation of a cell's centre, with the board centred on
    /// the origin and y pointing up.
    pub fn to_world(&self, cell: Cell, z: f32) -> Vec3 {
        let half = self.grid_size as f32 / 2.0;
        Vec3::new(
            cell.x as f32 - self.width as f32 / 2.0 + half,
            self.height as f32 / 2.0 - cell.y as f32 - half,
            z,
        )
    }
}

fn wrap_axis(value: i32, bound: i32, grid_size: i32) -> i32 {
    if value >= bound {
        0
    } else if value < 0 {
        bound - grid_size
    } else {
        value
    }
}
