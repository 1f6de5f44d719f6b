//! The snake itself: body, heading, score and gradual growth.

use std::collections::VecDeque;

use crate::game::{
    Board, Cell, Direction, INITIAL_SNAKE_LENGTH, SCORE_PER_FOOD, SNAKE_ANCHOR_CELLS,
};

/// Result of a single [`Snake::advance`] step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Continue,
    SelfCollision,
}

#[derive(Clone, Debug)]
pub struct Snake {
    /// Head first.
    body: VecDeque<Cell>,
    heading: Direction,
    score: u32,
    /// Length the body is truncated to after every move.
    growth_target: usize,
    grid_size: i32,
}

impl Snake {
    pub fn new(grid_size: i32) -> Self {
        let mut snake = Snake {
            body: VecDeque::new(),
            heading: Direction::Right,
            score: 0,
            growth_target: INITIAL_SNAKE_LENGTH,
            grid_size,
        };
        snake.reset();
        snake
    }

    /// Builds a snake from an explicit body, head first.
    #[cfg(test)]
    pub fn with_body(grid_size: i32, body: &[Cell], heading: Direction) -> Self {
        assert!(!body.is_empty(), "a snake needs at least a head");
        Snake {
            body: body.iter().copied().collect(),
            heading,
            score: 0,
            growth_target: body.len(),
            grid_size,
        }
    }

    /// Three horizontal segments at the anchor cell, heading right, no score.
    pub fn reset(&mut self) {
        let g = self.grid_size;
        let anchor = Cell::new(g * SNAKE_ANCHOR_CELLS, g * SNAKE_ANCHOR_CELLS);
        self.body = (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|i| Cell::new(anchor.x - i * g, anchor.y))
            .collect();
        self.heading = Direction::Right;
        self.score = 0;
        self.growth_target = INITIAL_SNAKE_LENGTH;
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = &Cell> {
        self.body.iter()
    }

    #[cfg(test)]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    #[cfg(test)]
    pub fn growth_target(&self) -> usize {
        self.growth_target
    }

    pub fn length(&self) -> usize {
        self.body.len()
    }

    /// Changes heading, ignoring a reversal into the neck.
    pub fn turn(&mut self, direction: Direction) {
        if self.body.len() > 1 && direction == self.heading.opposite() {
            return;
        }
        self.heading = direction;
    }

    /// Moves the head one cell along the heading.
    ///
    /// With `wall_pass` the new head wraps around the board edges. Leaving the
    /// board without wrapping is not detected here; the caller checks the new
    /// head against the board after a `Continue`. On `SelfCollision` the body
    /// is left untouched.
    pub fn advance(&mut self, wall_pass: bool, board: &Board) -> MoveOutcome {
        let mut new_head = self.head().step(self.heading, self.grid_size);
        if wall_pass {
            new_head = board.wrap(new_head);
        }

        if self.body.iter().skip(1).any(|cell| *cell == new_head) {
            return MoveOutcome::SelfCollision;
        }

        self.body.push_front(new_head);
        while self.body.len() > self.growth_target {
            self.body.pop_back();
        }
        MoveOutcome::Continue
    }

    /// Raises the growth target by one segment and scores the food. The body
    /// catches up on the next move.
    pub fn grow(&mut self) {
        self.growth_target += 1;
        self.score += SCORE_PER_FOOD;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: Board = Board::new(800, 600, 20);

    fn cells(snake: &Snake) -> Vec<Cell> {
        snake.body().copied().collect()
    }

    #[test]
    fn fresh_snake_is_three_cells_heading_right() {
        let snake = Snake::new(20);
        assert_eq!(
            cells(&snake),
            vec![Cell::new(100, 100), Cell::new(80, 100), Cell::new(60, 100)]
        );
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.score(), 0);
        assert_eq!(snake.growth_target(), 3);
    }

    #[test]
    fn five_moves_right_keep_the_length() {
        let mut snake = Snake::new(20);
        for _ in 0..5 {
            assert_eq!(snake.advance(false, &BOARD), MoveOutcome::Continue);
        }
        assert_eq!(snake.head(), Cell::new(200, 100));
        assert_eq!(snake.length(), 3);
    }

    #[test]
    fn turn_then_move_steps_one_cell_in_the_new_direction() {
        for direction in [Direction::Up, Direction::Down, Direction::Right] {
            let mut snake = Snake::new(20);
            let start = snake.head();
            snake.turn(direction);
            snake.advance(false, &BOARD);
            assert_eq!(snake.head(), start.step(direction, 20));
        }
    }

    #[test]
    fn reversal_is_ignored_for_a_long_body() {
        let mut snake = Snake::new(20);
        snake.turn(Direction::Left);
        assert_eq!(snake.heading(), Direction::Right);
    }

    #[test]
    fn reversal_is_allowed_for_a_lone_head() {
        let mut snake = Snake::with_body(20, &[Cell::new(100, 100)], Direction::Right);
        snake.turn(Direction::Left);
        assert_eq!(snake.heading(), Direction::Left);
        snake.advance(false, &BOARD);
        assert_eq!(snake.head(), Cell::new(80, 100));
    }

    #[test]
    fn leaving_the_board_without_wall_pass_is_left_to_the_caller() {
        let mut snake = Snake::with_body(
            20,
            &[Cell::new(780, 100), Cell::new(760, 100), Cell::new(740, 100)],
            Direction::Right,
        );
        assert_eq!(snake.advance(false, &BOARD), MoveOutcome::Continue);
        assert_eq!(snake.head(), Cell::new(800, 100));
        assert!(!BOARD.contains(snake.head()));
    }

    #[test]
    fn wall_pass_wraps_the_head() {
        let mut snake = Snake::with_body(
            20,
            &[Cell::new(780, 100), Cell::new(760, 100), Cell::new(740, 100)],
            Direction::Right,
        );
        assert_eq!(snake.advance(true, &BOARD), MoveOutcome::Continue);
        assert_eq!(snake.head(), Cell::new(0, 100));

        let mut snake = Snake::with_body(20, &[Cell::new(40, 0)], Direction::Up);
        snake.advance(true, &BOARD);
        assert_eq!(snake.head(), Cell::new(40, 580));
    }

    #[test]
    fn running_into_the_body_leaves_it_unchanged() {
        // Head at (40,40) heading down into the segment at (40,60).
        let body = [
            Cell::new(40, 40),
            Cell::new(60, 40),
            Cell::new(60, 60),
            Cell::new(40, 60),
            Cell::new(20, 60),
        ];
        let mut snake = Snake::with_body(20, &body, Direction::Down);
        assert_eq!(snake.advance(false, &BOARD), MoveOutcome::SelfCollision);
        assert_eq!(cells(&snake), body.to_vec());
    }

    #[test]
    fn moving_into_the_vacated_tail_cell_is_still_a_collision() {
        // The tail has not moved away yet when the check runs.
        let body = [
            Cell::new(40, 40),
            Cell::new(60, 40),
            Cell::new(60, 60),
            Cell::new(40, 60),
        ];
        let mut snake = Snake::with_body(20, &body, Direction::Down);
        assert_eq!(snake.advance(false, &BOARD), MoveOutcome::SelfCollision);
    }

    #[test]
    fn growth_is_gradual() {
        let mut snake = Snake::new(20);
        snake.grow();
        assert_eq!(snake.score(), 10);
        assert_eq!(snake.growth_target(), 4);
        assert_eq!(snake.length(), 3);

        snake.advance(false, &BOARD);
        assert_eq!(snake.length(), 4);
        snake.advance(false, &BOARD);
        assert_eq!(snake.length(), 4);
    }

    #[test]
    fn reset_restores_the_starting_snake() {
        let mut snake = Snake::new(20);
        snake.grow();
        snake.turn(Direction::Down);
        snake.advance(false, &BOARD);
        snake.reset();
        assert_eq!(cells(&snake), cells(&Snake::new(20)));
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.score(), 0);
        assert_eq!(snake.growth_target(), 3);
    }
}
