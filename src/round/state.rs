//! One round of play: the snake, the food, and the tick that moves them.

use std::time::{Duration, Instant, SystemTime};

use rand::Rng;
use rand::rngs::StdRng;

use crate::config::{GameSettings, SettingsSnapshot};
use crate::food::{Food, PlacementError};
use crate::game::{Cell, Direction, INITIAL_SNAKE_LENGTH};
use crate::snake::{MoveOutcome, Snake};

/// Why a round ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EndReason {
    SelfCollision,
    OutOfBounds,
    /// The snake fills every cell, so no food can be placed.
    BoardFull,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoundState {
    Playing,
    Over(EndReason),
}

/// What a single tick did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    Moved,
    Ate { at: Cell },
    Ended(EndReason),
}

/// Everything worth keeping about a finished round.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundSummary {
    pub player_name: String,
    pub score: u32,
    pub duration: Duration,
    pub food_eaten: u32,
    pub max_length: usize,
    pub wall_pass: bool,
    pub settings: SettingsSnapshot,
    pub started_at: SystemTime,
    pub ended_at: SystemTime,
}

pub struct GameRound<R = StdRng> {
    settings: GameSettings,
    snake: Snake,
    food: Food<R>,
    state: RoundState,
    food_eaten: u32,
    max_length: usize,
    started: Instant,
    started_at: SystemTime,
    summarized: bool,
}

impl<R: Rng> GameRound<R> {
    pub fn new(settings: GameSettings, rng: R) -> Result<Self, PlacementError> {
        let board = settings.board;
        let snake = Snake::new(board.grid_size);
        let mut food = Food::new(rng);
        food.place(snake.body(), &board)?;

        Ok(GameRound {
            settings,
            snake,
            food,
            state: RoundState::Playing,
            food_eaten: 0,
            max_length: INITIAL_SNAKE_LENGTH,
            started: Instant::now(),
            started_at: SystemTime::now(),
            summarized: false,
        })
    }

    /// Advances the round by one step.
    ///
    /// Self collision is checked before leaving the board, and both before
    /// eating. Once the round is over, further ticks change nothing.
    pub fn tick(&mut self, input: Option<Direction>) -> TickOutcome {
        if let RoundState::Over(reason) = self.state {
            return TickOutcome::Ended(reason);
        }

        if let Some(direction) = input {
            self.snake.turn(direction);
        }

        let board = self.settings.board;
        if self.snake.advance(self.settings.wall_pass, &board) == MoveOutcome::SelfCollision {
            return self.end(EndReason::SelfCollision);
        }

        let head = self.snake.head();
        if !self.settings.wall_pass && !board.contains(head) {
            return self.end(EndReason::OutOfBounds);
        }

        if head != self.food.position() {
            return TickOutcome::Moved;
        }

        self.snake.grow();
        self.food_eaten += 1;
        self.max_length = self.max_length.max(self.snake.length());
        match self.food.place(self.snake.body(), &board) {
            Ok(_) => TickOutcome::Ate { at: head },
            Err(PlacementError::BoardFull { .. }) => self.end(EndReason::BoardFull),
        }
    }

    fn end(&mut self, reason: EndReason) -> TickOutcome {
        self.state = RoundState::Over(reason);
        TickOutcome::Ended(reason)
    }

    /// The summary of a finished round. Returns `Some` exactly once, and only
    /// after the round is over.
    pub fn finish(&mut self) -> Option<RoundSummary> {
        if self.state == RoundState::Playing || self.summarized {
            return None;
        }
        self.summarized = true;

        Some(RoundSummary {
            player_name: self.settings.player_name.clone(),
            score: self.snake.score(),
            duration: Duration::from_secs(self.started.elapsed().as_secs()),
            food_eaten: self.food_eaten,
            max_length: self.max_length,
            wall_pass: self.settings.wall_pass,
            settings: self.settings.snapshot(),
            started_at: self.started_at,
            ended_at: SystemTime::now(),
        })
    }
}

impl<R> GameRound<R> {
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food<R> {
        &self.food
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
impl<R: Rng> GameRound<R> {
    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn food_eaten(&self) -> u32 {
        self.food_eaten
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Puts the food on a chosen cell.
    pub fn set_food(&mut self, cell: Cell) {
        self.food.set_position(cell);
    }

    /// A round starting from an arbitrary snake and food cell.
    pub fn with_snake(settings: GameSettings, snake: Snake, food_at: Cell, rng: R) -> Self {
        let mut food = Food::new(rng);
        food.set_position(food_at);
        GameRound {
            max_length: snake.length(),
            settings,
            snake,
            food,
            state: RoundState::Playing,
            food_eaten: 0,
            started: Instant::now(),
            started_at: SystemTime::now(),
            summarized: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_settings;
    use crate::game::Board;
    use rand::SeedableRng;

    fn round(wall_pass: bool) -> GameRound {
        GameRound::new(test_settings(wall_pass), StdRng::seed_from_u64(11)).unwrap()
    }

    /// Keeps food out of the snake's path for movement-only tests.
    fn park_food(round: &mut GameRound) {
        round.set_food(Cell::new(780, 580));
    }

    #[test]
    fn starts_playing_with_food_off_the_snake() {
        let round = round(false);
        assert_eq!(round.state(), RoundState::Playing);
        assert_eq!(round.snake().length(), 3);
        assert_eq!(round.max_length(), 3);
        assert_eq!(round.food_eaten(), 0);
        let food = round.food().position();
        assert!(round.snake().body().all(|cell| *cell != food));
        assert!(round.settings().board.contains(food));
    }

    #[test]
    fn five_ticks_right_move_the_head_five_cells() {
        let mut round = round(false);
        park_food(&mut round);
        for _ in 0..5 {
            assert_eq!(round.tick(None), TickOutcome::Moved);
        }
        assert_eq!(round.snake().head(), Cell::new(200, 100));
        assert_eq!(round.snake().length(), 3);
    }

    #[test]
    fn eating_scores_and_grows_on_the_next_move() {
        let mut round = round(false);
        round.set_food(Cell::new(120, 100));

        assert_eq!(round.tick(None), TickOutcome::Ate { at: Cell::new(120, 100) });
        assert_eq!(round.snake().score(), 10);
        assert_eq!(round.snake().growth_target(), 4);
        assert_eq!(round.food_eaten(), 1);
        assert_ne!(round.food().position(), Cell::new(120, 100));
        assert!(round.snake().body().all(|c| *c != round.food().position()));

        park_food(&mut round);
        assert_eq!(round.tick(None), TickOutcome::Moved);
        assert_eq!(round.snake().length(), 4);
    }

    #[test]
    fn max_length_follows_the_body() {
        let mut round = round(false);
        round.set_food(Cell::new(120, 100));
        round.tick(None);
        round.set_food(Cell::new(140, 100));
        round.tick(None);
        // The first growth has landed by the second meal.
        assert_eq!(round.max_length(), 4);
        park_food(&mut round);
        round.tick(None);
        assert_eq!(round.snake().length(), 5);
    }

    #[test]
    fn leaving_the_board_ends_the_round() {
        let mut round = round(false);
        park_food(&mut round);
        round.tick(Some(Direction::Up));
        let mut outcome = TickOutcome::Moved;
        for _ in 0..10 {
            outcome = round.tick(None);
            if outcome != TickOutcome::Moved {
                break;
            }
        }
        assert_eq!(outcome, TickOutcome::Ended(EndReason::OutOfBounds));
        assert_eq!(round.snake().head(), Cell::new(100, -20));
        assert_eq!(round.state(), RoundState::Over(EndReason::OutOfBounds));
    }

    #[test]
    fn wall_pass_wraps_instead_of_ending() {
        let mut round = round(true);
        park_food(&mut round);
        round.tick(Some(Direction::Up));
        for _ in 0..5 {
            round.tick(None);
        }
        assert_eq!(round.snake().head(), Cell::new(100, 580));
        assert_eq!(round.state(), RoundState::Playing);
    }

    #[test]
    fn running_into_itself_ends_the_round() {
        let mut round = round(false);
        park_food(&mut round);
        // Grow to five segments so a tight loop can bite the body.
        for food in [Cell::new(120, 100), Cell::new(140, 100)] {
            round.set_food(food);
            round.tick(None);
        }
        park_food(&mut round);
        round.tick(None);
        round.tick(None);
        assert_eq!(round.snake().length(), 5);

        round.tick(Some(Direction::Down));
        round.tick(Some(Direction::Left));
        let before: Vec<Cell> = round.snake().body().copied().collect();
        assert_eq!(
            round.tick(Some(Direction::Up)),
            TickOutcome::Ended(EndReason::SelfCollision)
        );
        let after: Vec<Cell> = round.snake().body().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn over_rounds_ignore_further_ticks() {
        let mut round = round(false);
        park_food(&mut round);
        round.tick(Some(Direction::Up));
        while round.state() == RoundState::Playing {
            round.tick(None);
        }
        let head = round.snake().head();
        assert_eq!(
            round.tick(Some(Direction::Right)),
            TickOutcome::Ended(EndReason::OutOfBounds)
        );
        assert_eq!(round.snake().head(), head);
    }

    #[test]
    fn summary_is_produced_once_after_the_end() {
        let mut round = round(false);
        round.set_food(Cell::new(120, 100));
        round.tick(None);
        assert!(round.finish().is_none());

        park_food(&mut round);
        round.tick(Some(Direction::Up));
        while round.state() == RoundState::Playing {
            round.tick(None);
        }

        let summary = round.finish().expect("a finished round has a summary");
        assert_eq!(summary.player_name, "Tester");
        assert_eq!(summary.score, 10);
        assert_eq!(summary.food_eaten, 1);
        assert_eq!(summary.max_length, 3);
        assert!(!summary.wall_pass);
        assert_eq!(summary.settings, test_settings(false).snapshot());
        assert!(summary.ended_at >= summary.started_at);
        assert!(round.finish().is_none());
    }

    #[test]
    fn a_snake_that_fills_the_board_ends_the_round() {
        let mut settings = test_settings(true);
        settings.board = Board::new(80, 20, 20);
        let snake = Snake::with_body(
            20,
            &[Cell::new(40, 0), Cell::new(20, 0), Cell::new(0, 0)],
            Direction::Right,
        );
        let mut round =
            GameRound::with_snake(settings, snake, Cell::new(60, 0), StdRng::seed_from_u64(5));

        assert_eq!(round.tick(None), TickOutcome::Ate { at: Cell::new(60, 0) });
        // The only free cell is the one the tail just left.
        assert_eq!(round.food().position(), Cell::new(0, 0));
        assert_eq!(round.tick(None), TickOutcome::Ended(EndReason::BoardFull));
        assert_eq!(round.snake().length(), 4);
        assert_eq!(round.snake().score(), 20);
    }
}
