//! Game resources (singleton state).

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::Direction;
use crate::round::{GameRound, RoundSummary};

/// Game phase enum to track which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    HighScores,
    Playing,
    GameOver,
}

/// Main game state resource.
#[derive(Resource, Default)]
pub struct GameState {
    pub phase: GamePhase,
    /// The round being played, kept through the game over screen.
    pub round: Option<GameRound>,
    pub last_summary: Option<RoundSummary>,
}

impl GameState {
    /// Starts playing `round`.
    pub fn begin(&mut self, round: GameRound) {
        self.round = Some(round);
        self.last_summary = None;
        self.phase = GamePhase::Playing;
    }

    /// Drops any round and goes back to the main menu.
    pub fn return_to_menu(&mut self) {
        self.round = None;
        self.phase = GamePhase::Menu;
    }
}

/// The latest direction pressed since the last tick. Only the last one
/// counts; there is no queue.
#[derive(Resource, Default)]
pub struct PendingInput {
    latest: Option<Direction>,
}

impl PendingInput {
    pub fn set(&mut self, direction: Direction) {
        self.latest = Some(direction);
    }

    pub fn take(&mut self) -> Option<Direction> {
        self.latest.take()
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }
}

/// Frame clock for round ticks, firing `speed` times per second.
#[derive(Resource)]
pub struct TickTimer {
    pub timer: Timer,
}

impl TickTimer {
    pub fn from_seconds(seconds: f32) -> Self {
        TickTimer {
            timer: Timer::from_seconds(seconds, TimerMode::Repeating),
        }
    }
}

/// Source of per-round random generators.
#[derive(Resource)]
pub struct RngSource(StdRng);

impl RngSource {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RngSource(StdRng::seed_from_u64(seed)),
            None => RngSource(StdRng::from_os_rng()),
        }
    }

    /// A fresh generator for one round.
    pub fn fork(&mut self) -> StdRng {
        StdRng::from_rng(&mut self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn only_the_last_direction_is_kept() {
        let mut input = PendingInput::default();
        input.set(Direction::Up);
        input.set(Direction::Left);
        assert_eq!(input.take(), Some(Direction::Left));
        assert_eq!(input.take(), None);
    }

    #[test]
    fn seeded_sources_fork_the_same_rounds() {
        let mut a = RngSource::new(Some(4));
        let mut b = RngSource::new(Some(4));
        let x: u64 = a.fork().random();
        let y: u64 = b.fork().random();
        assert_eq!(x, y);
    }
}
