//! Command-line flags and the immutable settings a round is played with.

use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;
use serde::Serialize;
use thiserror::Error;

use crate::game::{Board, ColorName, SNAKE_ANCHOR_CELLS};

/// Snake arcade game with a persistent high score table.
#[derive(Parser, Debug)]
#[command(name = "snake", version, about)]
pub struct Cli {
    /// Snake speed in moves per second.
    #[arg(
        long,
        value_name = "MOVES",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    speed: u32,
    /// Allow passing through walls to the opposite edge.
    #[arg(long)]
    wall_pass: bool,
    #[arg(long, value_enum, default_value_t = ColorName::Green)]
    snake_color: ColorName,
    #[arg(long, value_enum, default_value_t = ColorName::Red)]
    food_color: ColorName,
    /// Grid cell size in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = 20)]
    grid_size: u32,
    /// Board width in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = 800)]
    width: u32,
    /// Board height in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = 600)]
    height: u32,
    /// Player name recorded with high scores.
    #[arg(long, default_value = "Player")]
    player_name: String,
    /// SQLite file the high score table is kept in.
    #[arg(long, value_name = "PATH", default_value = "snake_scores.db")]
    database: PathBuf,
    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be positive")]
    ZeroGridSize,
    #[error("{axis} of {value}px is not a positive multiple of the {grid_size}px grid")]
    Misaligned {
        axis: &'static str,
        value: u32,
        grid_size: u32,
    },
    #[error("{axis} of {value}px is too large")]
    TooLarge { axis: &'static str, value: u32 },
    #[error("board needs at least {needed} cells per side to fit the starting snake")]
    BoardTooSmall { needed: i32 },
}

/// Settings for a round. Built once from the command line and never mutated
/// while a round is running.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct GameSettings {
    pub speed: u32,
    pub wall_pass: bool,
    pub snake_color: ColorName,
    pub food_color: ColorName,
    pub board: Board,
    pub player_name: String,
    pub database: PathBuf,
    pub seed: Option<u64>,
}

/// The part of the settings stored alongside a recorded session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SettingsSnapshot {
    pub speed: u32,
    pub wall_pass: bool,
    pub snake_color: ColorName,
    pub food_color: ColorName,
    pub grid_size: i32,
    pub width: i32,
    pub height: i32,
}

impl GameSettings {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if cli.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        let grid_size = to_i32("grid size", cli.grid_size)?;
        let width = board_axis("width", cli.width, cli.grid_size)?;
        let height = board_axis("height", cli.height, cli.grid_size)?;

        let board = Board::new(width, height, grid_size);
        // Anchor cell plus one more for the first move.
        let needed = SNAKE_ANCHOR_CELLS + 1;
        if board.columns() < needed || board.rows() < needed {
            return Err(ConfigError::BoardTooSmall { needed });
        }

        Ok(GameSettings {
            speed: cli.speed,
            wall_pass: cli.wall_pass,
            snake_color: cli.snake_color,
            food_color: cli.food_color,
            board,
            player_name: cli.player_name,
            database: cli.database,
            seed: cli.seed,
        })
    }

    /// The same settings for a round played under another name.
    pub fn for_player(&self, name: &str) -> Self {
        GameSettings {
            player_name: name.to_string(),
            ..self.clone()
        }
    }

    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            speed: self.speed,
            wall_pass: self.wall_pass,
            snake_color: self.snake_color,
            food_color: self.food_color,
            grid_size: self.board.grid_size,
            width: self.board.width,
            height: self.board.height,
        }
    }

    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.speed as f32
    }
}

fn to_i32(axis: &'static str, value: u32) -> Result<i32, ConfigError> {
    i32::try_from(value).map_err(|_| ConfigError::TooLarge { axis, value })
}

fn board_axis(axis: &'static str, value: u32, grid_size: u32) -> Result<i32, ConfigError> {
    if value == 0 || value % grid_size != 0 {
        return Err(ConfigError::Misaligned {
            axis,
            value,
            grid_size,
        });
    }
    to_i32(axis, value)
}

#[cfg(test)]
pub(crate) fn test_settings(wall_pass: bool) -> GameSettings {
    GameSettings {
        speed: 10,
        wall_pass,
        snake_color: ColorName::Green,
        food_color: ColorName::Red,
        board: Board::new(800, 600, 20),
        player_name: "Tester".to_string(),
        database: PathBuf::from(":memory:"),
        seed: Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<GameSettings, ConfigError> {
        let cli = Cli::try_parse_from(std::iter::once("snake").chain(args.iter().copied()))
            .expect("arguments should parse");
        GameSettings::from_cli(cli)
    }

    #[test]
    fn defaults_match_the_classic_board() {
        let settings = parse(&[]).unwrap();
        assert_eq!(settings.speed, 10);
        assert!(!settings.wall_pass);
        assert_eq!(settings.snake_color, ColorName::Green);
        assert_eq!(settings.food_color, ColorName::Red);
        assert_eq!(settings.board, Board::new(800, 600, 20));
        assert_eq!(settings.player_name, "Player");
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn flags_override_defaults() {
        let settings = parse(&[
            "--speed",
            "15",
            "--wall-pass",
            "--snake-color",
            "blue",
            "--food-color",
            "yellow",
            "--grid-size",
            "25",
            "--width",
            "900",
            "--height",
            "700",
            "--player-name",
            "TestPlayer",
        ])
        .unwrap();
        assert_eq!(settings.speed, 15);
        assert!(settings.wall_pass);
        assert_eq!(settings.snake_color, ColorName::Blue);
        assert_eq!(settings.food_color, ColorName::Yellow);
        assert_eq!(settings.board, Board::new(900, 700, 25));
        assert_eq!(settings.player_name, "TestPlayer");
    }

    #[test]
    fn unknown_colors_are_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["snake", "--snake-color", "orange"]);
        assert!(result.is_err());
    }

    #[test]
    fn speed_is_range_checked() {
        assert!(Cli::try_parse_from(["snake", "--speed", "0"]).is_err());
        assert!(Cli::try_parse_from(["snake", "--speed", "61"]).is_err());
    }

    #[test]
    fn misaligned_boards_are_rejected() {
        assert_eq!(parse(&["--grid-size", "0"]), Err(ConfigError::ZeroGridSize));
        assert_eq!(
            parse(&["--width", "810"]),
            Err(ConfigError::Misaligned {
                axis: "width",
                value: 810,
                grid_size: 20
            })
        );
    }

    #[test]
    fn tiny_boards_cannot_hold_the_snake() {
        assert_eq!(
            parse(&["--width", "100", "--height", "600"]),
            Err(ConfigError::BoardTooSmall { needed: 6 })
        );
    }

    #[test]
    fn renaming_keeps_everything_else() {
        let settings = test_settings(true);
        let renamed = settings.for_player("Ann");
        assert_eq!(renamed.player_name, "Ann");
        assert_eq!(renamed.snapshot(), settings.snapshot());
    }
}
