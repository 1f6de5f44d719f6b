//! Game constants for scoring, starting layout, colors and rendering layers.

use bevy::prelude::*;

// Scoring and growth
pub const SCORE_PER_FOOD: u32 = 10;
pub const INITIAL_SNAKE_LENGTH: usize = 3;

// The head of a fresh snake sits this many cells from the top-left corner.
pub const SNAKE_ANCHOR_CELLS: i32 = 5;

// Menu and high score table
pub const HIGH_SCORE_LIMIT: usize = 10;
pub const MAX_PLAYER_NAME_LEN: usize = 15;

// Visual settings
pub const CORNER_RADIUS: f32 = 3.0;
pub const SEGMENT_MIN_SHADE: f32 = 0.5;

// Colors
pub const ARENA_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 1.0);
pub const ARENA_BORDER_COLOR: Color = Color::srgba(0.3, 0.3, 0.3, 1.0);
pub const GRID_LINE_COLOR: Color = Color::srgba(40.0 / 255.0, 40.0 / 255.0, 40.0 / 255.0, 1.0);
pub const SEGMENT_OUTLINE_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 1.0);
pub const BACKGROUND_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 1.0);
pub const TITLE_COLOR: Color = Color::srgba(0.0, 1.0, 0.0, 1.0);
pub const HIGHLIGHT_COLOR: Color = Color::srgba(1.0, 1.0, 0.0, 1.0);
pub const HINT_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 1.0);
pub const WALL_PASS_COLOR: Color = Color::srgba(1.0, 0.4, 0.4, 1.0);

// Z-index constants for rendering layers
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_GRID: f32 = 0.5;
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_EFFECT: f32 = 2.5;
