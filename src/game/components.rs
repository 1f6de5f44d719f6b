//! ECS components for the snake game.

use bevy::prelude::*;

/// Marks a drawn snake segment. Redrawn every tick.
#[derive(Component)]
pub struct SnakeSprite;

/// Marks the drawn food.
#[derive(Component)]
pub struct FoodSprite;

/// Component for entities that should flash/pulse.
#[derive(Component)]
pub struct PulseEffect {
    pub timer: Timer,
    pub start_scale: f32,
    pub end_scale: f32,
}

/// Component to mark the in-game score display.
#[derive(Component)]
pub struct HudText;

/// Root of the main menu UI.
#[derive(Component)]
pub struct MenuUI;

/// The "Player: <name>" line of the main menu.
#[derive(Component)]
pub struct MenuPlayerName;

/// Hint shown while the player name is being edited.
#[derive(Component)]
pub struct MenuNameHint;

/// One selectable main menu entry, by index.
#[derive(Component)]
pub struct MenuEntry(pub usize);

/// Root of the high score table UI.
#[derive(Component)]
pub struct HighScoresUI;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;
