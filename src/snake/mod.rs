//! Snake plugin - handles keyboard input during play and snake segment shapes.

mod body;

pub use body::{MoveOutcome, Snake};

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    CORNER_RADIUS, Direction, GamePhase, GameState, PendingInput, SEGMENT_OUTLINE_COLOR,
    SnakeSprite,
};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, snake_movement_input);
    }
}

/// A single input the player can give during a round.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoundInput {
    Up,
    Down,
    Left,
    Right,
    Quit,
}

impl RoundInput {
    /// Reads the keys pressed this frame.
    pub fn from_input(keyboard_input: &ButtonInput<KeyCode>) -> Option<RoundInput> {
        if keyboard_input.just_pressed(KeyCode::Escape) {
            Some(RoundInput::Quit)
        } else if keyboard_input.any_just_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
            Some(RoundInput::Left)
        } else if keyboard_input.any_just_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
            Some(RoundInput::Right)
        } else if keyboard_input.any_just_pressed([KeyCode::ArrowUp, KeyCode::KeyW]) {
            Some(RoundInput::Up)
        } else if keyboard_input.any_just_pressed([KeyCode::ArrowDown, KeyCode::KeyS]) {
            Some(RoundInput::Down)
        } else {
            None
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            RoundInput::Up => Some(Direction::Up),
            RoundInput::Down => Some(Direction::Down),
            RoundInput::Left => Some(Direction::Left),
            RoundInput::Right => Some(Direction::Right),
            RoundInput::Quit => None,
        }
    }
}

/// System to sample keyboard input between ticks.
fn snake_movement_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut pending: ResMut<PendingInput>,
    mut game_state: ResMut<GameState>,
) {
    if game_state.phase != GamePhase::Playing {
        return;
    }

    match RoundInput::from_input(&keyboard_input) {
        Some(RoundInput::Quit) => {
            info!("Round abandoned, back to the menu");
            pending.clear();
            game_state.return_to_menu();
        }
        Some(input) => {
            if let Some(direction) = input.direction() {
                pending.set(direction);
            }
        }
        None => {}
    }
}

/// Spawns one snake segment with a thin outline.
pub fn spawn_snake_segment(commands: &mut Commands, translation: Vec3, color: Color, size: f32) {
    // Normalize corner radius relative to the shape size (0.0 to 1.0 range)
    let corner_radius_normalized = (CORNER_RADIUS / (size / 2.0)).min(1.0);

    commands
        .spawn((
            ShapeBundle::rect(
                &ShapeConfig {
                    color,
                    corner_radii: Vec4::splat(corner_radius_normalized),
                    transform: Transform::from_translation(translation),
                    ..ShapeConfig::default_2d()
                },
                Vec2::splat(size),
            ),
            SnakeSprite,
        ))
        .with_children(|parent| {
            parent.spawn(ShapeBundle::rect(
                &ShapeConfig {
                    color: SEGMENT_OUTLINE_COLOR,
                    hollow: true,
                    thickness: 1.0,
                    transform: Transform::from_xyz(0.0, 0.0, 0.05),
                    ..ShapeConfig::default_2d()
                },
                Vec2::splat(size),
            ));
        });
}
