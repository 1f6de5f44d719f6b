//! Food plugin - food placement and the food shape.

mod placement;

pub use placement::{Food, PlacementError};

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{FoodSprite, PulseEffect};

/// Spawns the food as a circle filling one cell.
pub fn spawn_food(commands: &mut Commands, translation: Vec3, color: Color, size: f32) {
    commands.spawn((
        ShapeBundle::circle(
            &ShapeConfig {
                color,
                transform: Transform::from_translation(translation),
                ..ShapeConfig::default_2d()
            },
            size / 2.0,
        ),
        FoodSprite,
    ));
}

/// Spawns a short flash where food was just eaten.
pub fn spawn_food_eaten_effect(commands: &mut Commands, translation: Vec3, size: f32) {
    commands.spawn((
        ShapeBundle::circle(
            &ShapeConfig {
                color: Color::srgba(1.0, 1.0, 0.3, 0.8),
                alpha_mode: ShapeAlphaMode::Add,
                transform: Transform::from_translation(translation),
                ..ShapeConfig::default_2d()
            },
            size / 2.0,
        ),
        PulseEffect {
            timer: Timer::from_seconds(0.3, TimerMode::Once),
            start_scale: 1.0,
            end_scale: 2.5,
        },
    ));
}
