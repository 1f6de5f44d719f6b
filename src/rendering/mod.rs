//! Rendering plugin - draws the board, the snake and the food, plus the flash
//! shown when food is eaten.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::config::GameSettings;
use crate::food::{spawn_food, spawn_food_eaten_effect};
use crate::game::{
    ARENA_BORDER_COLOR, ARENA_COLOR, Board, FoodEatenEvent, FoodSprite, GRID_LINE_COLOR,
    GameState, PulseEffect, SEGMENT_MIN_SHADE, SnakeSprite, Z_BACKGROUND, Z_EFFECT, Z_FOOD,
    Z_GRID, Z_SNAKE_SEGMENT,
};
use crate::snake::spawn_snake_segment;

/// Plugin for rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_board).add_systems(
            Update,
            (redraw_round, spawn_food_eaten_flash, pulse_effect_system).chain(),
        );
    }
}

// Type alias for everything redrawn on each tick
type RoundSpriteQuery<'w, 's> = Query<'w, 's, Entity, Or<(With<SnakeSprite>, With<FoodSprite>)>>;

/// Startup system - arena background, grid lines and border.
fn setup_board(mut commands: Commands, settings: Res<GameSettings>) {
    let board = settings.board;
    let (width, height) = (board.width as f32, board.height as f32);

    commands.spawn((
        Sprite {
            color: ARENA_COLOR,
            custom_size: Some(Vec2::new(width, height)),
            ..default()
        },
        Transform::from_translation(Vec3::new(0.0, 0.0, Z_BACKGROUND)),
    ));

    for column in 0..board.columns() {
        let x = (column * board.grid_size) as f32 - width / 2.0;
        commands.spawn((
            Sprite {
                color: GRID_LINE_COLOR,
                custom_size: Some(Vec2::new(1.0, height)),
                ..default()
            },
            Transform::from_xyz(x, 0.0, Z_GRID),
        ));
    }
    for row in 0..board.rows() {
        let y = height / 2.0 - (row * board.grid_size) as f32;
        commands.spawn((
            Sprite {
                color: GRID_LINE_COLOR,
                custom_size: Some(Vec2::new(width, 1.0)),
                ..default()
            },
            Transform::from_xyz(0.0, y, Z_GRID),
        ));
    }

    commands.spawn(ShapeBundle::rect(
        &ShapeConfig {
            color: ARENA_BORDER_COLOR,
            hollow: true,
            thickness: 2.0,
            transform: Transform::from_xyz(0.0, 0.0, Z_GRID + 0.1),
            ..ShapeConfig::default_2d()
        },
        Vec2::new(width, height),
    ));
}

/// Brightness of segment `index` in a body of `len`: darkest at the head,
/// full color at the tail.
fn segment_shade(index: usize, len: usize) -> f32 {
    (index as f32 / len as f32).max(SEGMENT_MIN_SHADE)
}

/// System to redraw the snake and the food whenever the game state changes.
fn redraw_round(mut commands: Commands, game_state: Res<GameState>, drawn: RoundSpriteQuery) {
    if !game_state.is_changed() {
        return;
    }

    for entity in drawn.iter() {
        commands.entity(entity).despawn();
    }

    let Some(round) = &game_state.round else {
        return;
    };
    let settings = round.settings();
    let board = settings.board;
    let size = board.grid_size as f32;

    let len = round.snake().length();
    for (index, cell) in round.snake().body().enumerate() {
        spawn_snake_segment(
            &mut commands,
            board.to_world(*cell, Z_SNAKE_SEGMENT),
            settings.snake_color.shaded(segment_shade(index, len)),
            size,
        );
    }

    spawn_food(
        &mut commands,
        board.to_world(round.food().position(), Z_FOOD),
        settings.food_color.color(),
        size,
    );
}

/// System to spawn visual effect when food is eaten.
fn spawn_food_eaten_flash(
    mut commands: Commands,
    mut food_eaten_reader: MessageReader<FoodEatenEvent>,
    settings: Res<GameSettings>,
) {
    let board: Board = settings.board;
    for event in food_eaten_reader.read() {
        spawn_food_eaten_effect(
            &mut commands,
            board.to_world(event.position, Z_EFFECT),
            board.grid_size as f32,
        );
    }
}

/// System to handle pulse effects (for eaten food flash).
fn pulse_effect_system(
    mut commands: Commands,
    time: Res<Time>,
    mut effects: Query<(Entity, &mut Transform, &mut PulseEffect)>,
) {
    for (entity, mut transform, mut effect) in effects.iter_mut() {
        effect.timer.tick(time.delta());

        if effect.timer.is_finished() {
            commands.entity(entity).despawn();
        } else {
            let progress = effect.timer.fraction();
            let scale = effect.start_scale + (effect.end_scale - effect.start_scale) * progress;
            transform.scale = Vec3::splat(scale);
        }
    }
}
