mod config;
mod food;
mod game;
mod records;
mod rendering;
mod round;
mod snake;
mod ui;

use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;
use clap::Parser;

use config::{Cli, GameSettings};
use game::{BACKGROUND_COLOR, GameState, PendingInput, RngSource, TickTimer};
use records::RecordsPlugin;
use rendering::RenderingPlugin;
use round::RoundPlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

fn main() -> AppExit {
    let settings = match GameSettings::from_cli(Cli::parse()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Invalid settings: {err}");
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(
                        settings.board.width as u32,
                        settings.board.height as u32,
                    ),
                    title: "Snake Game".to_string(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .add_plugins((RecordsPlugin, SnakePlugin, RoundPlugin, RenderingPlugin, UiPlugin))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(TickTimer::from_seconds(settings.tick_seconds()))
        .insert_resource(RngSource::new(settings.seed))
        .insert_resource(settings)
        .init_resource::<GameState>()
        .init_resource::<PendingInput>()
        .run()
}
