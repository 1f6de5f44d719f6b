//! UI plugin - handles menus, the high score table, game over screen, HUD and
//! the flow between them.

mod menu;

pub use menu::{MainMenu, MenuAction};

use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::config::GameSettings;
use crate::game::{
    GameOverUI, GamePhase, GameState, HIGH_SCORE_LIMIT, HIGHLIGHT_COLOR, HINT_COLOR, HighScoresUI,
    HudText, MenuEntry, MenuNameHint, MenuPlayerName, MenuUI, PendingInput, RngSource,
    TITLE_COLOR, TickTimer, WALL_PASS_COLOR,
};
use crate::records::{HighScore, Recorder};
use crate::round::{GameRound, RoundSummary};

/// Plugin for UI and game flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system).add_systems(
            Update,
            (
                menu_input,
                high_scores_input,
                game_over_input,
                sync_screens,
                refresh_menu_text,
                update_hud_text,
            )
                .chain(),
        );
    }
}

// Type alias for querying every full-screen UI root
type ScreenQuery<'w, 's> =
    Query<'w, 's, Entity, Or<(With<MenuUI>, With<HighScoresUI>, With<GameOverUI>)>>;

/// Initial setup system - camera, main menu state and HUD.
fn setup_system(mut commands: Commands, settings: Res<GameSettings>) {
    commands.spawn(Camera2d);
    commands.insert_resource(MainMenu::new(&settings.player_name));

    let mut hud = commands.spawn((
        Text::from(""),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(20.0),
            ..default()
        },
        Visibility::Hidden,
        HudText,
    ));
    if settings.wall_pass {
        hud.with_children(|parent| {
            parent.spawn((
                TextSpan::new("\n\nWall Pass: ON"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(WALL_PASS_COLOR),
            ));
        });
    }
}

fn text_line(text: impl Into<String>, font_size: f32, color: Color, margin: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(margin)),
            ..default()
        },
    )
}

fn overlay(alpha: f32) -> impl Bundle {
    (
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            flex_direction: FlexDirection::Column,
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, alpha)),
    )
}

fn player_line(menu: &MainMenu) -> (String, Color) {
    let color = if menu.is_editing_name() {
        HIGHLIGHT_COLOR
    } else {
        Color::WHITE
    };
    (format!("Player: {}", menu.player_name()), color)
}

fn entry_color(menu: &MainMenu, index: usize) -> Color {
    if index == menu.selected() {
        TITLE_COLOR
    } else {
        Color::WHITE
    }
}

fn hint_visibility(menu: &MainMenu) -> Visibility {
    if menu.is_editing_name() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Spawns the main menu UI.
fn spawn_start_menu(commands: &mut Commands, menu: &MainMenu) {
    commands
        .spawn((overlay(1.0), MenuUI))
        .with_children(|parent| {
            parent.spawn(text_line("SNAKE GAME", 60.0, TITLE_COLOR, 20.0));

            let (name, color) = player_line(menu);
            parent.spawn((text_line(name, 24.0, color, 8.0), MenuPlayerName));
            parent.spawn((
                text_line(
                    "Type your name and press ENTER",
                    18.0,
                    Color::srgba(0.5, 0.5, 1.0, 1.0),
                    32.0,
                ),
                hint_visibility(menu),
                MenuNameHint,
            ));

            for (index, action) in MenuAction::ALL.iter().enumerate() {
                parent.spawn((
                    text_line(action.label(), 36.0, entry_color(menu, index), 24.0),
                    MenuEntry(index),
                ));
            }

            parent.spawn(text_line(
                "Use ARROW KEYS to navigate, ENTER to select, N to change name",
                16.0,
                HINT_COLOR,
                0.0,
            ));
        });
}

/// Spawns the high score table UI.
fn spawn_high_scores(commands: &mut Commands, scores: &[HighScore], available: bool) {
    commands
        .spawn((overlay(1.0), HighScoresUI))
        .with_children(|parent| {
            parent.spawn(text_line(
                "HIGH SCORES",
                60.0,
                Color::srgba(1.0, 0.84, 0.0, 1.0),
                30.0,
            ));

            if !available {
                parent.spawn(text_line(
                    "Scores are unavailable without a database",
                    28.0,
                    Color::WHITE,
                    30.0,
                ));
            } else if scores.is_empty() {
                parent.spawn(text_line("No games played yet!", 28.0, Color::WHITE, 30.0));
            } else {
                for (rank, row) in scores.iter().enumerate() {
                    parent.spawn(text_line(
                        format!(
                            "{}. {}: {} pts - {}s ({})",
                            rank + 1,
                            row.player_name,
                            row.score,
                            row.duration_secs,
                            row.ended_at.get(..10).unwrap_or(&row.ended_at)
                        ),
                        20.0,
                        Color::WHITE,
                        8.0,
                    ));
                }
            }

            parent.spawn(text_line("Press ESC to return", 24.0, HINT_COLOR, 0.0));
        });
}

/// Spawns the game over screen UI.
fn spawn_game_over_screen(commands: &mut Commands, summary: Option<&RoundSummary>) {
    commands
        .spawn((overlay(0.7), GameOverUI))
        .with_children(|parent| {
            parent.spawn(text_line(
                "GAME OVER",
                60.0,
                Color::srgba(1.0, 0.0, 0.0, 1.0),
                30.0,
            ));

            if let Some(summary) = summary {
                for line in [
                    format!("Final Score: {}", summary.score),
                    format!("Max Length: {}", summary.max_length),
                    format!("Time: {}s", summary.duration.as_secs()),
                ] {
                    parent.spawn(text_line(line, 32.0, Color::WHITE, 12.0));
                }
            }

            parent.spawn(text_line("Press ENTER to continue", 24.0, HINT_COLOR, 8.0));
            parent.spawn(text_line("Press ESC to quit", 18.0, HINT_COLOR, 0.0));
        });
}

/// System to navigate the main menu and edit the player name.
#[allow(clippy::too_many_arguments)]
fn menu_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut key_events: MessageReader<KeyboardInput>,
    mut menu: ResMut<MainMenu>,
    mut game_state: ResMut<GameState>,
    settings: Res<GameSettings>,
    mut rng_source: ResMut<RngSource>,
    mut tick_timer: ResMut<TickTimer>,
    mut pending: ResMut<PendingInput>,
    mut exit: MessageWriter<AppExit>,
) {
    if game_state.phase != GamePhase::Menu || !menu.is_editing_name() {
        key_events.clear();
    }
    if game_state.phase != GamePhase::Menu {
        return;
    }

    if menu.is_editing_name() {
        for event in key_events.read() {
            if event.state != ButtonState::Pressed {
                continue;
            }
            match &event.logical_key {
                Key::Enter => menu.finish_editing_name(),
                Key::Backspace => menu.backspace(),
                Key::Character(text) => menu.type_text(text),
                _ => {}
            }
        }
        return;
    }

    if keyboard_input.just_pressed(KeyCode::ArrowUp) {
        menu.select_previous();
    } else if keyboard_input.just_pressed(KeyCode::ArrowDown) {
        menu.select_next();
    } else if keyboard_input.just_pressed(KeyCode::KeyN) {
        menu.start_editing_name();
    } else if keyboard_input.just_pressed(KeyCode::Enter) {
        match menu.action() {
            MenuAction::StartGame => {
                let round_settings = settings.for_player(menu.player_name());
                match GameRound::new(round_settings, rng_source.fork()) {
                    Ok(round) => {
                        info!("Starting a round for {}", menu.player_name());
                        pending.clear();
                        tick_timer.timer.reset();
                        game_state.begin(round);
                    }
                    Err(err) => warn!("Could not start a round: {}", err),
                }
            }
            MenuAction::HighScores => game_state.phase = GamePhase::HighScores,
            MenuAction::Exit => {
                exit.write(AppExit::Success);
            }
        }
    }
}

/// System to leave the high score table.
fn high_scores_input(keyboard_input: Res<ButtonInput<KeyCode>>, mut game_state: ResMut<GameState>) {
    if game_state.phase == GamePhase::HighScores && keyboard_input.just_pressed(KeyCode::Escape) {
        game_state.phase = GamePhase::Menu;
    }
}

/// System to continue or quit from the game over screen.
fn game_over_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
    mut exit: MessageWriter<AppExit>,
) {
    if game_state.phase != GamePhase::GameOver {
        return;
    }

    if keyboard_input.just_pressed(KeyCode::Enter) {
        game_state.return_to_menu();
    } else if keyboard_input.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

/// System to swap the full-screen UI whenever the phase changes.
fn sync_screens(
    mut commands: Commands,
    game_state: Res<GameState>,
    menu: Res<MainMenu>,
    recorder: Res<Recorder>,
    screens: ScreenQuery,
    mut shown: Local<Option<GamePhase>>,
) {
    if *shown == Some(game_state.phase) {
        return;
    }
    *shown = Some(game_state.phase);

    for entity in screens.iter() {
        commands.entity(entity).despawn();
    }

    match game_state.phase {
        GamePhase::Menu => spawn_start_menu(&mut commands, &menu),
        GamePhase::HighScores => spawn_high_scores(
            &mut commands,
            &recorder.top_scores(HIGH_SCORE_LIMIT),
            recorder.is_available(),
        ),
        GamePhase::GameOver => {
            spawn_game_over_screen(&mut commands, game_state.last_summary.as_ref())
        }
        GamePhase::Playing => {}
    }
}

/// System to reflect menu selection and name editing in the menu text.
fn refresh_menu_text(
    menu: Res<MainMenu>,
    mut names: Query<(&mut Text, &mut TextColor), With<MenuPlayerName>>,
    mut entries: Query<(&MenuEntry, &mut TextColor), Without<MenuPlayerName>>,
    mut hints: Query<&mut Visibility, With<MenuNameHint>>,
) {
    if !menu.is_changed() {
        return;
    }

    let (line, color) = player_line(&menu);
    for (mut text, mut text_color) in names.iter_mut() {
        *text = Text::from(line.clone());
        text_color.0 = color;
    }
    for (entry, mut text_color) in entries.iter_mut() {
        text_color.0 = entry_color(&menu, entry.0);
    }
    for mut visibility in hints.iter_mut() {
        *visibility = hint_visibility(&menu);
    }
}

/// System to update the in-game score display.
fn update_hud_text(
    game_state: Res<GameState>,
    mut query: Query<(&mut Text, &mut Visibility), With<HudText>>,
) {
    let Ok((mut text, mut visibility)) = query.single_mut() else {
        return;
    };

    match (&game_state.phase, &game_state.round) {
        (GamePhase::Playing, Some(round)) => {
            *visibility = Visibility::Inherited;
            *text = Text::from(format!(
                "Score: {}\nLength: {}\nTime: {}s",
                round.snake().score(),
                round.snake().length(),
                round.elapsed().as_secs()
            ));
        }
        _ => *visibility = Visibility::Hidden,
    }
}
