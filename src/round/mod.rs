//! Round plugin - drives the round state machine on the tick clock and hands
//! finished rounds to the recorder.

mod state;

pub use state::{GameRound, RoundSummary, TickOutcome};

use bevy::prelude::*;

use crate::game::{FoodEatenEvent, GamePhase, GameState, PendingInput, RoundOverEvent, TickTimer};
use crate::records::Recorder;

/// Plugin for the round tick and its aftermath.
pub struct RoundPlugin;

impl Plugin for RoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<FoodEatenEvent>()
            .add_message::<RoundOverEvent>()
            .add_systems(Update, (advance_round, record_finished_round).chain());
    }
}

/// System to advance the active round once per tick.
fn advance_round(
    time: Res<Time>,
    mut tick_timer: ResMut<TickTimer>,
    mut pending: ResMut<PendingInput>,
    mut game_state: ResMut<GameState>,
    mut food_eaten_writer: MessageWriter<FoodEatenEvent>,
    mut round_over_writer: MessageWriter<RoundOverEvent>,
) {
    if game_state.phase != GamePhase::Playing {
        return;
    }

    tick_timer.timer.tick(time.delta());
    if !tick_timer.timer.just_finished() {
        return;
    }

    let Some(round) = game_state.round.as_mut() else {
        return;
    };

    match round.tick(pending.take()) {
        TickOutcome::Moved => {}
        TickOutcome::Ate { at } => {
            food_eaten_writer.write(FoodEatenEvent { position: at });
        }
        TickOutcome::Ended(reason) => {
            info!(
                "Round over ({:?}), score {}, length {}",
                reason,
                round.snake().score(),
                round.snake().length()
            );
            if let Some(summary) = round.finish() {
                game_state.last_summary = Some(summary.clone());
                round_over_writer.write(RoundOverEvent { summary });
            }
            game_state.phase = GamePhase::GameOver;
        }
    }
}

/// System to store finished rounds. Failures are logged and dropped.
fn record_finished_round(mut round_over_reader: MessageReader<RoundOverEvent>, recorder: Res<Recorder>) {
    for event in round_over_reader.read() {
        let summary = &event.summary;
        match recorder.record(summary) {
            Ok(id) => info!(
                "Saved session {} for {} with score {}",
                id, summary.player_name, summary.score
            ),
            Err(err) => warn!("Could not save the session: {}", err),
        }
    }
}
