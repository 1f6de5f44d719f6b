//! Records plugin - the high score table and where finished rounds are saved.

mod sqlite;

pub use sqlite::SqliteRecorder;

use bevy::prelude::*;
use thiserror::Error;

use crate::config::GameSettings;
use crate::round::RoundSummary;

pub type RecordId = i64;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("no database connection")]
    Unavailable,
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("could not encode the settings snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One row of the high score table.
#[derive(Clone, Debug, PartialEq)]
pub struct HighScore {
    pub player_name: String,
    pub score: u32,
    pub duration_secs: u64,
    pub ended_at: String,
}

/// Storage for finished rounds.
pub trait SessionRecorder: Send + Sync {
    /// Stores one finished round and returns its session id.
    fn record(&self, summary: &RoundSummary) -> Result<RecordId, RecordError>;

    /// Best `limit` sessions, highest score first.
    fn top_scores(&self, limit: usize) -> Result<Vec<HighScore>, RecordError>;
}

/// The recorder the game uses. Without a working backend every save fails
/// with [`RecordError::Unavailable`] and the table reads as empty.
#[derive(Resource)]
pub struct Recorder {
    backend: Option<Box<dyn SessionRecorder>>,
}

impl Recorder {
    pub fn new(backend: impl SessionRecorder + 'static) -> Self {
        Recorder {
            backend: Some(Box::new(backend)),
        }
    }

    pub fn disabled() -> Self {
        Recorder { backend: None }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn record(&self, summary: &RoundSummary) -> Result<RecordId, RecordError> {
        match &self.backend {
            Some(backend) => backend.record(summary),
            None => Err(RecordError::Unavailable),
        }
    }

    pub fn top_scores(&self, limit: usize) -> Vec<HighScore> {
        let Some(backend) = &self.backend else {
            return Vec::new();
        };
        backend.top_scores(limit).unwrap_or_else(|err| {
            warn!("Could not read high scores: {}", err);
            Vec::new()
        })
    }
}

/// Plugin that opens the score database on startup.
pub struct RecordsPlugin;

impl Plugin for RecordsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, open_recorder);
    }
}

fn open_recorder(mut commands: Commands, settings: Res<GameSettings>) {
    let recorder = match SqliteRecorder::open(&settings.database) {
        Ok(backend) => {
            info!("Score database ready at {}", settings.database.display());
            Recorder::new(backend)
        }
        Err(err) => {
            warn!(
                "Could not open score database {}: {}. Scores will not be saved",
                settings.database.display(),
                err
            );
            Recorder::disabled()
        }
    };
    commands.insert_resource(recorder);
}
