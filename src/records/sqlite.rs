use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{Connection, params};

use super::{HighScore, RecordError, RecordId, SessionRecorder};
use crate::round::RoundSummary;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS game_sessions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        player_name TEXT NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT,
        score INTEGER DEFAULT 0,
        game_duration INTEGER,
        settings TEXT
    );
    CREATE TABLE IF NOT EXISTS game_stats (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        session_id INTEGER REFERENCES game_sessions(id),
        food_eaten INTEGER DEFAULT 0,
        max_length INTEGER DEFAULT 0,
        walls_passed BOOLEAN DEFAULT FALSE,
        final_score INTEGER DEFAULT 0
    );
";

/// Session storage in a SQLite file: one `game_sessions` row per round plus
/// its `game_stats` row.
pub struct SqliteRecorder {
    conn: Mutex<Connection>,
}

impl SqliteRecorder {
    pub fn open(path: &Path) -> Result<Self, RecordError> {
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, RecordError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, RecordError> {
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteRecorder {
            conn: Mutex::new(conn),
        })
    }
}

impl SessionRecorder for SqliteRecorder {
    fn record(&self, summary: &RoundSummary) -> Result<RecordId, RecordError> {
        let settings = serde_json::to_string(&summary.settings)?;
        let mut conn = self.conn.lock().map_err(|_| RecordError::Unavailable)?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO game_sessions (player_name, start_time, end_time, score, game_duration, settings)
             VALUES (?1, datetime(?2, 'unixepoch'), datetime(?3, 'unixepoch'), ?4, ?5, ?6)",
            params![
                summary.player_name,
                unix_seconds(summary.started_at),
                unix_seconds(summary.ended_at),
                summary.score,
                summary.duration.as_secs() as i64,
                settings,
            ],
        )?;
        let session_id = tx.last_insert_rowid();

        tx.execute(
            "INSERT INTO game_stats (session_id, food_eaten, max_length, walls_passed, final_score)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                session_id,
                summary.food_eaten,
                summary.max_length as i64,
                summary.wall_pass,
                summary.score,
            ],
        )?;
        tx.commit()?;

        Ok(session_id)
    }

    fn top_scores(&self, limit: usize) -> Result<Vec<HighScore>, RecordError> {
        let conn = self.conn.lock().map_err(|_| RecordError::Unavailable)?;
        let mut stmt = conn.prepare(
            "SELECT player_name, score, game_duration, end_time
             FROM game_sessions
             ORDER BY score DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map([limit as i64], |row| {
            Ok(HighScore {
                player_name: row.get(0)?,
                score: row.get(1)?,
                duration_secs: row.get::<_, i64>(2)?.max(0) as u64,
                ended_at: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

fn unix_seconds(time: SystemTime) -> i64 {
    time.duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0)
}
