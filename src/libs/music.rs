//! Music practice logs and weekly statistics.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Emotion labels offered by the detailed log wizard.
pub const EMOTIONS: [&str; 5] = ["Happy", "Calm", "Melancholy", "Energized", "Reflective"];

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// How a session was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MusicAction {
    Listen,
    Sing,
    Playlist,
    Timer,
    Log,
}

impl MusicAction {
    /// Minutes credited by the one-shot quick actions.
    pub fn quick_minutes(&self) -> u32 {
        match self {
            MusicAction::Playlist => 1,
            _ => 10,
        }
    }
}

impl fmt::Display for MusicAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MusicAction::Listen => "listen",
            MusicAction::Sing => "sing",
            MusicAction::Playlist => "playlist",
            MusicAction::Timer => "timer",
            MusicAction::Log => "log",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicLog {
    pub timestamp: i64, // epoch millis
    pub minutes: u32,
    pub action: MusicAction,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub song: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub emotion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub intensity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

impl MusicLog {
    pub fn new(action: MusicAction, minutes: u32) -> Self {
        Self {
            timestamp: Utc::now().timestamp_millis(),
            minutes,
            action,
            song: None,
            emotion: None,
            intensity: None,
            notes: None,
        }
    }

    pub fn quick(action: MusicAction) -> Self {
        Self::new(action, action.quick_minutes())
    }

    pub fn detailed(
        minutes: u32,
        song: Option<String>,
        emotion: Option<String>,
        intensity: Option<u32>,
        notes: Option<String>,
    ) -> Self {
        Self {
            song,
            emotion,
            intensity,
            notes,
            ..Self::new(MusicAction::Log, minutes)
        }
    }

    pub fn recorded_at(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.timestamp).single()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MusicStats {
    pub week_minutes: u32,
    pub day_streak: u32,
}

/// Week total plus the run of consecutive days with at least one log,
/// counted backwards from today. A day without a log breaks the streak,
/// so a streak of zero means nothing was logged today.
pub fn stats(logs: &[MusicLog]) -> MusicStats {
    let now = Utc::now().timestamp_millis();
    let week_minutes = logs
        .iter()
        .filter(|log| now - log.timestamp <= 7 * MILLIS_PER_DAY)
        .map(|log| log.minutes)
        .sum();

    let days: HashSet<String> = logs
        .iter()
        .filter_map(|log| log.recorded_at())
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .collect();
    let mut day_streak = 0;
    let mut day = Local::now().date_naive();
    while days.contains(&day.format("%Y-%m-%d").to_string()) {
        day_streak += 1;
        day -= chrono::Duration::days(1);
    }

    MusicStats { week_minutes, day_streak }
}

/// Logs from the last `days` days, newest first.
pub fn logs_last_days(logs: &[MusicLog], days: i64) -> Vec<MusicLog> {
    let cutoff = Utc::now().timestamp_millis() - days * MILLIS_PER_DAY;
    let mut recent: Vec<MusicLog> =
        logs.iter().filter(|l| l.timestamp >= cutoff).cloned().collect();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent
}

/// Minutes logged today.
pub fn minutes_today(logs: &[MusicLog]) -> u32 {
    let today = Local::now().date_naive();
    logs.iter()
        .filter(|log| log.recorded_at().map(|dt| dt.date_naive()) == Some(today))
        .map(|log| log.minutes)
        .sum()
}
