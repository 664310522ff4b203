//! Mood journal entries and the seven-day summary.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Emoji palette offered when logging a mood.
pub const MOOD_EMOJIS: [&str; 12] = [
    "😊", "😄", "😍", "🥰", "😎", "🤔", "😐", "😑", "😔", "😢", "😡", "🤬",
];

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub emoji: String,
    pub timestamp: i64, // epoch millis
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
}

impl MoodEntry {
    pub fn new(emoji: &str, note: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            emoji: emoji.to_string(),
            timestamp: Utc::now().timestamp_millis(),
            note,
        }
    }

    pub fn recorded_at(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.timestamp).single()
    }

    pub fn recorded_date(&self) -> Option<NaiveDate> {
        self.recorded_at().map(|dt| dt.date_naive())
    }
}

/// Entries from the last `days` days, newest first.
pub fn moods_last_days(entries: &[MoodEntry], days: i64) -> Vec<MoodEntry> {
    let cutoff = Utc::now().timestamp_millis() - days * MILLIS_PER_DAY;
    let mut recent: Vec<MoodEntry> =
        entries.iter().filter(|e| e.timestamp >= cutoff).cloned().collect();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent
}

/// Plain-text summary of the last seven days: one line per emoji with its
/// count, most frequent first, then the total. Ties keep the order in which
/// an emoji first appears walking the entries newest to oldest. Returns a
/// placeholder line when the window is empty.
pub fn summary_text(entries: &[MoodEntry]) -> String {
    let recent = moods_last_days(entries, 7);
    if recent.is_empty() {
        return "No mood entries in the last 7 days.".to_string();
    }

    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in &recent {
        match counts.iter_mut().find(|(emoji, _)| *emoji == entry.emoji) {
            Some((_, n)) => *n += 1,
            None => counts.push((entry.emoji.clone(), 1)),
        }
    }
    // Stable sort, so equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut text = String::from("Mood Summary (Last 7 Days):\n\n");
    for (emoji, count) in &counts {
        text.push_str(&format!("{}: {} times\n", emoji, count));
    }
    text.push_str(&format!("\nTotal entries: {}", recent.len()));
    text
}

/// Entries-per-day for the last `days` calendar days, oldest day first.
/// Days without entries appear with a zero count.
pub fn daily_counts(entries: &[MoodEntry], days: i64) -> Vec<(NaiveDate, usize)> {
    let recent = moods_last_days(entries, days);
    let today = Local::now().date_naive();
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - chrono::Duration::days(offset);
            let count = recent
                .iter()
                .filter(|e| e.recorded_date() == Some(date))
                .count();
            (date, count)
        })
        .collect()
}
