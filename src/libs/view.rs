use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Table};

use super::formatter::format_timestamp;
use super::habit::Habit;
use super::mood::MoodEntry;
use super::music::MusicLog;
use super::note::ReadingNote;

pub struct View {}

impl View {
    pub fn habits(habits: &[Habit]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "NAME", "GOAL", "TODAY", "PROGRESS", "UPDATED"]);
        for (i, habit) in habits.iter().enumerate() {
            table.add_row(row![
                i + 1,
                habit.name,
                habit.goal_label(),
                habit.today_label(),
                format!("{:.0}%", habit.progress_percent()),
                habit.last_updated
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn moods(moods: &[MoodEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "ID", "WHEN", "MOOD", "NOTE"]);
        for (i, entry) in moods.iter().enumerate() {
            table.add_row(row![
                i + 1,
                short_id(&entry.id),
                format_timestamp(entry.timestamp),
                entry.emoji,
                entry.note.clone().unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn mood_trend(counts: &[(NaiveDate, usize)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "ENTRIES", "TREND"]);
        for (date, count) in counts {
            table.add_row(row![
                date.format("%Y-%m-%d"),
                count,
                "▇".repeat(*count)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn music_logs(logs: &[MusicLog]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "WHEN", "ACTION", "MIN", "SONG", "EMOTION", "INTENSITY", "NOTES"]);
        for (i, log) in logs.iter().enumerate() {
            table.add_row(row![
                i + 1,
                format_timestamp(log.timestamp),
                log.action,
                log.minutes,
                log.song.clone().unwrap_or_default(),
                log.emotion.clone().unwrap_or_default(),
                log.intensity.map(|v| v.to_string()).unwrap_or_default(),
                log.notes.clone().unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn notes(notes: &[ReadingNote]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "WHEN", "NOTE"]);
        for (i, note) in notes.iter().enumerate() {
            table.add_row(row![i + 1, format_timestamp(note.timestamp), note.text]);
        }
        table.printstd();

        Ok(())
    }
}

fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}
