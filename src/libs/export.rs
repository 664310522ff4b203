//! Data export for backup and external analysis.
//!
//! Exports the tracked collections in CSV, JSON, or Excel form. Single
//! collections go to one file; a full export produces one combined JSON
//! document or, for the tabular formats, one file per collection with a
//! descriptive suffix.
//!
//! ```rust,no_run
//! use ritmo::libs::export::{ExportData, ExportFormat, Exporter};
//! use ritmo::libs::store::Store;
//!
//! let store = Store::open()?;
//! Exporter::new(ExportFormat::Csv, None).export(&store, ExportData::Habits)?;
//! # anyhow::Ok(())
//! ```

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};

use crate::libs::formatter::format_timestamp;
use crate::libs::habit::Habit;
use crate::libs::messages::Message;
use crate::libs::mood::MoodEntry;
use crate::libs::music::MusicLog;
use crate::libs::note::ReadingNote;
use crate::libs::store::{Store, KEY_HABITS, KEY_MOODS, KEY_MUSIC_LOGS, KEY_READING_NOTES};
use crate::{msg_info, msg_success};

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON preserving data types and structure.
    Json,
    /// Excel workbook with formatted headers and auto-sized columns.
    Excel,
}

/// Collections available for export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// Habit list with today's progress.
    Habits,
    /// Mood journal entries.
    Moods,
    /// Music practice logs.
    Music,
    /// Reading notes.
    Notes,
    /// Everything at once.
    All,
}

/// Habit row shaped for export, with display-ready progress fields.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportHabit {
    pub id: String,
    pub name: String,
    pub goal: String,
    /// Today's progress, "2/8" or "done"/"not done"
    pub today: String,
    /// Progress percentage (0.0-100.0)
    pub progress: f64,
    pub last_updated: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportMood {
    pub id: String,
    /// Local "YYYY-MM-DD HH:MM" timestamp
    pub when: String,
    pub emoji: String,
    pub note: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportMusicLog {
    pub when: String,
    pub action: String,
    pub minutes: u32,
    pub song: String,
    pub emotion: String,
    /// Intensity 1-10, empty when not recorded
    pub intensity: String,
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportNote {
    pub id: String,
    pub when: String,
    pub text: String,
}

/// Export handler carrying the chosen format and output destination.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter for the given format. Without an explicit path
    /// the output lands in the working directory as
    /// `ritmo_export_YYYYMMDD_HHMMSS.{csv,json,xlsx}`.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "ritmo_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                extension
            ))
        });

        Self { format, output_path }
    }

    /// Routes to the collection-specific export handler.
    pub fn export(&self, store: &Store, data_type: ExportData) -> Result<()> {
        match data_type {
            ExportData::Habits => self.export_habits(store),
            ExportData::Moods => self.export_moods(store),
            ExportData::Music => self.export_music(store),
            ExportData::Notes => self.export_notes(store),
            ExportData::All => self.export_all(store),
        }
    }

    fn export_habits(&self, store: &Store) -> Result<()> {
        let habits = gather_habits(store);

        match self.format {
            ExportFormat::Csv => self.habits_csv(&habits)?,
            ExportFormat::Json => self.write_json(&habits)?,
            ExportFormat::Excel => self.habits_excel(&habits)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_moods(&self, store: &Store) -> Result<()> {
        let moods = gather_moods(store);

        match self.format {
            ExportFormat::Csv => self.moods_csv(&moods)?,
            ExportFormat::Json => self.write_json(&moods)?,
            ExportFormat::Excel => self.moods_excel(&moods)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_music(&self, store: &Store) -> Result<()> {
        let logs = gather_music(store);

        match self.format {
            ExportFormat::Csv => self.music_csv(&logs)?,
            ExportFormat::Json => self.write_json(&logs)?,
            ExportFormat::Excel => self.music_excel(&logs)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_notes(&self, store: &Store) -> Result<()> {
        let notes = gather_notes(store);

        match self.format {
            ExportFormat::Csv => self.notes_csv(&notes)?,
            ExportFormat::Json => self.write_json(&notes)?,
            ExportFormat::Excel => self.notes_excel(&notes)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    /// Exports every collection. JSON combines them into one document with
    /// an export timestamp; CSV and Excel write one file per collection
    /// with `_habits`, `_moods`, `_music`, and `_notes` suffixes.
    fn export_all(&self, store: &Store) -> Result<()> {
        msg_info!(Message::ExportingAllData);

        if let ExportFormat::Json = self.format {
            let all_data = serde_json::json!({
                "export_date": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                "habits": gather_habits(store),
                "moods": gather_moods(store),
                "music_logs": gather_music(store),
                "reading_notes": gather_notes(store),
            });
            let json = serde_json::to_string_pretty(&all_data)?;
            File::create(&self.output_path)?.write_all(json.as_bytes())?;

            msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
            return Ok(());
        }

        let base = self
            .output_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "ritmo_export".to_string());
        let ext = self
            .output_path
            .extension()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "csv".to_string());

        let per_collection = [
            (ExportData::Habits, format!("{}_habits.{}", base, ext)),
            (ExportData::Moods, format!("{}_moods.{}", base, ext)),
            (ExportData::Music, format!("{}_music.{}", base, ext)),
            (ExportData::Notes, format!("{}_notes.{}", base, ext)),
        ];
        for (data_type, file_name) in per_collection {
            let path = self.output_path.with_file_name(file_name);
            Exporter::new(self.format, Some(path)).export(store, data_type)?;
        }

        Ok(())
    }

    fn write_json<T: Serialize>(&self, rows: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn habits_csv(&self, habits: &[ExportHabit]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "Name", "Goal", "Today", "Progress", "Updated"])?;

        for habit in habits {
            wtr.write_record(&[
                habit.id.clone(),
                habit.name.clone(),
                habit.goal.clone(),
                habit.today.clone(),
                format!("{:.0}%", habit.progress),
                habit.last_updated.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn moods_csv(&self, moods: &[ExportMood]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "When", "Mood", "Note"])?;

        for mood in moods {
            wtr.write_record(&[
                mood.id.clone(),
                mood.when.clone(),
                mood.emoji.clone(),
                mood.note.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn music_csv(&self, logs: &[ExportMusicLog]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["When", "Action", "Minutes", "Song", "Emotion", "Intensity", "Notes"])?;

        for log in logs {
            wtr.write_record(&[
                log.when.clone(),
                log.action.clone(),
                log.minutes.to_string(),
                log.song.clone(),
                log.emotion.clone(),
                log.intensity.clone(),
                log.notes.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn notes_csv(&self, notes: &[ExportNote]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "When", "Note"])?;

        for note in notes {
            wtr.write_record(&[note.id.clone(), note.when.clone(), note.text.clone()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn habits_excel(&self, habits: &[ExportHabit]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "ID", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Name", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Goal", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Today", &header_format)?;
        worksheet.write_string_with_format(0, 4, "Progress", &header_format)?;
        worksheet.write_string_with_format(0, 5, "Updated", &header_format)?;

        for (i, habit) in habits.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &habit.id)?;
            worksheet.write_string(row, 1, &habit.name)?;
            worksheet.write_string(row, 2, &habit.goal)?;
            worksheet.write_string(row, 3, &habit.today)?;
            worksheet.write_string(row, 4, &format!("{:.0}%", habit.progress))?;
            worksheet.write_string(row, 5, &habit.last_updated)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn moods_excel(&self, moods: &[ExportMood]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "ID", &header_format)?;
        worksheet.write_string_with_format(0, 1, "When", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Mood", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Note", &header_format)?;

        for (i, mood) in moods.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &mood.id)?;
            worksheet.write_string(row, 1, &mood.when)?;
            worksheet.write_string(row, 2, &mood.emoji)?;
            worksheet.write_string(row, 3, &mood.note)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn music_excel(&self, logs: &[ExportMusicLog]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "When", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Action", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Minutes", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Song", &header_format)?;
        worksheet.write_string_with_format(0, 4, "Emotion", &header_format)?;
        worksheet.write_string_with_format(0, 5, "Intensity", &header_format)?;
        worksheet.write_string_with_format(0, 6, "Notes", &header_format)?;

        for (i, log) in logs.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &log.when)?;
            worksheet.write_string(row, 1, &log.action)?;
            worksheet.write_number(row, 2, log.minutes as f64)?;
            worksheet.write_string(row, 3, &log.song)?;
            worksheet.write_string(row, 4, &log.emotion)?;
            worksheet.write_string(row, 5, &log.intensity)?;
            worksheet.write_string(row, 6, &log.notes)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn notes_excel(&self, notes: &[ExportNote]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "ID", &header_format)?;
        worksheet.write_string_with_format(0, 1, "When", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Note", &header_format)?;

        for (i, note) in notes.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &note.id)?;
            worksheet.write_string(row, 1, &note.when)?;
            worksheet.write_string(row, 2, &note.text)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

fn gather_habits(store: &Store) -> Vec<ExportHabit> {
    let habits: Vec<Habit> = store.load_collection_or_warn(KEY_HABITS);
    habits
        .iter()
        .map(|h| ExportHabit {
            id: h.id.clone(),
            name: h.name.clone(),
            goal: h.goal_label().to_string(),
            today: h.today_label(),
            progress: h.progress_percent(),
            last_updated: h.last_updated.clone(),
        })
        .collect()
}

fn gather_moods(store: &Store) -> Vec<ExportMood> {
    let moods: Vec<MoodEntry> = store.load_collection_or_warn(KEY_MOODS);
    moods
        .iter()
        .map(|m| ExportMood {
            id: m.id.clone(),
            when: format_timestamp(m.timestamp),
            emoji: m.emoji.clone(),
            note: m.note.clone().unwrap_or_default(),
        })
        .collect()
}

fn gather_music(store: &Store) -> Vec<ExportMusicLog> {
    let logs: Vec<MusicLog> = store.load_collection_or_warn(KEY_MUSIC_LOGS);
    logs.iter()
        .map(|l| ExportMusicLog {
            when: format_timestamp(l.timestamp),
            action: l.action.to_string(),
            minutes: l.minutes,
            song: l.song.clone().unwrap_or_default(),
            emotion: l.emotion.clone().unwrap_or_default(),
            intensity: l.intensity.map(|v| v.to_string()).unwrap_or_default(),
            notes: l.notes.clone().unwrap_or_default(),
        })
        .collect()
}

fn gather_notes(store: &Store) -> Vec<ExportNote> {
    let notes: Vec<ReadingNote> = store.load_collection_or_warn(KEY_READING_NOTES);
    notes
        .iter()
        .map(|n| ExportNote {
            id: n.id.clone(),
            when: format_timestamp(n.timestamp),
            text: n.text.clone(),
        })
        .collect()
}
