//! Display implementation for ritmo application messages.
//!
//! This module provides the `Display` trait implementation for the `Message`
//! enum, converting structured message data into human-readable text suitable
//! for terminal output. It is the single source of truth for all user-facing
//! message text in the ritmo application.
//!
//! ## Message Categories
//!
//! The implementation handles these message categories:
//! - **Habit Messages**: Daily goal creation, progress, and state transitions
//! - **Mood Messages**: Mood journaling, editing, and summaries
//! - **Music Messages**: Engagement logging, timers, and weekly statistics
//! - **Reading Messages**: Reading sessions and note keeping
//! - **Store Messages**: Persistence and data-integrity reporting
//! - **Settings Messages**: Profile, appearance, and reminder configuration
//! - **Export Messages**: Data export operations and format handling
//!
//! ## Parameter Interpolation
//!
//! Messages with dynamic content use safe parameter interpolation:
//! ```text
//! Message::HabitCreated(name) => format!("Habit '{}' added", name)
//! Message::ExportCompleted(path) => format!("Export completed successfully: {}", path)
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` enum variant into human-readable text.
    ///
    /// The match is exhaustive so that every new message variant requires an
    /// explicit formatting decision.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === HABIT MESSAGES ===
            Message::HabitCreated(name) => format!("Habit '{}' added", name),
            Message::HabitUpdated(name) => format!("Habit '{}' updated", name),
            Message::HabitDeleted(name) => format!("Habit '{}' deleted", name),
            Message::HabitNotFound(ident) => format!("No habit matches '{}'", ident),
            Message::HabitsHeader => "Habits:".to_string(),
            Message::NoHabitsFound => "No habits yet. Add one with 'ritmo habit add'.".to_string(),
            Message::HabitCompleted(name) => format!("Habit '{}' completed for today", name),
            Message::HabitAlreadyCompleted(name) => format!("Habit '{}' is already completed today", name),
            Message::HabitCountsProgress(name) => {
                format!("Habit '{}' tracks a count. Use 'ritmo habit up' instead.", name)
            }
            Message::HabitNotCountable(name) => {
                format!("Habit '{}' is a done/not-done goal. Use 'ritmo habit done' instead.", name)
            }
            Message::HabitUnmarked(name) => format!("Habit '{}' unmarked for today", name),
            Message::HabitIncremented(name, current, target) => format!("Habit '{}': {}/{}", name, current, target),
            Message::HabitAtTarget(name) => format!("Habit '{}' is already at its target", name),
            Message::HabitDecremented(name, current, target) => format!("Habit '{}': {}/{}", name, current, target),
            Message::HabitAtZero(name) => format!("Habit '{}' is already at zero", name),
            Message::ConfirmHabitDelete(name) => format!("Are you sure you want to delete \"{}\"?", name),
            Message::EditingHabit(name) => format!("Editing habit '{}'", name),
            Message::PromptHabitName => "Habit name".to_string(),
            Message::HabitNameEmpty => "Please enter a habit name".to_string(),
            Message::SelectHabitGoal => "Goal type".to_string(),
            Message::PromptHabitTarget => "Target count per day".to_string(),
            Message::HabitTargetRange => "Target count must be greater than 0".to_string(),
            Message::SelectHabit => "Select a habit".to_string(),
            Message::SelectHabitAction => "What would you like to do?".to_string(),

            // === MOOD MESSAGES ===
            Message::MoodLogged(emoji) => format!("Mood {} logged", emoji),
            Message::MoodUpdated => "Mood updated".to_string(),
            Message::MoodDeleted => "Mood deleted".to_string(),
            Message::MoodNotFound(id) => format!("No mood entry matches '{}'", id),
            Message::NoMoodsFound => "No mood entries yet. Log one with 'ritmo mood add'.".to_string(),
            Message::MoodsHeader(days) => format!("Mood entries (last {} days):", days),
            Message::MoodTrendHeader => "Mood entries per day:".to_string(),
            Message::SelectMoodEmoji => "How are you feeling?".to_string(),
            Message::SelectMoodEntry => "Select a mood entry".to_string(),
            Message::SelectMoodAction => "What would you like to do?".to_string(),
            Message::PromptMoodNote => "Note (optional)".to_string(),
            Message::ConfirmMoodDelete => "Are you sure you want to delete this mood entry?".to_string(),

            // === MUSIC MESSAGES ===
            Message::MusicLogged(action, minutes) => format!("Logged {} min ({})", minutes, action),
            Message::NoMusicLogs => "No music logged yet. Try 'ritmo music listen'.".to_string(),
            Message::MusicLogsHeader(days) => format!("Music logs (last {} days):", days),
            Message::MusicStatsHeader => "Music stats:".to_string(),
            Message::MusicWeekTotal(minutes) => format!("This week: {} min", minutes),
            Message::MusicStreak(days) => format!("Streak: {} days", days),
            Message::PromptSongTitle => "Song (optional)".to_string(),
            Message::SelectMusicEmotion => "How did it feel?".to_string(),
            Message::PromptMusicIntensity => "Intensity (1-10)".to_string(),
            Message::MusicIntensityRange => "Intensity must be between 1 and 10".to_string(),
            Message::PromptMusicMinutes => "Minutes".to_string(),
            Message::PromptMusicNotes => "Notes (optional)".to_string(),
            Message::SelectMusicAction => "What would you like to do?".to_string(),

            // === READING MESSAGES ===
            Message::ReadingSessionLogged(current, target) => {
                format!("Reading session logged ({}/{})", current, target)
            }
            Message::NoteSaved => "Note saved".to_string(),
            Message::NoteEmpty => "Please enter a note".to_string(),
            Message::NoNotesFound => "No reading notes yet. Add one with 'ritmo read note'.".to_string(),
            Message::NotesHeader => "Reading notes:".to_string(),
            Message::PromptNoteText => "Note".to_string(),
            Message::SelectReadAction => "What would you like to do?".to_string(),

            // === TIMER MESSAGES ===
            Message::TimerStarted(minutes) => format!("Timer started for {} min. Ctrl+C to cancel.", minutes),
            Message::TimerFinished(minutes) => format!("Timer finished after {} min", minutes),
            Message::TimerCancelled => "Timer cancelled, nothing logged".to_string(),

            // === STORE MESSAGES ===
            Message::StoreParseError(path) => format!("Failed to parse data store at {}", path),
            Message::StoreCorruptKey(key) => {
                format!("Stored data under '{}' is unreadable and was ignored", key)
            }
            Message::NewDayReset(date) => format!("New day {} detected, daily progress reset", date),
            Message::StoreCleared => "All data cleared".to_string(),

            // === SETTINGS MESSAGES ===
            Message::SelectSettingsSections => {
                "Select settings to configure (space to select, enter to confirm)".to_string()
            }
            Message::PromptProfileName => "Your name".to_string(),
            Message::PromptProfileEmail => "Your email".to_string(),
            Message::PromptAppName => "Application display name".to_string(),
            Message::SelectThemeColor => "Primary color".to_string(),
            Message::PromptHydrationEnabled => "Enable hydration reminders?".to_string(),
            Message::SelectHydrationInterval => "Reminder interval".to_string(),
            Message::SettingsSaved => "Settings saved successfully".to_string(),
            Message::SettingsRemoved => "Settings removed, defaults restored".to_string(),
            Message::InvalidHexColor(value) => format!("'{}' is not a valid #RRGGBB color", value),
            Message::InvalidInterval => "Interval must be greater than 0".to_string(),
            Message::AppNameEmpty => "App name cannot be empty".to_string(),

            // === REMINDER MESSAGES ===
            Message::RemindStarted(interval) => {
                format!("Hydration reminders every {} min. Ctrl+C to stop.", interval)
            }
            Message::RemindDisabled => "Hydration reminders are disabled".to_string(),
            Message::RemindStopped => "Hydration reminders stopped".to_string(),
            Message::HydrationNudge => "Time to drink water 💧 Stay hydrated!".to_string(),

            // === DEMO & RESET MESSAGES ===
            Message::DemoDataLoaded => "Demo data loaded".to_string(),
            Message::DemoAlreadyLoaded => "Demo data already loaded. Use --force to reseed.".to_string(),
            Message::ConfirmReset => {
                "This will delete all habits, moods, music logs and notes. Are you sure?".to_string()
            }
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(data, format) => format!("Exporting {} in {} format...", data, format),
            Message::ExportingAllData => "Exporting all data...".to_string(),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader(date) => format!("Daily summary for {}", date),
            Message::OverallCompletion(completed, total, percent) => {
                format!("Overall: {:.0}% ({}/{} habits completed)", percent, completed, total)
            }
            Message::TodayMoodsHeader => "Today's moods:".to_string(),
            Message::TodayMusicMinutes(minutes) => format!("Music today: {} min", minutes),
        };
        write!(f, "{}", text)
    }
}
