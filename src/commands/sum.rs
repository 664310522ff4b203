//! Daily summary command: today's habits, moods, and music at a glance.

use crate::{
    libs::{
        habit::{self, Habit},
        messages::Message,
        mood::MoodEntry,
        music::{self, MusicLog},
        rollover,
        store::{Store, KEY_HABITS, KEY_MOODS, KEY_MUSIC_LOGS},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let mut store = Store::open()?;
    rollover::check_and_reset(&mut store)?;

    let now = Local::now();
    msg_print!(Message::SummaryHeader(now.format("%B %-d, %Y").to_string()), true);

    let habits: Vec<Habit> = store.load_collection_or_warn(KEY_HABITS);
    if habits.is_empty() {
        msg_info!(Message::NoHabitsFound);
    } else {
        View::habits(&habits)?;
        let completed = habits.iter().filter(|h| h.completed_today()).count();
        msg_print!(Message::OverallCompletion(
            completed,
            habits.len(),
            habit::overall_completion(&habits)
        ));
    }

    let moods: Vec<MoodEntry> = store.load_collection_or_warn(KEY_MOODS);
    let today = now.date_naive();
    let today_moods: Vec<MoodEntry> = moods
        .into_iter()
        .filter(|m| m.recorded_date() == Some(today))
        .collect();
    if !today_moods.is_empty() {
        msg_print!(Message::TodayMoodsHeader, true);
        View::moods(&today_moods)?;
    }

    let logs: Vec<MusicLog> = store.load_collection_or_warn(KEY_MUSIC_LOGS);
    msg_print!(Message::TodayMusicMinutes(music::minutes_today(&logs)), true);

    Ok(())
}
