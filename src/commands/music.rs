//! Music engagement command.
//!
//! One-shot quick logs, a detailed log wizard, a focused-listening timer,
//! and weekly statistics. Quick actions credit fixed minute amounts so a
//! session can be recorded in a single keystroke-sized command.

use crate::{
    libs::{
        messages::Message,
        music::{self, MusicAction, MusicLog, EMOTIONS},
        rollover,
        store::{Store, KEY_MUSIC_LOGS},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::time::Duration;
use tokio::time;

#[derive(Debug, Args)]
pub struct MusicArgs {
    #[command(subcommand)]
    command: Option<MusicCommand>,
}

#[derive(Debug, Subcommand)]
enum MusicCommand {
    /// Quick-log 10 minutes of listening
    Listen,
    /// Quick-log 10 minutes of singing
    Sing,
    /// Quick-log a playlist minute
    Playlist,
    /// Log a session with song, emotion, and intensity
    Log {
        /// Song title
        #[arg(short, long)]
        song: Option<String>,
        /// How it felt
        #[arg(short, long)]
        emotion: Option<String>,
        /// Intensity from 1 to 10
        #[arg(short, long)]
        intensity: Option<u32>,
        /// Session length in minutes
        #[arg(short, long)]
        minutes: Option<u32>,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Focused listening timer that logs the session when it finishes
    Timer {
        /// Timer length in minutes
        #[arg(short, long, default_value_t = 10)]
        minutes: u32,
    },
    /// Weekly minutes and day streak
    Stats,
    /// List recent music logs
    List {
        /// How many days back to show
        #[arg(short, long, default_value_t = 7)]
        days: i64,
    },
}

pub async fn cmd(args: MusicArgs) -> Result<()> {
    let mut store = Store::open()?;
    rollover::check_and_reset(&mut store)?;

    match args.command {
        Some(MusicCommand::Listen) => handle_quick(&mut store, MusicAction::Listen),
        Some(MusicCommand::Sing) => handle_quick(&mut store, MusicAction::Sing),
        Some(MusicCommand::Playlist) => handle_quick(&mut store, MusicAction::Playlist),
        Some(MusicCommand::Log { song, emotion, intensity, minutes, notes }) => {
            handle_log(&mut store, song, emotion, intensity, minutes, notes)
        }
        Some(MusicCommand::Timer { minutes }) => handle_timer(&mut store, minutes).await,
        Some(MusicCommand::Stats) => handle_stats(&store),
        Some(MusicCommand::List { days }) => handle_list(&store, days),
        None => handle_interactive(&mut store).await,
    }
}

fn handle_quick(store: &mut Store, action: MusicAction) -> Result<()> {
    let log = MusicLog::quick(action);
    let minutes = log.minutes;

    let mut logs: Vec<MusicLog> = store.load_collection_or_warn(KEY_MUSIC_LOGS);
    logs.push(log);
    store.save_collection(KEY_MUSIC_LOGS, &logs)?;

    msg_success!(Message::MusicLogged(action.to_string(), minutes));
    Ok(())
}

fn handle_log(
    store: &mut Store,
    song: Option<String>,
    emotion: Option<String>,
    intensity: Option<u32>,
    minutes: Option<u32>,
    notes: Option<String>,
) -> Result<()> {
    // No flags at all means the wizard walks through every field.
    let wizard = song.is_none()
        && emotion.is_none()
        && intensity.is_none()
        && minutes.is_none()
        && notes.is_none();

    let (song, emotion, intensity, minutes, notes) = if wizard {
        let song: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSongTitle.to_string())
            .allow_empty(true)
            .interact_text()?;

        let mut emotion_options = vec!["(none)"];
        emotion_options.extend(EMOTIONS);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectMusicEmotion.to_string())
            .items(&emotion_options)
            .interact()?;
        let emotion = if selection == 0 {
            None
        } else {
            Some(emotion_options[selection].to_string())
        };

        let intensity: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMusicIntensity.to_string())
            .default(5)
            .interact_text()?;

        let minutes: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMusicMinutes.to_string())
            .default(10)
            .interact_text()?;

        let notes: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMusicNotes.to_string())
            .allow_empty(true)
            .interact_text()?;

        (blank_to_none(song), emotion, Some(intensity), minutes, blank_to_none(notes))
    } else {
        (
            song.and_then(blank_to_none),
            emotion.and_then(blank_to_none),
            intensity,
            minutes.unwrap_or(10),
            notes.and_then(blank_to_none),
        )
    };

    if let Some(value) = intensity {
        if !(1..=10).contains(&value) {
            msg_error!(Message::MusicIntensityRange);
            return Ok(());
        }
    }

    let log = MusicLog::detailed(minutes, song, emotion, intensity, notes);
    let mut logs: Vec<MusicLog> = store.load_collection_or_warn(KEY_MUSIC_LOGS);
    logs.push(log);
    store.save_collection(KEY_MUSIC_LOGS, &logs)?;

    msg_success!(Message::MusicLogged(MusicAction::Log.to_string(), minutes));
    Ok(())
}

async fn handle_timer(store: &mut Store, minutes: u32) -> Result<()> {
    msg_info!(Message::TimerStarted(minutes as u64));

    let finished = tokio::select! {
        _ = time::sleep(Duration::from_secs(minutes as u64 * 60)) => true,
        _ = tokio::signal::ctrl_c() => false,
    };

    if finished {
        let mut logs: Vec<MusicLog> = store.load_collection_or_warn(KEY_MUSIC_LOGS);
        logs.push(MusicLog::new(MusicAction::Timer, minutes));
        store.save_collection(KEY_MUSIC_LOGS, &logs)?;
        msg_success!(Message::TimerFinished(minutes as u64), true);
    } else {
        msg_info!(Message::TimerCancelled, true);
    }
    Ok(())
}

fn handle_stats(store: &Store) -> Result<()> {
    let logs: Vec<MusicLog> = store.load_collection_or_warn(KEY_MUSIC_LOGS);
    if logs.is_empty() {
        msg_info!(Message::NoMusicLogs);
        return Ok(());
    }

    let stats = music::stats(&logs);
    msg_print!(Message::MusicStatsHeader, true);
    msg_print!(Message::MusicWeekTotal(stats.week_minutes));
    msg_print!(Message::MusicStreak(stats.day_streak));
    Ok(())
}

fn handle_list(store: &Store, days: i64) -> Result<()> {
    let logs: Vec<MusicLog> = store.load_collection_or_warn(KEY_MUSIC_LOGS);
    let recent = music::logs_last_days(&logs, days);

    if recent.is_empty() {
        msg_info!(Message::NoMusicLogs);
        return Ok(());
    }

    msg_print!(Message::MusicLogsHeader(days), true);
    View::music_logs(&recent)?;
    Ok(())
}

async fn handle_interactive(store: &mut Store) -> Result<()> {
    let options = vec![
        "Quick log: listen",
        "Quick log: sing",
        "Quick log: playlist",
        "Detailed log",
        "Start timer",
        "Stats",
        "List logs",
    ];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectMusicAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => handle_quick(store, MusicAction::Listen),
        1 => handle_quick(store, MusicAction::Sing),
        2 => handle_quick(store, MusicAction::Playlist),
        3 => handle_log(store, None, None, None, None, None),
        4 => handle_timer(store, 10).await,
        5 => handle_stats(store),
        6 => handle_list(store, 7),
        _ => Ok(()),
    }
}

fn blank_to_none(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
