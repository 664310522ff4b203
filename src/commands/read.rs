//! Reading command: sessions, a reading timer, and free-form notes.
//!
//! Sessions are credited to the shared reading habit, so finishing an
//! article or a book chapter moves the same daily goal forward no matter
//! where the reading happened.

use crate::{
    libs::{
        messages::Message,
        note::ReadingNote,
        reading, rollover,
        store::{Store, KEY_READING_NOTES},
        view::View,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::time::Duration;
use tokio::time;

#[derive(Debug, Args)]
pub struct ReadArgs {
    #[command(subcommand)]
    command: Option<ReadCommand>,
}

#[derive(Debug, Subcommand)]
enum ReadCommand {
    /// Log a finished reading session
    Log,
    /// Reading timer that logs a session when it finishes
    Timer {
        /// Timer length in minutes
        #[arg(short, long, default_value_t = 15)]
        minutes: u32,
    },
    /// Save a reading note
    Note {
        /// Note text
        text: Option<String>,
    },
    /// List saved notes
    Notes,
}

pub async fn cmd(args: ReadArgs) -> Result<()> {
    let mut store = Store::open()?;
    rollover::check_and_reset(&mut store)?;

    match args.command {
        Some(ReadCommand::Log) => handle_log(&mut store),
        Some(ReadCommand::Timer { minutes }) => handle_timer(&mut store, minutes).await,
        Some(ReadCommand::Note { text }) => handle_note(&mut store, text),
        Some(ReadCommand::Notes) => handle_notes(&store),
        None => handle_interactive(&mut store).await,
    }
}

fn handle_log(store: &mut Store) -> Result<()> {
    let (current, target) = reading::log_session(store)?;
    msg_success!(Message::ReadingSessionLogged(current, target));
    Ok(())
}

async fn handle_timer(store: &mut Store, minutes: u32) -> Result<()> {
    msg_info!(Message::TimerStarted(minutes as u64));

    let finished = tokio::select! {
        _ = time::sleep(Duration::from_secs(minutes as u64 * 60)) => true,
        _ = tokio::signal::ctrl_c() => false,
    };

    if finished {
        msg_success!(Message::TimerFinished(minutes as u64), true);
        handle_log(store)?;
    } else {
        msg_info!(Message::TimerCancelled, true);
    }
    Ok(())
}

fn handle_note(store: &mut Store, text: Option<String>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNoteText.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    let text = text.trim().to_string();
    if text.is_empty() {
        msg_warning!(Message::NoteEmpty);
        return Ok(());
    }

    let mut notes: Vec<ReadingNote> = store.load_collection_or_warn(KEY_READING_NOTES);
    // Newest notes live at the front of the stored list.
    notes.insert(0, ReadingNote::new(&text));
    store.save_collection(KEY_READING_NOTES, &notes)?;

    msg_success!(Message::NoteSaved);
    Ok(())
}

fn handle_notes(store: &Store) -> Result<()> {
    let notes: Vec<ReadingNote> = store.load_collection_or_warn(KEY_READING_NOTES);

    if notes.is_empty() {
        msg_info!(Message::NoNotesFound);
        return Ok(());
    }

    msg_print!(Message::NotesHeader, true);
    View::notes(&notes)?;
    Ok(())
}

async fn handle_interactive(store: &mut Store) -> Result<()> {
    let options = vec!["Log session", "Start timer", "Add note", "List notes"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectReadAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => handle_log(store),
        1 => handle_timer(store, 15).await,
        2 => handle_note(store, None),
        3 => handle_notes(store),
        _ => Ok(()),
    }
}
