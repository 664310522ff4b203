//! Mood journaling command.
//!
//! Logs how the user feels as an emoji plus an optional note, lists recent
//! entries, and renders the seven-day summary and per-day trend.

use crate::{
    libs::{
        formatter::format_timestamp,
        messages::Message,
        mood::{self, MoodEntry, MOOD_EMOJIS},
        rollover,
        store::{Store, KEY_MOODS},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct MoodArgs {
    #[command(subcommand)]
    command: Option<MoodCommand>,
}

#[derive(Debug, Subcommand)]
enum MoodCommand {
    /// Log how you feel right now
    Add {
        /// Mood emoji
        emoji: Option<String>,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List recent mood entries
    List {
        /// How many days back to show
        #[arg(short, long, default_value_t = 7)]
        days: i64,
    },
    /// Seven-day mood summary
    Summary,
    /// Entries-per-day trend for the last week
    Trend,
    /// Edit an entry's emoji and note
    Edit {
        /// Entry ID or ID prefix
        id: Option<String>,
    },
    /// Delete an entry
    Delete {
        /// Entry ID or ID prefix
        id: Option<String>,
    },
}

pub fn cmd(args: MoodArgs) -> Result<()> {
    let mut store = Store::open()?;
    rollover::check_and_reset(&mut store)?;

    match args.command {
        Some(MoodCommand::Add { emoji, note }) => handle_add(&mut store, emoji, note),
        Some(MoodCommand::List { days }) => handle_list(&store, days),
        Some(MoodCommand::Summary) => handle_summary(&store),
        Some(MoodCommand::Trend) => handle_trend(&store),
        Some(MoodCommand::Edit { id }) => handle_edit(&mut store, id),
        Some(MoodCommand::Delete { id }) => handle_delete(&mut store, id),
        None => handle_interactive(&mut store),
    }
}

fn handle_add(store: &mut Store, emoji: Option<String>, note: Option<String>) -> Result<()> {
    let interactive = emoji.is_none();
    let emoji = match emoji {
        Some(emoji) => emoji,
        None => {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::SelectMoodEmoji.to_string())
                .items(&MOOD_EMOJIS)
                .interact()?;
            MOOD_EMOJIS[selection].to_string()
        }
    };

    let note = match note {
        Some(note) => blank_to_none(note),
        None if interactive => {
            let text: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptMoodNote.to_string())
                .allow_empty(true)
                .interact_text()?;
            blank_to_none(text)
        }
        None => None,
    };

    let mut moods: Vec<MoodEntry> = store.load_collection_or_warn(KEY_MOODS);
    // Newest entries live at the front of the stored list.
    moods.insert(0, MoodEntry::new(&emoji, note));
    store.save_collection(KEY_MOODS, &moods)?;

    msg_success!(Message::MoodLogged(emoji));
    Ok(())
}

fn handle_list(store: &Store, days: i64) -> Result<()> {
    let moods: Vec<MoodEntry> = store.load_collection_or_warn(KEY_MOODS);
    let recent = mood::moods_last_days(&moods, days);

    if recent.is_empty() {
        msg_info!(Message::NoMoodsFound);
        return Ok(());
    }

    msg_print!(Message::MoodsHeader(days), true);
    View::moods(&recent)?;
    Ok(())
}

fn handle_summary(store: &Store) -> Result<()> {
    let moods: Vec<MoodEntry> = store.load_collection_or_warn(KEY_MOODS);
    println!("\n{}", mood::summary_text(&moods));
    Ok(())
}

fn handle_trend(store: &Store) -> Result<()> {
    let moods: Vec<MoodEntry> = store.load_collection_or_warn(KEY_MOODS);
    if moods.is_empty() {
        msg_info!(Message::NoMoodsFound);
        return Ok(());
    }

    msg_print!(Message::MoodTrendHeader, true);
    View::mood_trend(&mood::daily_counts(&moods, 7))?;
    Ok(())
}

fn handle_edit(store: &mut Store, id: Option<String>) -> Result<()> {
    let mut moods: Vec<MoodEntry> = store.load_collection_or_warn(KEY_MOODS);
    let index = match resolve_entry(&moods, id)? {
        Some(index) => index,
        None => return Ok(()),
    };
    let current = moods[index].clone();

    let emoji_default = MOOD_EMOJIS.iter().position(|e| *e == current.emoji).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectMoodEmoji.to_string())
        .items(&MOOD_EMOJIS)
        .default(emoji_default)
        .interact()?;
    let note: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMoodNote.to_string())
        .default(current.note.unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    // The entry keeps its id and timestamp.
    moods[index].emoji = MOOD_EMOJIS[selection].to_string();
    moods[index].note = blank_to_none(note);
    store.save_collection(KEY_MOODS, &moods)?;

    msg_success!(Message::MoodUpdated);
    Ok(())
}

fn handle_delete(store: &mut Store, id: Option<String>) -> Result<()> {
    let mut moods: Vec<MoodEntry> = store.load_collection_or_warn(KEY_MOODS);
    let index = match resolve_entry(&moods, id)? {
        Some(index) => index,
        None => return Ok(()),
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmMoodDelete.to_string())
        .default(false)
        .interact()?;

    if confirmed {
        moods.remove(index);
        store.save_collection(KEY_MOODS, &moods)?;
        msg_success!(Message::MoodDeleted);
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive(store: &mut Store) -> Result<()> {
    let options = vec![
        "Log mood",
        "List entries",
        "Weekly summary",
        "Weekly trend",
        "Edit entry",
        "Delete entry",
    ];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectMoodAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => handle_add(store, None, None),
        1 => handle_list(store, 7),
        2 => handle_summary(store),
        3 => handle_trend(store),
        4 => handle_edit(store, None),
        5 => handle_delete(store, None),
        _ => Ok(()),
    }
}

/// Finds an entry by ID or ID prefix, or lets the user pick one when no
/// ID was given. Prints the appropriate message and returns `None` when
/// nothing can be resolved.
fn resolve_entry(moods: &[MoodEntry], id: Option<String>) -> Result<Option<usize>> {
    if moods.is_empty() {
        msg_info!(Message::NoMoodsFound);
        return Ok(None);
    }

    match id {
        Some(ident) => {
            let index = moods.iter().position(|m| m.id == ident || m.id.starts_with(&ident));
            if index.is_none() {
                msg_error!(Message::MoodNotFound(ident));
            }
            Ok(index)
        }
        None => {
            let labels: Vec<String> = moods
                .iter()
                .map(|m| {
                    format!(
                        "{} {} {}",
                        format_timestamp(m.timestamp),
                        m.emoji,
                        m.note.clone().unwrap_or_default()
                    )
                })
                .collect();
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::SelectMoodEntry.to_string())
                .items(&labels)
                .interact()?;
            Ok(Some(selection))
        }
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
