//! Daily habit management command.
//!
//! Covers the full habit lifecycle: creating single or countable goals,
//! marking and unmarking daily progress, counting toward targets, editing,
//! and deletion. Every invocation runs the day-rollover check first, so
//! progress shown and mutated here always belongs to the current day.

use crate::{
    libs::{
        habit::{self, Habit, HabitGoal},
        messages::Message,
        rollover,
        store::{Store, KEY_HABITS},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

const GOAL_OPTIONS: [&str; 2] = ["Done / not done", "Count toward a target"];

#[derive(Debug, Args)]
pub struct HabitArgs {
    #[command(subcommand)]
    command: Option<HabitCommand>,
}

#[derive(Debug, Subcommand)]
enum HabitCommand {
    /// Add a new habit
    Add {
        /// Habit name
        name: Option<String>,
        /// Daily target count; omit for a done/not-done habit
        #[arg(short, long)]
        target: Option<u32>,
    },
    /// List all habits with today's progress
    List,
    /// Mark a done/not-done habit as completed for today
    Done {
        /// Habit name or ID
        habit: String,
    },
    /// Reset a habit's progress for today
    Undo {
        /// Habit name or ID
        habit: String,
    },
    /// Add one to a countable habit
    Up {
        /// Habit name or ID
        habit: String,
    },
    /// Remove one from a countable habit
    Down {
        /// Habit name or ID
        habit: String,
    },
    /// Edit a habit's name, goal, or target
    Edit {
        /// Habit name or ID
        habit: String,
    },
    /// Delete a habit
    Delete {
        /// Habit name or ID
        habit: String,
    },
}

pub fn cmd(args: HabitArgs) -> Result<()> {
    let mut store = Store::open()?;
    rollover::check_and_reset(&mut store)?;

    match args.command {
        Some(HabitCommand::Add { name, target }) => handle_add(&mut store, name, target),
        Some(HabitCommand::List) => handle_list(&store),
        Some(HabitCommand::Done { habit }) => handle_done(&mut store, &habit),
        Some(HabitCommand::Undo { habit }) => handle_undo(&mut store, &habit),
        Some(HabitCommand::Up { habit }) => handle_up(&mut store, &habit),
        Some(HabitCommand::Down { habit }) => handle_down(&mut store, &habit),
        Some(HabitCommand::Edit { habit }) => handle_edit(&mut store, &habit),
        Some(HabitCommand::Delete { habit }) => handle_delete(&mut store, &habit),
        None => handle_interactive(&mut store),
    }
}

fn handle_add(store: &mut Store, name: Option<String>, target: Option<u32>) -> Result<()> {
    let interactive = name.is_none();
    let name = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHabitName.to_string())
            .interact_text()?,
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        msg_error!(Message::HabitNameEmpty);
        return Ok(());
    }

    let habit = if let Some(target) = target {
        if target == 0 {
            msg_error!(Message::HabitTargetRange);
            return Ok(());
        }
        Habit::countable(&name, target)
    } else if interactive && prompt_goal_kind(0)? == 1 {
        let target: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHabitTarget.to_string())
            .interact_text()?;
        if target == 0 {
            msg_error!(Message::HabitTargetRange);
            return Ok(());
        }
        Habit::countable(&name, target)
    } else {
        Habit::single(&name)
    };

    let mut habits: Vec<Habit> = store.load_collection_or_warn(KEY_HABITS);
    habits.push(habit);
    store.save_collection(KEY_HABITS, &habits)?;

    msg_success!(Message::HabitCreated(name));
    Ok(())
}

fn handle_list(store: &Store) -> Result<()> {
    let habits: Vec<Habit> = store.load_collection_or_warn(KEY_HABITS);

    if habits.is_empty() {
        msg_info!(Message::NoHabitsFound);
        return Ok(());
    }

    msg_print!(Message::HabitsHeader, true);
    View::habits(&habits)?;

    let completed = habits.iter().filter(|h| h.completed_today()).count();
    msg_print!(Message::OverallCompletion(
        completed,
        habits.len(),
        habit::overall_completion(&habits)
    ));
    Ok(())
}

fn handle_done(store: &mut Store, ident: &str) -> Result<()> {
    let mut habits: Vec<Habit> = store.load_collection_or_warn(KEY_HABITS);
    let index = match habit::find_index(&habits, ident) {
        Some(index) => index,
        None => {
            msg_error!(Message::HabitNotFound(ident.to_string()));
            return Ok(());
        }
    };

    let name = habits[index].name.clone();
    if habits[index].counts().is_some() {
        msg_warning!(Message::HabitCountsProgress(name));
        return Ok(());
    }

    if habits[index].complete() {
        store.save_collection(KEY_HABITS, &habits)?;
        msg_success!(Message::HabitCompleted(name));
    } else {
        msg_info!(Message::HabitAlreadyCompleted(name));
    }
    Ok(())
}

fn handle_undo(store: &mut Store, ident: &str) -> Result<()> {
    let mut habits: Vec<Habit> = store.load_collection_or_warn(KEY_HABITS);
    let index = match habit::find_index(&habits, ident) {
        Some(index) => index,
        None => {
            msg_error!(Message::HabitNotFound(ident.to_string()));
            return Ok(());
        }
    };

    habits[index].uncomplete();
    let name = habits[index].name.clone();
    store.save_collection(KEY_HABITS, &habits)?;

    msg_success!(Message::HabitUnmarked(name));
    Ok(())
}

fn handle_up(store: &mut Store, ident: &str) -> Result<()> {
    let mut habits: Vec<Habit> = store.load_collection_or_warn(KEY_HABITS);
    let index = match habit::find_index(&habits, ident) {
        Some(index) => index,
        None => {
            msg_error!(Message::HabitNotFound(ident.to_string()));
            return Ok(());
        }
    };

    let name = habits[index].name.clone();
    if habits[index].counts().is_none() {
        msg_warning!(Message::HabitNotCountable(name));
        return Ok(());
    }

    if habits[index].increment() {
        let (current, target) = habits[index].counts().unwrap_or((0, 0));
        store.save_collection(KEY_HABITS, &habits)?;
        msg_success!(Message::HabitIncremented(name, current, target));
    } else {
        msg_info!(Message::HabitAtTarget(name));
    }
    Ok(())
}

fn handle_down(store: &mut Store, ident: &str) -> Result<()> {
    let mut habits: Vec<Habit> = store.load_collection_or_warn(KEY_HABITS);
    let index = match habit::find_index(&habits, ident) {
        Some(index) => index,
        None => {
            msg_error!(Message::HabitNotFound(ident.to_string()));
            return Ok(());
        }
    };

    let name = habits[index].name.clone();
    if habits[index].counts().is_none() {
        msg_warning!(Message::HabitNotCountable(name));
        return Ok(());
    }

    if habits[index].decrement() {
        let (current, target) = habits[index].counts().unwrap_or((0, 0));
        store.save_collection(KEY_HABITS, &habits)?;
        msg_success!(Message::HabitDecremented(name, current, target));
    } else {
        msg_info!(Message::HabitAtZero(name));
    }
    Ok(())
}

fn handle_edit(store: &mut Store, ident: &str) -> Result<()> {
    let mut habits: Vec<Habit> = store.load_collection_or_warn(KEY_HABITS);
    let index = match habit::find_index(&habits, ident) {
        Some(index) => index,
        None => {
            msg_error!(Message::HabitNotFound(ident.to_string()));
            return Ok(());
        }
    };
    let current_habit = habits[index].clone();

    msg_print!(Message::EditingHabit(current_habit.name.clone()), true);

    let new_name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptHabitName.to_string())
        .default(current_habit.name.clone())
        .interact_text()?;
    let new_name = new_name.trim().to_string();
    if new_name.is_empty() {
        msg_error!(Message::HabitNameEmpty);
        return Ok(());
    }

    let goal_default = match current_habit.goal {
        HabitGoal::Single { .. } => 0,
        HabitGoal::Countable { .. } => 1,
    };
    let new_goal = if prompt_goal_kind(goal_default)? == 1 {
        let default_target = current_habit.counts().map(|(_, t)| t).unwrap_or(1);
        let target: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHabitTarget.to_string())
            .default(default_target)
            .interact_text()?;
        if target == 0 {
            msg_error!(Message::HabitTargetRange);
            return Ok(());
        }
        // Progress carries over; a shrunk target clamps it, a completed
        // single goal becomes one step of the count.
        let current = match current_habit.goal {
            HabitGoal::Countable { current, .. } => current.min(target),
            HabitGoal::Single { completed } => {
                if completed {
                    1
                } else {
                    0
                }
            }
        };
        HabitGoal::Countable { current, target }
    } else {
        // Any progress today means the thing was done at least once.
        let completed = match current_habit.goal {
            HabitGoal::Single { completed } => completed,
            HabitGoal::Countable { current, .. } => current >= 1,
        };
        HabitGoal::Single { completed }
    };

    habits[index].name = new_name.clone();
    habits[index].goal = new_goal;
    store.save_collection(KEY_HABITS, &habits)?;

    msg_success!(Message::HabitUpdated(new_name));
    Ok(())
}

fn handle_delete(store: &mut Store, ident: &str) -> Result<()> {
    let mut habits: Vec<Habit> = store.load_collection_or_warn(KEY_HABITS);
    let index = match habit::find_index(&habits, ident) {
        Some(index) => index,
        None => {
            msg_error!(Message::HabitNotFound(ident.to_string()));
            return Ok(());
        }
    };
    let name = habits[index].name.clone();

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmHabitDelete(name.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        habits.remove(index);
        store.save_collection(KEY_HABITS, &habits)?;
        msg_success!(Message::HabitDeleted(name));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive(store: &mut Store) -> Result<()> {
    let options = vec![
        "Add habit",
        "List habits",
        "Mark done",
        "Reset today",
        "Count up",
        "Count down",
        "Edit habit",
        "Delete habit",
    ];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectHabitAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => handle_add(store, None, None),
        1 => handle_list(store),
        2 => match select_habit(store)? {
            Some(name) => handle_done(store, &name),
            None => Ok(()),
        },
        3 => match select_habit(store)? {
            Some(name) => handle_undo(store, &name),
            None => Ok(()),
        },
        4 => match select_habit(store)? {
            Some(name) => handle_up(store, &name),
            None => Ok(()),
        },
        5 => match select_habit(store)? {
            Some(name) => handle_down(store, &name),
            None => Ok(()),
        },
        6 => match select_habit(store)? {
            Some(name) => handle_edit(store, &name),
            None => Ok(()),
        },
        7 => match select_habit(store)? {
            Some(name) => handle_delete(store, &name),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

fn prompt_goal_kind(default: usize) -> Result<usize> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectHabitGoal.to_string())
        .items(&GOAL_OPTIONS)
        .default(default)
        .interact()?;
    Ok(selection)
}

fn select_habit(store: &Store) -> Result<Option<String>> {
    let habits: Vec<Habit> = store.load_collection_or_warn(KEY_HABITS);
    if habits.is_empty() {
        msg_info!(Message::NoHabitsFound);
        return Ok(None);
    }

    let labels: Vec<String> = habits
        .iter()
        .map(|h| format!("{} ({})", h.name, h.today_label()))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectHabit.to_string())
        .items(&labels)
        .interact()?;

    Ok(Some(habits[selection].id.clone()))
}
