//! Reading sessions feed a shared countable habit.

use anyhow::Result;

use crate::libs::habit::{Habit, HabitGoal};
use crate::libs::store::{Store, KEY_HABITS};

/// Habit all reading sessions are credited against, matched by name
/// case-insensitively.
pub const READING_HABIT_NAME: &str = "Reading";

/// Credits one reading session against the reading habit and persists the
/// list. A missing habit is created as countable with a target of one; one
/// recreated as a single goal converts back to countable with its progress
/// restarted at zero. At the target the count stays put but the session is
/// still reported, so the caller always gets the progress after the
/// attempt.
pub fn log_session(store: &mut Store) -> Result<(u32, u32)> {
    let mut habits: Vec<Habit> = store.load_collection_or_warn(KEY_HABITS);
    let index = match habits
        .iter()
        .position(|h| h.name.eq_ignore_ascii_case(READING_HABIT_NAME))
    {
        Some(index) => index,
        None => {
            habits.push(Habit::countable(READING_HABIT_NAME, 1));
            habits.len() - 1
        }
    };

    let habit = &mut habits[index];
    if let HabitGoal::Single { .. } = habit.goal {
        habit.goal = HabitGoal::Countable { current: 0, target: 1 };
    }
    habit.increment();
    let progress = habit.counts().unwrap_or((0, 1));

    store.save_collection(KEY_HABITS, &habits)?;
    Ok(progress)
}
