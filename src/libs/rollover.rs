//! Day rollover: habit progress resets once per local calendar day.

use anyhow::Result;

use crate::libs::habit::{today_string, Habit};
use crate::libs::messages::Message;
use crate::libs::store::{Store, KEY_HABITS};
use crate::{msg_debug, msg_warning};

/// Resets habit progress when the stored day marker differs from today,
/// then moves the marker forward. Returns whether a reset ran. An
/// unreadable habit collection is left untouched on disk (only a warning
/// is printed), but the marker still advances so the next run does not
/// retry every time.
pub fn check_and_reset(store: &mut Store) -> Result<bool> {
    let today = today_string();
    if store.last_open_date().as_deref() == Some(today.as_str()) {
        return Ok(false);
    }

    let mut reset = false;
    match store.load_collection::<Habit>(KEY_HABITS) {
        Ok(mut habits) => {
            for habit in &mut habits {
                habit.reset_daily(&today);
            }
            store.save_collection(KEY_HABITS, &habits)?;
            reset = true;
        }
        Err(err) => {
            msg_debug!(format!("Rollover skipped habit reset: {}", err));
            msg_warning!(Message::StoreCorruptKey(KEY_HABITS.to_string()));
        }
    }

    store.set_last_open_date(&today)?;
    if reset {
        msg_debug!(Message::NewDayReset(today));
    }
    Ok(reset)
}
