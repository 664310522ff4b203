//! Seeds the store with a small demo data set.

use crate::{
    libs::{
        habit::Habit,
        messages::Message,
        mood::MoodEntry,
        rollover,
        store::{Store, KEY_HABITS, KEY_MOODS},
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Reseed even if demo data was already loaded
    #[arg(long)]
    force: bool,
}

/// Replaces the habit and mood collections with the demo set. Runs once
/// per store; `--force` repeats it, overwriting whatever is there.
pub fn cmd(args: DemoArgs) -> Result<()> {
    let mut store = Store::open()?;
    rollover::check_and_reset(&mut store)?;

    if store.demo_data_loaded() && !args.force {
        msg_info!(Message::DemoAlreadyLoaded);
        return Ok(());
    }

    let habits = vec![
        Habit::countable("Drink Water", 8),
        Habit::single("Exercise"),
        Habit::single("Meditate"),
    ];
    let moods = vec![
        MoodEntry::new("😊", Some("Feeling good today!".to_string())),
        MoodEntry::new("😄", Some("Great workout!".to_string())),
        MoodEntry::new("😐", Some("Just okay".to_string())),
    ];

    store.save_collection(KEY_HABITS, &habits)?;
    store.save_collection(KEY_MOODS, &moods)?;
    store.set_demo_data_loaded(true)?;

    msg_success!(Message::DemoDataLoaded);
    Ok(())
}
