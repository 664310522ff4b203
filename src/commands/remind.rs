//! Foreground hydration reminder loop.
//!
//! Prints a nudge at the configured interval until interrupted. The
//! enabled flag is re-read from disk before every nudge, so turning
//! reminders off in another terminal stops a running loop at its next
//! firing.

use crate::{
    libs::{messages::Message, rollover, store::Store},
    msg_error, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::time::Duration;
use tokio::time;

#[derive(Debug, Args)]
pub struct RemindArgs {
    /// Override the saved interval (minutes)
    #[arg(short, long)]
    interval: Option<u64>,
}

pub async fn cmd(args: RemindArgs) -> Result<()> {
    let mut store = Store::open()?;
    rollover::check_and_reset(&mut store)?;

    if !store.hydration_enabled() {
        msg_warning!(Message::RemindDisabled);
        return Ok(());
    }

    let interval = args.interval.unwrap_or_else(|| store.hydration_interval_minutes());
    if interval == 0 {
        msg_error!(Message::InvalidInterval);
        return Ok(());
    }

    msg_info!(Message::RemindStarted(interval));

    loop {
        tokio::select! {
            _ = time::sleep(Duration::from_secs(interval * 60)) => {}
            _ = tokio::signal::ctrl_c() => {
                msg_info!(Message::RemindStopped, true);
                return Ok(());
            }
        }

        let store = Store::open()?;
        if !store.hydration_enabled() {
            msg_warning!(Message::RemindDisabled);
            return Ok(());
        }
        msg_print!(Message::HydrationNudge, true);
    }
}
