//! Settings setup command.
//!
//! Runs an interactive wizard over three sections (profile, appearance,
//! hydration reminders), with flags for scripted use. `--delete` removes
//! the saved settings so everything falls back to defaults.

use crate::{
    libs::{messages::Message, rollover, store::Store},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

/// Theme palette offered by the wizard, as name/hex pairs.
const THEME_COLORS: [(&str, &str); 12] = [
    ("Rose", "#F8BBD9"),
    ("Pink", "#F4A6D1"),
    ("Purple", "#9C27B0"),
    ("Deep Purple", "#673AB7"),
    ("Indigo", "#3F51B5"),
    ("Blue", "#2196F3"),
    ("Cyan", "#00BCD4"),
    ("Green", "#4CAF50"),
    ("Light Green", "#8BC34A"),
    ("Amber", "#FFC107"),
    ("Orange", "#FF9800"),
    ("Red", "#F44336"),
];

/// Reminder interval presets, as label/minutes pairs.
const INTERVALS: [(&str, u64); 4] = [
    ("30 minutes", 30),
    ("1 hour", 60),
    ("2 hours", 120),
    ("3 hours", 180),
];

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove saved settings instead of configuring
    #[arg(short, long)]
    delete: bool,

    /// Profile name
    #[arg(long)]
    name: Option<String>,

    /// Profile email
    #[arg(long)]
    email: Option<String>,

    /// Application display name
    #[arg(long)]
    app_name: Option<String>,

    /// Theme color as #RRGGBB
    #[arg(long)]
    color: Option<String>,

    /// Hydration reminder interval in minutes
    #[arg(long)]
    interval: Option<u64>,

    /// Enable or disable hydration reminders
    #[arg(long)]
    hydration: Option<bool>,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    let mut store = Store::open()?;
    rollover::check_and_reset(&mut store)?;

    if args.delete {
        store.clear_settings()?;
        msg_success!(Message::SettingsRemoved);
        return Ok(());
    }

    // Any settings flag switches to scripted mode; the wizard only runs
    // on a bare `ritmo init`.
    let scripted = args.name.is_some()
        || args.email.is_some()
        || args.app_name.is_some()
        || args.color.is_some()
        || args.interval.is_some()
        || args.hydration.is_some();

    let applied = if scripted {
        apply_flags(&mut store, &args)?
    } else {
        run_wizard(&mut store)?
    };

    if applied {
        store.set_onboarding_done(true)?;
        msg_success!(Message::SettingsSaved);
    }
    Ok(())
}

fn apply_flags(store: &mut Store, args: &InitArgs) -> Result<bool> {
    if let Some(color) = &args.color {
        if !is_hex_color(color) {
            msg_error!(Message::InvalidHexColor(color.clone()));
            return Ok(false);
        }
    }
    if args.interval == Some(0) {
        msg_error!(Message::InvalidInterval);
        return Ok(false);
    }
    if let Some(app_name) = &args.app_name {
        if app_name.trim().is_empty() {
            msg_error!(Message::AppNameEmpty);
            return Ok(false);
        }
    }

    if let Some(name) = &args.name {
        store.set_profile_name(name)?;
    }
    if let Some(email) = &args.email {
        store.set_profile_email(email)?;
    }
    if let Some(app_name) = &args.app_name {
        store.set_app_name(app_name.trim())?;
    }
    if let Some(color) = &args.color {
        store.set_theme_color(color)?;
    }
    if let Some(interval) = args.interval {
        store.set_hydration_interval_minutes(interval)?;
    }
    if let Some(enabled) = args.hydration {
        store.set_hydration_enabled(enabled)?;
    }
    Ok(true)
}

fn run_wizard(store: &mut Store) -> Result<bool> {
    let sections = vec!["Profile", "Appearance", "Hydration reminders"];
    let selected = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectSettingsSections.to_string())
        .items(&sections)
        .interact()?;

    for &section in &selected {
        match section {
            0 => {
                let name: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptProfileName.to_string())
                    .default(store.profile_name())
                    .interact_text()?;
                let email: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptProfileEmail.to_string())
                    .default(store.profile_email())
                    .interact_text()?;
                store.set_profile_name(&name)?;
                store.set_profile_email(&email)?;
            }
            1 => {
                let app_name: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptAppName.to_string())
                    .default(store.app_name())
                    .interact_text()?;
                let app_name = app_name.trim().to_string();
                if app_name.is_empty() {
                    msg_error!(Message::AppNameEmpty);
                    return Ok(false);
                }

                let labels: Vec<String> = THEME_COLORS
                    .iter()
                    .map(|(name, hex)| format!("{} ({})", name, hex))
                    .collect();
                let current = store.theme_color();
                let default = THEME_COLORS
                    .iter()
                    .position(|(_, hex)| *hex == current)
                    .unwrap_or(0);
                let selection = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::SelectThemeColor.to_string())
                    .items(&labels)
                    .default(default)
                    .interact()?;

                store.set_app_name(&app_name)?;
                store.set_theme_color(THEME_COLORS[selection].1)?;
            }
            2 => {
                let enabled = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptHydrationEnabled.to_string())
                    .default(store.hydration_enabled())
                    .interact()?;
                store.set_hydration_enabled(enabled)?;

                if enabled {
                    let labels: Vec<&str> = INTERVALS.iter().map(|(label, _)| *label).collect();
                    let current = store.hydration_interval_minutes();
                    let default = INTERVALS
                        .iter()
                        .position(|(_, minutes)| *minutes == current)
                        .unwrap_or(1);
                    let selection = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::SelectHydrationInterval.to_string())
                        .items(&labels)
                        .default(default)
                        .interact()?;
                    store.set_hydration_interval_minutes(INTERVALS[selection].1)?;
                }
            }
            _ => {}
        }
    }
    Ok(true)
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
