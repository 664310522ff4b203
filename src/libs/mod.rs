//! Core library modules for the ritmo application.
//!
//! Serves as the main entry point for all ritmo library components, providing
//! a centralized access point to the application's core functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: JSON-backed store, data paths, messaging
//! - **Daily Records**: Habits, mood entries, music logs, reading notes
//! - **Daily Cycle**: Calendar-day rollover with automatic progress reset
//! - **User Interface**: Console rendering, data export, formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ritmo::libs::habit::Habit;
//! use ritmo::libs::store::{Store, KEY_HABITS};
//!
//! let mut store = Store::open()?;
//! let mut habits: Vec<Habit> = store.load_collection_or_warn(KEY_HABITS);
//! habits.push(Habit::countable("Drink Water", 8));
//! store.save_collection(KEY_HABITS, &habits)?;
//! # anyhow::Ok(())
//! ```

pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod habit;
pub mod messages;
pub mod mood;
pub mod music;
pub mod note;
pub mod reading;
pub mod rollover;
pub mod store;
pub mod view;
