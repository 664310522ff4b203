//! # Ritmo - Daily Habit, Mood & Wellness Tracking
//!
//! A command-line companion for building daily habits, journaling moods,
//! and keeping up small wellness rituals.
//!
//! ## Features
//!
//! - **Habit Tracking**: Single and countable daily goals with automatic
//!   day rollover
//! - **Mood Journal**: Emoji moods with notes, weekly summaries and trends
//! - **Music Logging**: Quick logs, a focus timer, and weekly statistics
//! - **Reading**: Session logging tied to a shared habit, plus free notes
//! - **Hydration Reminders**: A foreground reminder loop with presets
//! - **Data Export**: Export data to CSV, JSON, and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ritmo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
