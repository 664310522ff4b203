//! Convenient macros for application messaging and logging.
//!
//! This module provides the macros used for all user-facing output in ritmo.
//! The macros automatically handle the distinction between debug mode (with
//! structured logging through `tracing`) and normal mode (plain console
//! output), so command code never chooses an output channel itself.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is detected from environment variables and cached:
//! - **`RITMO_DEBUG`**: Explicit debug mode enablement
//! - **`RUST_LOG`**: Standard Rust logging configuration
//!
//! ## Macro Categories
//!
//! ### Display Macros
//! - **`msg_print!`**: General message display
//! - **`msg_success!`**: Success notifications with ✅ prefix
//! - **`msg_info!`**: Informational messages with ℹ️ prefix
//! - **`msg_warning!`**: Warning messages with ⚠️ prefix
//!
//! ### Error Handling Macros
//! - **`msg_error!`**: Error messages with ❌ prefix
//! - **`msg_error_anyhow!`**: Create anyhow::Error from messages
//! - **`msg_bail_anyhow!`**: Early return with error
//!
//! ### Debug Macros
//! - **`msg_debug!`**: Debug-only messages with 🔍 prefix
//!
//! ## Usage Examples
//!
//! ```rust
//! use ritmo::{msg_info, msg_success, msg_error};
//! use ritmo::libs::messages::Message;
//!
//! // Simple success message
//! msg_success!(Message::SettingsSaved);
//!
//! // Header with surrounding line breaks
//! msg_info!(Message::MusicStatsHeader, true);
//!
//! // Error message
//! msg_error!(Message::HabitNotFound("water".to_string()));
//! ```

use std::sync::OnceLock;

/// Cache for debug mode detection, filled on first access.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// Debug mode is considered enabled if either `RITMO_DEBUG` or `RUST_LOG`
/// is set in the environment. The result is cached with `OnceLock`, so the
/// environment is inspected only once per process.
///
/// All message macros consult this function to decide whether output goes
/// to the tracing subscriber or straight to stdout/stderr.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Check for application-specific debug flag
        std::env::var("RITMO_DEBUG").is_ok() ||
        // Check for standard Rust logging configuration
        std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a general message with automatic debug mode routing.
///
/// The plain form prints the message as-is; the `, true` form wraps it in
/// blank lines, which the commands use for section headers.
///
/// ```rust
/// use ritmo::msg_print;
/// use ritmo::libs::messages::Message;
///
/// msg_print!(Message::SummaryHeader("June 1, 2025".to_string()), true);
/// // Output: "\nDaily summary for June 1, 2025\n"
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix and automatic routing.
///
/// Used for positive confirmations: a habit added, a mood logged, an
/// export written.
///
/// ```rust
/// use ritmo::msg_success;
/// use ritmo::libs::messages::Message;
///
/// msg_success!(Message::HabitCreated("Drink Water".to_string()));
/// // Output: "✅ Habit 'Drink Water' added"
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix and automatic routing.
///
/// In normal mode errors go to stderr so they stay separable from data
/// output; in debug mode they go through `tracing::error!`.
///
/// ```rust
/// use ritmo::msg_error;
/// use ritmo::libs::messages::Message;
///
/// msg_error!(Message::MoodNotFound("a91f".to_string()));
/// // Output to stderr: "❌ No mood entry matches 'a91f'"
/// ```
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix and automatic routing.
///
/// Warnings flag situations that do not stop the command: unreadable
/// stored data that was skipped, a reminder loop started while disabled.
///
/// ```rust
/// use ritmo::msg_warning;
/// use ritmo::libs::messages::Message;
///
/// msg_warning!(Message::StoreCorruptKey("habits_json".to_string()));
/// // Output: "⚠️ Stored data under 'habits_json' is unreadable and was ignored"
/// ```
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix and automatic routing.
///
/// ```rust
/// use ritmo::msg_info;
/// use ritmo::libs::messages::Message;
///
/// msg_info!(Message::TimerStarted(15));
/// // Output: "ℹ️ Timer started for 15 min. Ctrl+C to cancel."
/// ```
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only message display with 🔍 prefix.
///
/// Shown only when debug mode is enabled; completely suppressed otherwise.
/// Used for internal detail like rollover detection and store paths.
///
/// ```rust
/// use ritmo::msg_debug;
///
/// msg_debug!(format!("store path: {}", "store.json"));
/// // Debug mode output: "🔍 store path: store.json"
/// // Normal mode output: (nothing)
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
///
/// For functions returning `Result<T, anyhow::Error>` that need to turn an
/// application message into a propagatable error.
///
/// ```rust
/// use ritmo::msg_error_anyhow;
/// use ritmo::libs::messages::Message;
///
/// let err = msg_error_anyhow!(Message::StoreParseError("store.json".to_string()));
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Early return with an error created from a message.
///
/// Equivalent to `return Err(msg_error_anyhow!(message))`.
///
/// ```rust
/// use ritmo::msg_bail_anyhow;
/// use ritmo::libs::messages::Message;
///
/// fn guard(value: &str) -> anyhow::Result<()> {
///     if !value.starts_with('#') {
///         msg_bail_anyhow!(Message::InvalidHexColor(value.to_string()));
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
