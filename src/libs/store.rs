//! JSON-backed key-value store for all persisted application data.
//!
//! Everything ritmo remembers lives in a single `store.json` document under
//! the platform data directory: one key per record collection (habits,
//! moods, music logs, reading notes) plus scalar settings keys with typed
//! accessors and hard-coded defaults. The store is constructed per command
//! and passed explicitly to every consumer.
//!
//! ## Persistence Model
//!
//! - Every save replaces the whole collection under its key and rewrites
//!   the document atomically (temp file + rename).
//! - A missing file is an empty store; a file that is not a JSON object is
//!   a hard error.
//! - A missing collection key loads as empty; a present but undecodable
//!   value surfaces as [`StoreError::Corrupt`] so callers can decide
//!   whether to warn, ignore, or reset.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow, msg_warning};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::path::PathBuf;
use thiserror::Error;

pub const STORE_FILE_NAME: &str = "store.json";

// Collection keys
pub const KEY_HABITS: &str = "habits_json";
pub const KEY_MOODS: &str = "moods_json";
pub const KEY_MUSIC_LOGS: &str = "music_logs_json";
pub const KEY_READING_NOTES: &str = "reading_notes_json";

// Scalar settings keys
const KEY_HYDRATION_ENABLED: &str = "hydration_enabled";
const KEY_HYDRATION_INTERVAL: &str = "hydration_interval_minutes";
const KEY_THEME_PRIMARY_COLOR: &str = "theme_primary_color_hex";
const KEY_APP_NAME: &str = "app_name";
const KEY_PROFILE_NAME: &str = "profile_name";
const KEY_PROFILE_EMAIL: &str = "profile_email";
const KEY_LAST_OPEN_DATE: &str = "app_last_open_date";
const KEY_DEMO_DATA_LOADED: &str = "demo_data_loaded";
const KEY_ONBOARDING_DONE: &str = "onboarding_done";

// Default values
const DEFAULT_HYDRATION_ENABLED: bool = false;
const DEFAULT_HYDRATION_INTERVAL: u64 = 60; // 1 hour
const DEFAULT_PRIMARY_COLOR: &str = "#F8BBD9"; // Light Rose
const DEFAULT_APP_NAME: &str = "Habbit Tracker";

/// Error distinguishing a corrupt stored value from an absent one.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stored value under '{key}' is not a valid collection")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub struct Store {
    path: PathBuf,
    values: Map<String, Value>,
}

impl Store {
    /// Opens the store document, starting empty when the backing file does
    /// not exist yet. A file that is present but not a JSON object is a
    /// hard error; nothing is silently discarded.
    pub fn open() -> Result<Self> {
        let path = DataStorage::new().get_path(STORE_FILE_NAME)?;
        msg_debug!(format!("store path: {}", path.display()));
        let values = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(map)) => map,
                _ => return Err(msg_error_anyhow!(Message::StoreParseError(path.display().to_string()))),
            }
        } else {
            Map::new()
        };
        Ok(Self { path, values })
    }

    /// Serializes the full ordered sequence under `key` and rewrites the
    /// document. Order is preserved exactly as given.
    pub fn save_collection<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<()> {
        self.values.insert(key.to_string(), serde_json::to_value(items)?);
        self.persist()
    }

    /// Loads the ordered sequence stored under `key`. A missing key yields
    /// an empty collection; a present but undecodable value yields
    /// [`StoreError::Corrupt`].
    pub fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.values.get(key) {
            None => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Loads a collection, warning and substituting an empty working copy
    /// when the stored value is unreadable. The corrupt value stays on disk
    /// until the next save under the same key.
    pub fn load_collection_or_warn<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.load_collection(key) {
            Ok(items) => items,
            Err(err @ StoreError::Corrupt { .. }) => {
                msg_debug!(format!("{}", err));
                msg_warning!(Message::StoreCorruptKey(key.to_string()));
                Vec::new()
            }
        }
    }

    // Hydration settings
    pub fn hydration_enabled(&self) -> bool {
        self.bool_value(KEY_HYDRATION_ENABLED, DEFAULT_HYDRATION_ENABLED)
    }

    pub fn set_hydration_enabled(&mut self, enabled: bool) -> Result<()> {
        self.set_value(KEY_HYDRATION_ENABLED, Value::from(enabled))
    }

    pub fn hydration_interval_minutes(&self) -> u64 {
        self.values
            .get(KEY_HYDRATION_INTERVAL)
            .and_then(Value::as_u64)
            .unwrap_or(DEFAULT_HYDRATION_INTERVAL)
    }

    pub fn set_hydration_interval_minutes(&mut self, minutes: u64) -> Result<()> {
        self.set_value(KEY_HYDRATION_INTERVAL, Value::from(minutes))
    }

    // Theme settings
    pub fn theme_color(&self) -> String {
        self.string_value(KEY_THEME_PRIMARY_COLOR, DEFAULT_PRIMARY_COLOR)
    }

    pub fn set_theme_color(&mut self, color_hex: &str) -> Result<()> {
        self.set_value(KEY_THEME_PRIMARY_COLOR, Value::from(color_hex))
    }

    pub fn app_name(&self) -> String {
        self.string_value(KEY_APP_NAME, DEFAULT_APP_NAME)
    }

    pub fn set_app_name(&mut self, name: &str) -> Result<()> {
        self.set_value(KEY_APP_NAME, Value::from(name))
    }

    // Profile
    pub fn profile_name(&self) -> String {
        self.string_value(KEY_PROFILE_NAME, "Your Name")
    }

    pub fn set_profile_name(&mut self, name: &str) -> Result<()> {
        self.set_value(KEY_PROFILE_NAME, Value::from(name))
    }

    pub fn profile_email(&self) -> String {
        self.string_value(KEY_PROFILE_EMAIL, "you@example.com")
    }

    pub fn set_profile_email(&mut self, email: &str) -> Result<()> {
        self.set_value(KEY_PROFILE_EMAIL, Value::from(email))
    }

    // Last open date for day rollover logic
    pub fn last_open_date(&self) -> Option<String> {
        self.values.get(KEY_LAST_OPEN_DATE).and_then(Value::as_str).map(str::to_string)
    }

    pub fn set_last_open_date(&mut self, date: &str) -> Result<()> {
        self.set_value(KEY_LAST_OPEN_DATE, Value::from(date))
    }

    // Demo data flag
    pub fn demo_data_loaded(&self) -> bool {
        self.bool_value(KEY_DEMO_DATA_LOADED, false)
    }

    pub fn set_demo_data_loaded(&mut self, loaded: bool) -> Result<()> {
        self.set_value(KEY_DEMO_DATA_LOADED, Value::from(loaded))
    }

    // Onboarding
    pub fn onboarding_done(&self) -> bool {
        self.bool_value(KEY_ONBOARDING_DONE, false)
    }

    pub fn set_onboarding_done(&mut self, done: bool) -> Result<()> {
        self.set_value(KEY_ONBOARDING_DONE, Value::from(done))
    }

    /// Empties the whole document and persists.
    pub fn clear_all(&mut self) -> Result<()> {
        self.values.clear();
        self.persist()
    }

    /// Removes the scalar settings keys, restoring defaults on next read.
    /// Record collections and the rollover marker are left untouched.
    pub fn clear_settings(&mut self) -> Result<()> {
        for key in [
            KEY_HYDRATION_ENABLED,
            KEY_HYDRATION_INTERVAL,
            KEY_THEME_PRIMARY_COLOR,
            KEY_APP_NAME,
            KEY_PROFILE_NAME,
            KEY_PROFILE_EMAIL,
            KEY_ONBOARDING_DONE,
        ] {
            self.values.remove(key);
        }
        self.persist()
    }

    fn bool_value(&self, key: &str, default: bool) -> bool {
        self.values.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    fn string_value(&self, key: &str, default: &str) -> String {
        self.values.get(key).and_then(Value::as_str).unwrap_or(default).to_string()
    }

    fn set_value(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.persist()
    }

    // Writes go through a temp file so a crash mid-write never truncates
    // the live document.
    fn persist(&self) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        let file = File::create(&tmp)?;
        serde_json::to_writer_pretty(file, &self.values)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
